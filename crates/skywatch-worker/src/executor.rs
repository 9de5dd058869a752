//! Job executor: dispatches jobs to registered handlers.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{error, info};

use skywatch_core::error::AppError;

/// Trait for job handler implementations.
#[async_trait]
pub trait JobHandler: Send + Sync + std::fmt::Debug {
    /// The job type this handler processes.
    fn job_type(&self) -> &str;

    /// Run the job once and return its summary.
    async fn execute(&self) -> Result<Value, JobExecutionError>;
}

/// Error from job execution.
#[derive(Debug, thiserror::Error)]
pub enum JobExecutionError {
    /// Permanent failure: running again will not help.
    #[error("Permanent job failure: {0}")]
    Permanent(String),

    /// Transient failure: a later run may succeed.
    #[error("Transient job failure: {0}")]
    Transient(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(#[from] AppError),
}

impl From<JobExecutionError> for AppError {
    fn from(err: JobExecutionError) -> Self {
        match err {
            JobExecutionError::Permanent(msg) => AppError::not_found(msg),
            JobExecutionError::Transient(msg) => AppError::service_unavailable(msg),
            JobExecutionError::Internal(e) => e,
        }
    }
}

/// Dispatches jobs to the appropriate handler based on job type.
#[derive(Debug, Default)]
pub struct JobExecutor {
    handlers: BTreeMap<String, Arc<dyn JobHandler>>,
}

impl JobExecutor {
    /// Create an empty executor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a job handler, replacing any previous one for its type.
    pub fn register(&mut self, handler: Arc<dyn JobHandler>) {
        let job_type = handler.job_type().to_string();
        info!(job_type = %job_type, "Registered job handler");
        self.handlers.insert(job_type, handler);
    }

    /// Run the handler registered for `job_type`.
    ///
    /// The run happens on its own task: dropping the returned future (a
    /// timed-out request, a disconnected client) does not cancel it, and the
    /// handler always reaches the end of its work.
    pub async fn execute(&self, job_type: &str) -> Result<Value, JobExecutionError> {
        let handler = self.handlers.get(job_type).cloned().ok_or_else(|| {
            JobExecutionError::Permanent(format!(
                "No handler registered for job type '{job_type}'"
            ))
        })?;

        info!(job_type, "Executing job");
        tokio::spawn(async move { handler.execute().await })
            .await
            .map_err(|e| {
                error!(job_type, error = %e, "Job task did not complete");
                JobExecutionError::Internal(AppError::internal(format!(
                    "Job '{job_type}' did not complete: {e}"
                )))
            })?
    }

    /// Check if a handler is registered for a job type.
    pub fn has_handler(&self, job_type: &str) -> bool {
        self.handlers.contains_key(job_type)
    }

    /// Registered job types in name order.
    pub fn registered_types(&self) -> Vec<String> {
        self.handlers.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    use serde_json::json;

    use super::*;

    #[derive(Debug)]
    struct Echo;

    #[async_trait]
    impl JobHandler for Echo {
        fn job_type(&self) -> &str {
            "echo"
        }

        async fn execute(&self) -> Result<Value, JobExecutionError> {
            Ok(json!({ "ok": true }))
        }
    }

    #[tokio::test]
    async fn dispatches_by_type() {
        let mut executor = JobExecutor::new();
        executor.register(Arc::new(Echo));

        assert!(executor.has_handler("echo"));
        assert_eq!(executor.registered_types(), ["echo"]);
        assert_eq!(executor.execute("echo").await.unwrap(), json!({ "ok": true }));
    }

    #[derive(Debug)]
    struct Slow {
        finished: Arc<AtomicBool>,
    }

    #[async_trait]
    impl JobHandler for Slow {
        fn job_type(&self) -> &str {
            "slow"
        }

        async fn execute(&self) -> Result<Value, JobExecutionError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            self.finished.store(true, Ordering::SeqCst);
            Ok(json!({ "done": true }))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_caller_does_not_cancel_the_run() {
        let finished = Arc::new(AtomicBool::new(false));
        let mut executor = JobExecutor::new();
        executor.register(Arc::new(Slow {
            finished: Arc::clone(&finished),
        }));

        let outcome = tokio::time::timeout(Duration::from_secs(5), executor.execute("slow")).await;
        assert!(outcome.is_err());
        assert!(!finished.load(Ordering::SeqCst));

        tokio::time::sleep(Duration::from_secs(120)).await;
        assert!(finished.load(Ordering::SeqCst));
    }

    #[derive(Debug)]
    struct Panics;

    #[async_trait]
    impl JobHandler for Panics {
        fn job_type(&self) -> &str {
            "panics"
        }

        async fn execute(&self) -> Result<Value, JobExecutionError> {
            panic!("boom");
        }
    }

    #[tokio::test]
    async fn panicking_job_is_internal_error() {
        let mut executor = JobExecutor::new();
        executor.register(Arc::new(Panics));

        let err = executor.execute("panics").await.unwrap_err();
        assert!(matches!(err, JobExecutionError::Internal(_)));
    }

    #[tokio::test]
    async fn unknown_type_is_permanent() {
        let err = JobExecutor::new().execute("nope").await.unwrap_err();
        assert!(matches!(err, JobExecutionError::Permanent(_)));

        let app: AppError = err.into();
        assert_eq!(app.kind, skywatch_core::error::ErrorKind::NotFound);
    }
}
