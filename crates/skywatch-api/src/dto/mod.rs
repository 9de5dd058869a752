//! Data transfer objects for API requests and responses.

pub mod request;
pub mod response;

use validator::Validate;

use skywatch_core::error::AppError;

/// Run `validator` rules on a request body.
///
/// Field errors are flattened into one message, sorted by field name.
pub fn validate_body<T: Validate>(body: &T) -> Result<(), AppError> {
    let Err(errors) = body.validate() else {
        return Ok(());
    };

    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => format!("{field}: {msg}"),
                None => format!("{field}: invalid value ({})", e.code),
            })
        })
        .collect();
    messages.sort();

    Err(AppError::validation(messages.join("; ")))
}
