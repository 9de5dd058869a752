//! HTTP-level tests driving the router in-process.
//!
//! The database pool is lazy and never reached: every request here is
//! answered before a query would run, and jobs run over in-memory stores.

mod helpers;

mod admin_test;
mod auth_test;
mod health_test;
mod jobs_test;
mod weather_test;
