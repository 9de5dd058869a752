//! Alert e-mail composition and SMTP delivery.

pub mod message;
pub mod smtp;

pub use message::alert_email;
pub use smtp::SmtpNotificationSender;
