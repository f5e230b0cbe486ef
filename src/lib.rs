//! Typed Rust client for the Quick Telecom (qtelecom.ru) HTTP SMS gateway.
//!
//! The design follows a three-layer split: a domain layer of strong types, a
//! transport layer for wire-format details, and a small client layer
//! orchestrating requests.
//!
//! ```rust,no_run
//! use qtelecom::{Auth, MessageText, QtClient, RawPhoneNumber, SendSms};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), qtelecom::QtError> {
//!     let client = QtClient::new(Auth::new("account", "secret")?);
//!     let phone = RawPhoneNumber::new("79991234567")?;
//!     let msg = MessageText::new("hello")?;
//!     let request = SendSms::new(vec![phone], msg, None)?;
//!     client.post_sms(request).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Auth, QtClient, QtClientBuilder, QtError};
pub use domain::{
    MessageText, Password, PhoneNumber, RawPhoneNumber, SendSms, SenderId, Username,
    ValidationError,
};
