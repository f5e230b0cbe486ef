//! Transport layer: wire-format details for the gateway's form protocol.

mod send_sms;

pub use send_sms::encode_post_sms_form;
