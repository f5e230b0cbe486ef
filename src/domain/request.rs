use crate::domain::validation::ValidationError;
use crate::domain::value::{MessageText, RawPhoneNumber, SenderId};

#[derive(Debug, Clone)]
/// A `post_sms` request: one message delivered to one or more targets as a
/// single atomic submission.
///
/// Per-recipient outcomes are not observable; the gateway accepts or rejects
/// the whole list.
pub struct SendSms {
    targets: Vec<RawPhoneNumber>,
    message: MessageText,
    sender: Option<SenderId>,
}

impl SendSms {
    /// Create a validated request.
    ///
    /// `sender` is optional; when absent the gateway receives an empty
    /// `sender` field and substitutes the account default.
    pub fn new(
        targets: Vec<RawPhoneNumber>,
        message: MessageText,
        sender: Option<SenderId>,
    ) -> Result<Self, ValidationError> {
        if targets.is_empty() {
            return Err(ValidationError::Empty {
                field: RawPhoneNumber::FIELD,
            });
        }
        Ok(Self {
            targets,
            message,
            sender,
        })
    }

    pub fn targets(&self) -> &[RawPhoneNumber] {
        &self.targets
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn sender(&self) -> Option<&SenderId> {
        self.sender.as_ref()
    }
}
