//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod validation;
mod value;

pub use request::SendSms;
pub use validation::ValidationError;
pub use value::{MessageText, Password, PhoneNumber, RawPhoneNumber, SenderId, Username};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rejects_empty() {
        assert!(matches!(
            Username::new("   "),
            Err(ValidationError::Empty {
                field: Username::FIELD
            })
        ));
    }

    #[test]
    fn password_rejects_empty() {
        assert!(matches!(
            Password::new(""),
            Err(ValidationError::Empty {
                field: Password::FIELD
            })
        ));
    }

    #[test]
    fn phone_number_parses_with_region_and_trims() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::RU), " 79991234567 ").unwrap();
        assert_eq!(pn.raw(), "79991234567");
    }

    #[test]
    fn raw_phone_number_from_phone_number_uses_e164() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::RU), "79991234567").unwrap();
        let raw: RawPhoneNumber = pn.into();
        assert_eq!(raw.raw(), "+79991234567");
    }

    #[test]
    fn message_length_bounds_are_enforced() {
        assert!(MessageText::new("x").is_ok());
        assert!(MessageText::new("x".repeat(480)).is_ok());
        assert!(matches!(
            MessageText::new("x".repeat(481)),
            Err(ValidationError::MessageTooLong {
                max: 480,
                actual: 481
            })
        ));
        assert!(matches!(
            MessageText::new(""),
            Err(ValidationError::EmptyMessage)
        ));
    }

    #[test]
    fn send_sms_requires_at_least_one_target() {
        let msg = MessageText::new("hi").unwrap();
        let err = SendSms::new(Vec::new(), msg, None).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Empty {
                field: RawPhoneNumber::FIELD
            }
        ));
    }

    #[test]
    fn send_sms_keeps_target_order() {
        let targets = vec![
            RawPhoneNumber::new("79991234567").unwrap(),
            RawPhoneNumber::new("74993221627").unwrap(),
        ];
        let request = SendSms::new(targets, MessageText::new("hi").unwrap(), None).unwrap();
        assert_eq!(request.targets()[0].raw(), "79991234567");
        assert_eq!(request.targets()[1].raw(), "74993221627");
    }
}
