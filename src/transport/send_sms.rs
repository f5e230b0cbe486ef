use crate::domain::{MessageText, Password, RawPhoneNumber, SendSms, SenderId, Username};

const ACTION_FIELD: &str = "action";
const ACTION_POST_SMS: &str = "post_sms";
const SMS_TYPE_FIELD: &str = "sms_type";

/// Encode credentials and a [`SendSms`] request into form parameters.
///
/// The gateway expects the fields in exactly this order: `action`,
/// `sms_type` (always empty), `target` (comma-joined), `sender` (empty when
/// absent), `user`, `pass`, `message`.
pub fn encode_post_sms_form(
    user: &Username,
    password: &Password,
    request: &SendSms,
) -> Vec<(String, String)> {
    let target = request
        .targets()
        .iter()
        .map(RawPhoneNumber::raw)
        .collect::<Vec<_>>()
        .join(",");
    let sender = request
        .sender()
        .map(SenderId::as_str)
        .unwrap_or_default()
        .to_owned();

    vec![
        (ACTION_FIELD.to_owned(), ACTION_POST_SMS.to_owned()),
        (SMS_TYPE_FIELD.to_owned(), String::new()),
        (RawPhoneNumber::FIELD.to_owned(), target),
        (SenderId::FIELD.to_owned(), sender),
        (Username::FIELD.to_owned(), user.as_str().to_owned()),
        (Password::FIELD.to_owned(), password.as_str().to_owned()),
        (
            MessageText::FIELD.to_owned(),
            request.message().as_str().to_owned(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> (Username, Password) {
        (
            Username::new("acct").unwrap(),
            Password::new("pwd").unwrap(),
        )
    }

    #[test]
    fn encode_form_params_in_gateway_order() {
        let (user, password) = auth();
        let request = SendSms::new(
            vec![RawPhoneNumber::new("79991234567").unwrap()],
            MessageText::new("Hello").unwrap(),
            Some(SenderId::new("TestSender").unwrap()),
        )
        .unwrap();

        let params = encode_post_sms_form(&user, &password, &request);

        assert_eq!(
            params,
            vec![
                ("action".to_owned(), "post_sms".to_owned()),
                ("sms_type".to_owned(), String::new()),
                ("target".to_owned(), "79991234567".to_owned()),
                ("sender".to_owned(), "TestSender".to_owned()),
                ("user".to_owned(), "acct".to_owned()),
                ("pass".to_owned(), "pwd".to_owned()),
                ("message".to_owned(), "Hello".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_joins_targets_with_commas() {
        let (user, password) = auth();
        let request = SendSms::new(
            vec![
                RawPhoneNumber::new("79991234567").unwrap(),
                RawPhoneNumber::new("74993221627").unwrap(),
            ],
            MessageText::new("hello").unwrap(),
            None,
        )
        .unwrap();

        let params = encode_post_sms_form(&user, &password, &request);
        assert!(
            params
                .iter()
                .any(|(k, v)| k == "target" && v == "79991234567,74993221627")
        );
    }

    #[test]
    fn encode_sends_empty_sender_when_absent() {
        let (user, password) = auth();
        let request = SendSms::new(
            vec![RawPhoneNumber::new("79991234567").unwrap()],
            MessageText::new("hello").unwrap(),
            None,
        )
        .unwrap();

        let params = encode_post_sms_form(&user, &password, &request);
        assert!(params.iter().any(|(k, v)| k == "sender" && v.is_empty()));
    }
}
