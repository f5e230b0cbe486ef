use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MessageTooLong { max: usize, actual: usize },
    EmptyMessage,
    Empty { field: &'static str },
    InvalidPhoneNumber { input: String },
    InvalidEndpoint { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MessageTooLong { max, actual } => {
                write!(f, "message is too long: {actual} characters (max {max})")
            }
            Self::EmptyMessage => write!(f, "message must not be empty"),
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::InvalidEndpoint { input } => write!(f, "invalid endpoint url: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::MessageTooLong {
            max: 480,
            actual: 481,
        };
        assert_eq!(
            err.to_string(),
            "message is too long: 481 characters (max 480)"
        );

        let err = ValidationError::EmptyMessage;
        assert_eq!(err.to_string(), "message must not be empty");

        let err = ValidationError::Empty { field: "target" };
        assert_eq!(err.to_string(), "target must not be empty");

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");

        let err = ValidationError::InvalidEndpoint {
            input: "not a url".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid endpoint url: not a url");
    }
}
