use std::fmt::{Display, Formatter};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DnsError>;

/// Errors produced while encoding or decoding a message.
///
/// Decoding is all-or-nothing: whenever one of these is returned no part of
/// the message is handed back to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnsError {
    #[error("message is {len} bytes, a header needs 12")]
    TruncatedHeader { len: usize },

    #[error("message ended at offset {offset} while {needed} more bytes were expected")]
    TruncatedMessage { offset: usize, needed: usize },

    #[error("compression pointer at offset {at} refers to offset {target}")]
    MalformedPointer { at: usize, target: usize },

    #[error("more than {max} compression pointers followed while reading a name")]
    PointerLoop { max: usize },

    #[error("domain name is {len} octets long, the limit is 255")]
    NameTooLong { len: usize },

    #[error("label {label:?} is {len} bytes long, the limit is 63")]
    LabelTooLong { label: String, len: usize },

    #[error("domain name is empty")]
    EmptyName,

    #[error("unsupported label type 0x{0:02x}")]
    UnsupportedLabel(u8),

    #[error("record of type {rtype} declares {declared} bytes of rdata but {consumed} were read")]
    RDataLengthMismatch { rtype: u16, declared: u16, consumed: usize },

    #[error("message is {len} bytes, the limit is {max}")]
    MessageTooLarge { len: usize, max: usize },

    #[error("{count} entries do not fit a 16 bit section count")]
    TooManyEntries { count: usize },

    #[error("validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

impl DnsError {
    /// Reports whether the buffer simply ran out of bytes.
    pub fn is_truncated(&self) -> bool {
        matches!(self, DnsError::TruncatedHeader { .. } | DnsError::TruncatedMessage { .. })
    }
}

/// A response that decoded fine but does not answer the request it was
/// paired with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("response {field} is {actual}, expected {expected}")]
    Mismatch { field: Field, expected: u16, actual: u16 },

    #[error("response carries no answers")]
    NoAnswer,

    #[error("question {index}: response name {actual:?} does not match request name {expected:?}")]
    QuestionName { index: usize, expected: String, actual: String },

    #[error("question {index}: response type {actual} does not match request type {expected}")]
    QuestionType { index: usize, expected: u16, actual: u16 },

    #[error("question {index}: response class {actual} does not match request class {expected}")]
    QuestionClass { index: usize, expected: u16, actual: u16 },
}

impl ValidationError {
    pub fn field(&self) -> Option<Field> {
        match self {
            ValidationError::Mismatch { field, .. } => Some(*field),
            ValidationError::NoAnswer => Some(Field::AnswerCount),
            _ => None,
        }
    }
}

/// Header fields the validator compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    QuestionCount,
    AnswerCount,
    AuthorityCount,
    AdditionalCount,
    Qr,
    Opcode,
    Authoritative,
    Truncated,
    RecursionDesired,
    RecursionAvailable,
    Reserved,
    ResultCode,
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Id => "id",
            Field::QuestionCount => "qdcount",
            Field::AnswerCount => "ancount",
            Field::AuthorityCount => "nscount",
            Field::AdditionalCount => "arcount",
            Field::Qr => "qr",
            Field::Opcode => "opcode",
            Field::Authoritative => "aa",
            Field::Truncated => "tc",
            Field::RecursionDesired => "rd",
            Field::RecursionAvailable => "ra",
            Field::Reserved => "z",
            Field::ResultCode => "rcode",
        };

        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn truncation_kinds() {
        assert!(DnsError::TruncatedHeader { len: 3 }.is_truncated());
        assert!(DnsError::TruncatedMessage { offset: 20, needed: 2 }.is_truncated());
        assert!(!DnsError::EmptyName.is_truncated());
    }

    #[test]
    fn validation_messages() {
        let err = ValidationError::Mismatch { field: Field::Id, expected: 1, actual: 2 };
        assert_eq!(err.to_string(), "response id is 2, expected 1");
        assert_eq!(err.field(), Some(Field::Id));

        let err: DnsError = ValidationError::NoAnswer.into();
        assert_eq!(err.to_string(), "validation failed: response carries no answers");
    }
}
