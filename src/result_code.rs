use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResultCode {
    NOERROR,
    FORMERR,
    SERVFAIL,
    NXDOMAIN,
    NOTIMP,
    REFUSED,
    Unknown(u8),
}

impl ResultCode {
    pub fn to_u8(&self) -> u8 {
        match self {
            ResultCode::NOERROR => 0,
            ResultCode::FORMERR => 1,
            ResultCode::SERVFAIL => 2,
            ResultCode::NXDOMAIN => 3,
            ResultCode::NOTIMP => 4,
            ResultCode::REFUSED => 5,
            ResultCode::Unknown(code) => *code,
        }
    }
}

impl From<u8> for ResultCode {
    fn from(value: u8) -> Self {
        match value {
            0 => ResultCode::NOERROR,
            1 => ResultCode::FORMERR,
            2 => ResultCode::SERVFAIL,
            3 => ResultCode::NXDOMAIN,
            4 => ResultCode::NOTIMP,
            5 => ResultCode::REFUSED,
            code => ResultCode::Unknown(code),
        }
    }
}

impl Display for ResultCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultCode::Unknown(code) => write!(f, "RCODE{}", code),
            code => write!(f, "{:?}", code),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn codes() {
        for code in 0..16u8 {
            assert_eq!(ResultCode::from(code).to_u8(), code);
        }

        assert_eq!(ResultCode::from(2), ResultCode::SERVFAIL);
        assert_eq!(ResultCode::from(9).to_string(), "RCODE9");
        assert_eq!(ResultCode::REFUSED.to_string(), "REFUSED");
    }
}
