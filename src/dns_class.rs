use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Default, PartialEq, Eq, Debug, Clone, Hash, Copy)]
pub enum DNSClass {
    #[default]
    IN, // 1
    CS,
    CH,
    HS,
    ASTERISK, // 255
    Unknown(u16),
}

impl DNSClass {
    pub fn to_num(&self) -> u16 {
        match *self {
            DNSClass::IN => 1,
            DNSClass::CS => 2,
            DNSClass::CH => 3,
            DNSClass::HS => 4,
            DNSClass::ASTERISK => 255,
            DNSClass::Unknown(code) => code,
        }
    }
}

impl From<u16> for DNSClass {
    fn from(value: u16) -> Self {
        match value {
            1 => DNSClass::IN,
            2 => DNSClass::CS,
            3 => DNSClass::CH,
            4 => DNSClass::HS,
            255 => DNSClass::ASTERISK,
            code => DNSClass::Unknown(code),
        }
    }
}

impl FromStr for DNSClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.parse::<u16>() {
            return Ok(DNSClass::from(code));
        }

        match s.to_uppercase().as_str() {
            "IN" => Ok(DNSClass::IN),
            "CS" => Ok(DNSClass::CS),
            "CH" => Ok(DNSClass::CH),
            "HS" => Ok(DNSClass::HS),
            "ANY" | "*" => Ok(DNSClass::ASTERISK),
            _ => Err(format!("{} is not a known class", s)),
        }
    }
}

impl Display for DNSClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DNSClass::ASTERISK => write!(f, "ANY"),
            DNSClass::Unknown(code) => write!(f, "CLASS{}", code),
            class => write!(f, "{:?}", class),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn classes() {
        assert_eq!(DNSClass::from(1), DNSClass::IN);
        assert_eq!(DNSClass::from(3), DNSClass::CH);
        assert_eq!(DNSClass::from(77).to_num(), 77);
        assert_eq!("hs".parse::<DNSClass>(), Ok(DNSClass::HS));
        assert_eq!(DNSClass::CS.to_string(), "CS");
    }
}
