use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Default, PartialEq, Eq, Debug, Clone, Hash, Copy)]
pub enum DNSType {
    #[default]
    A, // 1
    NS,
    MD,
    MF,
    CNAME,
    SOA,
    MB,
    MG,
    MR,
    NULL,
    WKS,
    PTR,
    HINFO,
    MINFO,
    MX,
    TXT, // 16
    AAAA, // 28
    ASTERISK, // 255
    Unknown(u16),
}

impl DNSType {
    pub fn to_num(&self) -> u16 {
        match *self {
            DNSType::A => 1,
            DNSType::NS => 2,
            DNSType::MD => 3,
            DNSType::MF => 4,
            DNSType::CNAME => 5,
            DNSType::SOA => 6,
            DNSType::MB => 7,
            DNSType::MG => 8,
            DNSType::MR => 9,
            DNSType::NULL => 10,
            DNSType::WKS => 11,
            DNSType::PTR => 12,
            DNSType::HINFO => 13,
            DNSType::MINFO => 14,
            DNSType::MX => 15,
            DNSType::TXT => 16,
            DNSType::AAAA => 28,
            DNSType::ASTERISK => 255,
            DNSType::Unknown(code) => code,
        }
    }
}

impl From<u16> for DNSType {
    fn from(value: u16) -> Self {
        match value {
            1 => DNSType::A,
            2 => DNSType::NS,
            3 => DNSType::MD,
            4 => DNSType::MF,
            5 => DNSType::CNAME,
            6 => DNSType::SOA,
            7 => DNSType::MB,
            8 => DNSType::MG,
            9 => DNSType::MR,
            10 => DNSType::NULL,
            11 => DNSType::WKS,
            12 => DNSType::PTR,
            13 => DNSType::HINFO,
            14 => DNSType::MINFO,
            15 => DNSType::MX,
            16 => DNSType::TXT,
            28 => DNSType::AAAA,
            255 => DNSType::ASTERISK,
            code => DNSType::Unknown(code),
        }
    }
}

impl FromStr for DNSType {
    type Err = String;

    /// Accepts a mnemonic in any case, or a decimal type code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.parse::<u16>() {
            return Ok(DNSType::from(code));
        }

        match s.to_uppercase().as_str() {
            "A" => Ok(DNSType::A),
            "NS" => Ok(DNSType::NS),
            "MD" => Ok(DNSType::MD),
            "MF" => Ok(DNSType::MF),
            "CNAME" => Ok(DNSType::CNAME),
            "SOA" => Ok(DNSType::SOA),
            "MB" => Ok(DNSType::MB),
            "MG" => Ok(DNSType::MG),
            "MR" => Ok(DNSType::MR),
            "NULL" => Ok(DNSType::NULL),
            "WKS" => Ok(DNSType::WKS),
            "PTR" => Ok(DNSType::PTR),
            "HINFO" => Ok(DNSType::HINFO),
            "MINFO" => Ok(DNSType::MINFO),
            "MX" => Ok(DNSType::MX),
            "TXT" => Ok(DNSType::TXT),
            "AAAA" => Ok(DNSType::AAAA),
            "ANY" | "*" => Ok(DNSType::ASTERISK),
            _ => Err(format!("{} is not a known record type", s)),
        }
    }
}

impl Display for DNSType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DNSType::ASTERISK => write!(f, "ANY"),
            DNSType::Unknown(code) => write!(f, "TYPE{}", code),
            rtype => write!(f, "{:?}", rtype),
        }
    }
}
