use std::fmt::{Display, Formatter};
use std::net::Ipv4Addr;
use crate::dns_type::DNSType;
use crate::error::{DnsError, Result};
use crate::name::encode_name;
use crate::parser::PacketParser;

/// How the rdata of a record type is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RDataKind {
    Opaque,
    /// A single domain name sharing the message's compression space.
    Name,
    /// A 16 bit preference followed by a domain name.
    Exchange,
    Address,
}

impl RDataKind {
    pub fn of(rtype: DNSType) -> Self {
        match rtype {
            DNSType::NS
            | DNSType::CNAME
            | DNSType::PTR
            | DNSType::MD
            | DNSType::MF
            | DNSType::MB
            | DNSType::MG
            | DNSType::MR => RDataKind::Name,
            DNSType::MX => RDataKind::Exchange,
            DNSType::A => RDataKind::Address,
            _ => RDataKind::Opaque,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    Name(String),
    MX {
        preference: u16,
        exchange: String
    },
    Opaque(Vec<u8>),
}

impl RecordData {
    /// Reads `len` bytes of rdata for a record of type `rtype`.
    ///
    /// Names inside the rdata are decoded with the message-wide parser so
    /// pointers into earlier sections resolve. Whatever the kind, exactly
    /// `len` bytes have to be consumed.
    pub fn parse(parser: &mut PacketParser, rtype: DNSType, len: u16) -> Result<RecordData> {
        let start = parser.offset();
        if parser.remaining() < len as usize {
            return Err(DnsError::TruncatedMessage {
                offset: start,
                needed: len as usize - parser.remaining(),
            });
        }

        let data = match RDataKind::of(rtype) {
            RDataKind::Opaque => RecordData::Opaque(parser.take(len as usize)?.to_vec()),
            RDataKind::Name => RecordData::Name(parser.parse_domain_name()?),
            RDataKind::Exchange => RecordData::MX {
                preference: parser.next_u16()?,
                exchange: parser.parse_domain_name()?,
            },
            RDataKind::Address => {
                if len != 4 {
                    return Err(DnsError::RDataLengthMismatch {
                        rtype: rtype.to_num(),
                        declared: len,
                        consumed: 0,
                    });
                }

                let octets = parser.take(4)?;
                RecordData::A(Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3]))
            }
        };

        let consumed = parser.offset() - start;
        if consumed != len as usize {
            return Err(DnsError::RDataLengthMismatch {
                rtype: rtype.to_num(),
                declared: len,
                consumed,
            });
        }

        Ok(data)
    }

    /// Wire form of the rdata. Names are written uncompressed.
    pub fn write(&self) -> Result<Vec<u8>> {
        match self {
            RecordData::A(addr) => Ok(addr.octets().to_vec()),
            RecordData::Name(name) => encode_name(name),
            RecordData::MX { preference, exchange } => {
                let mut res = preference.to_be_bytes().to_vec();
                res.append(&mut encode_name(exchange)?);

                Ok(res)
            },
            RecordData::Opaque(data) => Ok(data.clone()),
        }
    }

    /// The domain name carried by the rdata, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            RecordData::Name(name) => Some(name),
            RecordData::MX { exchange, .. } => Some(exchange),
            _ => None,
        }
    }
}

impl Display for RecordData {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordData::A(addr) => write!(f, "{}", addr),
            RecordData::Name(name) => write!(f, "{}", name),
            RecordData::MX { preference, exchange } => write!(f, "{} {}", preference, exchange),
            RecordData::Opaque(data) => {
                write!(f, "\\# {}", data.len())?;
                if !data.is_empty() {
                    write!(f, " ")?;
                }
                for byte in data {
                    write!(f, "{:02x}", byte)?;
                }

                Ok(())
            }
        }
    }
}
