use std::fmt::{Display, Formatter};
use crate::dns_class::DNSClass;
use crate::dns_type::DNSType;
use crate::error::{DnsError, Result};
use crate::name::encode_name;
use crate::parser::PacketParser;
use crate::record_data::RecordData;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub domain: String,
    pub rtype: DNSType,
    pub rclass: DNSClass,
    pub ttl: i32,
    pub len: u16,
    pub data: RecordData,
}

impl ResourceRecord {
    /// Builds a record, deriving the rdata length from `data`.
    pub fn new(domain: &str, rtype: DNSType, rclass: DNSClass, ttl: i32, data: RecordData) -> Result<Self> {
        let len = data.write()?.len();

        Ok(Self {
            domain: domain.to_string(),
            rtype,
            rclass,
            ttl,
            len: u16::try_from(len).map_err(|_| DnsError::MessageTooLarge { len, max: u16::MAX as usize })?,
            data,
        })
    }

    pub fn parse(parser: &mut PacketParser) -> Result<ResourceRecord> {
        let domain = parser.parse_domain_name()?;

        let rtype = DNSType::from(parser.next_u16()?);
        let rclass = DNSClass::from(parser.next_u16()?);
        let ttl = parser.next_i32()?;
        let len = parser.next_u16()?;

        let data = RecordData::parse(parser, rtype, len)?;

        Ok(ResourceRecord {
            domain,
            rtype,
            rclass,
            ttl,
            len,
            data,
        })
    }

    pub fn write(&self) -> Result<Vec<u8>> {
        let mut res = encode_name(&self.domain)?;

        res.extend_from_slice(&self.rtype.to_num().to_be_bytes());
        res.extend_from_slice(&self.rclass.to_num().to_be_bytes());
        res.extend_from_slice(&self.ttl.to_be_bytes());

        let mut data = self.data.write()?;
        let len = u16::try_from(data.len())
            .map_err(|_| DnsError::MessageTooLarge { len: data.len(), max: u16::MAX as usize })?;
        res.extend_from_slice(&len.to_be_bytes());
        res.append(&mut data);

        Ok(res)
    }
}

impl Display for ResourceRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}\t{}\t{}\t{}", self.domain, self.ttl, self.rclass, self.rtype, self.data)
    }
}
