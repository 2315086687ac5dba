use std::fmt::{Display, Formatter};
use crate::dns_class::DNSClass;
use crate::dns_type::DNSType;
use crate::error::Result;
use crate::name::encode_name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub domain: String,
    pub qtype: DNSType,
    pub qclass: DNSClass
}

impl Question {
    pub fn new(name: String, qtype: DNSType, qclass: DNSClass) -> Question {
        Question {
            domain: name,
            qtype,
            qclass,
        }
    }

    /// A question in the Internet class.
    pub fn internet(name: &str, qtype: DNSType) -> Question {
        Question::new(name.to_string(), qtype, DNSClass::IN)
    }

    pub fn write(&self) -> Result<Vec<u8>> {
        let mut res = encode_name(&self.domain)?;

        res.extend_from_slice(&self.qtype.to_num().to_be_bytes());
        res.extend_from_slice(&self.qclass.to_num().to_be_bytes());

        Ok(res)
    }
}

impl Display for Question {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}\t{}", self.domain, self.qclass, self.qtype)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parser::PacketParser;

    #[test]
    fn write_then_parse() {
        let question = Question::internet("docs.google.com", DNSType::A);
        let buf = question.write().unwrap();

        assert_eq!(&buf[buf.len() - 4..], &[0, 1, 0, 1]);

        let mut parser = PacketParser::new(&buf);
        assert_eq!(parser.parse_question().unwrap(), question);
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn unknown_codes_survive() {
        let question = Question::new("example.com".to_string(), DNSType::Unknown(64), DNSClass::CH);
        let buf = question.write().unwrap();

        let parsed = PacketParser::new(&buf).parse_question().unwrap();
        assert_eq!(parsed.qtype.to_num(), 64);
        assert_eq!(parsed.qclass, DNSClass::CH);
    }
}
