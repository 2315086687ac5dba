use tracing::debug;
use crate::error::{DnsError, Result};
use crate::flags::Flags;
use crate::header::{Header, HEADER_LEN};
use crate::name;
use crate::packet::Response;
use crate::question::Question;
use crate::record::ResourceRecord;

// root name plus type and class
const MIN_QUESTION_LEN: usize = 5;
// root name plus type, class, ttl and rdlength
const MIN_RECORD_LEN: usize = 11;

/// A read cursor over one message.
///
/// The cursor only borrows the message, so following a compression pointer
/// is done with a second parser created by [`PacketParser::at`] while this
/// one stays where it is.
#[derive(Debug, Clone)]
pub struct PacketParser<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> PacketParser<'a> {
    pub fn new(buf: &'a [u8]) -> PacketParser<'a> {
        PacketParser {
            buf,
            offset: 0,
        }
    }

    /// A fresh parser over the same message, positioned at `offset`.
    pub fn at(&self, offset: usize) -> PacketParser<'a> {
        PacketParser {
            buf: self.buf,
            offset,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.offset)
    }

    pub fn seek(&mut self, n: usize) -> Result<()> {
        if n > self.buf.len() {
            return Err(DnsError::TruncatedMessage { offset: self.buf.len(), needed: n - self.buf.len() });
        }

        self.offset = n;

        Ok(())
    }

    pub fn next(&mut self) -> Result<u8> {
        let res = *self.buf.get(self.offset).ok_or(DnsError::TruncatedMessage {
            offset: self.offset,
            needed: 1,
        })?;
        self.offset += 1;

        Ok(res)
    }

    pub fn next_u16(&mut self) -> Result<u16> {
        let bytes = self.take(2)?;

        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn next_u32(&mut self) -> Result<u32> {
        let bytes = self.take(4)?;

        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn next_i32(&mut self) -> Result<i32> {
        Ok(self.next_u32()? as i32)
    }

    /// Consumes exactly `len` bytes.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(DnsError::TruncatedMessage { offset: self.offset, needed: len - self.remaining() });
        }

        let res = &self.buf[self.offset..self.offset + len];
        self.offset += len;

        Ok(res)
    }

    /// Decodes a header, qdcount questions and ancount answers.
    ///
    /// Authority and additional records are not read; whatever follows the
    /// answer section is left untouched.
    pub fn parse(&mut self) -> Result<Response> {
        let header = self.parse_header()?;

        let mut questions = Vec::with_capacity(capacity(header.question_count, self.remaining(), MIN_QUESTION_LEN));
        for _ in 0..header.question_count {
            questions.push(self.parse_question()?);
        }

        let mut answers = Vec::with_capacity(capacity(header.answer_count, self.remaining(), MIN_RECORD_LEN));
        for _ in 0..header.answer_count {
            answers.push(ResourceRecord::parse(self)?);
        }

        debug!(
            id = header.id,
            questions = questions.len(),
            answers = answers.len(),
            consumed = self.offset,
            "decoded response"
        );

        Ok(Response {
            header,
            questions,
            answers,
        })
    }

    pub fn parse_header(&mut self) -> Result<Header> {
        // the header always sits at the beginning of the message
        if self.buf.len() < HEADER_LEN {
            return Err(DnsError::TruncatedHeader { len: self.buf.len() });
        }
        self.seek(0)?;

        Ok(Header {
            id: self.next_u16()?,
            flags: Flags::new(self.next_u16()?),
            question_count: self.next_u16()?,
            answer_count: self.next_u16()?,
            authority_count: self.next_u16()?,
            additional_count: self.next_u16()?,
        })
    }

    pub fn parse_question(&mut self) -> Result<Question> {
        let name = self.parse_domain_name()?;
        let qtype = self.next_u16()?;
        let qclass = self.next_u16()?;

        Ok(Question::new(name, qtype.into(), qclass.into()))
    }

    pub fn parse_domain_name(&mut self) -> Result<String> {
        name::decode_name(self)
    }
}

/// Header counts come from the sender, so they only bound how many entries
/// are attempted. Preallocation is limited to what the bytes left could hold.
fn capacity(count: u16, remaining: usize, min_len: usize) -> usize {
    (count as usize).min(remaining / min_len)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reads_big_endian_fields() {
        let buf = [0x12, 0x34, 0xde, 0xad, 0xbe, 0xef, 0xff, 0xff, 0xff, 0xfe];
        let mut parser = PacketParser::new(&buf);

        assert_eq!(parser.next_u16().ok(), Some(0x1234));
        assert_eq!(parser.next_u32().ok(), Some(0xdeadbeef));
        assert_eq!(parser.next_i32().ok(), Some(-2));
        assert_eq!(parser.remaining(), 0);
        assert_eq!(parser.next(), Err(DnsError::TruncatedMessage { offset: 10, needed: 1 }));
    }

    #[test]
    fn take_does_not_move_on_failure() {
        let buf = [1, 2, 3];
        let mut parser = PacketParser::new(&buf);

        assert_eq!(parser.take(2).ok(), Some(&buf[..2]));
        assert_eq!(parser.take(2), Err(DnsError::TruncatedMessage { offset: 2, needed: 1 }));
        assert_eq!(parser.offset(), 2);
    }

    #[test]
    fn forked_parser_is_independent() {
        let buf = [9, 8, 7, 6];
        let mut parser = PacketParser::new(&buf);
        parser.next().unwrap();

        let mut other = parser.at(3);
        assert_eq!(other.next().ok(), Some(6));
        assert_eq!(parser.offset(), 1);
    }

    #[test]
    fn short_header() {
        for len in 0..HEADER_LEN {
            let buf = vec![0u8; len];
            let err = PacketParser::new(&buf).parse().unwrap_err();

            assert_eq!(err, DnsError::TruncatedHeader { len });
            assert!(err.is_truncated());
        }
    }

    #[test]
    fn header_fields() {
        let buf = [0x30, 0x39, 0x81, 0x80, 0, 1, 0, 2, 0, 3, 0, 4];
        let header = PacketParser::new(&buf).parse_header().unwrap();

        assert_eq!(header.id, 12345);
        assert_eq!(header.flags.bits(), 0x8180);
        assert_eq!(header.question_count, 1);
        assert_eq!(header.answer_count, 2);
        assert_eq!(header.authority_count, 3);
        assert_eq!(header.additional_count, 4);
    }

    #[test]
    fn missing_question() {
        // qdcount says 1 but nothing follows the header
        let buf = [0, 1, 0x81, 0x80, 0, 1, 0, 0, 0, 0, 0, 0];
        let err = PacketParser::new(&buf).parse().unwrap_err();

        assert_eq!(err, DnsError::TruncatedMessage { offset: 12, needed: 1 });
    }

    #[test]
    fn question_cut_in_type_field() {
        let mut buf = vec![0, 1, 0x81, 0x80, 0, 1, 0, 0, 0, 0, 0, 0];
        buf.extend_from_slice(&[1, b'a', 0, 0]);
        let err = PacketParser::new(&buf).parse().unwrap_err();

        assert!(err.is_truncated());
    }

    #[test]
    fn authority_section_is_not_read() {
        // nscount/arcount are set but no records follow
        let mut buf = vec![0, 7, 0x81, 0x80, 0, 1, 0, 0, 0, 5, 0, 5];
        buf.extend_from_slice(&[1, b'a', 0, 0, 1, 0, 1]);
        let res = PacketParser::new(&buf).parse().unwrap();

        assert_eq!(res.header.authority_count, 5);
        assert_eq!(res.questions.len(), 1);
        assert!(res.answers.is_empty());
    }

    #[test]
    fn large_counts_on_header_only_message() {
        let buf = [0, 1, 0x81, 0x80, 0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0];
        let err = PacketParser::new(&buf).parse().unwrap_err();

        assert_eq!(err, DnsError::TruncatedMessage { offset: 12, needed: 1 });
        assert_eq!(capacity(0xFFFF, 0, MIN_QUESTION_LEN), 0);
        assert_eq!(capacity(0xFFFF, 110, MIN_RECORD_LEN), 10);
        assert_eq!(capacity(2, 500, MIN_RECORD_LEN), 2);
    }
}
