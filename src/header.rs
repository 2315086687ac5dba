use std::fmt::{Display, Formatter};
use crate::flags::Flags;

pub const HEADER_LEN: usize = 12;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub flags: Flags,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16
}

impl Header {
    pub fn new_with_id(id: u16) -> Header {
        Header {
            id,
            ..Default::default()
        }
    }

    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;

        self
    }

    pub fn with_question_count(mut self, n: u16) -> Self {
        self.question_count = n;

        self
    }

    pub fn with_answer_count(mut self, n: u16) -> Self {
        self.answer_count = n;

        self
    }

    pub fn write(&self) -> [u8; HEADER_LEN] {
        let mut res = [0u8; HEADER_LEN];

        let fields = [
            self.id,
            self.flags.bits(),
            self.question_count,
            self.answer_count,
            self.authority_count,
            self.additional_count,
        ];
        for (chunk, field) in res.chunks_exact_mut(2).zip(fields) {
            chunk.copy_from_slice(&field.to_be_bytes());
        }

        res
    }
}

impl Display for Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "id: {}, flags: [{}], qdcount: {}, ancount: {}, nscount: {}, arcount: {}",
            self.id,
            self.flags,
            self.question_count,
            self.answer_count,
            self.authority_count,
            self.additional_count
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parser::PacketParser;

    #[test]
    fn writes_fixed_layout() {
        let header = Header {
            id: 0xABCD,
            flags: Flags::new(0x0100),
            question_count: 1,
            answer_count: 2,
            authority_count: 3,
            additional_count: 0x0405,
        };

        assert_eq!(
            header.write(),
            [0xAB, 0xCD, 0x01, 0x00, 0, 1, 0, 2, 0, 3, 0x04, 0x05]
        );

        let buf = header.write();
        assert_eq!(PacketParser::new(&buf).parse_header().unwrap(), header);
    }

    #[test]
    fn builder() {
        let header = Header::new_with_id(7)
            .with_flags(Flags::query(true))
            .with_question_count(1)
            .with_answer_count(4);

        assert_eq!(header.id, 7);
        assert!(header.flags.rd());
        assert_eq!((header.question_count, header.answer_count), (1, 4));
        assert_eq!(header.additional_count, 0);
    }
}
