use crate::error::Result;
use crate::flags::Flags;
use crate::header::Header;
use crate::parser::PacketParser;
use crate::question::Question;
use crate::record::ResourceRecord;
use crate::writer::{section_count, PacketWriter};

/// A query as sent: its header counts always match `questions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub header: Header,
    pub questions: Vec<Question>,
}

impl Request {
    /// A standard query (qr = 0, opcode = 0) for `questions`, in order.
    pub fn new(id: u16, recursion_desired: bool, questions: Vec<Question>) -> Result<Request> {
        let header = Header::new_with_id(id)
            .with_flags(Flags::query(recursion_desired))
            .with_question_count(section_count(questions.len())?);

        Ok(Request {
            header,
            questions,
        })
    }

    pub fn write(&self) -> Result<Vec<u8>> {
        let mut writer = PacketWriter::new();

        writer.write_header(&self.header)?;
        writer.write_questions(&self.questions)?;

        Ok(writer.finish())
    }
}

/// A decoded response. Only the question and answer sections are carried.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
}

impl Response {
    /// Encodes the response with counts taken from the sections.
    ///
    /// The header's authority and additional counts are written as they are,
    /// without any records behind them.
    pub fn write(&self) -> Result<Vec<u8>> {
        let header = Header {
            question_count: section_count(self.questions.len())?,
            answer_count: section_count(self.answers.len())?,
            ..self.header
        };

        let mut writer = PacketWriter::new();
        writer.write_header(&header)?;
        writer.write_questions(&self.questions)?;
        writer.write_records(&self.answers)?;

        Ok(writer.finish())
    }
}

/// Serializes a standard query.
pub fn build_query(id: u16, recursion_desired: bool, questions: &[Question]) -> Result<Vec<u8>> {
    Request::new(id, recursion_desired, questions.to_vec())?.write()
}

/// Decodes one response datagram.
pub fn read_response(buf: &[u8]) -> Result<Response> {
    PacketParser::new(buf).parse()
}
