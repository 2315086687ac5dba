use crate::error::{DnsError, Result};
use crate::header::Header;
use crate::question::Question;
use crate::record::ResourceRecord;

/// Classic UDP payload limit.
pub const MAX_UDP_MESSAGE: usize = 512;

/// Serializes a message section by section into a single buffer.
pub struct PacketWriter {
    buf: Vec<u8>,
    limit: usize,
}

impl PacketWriter {
    pub fn new() -> PacketWriter {
        PacketWriter {
            buf: Vec::with_capacity(MAX_UDP_MESSAGE),
            limit: MAX_UDP_MESSAGE,
        }
    }

    /// A writer that enforces `limit` instead of the UDP payload size.
    pub fn with_limit(limit: usize) -> PacketWriter {
        PacketWriter {
            buf: Vec::new(),
            limit,
        }
    }

    pub fn write_header(&mut self, header: &Header) -> Result<()> {
        self.write_bytes(&header.write())
    }

    pub fn write_questions(&mut self, questions: &[Question]) -> Result<()> {
        for question in questions {
            self.write_bytes(&question.write()?)?;
        }

        Ok(())
    }

    pub fn write_records(&mut self, records: &[ResourceRecord]) -> Result<()> {
        for record in records {
            self.write_bytes(&record.write()?)?;
        }

        Ok(())
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }

    fn write_bytes(&mut self, values: &[u8]) -> Result<()> {
        let len = self.buf.len() + values.len();
        if len > self.limit {
            return Err(DnsError::MessageTooLarge { len, max: self.limit });
        }

        self.buf.extend_from_slice(values);

        Ok(())
    }
}

impl Default for PacketWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a section length to a header count.
pub fn section_count(len: usize) -> Result<u16> {
    u16::try_from(len).map_err(|_| DnsError::TooManyEntries { count: len })
}
