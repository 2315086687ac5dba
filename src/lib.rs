//! A codec and validator for DNS messages in the classic UDP wire format.
//!
//! [`build_query`] serializes a standard query, [`read_response`] decodes a
//! response datagram (header, questions and answers) and [`validate`] checks
//! the decoded response against the request it is supposed to answer. All
//! three are pure functions over in-memory bytes; sending and receiving the
//! datagrams is left to the caller.

pub mod dns_class;
pub mod dns_type;
pub mod error;
pub mod flags;
pub mod header;
pub mod name;
pub mod packet;
pub mod parser;
pub mod question;
pub mod record;
pub mod record_data;
pub mod result_code;
pub mod validator;
pub mod writer;

pub use dns_class::DNSClass;
pub use dns_type::DNSType;
pub use error::{DnsError, Field, ValidationError};
pub use flags::Flags;
pub use header::Header;
pub use packet::{build_query, read_response, Request, Response};
pub use question::Question;
pub use record::ResourceRecord;
pub use record_data::{RDataKind, RecordData};
pub use result_code::ResultCode;
pub use validator::{validate, PolicyKind, ValidationPolicy};
