//! Domain name encoding and decoding.
//!
//! Names are kept in memory as dotted strings without a trailing dot. On the
//! wire each label is prefixed by its length and the name ends with a zero
//! byte, or with a two byte compression pointer to an earlier occurrence of
//! the remaining suffix.

use tracing::trace;
use crate::error::{DnsError, Result};
use crate::parser::PacketParser;

pub const MAX_LABEL_LEN: usize = 63;
/// Wire length limit, length bytes and the root terminator included.
pub const MAX_NAME_LEN: usize = 255;
pub const MAX_POINTER_HOPS: usize = 32;

const POINTER_MASK: u8 = 0xC0;

/// Encodes `name` as length-prefixed labels terminated by a zero byte.
///
/// Empty labels are skipped, so a trailing dot is accepted and `"."` encodes
/// the root name.
pub fn encode_name(name: &str) -> Result<Vec<u8>> {
    if name.is_empty() {
        return Err(DnsError::EmptyName);
    }

    let mut res = Vec::with_capacity(name.len() + 2);

    for label in name.split('.').filter(|label| !label.is_empty()) {
        if label.len() > MAX_LABEL_LEN {
            return Err(DnsError::LabelTooLong { label: label.to_string(), len: label.len() });
        }

        res.push(label.len() as u8);
        res.extend_from_slice(label.as_bytes());
    }
    res.push(0x00);

    if res.len() > MAX_NAME_LEN {
        return Err(DnsError::NameTooLong { len: res.len() });
    }

    Ok(res)
}

/// Decodes a name starting at the parser's position.
///
/// The parser is advanced past the terminating zero byte, or past the first
/// compression pointer. Pointer targets are read through separate parsers
/// and never consumed from `parser`. Every pointer has to point strictly
/// before itself, which together with the hop limit bounds the work done on
/// hostile input.
pub fn decode_name(parser: &mut PacketParser) -> Result<String> {
    let mut res = String::new();
    let mut wire_len = 1;
    let mut hops = 0;
    let mut jumped: Option<PacketParser> = None;

    loop {
        let cursor = match jumped.as_mut() {
            Some(cursor) => cursor,
            None => &mut *parser,
        };

        let at = cursor.offset();
        let len = cursor.next()?;

        match len & POINTER_MASK {
            POINTER_MASK => {
                let low = cursor.next()?;
                let target = (((len & !POINTER_MASK) as usize) << 8) | low as usize;

                if target >= at {
                    return Err(DnsError::MalformedPointer { at, target });
                }

                hops += 1;
                if hops > MAX_POINTER_HOPS {
                    return Err(DnsError::PointerLoop { max: MAX_POINTER_HOPS });
                }

                trace!(at, target, hops, "following compression pointer");

                jumped = Some(cursor.at(target));
            },
            0x00 => {
                if len == 0 {
                    break;
                }

                let label = cursor.take(len as usize)?;

                wire_len += label.len() + 1;
                if wire_len > MAX_NAME_LEN {
                    return Err(DnsError::NameTooLong { len: wire_len });
                }

                if !res.is_empty() {
                    res.push('.');
                }
                res.push_str(&String::from_utf8_lossy(label));
            },
            _ => {
                return Err(DnsError::UnsupportedLabel(len));
            }
        }
    }

    Ok(res)
}
