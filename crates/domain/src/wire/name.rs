//! RFC 1035 compressed-name reading. Targets embed DNS names whose
//! compression pointers reference offsets anywhere in the blob, so the
//! reader resolves them against the full message buffer.

use crate::errors::ResourceError;
use crate::name::{is_name_byte, MAX_NAME};
use crate::wire::reader::Reader;

const POINTER_MASK: u8 = 0xc0;
const MAX_POINTER_JUMPS: usize = 32;

pub fn read_name(r: &mut Reader<'_>) -> Result<String, ResourceError> {
    let msg = r.message();
    let mut off = r.position();
    let mut resume = None;
    let mut jumps = 0;
    let mut name = String::new();

    loop {
        let len = *msg
            .get(off)
            .ok_or_else(|| ResourceError::malformed("truncated name"))?;

        if len & POINTER_MASK == POINTER_MASK {
            let low = *msg
                .get(off + 1)
                .ok_or_else(|| ResourceError::malformed("truncated compression pointer"))?;
            let ptr = (((len & 0x3f) as usize) << 8) | low as usize;

            if ptr >= msg.len() {
                return Err(ResourceError::malformed("compression pointer out of range"));
            }
            jumps += 1;
            if jumps > MAX_POINTER_JUMPS {
                return Err(ResourceError::malformed("compression pointer loop"));
            }
            if resume.is_none() {
                resume = Some(off + 2);
            }
            off = ptr;
            continue;
        }

        if len & POINTER_MASK != 0 {
            return Err(ResourceError::malformed("reserved label type"));
        }

        if len == 0 {
            off += 1;
            break;
        }

        let len = len as usize;
        let label = msg
            .get(off + 1..off + 1 + len)
            .ok_or_else(|| ResourceError::malformed("truncated label"))?;

        for &byte in label {
            if !is_name_byte(byte) {
                return Err(ResourceError::malformed("bad character in name"));
            }
            name.push(byte as char);
        }
        name.push('.');

        if name.len() > MAX_NAME {
            return Err(ResourceError::malformed("name too long"));
        }

        off += 1 + len;
    }

    if name.is_empty() {
        name.push('.');
    }

    r.seek(resume.unwrap_or(off))?;
    Ok(name)
}
