//! Object envelope
//!
//! Every object is wrapped as `<type> <len>\0<payload>` before it is hashed or
//! written. `len` is the decimal byte length of the payload, written without
//! leading zeros.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::DecodeError;
use bytes::{BufMut, Bytes, BytesMut};
use sha1::{Digest, Sha1};

pub fn encode(object_type: ObjectType, payload: &[u8]) -> Bytes {
    let header = format!("{} {}\0", object_type.as_str(), payload.len());

    let mut envelope = BytesMut::with_capacity(header.len() + payload.len());
    envelope.put_slice(header.as_bytes());
    envelope.put_slice(payload);

    envelope.freeze()
}

/// Split an envelope into its type and payload, validating the declared size
pub fn decode(data: &[u8]) -> Result<(ObjectType, &[u8]), DecodeError> {
    let nul = data
        .iter()
        .position(|byte| *byte == 0)
        .ok_or(DecodeError::MissingNul)?;

    let header = std::str::from_utf8(&data[..nul])
        .map_err(|_| DecodeError::MalformedHeader(String::from_utf8_lossy(&data[..nul]).into()))?;
    let (object_type, size) = header
        .split_once(' ')
        .ok_or_else(|| DecodeError::MalformedHeader(header.to_string()))?;
    let object_type = ObjectType::try_from(object_type)?;
    let size = parse_size(size).ok_or_else(|| DecodeError::MalformedHeader(header.to_string()))?;

    let payload = &data[nul + 1..];
    if payload.len() != size {
        return Err(DecodeError::SizeMismatch {
            expected: size,
            found: payload.len(),
        });
    }

    Ok((object_type, payload))
}

/// SHA-1 of the given bytes, hex-encoded
pub fn digest(data: &[u8]) -> ObjectId {
    let mut hasher = Sha1::new();
    hasher.update(data);

    ObjectId::from_digest(&hasher.finalize())
}

fn parse_size(size: &str) -> Option<usize> {
    let canonical = !size.is_empty()
        && size.bytes().all(|b| b.is_ascii_digit())
        && (size == "0" || !size.starts_with('0'));

    if canonical { size.parse().ok() } else { None }
}
