//! Wire codec of the messages routed through the hub.
//!
//! Two layers are encoded:
//!
//! - the inner [`DeployMessage`], carrying the token id and metadata of a token to deploy
//! - the outer [`HubMessage`] envelope, carrying routing metadata around the inner payload
//!
//! # Framing
//!
//! Every message starts with a one-byte message type (see [`crate::constants::message_type`]).
//! Fixed-width fields are written as-is, variable-length fields are prefixed with their byte
//! length as a big-endian `u32`:
//!
//! ```text
//! DeployMessage   [u8 = 1][32 token_id][len|name][len|symbol][u8 decimals][len|minter]
//! ReceiveFromHub  [u8 = 4][len|origin_chain][len|payload]
//! SendToHub       [u8 = 3][len|destination_chain][len|payload]
//! ```
//!
//! A zero-length minter is the canonical encoding of "no minter".

mod error;
pub use error::*;

mod hub;
pub use hub::*;

mod message;
pub use message::*;

/// Appends a length-prefixed field.
fn put_prefixed(buf: &mut Vec<u8>, field: &[u8]) {
    let len = u32::try_from(field.len()).expect("field longer than u32::MAX bytes");
    buf.extend_from_slice(&len.to_be_bytes());
    buf.extend_from_slice(field);
}

/// Cursor over an encoded message.
#[derive(Debug)]
struct Reader<'a> {
    buf: &'a [u8],
}

impl<'a> Reader<'a> {
    const fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    fn take(&mut self, needed: usize) -> Result<&'a [u8], DecodeError> {
        if needed > self.buf.len() {
            return Err(DecodeError::UnexpectedEof { needed, remaining: self.buf.len() });
        }
        let (head, tail) = self.buf.split_at(needed);
        self.buf = tail;
        Ok(head)
    }

    fn u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.take(1)?[0])
    }

    fn u32(&mut self) -> Result<u32, DecodeError> {
        let mut word = [0u8; 4];
        word.copy_from_slice(self.take(4)?);
        Ok(u32::from_be_bytes(word))
    }

    fn prefixed(&mut self) -> Result<&'a [u8], DecodeError> {
        let len = self.u32()? as usize;
        self.take(len)
    }

    fn string(&mut self, field: &'static str) -> Result<String, DecodeError> {
        let bytes = self.prefixed()?;
        String::from_utf8(bytes.to_vec()).map_err(|_| DecodeError::InvalidUtf8(field))
    }

    fn finish(self) -> Result<(), DecodeError> {
        if self.buf.is_empty() {
            Ok(())
        } else {
            Err(DecodeError::TrailingBytes(self.buf.len()))
        }
    }
}
