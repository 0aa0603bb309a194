//! Script handling for transaction outputs and signing subscripts.
///
/// Only script construction and shape classification; evaluation belongs to a
/// full node.
pub mod op_codes;
pub mod p2sh;

use crate::util::{Error, Result};
use self::op_codes::{OP_0, OP_PUSH, OP_PUSHDATA1, OP_PUSHDATA2, OP_PUSHDATA4};
use std::fmt;

/// Transaction script.
#[derive(Default, Clone, PartialEq, Eq, Hash)]
pub struct Script(pub Vec<u8>);

impl Script {
    /// Creates a new empty script.
    #[must_use]
    #[inline]
    pub fn new() -> Script {
        Script(vec![])
    }

    /// Appends a single opcode to the script.
    #[inline]
    pub fn append(&mut self, op: u8) {
        self.0.push(op);
    }

    /// Appends raw bytes to the script without a push prefix.
    #[inline]
    pub fn append_slice(&mut self, data: &[u8]) {
        self.0.extend_from_slice(data);
    }

    /// Appends a data push, using the smallest push encoding for the length.
    ///
    /// # Errors
    /// `Error::BadArgument` if the data is too long to push.
    pub fn append_data(&mut self, data: &[u8]) -> Result<()> {
        match data.len() {
            0 => self.0.push(OP_0),
            1..=75 => {
                self.0.push(OP_PUSH + data.len() as u8);
                self.0.extend_from_slice(data);
            }
            76..=255 => {
                self.0.push(OP_PUSHDATA1);
                self.0.push(data.len() as u8);
                self.0.extend_from_slice(data);
            }
            256..=65535 => {
                self.0.push(OP_PUSHDATA2);
                self.0.extend_from_slice(&(data.len() as u16).to_le_bytes());
                self.0.extend_from_slice(data);
            }
            _ => {
                if data.len() > u32::MAX as usize {
                    return Err(Error::BadArgument(format!("Data too long to push: {}", data.len())));
                }
                self.0.push(OP_PUSHDATA4);
                self.0.extend_from_slice(&(data.len() as u32).to_le_bytes());
                self.0.extend_from_slice(data);
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Script({})", hex::encode(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn append_data_encodings() {
        let mut s = Script::new();
        s.append_data(&[]).unwrap();
        assert_eq!(s.0, vec![OP_0]);

        let mut s = Script::new();
        s.append_data(&[7; 75]).unwrap();
        assert_eq!(s.0[0], OP_PUSH + 75);
        assert_eq!(s.0.len(), 76);

        let mut s = Script::new();
        s.append_data(&[7; 76]).unwrap();
        assert_eq!(s.0[0], OP_PUSHDATA1);
        assert_eq!(s.0[1], 76);
        assert_eq!(s.0.len(), 78);

        let mut s = Script::new();
        s.append_data(&[7; 300]).unwrap();
        assert_eq!(s.0[0], OP_PUSHDATA2);
        assert_eq!(&s.0[1..3], &300u16.to_le_bytes());
        assert_eq!(s.0.len(), 303);
    }

    #[test]
    fn append_ops() {
        let mut s = Script::new();
        s.append(op_codes::OP_HASH160);
        s.append_slice(&[1, 2, 3]);
        assert_eq!(s.0, vec![op_codes::OP_HASH160, 1, 2, 3]);
    }
}
