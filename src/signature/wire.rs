//! Fixed-width wire record for exchanging signatures across implementations.

use crate::signature::Signature;
use crate::util::{Error, Result, Serializable};
use byteorder::{BigEndian, ByteOrder, ReadBytesExt, WriteBytesExt};
use std::io;
use std::io::{Read, Write};

/// Signature as eight big-endian 64-bit words, most-significant chunk first.
///
/// The field order and widths are a fixed interchange contract; peers decode
/// r as r1..r4 and s as s1..s4. Constructed once, never mutated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WireSignature {
    /// Bits 255-192 of r.
    pub r1: u64,
    /// Bits 191-128 of r.
    pub r2: u64,
    /// Bits 127-64 of r.
    pub r3: u64,
    /// Bits 63-0 of r.
    pub r4: u64,
    /// Bits 255-192 of s.
    pub s1: u64,
    /// Bits 191-128 of s.
    pub s2: u64,
    /// Bits 127-64 of s.
    pub s3: u64,
    /// Bits 63-0 of s.
    pub s4: u64,
}

impl WireSignature {
    /// Size of the wire record in bytes (8 words of 8 bytes).
    pub const SIZE: usize = 64;

    /// Splits a signature into the eight-word wire form. Never fails.
    #[must_use]
    pub fn encode(sig: &Signature) -> WireSignature {
        WireSignature {
            r1: BigEndian::read_u64(&sig.r[0..8]),
            r2: BigEndian::read_u64(&sig.r[8..16]),
            r3: BigEndian::read_u64(&sig.r[16..24]),
            r4: BigEndian::read_u64(&sig.r[24..32]),
            s1: BigEndian::read_u64(&sig.s[0..8]),
            s2: BigEndian::read_u64(&sig.s[8..16]),
            s3: BigEndian::read_u64(&sig.s[16..24]),
            s4: BigEndian::read_u64(&sig.s[24..32]),
        }
    }

    /// Reassembles the signature, re-checking the even-s rule.
    ///
    /// # Errors
    /// `Error::NonCanonicalSignature` if the reassembled s is odd.
    pub fn decode(&self) -> Result<Signature> {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        BigEndian::write_u64(&mut r[0..8], self.r1);
        BigEndian::write_u64(&mut r[8..16], self.r2);
        BigEndian::write_u64(&mut r[16..24], self.r3);
        BigEndian::write_u64(&mut r[24..32], self.r4);
        BigEndian::write_u64(&mut s[0..8], self.s1);
        BigEndian::write_u64(&mut s[8..16], self.s2);
        BigEndian::write_u64(&mut s[16..24], self.s3);
        BigEndian::write_u64(&mut s[24..32], self.s4);
        if s[31] & 1 != 0 {
            return Err(Error::NonCanonicalSignature);
        }
        Ok(Signature { r, s })
    }

    /// Returns the size of the wire record in bytes.
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        Self::SIZE
    }
}

impl Serializable<WireSignature> for WireSignature {
    fn read(reader: &mut dyn Read) -> Result<WireSignature> {
        Ok(WireSignature {
            r1: reader.read_u64::<BigEndian>()?,
            r2: reader.read_u64::<BigEndian>()?,
            r3: reader.read_u64::<BigEndian>()?,
            r4: reader.read_u64::<BigEndian>()?,
            s1: reader.read_u64::<BigEndian>()?,
            s2: reader.read_u64::<BigEndian>()?,
            s3: reader.read_u64::<BigEndian>()?,
            s4: reader.read_u64::<BigEndian>()?,
        })
    }

    fn write(&self, writer: &mut dyn Write) -> io::Result<()> {
        writer.write_u64::<BigEndian>(self.r1)?;
        writer.write_u64::<BigEndian>(self.r2)?;
        writer.write_u64::<BigEndian>(self.r3)?;
        writer.write_u64::<BigEndian>(self.r4)?;
        writer.write_u64::<BigEndian>(self.s1)?;
        writer.write_u64::<BigEndian>(self.s2)?;
        writer.write_u64::<BigEndian>(self.s3)?;
        writer.write_u64::<BigEndian>(self.s4)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn sample() -> Signature {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        for i in 0..32u8 {
            r[i as usize] = i;
            s[i as usize] = 0xa0 | (i & 0x0f);
        }
        s[31] &= 0xfe;
        Signature { r, s }
    }

    #[test]
    fn round_trip() {
        let sig = sample();
        assert!(sig.is_canonical());
        let wire = WireSignature::encode(&sig);
        assert_eq!(wire.decode().unwrap(), sig);
    }

    #[test]
    fn zero_signature() {
        let wire = WireSignature::encode(&Signature::default());
        assert_eq!(wire, WireSignature::default());
        assert_eq!(wire.decode().unwrap(), Signature::default());
    }

    #[test]
    fn word_order() {
        let sig = sample();
        let wire = WireSignature::encode(&sig);
        assert_eq!(wire.r1, u64::from_be_bytes(sig.r[0..8].try_into().unwrap()));
        assert_eq!(wire.r4, u64::from_be_bytes(sig.r[24..32].try_into().unwrap()));
        assert_eq!(wire.s1, u64::from_be_bytes(sig.s[0..8].try_into().unwrap()));
        assert_eq!(wire.s4, u64::from_be_bytes(sig.s[24..32].try_into().unwrap()));
    }

    #[test]
    fn decode_rejects_odd_s() {
        let wire = WireSignature {
            s4: 1,
            ..WireSignature::default()
        };
        assert_eq!(
            wire.decode().unwrap_err().to_string(),
            "Non-canonical signature: s is odd"
        );
    }

    #[test]
    fn write_read() {
        let wire = WireSignature::encode(&sample());
        let mut v = Vec::new();
        wire.write(&mut v).unwrap();
        assert_eq!(v.len(), wire.size());
        // r rides the wire most-significant chunk first.
        assert_eq!(&v[0..32], &sample().r[..]);
        assert_eq!(WireSignature::read(&mut Cursor::new(&v)).unwrap(), wire);
    }
}
