//! Transaction structure, commitment digests, and joint authorization.
//!
//! Supports P2SH anchor spends: computing the sign-all commitment digest,
//! signing an input, and checking a 2-of-2 jointly-authorized spend.
//!
//! # Examples
//!
//! Jointly authorize the spend of a 2-of-2 anchor output:
//! ```
//! use covenant::script::{Script, p2sh};
//! use covenant::transaction::{OutPoint, Tx, TxIn, TxOut, sign_input, verify_2of2};
//! use covenant::util::{Hash256, hash160};
//! use secp256k1::{PublicKey, Secp256k1, SecretKey};
//!
//! let secp = Secp256k1::new();
//! let key1 = [0x11; 32];
//! let key2 = [0x22; 32];
//! let pubkey1 =
//!     PublicKey::from_secret_key(&secp, &SecretKey::from_byte_array(key1).unwrap()).serialize();
//! let pubkey2 =
//!     PublicKey::from_secret_key(&secp, &SecretKey::from_byte_array(key2).unwrap()).serialize();
//!
//! let redeem = p2sh::create_redeem_script_2of2(&pubkey1, &pubkey2).unwrap();
//! let anchor = TxOut {
//!     satoshis: 50_000,
//!     lock_script: p2sh::create_lock_script(&hash160(&redeem.0)),
//! };
//!
//! let tx = Tx {
//!     version: 1,
//!     inputs: vec![TxIn {
//!         prev_output: OutPoint { hash: Hash256([7; 32]), index: 0 },
//!         unlock_script: Script::new(),
//!         sequence: 0xffffffff,
//!     }],
//!     outputs: vec![TxOut { satoshis: 49_000, lock_script: Script::new() }],
//!     lock_time: 0,
//! };
//!
//! let sig1 = sign_input(&tx, 0, &anchor.lock_script.0, &key1).unwrap();
//! let sig2 = sign_input(&tx, 0, &anchor.lock_script.0, &key2).unwrap();
//! assert!(verify_2of2(&tx, 0, &anchor, &pubkey1, &pubkey2, &sig1, &sig2).unwrap());
//! ```
mod out_point;
pub mod sighash;
mod tx_in;
mod tx_out;

pub use self::out_point::OutPoint;
pub use self::tx_in::TxIn;
pub use self::tx_out::{MAX_SATOSHIS, TxOut};

use crate::script::p2sh;
use crate::signature::{Signature, sign_digest, verify};
use crate::transaction::sighash::sighash;
use crate::util::{Error, Hash256, Result, Serializable, sha256d, var_int};
use std::fmt;
use std::io;
use std::io::{Read, Write};

/// Maximum number of inputs/outputs (safety cap for parsing).
const MAX_INPUTS: u64 = 1_000_000;
const MAX_OUTPUTS: u64 = 1_000_000;

/// Bitcoin transaction.
#[derive(Default, PartialEq, Eq, Hash, Clone)]
pub struct Tx {
    /// Transaction version.
    pub version: u32,
    /// Transaction inputs.
    pub inputs: Vec<TxIn>,
    /// Transaction outputs.
    pub outputs: Vec<TxOut>,
    /// The block number or timestamp at which this transaction is unlocked.
    pub lock_time: u32,
}

impl Tx {
    /// Calculates the hash of the transaction (txid).
    #[must_use]
    pub fn hash(&self) -> Hash256 {
        let mut b = Vec::with_capacity(self.size());
        self.write(&mut b).unwrap();
        sha256d(&b)
    }

    /// Returns the size of the transaction in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        8 + var_int::size(self.inputs.len() as u64)
            + self.inputs.iter().map(|tx_in| tx_in.size()).sum::<usize>()
            + var_int::size(self.outputs.len() as u64)
            + self.outputs.iter().map(|tx_out| tx_out.size()).sum::<usize>()
    }
}

/// Signs the input at `n_input`, committing to all outputs.
///
/// Computes the commitment digest with `subscript` overlaid on the input,
/// then produces the even-s canonical signature over it.
///
/// # Errors
/// Digest errors (`Error::BadArgument`, `Error::IllegalState`) or
/// `Error::Secp256k1Error` from the signing engine.
pub fn sign_input(
    tx: &Tx,
    n_input: usize,
    subscript: &[u8],
    private_key: &[u8; 32],
) -> Result<Signature> {
    let digest = sighash(tx, n_input, subscript)?;
    sign_digest(private_key, &digest)
}

/// Checks a 2-of-2 jointly-authorized spend of a P2SH output.
///
/// Both signatures must verify over the same commitment digest, computed with
/// the output's lock script as the subscript for the input being spent.
///
/// # Errors
/// `Error::BadArgument` if the output is not P2SH or `n_input` is out of
/// range; signature decode errors propagate from `verify`.
pub fn verify_2of2(
    tx: &Tx,
    n_input: usize,
    output: &TxOut,
    pubkey1: &[u8],
    pubkey2: &[u8],
    sig1: &Signature,
    sig2: &Signature,
) -> Result<bool> {
    if !p2sh::check_lock_script(&output.lock_script.0) {
        return Err(Error::BadArgument("Output is not pay-to-script-hash".to_string()));
    }
    let digest = sighash(tx, n_input, &output.lock_script.0)?;
    Ok(verify(&digest, sig1, pubkey1)? && verify(&digest, sig2, pubkey2)?)
}

impl Serializable<Tx> for Tx {
    fn read(reader: &mut dyn Read) -> Result<Tx> {
        let mut version = [0u8; 4];
        reader.read_exact(&mut version).map_err(Error::IOError)?;
        let version = u32::from_le_bytes(version);
        let n_inputs = var_int::read(reader)?;
        if n_inputs > MAX_INPUTS {
            return Err(Error::BadData(format!("Too many inputs: {}", n_inputs)));
        }
        let mut inputs = Vec::with_capacity(n_inputs as usize);
        for _ in 0..n_inputs {
            inputs.push(TxIn::read(reader)?);
        }
        let n_outputs = var_int::read(reader)?;
        if n_outputs > MAX_OUTPUTS {
            return Err(Error::BadData(format!("Too many outputs: {}", n_outputs)));
        }
        let mut outputs = Vec::with_capacity(n_outputs as usize);
        for _ in 0..n_outputs {
            outputs.push(TxOut::read(reader)?);
        }
        let mut lock_time = [0u8; 4];
        reader.read_exact(&mut lock_time).map_err(Error::IOError)?;
        let lock_time = u32::from_le_bytes(lock_time);
        Ok(Tx {
            version,
            inputs,
            outputs,
            lock_time,
        })
    }

    fn write(&self, writer: &mut dyn Write) -> io::Result<()> {
        writer.write_all(&self.version.to_le_bytes())?;
        var_int::write(self.inputs.len() as u64, writer)?;
        for tx_in in &self.inputs {
            tx_in.write(writer)?;
        }
        var_int::write(self.outputs.len() as u64, writer)?;
        for tx_out in &self.outputs {
            tx_out.write(writer)?;
        }
        writer.write_all(&self.lock_time.to_le_bytes())?;
        Ok(())
    }
}

impl fmt::Debug for Tx {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let inputs_str = format!("[<{} inputs>]", self.inputs.len());
        let outputs_str = format!("[<{} outputs>]", self.outputs.len());
        f.debug_struct("Tx")
            .field("version", &self.version)
            .field("inputs", if self.inputs.len() <= 3 { &self.inputs } else { &inputs_str })
            .field("outputs", if self.outputs.len() <= 3 { &self.outputs } else { &outputs_str })
            .field("lock_time", &self.lock_time)
            .finish()
    }
}
