//! Commitment digest computation for signing a transaction input.
///
/// Sign-all-outputs is the only commitment mode; the digest binds the
/// signature to every output of the transaction.
use crate::transaction::Tx;
use crate::util::{Error, Hash256, Result, Serializable, sha256d, var_int};
use byteorder::{LittleEndian, WriteBytesExt};

/// Signs all outputs.
pub const SIGHASH_ALL: u8 = 0x01;

/// Computes the digest committing a signature to the input at `n_input` with
/// `subscript` standing in as its script.
///
/// Serializes the transaction into a fresh buffer with `subscript` overlaid
/// on the one input being signed, appends the 4-byte little-endian commitment
/// tag, and double-hashes the result. The caller's transaction is read-only
/// throughout, so identical calls return identical digests and concurrent
/// callers need no coordination.
///
/// Every input's script must be empty; a signing-ready transaction carries no
/// authorization data in its inputs.
///
/// # Errors
/// `Error::BadArgument` if `n_input` is out of range; `Error::IllegalState`
/// if any input has a non-empty unlock script.
pub fn sighash(tx: &Tx, n_input: usize, subscript: &[u8]) -> Result<Hash256> {
    if n_input >= tx.inputs.len() {
        return Err(Error::BadArgument("Input index out of range".to_string()));
    }
    for (i, input) in tx.inputs.iter().enumerate() {
        if !input.unlock_script.0.is_empty() {
            return Err(Error::IllegalState(format!(
                "Input {} has a non-empty unlock script",
                i
            )));
        }
    }
    let mut s = Vec::with_capacity(tx.size() + subscript.len() + 4);
    s.write_u32::<LittleEndian>(tx.version)?;
    var_int::write(tx.inputs.len() as u64, &mut s)?;
    for (i, input) in tx.inputs.iter().enumerate() {
        input.prev_output.write(&mut s)?;
        if i == n_input {
            var_int::write(subscript.len() as u64, &mut s)?;
            s.extend_from_slice(subscript);
        } else {
            var_int::write(0, &mut s)?;
        }
        s.write_u32::<LittleEndian>(input.sequence)?;
    }
    var_int::write(tx.outputs.len() as u64, &mut s)?;
    for output in &tx.outputs {
        output.write(&mut s)?;
    }
    s.write_u32::<LittleEndian>(tx.lock_time)?;
    s.write_u32::<LittleEndian>(SIGHASH_ALL as u32)?;
    Ok(sha256d(&s))
}
