//! Pay-to-Script-Hash (P2SH) scripts for jointly-held outputs.
///
/// The spending condition commits to the hash of a redeem script; channel
/// anchor outputs use a 2-of-2 CHECKMULTISIG redeem script. See BIP-16.
use crate::script::Script;
use crate::script::op_codes::{OP_2, OP_CHECKMULTISIG, OP_EQUAL, OP_HASH160, OP_PUSH};
use crate::util::{Error, Hash160, Result};

/// Creates P2SH lock script (HASH160 [hash] EQUAL).
#[must_use]
#[inline]
pub fn create_lock_script(script_hash: &Hash160) -> Script {
    let mut script = Script::new();
    script.append(OP_HASH160);
    script.append(OP_PUSH + 20);
    script.append_slice(&script_hash.0);
    script.append(OP_EQUAL);
    script
}

/// Creates the 2-of-2 CHECKMULTISIG redeem script for two public keys.
///
/// # Errors
/// `Error::BadArgument` if a key is too long to push.
pub fn create_redeem_script_2of2(pubkey1: &[u8], pubkey2: &[u8]) -> Result<Script> {
    let mut script = Script::new();
    script.append(OP_2);
    script.append_data(pubkey1)?;
    script.append_data(pubkey2)?;
    script.append(OP_2);
    script.append(OP_CHECKMULTISIG);
    Ok(script)
}

/// Checks if script is P2SH lock (len=23, ops match).
#[must_use]
#[inline]
pub fn check_lock_script(lock_script: &[u8]) -> bool {
    lock_script.len() == 23
        && lock_script[0] == OP_HASH160
        && lock_script[1] == OP_PUSH + 20
        && lock_script[22] == OP_EQUAL
}

/// Checks if P2SH lock matches the script hash.
#[must_use]
#[inline]
pub fn check_lock_script_hash(script_hash: &Hash160, lock_script: &[u8]) -> bool {
    check_lock_script(lock_script) && lock_script[2..22] == script_hash.0
}

/// Extracts the committed script hash from a P2SH lock.
pub fn extract_script_hash(lock_script: &[u8]) -> Result<Hash160> {
    if !check_lock_script(lock_script) {
        return Err(Error::BadData("Not P2SH lock".to_string()));
    }
    let mut script_hash = Hash160([0; 20]);
    script_hash.0.copy_from_slice(&lock_script[2..22]);
    Ok(script_hash)
}
