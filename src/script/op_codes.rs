/// Script opcodes used by this crate.
///
/// Only the opcodes needed to build and classify pay-to-script-hash outputs
/// and their 2-of-2 redeem scripts.

// Pushdata and Constants
/// Pushes empty array (0/false) onto the stack.
pub const OP_0: u8 = 0;
/// Offset to push n bytes (n: 1-75).
pub const OP_PUSH: u8 = 0;

/// Next byte is push length (up to 255 bytes).
pub const OP_PUSHDATA1: u8 = 76;
/// Next two bytes are push length (up to 65535 bytes).
pub const OP_PUSHDATA2: u8 = 77;
/// Next four bytes are push length (up to 4GB).
pub const OP_PUSHDATA4: u8 = 78;

/// Pushes 2 onto the stack.
pub const OP_2: u8 = 82;

// Crypto
/// Hashes top item with SHA256 then RIPEMD160.
pub const OP_HASH160: u8 = 169;
/// Pops two items and pushes whether they are equal.
pub const OP_EQUAL: u8 = 135;
/// Checks m-of-n signatures against public keys on the stack.
pub const OP_CHECKMULTISIG: u8 = 174;
