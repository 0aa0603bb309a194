#![deny(missing_docs)]
#![deny(unsafe_code)]

/*! # Covenant

A toolkit for signing and jointly authorizing Bitcoin commitment transactions,
as used by payment channels. Provides primitives for the sign-all commitment
digest, canonical even-s ECDSA signatures, 2-of-2 spend authorization of
pay-to-script-hash anchor outputs, and a fixed-width signature wire encoding.

## Usage
use covenant::transaction::{sign_input, verify_2of2};
let sig = sign_input(&tx, 0, &anchor.lock_script.0, &private_key)?;
assert!(verify_2of2(&tx, 0, &anchor, &pubkey1, &pubkey2, &sig1, &sig2)?);

## Canonical signatures
Of the two valid s values for a given (digest, r), this library always
produces and only accepts the even one. Peers depend on byte-identical
signatures, so the rule is a wire contract: do not substitute the low-s rule
used by other Bitcoin software.

## Security
- Nonce and private-key handling happen inside libsecp256k1, which is
  constant-time; r, s, and digests are public values.
- Run `cargo audit` monthly to check for dependency vulnerabilities.
- Not intended for full consensus validation; script evaluation belongs to a
  trusted node.

## Performance
Digest computation serializes into a single pre-sized buffer and all
operations are synchronous and CPU-bound. Independent transactions may be
signed and verified from parallel threads without coordination.
*/

pub mod script;
pub mod signature;
pub mod transaction;
pub mod util;
