//! Syntactic validation for Solana wallet addresses.
//!
//! Classification only: a valid address is a base58 string of plausible
//! pubkey length. The decoded bytes are never inspected.

/// Shortest base58 rendering of a 32-byte public key.
pub const MIN_ADDRESS_LEN: usize = 32;

/// Longest base58 rendering of a 32-byte public key.
pub const MAX_ADDRESS_LEN: usize = 44;

/// Returns `true` when `address` is a syntactically plausible public key.
///
/// Valid iff the entire string is drawn from the base58 alphabet (digits
/// 1-9, uppercase letters except `I`/`O`, lowercase letters except `l`)
/// and its length falls in [32, 44]. Pure and total; the empty string is
/// invalid.
pub fn is_valid_address(address: &str) -> bool {
    if address.len() < MIN_ADDRESS_LEN || address.len() > MAX_ADDRESS_LEN {
        return false;
    }
    // The default bs58 alphabet is exactly the one Solana pubkeys use,
    // so alphabet membership is a decode that succeeds.
    bs58::decode(address).into_vec().is_ok()
}
