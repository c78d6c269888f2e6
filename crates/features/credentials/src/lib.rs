//! Certification vault: tilt cards whose names decode from noise while hovered.
//!
//! ```rust
//! use folio_credentials::pseudo_hash;
//! assert_eq!(pseudo_hash("c1", "ISC2"), "0xC1ISC7F");
//! ```

#[cfg(feature = "client")]
mod client;
mod scramble;

#[cfg(feature = "client")]
pub use crate::client::CredentialVault;
pub use crate::scramble::{SCRAMBLE_ALPHABET, SCRAMBLE_TICK, Scramble, run_scramble};

/// Maximum credential card tilt in degrees.
pub const CREDENTIAL_TILT: f64 = 8.0;

/// Deterministic display hash: `0x` + upper-cased id + first three issuer chars + `7F`.
#[must_use]
pub fn pseudo_hash(id: &str, issuer: &str) -> String {
    let prefix: String = issuer.chars().take(3).collect();
    format!("0x{}{}7F", id.to_uppercase(), prefix.to_uppercase())
}

/// Asset label shown in the card header, numbered from 101.
#[must_use]
pub fn asset_label(index: usize) -> String {
    format!("ASSET_{}", index + 101)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_uses_issuer_prefix() {
        assert_eq!(pseudo_hash("cissp", "ISC2 International"), "0xCISSPISC7F");
        assert_eq!(pseudo_hash("a", "Go"), "0xAGO7F");
    }

    #[test]
    fn assets_start_at_101() {
        assert_eq!(asset_label(0), "ASSET_101");
        assert_eq!(asset_label(4), "ASSET_105");
    }
}
