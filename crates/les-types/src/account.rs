use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Public-key identity of a ledger account.
///
/// An `AccountId` is the raw 32-byte ed25519 public key of the account
/// owner. It is the owner component of every [`LedgerKey`](crate::LedgerKey):
/// accounts are keyed by it directly, trust lines and offers pair it with a
/// type-specific sub-identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Wrap an existing 32-byte public key.
    pub const fn from_public_key(key: [u8; 32]) -> Self {
        Self(key)
    }

    /// Derive a deterministic account id from a seed.
    ///
    /// Not a key-pair derivation; the result has no matching secret key.
    /// Intended for tests, fixtures, and demos where a stable id is needed.
    pub fn derive(seed: &[u8]) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"les-account-v1:");
        hasher.update(seed);
        Self(*hasher.finalize().as_bytes())
    }

    /// The raw 32-byte public key.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Full hex-encoded string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short identifier: `acct:` followed by the first 8 hex characters.
    pub fn short_id(&self) -> String {
        format!("acct:{}", hex::encode(&self.0[..4]))
    }

    /// Parse from a hex string (64 hex characters).
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(TypeError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", self.short_id())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_id())
    }
}

impl From<[u8; 32]> for AccountId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_is_deterministic() {
        assert_eq!(AccountId::derive(b"alice"), AccountId::derive(b"alice"));
    }

    #[test]
    fn different_seeds_produce_different_ids() {
        assert_ne!(AccountId::derive(b"alice"), AccountId::derive(b"bob"));
    }

    #[test]
    fn derive_is_domain_separated() {
        let raw = *blake3::hash(b"alice").as_bytes();
        assert_ne!(AccountId::derive(b"alice").as_bytes(), &raw);
    }

    #[test]
    fn hex_roundtrip() {
        let id = AccountId::derive(b"hex");
        let parsed = AccountId::from_hex(&id.to_hex()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        let err = AccountId::from_hex("abcd").unwrap_err();
        assert_eq!(
            err,
            TypeError::InvalidLength {
                expected: 32,
                actual: 2
            }
        );
    }

    #[test]
    fn from_hex_rejects_garbage() {
        assert!(matches!(
            AccountId::from_hex("zz"),
            Err(TypeError::InvalidHex(_))
        ));
    }

    #[test]
    fn short_id_format() {
        let id = AccountId::from_public_key([0xab; 32]);
        assert_eq!(id.short_id(), "acct:abababab");
        assert_eq!(format!("{id}"), "acct:abababab");
    }

    #[test]
    fn serde_roundtrip() {
        let id = AccountId::derive(b"serde");
        let json = serde_json::to_string(&id).unwrap();
        let parsed: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }
}
