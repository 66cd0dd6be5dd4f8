use std::fmt;

use sha2::{Digest, Sha256};

use crate::request::ValidationKind;

/// A deterministic cache key for a `(kind, raw value)` pair.
///
/// The first 16 bytes of a SHA-256 digest, rendered as lowercase hex.
/// Collisions between distinct raw values are not a practical concern at
/// that width; two requests share a fingerprint only when they share kind
/// and raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint([u8; 16]);

impl Fingerprint {
    /// Digest the kind's wire name and the raw value, separated by a NUL
    /// so the pair is unambiguous.
    pub fn compute(kind: ValidationKind, raw_value: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(kind.as_str().as_bytes());
        hasher.update([0u8]);
        hasher.update(raw_value.as_bytes());
        let digest: [u8; 32] = hasher.finalize().into();
        let mut out = [0u8; 16];
        out.copy_from_slice(&digest[..16]);
        Self(out)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl serde::Serialize for Fingerprint {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Fingerprint {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        if bytes.len() != 16 {
            return Err(serde::de::Error::custom("Fingerprint must be 16 bytes"));
        }
        let mut out = [0u8; 16];
        out.copy_from_slice(&bytes);
        Ok(Self(out))
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_for_equal_input() {
        let a = Fingerprint::compute(ValidationKind::Email, "user@example.com");
        let b = Fingerprint::compute(ValidationKind::Email, "user@example.com");
        assert_eq!(a, b);
        assert_eq!(a.to_hex(), b.to_hex());
    }

    #[test]
    fn distinct_values_diverge() {
        let a = Fingerprint::compute(ValidationKind::Email, "user@example.com");
        let b = Fingerprint::compute(ValidationKind::Email, "user@example.org");
        assert_ne!(a, b);
    }

    #[test]
    fn hex_round_trips_through_serde() {
        let fingerprint = Fingerprint::compute(ValidationKind::TaxId11, "52998224725");
        let json = serde_json::to_string(&fingerprint).expect("serialize");
        assert_eq!(json.len(), 34); // 32 hex chars plus quotes
        let round: Fingerprint = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(round, fingerprint);
    }
}
