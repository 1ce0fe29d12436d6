//! Entry identifiers
//!
//! Ids are opaque strings. Imported ledgers may carry ids minted by other
//! tools, so any string is accepted; fresh ids are a random token followed by
//! a base-36 millisecond timestamp.

use serde::{Deserialize, Serialize};
use std::fmt;

use chrono::Utc;
use uuid::Uuid;

/// Unique (best-effort) identifier of a ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Mint a new random id
    pub fn generate() -> Self {
        let token = Uuid::new_v4().simple().to_string();
        let millis = Utc::now().timestamp_millis().max(0) as u64;
        Self(format!("{}{}", &token[..11], to_base36(millis)))
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.reverse();
    String::from_utf8(buf).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_alphanumeric() {
        let id = EntryId::generate();
        assert!(id.as_str().len() > 11);
        assert!(id.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_differs() {
        assert_ne!(EntryId::generate(), EntryId::generate());
    }

    #[test]
    fn test_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = EntryId::from("a1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"a1\"");
        let back: EntryId = serde_json::from_str("\"a1\"").unwrap();
        assert_eq!(back, id);
    }
}
