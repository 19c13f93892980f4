//! Email hashing.
//!
//! Gravatar identifies an account by the MD5 digest of its email address,
//! trimmed and lowercased. The same normalisation applies to every caller,
//! so `" Foo@Example.com"` and `"foo@example.com"` share one avatar.

use std::fmt;

/// 32-character lowercase hex MD5 digest of a normalised email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailHash(String);

impl EmailHash {
    /// Hash an email address. Never fails: the empty string hashes to
    /// `d41d8cd98f00b204e9800998ecf8427e` like any other input.
    pub fn of(email: &str) -> Self {
        let normalized = email.trim().to_lowercase();
        let digest = md5::compute(normalized.as_bytes());
        let hex = format!("{:x}", digest);
        log::trace!("hashed {:?} -> {}", normalized, hex);
        EmailHash(hex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EmailHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
