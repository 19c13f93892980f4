//! Gravatar content ratings.
//!
//! Ratings are ordered from most to least restrictive: `g < pg < r < x`.
//! The crate does not filter anything by rating itself; the code is passed
//! through to Gravatar, which serves the avatar only if it is rated at or
//! below the requested level.

use std::fmt;
use std::str::FromStr;

/// Content-safety level accepted by the Gravatar `r=` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Rating {
    /// Suitable for display on all websites with any audience type.
    #[default]
    G,
    /// May contain rude gestures, provocatively dressed individuals, mild violence.
    Pg,
    /// May contain harsh profanity, intense violence, nudity, hard drug use.
    R,
    /// May contain hardcore sexual imagery or extremely disturbing violence.
    X,
}

impl Rating {
    pub const ALL: [Rating; 4] = [Rating::G, Rating::Pg, Rating::R, Rating::X];

    /// The lowercase code sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::G => "g",
            Rating::Pg => "pg",
            Rating::R => "r",
            Rating::X => "x",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rating '{0}' (expected one of g, pg, r, x)")]
pub struct ParseRatingError(pub String);

impl FromStr for Rating {
    type Err = ParseRatingError;

    /// Accepts the wire codes case-insensitively, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "g" => Ok(Rating::G),
            "pg" => Ok(Rating::Pg),
            "r" => Ok(Rating::R),
            "x" => Ok(Rating::X),
            _ => Err(ParseRatingError(s.to_string())),
        }
    }
}
