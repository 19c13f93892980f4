//! Avatar URL assembly.
//!
//! Every image URL has the same shape:
//!
//! ```text
//! https://secure.gravatar.com/avatar/<hash>?s=<size>&r=<rating>&d=<default>
//! ```
//!
//! The parameter order is fixed. Downstream consumers match on substrings
//! such as `s=242&r=pg&d=monsterid`, so it must not change.

use crate::hash::EmailHash;
use crate::rating::Rating;
use std::fmt;

/// Base of every image URL handed to callers.
pub const SECURE_BASE: &str = "https://secure.gravatar.com/avatar/";

/// Base of the existence check. `d=404` makes Gravatar answer 404 instead of
/// serving a fallback image when nothing was uploaded.
pub const PROBE_BASE: &str = "https://www.gravatar.com/avatar/";

pub const MIN_SIZE: u32 = 1;
pub const MAX_SIZE: u32 = 512;

/// Clamp a caller-supplied pixel size to `[MIN_SIZE, MAX_SIZE]`.
///
/// Only sizes passed at call time go through here. The configured size is
/// trusted and used as-is.
pub fn clamp_size(size: u32) -> u32 {
    size.clamp(MIN_SIZE, MAX_SIZE)
}

/// Requested `<img>` dimensions. Each axis is optional and resolved
/// independently; the two are never forced equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dimensions {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    pub fn width_only(width: u32) -> Self {
        Self {
            width: Some(width),
            height: None,
        }
    }

    pub fn height_only(height: u32) -> Self {
        Self {
            width: None,
            height: Some(height),
        }
    }
}

/// A fully resolved avatar image URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravatarUrl {
    pub hash: EmailHash,
    pub size: u32,
    pub rating: Rating,
    /// Fallback style (`identicon`, `monsterid`, ...) or a custom image URL.
    pub default: String,
}

impl fmt::Display for GravatarUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}?s={}&r={}&d={}",
            SECURE_BASE,
            self.hash,
            self.size,
            self.rating,
            urlencoding::encode(&self.default)
        )
    }
}

/// URL queried by the existence check for `hash`.
pub fn probe_url(hash: &EmailHash) -> String {
    format!("{}{}?d=404", PROBE_BASE, hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(size: u32, rating: Rating, default: &str) -> GravatarUrl {
        GravatarUrl {
            hash: EmailHash::of("antoine.augusti@gmail.com"),
            size,
            rating,
            default: default.to_string(),
        }
    }

    #[test]
    fn clamp_caps_at_512() {
        assert_eq!(clamp_size(513), 512);
        assert_eq!(clamp_size(u32::MAX), 512);
    }

    #[test]
    fn clamp_keeps_in_range_values() {
        for n in [1, 50, 260, 511, 512] {
            assert_eq!(clamp_size(n), n);
        }
    }

    #[test]
    fn clamp_raises_zero_to_one() {
        assert_eq!(clamp_size(0), 1);
    }

    #[test]
    fn url_has_fixed_parameter_order() {
        assert_eq!(
            url(250, Rating::Pg, "monsterid").to_string(),
            "https://secure.gravatar.com/avatar/91b3b0391936c88c2d8a51754d8d3935?s=250&r=pg&d=monsterid"
        );
    }

    #[test]
    fn custom_default_image_is_percent_encoded() {
        let rendered = url(80, Rating::G, "https://example.com/a b.png").to_string();
        assert!(rendered.ends_with("&d=https%3A%2F%2Fexample.com%2Fa%20b.png"));
    }

    #[test]
    fn probe_url_forces_404() {
        let hash = EmailHash::of("foobar@example.com");
        assert_eq!(
            probe_url(&hash),
            format!("https://www.gravatar.com/avatar/{}?d=404", hash)
        );
    }

    #[test]
    fn dimensions_constructors() {
        assert_eq!(Dimensions::default(), Dimensions { width: None, height: None });
        assert_eq!(Dimensions::new(260, 300).height, Some(300));
        assert_eq!(Dimensions::width_only(10).height, None);
        assert_eq!(Dimensions::height_only(10).width, None);
    }
}
