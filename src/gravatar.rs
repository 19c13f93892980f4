//! The Gravatar client.
//!
//! [`Gravatar`] turns an email address into a hash, an image URL, an `<img>`
//! tag, or an answer to "did this person upload an avatar?". All state is
//! the configuration read at construction, so every call is a pure function
//! of its arguments except [`Gravatar::exists`], which makes one HEAD request.
//!
//! # Size resolution
//!
//! | Caller passes | Size used |
//! |---|---|
//! | nothing | configured `size`, as-is |
//! | `n` | `n` clamped to `1..=512` |
//!
//! # `image` and the single size parameter
//!
//! Gravatar serves square images and accepts one `s=` value. When `image`
//! is given separate width and height, the URL is built from the height
//! (clamped), while the tag's `height`/`width` attributes keep the requested
//! values so the browser scales the square image into the requested box.

use crate::avatar::{self, Dimensions, GravatarUrl};
use crate::config::{ConfigError, ConfigSource, GravatarConfig};
use crate::hash::EmailHash;
use crate::markup;
use crate::probe::{HeadProbe, ProbeError, UreqProbe};
use crate::rating::Rating;

#[derive(Debug, Clone)]
pub struct Gravatar<P = UreqProbe> {
    config: GravatarConfig,
    probe: P,
}

impl Gravatar<UreqProbe> {
    /// Build a client that checks existence over the network.
    pub fn new(config: GravatarConfig) -> Self {
        Self::with_probe(config, UreqProbe::new())
    }

    /// Read `gravatar.default`, `gravatar.size` and `gravatar.maxRating`
    /// from `source`. No I/O happens here.
    pub fn from_source<C: ConfigSource>(source: &C) -> Result<Self, ConfigError> {
        Ok(Self::new(GravatarConfig::from_source(source)?))
    }
}

impl<P: HeadProbe> Gravatar<P> {
    pub fn with_probe(config: GravatarConfig, probe: P) -> Self {
        Self { config, probe }
    }

    pub fn config(&self) -> &GravatarConfig {
        &self.config
    }

    pub fn hash(&self, email: &str) -> EmailHash {
        EmailHash::of(email)
    }

    /// Whether an avatar was uploaded for `email`.
    ///
    /// `Ok(true)` on HTTP 200, `Ok(false)` on any other status. A request
    /// that fails before a status arrives is reported as an error rather
    /// than as "no avatar".
    pub fn exists(&self, email: &str) -> Result<bool, ProbeError> {
        let url = avatar::probe_url(&self.hash(email));
        let status = self.probe.head(&url)?;
        log::debug!("{} answered {}", url, status);
        Ok(status == 200)
    }

    /// Resolved image URL for `email`.
    pub fn url(&self, email: &str, size: Option<u32>, rating: Option<Rating>) -> GravatarUrl {
        GravatarUrl {
            hash: self.hash(email),
            size: size.map_or(self.config.size, avatar::clamp_size),
            rating: rating.unwrap_or(self.config.max_rating),
            default: self.config.default.clone(),
        }
    }

    /// Image URL as a string, e.g.
    /// `https://secure.gravatar.com/avatar/<hash>?s=80&r=g&d=identicon`.
    pub fn src(&self, email: &str, size: Option<u32>, rating: Option<Rating>) -> String {
        self.url(email, size, rating).to_string()
    }

    /// `<img>` tag for `email`.
    ///
    /// Axes missing from `dimensions` fall back to the configured size.
    /// `alt` defaults to the empty string.
    pub fn image(
        &self,
        email: &str,
        alt: Option<&str>,
        dimensions: Dimensions,
        rating: Option<Rating>,
    ) -> String {
        let width = dimensions.width.unwrap_or(self.config.size);
        let height = dimensions.height.unwrap_or(self.config.size);
        let url = self.url(email, dimensions.height, rating);
        markup::render_img(&url, alt.unwrap_or_default(), height, width).into_string()
    }
}
