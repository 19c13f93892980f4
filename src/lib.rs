//! # Gravatar URL
//!
//! Builds Gravatar avatar URLs and `<img>` tags from an email address, and
//! checks whether an address has an uploaded avatar.
//!
//! ```no_run
//! use gravatar_url::{ConfigRepository, Dimensions, Gravatar};
//!
//! let config = ConfigRepository::from_toml_str(
//!     "[gravatar]\ndefault = \"identicon\"\nsize = 80\nmaxRating = \"pg\"\n",
//! )?;
//! let gravatar = Gravatar::from_source(&config)?;
//!
//! let src = gravatar.src("someone@example.com", Some(120), None);
//! let tag = gravatar.image("someone@example.com", Some("Someone"), Dimensions::default(), None);
//! let uploaded = gravatar.exists("someone@example.com")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`gravatar`] | The client: `hash`, `src`, `image`, `exists` |
//! | [`config`] | `ConfigSource` lookups, TOML loading and merging, validation |
//! | [`hash`] | MD5 of the trimmed, lowercased address |
//! | [`avatar`] | URL value object, size clamping, requested dimensions |
//! | [`markup`] | `<img>` rendering with Maud |
//! | [`probe`] | HEAD-request seam used by `exists`, backed by `ureq` |
//! | [`rating`] | `g`, `pg`, `r`, `x` content ratings |
//!
//! # Design Decisions
//!
//! ## Configuration Is Trusted, Arguments Are Clamped
//!
//! Sizes passed per call are clamped to `1..=512`. The configured size is
//! used exactly as written, so an operator can deliberately request larger
//! images site-wide.
//!
//! ## Network Failures Are Errors
//!
//! `exists` answers `false` only when Gravatar says so (any status other than
//! 200). A DNS failure or refused connection surfaces as
//! [`ProbeError`](probe::ProbeError); reporting "no avatar" during an outage
//! would be wrong for every address at once.
//!
//! ## Injected Probe
//!
//! The one network call goes through the [`HeadProbe`](probe::HeadProbe)
//! trait. [`Gravatar`] is generic over it, defaulting to
//! [`UreqProbe`](probe::UreqProbe), so tests substitute a fake without any
//! dynamic dispatch.

pub mod avatar;
pub mod config;
pub mod gravatar;
pub mod hash;
pub mod markup;
pub mod probe;
pub mod rating;

pub use avatar::{Dimensions, GravatarUrl};
pub use config::{ConfigError, ConfigRepository, ConfigSource, GravatarConfig};
pub use gravatar::Gravatar;
pub use hash::EmailHash;
pub use probe::{HeadProbe, ProbeError, UreqProbe};
pub use rating::Rating;

#[cfg(test)]
pub(crate) mod test_helpers;
