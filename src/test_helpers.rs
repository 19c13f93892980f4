//! Shared test utilities.
//!
//! Builders for configuration and clients, plus [`FakeProbe`], a
//! [`HeadProbe`] that records every URL it is asked about and answers with
//! a canned status or failure, so unit tests never reach gravatar.com.
//!
//! ```rust,ignore
//! use crate::test_helpers::*;
//!
//! let gravatar = client("monsterid", 250, "pg");
//! assert!(gravatar.src("a@b.c", None, None).contains("s=250"));
//! ```

use std::sync::Mutex;

use crate::config::{ConfigRepository, GravatarConfig};
use crate::gravatar::Gravatar;
use crate::probe::{HeadProbe, ProbeError};

// =========================================================================
// Config builders
// =========================================================================

/// A repository holding exactly the three Gravatar keys.
pub fn config_repo(default: &str, size: u32, rating: &str) -> ConfigRepository {
    let toml = format!(
        "[gravatar]\ndefault = \"{default}\"\nsize = {size}\nmaxRating = \"{rating}\"\n"
    );
    ConfigRepository::from_toml_str(&toml)
        .unwrap_or_else(|e| panic!("test config did not parse: {e}\n{toml}"))
}

/// Validated config; panics on invalid input.
pub fn config(default: &str, size: u32, rating: &str) -> GravatarConfig {
    GravatarConfig::from_source(&config_repo(default, size, rating)).unwrap()
}

/// Client whose probe answers 404 to everything.
pub fn client(default: &str, size: u32, rating: &str) -> Gravatar<FakeProbe> {
    Gravatar::with_probe(config(default, size, rating), FakeProbe::answering(404))
}

// =========================================================================
// Fake probe
// =========================================================================

/// Records requested URLs. Uses Mutex (not RefCell) so it stays Sync.
#[derive(Debug)]
pub struct FakeProbe {
    outcome: Result<u16, String>,
    requests: Mutex<Vec<String>>,
}

impl FakeProbe {
    pub fn answering(status: u16) -> Self {
        Self {
            outcome: Ok(status),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            outcome: Err(reason.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl HeadProbe for FakeProbe {
    fn head(&self, url: &str) -> Result<u16, ProbeError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.outcome.clone().map_err(|reason| ProbeError::Transport {
            url: url.to_string(),
            reason,
        })
    }
}
