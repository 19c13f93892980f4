//! Existence probe.
//!
//! The [`HeadProbe`] trait is the single seam between the client and the
//! network: one HEAD request in, one status code out. The production
//! implementation is [`UreqProbe`], a blocking `ureq` agent. Tests swap in a
//! recording fake so no real requests are made.

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    /// The request never produced an HTTP status (DNS, refused, timeout, TLS).
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },
}

/// Issue a body-less request and report the HTTP status.
///
/// Any status, including 4xx and 5xx, is a successful probe. Only failures
/// that yield no status at all are errors.
pub trait HeadProbe {
    fn head(&self, url: &str) -> Result<u16, ProbeError>;
}

/// Blocking HEAD requests through a shared `ureq::Agent`.
///
/// No timeout is set unless one is requested with [`UreqProbe::with_timeout`].
#[derive(Debug, Clone)]
pub struct UreqProbe {
    agent: ureq::Agent,
}

impl UreqProbe {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    /// Bound the whole request, connect to last byte, by `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
        }
    }

    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadProbe for UreqProbe {
    fn head(&self, url: &str) -> Result<u16, ProbeError> {
        log::debug!("HEAD {}", url);
        match self.agent.head(url).call() {
            Ok(response) => Ok(response.status()),
            Err(ureq::Error::Status(code, _)) => Ok(code),
            Err(ureq::Error::Transport(transport)) => {
                log::debug!("HEAD {} failed: {}", url, transport);
                Err(ProbeError::Transport {
                    url: url.to_string(),
                    reason: transport.to_string(),
                })
            }
        }
    }
}
