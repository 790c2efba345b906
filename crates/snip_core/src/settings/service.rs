use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;

/// Where the link service lives and how to talk to it. An empty API token
/// means anonymous access: the service still lists and resolves links, but
/// won't report a session.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Service {
    pub base_url: String,
    pub api_token: String,
    pub request_timeout_seconds: u64,
}

impl Default for Service {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_token: String::new(),
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
        }
    }
}

impl Service {
    pub fn has_token(&self) -> bool {
        !self.api_token.is_empty()
    }
}
