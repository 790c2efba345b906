use serde::{Deserialize, Serialize};

/// Whoever the service recognizes behind the configured API token. The UI
/// only cares about its presence; the username is shown as a courtesy.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
}
