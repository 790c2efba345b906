use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

use crate::DEFAULT_DATETIME_FORMAT;

/// A shortened link, as the service stores it. The destination URL is kept
/// percent-encoded at rest and only decoded for display.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub slug: String,
    pub url: String,
    pub description: Option<String>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub visits: u64,
}

impl Link {
    pub fn new(slug: &str, url: &str) -> Self {
        Self {
            slug: slug.to_owned(),
            url: url.to_owned(),
            ..Default::default()
        }
    }

    /// The destination URL in its human-readable form.
    pub fn decoded_url(&self) -> String {
        percent_decode_str(&self.url).decode_utf8_lossy().to_string()
    }

    pub fn short_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.slug)
    }

    pub fn formatted_created_at(&self) -> String {
        match self.created_at {
            Some(when) => when
                .with_timezone(&chrono::Local)
                .format(DEFAULT_DATETIME_FORMAT)
                .to_string(),
            None => "-".to_owned(),
        }
    }
}

/// What the link editor submits: either a new link, or changes to an
/// existing one (`editing`). The discriminator never goes on the wire.
#[derive(Clone, Debug, Default)]
pub struct LinkDraft {
    pub slug: String,
    pub url: String,
    pub description: Option<String>,
    pub editing: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct LinkPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LinkDraft {
    pub fn payload(&self) -> LinkPayload {
        LinkPayload {
            slug: match self.slug.is_empty() {
                true => None,
                false => Some(self.slug.clone()),
            },
            url: self.url.clone(),
            description: self.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decoding_a_stored_url() {
        let link = Link::new("abc123", "https://example.com/a%20b?q=1%2B2");
        assert_eq!(link.decoded_url(), "https://example.com/a b?q=1+2");
    }

    #[test]
    fn decoding_leaves_plain_urls_alone() {
        let link = Link::new("abc123", "https://example.com/plain");
        assert_eq!(link.decoded_url(), "https://example.com/plain");

        // Broken escapes pass through as-is instead of failing.
        let link = Link::new("abc123", "https://example.com/%zz");
        assert_eq!(link.decoded_url(), "https://example.com/%zz");
    }

    #[test]
    fn short_url_never_doubles_the_slash() {
        let link = Link::new("abc123", "https://example.com");
        assert_eq!(link.short_url("https://sn.ip"), "https://sn.ip/abc123");
        assert_eq!(link.short_url("https://sn.ip/"), "https://sn.ip/abc123");
    }

    #[test]
    fn missing_creation_time_renders_as_a_dash() {
        let link = Link::new("abc123", "https://example.com");
        assert_eq!(link.formatted_created_at(), "-");
    }

    #[test]
    fn empty_draft_slug_is_left_to_the_server() {
        let draft = LinkDraft {
            slug: String::new(),
            url: "https://example.com".into(),
            description: None,
            editing: false,
        };
        assert!(draft.payload().slug.is_none());

        let draft = LinkDraft {
            slug: "abc123".into(),
            ..draft
        };
        assert_eq!(draft.payload().slug.as_deref(), Some("abc123"));
    }
}
