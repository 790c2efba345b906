use crate::link::Link;
use crate::session::Session;
use crate::settings::Settings;

#[derive(Debug)]
pub enum UIMessageIn {
    SettingsChanged(Settings),
    SessionChanged(Option<Session>),
    LinksUpdated(Vec<Link>),
    LinkDeleted {
        slug: String,
    },
    LinkDeletionFailed {
        slug: String,
        message: String,
    },
    LinkSaved {
        link: Link,
        created: bool,
    },
    LinkSaveFailed {
        message: String,
    },
    LinkQrReady {
        slug: String,
        image: Vec<u8>,
    },
    ServiceErrorOccurred(String),
}
