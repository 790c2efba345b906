use crate::link::{Link, LinkDraft};
use crate::service::ServiceError;
use crate::session::Session;
use crate::settings::Settings;

/// Everything the backend loop consumes: requests coming down from the UI,
/// and settled outcomes coming back from the service client.
#[derive(Debug)]
pub enum AppMessageIn {
    ServiceSessionResolved(Option<Session>),
    ServiceLinksFetched(Vec<Link>),
    ServiceLinksFetchFailed(ServiceError),
    ServiceLinkDeleted { slug: String },
    ServiceLinkDeletionFailed { slug: String, error: ServiceError },
    ServiceLinkSaved { link: Link, created: bool },
    ServiceLinkSaveFailed { error: ServiceError },
    ServiceLinkQrReady { slug: String, image: Vec<u8> },
    ServiceLinkQrFailed { slug: String, error: ServiceError },

    UILinksRefreshRequested,
    UILinkDeleteRequested { slug: String },
    UILinkSubmitted(LinkDraft),
    UILinkQrRequested { slug: String },
    UISettingsUpdated(Settings),
    UIExitRequested,
}
