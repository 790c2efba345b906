use tokio::sync::mpsc::UnboundedSender;

use crate::ipc::server::AppMessageIn;
use crate::link::LinkDraft;
use crate::settings::Settings;

/// The UI's handle on the backend queue. A dead backend is unrecoverable,
/// hence the unwraps.
#[derive(Debug)]
pub struct CoreClient {
    server: UnboundedSender<AppMessageIn>,
}

impl CoreClient {
    pub fn new(server: UnboundedSender<AppMessageIn>) -> Self {
        Self { server }
    }
}

impl CoreClient {
    pub fn links_refresh_requested(&self) {
        self.server.send(AppMessageIn::UILinksRefreshRequested).unwrap();
    }

    pub fn link_delete_requested(&self, slug: &str) {
        self.server
            .send(AppMessageIn::UILinkDeleteRequested {
                slug: slug.to_owned(),
            })
            .unwrap();
    }

    pub fn link_submitted(&self, draft: LinkDraft) {
        self.server.send(AppMessageIn::UILinkSubmitted(draft)).unwrap();
    }

    pub fn link_qr_requested(&self, slug: &str) {
        self.server
            .send(AppMessageIn::UILinkQrRequested {
                slug: slug.to_owned(),
            })
            .unwrap();
    }

    pub fn settings_updated(&self, settings: &Settings) {
        self.server
            .send(AppMessageIn::UISettingsUpdated(settings.clone()))
            .unwrap();
    }

    pub fn exit_requested(&self) {
        self.server.send(AppMessageIn::UIExitRequested).unwrap();
    }
}
