use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use snip_core::ipc::{server::AppMessageIn, ui::UIMessageIn};
use snip_core::link::{Link, LinkDraft};
use snip_core::service::ServiceError;
use snip_core::session::Session;
use snip_core::settings::{Loadable, Settings, SETTINGS_FILE_PATH};

use crate::core::service::ServiceActorHandle;

#[derive(Clone, Default)]
pub struct ApplicationState {
    pub settings: Settings,
    pub session: Option<Session>,
}

pub struct Application {
    state: ApplicationState,
    events: UnboundedReceiver<AppMessageIn>,

    service: ServiceActorHandle,
    ui_queue: UnboundedSender<UIMessageIn>,
    pub app_queue: UnboundedSender<AppMessageIn>,
}

impl Application {
    pub fn new(ui_queue: UnboundedSender<UIMessageIn>) -> Self {
        let (app_queue, events) = unbounded_channel();
        Self {
            state: ApplicationState::default(),
            events,
            service: ServiceActorHandle::new(app_queue.clone()),
            ui_queue,
            app_queue,
        }
    }

    pub fn run(&mut self) {
        while let Some(event) = self.events.blocking_recv() {
            match event {
                AppMessageIn::ServiceSessionResolved(session) => {
                    self.handle_session_resolved(session);
                }
                AppMessageIn::ServiceLinksFetched(links) => {
                    self.handle_links_fetched(links);
                }
                AppMessageIn::ServiceLinksFetchFailed(error) => {
                    self.handle_links_fetch_failed(error);
                }
                AppMessageIn::ServiceLinkDeleted { slug } => {
                    self.handle_link_deleted(slug);
                }
                AppMessageIn::ServiceLinkDeletionFailed { slug, error } => {
                    self.handle_link_deletion_failed(slug, error);
                }
                AppMessageIn::ServiceLinkSaved { link, created } => {
                    self.handle_link_saved(link, created);
                }
                AppMessageIn::ServiceLinkSaveFailed { error } => {
                    self.handle_link_save_failed(error);
                }
                AppMessageIn::ServiceLinkQrReady { slug, image } => {
                    self.handle_link_qr_ready(slug, image);
                }
                AppMessageIn::ServiceLinkQrFailed { slug, error } => {
                    self.handle_link_qr_failed(slug, error);
                }

                AppMessageIn::UILinksRefreshRequested => {
                    self.service.fetch_links();
                }
                AppMessageIn::UILinkDeleteRequested { slug } => {
                    self.handle_ui_link_delete_requested(slug);
                }
                AppMessageIn::UILinkSubmitted(draft) => {
                    self.handle_ui_link_submitted(draft);
                }
                AppMessageIn::UILinkQrRequested { slug } => {
                    self.service.fetch_qr(&slug);
                }
                AppMessageIn::UISettingsUpdated(settings) => {
                    self.ui_handle_settings_updated(settings);
                }
                AppMessageIn::UIExitRequested => {
                    break;
                }
            }
        }
    }
}

impl Application {
    pub fn initialize(&mut self) {
        self.load_settings(true);
        log::set_max_level(self.state.settings.journal.app_events.level);

        self.service.configure(self.state.settings.service.clone());
        self.service.resolve_session();
        self.service.fetch_links();
    }

    pub fn load_settings(&mut self, fallback: bool) {
        self.state.settings = Settings::from_file(SETTINGS_FILE_PATH, fallback);
        self.ui_handle_settings_requested();
    }

    pub fn ui_handle_settings_requested(&self) {
        self.ui_queue
            .send(UIMessageIn::SettingsChanged(self.state.settings.clone()))
            .unwrap();
    }

    pub fn ui_handle_settings_updated(&mut self, settings: Settings) {
        if self.state.settings.journal.app_events.level != settings.journal.app_events.level {
            log::set_max_level(settings.journal.app_events.level);
        }

        let service_changed = self.state.settings.service != settings.service;
        self.state.settings = settings;
        self.state.settings.to_file(SETTINGS_FILE_PATH);

        if service_changed {
            self.service.configure(self.state.settings.service.clone());
            self.service.resolve_session();
            self.service.fetch_links();
        }
    }

    fn handle_ui_link_delete_requested(&self, slug: String) {
        log::info!("deletion requested for link {:?}", slug);
        self.service.delete_link(&slug);
    }

    fn handle_ui_link_submitted(&self, draft: LinkDraft) {
        log::info!(
            "{} submitted for link {:?}",
            if draft.editing { "changes" } else { "a new link" },
            draft.slug
        );
        self.service.submit_link(draft);
    }

    fn handle_session_resolved(&mut self, session: Option<Session>) {
        match &session {
            Some(s) => log::info!("service session resolved for {:?}", s.username),
            None => log::info!("no service session"),
        }
        self.state.session = session.clone();
        self.ui_queue.send(UIMessageIn::SessionChanged(session)).unwrap();
    }

    fn handle_links_fetched(&self, links: Vec<Link>) {
        log::debug!("fetched {} links", links.len());
        self.ui_queue.send(UIMessageIn::LinksUpdated(links)).unwrap();
    }

    fn handle_links_fetch_failed(&self, error: ServiceError) {
        log::error!("failed to fetch links: {:?}", error);
        self.ui_queue
            .send(UIMessageIn::ServiceErrorOccurred(format!(
                "failed to fetch links: {}",
                error
            )))
            .unwrap();
    }

    fn handle_link_deleted(&self, slug: String) {
        log::info!("link {:?} deleted", slug);
        self.ui_queue.send(UIMessageIn::LinkDeleted { slug }).unwrap();

        // The visible list catches up from the server rather than by local
        // surgery on the UI's copy.
        self.service.fetch_links();
    }

    fn handle_link_deletion_failed(&self, slug: String, error: ServiceError) {
        log::error!("failed to delete link {:?}: {:?}", slug, error);
        self.ui_queue
            .send(UIMessageIn::LinkDeletionFailed {
                slug,
                message: error.to_string(),
            })
            .unwrap();
    }

    fn handle_link_saved(&self, link: Link, created: bool) {
        log::info!(
            "link {:?} {}",
            link.slug,
            if created { "created" } else { "saved" }
        );
        self.ui_queue
            .send(UIMessageIn::LinkSaved { link, created })
            .unwrap();
        self.service.fetch_links();
    }

    fn handle_link_save_failed(&self, error: ServiceError) {
        log::error!("failed to save link: {:?}", error);
        self.ui_queue
            .send(UIMessageIn::LinkSaveFailed {
                message: error.to_string(),
            })
            .unwrap();
    }

    fn handle_link_qr_ready(&self, slug: String, image: Vec<u8>) {
        log::debug!("QR code for {:?} fetched ({} bytes)", slug, image.len());
        self.ui_queue
            .send(UIMessageIn::LinkQrReady { slug, image })
            .unwrap();
    }

    fn handle_link_qr_failed(&self, slug: String, error: ServiceError) {
        log::error!("failed to fetch the QR code for {:?}: {:?}", slug, error);
        self.ui_queue
            .send(UIMessageIn::ServiceErrorOccurred(format!(
                "failed to fetch the QR code: {}",
                error
            )))
            .unwrap();
    }
}
