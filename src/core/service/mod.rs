mod actor;
#[cfg(test)]
mod actor_test;

use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};

use crate::actor::{Actor, ActorHandle};

use snip_core::ipc::server::AppMessageIn;
use snip_core::link::LinkDraft;
use snip_core::settings::Service;

#[derive(Debug)]
pub enum ServiceMessageIn {
    Configure(Service),
    ResolveSession,
    FetchLinks,
    DeleteLink(String),
    SubmitLink(LinkDraft),
    FetchQr(String),
}

pub struct ServiceActorHandle {
    actor: UnboundedSender<ServiceMessageIn>,
}

impl ActorHandle for ServiceActorHandle {}

impl ServiceActorHandle {
    pub fn new(app_event_sender: UnboundedSender<AppMessageIn>) -> Self {
        let (service_event_sender, service_event_receiver) = unbounded_channel();
        let mut actor = actor::ServiceActor::new(service_event_receiver, app_event_sender);
        std::thread::spawn(move || {
            actor.run();
        });
        Self {
            actor: service_event_sender,
        }
    }

    pub fn configure(&self, settings: Service) {
        self.actor
            .send(ServiceMessageIn::Configure(settings))
            .expect("failed to queue a service reconfiguration");
    }

    pub fn resolve_session(&self) {
        self.actor
            .send(ServiceMessageIn::ResolveSession)
            .expect("failed to queue a session lookup");
    }

    pub fn fetch_links(&self) {
        self.actor
            .send(ServiceMessageIn::FetchLinks)
            .expect("failed to queue a link list fetch");
    }

    pub fn delete_link(&self, slug: &str) {
        self.actor
            .send(ServiceMessageIn::DeleteLink(slug.to_owned()))
            .expect("failed to queue a link deletion");
    }

    pub fn submit_link(&self, draft: LinkDraft) {
        self.actor
            .send(ServiceMessageIn::SubmitLink(draft))
            .expect("failed to queue a link submission");
    }

    pub fn fetch_qr(&self, slug: &str) {
        self.actor
            .send(ServiceMessageIn::FetchQr(slug.to_owned()))
            .expect("failed to queue a QR code fetch");
    }
}
