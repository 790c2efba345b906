use std::io::Read;
use std::time::Duration;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::actor::Actor;
use crate::core::service::ServiceMessageIn;

use snip_core::ipc::server::AppMessageIn;
use snip_core::link::{Link, LinkDraft};
use snip_core::session::Session;
use snip_core::settings::Service;

pub struct ServiceActor {
    input: UnboundedReceiver<ServiceMessageIn>,
    output: UnboundedSender<AppMessageIn>,

    settings: Service,
    agent: ureq::Agent,
}

impl Actor<ServiceMessageIn, AppMessageIn> for ServiceActor {
    fn new(input: UnboundedReceiver<ServiceMessageIn>, output: UnboundedSender<AppMessageIn>) -> Self {
        let settings = Service::default();
        let agent = build_agent(&settings);
        Self {
            input,
            output,
            settings,
            agent,
        }
    }

    fn handle_message(&mut self, message: ServiceMessageIn) {
        match message {
            ServiceMessageIn::Configure(settings) => self.configure(settings),
            ServiceMessageIn::ResolveSession => self.resolve_session(),
            ServiceMessageIn::FetchLinks => self.fetch_links(),
            ServiceMessageIn::DeleteLink(slug) => self.delete_link(slug),
            ServiceMessageIn::SubmitLink(draft) => self.submit_link(draft),
            ServiceMessageIn::FetchQr(slug) => self.fetch_qr(slug),
        }
    }

    fn run(&mut self) {
        while let Some(msg) = self.input.blocking_recv() {
            self.handle_message(msg);
        }
    }
}

fn build_agent(settings: &Service) -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(settings.request_timeout_seconds))
        .build()
}

pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}

impl ServiceActor {
    fn configure(&mut self, settings: Service) {
        log::debug!("link service client now points at {}", settings.base_url);
        self.agent = build_agent(&settings);
        self.settings = settings;
    }

    fn endpoint(&self, path: &str) -> String {
        endpoint(&self.settings.base_url, path)
    }

    fn request(&self, method: &str, url: &str) -> ureq::Request {
        let mut request = self.agent.request(method, url);
        if self.settings.has_token() {
            request = request.set(
                "Authorization",
                &format!("Bearer {}", self.settings.api_token),
            );
        }
        request
    }

    fn resolve_session(&self) {
        if !self.settings.has_token() {
            self.output
                .send(AppMessageIn::ServiceSessionResolved(None))
                .unwrap();
            return;
        }

        let session = match self.request("GET", &self.endpoint("api/session")).call() {
            Ok(response) => match response.into_json::<Session>() {
                Ok(session) => Some(session),
                Err(e) => {
                    log::warn!("malformed session payload: {:?}", e);
                    None
                }
            },
            Err(ureq::Error::Status(401 | 403, _)) => None,
            Err(e) => {
                log::warn!("failed to resolve the session: {:?}", e);
                None
            }
        };
        self.output
            .send(AppMessageIn::ServiceSessionResolved(session))
            .unwrap();
    }

    fn fetch_links(&self) {
        let message = match self.request("GET", &self.endpoint("api/links")).call() {
            Ok(response) => match response.into_json::<Vec<Link>>() {
                Ok(links) => AppMessageIn::ServiceLinksFetched(links),
                Err(e) => AppMessageIn::ServiceLinksFetchFailed(e.into()),
            },
            Err(e) => AppMessageIn::ServiceLinksFetchFailed(e.into()),
        };
        self.output.send(message).unwrap();
    }

    // Settles exactly once: every deletion request produces a single
    // outcome message, success or failure.
    fn delete_link(&self, slug: String) {
        let url = self.endpoint(&format!("api/links/{}", slug));
        let message = match self.request("DELETE", &url).call() {
            Ok(_) => AppMessageIn::ServiceLinkDeleted { slug },
            Err(e) => AppMessageIn::ServiceLinkDeletionFailed {
                slug,
                error: e.into(),
            },
        };
        self.output.send(message).unwrap();
    }

    fn submit_link(&self, draft: LinkDraft) {
        let result = if draft.editing {
            let url = self.endpoint(&format!("api/links/{}", draft.slug));
            self.request("PATCH", &url).send_json(draft.payload())
        } else {
            self.request("POST", &self.endpoint("api/links"))
                .send_json(draft.payload())
        };

        let message = match result {
            Ok(response) => match response.into_json::<Link>() {
                Ok(link) => AppMessageIn::ServiceLinkSaved {
                    link,
                    created: !draft.editing,
                },
                Err(e) => AppMessageIn::ServiceLinkSaveFailed { error: e.into() },
            },
            Err(e) => AppMessageIn::ServiceLinkSaveFailed { error: e.into() },
        };
        self.output.send(message).unwrap();
    }

    fn fetch_qr(&self, slug: String) {
        let url = self.endpoint(&format!("api/links/{}/qr", slug));
        let message = match self.request("GET", &url).call() {
            Ok(response) => {
                let mut image = Vec::new();
                match response.into_reader().read_to_end(&mut image) {
                    Ok(_) => AppMessageIn::ServiceLinkQrReady { slug, image },
                    Err(e) => AppMessageIn::ServiceLinkQrFailed {
                        slug,
                        error: e.into(),
                    },
                }
            }
            Err(e) => AppMessageIn::ServiceLinkQrFailed {
                slug,
                error: e.into(),
            },
        };
        self.output.send(message).unwrap();
    }
}
