use std::time::Duration;

use clap::Parser;
use rand::{rng, Rng};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use snip_core::ipc::server::AppMessageIn;
use snip_core::ipc::ui::UIMessageIn;
use snip_core::link::Link;
use snip_core::session::Session;

const SAMPLE_DESTINATIONS: &[&str] = &[
    "https://example.com/files/annual%20report.pdf",
    "https://en.wikipedia.org/wiki/URL%20shortening",
    "https://example.com/plain/path",
    "https://docs.rs/percent-encoding",
    "https://example.com/?q=1%2B2%3D3",
];

#[derive(Parser, Debug)]
#[command(name = "visual-tests")]
struct Args {
    /// Number of synthetic links to seed the table with
    #[arg(long, default_value_t = 12)]
    links: usize,

    /// Pretend there is no session (the edit action disappears)
    #[arg(long)]
    anonymous: bool,

    /// Make every deletion fail with this server message
    #[arg(long)]
    fail_deletions_with: Option<String>,

    /// How long the fake service sits on each request, in milliseconds
    #[arg(long, default_value_t = 1500)]
    latency_ms: u64,
}

fn random_slug() -> String {
    rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(6)
        .map(char::from)
        .collect::<String>()
        .to_lowercase()
}

fn generate_links(count: usize) -> Vec<Link> {
    (0..count)
        .map(|i| {
            let mut link = Link::new(
                &random_slug(),
                SAMPLE_DESTINATIONS[i % SAMPLE_DESTINATIONS.len()],
            );
            link.visits = rng().random_range(0..5000);
            link
        })
        .collect()
}

struct FakeService {
    requests: UnboundedReceiver<AppMessageIn>,
    ui: UnboundedSender<UIMessageIn>,
    links: Vec<Link>,
    failure: Option<String>,
    latency: Duration,
}

impl FakeService {
    fn run(&mut self) {
        while let Some(request) = self.requests.blocking_recv() {
            match request {
                AppMessageIn::UILinkDeleteRequested { slug } => {
                    std::thread::sleep(self.latency);
                    match self.failure.clone() {
                        Some(message) => {
                            self.send(UIMessageIn::LinkDeletionFailed { slug, message });
                        }
                        None => {
                            self.links.retain(|link| link.slug != slug);
                            self.send(UIMessageIn::LinkDeleted { slug });
                            self.push_links();
                        }
                    }
                }
                AppMessageIn::UILinkSubmitted(draft) => {
                    std::thread::sleep(self.latency);
                    let slug = match draft.slug.is_empty() {
                        true => random_slug(),
                        false => draft.slug.clone(),
                    };
                    let mut link = Link::new(&slug, &draft.url);
                    link.description = draft.description.clone();

                    self.links.retain(|l| l.slug != slug);
                    self.links.insert(0, link.clone());
                    self.send(UIMessageIn::LinkSaved {
                        link,
                        created: !draft.editing,
                    });
                    self.push_links();
                }
                AppMessageIn::UILinkQrRequested { .. } => {
                    // No QR endpoint here: the dialog is left showing its
                    // loading state.
                }
                AppMessageIn::UILinksRefreshRequested => {
                    self.push_links();
                }
                AppMessageIn::UIExitRequested => {
                    break;
                }
                _ => {}
            }
        }
    }

    fn push_links(&self) {
        self.send(UIMessageIn::LinksUpdated(self.links.clone()));
    }

    fn send(&self, message: UIMessageIn) {
        // The window may already be gone while we were sleeping.
        let _ = self.ui.send(message);
    }
}

fn main() {
    let args = Args::parse();

    let (ui_queue_handle, ui_queue) = unbounded_channel();
    let (app_queue_handle, app_queue) = unbounded_channel();

    let session = match args.anonymous {
        true => None,
        false => Some(Session {
            username: "visual-tester".into(),
        }),
    };
    ui_queue_handle
        .send(UIMessageIn::SessionChanged(session))
        .unwrap();

    let mut service = FakeService {
        requests: app_queue,
        ui: ui_queue_handle.clone(),
        links: generate_links(args.links),
        failure: args.fail_deletions_with.clone(),
        latency: Duration::from_millis(args.latency_ms),
    };
    service.push_links();

    let service_thread = std::thread::spawn(move || {
        service.run();
    });

    snip::run_app(ui_queue, app_queue_handle).expect("failed to set up the app window");
    service_thread.join().unwrap();
}
