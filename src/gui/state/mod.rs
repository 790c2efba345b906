use tokio::sync::mpsc::UnboundedSender;

use snip_core::ipc::{client::CoreClient, server::AppMessageIn};
use snip_core::link::Link;
use snip_core::session::Session;
use snip_core::settings::Settings;

use crate::gui::widgets::delete_prompt::{DeletePrompt, DeleteStage};
use crate::gui::widgets::link_editor::LinkEditor;
use crate::gui::widgets::notice::Notices;
use crate::gui::widgets::qr_dialog::QrDialog;

pub struct UIState {
    pub settings: Settings,
    pub session: Option<Session>,
    links: Vec<Link>,

    pub core: CoreClient,
    pub notices: Notices,

    // The three dialogs are intentionally independent: nothing stops two of
    // them from being open at once.
    pub qr_dialog: Option<QrDialog>,
    pub link_editor: Option<LinkEditor>,
    pub delete_prompt: Option<DeletePrompt>,

    exit_requested: bool,
}

impl UIState {
    pub fn new(app_queue_handle: UnboundedSender<AppMessageIn>) -> Self {
        Self {
            settings: Settings::default(),
            session: None,
            links: Vec::default(),
            core: CoreClient::new(app_queue_handle),
            notices: Notices::default(),
            qr_dialog: None,
            link_editor: None,
            delete_prompt: None,
            exit_requested: false,
        }
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    pub fn links(&self) -> Vec<Link> {
        self.links.clone()
    }

    pub fn set_links(&mut self, links: Vec<Link>) {
        self.links = links;
    }

    pub fn request_exit(&mut self) {
        if !self.exit_requested {
            self.exit_requested = true;
            self.core.exit_requested();
        }
    }
}

/// Per-link actions and the dialogs they lead to.
impl UIState {
    pub fn open_qr_dialog(&mut self, link: &Link) {
        self.qr_dialog = Some(QrDialog::new(link.slug.clone(), link.decoded_url()));
        self.core.link_qr_requested(&link.slug);
    }

    pub fn open_link_editor(&mut self, link: Option<&Link>) {
        self.link_editor = Some(match link {
            Some(link) => LinkEditor::edit(link),
            None => LinkEditor::new_link(),
        });
    }

    pub fn open_delete_prompt(&mut self, link: &Link) {
        self.delete_prompt = Some(DeletePrompt::new(link.clone()));
    }

    /// Fires the deletion. Only reachable from the confirmation stage, so a
    /// request that is already in flight cannot be re-triggered.
    pub fn confirm_delete(&mut self) {
        if let Some(prompt) = &mut self.delete_prompt {
            if prompt.stage == DeleteStage::Confirming {
                prompt.stage = DeleteStage::Executing;
                self.core.link_delete_requested(&prompt.link.slug);
            }
        }
    }

    /// Closes the confirmation dialog. Ignored while the deletion is in
    /// flight: its outcome is coming no matter what.
    pub fn cancel_delete(&mut self) {
        if matches!(&self.delete_prompt, Some(prompt) if !prompt.is_executing()) {
            self.delete_prompt = None;
        }
    }

    pub fn is_delete_executing(&self) -> bool {
        matches!(&self.delete_prompt, Some(prompt) if prompt.is_executing())
    }

    pub fn submit_link(&mut self) {
        if let Some(editor) = &mut self.link_editor {
            if editor.saving || !editor.is_url_valid() {
                return;
            }
            editor.saving = true;
            self.core.link_submitted(editor.draft());
        }
    }
}

/// Settled outcomes, delivered from the backend.
impl UIState {
    pub fn handle_link_deleted(&mut self, slug: &str) {
        self.notices.info("Link deleted successfully");
        if matches!(&self.delete_prompt, Some(prompt) if prompt.link.slug == slug) {
            self.delete_prompt = None;
        }
    }

    /// The message is the server's own wording and is displayed verbatim.
    /// The dialog stays open so the user can retry or give up.
    pub fn handle_link_deletion_failed(&mut self, slug: &str, message: String) {
        self.notices.error(message);
        if let Some(prompt) = &mut self.delete_prompt {
            if prompt.link.slug == slug {
                prompt.stage = DeleteStage::Confirming;
            }
        }
    }

    pub fn handle_link_saved(&mut self, link: &Link, created: bool) {
        self.notices
            .info(if created { "Link created" } else { "Link saved" });
        log::debug!("link editor settled for {:?}", link.slug);
        if matches!(&self.link_editor, Some(editor) if editor.saving) {
            self.link_editor = None;
        }
    }

    pub fn handle_link_save_failed(&mut self, message: String) {
        self.notices.error(message);
        if let Some(editor) = &mut self.link_editor {
            editor.saving = false;
        }
    }

    pub fn handle_link_qr_ready(&mut self, slug: &str, image: Vec<u8>) {
        if let Some(dialog) = &mut self.qr_dialog {
            if dialog.slug == slug {
                dialog.image = Some(image);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

    fn ui_state() -> (UIState, UnboundedReceiver<AppMessageIn>) {
        let (tx, rx) = unbounded_channel();
        (UIState::new(tx), rx)
    }

    fn link() -> Link {
        Link::new("abc123", "https://example.com/a%20b")
    }

    #[test]
    fn all_dialogs_start_closed() {
        let (state, _rx) = ui_state();
        assert!(state.qr_dialog.is_none());
        assert!(state.link_editor.is_none());
        assert!(state.delete_prompt.is_none());
        assert!(!state.is_delete_executing());
    }

    #[test]
    fn the_delete_action_only_opens_the_delete_prompt() {
        let (mut state, _rx) = ui_state();
        state.open_delete_prompt(&link());

        let prompt = state.delete_prompt.as_ref().unwrap();
        assert_eq!(prompt.stage, DeleteStage::Confirming);
        assert!(state.qr_dialog.is_none());
        assert!(state.link_editor.is_none());
    }

    #[test]
    fn confirming_issues_exactly_one_deletion_request() {
        let (mut state, mut rx) = ui_state();
        state.open_delete_prompt(&link());
        state.confirm_delete();

        assert!(state.is_delete_executing());
        assert!(matches!(
            rx.try_recv(),
            Ok(AppMessageIn::UILinkDeleteRequested { slug }) if slug == "abc123"
        ));

        // A second click lands while the first request is in flight, and
        // changes nothing.
        state.confirm_delete();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn a_successful_deletion_closes_the_prompt() {
        let (mut state, _rx) = ui_state();
        state.open_delete_prompt(&link());
        state.confirm_delete();

        state.handle_link_deleted("abc123");
        assert!(state.delete_prompt.is_none());

        let last = state.notices.latest().unwrap();
        assert_eq!(last.text, "Link deleted successfully");
    }

    #[test]
    fn a_failed_deletion_reopens_the_confirmation() {
        let (mut state, mut rx) = ui_state();
        state.open_delete_prompt(&link());
        state.confirm_delete();
        let _ = rx.try_recv();

        state.handle_link_deletion_failed("abc123", "Link not found".into());

        let prompt = state.delete_prompt.as_ref().unwrap();
        assert_eq!(prompt.stage, DeleteStage::Confirming);
        assert_eq!(state.notices.latest().unwrap().text, "Link not found");

        // The user may retry from here.
        state.confirm_delete();
        assert!(matches!(
            rx.try_recv(),
            Ok(AppMessageIn::UILinkDeleteRequested { slug }) if slug == "abc123"
        ));
    }

    #[test]
    fn an_empty_server_message_stays_empty() {
        let (mut state, _rx) = ui_state();
        state.open_delete_prompt(&link());
        state.confirm_delete();

        state.handle_link_deletion_failed("abc123", String::new());
        assert_eq!(state.notices.latest().unwrap().text, "");
    }

    #[test]
    fn cancelling_before_confirmation_sends_nothing() {
        let (mut state, mut rx) = ui_state();
        state.open_delete_prompt(&link());
        state.cancel_delete();

        assert!(state.delete_prompt.is_none());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn cancelling_mid_flight_is_ignored() {
        let (mut state, _rx) = ui_state();
        state.open_delete_prompt(&link());
        state.confirm_delete();

        state.cancel_delete();
        assert!(state.is_delete_executing());
    }

    #[test]
    fn the_qr_dialog_receives_the_decoded_url_and_the_raw_slug() {
        let (mut state, mut rx) = ui_state();
        state.open_qr_dialog(&link());

        let dialog = state.qr_dialog.as_ref().unwrap();
        assert_eq!(dialog.slug, "abc123");
        assert_eq!(dialog.url, "https://example.com/a b");
        assert!(matches!(
            rx.try_recv(),
            Ok(AppMessageIn::UILinkQrRequested { slug }) if slug == "abc123"
        ));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn qr_bytes_are_routed_to_the_matching_dialog() {
        let (mut state, _rx) = ui_state();
        state.open_qr_dialog(&link());

        state.handle_link_qr_ready("zzz999", vec![1]);
        assert!(state.qr_dialog.as_ref().unwrap().image.is_none());

        state.handle_link_qr_ready("abc123", vec![1, 2, 3]);
        assert_eq!(
            state.qr_dialog.as_ref().unwrap().image.as_deref(),
            Some(&[1, 2, 3][..])
        );
    }

    #[test]
    fn submitting_the_editor_requires_a_valid_destination() {
        let (mut state, mut rx) = ui_state();
        state.open_link_editor(None);
        state.link_editor.as_mut().unwrap().url = "not a url".into();
        state.submit_link();
        assert!(rx.try_recv().is_err());

        state.link_editor.as_mut().unwrap().url = "https://example.com".into();
        state.submit_link();
        assert!(state.link_editor.as_ref().unwrap().saving);
        assert!(matches!(
            rx.try_recv(),
            Ok(AppMessageIn::UILinkSubmitted(draft)) if !draft.editing
        ));

        // Double submission is a no-op while the first one is in flight.
        state.submit_link();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn a_failed_save_keeps_the_editor_open() {
        let (mut state, _rx) = ui_state();
        state.open_link_editor(Some(&link()));
        state.submit_link();

        state.handle_link_save_failed("Slug already taken".into());
        let editor = state.link_editor.as_ref().unwrap();
        assert!(!editor.saving);
        assert_eq!(state.notices.latest().unwrap().text, "Slug already taken");

        state.handle_link_saved(&link(), false);
        // The editor was not in flight anymore, so it stays open.
        assert!(state.link_editor.is_some());
    }

    #[test]
    fn exit_is_requested_at_most_once() {
        let (mut state, mut rx) = ui_state();
        state.request_exit();
        state.request_exit();

        assert!(matches!(rx.try_recv(), Ok(AppMessageIn::UIExitRequested)));
        assert!(rx.try_recv().is_err());
    }
}
