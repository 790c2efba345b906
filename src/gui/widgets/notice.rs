use std::time::{Duration, Instant};

use eframe::egui;

const NOTICE_TTL: Duration = Duration::from_secs(4);
const NOTICE_MAX_WIDTH: f32 = 320.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Clone, Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    created: Instant,
}

impl Notice {
    fn new(kind: NoticeKind, text: String) -> Self {
        Self {
            kind,
            text,
            created: Instant::now(),
        }
    }

    fn expired(&self) -> bool {
        self.created.elapsed() >= NOTICE_TTL
    }
}

/// Transient, non-blocking messages stacked in the top-right corner. Texts
/// are displayed as given, empty ones included: outcome messages coming
/// from the server are never rephrased here.
#[derive(Default)]
pub struct Notices {
    items: Vec<Notice>,
}

impl Notices {
    pub fn info(&mut self, text: impl Into<String>) {
        self.push(NoticeKind::Info, text.into());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text.into());
    }

    fn push(&mut self, kind: NoticeKind, text: String) {
        log::debug!("notice ({:?}): {:?}", kind, text);
        self.items.push(Notice::new(kind, text));
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.items.last()
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        self.items.retain(|notice| !notice.expired());
        if self.items.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("notices"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                for notice in &self.items {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.set_max_width(NOTICE_MAX_WIDTH);
                        match notice.kind {
                            NoticeKind::Info => ui.label(&notice.text),
                            NoticeKind::Error => {
                                ui.colored_label(ui.visuals().error_fg_color, &notice.text)
                            }
                        };
                    });
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_latest_notice_wins() {
        let mut notices = Notices::default();
        notices.info("Link deleted successfully");
        notices.error("Link not found");

        let last = notices.latest().unwrap();
        assert_eq!(last.kind, NoticeKind::Error);
        assert_eq!(last.text, "Link not found");
    }

    #[test]
    fn empty_texts_are_kept_as_is() {
        let mut notices = Notices::default();
        notices.error("");
        assert_eq!(notices.latest().unwrap().text, "");
    }

    #[test]
    fn fresh_notices_have_not_expired() {
        let mut notices = Notices::default();
        notices.info("hi");
        assert!(!notices.latest().unwrap().expired());
    }
}
