use eframe::egui;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use snip_core::ipc::{server::AppMessageIn, ui::UIMessageIn};
use snip_core::settings::ThemeMode;

use crate::gui;
use crate::gui::state::UIState;
use crate::gui::widgets;

pub struct ApplicationWindow {
    menu: gui::menu::Menu,
    links: gui::links::LinksView,
    settings: gui::settings::SettingsWindow,

    ui_queue: UnboundedReceiver<UIMessageIn>,
    s: UIState,
}

impl ApplicationWindow {
    pub fn new(
        cc: &eframe::CreationContext,
        ui_queue: UnboundedReceiver<UIMessageIn>,
        app_queue_handle: UnboundedSender<AppMessageIn>,
    ) -> Self {
        let s = UIState::new(app_queue_handle);
        cc.egui_ctx.set_visuals(match s.settings.ui.theme {
            ThemeMode::Dark => egui::Visuals::dark(),
            ThemeMode::Light => egui::Visuals::light(),
        });

        Self {
            menu: gui::menu::Menu::new(),
            links: gui::links::LinksView::default(),
            settings: gui::settings::SettingsWindow::new(),
            ui_queue,
            s,
        }
    }

    pub fn process_pending_events(&mut self) {
        while let Ok(event) = self.ui_queue.try_recv() {
            match event {
                UIMessageIn::SettingsChanged(settings) => {
                    self.s.set_settings(settings);
                }
                UIMessageIn::SessionChanged(session) => {
                    self.s.session = session;
                }
                UIMessageIn::LinksUpdated(links) => {
                    self.s.set_links(links);
                }
                UIMessageIn::LinkDeleted { slug } => {
                    self.s.handle_link_deleted(&slug);
                }
                UIMessageIn::LinkDeletionFailed { slug, message } => {
                    self.s.handle_link_deletion_failed(&slug, message);
                }
                UIMessageIn::LinkSaved { link, created } => {
                    self.s.handle_link_saved(&link, created);
                }
                UIMessageIn::LinkSaveFailed { message } => {
                    self.s.handle_link_save_failed(message);
                }
                UIMessageIn::LinkQrReady { slug, image } => {
                    self.s.handle_link_qr_ready(&slug, image);
                }
                UIMessageIn::ServiceErrorOccurred(message) => {
                    self.s.notices.error(message);
                }
            }
        }
    }

    fn set_theme(&mut self, ctx: &egui::Context) {
        let theme = match self.s.settings.ui.theme {
            ThemeMode::Dark => egui::Visuals::dark(),
            ThemeMode::Light => egui::Visuals::light(),
        };
        ctx.set_visuals(theme);
    }
}

const MIN_IDLE_FRAME_TIME: std::time::Duration = std::time::Duration::from_millis(200);

impl eframe::App for ApplicationWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint_after(MIN_IDLE_FRAME_TIME);
        self.process_pending_events();
        self.set_theme(ctx);

        if ctx.input(|i| i.viewport().close_requested()) {
            self.s.request_exit();
        }

        self.menu.show(ctx, &mut self.s);
        self.links.show(ctx, &mut self.s);

        self.settings
            .show(ctx, &mut self.s, &mut self.menu.show_settings);

        widgets::delete_prompt::show_delete_prompt(ctx, &mut self.s);
        widgets::link_editor::show_link_editor(ctx, &mut self.s);
        widgets::qr_dialog::show_qr_dialog(ctx, &mut self.s);

        self.s.notices.show(ctx);
    }
}
