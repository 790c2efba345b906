use eframe::egui;

use snip_core::settings::ThemeMode;

use crate::gui::state::UIState;

#[derive(Default)]
pub struct Menu {
    pub show_settings: bool,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ctx: &egui::Context, state: &mut UIState) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                self.show_application_menu(ui, ctx, state);
                self.show_links_menu(ui, state);
                self.show_theme_toggle(ui, state);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(snip_core::VERSION);
                    ui.separator();
                    match &state.session {
                        Some(session) => {
                            ui.label(format!("signed in as {}", session.username));
                        }
                        None => {
                            ui.weak("not signed in");
                        }
                    }
                });
            });
        });
    }

    fn show_application_menu(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        state: &mut UIState,
    ) {
        ui.menu_button("application", |ui| {
            if ui.button("settings").clicked() {
                self.show_settings = !self.show_settings;
                ui.close();
            }

            ui.separator();

            if ui.button("exit").clicked() {
                state.request_exit();
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                ui.close();
            }
        });
    }

    fn show_links_menu(&mut self, ui: &mut egui::Ui, state: &mut UIState) {
        ui.menu_button("links", |ui| {
            if ui.button("refresh").clicked() {
                state.core.links_refresh_requested();
                ui.close();
            }
            if ui.button("new link").clicked() {
                state.open_link_editor(None);
                ui.close();
            }
        });
    }

    fn show_theme_toggle(&self, ui: &mut egui::Ui, state: &mut UIState) {
        let label = match state.settings.ui.theme {
            ThemeMode::Dark => "☀",
            ThemeMode::Light => "🌙",
        };
        if ui.button(label).on_hover_text("toggle the theme").clicked() {
            state.settings.ui.theme = match state.settings.ui.theme {
                ThemeMode::Dark => ThemeMode::Light,
                ThemeMode::Light => ThemeMode::Dark,
            };
            state.core.settings_updated(&state.settings);
        }
    }
}
