use eframe::egui;

use snip_core::settings::Settings;

use crate::gui::state::UIState;

const LOG_LEVELS: &[log::LevelFilter] = &[
    log::LevelFilter::Off,
    log::LevelFilter::Error,
    log::LevelFilter::Warn,
    log::LevelFilter::Info,
    log::LevelFilter::Debug,
    log::LevelFilter::Trace,
];

/// Edits a draft copy of the settings; nothing reaches the backend until
/// "save".
#[derive(Default)]
pub struct SettingsWindow {
    draft: Option<Settings>,
}

impl SettingsWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ctx: &egui::Context, state: &mut UIState, is_open: &mut bool) {
        if !*is_open {
            self.draft = None;
            return;
        }

        let draft = self.draft.get_or_insert_with(|| state.settings.clone());

        let mut save = false;
        let mut cancel = false;
        let mut window_open = true;

        egui::Window::new("settings")
            .open(&mut window_open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                egui::Grid::new("settings-grid").num_columns(2).show(ui, |ui| {
                    ui.label("service URL");
                    ui.add(
                        egui::TextEdit::singleline(&mut draft.service.base_url)
                            .hint_text("http://localhost:3000"),
                    );
                    ui.end_row();

                    ui.label("API token");
                    ui.add(
                        egui::TextEdit::singleline(&mut draft.service.api_token)
                            .password(true)
                            .hint_text("empty for anonymous access"),
                    );
                    ui.end_row();

                    ui.label("log level");
                    egui::ComboBox::from_id_salt("log-level")
                        .selected_text(draft.journal.app_events.level.to_string())
                        .show_ui(ui, |ui| {
                            for level in LOG_LEVELS {
                                ui.selectable_value(
                                    &mut draft.journal.app_events.level,
                                    *level,
                                    level.to_string(),
                                );
                            }
                        });
                    ui.end_row();
                });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("save").clicked() {
                        save = true;
                    }
                    if ui.button("cancel").clicked() {
                        cancel = true;
                    }
                });
            });

        if save {
            state.settings = self.draft.take().unwrap();
            state.core.settings_updated(&state.settings);
        }
        if save || cancel || !window_open {
            self.draft = None;
            *is_open = false;
        }
    }
}
