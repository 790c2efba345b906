use eframe::egui;

use snip_core::link::{Link, LinkDraft};

use crate::gui::state::UIState;

/// One dialog for both creating and editing a link; `editing` locks the
/// slug in place. Same three-phase lifecycle as deletion: the save button
/// turns into a loading affordance while the submission is in flight.
#[derive(Clone, Debug, Default)]
pub struct LinkEditor {
    pub slug: String,
    pub url: String,
    pub description: String,
    pub editing: bool,
    pub saving: bool,
}

impl LinkEditor {
    pub fn new_link() -> Self {
        Self::default()
    }

    pub fn edit(link: &Link) -> Self {
        Self {
            slug: link.slug.clone(),
            url: link.url.clone(),
            description: link.description.clone().unwrap_or_default(),
            editing: true,
            saving: false,
        }
    }

    pub fn is_url_valid(&self) -> bool {
        url::Url::parse(&self.url).is_ok()
    }

    pub fn draft(&self) -> LinkDraft {
        LinkDraft {
            slug: self.slug.clone(),
            url: self.url.clone(),
            description: match self.description.is_empty() {
                true => None,
                false => Some(self.description.clone()),
            },
            editing: self.editing,
        }
    }
}

pub fn show_link_editor(ctx: &egui::Context, state: &mut UIState) {
    let mut submit = false;
    let mut cancel = false;
    let mut is_open = true;
    let mut saving = false;

    if let Some(editor) = &mut state.link_editor {
        saving = editor.saving;
        let title = if editor.editing { "edit link" } else { "new link" };

        egui::Window::new(title)
            .open(&mut is_open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                egui::Grid::new("link-editor").num_columns(2).show(ui, |ui| {
                    ui.label("slug");
                    ui.add_enabled(
                        !editor.editing && !editor.saving,
                        egui::TextEdit::singleline(&mut editor.slug)
                            .hint_text("leave empty for a random one"),
                    );
                    ui.end_row();

                    ui.label("destination");
                    ui.add_enabled(
                        !editor.saving,
                        egui::TextEdit::singleline(&mut editor.url).hint_text("https://"),
                    );
                    ui.end_row();

                    ui.label("description");
                    ui.add_enabled(
                        !editor.saving,
                        egui::TextEdit::singleline(&mut editor.description),
                    );
                    ui.end_row();
                });

                if !editor.url.is_empty() && !editor.is_url_valid() {
                    ui.colored_label(
                        ui.visuals().error_fg_color,
                        "the destination must be a valid URL",
                    );
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if editor.saving {
                        ui.add_enabled(false, egui::Button::new("Saving..."));
                        ui.spinner();
                    } else {
                        let label = if editor.editing { "Save link" } else { "Create link" };
                        if ui
                            .add_enabled(editor.is_url_valid(), egui::Button::new(label))
                            .clicked()
                        {
                            submit = true;
                        }
                    }

                    if ui
                        .add_enabled(!editor.saving, egui::Button::new("Cancel"))
                        .clicked()
                    {
                        cancel = true;
                    }
                });
            });
    } else {
        return;
    }

    if submit {
        state.submit_link();
    }
    if cancel || (!is_open && !saving) {
        state.link_editor = None;
    }
}
