use eframe::egui;

use snip_core::link::Link;

use crate::gui::state::UIState;

/// The deletion lifecycle, spelled out so that a request can only ever be
/// fired from the confirmation stage. `None` in `UIState::delete_prompt`
/// plays the role of the idle stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeleteStage {
    Confirming,
    Executing,
}

#[derive(Clone, Debug)]
pub struct DeletePrompt {
    pub link: Link,
    pub stage: DeleteStage,
}

impl DeletePrompt {
    pub fn new(link: Link) -> Self {
        Self {
            link,
            stage: DeleteStage::Confirming,
        }
    }

    pub fn is_executing(&self) -> bool {
        self.stage == DeleteStage::Executing
    }
}

pub fn show_delete_prompt(ctx: &egui::Context, state: &mut UIState) {
    let (slug, executing) = match &state.delete_prompt {
        Some(prompt) => (prompt.link.slug.clone(), prompt.is_executing()),
        None => return,
    };

    let mut confirm = false;
    let mut cancel = false;
    let mut is_open = true;

    egui::Window::new("delete link")
        .open(&mut is_open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                ui.label("This will permanently delete ");
                ui.label(egui::RichText::new(&slug).strong());
                ui.label(". There is no way back.");
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if executing {
                    ui.add_enabled(false, egui::Button::new("Deleting link..."));
                    ui.spinner();
                } else {
                    let delete_button = egui::Button::new(
                        egui::RichText::new("Delete link").color(ui.visuals().error_fg_color),
                    );
                    if ui.add(delete_button).clicked() {
                        confirm = true;
                    }
                }

                if ui.add_enabled(!executing, egui::Button::new("Cancel")).clicked() {
                    cancel = true;
                }
            });
        });

    if confirm {
        state.confirm_delete();
    }
    // The title bar "x" counts as a cancel, but only while the deletion
    // hasn't been fired yet.
    if cancel || !is_open {
        state.cancel_delete();
    }
}
