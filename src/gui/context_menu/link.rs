use eframe::egui;

use snip_core::link::Link;

use crate::gui::state::UIState;

const SHOW_QR_CODE: &str = "🔳 QR code";
const EDIT_LINK: &str = "📝 Edit";
const DELETE_LINK: &str = "🗑 Delete";

/// The per-link options menu. The edit entry is not rendered at all
/// without a session; `enabled: false` keeps every entry visible but
/// inert.
pub fn link_options(ui: &mut egui::Ui, state: &mut UIState, enabled: bool, link: &Link) {
    menu_item_show_qr_code(ui, state, enabled, link);
    if state.session.is_some() {
        menu_item_edit_link(ui, state, enabled, link);
    }
    menu_item_delete_link(ui, state, enabled, link);
}

pub fn menu_item_show_qr_code(
    ui: &mut egui::Ui,
    state: &mut UIState,
    enabled: bool,
    link: &Link,
) {
    if ui
        .add_enabled(enabled, egui::Button::new(SHOW_QR_CODE))
        .clicked()
    {
        state.open_qr_dialog(link);
        ui.close();
    }
}

pub fn menu_item_edit_link(ui: &mut egui::Ui, state: &mut UIState, enabled: bool, link: &Link) {
    if ui
        .add_enabled(enabled, egui::Button::new(EDIT_LINK))
        .clicked()
    {
        state.open_link_editor(Some(link));
        ui.close();
    }
}

pub fn menu_item_delete_link(ui: &mut egui::Ui, state: &mut UIState, enabled: bool, link: &Link) {
    let text = egui::RichText::new(DELETE_LINK).color(ui.visuals().error_fg_color);
    if ui.add_enabled(enabled, egui::Button::new(text)).clicked() {
        state.open_delete_prompt(link);
        ui.close();
    }
}
