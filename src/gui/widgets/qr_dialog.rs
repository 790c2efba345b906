use eframe::egui;

use crate::gui::state::UIState;

const QR_DISPLAY_SIZE: f32 = 256.0;

/// Holds what the dialog was opened with: the slug as-is, and the
/// destination URL already percent-decoded for display. The PNG bytes
/// arrive later, whenever the service answers.
pub struct QrDialog {
    pub slug: String,
    pub url: String,
    pub image: Option<Vec<u8>>,
    texture: Option<egui::TextureHandle>,
}

impl QrDialog {
    pub fn new(slug: String, url: String) -> Self {
        Self {
            slug,
            url,
            image: None,
            texture: None,
        }
    }
}

pub fn show_qr_dialog(ctx: &egui::Context, state: &mut UIState) {
    if state.qr_dialog.is_none() {
        return;
    }

    let base_url = state.settings.service.base_url.clone();
    let mut decode_failed = false;
    let mut is_open = true;

    if let Some(dialog) = &mut state.qr_dialog {
        egui::Window::new("QR code")
            .open(&mut is_open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                if let Some(image) = dialog.image.take() {
                    match crate::gui::png_to_rgba(&image) {
                        Ok((rgba, (width, height))) => {
                            let pixels =
                                egui::ColorImage::from_rgba_unmultiplied([width, height], &rgba);
                            dialog.texture = Some(ui.ctx().load_texture(
                                format!("qr-{}", dialog.slug),
                                pixels,
                                egui::TextureOptions::NEAREST,
                            ));
                        }
                        Err(e) => {
                            log::error!("failed to decode the QR code image: {:?}", e);
                            decode_failed = true;
                        }
                    }
                }

                ui.vertical_centered(|ui| match &dialog.texture {
                    Some(texture) => {
                        ui.add(
                            egui::Image::new(texture)
                                .fit_to_exact_size(egui::vec2(QR_DISPLAY_SIZE, QR_DISPLAY_SIZE)),
                        );
                    }
                    None => {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.weak("fetching the QR code...");
                        });
                    }
                });

                ui.separator();
                ui.label(&dialog.url);
                ui.horizontal(|ui| {
                    let short_url =
                        format!("{}/{}", base_url.trim_end_matches('/'), dialog.slug);
                    if ui.button("copy short URL").clicked() {
                        ui.ctx().copy_text(short_url);
                    }
                    if ui.button("copy destination").clicked() {
                        ui.ctx().copy_text(dialog.url.clone());
                    }
                });
            });
    }

    if decode_failed {
        state.notices.error("failed to decode the QR code image");
    }
    if !is_open {
        state.qr_dialog = None;
    }
}
