use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::gui::context_menu;
use crate::gui::state::UIState;

const ROW_HEIGHT: f32 = 24.0;

#[derive(Default)]
pub struct LinksView;

impl LinksView {
    pub fn show(&mut self, ctx: &egui::Context, state: &mut UIState) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let links = state.links();
            if links.is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.weak("no links yet; add one via links → new link");
                });
                return;
            }

            // One executing deletion at a time: while it lasts, row actions
            // across the table go inert.
            let actions_enabled = !state.is_delete_executing();

            ui.spacing_mut().item_spacing.y = 4.0;
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::auto().at_least(100.0))
                .column(Column::remainder())
                .column(Column::auto().at_least(140.0))
                .column(Column::auto().at_least(50.0))
                .column(Column::auto())
                .header(ROW_HEIGHT, |mut header| {
                    header.col(|ui| {
                        ui.strong("slug");
                    });
                    header.col(|ui| {
                        ui.strong("destination");
                    });
                    header.col(|ui| {
                        ui.strong("created");
                    });
                    header.col(|ui| {
                        ui.strong("visits");
                    });
                    header.col(|_| {});
                })
                .body(|mut body| {
                    for link in &links {
                        body.row(ROW_HEIGHT, |mut row| {
                            row.col(|ui| {
                                ui.monospace(&link.slug);
                            });
                            row.col(|ui| {
                                ui.hyperlink_to(link.decoded_url(), &link.url)
                                    .on_hover_text(
                                        link.short_url(&state.settings.service.base_url),
                                    );
                            });
                            row.col(|ui| {
                                ui.label(link.formatted_created_at());
                            });
                            row.col(|ui| {
                                ui.label(link.visits.to_string());
                            });
                            row.col(|ui| {
                                ui.menu_button("⋮", |ui| {
                                    context_menu::link::link_options(
                                        ui,
                                        state,
                                        actions_enabled,
                                        link,
                                    );
                                });
                            });
                        });
                    }
                });
        });
    }
}
