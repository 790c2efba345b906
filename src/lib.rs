pub mod actor;
pub mod app;
pub mod core;
pub mod gui;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use snip_core::ipc::{server::AppMessageIn, ui::UIMessageIn};

pub fn run_app(
    ui_queue: UnboundedReceiver<UIMessageIn>,
    app_queue_handle: UnboundedSender<AppMessageIn>,
) -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([900.0, 560.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        "snip",
        native_options,
        Box::new(|cc| {
            Ok(Box::new(gui::window::ApplicationWindow::new(
                cc,
                ui_queue,
                app_queue_handle,
            )))
        }),
    )
}
