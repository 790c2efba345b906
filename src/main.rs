#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use tokio::sync::mpsc::unbounded_channel;

use snip::app;

const LOG_FILE_PATH: &str = "./runtime.log";

fn setup_logging() {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE_PATH)
        .expect("failed to open the file for logging app events");

    let time_format =
        simplelog::format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]");
    simplelog::WriteLogger::init(
        simplelog::LevelFilter::Trace,
        simplelog::ConfigBuilder::new()
            .set_time_format_custom(time_format)
            .set_time_offset_to_local()
            .unwrap()
            .build(),
        file,
    )
    .expect("Failed to configure the logger");
    log_panics::init();
}

fn main() {
    setup_logging();

    let (ui_queue_handle, ui_queue) = unbounded_channel();
    let mut app = app::Application::new(ui_queue_handle);
    app.initialize();

    let app_queue_handle = app.app_queue.clone();

    let app_thread = std::thread::spawn(move || {
        app.run();
    });

    snip::run_app(ui_queue, app_queue_handle).expect("failed to set up the app window");
    app_thread.join().unwrap();
}
