pub mod ipc;
pub mod link;
pub mod service;
pub mod session;
pub mod settings;

pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

// https://docs.rs/chrono/latest/chrono/format/strftime/index.html
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
