pub mod draw;
pub mod logging;
pub mod toast_log;
