pub mod app;
pub mod backup;
pub mod calendar;
pub mod config;
pub mod log;
pub mod navigator;
pub mod render;
pub mod session;
pub mod shell;
pub mod store;
