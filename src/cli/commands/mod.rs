pub mod backup;
pub mod calendar;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod read;
pub mod save;
pub mod select;
pub mod shell;
pub mod show;
