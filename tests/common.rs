#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use dailygrace::core::app::AppState;
use dailygrace::core::store::DevotionalStore;
use dailygrace::db::pool::DbPool;
use dailygrace::models::identity::DEFAULT_ADMIN_EMAIL;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dg() -> Command {
    cargo_bin_cmd!("dailygrace")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dailygrace.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB through the CLI (samples are seeded on first open)
pub fn init_db(db_path: &str) {
    dg()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Store on a private in-memory database
pub fn memory_store(seed: bool) -> DevotionalStore {
    let pool = DbPool::in_memory().expect("open in-memory db");
    DevotionalStore::open(pool, seed).expect("open store")
}

/// App state on an in-memory store, signed out, on the home view
pub fn memory_app(seed: bool) -> AppState {
    AppState::new(memory_store(seed), DEFAULT_ADMIN_EMAIL)
}
