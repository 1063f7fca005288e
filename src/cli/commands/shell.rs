use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::app::AppState;
use crate::core::shell::run_shell;
use crate::errors::AppResult;
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Shell = cmd {
        let mut app = AppState::from_config(cfg)?;
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        run_shell(&mut app, stdin.lock(), &mut stdout)?;
    }
    Ok(())
}
