use crate::config::Config;
use crate::config::migrate::{check_config_file, migrate_config_file};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration as YAML.
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    pub fn check(path: &Path) -> AppResult<()> {
        check_config_file(path)?;
        Ok(())
    }

    pub fn migrate(path: &Path) -> AppResult<()> {
        migrate_config_file(path)?;
        Ok(())
    }

    /// Open the config file in `editor`, then $EDITOR/$VISUAL, then a
    /// platform default.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        let requested = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        let status = Command::new(&requested).arg(path).status();
        if matches!(status, Ok(s) if s.success()) {
            success(format!("Configuration file edited using '{}'", requested));
            return Ok(());
        }

        if requested == default_editor {
            return Err(AppError::Config(format!("editor '{}' failed", requested)));
        }

        warning(format!(
            "Editor '{}' not available, falling back to '{}'",
            requested, default_editor
        ));
        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{}'", default_editor));
                Ok(())
            }
            _ => Err(AppError::Config(format!(
                "failed to edit configuration with '{}'",
                default_editor
            ))),
        }
    }
}
