use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(path: &Path, cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration ({}):\n", path.display());
        match fs::read_to_string(path) {
            Ok(content) => println!("{}", content),
            Err(_) => {
                warning("No configuration file found; showing effective values.");
                println!("{}", serde_yaml::to_string(cfg)?);
            }
        }
        Ok(())
    }

    /// Report keys missing from the file. Returns how many are missing.
    pub fn check(path: &Path) -> AppResult<usize> {
        if !path.exists() {
            return Err(AppError::ConfigLoad);
        }
        let missing = migrate::missing_keys(path)?;
        if missing.is_empty() {
            success("Configuration file is up to date.");
        } else {
            warning(format!("Missing keys: {}", missing.join(", ")));
            info("Run `tixdesk config --migrate` to add them with default values.");
        }
        Ok(missing.len())
    }

    pub fn migrate(path: &Path) -> AppResult<()> {
        if !path.exists() {
            return Err(AppError::ConfigLoad);
        }
        let added = migrate::fill_missing_keys(path)?;
        if added.is_empty() {
            info("Nothing to migrate.");
        } else {
            success(format!("Added keys: {}", added.join(", ")));
        }
        Ok(())
    }

    /// Open the file in `editor`, then $EDITOR/$VISUAL, then the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        let requested = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&requested).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration edited with '{}'", requested));
                Ok(())
            }
            _ if requested != default_editor => {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    requested, default_editor
                ));
                let status = Command::new(&default_editor)
                    .arg(path)
                    .status()
                    .map_err(|e| AppError::Config(e.to_string()))?;
                if status.success() {
                    success(format!("Configuration edited with '{}'", default_editor));
                    Ok(())
                } else {
                    Err(AppError::Config(format!("'{}' exited with {}", default_editor, status)))
                }
            }
            Ok(s) => Err(AppError::Config(format!("'{}' exited with {}", requested, s))),
            Err(e) => Err(AppError::Config(e.to_string())),
        }
    }
}
