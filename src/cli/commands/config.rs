use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: do_migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        if *check {
            if !path.exists() {
                info(format!(
                    "No configuration file at {} (defaults in use).",
                    path.display()
                ));
            } else {
                let content = fs::read_to_string(&path)?;
                let missing = migrate::missing_keys(&content)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!("Missing fields: {}", missing.join(", ")));
                    info("Run `gymcheck config --migrate` to add defaults.");
                }
            }
        }

        if *do_migrate {
            if migrate::migrate_file(&path)? {
                success(format!("Configuration updated: {}", path.display()));
            } else {
                info("Configuration already up to date.");
            }
        }

        if *edit_config {
            edit_file(&path, editor);
        }
    }

    Ok(())
}

fn edit_file(path: &std::path::Path, editor: &Option<String>) {
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
        }
        Ok(_) | Err(_) => {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            ));

            match Command::new(&default_editor).arg(path).status() {
                Ok(s) if s.success() => success(format!(
                    "Configuration file edited successfully using fallback '{}'",
                    default_editor
                )),
                Ok(_) | Err(_) => crate::ui::messages::error(format!(
                    "Failed to edit configuration file using fallback '{}'",
                    default_editor
                )),
            }
        }
    }
}
