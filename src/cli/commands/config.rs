use crate::AppContext;
use crate::config::{Backend, Config};
use crate::errors::AppResult;
use crate::ui::messages::error;

use crate::cli::parser::Commands;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!(
                "{}",
                serde_yaml::to_string(&ctx.cfg)
                    .unwrap_or_else(|_| "<unprintable configuration>".to_string())
            );
        }

        // ---- CHECK CONFIG ----
        if *check {
            check_config(&ctx.cfg);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let requested_editor = editor.clone();

            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = requested_editor.unwrap_or_else(|| default_editor.clone());

            let status = Command::new(&editor_to_use).arg(&path).status();

            match status {
                Ok(s) if s.success() => {
                    println!(
                        "✅ Configuration file edited successfully using '{}'",
                        editor_to_use
                    );
                }
                Ok(_) | Err(_) => {
                    eprintln!(
                        "⚠️  Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    );

                    let fallback_status = Command::new(&default_editor).arg(&path).status();
                    match fallback_status {
                        Ok(s) if s.success() => {
                            println!(
                                "✅ Configuration file edited successfully using fallback '{}'",
                                default_editor
                            );
                        }
                        Ok(_) | Err(_) => {
                            error(format!(
                                "Failed to edit configuration file using fallback '{}'",
                                default_editor
                            ));
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

/// Report the fields the selected backend needs but the file does not carry.
fn check_config(cfg: &Config) {
    let mut problems = Vec::new();

    match cfg.backend {
        Backend::Sqlite => {
            if cfg.database.trim().is_empty() {
                problems.push("backend is 'sqlite' but 'database' is empty".to_string());
            }
        }
        Backend::Remote => match &cfg.remote {
            None => problems.push("backend is 'remote' but the 'remote' section is missing".to_string()),
            Some(r) => {
                if r.url.trim().is_empty() {
                    problems.push("'remote.url' is empty".to_string());
                }
                if r.api_key.trim().is_empty() {
                    problems.push("'remote.api_key' is empty".to_string());
                }
            }
        },
        Backend::Memory => {}
    }

    if let Some(auth) = &cfg.auth
        && (auth.owner_user.trim().is_empty() || auth.owner_pass.trim().is_empty())
    {
        problems.push("'auth' section present but owner_user/owner_pass incomplete".to_string());
    }

    if problems.is_empty() {
        println!("✅ Configuration OK.");
    } else {
        for p in &problems {
            println!("❌ {p}");
        }
    }
}
