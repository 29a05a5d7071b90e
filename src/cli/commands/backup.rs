use std::fs;
use std::path::{Path, PathBuf};

use zip::ZipWriter;
use zip::write::FileOptions;

use crate::AppContext;
use crate::cli::parser::Commands;
use crate::config::Backend;
use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

/// Binary export: a raw copy of the SQLite file, optionally zipped.
/// Only the local-database backend has a file to copy.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        if ctx.cfg.backend != Backend::Sqlite {
            return Err(AppError::Backup(
                "backup copies the local database file; the current backend has none".to_string(),
            ));
        }

        let src = Path::new(&ctx.cfg.database);
        let dest = expand_tilde(file);
        let dest = dest.as_path();

        if !src.exists() {
            return Err(AppError::Backup(format!(
                "Database not found: {}",
                src.display()
            )));
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        ensure_writable(dest, *force)?;

        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        let final_path = if *compress {
            let compressed = compress_backup(dest, *force)?;

            if compressed != dest.to_path_buf() {
                // remove the uncompressed copy
                if let Err(e) = fs::remove_file(dest) {
                    eprintln!("⚠️ Failed to remove uncompressed backup: {}", e);
                }
            }

            compressed
        } else {
            dest.to_path_buf()
        };

        super::audit_if_sqlite(
            ctx,
            "backup",
            &final_path.to_string_lossy(),
            if *compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );
    }

    Ok(())
}

/// Compress a backup using .zip
fn compress_backup(path: &Path, force: bool) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    ensure_writable(&zip_path, force)?;

    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "backup.sqlite".to_string());

    let mut f = fs::File::open(path)?;
    zip.start_file(name, options).map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    success(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path)
}
