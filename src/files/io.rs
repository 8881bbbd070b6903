// src/files/io.rs
// Whole-file read and atomic replace

use std::path::Path;

use tokio::io::AsyncWriteExt;

use crate::error::Result;

/// Read the entire file into memory. Every operation starts from a fresh
/// read of on-disk state; nothing is cached between calls.
pub async fn read_file(path: &Path) -> Result<String> {
    Ok(tokio::fs::read_to_string(path).await?)
}

/// Replace the whole file using a temp-file + rename strategy so an external
/// observer sees either entirely the old content or entirely the new one.
/// Mirrors existing permissions on Unix. No lock is taken: interleaved
/// writers keep last-writer-wins semantics.
pub async fn write_atomic(path: &Path, content: &str) -> Result<()> {
    // Build a temp path in the same directory for atomic replace
    let temp_path = {
        let ts = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let pid = std::process::id();
        let mut tmp = path.to_path_buf();
        let suffix = format!("tmp.{}.{}", pid, ts);
        let new_ext = match path.extension().and_then(|e| e.to_str()) {
            Some(orig) => format!("{}.{}", orig, suffix),
            None => suffix,
        };
        tmp.set_extension(new_ext);
        tmp
    };

    // Create temp exclusively to avoid reusing a stale file
    let mut file = tokio::fs::OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(&temp_path)
        .await?;

    file.write_all(content.as_bytes()).await?;
    file.sync_all().await?;
    drop(file);

    // Mirror existing permissions on Unix if the destination exists, otherwise 0644
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(meta) = tokio::fs::metadata(&path).await {
            let mode = meta.permissions().mode();
            let _ = tokio::fs::set_permissions(&temp_path, std::fs::Permissions::from_mode(mode)).await;
        } else {
            let _ = tokio::fs::set_permissions(&temp_path, std::fs::Permissions::from_mode(0o644)).await;
        }
    }

    // On Windows, rename won't overwrite existing files; remove first
    #[cfg(windows)]
    {
        if path.exists() {
            let _ = tokio::fs::remove_file(&path).await;
        }
    }

    // Rename temp -> dest (same filesystem)
    tokio::fs::rename(&temp_path, &path).await?;

    Ok(())
}
