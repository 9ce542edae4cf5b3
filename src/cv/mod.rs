//! CV export.
//!
//! Copies the configured CV into the download directory, the terminal
//! counterpart of the page's "Download CV" button:
//! - **Name sanitizing**: path components, control characters and leading
//!   dots are stripped from the configured file name.
//! - **No clobbering**: an existing file gets a numeric suffix instead of
//!   being overwritten.

use crate::config::CvConfig;
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Copy the CV and return where it was written.
pub fn export(config: &CvConfig) -> Result<PathBuf> {
    let Some(source) = config.source.as_deref() else {
        bail!("No CV configured (set cv.source in config.toml)");
    };
    if !source.is_file() {
        bail!("CV not found at {}", source.display());
    }

    std::fs::create_dir_all(&config.download_dir).with_context(|| {
        format!(
            "Failed to create download directory {}",
            config.download_dir.display()
        )
    })?;

    let Some(target) = unique_download_path(&config.download_dir, &config.file_name) else {
        bail!("Unusable CV file name {:?}", config.file_name);
    };

    std::fs::copy(source, &target)
        .with_context(|| format!("Failed to copy CV to {}", target.display()))?;
    tracing::info!(from = %source.display(), to = %target.display(), "CV exported");
    Ok(target)
}

/// Strip anything that could escape the download directory.
pub fn sanitize_filename(filename: &str) -> Option<String> {
    // backslash is a valid char on Unix, so split on it by hand
    let name = filename.rsplit(['/', '\\']).next().unwrap_or(filename);

    let sanitized: String = name
        .chars()
        .filter(|c| !c.is_control() && *c != ':')
        .collect();
    let sanitized = sanitized.trim_start_matches('.').trim();

    if sanitized.is_empty() {
        return None;
    }

    let truncated: String = sanitized.chars().take(255).collect();
    Some(truncated)
}

/// Target path inside `download_dir`, suffixed `_1`, `_2`, ... if taken.
pub fn unique_download_path(download_dir: &Path, filename: &str) -> Option<PathBuf> {
    let sanitized = sanitize_filename(filename)?;
    let path = download_dir.join(&sanitized);
    if !path.exists() {
        return Some(path);
    }

    let stem = Path::new(&sanitized)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("cv");
    let ext = Path::new(&sanitized)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    (1..1000)
        .map(|i| {
            if ext.is_empty() {
                format!("{}_{}", stem, i)
            } else {
                format!("{}_{}.{}", stem, i, ext)
            }
        })
        .map(|name| download_dir.join(name))
        .find(|candidate| !candidate.exists())
}
