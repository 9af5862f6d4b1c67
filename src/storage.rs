//! Filesystem persistence for generated invoices.
//!
//! Rendered PDFs are written into a flat output directory keyed by the
//! derived filename. Concurrent renders of the same invoice number and
//! customer race on the same file; that is an accepted constraint of the
//! naming scheme. Writability of the directory is checked once at startup
//! and treated as fatal misconfiguration when it fails.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Directory used when `INVOICES_DIR` is not set.
const DEFAULT_INVOICES_DIR: &str = "./invoices";

pub fn invoices_dir() -> PathBuf {
    std::env::var("INVOICES_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_INVOICES_DIR))
}

/// Create the invoices directory if needed and prove it is writable.
///
/// Called once during startup, before the server binds. A failure here means
/// the deployment is misconfigured and the process must not start.
pub fn ensure_writable(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    let probe = dir.join(".write-probe");
    let mut f = fs::File::create(&probe)?;
    f.write_all(b"ok")?;
    drop(f);
    fs::remove_file(&probe)
}

/// Persist a rendered invoice under its derived filename.
pub fn save_invoice(dir: &Path, filename: &str, pdf: &[u8]) -> std::io::Result<PathBuf> {
    let path = dir.join(filename);
    fs::write(&path, pdf)?;
    Ok(path)
}

/// Resolve a stored invoice by filename, refusing anything that could
/// escape the invoices directory.
pub fn invoice_path(dir: &Path, filename: &str) -> Option<PathBuf> {
    if filename.is_empty()
        || filename.contains('/')
        || filename.contains('\\')
        || filename.contains("..")
    {
        return None;
    }
    Some(dir.join(filename))
}
