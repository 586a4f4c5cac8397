//! JSON lead file sink.

use std::path::Path;

use anyhow::Context;
use hnleads_core::Lead;

/// Path value meaning "write to stdout".
pub(crate) const STDOUT_PATH: &str = "-";

/// Writes `leads` as a pretty-printed JSON array, in the order given.
///
/// Parent directories are created as needed. A path of `-` prints to stdout.
pub(crate) fn write_leads(path: &Path, leads: &[Lead]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(leads).context("failed to serialize leads")?;

    if path == Path::new(STDOUT_PATH) {
        println!("{json}");
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, format!("{json}\n"))
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Loads a lead file written by [`write_leads`].
pub(crate) fn read_leads(path: &Path) -> anyhow::Result<Vec<Lead>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON lead list", path.display()))
}
