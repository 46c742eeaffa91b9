use anyhow::{Context, Result};
use std::path::Path;

/// Whether `target` already names a URL rather than a local page
fn has_scheme(target: &str) -> bool {
    target
        .split_once("://")
        .map(|(scheme, _)| !scheme.is_empty() && scheme.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or(false)
}

/// Turn a destination into something a browser can open.
///
/// URLs are returned unchanged. Relative pages are resolved against
/// `site_root` and must exist on disk.
pub fn resolve_target(target: &str, site_root: &Path) -> Result<String> {
    if has_scheme(target) {
        return Ok(target.to_string());
    }

    let path = site_root.join(target);
    let path = path
        .canonicalize()
        .with_context(|| format!("Page not found at {}", path.display()))?;
    Ok(path.display().to_string())
}

/// Open a URL or local page in the user's default browser
///
/// # Errors
/// Returns error if the page cannot be resolved or no browser is available
pub fn open_target(target: &str, site_root: &Path) -> Result<()> {
    let resolved = resolve_target(target, site_root)?;
    webbrowser::open(&resolved)
        .with_context(|| format!("Failed to open browser for {}", resolved))?;
    Ok(())
}
