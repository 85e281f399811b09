//! Static export of every page with default selection state.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::error::{Result, SiteError};
use crate::pages::Page;

/// Output file for a page, relative to the export root.
pub fn output_path(page: Page) -> PathBuf {
    match page.path() {
        Some("/") => PathBuf::from("index.html"),
        Some(path) => Path::new(path.trim_start_matches('/')).join("index.html"),
        None => PathBuf::from("404.html"),
    }
}

/// Render every page into `out_dir`, returning the files written.
pub fn export_site(config: &SiteConfig, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for page in Page::ROUTED.into_iter().chain([Page::NotFound]) {
        let target = out_dir.join(output_path(page));
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| SiteError::io(parent, e))?;
        }
        let html = page.render_default(config).into_string();
        fs::write(&target, html).map_err(|e| SiteError::io(&target, e))?;
        tracing::info!("Wrote {}", target.display());
        written.push(target);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_paths_mirror_routes() {
        assert_eq!(output_path(Page::Home), PathBuf::from("index.html"));
        assert_eq!(
            output_path(Page::Commands),
            PathBuf::from("commands").join("index.html")
        );
        assert_eq!(output_path(Page::NotFound), PathBuf::from("404.html"));
    }
}
