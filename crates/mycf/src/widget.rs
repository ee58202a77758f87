use mycf_core::widget::{select_bundle, PLACEHOLDER_HTML};
use std::path::{Path, PathBuf};

/// Read the built job list widget from `assets_dir`
///
/// Falls back to a placeholder page when no `mycareersfuture-*.html` bundle exists,
/// so the tool keeps answering before the frontend has been built.
pub fn load_component_html(assets_dir: &Path) -> String {
    log::info!("Looking for component HTML in {}", assets_dir.display());

    match find_bundle(assets_dir) {
        Ok(Some(path)) => match std::fs::read_to_string(&path) {
            Ok(html) => {
                log::info!(
                    "Loaded component from {} ({} bytes)",
                    path.display(),
                    html.len()
                );
                return html;
            }
            Err(e) => log::warn!("Failed to read {}: {e}", path.display()),
        },
        Ok(None) => {}
        Err(e) => log::debug!("Cannot list {}: {e}", assets_dir.display()),
    }

    log::warn!("Built component not found. Run 'pnpm install' and 'pnpm run build' first.");
    PLACEHOLDER_HTML.to_string()
}

fn find_bundle(assets_dir: &Path) -> std::io::Result<Option<PathBuf>> {
    let names: Vec<String> = std::fs::read_dir(assets_dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();

    Ok(select_bundle(names.iter().map(String::as_str)).map(|name| assets_dir.join(name)))
}
