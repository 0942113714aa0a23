use anyhow::Result;
use std::path::Path;

/// Writes the page next to its destination first so a half-written file never replaces the
/// previous build.
pub async fn write_page(output_path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let staging_path = output_path.with_extension("html.partial");
    tokio::fs::write(&staging_path, contents).await?;
    tokio::fs::rename(&staging_path, output_path).await?;

    log::info!(
        "[PAGE_WRITER] Wrote {} bytes to {:?}",
        contents.len(),
        output_path
    );
    Ok(())
}
