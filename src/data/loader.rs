use std::path::Path;

use anyhow::{Context, Result, bail};
use eframe::egui::ColorImage;

use super::model::PreviewImage;
use crate::layout::Size;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Extensions the open dialog offers and the loader accepts.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Decode an image file into a [`PreviewImage`].
///
/// The extension is checked before touching the file so an unsupported
/// selection fails with a clear message instead of a decoder error.
pub fn load_image(path: &Path) -> Result<PreviewImage> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        bail!("Unsupported image extension: .{ext}");
    }

    let decoded = image::open(path)
        .with_context(|| format!("decoding image {}", path.display()))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    let pixels = ColorImage::from_rgba_unmultiplied(
        [width as usize, height as usize],
        rgba.as_raw(),
    );

    Ok(PreviewImage {
        path: path.to_path_buf(),
        size: Size::new(width as f32, height as f32),
        pixels,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unsupported_extensions() {
        let err = load_image(Path::new("scan.bmp")).unwrap_err();
        assert!(err.to_string().contains("Unsupported image extension: .bmp"));
    }

    #[test]
    fn rejects_paths_without_an_extension() {
        assert!(load_image(Path::new("README")).is_err());
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        // Fails on IO (the file does not exist), not on the extension gate.
        let err = load_image(Path::new("missing.PNG")).unwrap_err();
        assert!(!err.to_string().contains("Unsupported"));
    }
}
