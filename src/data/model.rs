use std::path::PathBuf;

use eframe::egui::ColorImage;

use crate::layout::Size;

// ---------------------------------------------------------------------------
// PreviewImage – a decoded image ready for display
// ---------------------------------------------------------------------------

/// A decoded image: RGBA pixels plus the intrinsic dimensions the fit
/// computation runs against.
#[derive(Debug)]
pub struct PreviewImage {
    pub path: PathBuf,
    /// Intrinsic size in pixels.
    pub size: Size,
    pub pixels: ColorImage,
}

impl PreviewImage {
    /// File name for tab captions and texture labels.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
