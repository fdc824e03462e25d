/// Data layer: image decode for Preview tasks.
///
/// ```text
///  .png / .jpg
///       │
///       ▼
///  ┌──────────┐
///  │  loader   │  decode file → RGBA pixels + intrinsic size
///  └──────────┘
///       │
///       ▼
///  ┌──────────────┐
///  │ PreviewImage  │  consumed by the preview panel (fit + paint)
///  └──────────────┘
/// ```
pub mod loader;
pub mod model;
