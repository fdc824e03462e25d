use anyhow::{Context, Result};
use image::{ImageBuffer, Rgba};

/// Diagonal gradient with a checker overlay, so scaling artefacts show up
/// at a glance when the preview panel resizes.
fn test_card(width: u32, height: u32) -> ImageBuffer<Rgba<u8>, Vec<u8>> {
    ImageBuffer::from_fn(width, height, |x, y| {
        let fx = x as f32 / width as f32;
        let fy = y as f32 / height as f32;
        let checker = ((x / 32 + y / 32) % 2) as f32;

        let r = (fx * 200.0 + checker * 30.0) as u8;
        let g = (fy * 200.0 + checker * 30.0) as u8;
        let b = ((1.0 - fx) * 160.0 + 40.0) as u8;
        Rgba([r, g, b, 255])
    })
}

fn main() -> Result<()> {
    let cards = [
        ("wide", 1920u32, 480u32),
        ("tall", 480, 1920),
        ("square", 800, 800),
        ("photo", 1600, 900),
    ];

    std::fs::create_dir_all("sample").context("creating sample/")?;
    for (name, width, height) in cards {
        let path = format!("sample/{name}.png");
        test_card(width, height)
            .save(&path)
            .with_context(|| format!("writing {path}"))?;
        println!("wrote {path} ({width}×{height})");
    }
    Ok(())
}
