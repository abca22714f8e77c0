//! PNG export of a palette as a row of color swatches.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb as Pixel, RgbImage};

use crate::color::Rgb;
use crate::error::CoreError;
use crate::palette::PLACEHOLDER_COLOR;

/// Swatch edge length in pixels.
pub const SWATCH_SIZE: u32 = 120;

/// Gap between swatches in pixels.
pub const SWATCH_GAP: u32 = 16;

/// Canvas padding in pixels.
pub const PADDING: u32 = 24;

/// File stem used when the palette has no name.
pub const DEFAULT_FILE_STEM: &str = "color-palette";

const BACKGROUND: Pixel<u8> = Pixel([255, 255, 255]);

/// Download file name for a palette: `<name>.png`, or
/// `color-palette.png` when the name is blank.
pub fn export_file_name(name: &str) -> String {
    let stem = name.trim();
    let stem = if stem.is_empty() { DEFAULT_FILE_STEM } else { stem };
    // Path separators would escape the export directory.
    let stem: String = stem
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
        .collect();
    format!("{stem}.png")
}

/// Canvas dimensions for `count` swatches.
pub fn canvas_size(count: usize) -> (u32, u32) {
    let count = count.max(1) as u32;
    let width = PADDING * 2 + count * SWATCH_SIZE + (count - 1) * SWATCH_GAP;
    let height = PADDING * 2 + SWATCH_SIZE;
    (width, height)
}

/// Rasterize `colors` into an RGB image. Unparseable colors are drawn with
/// the placeholder gray.
pub fn render(colors: &[String]) -> RgbImage {
    let (width, height) = canvas_size(colors.len());
    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);
    let fallback = Rgb::parse_hex(PLACEHOLDER_COLOR).unwrap_or(Rgb::new(0xD9, 0xD9, 0xD9));

    for (i, color) in colors.iter().enumerate() {
        let rgb = Rgb::parse_hex(color).unwrap_or(fallback);
        let x0 = PADDING + i as u32 * (SWATCH_SIZE + SWATCH_GAP);
        for y in PADDING..PADDING + SWATCH_SIZE {
            for x in x0..x0 + SWATCH_SIZE {
                img.put_pixel(x, y, Pixel([rgb.r, rgb.g, rgb.b]));
            }
        }
    }
    img
}

/// Encode the swatch image as PNG bytes.
pub fn render_png(colors: &[String]) -> Result<Vec<u8>, CoreError> {
    let mut buf = Cursor::new(Vec::new());
    render(colors)
        .write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| CoreError::Internal(format!("PNG encoding failed: {e}")))?;
    Ok(buf.into_inner())
}

/// Write `<name>.png` into `dir`, returning the written path.
pub fn export_png(dir: &Path, name: &str, colors: &[String]) -> Result<PathBuf, CoreError> {
    let bytes = render_png(colors)?;
    let path = dir.join(export_file_name(name));
    std::fs::write(&path, bytes)
        .map_err(|e| CoreError::Internal(format!("Failed to write {}: {e}", path.display())))?;
    tracing::info!(path = %path.display(), swatches = colors.len(), "Exported palette image");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(list: &[&str]) -> Vec<String> {
        list.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn file_name_uses_palette_name() {
        assert_eq!(export_file_name("Sunset"), "Sunset.png");
        assert_eq!(export_file_name("  "), "color-palette.png");
        assert_eq!(export_file_name("a/b"), "a-b.png");
    }

    #[test]
    fn canvas_fits_five_swatches() {
        assert_eq!(canvas_size(5), (24 * 2 + 5 * 120 + 4 * 16, 24 * 2 + 120));
        assert_eq!(canvas_size(0), canvas_size(1));
    }

    #[test]
    fn swatches_are_painted_in_order() {
        let img = render(&colors(&["#FF0000", "#00FF00", "nope"]));
        assert_eq!(img.get_pixel(0, 0), &Pixel([255, 255, 255]));
        assert_eq!(img.get_pixel(PADDING, PADDING), &Pixel([255, 0, 0]));
        let second_x = PADDING + SWATCH_SIZE + SWATCH_GAP;
        assert_eq!(img.get_pixel(second_x, PADDING), &Pixel([0, 255, 0]));
        let third_x = second_x + SWATCH_SIZE + SWATCH_GAP;
        assert_eq!(img.get_pixel(third_x, PADDING), &Pixel([0xD9, 0xD9, 0xD9]));
        // Gap between swatches stays background.
        assert_eq!(img.get_pixel(PADDING + SWATCH_SIZE, PADDING), &Pixel([255, 255, 255]));
    }

    #[test]
    fn png_has_signature() {
        let bytes = render_png(&colors(&["#123456"])).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn export_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_png(dir.path(), "Moss", &colors(&["#556B2F"])).unwrap();
        assert_eq!(path.file_name().unwrap(), "Moss.png");
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
