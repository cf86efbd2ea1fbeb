use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{register_font, FontStyle};
use std::sync::OnceLock;

use crate::error::{CreaseError, Result};

pub type DrawResult = std::result::Result<(), Box<dyn std::error::Error>>;

const SANS_SERIF: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

static FONT_REGISTERED: OnceLock<std::result::Result<(), String>> = OnceLock::new();

/// Text is rasterized from the embedded font; register it once per process.
fn ensure_font(chart: &str) -> Result<()> {
    FONT_REGISTERED
        .get_or_init(|| {
            register_font("sans-serif", FontStyle::Normal, SANS_SERIF)
                .map_err(|_| "embedded font could not be parsed".to_string())
        })
        .clone()
        .map_err(|reason| CreaseError::chart(chart, reason))
}

/// Draw into an in-memory RGB bitmap and return it PNG-encoded.
///
/// The pixel buffer and drawing area live only for the duration of this
/// call, so nothing outlives a failed render.
pub fn render_png<F>(chart: &str, (width, height): (u32, u32), draw: F) -> Result<Vec<u8>>
where
    F: FnOnce(&DrawingArea<BitMapBackend<'_>, Shift>) -> DrawResult,
{
    ensure_font(chart)?;

    let mut pixels = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| CreaseError::chart(chart, e))?;
        draw(&root).map_err(|e| CreaseError::chart(chart, e))?;
        root.present().map_err(|e| CreaseError::chart(chart, e))?;
    }
    encode_png(width, height, &pixels)
}

/// Encode packed 8-bit RGB pixels as PNG
pub fn encode_png(width: u32, height: u32, rgb: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(rgb)?;
        writer.finish()?;
    }
    Ok(out)
}

pub fn to_base64(png: &[u8]) -> String {
    BASE64.encode(png)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_png_header() {
        let png = encode_png(2, 1, &[255, 0, 0, 0, 0, 255]).unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_encode_png_rejects_short_buffer() {
        assert!(encode_png(4, 4, &[0; 3]).is_err());
    }

    #[test]
    fn test_render_png_propagates_draw_error() {
        let err = render_png("broken", (10, 10), |_| Err("boom".into())).unwrap_err();
        assert_eq!(err.to_string(), "Chart 'broken' failed: boom");
    }

    #[test]
    fn test_render_png_draws_text() {
        let png = render_png("text", (120, 40), |root| {
            root.draw(&Text::new("Runs", (10, 10), ("sans-serif", 16)))?;
            Ok(())
        })
        .unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }

    #[test]
    fn test_to_base64_round_trip_prefix() {
        let png = render_png("blank", (8, 8), |_| Ok(())).unwrap();
        assert!(to_base64(&png).starts_with("iVBORw0KGgo"));
    }
}
