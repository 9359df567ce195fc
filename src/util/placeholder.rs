use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use std::io::Cursor;

pub const PLACEHOLDER_WIDTH: u32 = 200;
pub const PLACEHOLDER_HEIGHT: u32 = 300;

const BACKGROUND: Rgb<u8> = Rgb([24, 24, 24]);
const FRAME: Rgb<u8> = Rgb([55, 65, 81]);
const FRAME_WIDTH: u32 = 6;

/// Renders the stand-in poster served at `/placeholder-image.png`: a dark
/// 2:3 card with a lighter frame and a play-button triangle in the middle.
pub fn render_placeholder_png() -> Result<Vec<u8>, image::ImageError> {
    let (w, h) = (PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT);
    let img = ImageBuffer::from_fn(w, h, |x, y| {
        let on_frame =
            x < FRAME_WIDTH || y < FRAME_WIDTH || x >= w - FRAME_WIDTH || y >= h - FRAME_WIDTH;
        if on_frame || in_triangle(x, y, w, h) {
            FRAME
        } else {
            BACKGROUND
        }
    });

    let mut encoded = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img).write_to(&mut encoded, ImageFormat::Png)?;
    Ok(encoded.into_inner())
}

fn in_triangle(x: u32, y: u32, w: u32, h: u32) -> bool {
    let size = w as i64 / 6;
    // Right-pointing, left edge at local x = 0, centered on the card.
    let x = x as i64 - w as i64 / 2 + size / 2;
    let y = y as i64 - h as i64 / 2;
    x >= 0 && x <= size && y.abs() * 2 <= size - x
}
