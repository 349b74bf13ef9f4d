use crate::text::Typeface;
use crate::Variant;
use image::{Pixel, Rgba, RgbaImage};

/// App theme blue (#2196F3).
const FILL_COLOR: Rgba<u8> = Rgba([33, 150, 243, 255]);
const TEXT_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const LABEL: &str = "GT";

/// Renders one launcher icon at `size` x `size` with a transparent margin
/// around the filled shape.
pub fn render_icon(typeface: &mut Typeface, size: u32, variant: Variant) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    let padding = size / 10;
    match variant {
        Variant::Square => fill_rounded_rect(&mut img, padding, size / 6),
        Variant::Round => fill_circle(&mut img, padding),
    }
    draw_label(&mut img, typeface, (size / 3) as f32);
    img
}

fn fill_circle(img: &mut RgbaImage, padding: u32) {
    let size = img.width();
    let lo = padding as f32;
    let hi = (size - padding) as f32;
    let c = (lo + hi) * 0.5;
    let r = (hi - lo) * 0.5;
    for y in 0..size {
        let dy = y as f32 + 0.5 - c;
        for x in 0..size {
            let dx = x as f32 + 0.5 - c;
            if dx * dx + dy * dy <= r * r {
                img.put_pixel(x, y, FILL_COLOR);
            }
        }
    }
}

fn fill_rounded_rect(img: &mut RgbaImage, padding: u32, radius: u32) {
    let size = img.width();
    let lo = padding as f32;
    let hi = (size - padding) as f32;
    let r = radius as f32;
    for y in 0..size {
        let py = y as f32 + 0.5;
        // The shape is the core rect [lo + r, hi - r] grown by r in every
        // direction.
        let dy = py - py.clamp(lo + r, hi - r);
        for x in 0..size {
            let px = x as f32 + 0.5;
            let dx = px - px.clamp(lo + r, hi - r);
            if dx * dx + dy * dy <= r * r {
                img.put_pixel(x, y, FILL_COLOR);
            }
        }
    }
}

fn draw_label(img: &mut RgbaImage, typeface: &mut Typeface, px: f32) {
    let raster = typeface.raster(LABEL, px, TEXT_COLOR.0);
    let (left, top, right, bottom) = match raster.bounds() {
        Some(bounds) => bounds,
        None => return,
    };
    let size = img.width() as i32;
    let text_w = right - left + 1;
    let text_h = bottom - top + 1;
    let off_x = (size - text_w) / 2 - left;
    let off_y = (size - text_h) / 2 - top;
    for span in raster.spans() {
        for dy in 0..span.h as i32 {
            let y = span.y + dy + off_y;
            if y < 0 || y >= size {
                continue;
            }
            for dx in 0..span.w as i32 {
                let x = span.x + dx + off_x;
                if x < 0 || x >= size {
                    continue;
                }
                img.get_pixel_mut(x as u32, y as u32).blend(&Rgba(span.rgba));
            }
        }
    }
}
