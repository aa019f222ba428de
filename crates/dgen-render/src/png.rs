//! Raster rendering
//!
//! Each tile is a `pixel_size` square of its material colour, drawn over a
//! white canvas through a shading mask: lighter along the top and left,
//! darker along the right and bottom, so neighbouring tiles stay visible.

use std::io::Cursor;

use dgen_core::{Dungeon, Material};
use image::{ImageFormat, Rgba, RgbaImage};
use tracing::debug;

use crate::error::RenderError;
use crate::options::RenderOptions;

const LIGHT: u8 = 120;
const MEDIUM: u8 = 180;
const DARK: u8 = 220;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Fill colour of a material
pub const fn material_color(material: Material) -> Rgba<u8> {
    match material {
        Material::Wall => Rgba([0, 0, 0, 255]),
        Material::Floor => Rgba([128, 128, 128, 255]),
        Material::Door => Rgba([150, 100, 0, 255]),
        Material::Tunnel => Rgba([200, 200, 200, 255]),
    }
}

/// Mask alpha for a pixel inside a tile of side `size`
pub fn mask_alpha(px: u32, py: u32, size: u32) -> u8 {
    let last = size.saturating_sub(1);
    let inner = 1 <= py && py < last;

    if (py == 0 && px < last) || (px == 0 && inner) {
        LIGHT
    } else if (px == last && inner) || (py == last && px >= 1) {
        DARK
    } else {
        MEDIUM
    }
}

/// Draw the dungeon as an RGBA image
pub fn render(dungeon: &Dungeon, options: &RenderOptions) -> RgbaImage {
    let size = options.pixel_size.max(1);
    let width = dungeon.width() as u32 * size;
    let height = dungeon.height() as u32 * size;
    let mut canvas = RgbaImage::from_pixel(width, height, BACKGROUND);

    let mask: Vec<u8> = (0..size)
        .flat_map(|py| (0..size).map(move |px| mask_alpha(px, py, size)))
        .collect();

    for (y, row) in dungeon.rows().iter().enumerate() {
        for (x, tile) in row.iter().enumerate() {
            paint_tile(
                &mut canvas,
                x as u32 * size,
                y as u32 * size,
                size,
                material_color(tile.material),
                &mask,
            );
        }
    }

    canvas
}

/// Render and encode as PNG bytes
pub fn encode(dungeon: &Dungeon, options: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    let image = render(dungeon, options);
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png)?;

    debug!(
        width = image.width(),
        height = image.height(),
        bytes = bytes.get_ref().len(),
        "dungeon image encoded"
    );
    Ok(bytes.into_inner())
}

/// Blend one tile onto the canvas through the mask
fn paint_tile(canvas: &mut RgbaImage, x: u32, y: u32, size: u32, color: Rgba<u8>, mask: &[u8]) {
    for dy in 0..size {
        for dx in 0..size {
            let alpha = mask[(dy * size + dx) as usize];
            let dst = *canvas.get_pixel(x + dx, y + dy);
            canvas.put_pixel(x + dx, y + dy, blend(color, dst, alpha));
        }
    }
}

/// Source-over compositing of an opaque colour at `alpha`
fn blend(src: Rgba<u8>, dst: Rgba<u8>, alpha: u8) -> Rgba<u8> {
    let sa = alpha as u16;
    let da = 255 - sa;
    let mix = |s: u8, d: u8| ((s as u16 * sa + d as u16 * da) / 255) as u8;
    Rgba([mix(src[0], dst[0]), mix(src[1], dst[1]), mix(src[2], dst[2]), 255])
}
