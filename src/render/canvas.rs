use image::RgbaImage;

use crate::{
    foundation::{
        core::{CanvasSize, Rgba8},
        math::mul_div255,
    },
    layout::solver::Placement,
};

/// The working surface every drawing step mutates in place.
///
/// Pixels are stored as RGBA8 but the canvas itself starts, and stays, fully opaque: pasted
/// layers are alpha blended over it and outputs are flattened to RGB8.
#[derive(Clone, Debug)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    /// Allocate an opaque black canvas.
    pub fn new(size: CanvasSize) -> Self {
        Self::filled(size, Rgba8::new(0, 0, 0, 255))
    }

    /// Allocate a canvas filled with `color`.
    pub fn filled(size: CanvasSize, color: Rgba8) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(size.width, size.height, color.to_pixel()),
        }
    }

    /// Canvas dimensions.
    pub fn size(&self) -> CanvasSize {
        CanvasSize::new(self.pixels.width(), self.pixels.height())
    }

    /// Borrow the underlying pixels.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Blend `layer` over the canvas with its top-left corner at `at`, using the layer's own
    /// alpha as the mask. Parts of the layer outside the canvas are clipped.
    pub fn paste(&mut self, layer: &RgbaImage, at: Placement) {
        let (cw, ch) = self.pixels.dimensions();
        let x0 = at.x.max(0);
        let y0 = at.y.max(0);
        let x1 = at.x.saturating_add(i64::from(layer.width())).min(i64::from(cw));
        let y1 = at.y.saturating_add(i64::from(layer.height())).min(i64::from(ch));
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for y in y0..y1 {
            for x in x0..x1 {
                let src = layer.get_pixel((x - at.x) as u32, (y - at.y) as u32);
                let dst = self.pixels.get_pixel_mut(x as u32, y as u32);
                dst.0 = masked_over(dst.0, src.0);
            }
        }
    }

    /// Flatten to RGB8 for encoding.
    pub fn to_rgb8(&self) -> image::RgbImage {
        image::DynamicImage::ImageRgba8(self.pixels.clone()).to_rgb8()
    }
}

/// Mix `src` color into `dst` weighted by `src` alpha. The destination alpha is kept.
fn masked_over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let a = u16::from(src[3]);
    match a {
        0 => dst,
        255 => [src[0], src[1], src[2], dst[3]],
        _ => {
            let inv = 255 - a;
            let mut out = dst;
            for i in 0..3 {
                out[i] = mul_div255(u16::from(src[i]), a)
                    .saturating_add(mul_div255(u16::from(dst[i]), inv));
            }
            out
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
