//! QR raster for gym check-in payloads.
//!
//! The payload is the gym identifier in plain text. The symbol is scaled
//! by an integer factor into the requested raster and centred, with a
//! quiet zone of `margin` modules around it.

use image::{GrayImage, Luma};
use qrcode::{Color, QrCode};

use crate::errors::{AppError, AppResult};

pub const DEFAULT_SIZE: u32 = 500;
pub const DEFAULT_MARGIN: u32 = 1;
/// Largest raster side accepted, in pixels.
pub const MAX_SIZE: u32 = 8192;
/// Largest quiet zone accepted, in modules.
pub const MAX_MARGIN: u32 = 64;

#[derive(Debug, Clone)]
pub struct QrRaster {
    width: u32,
    height: u32,
    modules: u32,
    margin: u32,
    pixels: Vec<bool>, // true = dark, row-major
    symbol: Vec<bool>, // module matrix without quiet zone
}

pub fn encode_payload(payload: &str, width: u32, height: u32, margin: u32) -> AppResult<QrRaster> {
    if payload.is_empty() {
        return Err(AppError::Qr("payload is empty".into()));
    }
    if width == 0 || height == 0 || width > MAX_SIZE || height > MAX_SIZE {
        return Err(AppError::Qr(format!(
            "invalid raster size {}x{} (1..={} pixels per side)",
            width, height, MAX_SIZE
        )));
    }
    if margin > MAX_MARGIN {
        return Err(AppError::Qr(format!(
            "invalid margin {} (at most {} modules)",
            margin, MAX_MARGIN
        )));
    }

    let code = QrCode::new(payload.as_bytes()).map_err(|e| AppError::Qr(e.to_string()))?;
    let modules = code.width() as u32;
    let symbol: Vec<bool> = code
        .to_colors()
        .into_iter()
        .map(|c| c == Color::Dark)
        .collect();

    // Symbol plus quiet zone, in modules.
    let input = margin
        .checked_mul(2)
        .and_then(|m| m.checked_add(modules))
        .ok_or_else(|| AppError::Qr(format!("margin {} too large", margin)))?;
    let out_w = width.max(input);
    let out_h = height.max(input);
    let scale = (out_w / input).min(out_h / input);
    let left = (out_w - input * scale) / 2;
    let top = (out_h - input * scale) / 2;

    let len = (out_w as usize)
        .checked_mul(out_h as usize)
        .ok_or_else(|| AppError::Qr(format!("raster {}x{} too large", out_w, out_h)))?;
    let mut pixels = vec![false; len];
    for my in 0..modules {
        for mx in 0..modules {
            if !symbol[(my * modules + mx) as usize] {
                continue;
            }
            let px0 = left + (mx + margin) * scale;
            let py0 = top + (my + margin) * scale;
            for py in py0..py0 + scale {
                let row = (py * out_w) as usize;
                for px in px0..px0 + scale {
                    pixels[row + px as usize] = true;
                }
            }
        }
    }

    Ok(QrRaster {
        width: out_w,
        height: out_h,
        modules,
        margin,
        pixels,
        symbol,
    })
}

impl QrRaster {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Side of the QR symbol in modules (21 for version 1).
    pub fn modules(&self) -> u32 {
        self.modules
    }

    pub fn is_dark(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn dark_pixel_count(&self) -> usize {
        self.pixels.iter().filter(|p| **p).count()
    }

    pub fn to_luma_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| {
            if self.is_dark(x, y) {
                Luma([0u8])
            } else {
                Luma([255u8])
            }
        })
    }

    pub fn save_png(&self, path: &std::path::Path) -> AppResult<()> {
        self.to_luma_image()
            .save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }

    /// Module-scale rendering for terminals: two characters per module,
    /// light modules drawn as blocks so the code reads on dark backgrounds.
    pub fn to_terminal_string(&self) -> String {
        let side = self.modules + 2 * self.margin;
        let mut out = String::new();

        for y in 0..side {
            for x in 0..side {
                let dark = self.module_is_dark(x, y);
                out.push_str(if dark { "  " } else { "██" });
            }
            out.push('\n');
        }

        out
    }

    fn module_is_dark(&self, x: u32, y: u32) -> bool {
        if x < self.margin || y < self.margin {
            return false;
        }
        let (mx, my) = (x - self.margin, y - self.margin);
        if mx >= self.modules || my >= self.modules {
            return false;
        }
        self.symbol[(my * self.modules + mx) as usize]
    }
}
