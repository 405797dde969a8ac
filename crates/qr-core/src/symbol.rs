use base64::{engine::general_purpose, Engine as _};
use image::{GrayImage, Luma};
use qrcode::{Color, EcLevel, QrCode};
use std::io::Cursor;

// ---------------------------------------------------------------------------
// Symbol encoding
//
// Fixed scan contract: error-correction level L (~7% damage tolerance),
// smallest QR version that fits the payload, 10 px per module, 4-module
// quiet zone, dark modules black on white. Rendering is pure and
// deterministic: one identifier always yields the same PNG bytes.
// ---------------------------------------------------------------------------

/// Pixels per QR module.
pub const MODULE_PIXELS: u32 = 10;

/// Blank border around the symbol, in modules.
pub const QUIET_ZONE_MODULES: u32 = 4;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

#[derive(Debug, thiserror::Error)]
pub enum SymbolError {
    /// The payload does not fit any QR version at level L. Identifiers are
    /// fixed at 36 characters, so hitting this means a logic defect.
    #[error("payload of {len} bytes exceeds QR capacity at error-correction level L")]
    CapacityExceeded { len: usize },

    /// PNG serialization of the rendered raster failed.
    #[error("failed to serialize QR raster as PNG: {0}")]
    Render(#[from] image::ImageError),
}

/// Render the identifier as a QR symbol and serialize it as PNG bytes.
/// Everything happens in memory; nothing touches disk.
pub fn encode_png(identifier: &str) -> Result<Vec<u8>, SymbolError> {
    let code = QrCode::with_error_correction_level(identifier.as_bytes(), EcLevel::L)
        .map_err(|_| SymbolError::CapacityExceeded {
            len: identifier.len(),
        })?;

    let raster = rasterize(&code);
    let mut png = Cursor::new(Vec::new());
    raster.write_to(&mut png, image::ImageFormat::Png)?;
    Ok(png.into_inner())
}

/// `encode_png` plus standard RFC 4648 base64, ready to embed in JSON.
pub fn encode_base64(identifier: &str) -> Result<String, SymbolError> {
    Ok(general_purpose::STANDARD.encode(encode_png(identifier)?))
}

/// Blow the module matrix up to pixels: white canvas, quiet zone included,
/// each dark module a MODULE_PIXELS square.
fn rasterize(code: &QrCode) -> GrayImage {
    let modules = code.width() as u32;
    let colors = code.to_colors();
    let side = (modules + 2 * QUIET_ZONE_MODULES) * MODULE_PIXELS;
    let mut img = GrayImage::from_pixel(side, side, LIGHT);

    for my in 0..modules {
        for mx in 0..modules {
            if colors[(my * modules + mx) as usize] != Color::Dark {
                continue;
            }
            let px = (mx + QUIET_ZONE_MODULES) * MODULE_PIXELS;
            let py = (my + QUIET_ZONE_MODULES) * MODULE_PIXELS;
            for dy in 0..MODULE_PIXELS {
                for dx in 0..MODULE_PIXELS {
                    img.put_pixel(px + dx, py + dy, DARK);
                }
            }
        }
    }
    img
}
