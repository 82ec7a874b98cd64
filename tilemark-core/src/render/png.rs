//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::TileError;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

/// Lossless PNG encoding of a rendered tile
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, TileError> {
    let mut buffer: Vec<u8> = Vec::new();
    PngEncoder::new_with_quality(&mut buffer, CompressionType::Fast, FilterType::Adaptive)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )?;
    Ok(buffer)
}
