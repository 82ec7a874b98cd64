//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

mod mapper;
mod png;
mod rasterizer;
#[cfg(test)]
mod render_test;

pub use self::mapper::{tile_anchor, tile_pixel_bboxes};
pub use self::png::encode_png;
pub use self::rasterizer::{key_background, render_overlay, OverlayStyle, BACKGROUND, TRANSPARENT};
