//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Overlay drawing on a color keyed canvas

use crate::core::bbox::PixelBBox;
use crate::core::config::OverlayCfg;
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use tile_grid::TILE_SIZE;

/// Placeholder canvas color, replaced by `TRANSPARENT` after drawing
pub const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const TRANSPARENT: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Outline style of rendered objects
#[derive(PartialEq, Clone, Debug)]
pub struct OverlayStyle {
    pub stroke: Rgba<u8>,
    pub stroke_width: u32,
}

impl Default for OverlayStyle {
    fn default() -> OverlayStyle {
        OverlayStyle::from(&OverlayCfg::default())
    }
}

impl From<&OverlayCfg> for OverlayStyle {
    fn from(cfg: &OverlayCfg) -> OverlayStyle {
        let [r, g, b] = cfg.stroke_color;
        OverlayStyle {
            stroke: Rgba([r, g, b, 255]),
            stroke_width: cfg.stroke_width,
        }
    }
}

/// Renders box outlines onto a transparent tile.
///
/// Boxes are drawn in input order on an opaque black canvas which is keyed
/// out afterwards. Outline pixels colored black are keyed out as well.
pub fn render_overlay(bboxes: &[PixelBBox], style: &OverlayStyle) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(TILE_SIZE, TILE_SIZE, BACKGROUND);
    for bbox in bboxes {
        draw_outline(&mut image, bbox, style);
    }
    key_background(&mut image);
    image
}

/// Outline of `stroke_width` pixels inside the (inclusive) box corners
fn draw_outline(image: &mut RgbaImage, bbox: &PixelBBox, style: &OverlayStyle) {
    let bbox = bbox.normalized();
    let (bx1, by1) = (bbox.x1 as i64, bbox.y1 as i64);
    let (bx2, by2) = (bbox.x2 as i64, bbox.y2 as i64);
    let size = TILE_SIZE as i64;
    // Insets where all four edges lie outside of the canvas draw nothing
    let first = [-bx1, -by1, bx2 - (size - 1), by2 - (size - 1)]
        .iter()
        .copied()
        .min()
        .unwrap_or(0)
        .max(0);
    // From here on at least one edge has left the canvas on the inner side
    let last = [style.stroke_width as i64, size - bx1, size - by1, bx2 + 1, by2 + 1]
        .iter()
        .copied()
        .min()
        .unwrap_or(0);
    // Edges beyond the canvas are moved just outside of it
    let lower = -1i64;
    let upper = size;
    for inset in first..last {
        let x1 = bx1 + inset;
        let y1 = by1 + inset;
        let x2 = bx2 - inset;
        let y2 = by2 - inset;
        if x1 > x2 || y1 > y2 {
            break;
        }
        let (x1, y1) = (x1.max(lower).min(upper), y1.max(lower).min(upper));
        let (x2, y2) = (x2.max(lower).min(upper), y2.max(lower).min(upper));
        let rect = Rect::at(x1 as i32, y1 as i32)
            .of_size((x2 - x1 + 1) as u32, (y2 - y1 + 1) as u32);
        draw_hollow_rect_mut(image, rect, style.stroke);
    }
}

/// Replaces every pixel with the background color by a transparent one
pub fn key_background(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        if pixel[0] == BACKGROUND[0] && pixel[1] == BACKGROUND[1] && pixel[2] == BACKGROUND[2] {
            *pixel = TRANSPARENT;
        }
    }
}
