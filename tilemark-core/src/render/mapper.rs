//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Geographic footprints to tile pixel coordinates

use crate::core::bbox::{GeoBBox, PixelBBox};
use crate::core::TileError;
use tile_grid::{GlobalMercator, TileIndex};

/// Global pixel position of the top left tile corner
pub fn tile_anchor(grid: &GlobalMercator, tile: &TileIndex) -> (f64, f64) {
    let extent = grid.tile_bounds_xyz(tile);
    grid.meters_to_pixels(extent.minx, extent.maxy, tile.zoom)
}

/// Converts footprints into pixel boxes relative to the tile origin,
/// keeping the input order. Both corners are projected independently
/// and truncated towards zero.
pub fn tile_pixel_bboxes(
    grid: &GlobalMercator,
    tile: &TileIndex,
    bboxes: &[GeoBBox],
) -> Result<Vec<PixelBBox>, TileError> {
    let (left_x, left_y) = tile_anchor(grid, tile);
    let to_tile_pixels = |lat: f64, lon: f64| -> Result<(i32, i32), TileError> {
        let (mx, my) = grid.lat_lon_to_meters(lat, lon)?;
        let (px, py) = grid.meters_to_pixels(mx, my, tile.zoom);
        Ok(((px - left_x) as i32, (py - left_y).abs() as i32))
    };
    bboxes
        .iter()
        .map(|bbox| {
            let (x1, y1) = to_tile_pixels(bbox.lat1, bbox.lon1)?;
            let (x2, y2) = to_tile_pixels(bbox.lat2, bbox.lon2)?;
            Ok(PixelBBox::new(x1, y1, x2, y2))
        })
        .collect()
}
