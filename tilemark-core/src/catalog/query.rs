//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile membership test in global pixel space

use crate::core::bbox::GeoBBox;
use crate::core::TileError;
use geo::{Contains, LineString, Point, Polygon};
use tile_grid::{GlobalMercator, TileIndex};

/// Objects are not rendered below this zoom level
pub const MIN_DETAIL_ZOOM: u8 = 19;

/// Pixel space footprint of a tile used for selecting catalog objects.
///
/// Tile corners and object points are both kept as unrounded global
/// pixels. Points exactly on the tile border are outside of every tile.
pub struct TileQuery<'a> {
    grid: &'a GlobalMercator,
    zoom: u8,
    bounds: (f64, f64, f64, f64),
    polygon: Polygon<f64>,
}

impl<'a> TileQuery<'a> {
    /// Query for the given tile, `None` below `MIN_DETAIL_ZOOM`
    pub fn new(grid: &'a GlobalMercator, tile: &TileIndex) -> Option<TileQuery<'a>> {
        if tile.zoom < MIN_DETAIL_ZOOM {
            return None;
        }
        let extent = grid.tile_bounds_xyz(tile);
        let (left_x, left_y) = grid.meters_to_pixels(extent.minx, extent.miny, tile.zoom);
        let (right_x, right_y) = grid.meters_to_pixels(extent.maxx, extent.maxy, tile.zoom);
        let ring = LineString::from(vec![
            (left_x, left_y),
            (left_x, right_y),
            (right_x, right_y),
            (right_x, left_y),
            (left_x, left_y),
        ]);
        Some(TileQuery {
            grid,
            zoom: tile.zoom,
            bounds: (left_x, left_y, right_x, right_y),
            polygon: Polygon::new(ring, vec![]),
        })
    }
    /// Pixel corners of the tile as (left_x, left_y, right_x, right_y)
    pub fn pixel_bounds(&self) -> (f64, f64, f64, f64) {
        self.bounds
    }
    /// Whether the global pixel position lies strictly inside the tile
    pub fn contains_pixel(&self, px: f64, py: f64) -> bool {
        self.polygon.contains(&Point::new(px, py))
    }
    /// Whether the representative point of the object lies inside the tile
    pub fn contains(&self, bbox: &GeoBBox) -> Result<bool, TileError> {
        let (lat, lon) = bbox.representative_point();
        let (mx, my) = self.grid.lat_lon_to_meters(lat, lon)?;
        let (px, py) = self.grid.meters_to_pixels(mx, my, self.zoom);
        Ok(self.contains_pixel(px, py))
    }
}
