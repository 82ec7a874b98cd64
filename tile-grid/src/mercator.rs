//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Spherical Mercator projection (EPSG:3857)

use crate::error::GridError;
use crate::tile::TileIndex;
use std::f64::consts;

/// Equatorial earth radius used by the spherical Mercator projection
pub const EARTH_RADIUS: f64 = 6378137.0;

/// Default width and height of a tile, in pixels
pub const TILE_SIZE: u32 = 256;

/// Latitude where the projected world becomes square (Mercator cutoff)
pub const MAX_LATITUDE: f64 = 85.0511287798066;

/// Projected extent, always ordered as minx, miny, maxx, maxy
#[derive(PartialEq, Clone, Debug)]
pub struct Extent {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

/// Conversions between WGS84 latitude/longitude, spherical Mercator meters,
/// global pixels at a given zoom level and TMS tile numbers.
///
/// Pixel and tile coordinates have their origin at the bottom left
/// (negative) corner of the projected world, with y growing northwards.
#[derive(Clone, Debug)]
pub struct GlobalMercator {
    /// The width and height of an individual tile, in pixels.
    tile_size: u32,
    /// Meters per pixel at zoom level 0
    initial_resolution: f64,
    /// Half of the projected world width, in meters
    origin_shift: f64,
}

impl Default for GlobalMercator {
    fn default() -> GlobalMercator {
        GlobalMercator::new(TILE_SIZE)
    }
}

impl GlobalMercator {
    pub fn new(tile_size: u32) -> GlobalMercator {
        let circumference = 2.0 * consts::PI * EARTH_RADIUS;
        GlobalMercator {
            tile_size,
            initial_resolution: circumference / tile_size as f64,
            origin_shift: circumference / 2.0,
        }
    }
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }
    /// Half of the projected world width, in meters
    pub fn origin_shift(&self) -> f64 {
        self.origin_shift
    }
    /// Meters per pixel at the given zoom level
    pub fn resolution(&self, zoom: u8) -> f64 {
        self.initial_resolution / (zoom as f64).exp2()
    }
    /// Converts WGS84 latitude/longitude to spherical Mercator meters.
    ///
    /// Latitudes beyond the Mercator cutoff are projected as is, yielding
    /// meters outside of the square world extent.
    pub fn lat_lon_to_meters(&self, lat: f64, lon: f64) -> Result<(f64, f64), GridError> {
        if !lat.is_finite() || !lon.is_finite() || lat.abs() >= 90.0 || lon.abs() > 180.0 {
            return Err(GridError::ProjectionDomain { lat, lon });
        }
        let mx = lon * self.origin_shift / 180.0;
        let my = ((90.0 + lat) * consts::PI / 360.0).tan().ln() / (consts::PI / 180.0);
        let my = my * self.origin_shift / 180.0;
        Ok((mx, my))
    }
    /// Converts spherical Mercator meters to WGS84 latitude/longitude
    pub fn meters_to_lat_lon(&self, mx: f64, my: f64) -> (f64, f64) {
        let lon = (mx / self.origin_shift) * 180.0;
        let lat = (my / self.origin_shift) * 180.0;
        let lat = 180.0 / consts::PI
            * (2.0 * (lat * consts::PI / 180.0).exp().atan() - consts::PI / 2.0);
        (lat, lon)
    }
    /// Converts meters to global pixel coordinates at the given zoom level.
    /// The result is not rounded.
    pub fn meters_to_pixels(&self, mx: f64, my: f64, zoom: u8) -> (f64, f64) {
        let res = self.resolution(zoom);
        let px = (mx + self.origin_shift) / res;
        let py = (my + self.origin_shift) / res;
        (px, py)
    }
    /// Converts global pixel coordinates at the given zoom level to meters
    pub fn pixels_to_meters(&self, px: f64, py: f64, zoom: u8) -> (f64, f64) {
        let res = self.resolution(zoom);
        let mx = px * res - self.origin_shift;
        let my = py * res - self.origin_shift;
        (mx, my)
    }
    /// TMS tile covering the given pixel coordinates
    pub fn pixels_to_tile(&self, px: f64, py: f64) -> (i64, i64) {
        let size = self.tile_size as f64;
        let tx = (px / size).ceil() as i64 - 1;
        let ty = (py / size).ceil() as i64 - 1;
        (tx, ty)
    }
    /// TMS tile covering the given meters at the given zoom level
    pub fn meters_to_tile(&self, mx: f64, my: f64, zoom: u8) -> (i64, i64) {
        let (px, py) = self.meters_to_pixels(mx, my, zoom);
        self.pixels_to_tile(px, py)
    }
    /// Extent of a given tile in TMS addressing scheme.
    /// Tile (0, 0) is placed at the negative corner of the projection.
    pub fn tile_bounds(&self, xtile: u32, ytile: u32, zoom: u8) -> Extent {
        let size = self.tile_size as f64;
        let (minx, miny) =
            self.pixels_to_meters(xtile as f64 * size, ytile as f64 * size, zoom);
        let (maxx, maxy) = self.pixels_to_meters(
            (xtile as f64 + 1.0) * size,
            (ytile as f64 + 1.0) * size,
            zoom,
        );
        Extent {
            minx,
            miny,
            maxx,
            maxy,
        }
    }
    /// Extent of a given tile in XYZ addressing scheme (row 0 at the top).
    ///
    /// Computed from the TMS bounds of the same numbers with the Y axis
    /// negated, which mirrors the row across the equator.
    pub fn tile_bounds_xyz(&self, tile: &TileIndex) -> Extent {
        let tms = self.tile_bounds(tile.x, tile.y, tile.zoom);
        Extent {
            minx: tms.minx,
            miny: -tms.maxy,
            maxx: tms.maxx,
            maxy: -tms.miny,
        }
    }
    /// Extent of a TMS tile as (min_lat, min_lon, max_lat, max_lon)
    pub fn tile_lat_lon_bounds(&self, xtile: u32, ytile: u32, zoom: u8) -> (f64, f64, f64, f64) {
        let bounds = self.tile_bounds(xtile, ytile, zoom);
        let (min_lat, min_lon) = self.meters_to_lat_lon(bounds.minx, bounds.miny);
        let (max_lat, max_lon) = self.meters_to_lat_lon(bounds.maxx, bounds.maxy);
        (min_lat, min_lon, max_lat, max_lon)
    }
    /// Largest zoom level whose resolution is not finer than `pixel_size` meters
    pub fn zoom_for_pixel_size(&self, pixel_size: f64) -> u8 {
        (0..=crate::tile::MAX_ZOOM)
            .find(|&zoom| pixel_size > self.resolution(zoom))
            .map(|zoom| zoom.saturating_sub(1))
            .unwrap_or(crate::tile::MAX_ZOOM)
    }
    /// Converts between TMS and XYZ (Google) row numbering
    pub fn google_tile(&self, xtile: u32, ytile: u32, zoom: u8) -> Result<(u32, u32), GridError> {
        let tile = TileIndex::new(xtile as i64, ytile as i64, zoom as i64)?;
        let maxy = (1u32 << tile.zoom) - 1;
        Ok((tile.x, maxy - tile.y))
    }
    /// Microsoft quadkey of a TMS tile
    pub fn quad_key(&self, xtile: u32, ytile: u32, zoom: u8) -> Result<String, GridError> {
        let (_, ytile) = self.google_tile(xtile, ytile, zoom)?;
        let key: String = (1..=zoom)
            .rev()
            .map(|i| {
                let mask = 1u32 << (i - 1);
                let mut digit = 0u8;
                if xtile & mask != 0 {
                    digit += 1;
                }
                if ytile & mask != 0 {
                    digit += 2;
                }
                char::from(b'0' + digit)
            })
            .collect();
        Ok(key)
    }
}
