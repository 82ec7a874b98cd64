//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::error::GridError;
use std::fmt;

/// Highest supported zoom level
pub const MAX_ZOOM: u8 = 30;

/// Tile address in XYZ scheme (row 0 at the top, rows growing southwards)
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct TileIndex {
    pub x: u32,
    pub y: u32,
    pub zoom: u8,
}

impl TileIndex {
    /// Validated tile index from raw request numbers
    pub fn new(x: i64, y: i64, zoom: i64) -> Result<TileIndex, GridError> {
        let invalid = |reason| GridError::InvalidTileIndex { zoom, x, y, reason };
        if zoom < 0 {
            return Err(invalid("negative zoom level"));
        }
        if zoom > MAX_ZOOM as i64 {
            return Err(invalid("zoom level too high"));
        }
        let ntiles = 1i64 << zoom;
        if x < 0 || x >= ntiles {
            return Err(invalid("column out of range"));
        }
        if y < 0 || y >= ntiles {
            return Err(invalid("row out of range"));
        }
        Ok(TileIndex {
            x: x as u32,
            y: y as u32,
            zoom: zoom as u8,
        })
    }
}

impl fmt::Display for TileIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}
