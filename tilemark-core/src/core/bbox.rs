//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Object footprints in geographic and tile pixel coordinates

/// Object footprint as two WGS84 corner points.
/// Corners are not ordered, `lat1` may be larger or smaller than `lat2`.
#[derive(Deserialize, PartialEq, Clone, Copy, Debug)]
#[serde(from = "[f64; 4]")]
pub struct GeoBBox {
    pub lat1: f64,
    pub lon1: f64,
    pub lat2: f64,
    pub lon2: f64,
}

impl GeoBBox {
    pub fn new(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> GeoBBox {
        GeoBBox {
            lat1,
            lon1,
            lat2,
            lon2,
        }
    }
    /// Point used for assigning the object to a tile: the first corner
    pub fn representative_point(&self) -> (f64, f64) {
        (self.lat1, self.lon1)
    }
}

impl From<[f64; 4]> for GeoBBox {
    fn from(c: [f64; 4]) -> GeoBBox {
        GeoBBox::new(c[0], c[1], c[2], c[3])
    }
}

/// Box in tile pixel coordinates, origin at the top left tile corner
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct PixelBBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl PixelBBox {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> PixelBBox {
        PixelBBox { x1, y1, x2, y2 }
    }
    /// Same box with (x1, y1) as top left and (x2, y2) as bottom right corner
    pub fn normalized(&self) -> PixelBBox {
        PixelBBox {
            x1: self.x1.min(self.x2),
            y1: self.y1.min(self.y2),
            x2: self.x1.max(self.x2),
            y2: self.y1.max(self.y2),
        }
    }
}
