//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

/// Projection and tile addressing errors
#[derive(thiserror::Error, PartialEq, Clone, Debug)]
pub enum GridError {
    #[error("Invalid tile index {zoom}/{x}/{y}: {reason}")]
    InvalidTileIndex {
        zoom: i64,
        x: i64,
        y: i64,
        reason: &'static str,
    },
    #[error("Coordinate ({lat}, {lon}) outside of the Mercator domain")]
    ProjectionDomain { lat: f64, lon: f64 },
}
