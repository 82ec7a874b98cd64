//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use tile_grid::GridError;

/// Request scoped tile rendering errors
#[derive(thiserror::Error, Debug)]
pub enum TileError {
    #[error("{0}")]
    InvalidTileIndex(String),
    #[error("Coordinate ({lat}, {lon}) outside of the Mercator domain")]
    ProjectionDomain { lat: f64, lon: f64 },
    #[error("Object catalog unavailable: {0}")]
    CatalogUnavailable(String),
    #[error("Rendering failed: {0}")]
    RenderFailure(String),
}

impl From<GridError> for TileError {
    fn from(err: GridError) -> TileError {
        match err {
            GridError::InvalidTileIndex { .. } => TileError::InvalidTileIndex(err.to_string()),
            GridError::ProjectionDomain { lat, lon } => TileError::ProjectionDomain { lat, lon },
        }
    }
}

impl From<image::ImageError> for TileError {
    fn from(err: image::ImageError) -> TileError {
        TileError::RenderFailure(err.to_string())
    }
}
