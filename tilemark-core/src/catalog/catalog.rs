//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::catalog::query::TileQuery;
use crate::core::bbox::GeoBBox;
use crate::core::TileError;
use tile_grid::{GlobalMercator, TileIndex};

/// Source of object footprints
pub trait ObjectCatalog {
    /// Whether the backing object store is loaded
    fn is_ready(&self) -> bool;
    /// Visit all object footprints in catalog order. Returns the number of objects.
    fn retrieve_objects<F>(&self, read: F) -> Result<u64, TileError>
    where
        F: FnMut(&GeoBBox);
    /// Objects whose representative point lies within the tile, in catalog order.
    /// Always empty below `MIN_DETAIL_ZOOM`.
    fn find_objects_in_tile(
        &self,
        tile: &TileIndex,
        grid: &GlobalMercator,
    ) -> Result<Vec<GeoBBox>, TileError> {
        let query = match TileQuery::new(grid, tile) {
            Some(query) => query,
            None => return Ok(Vec::new()),
        };
        let mut objects = Vec::new();
        let mut failure = None;
        self.retrieve_objects(|bbox| {
            if failure.is_some() {
                return;
            }
            match query.contains(bbox) {
                Ok(true) => objects.push(*bbox),
                Ok(false) => {}
                Err(err) => failure = Some(err),
            }
        })?;
        match failure {
            Some(err) => Err(err),
            None => Ok(objects),
        }
    }
}

/// Catalog without backing store
#[derive(Clone, Debug)]
pub struct UnavailableCatalog {
    reason: String,
}

impl UnavailableCatalog {
    pub fn new(reason: &str) -> UnavailableCatalog {
        UnavailableCatalog {
            reason: reason.to_string(),
        }
    }
}

impl ObjectCatalog for UnavailableCatalog {
    fn is_ready(&self) -> bool {
        false
    }
    fn retrieve_objects<F>(&self, _read: F) -> Result<u64, TileError>
    where
        F: FnMut(&GeoBBox),
    {
        Err(TileError::CatalogUnavailable(self.reason.clone()))
    }
}
