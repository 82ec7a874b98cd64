//! Spherical Mercator ("Web Mercator") projection and tile index calculations
//!
//! ## Coordinate chain
//!
//! ```rust
//! use tile_grid::GlobalMercator;
//!
//! let merc = GlobalMercator::default();
//! let (mx, my) = merc.lat_lon_to_meters(0.0, 0.0).unwrap();
//! let (px, py) = merc.meters_to_pixels(mx, my, 1);
//! assert_eq!((px, py), (256.0, 256.0));
//! ```
//!
//! ## Tile bounds
//!
//! ```rust
//! use tile_grid::{GlobalMercator, TileIndex};
//!
//! let merc = GlobalMercator::default();
//! let tile = TileIndex::new(0, 0, 1).unwrap();
//! // XYZ tile (0, 0) is the north-west quadrant
//! let extent = merc.tile_bounds_xyz(&tile);
//! assert!(extent.minx < 0.0 && extent.miny >= 0.0);
//! ```

mod error;
mod mercator;
mod tile;

pub use error::GridError;
pub use mercator::{Extent, GlobalMercator, EARTH_RADIUS, MAX_LATITUDE, TILE_SIZE};
pub use tile::{TileIndex, MAX_ZOOM};
