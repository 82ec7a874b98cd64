//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

mod catalog;
mod query;
mod static_catalog;

pub use self::catalog::{ObjectCatalog, UnavailableCatalog};
pub use self::query::{TileQuery, MIN_DETAIL_ZOOM};
pub use self::static_catalog::StaticCatalog;
