//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::catalog::catalog::ObjectCatalog;
use crate::core::bbox::GeoBBox;
use crate::core::config::CatalogCfg;
use crate::core::{Config, TileError};
use std::fs::File;
use std::io::BufReader;
use tile_grid::GlobalMercator;

/// In-memory object list
#[derive(Clone, Debug)]
pub struct StaticCatalog {
    pub name: String,
    objects: Vec<GeoBBox>,
}

impl StaticCatalog {
    /// Catalog with validated footprints
    pub fn new(name: &str, objects: Vec<GeoBBox>) -> Result<StaticCatalog, TileError> {
        let grid = GlobalMercator::default();
        for bbox in &objects {
            grid.lat_lon_to_meters(bbox.lat1, bbox.lon1)?;
            grid.lat_lon_to_meters(bbox.lat2, bbox.lon2)?;
        }
        Ok(StaticCatalog {
            name: name.to_string(),
            objects,
        })
    }
    /// Read footprints from a JSON array of [lat1, lon1, lat2, lon2] arrays
    pub fn read_objects(path: &str) -> Result<Vec<GeoBBox>, String> {
        let file =
            File::open(path).map_err(|e| format!("Could not open object file '{}': {}", path, e))?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| format!("Invalid object file '{}': {}", path, e))
    }
    pub fn len(&self) -> usize {
        self.objects.len()
    }
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl ObjectCatalog for StaticCatalog {
    fn is_ready(&self) -> bool {
        true
    }
    fn retrieve_objects<F>(&self, mut read: F) -> Result<u64, TileError>
    where
        F: FnMut(&GeoBBox),
    {
        for bbox in &self.objects {
            read(bbox);
        }
        Ok(self.objects.len() as u64)
    }
}

impl<'a> Config<'a, CatalogCfg> for StaticCatalog {
    fn from_config(cfg: &CatalogCfg) -> Result<Self, String> {
        let name = cfg.name.clone().unwrap_or_else(|| "objects".to_string());
        let mut objects = cfg.objects.clone();
        if let Some(ref path) = cfg.path {
            info!("Reading objects of catalog '{}' from '{}'", name, path);
            objects.extend(StaticCatalog::read_objects(path)?);
        }
        StaticCatalog::new(&name, objects).map_err(|e| format!("Catalog '{}': {}", name, e))
    }
    fn gen_config() -> String {
        let toml = r#"
[catalog]
name = "objects"
# Object footprints [lat1, lon1, lat2, lon2]
objects = [
    [54.18468, 45.17661, 54.18466, 45.17668],
]
# JSON file with an array of footprints
#path = "objects.json"
"#;
        toml.to_string()
    }
    fn gen_runtime_config(&self) -> String {
        let objects: Vec<String> = self
            .objects
            .iter()
            .map(|b| format!("    [{}, {}, {}, {}],\n", b.lat1, b.lon1, b.lat2, b.lon2))
            .collect();
        format!(
            "\n[catalog]\nname = \"{}\"\nobjects = [\n{}]\n",
            self.name,
            objects.concat()
        )
    }
}
