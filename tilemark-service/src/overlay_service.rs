//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::catalogs::Catalog;
use image::RgbaImage;
use std::time::Instant;
use tile_grid::{GlobalMercator, TileIndex, TILE_SIZE};
use tilemark_core::catalog::{ObjectCatalog, StaticCatalog};
use tilemark_core::core::config::ServiceCfg;
use tilemark_core::core::{ApplicationCfg, Config, TileError};
use tilemark_core::render::{encode_png, render_overlay, tile_pixel_bboxes, OverlayStyle};

/// Object overlay tile service
#[derive(Clone)]
pub struct OverlayService {
    pub catalog: Catalog,
    pub grid: GlobalMercator,
    pub style: OverlayStyle,
}

impl OverlayService {
    pub fn new(catalog: Catalog, style: OverlayStyle) -> OverlayService {
        OverlayService {
            catalog,
            grid: GlobalMercator::default(),
            style,
        }
    }
    /// Whether the object catalog is loaded
    pub fn is_ready(&self) -> bool {
        self.catalog.is_ready()
    }
    /// Render the objects of a tile in XYZ adressing scheme
    pub fn tile(&self, tile: &TileIndex) -> Result<RgbaImage, TileError> {
        let now = Instant::now();
        let objects = self.catalog.find_objects_in_tile(tile, &self.grid)?;
        let bboxes = tile_pixel_bboxes(&self.grid, tile, &objects)?;
        let image = render_overlay(&bboxes, &self.style);
        debug!(
            "{} - {} objects rendered in {}ms",
            tile,
            bboxes.len(),
            now.elapsed().as_millis()
        );
        Ok(image)
    }
    /// PNG encoded tile for unchecked request numbers
    pub fn tile_png(&self, zoom: i64, x: i64, y: i64) -> Result<Vec<u8>, TileError> {
        let tile = TileIndex::new(x, y, zoom)?;
        let image = self.tile(&tile)?;
        encode_png(&image)
    }
    fn gen_style_config(&self) -> String {
        let [r, g, b, _] = self.style.stroke.0;
        format!(
            "\n[service.overlay]\nstroke_color = [{}, {}, {}]\nstroke_width = {}\n",
            r, g, b, self.style.stroke_width
        )
    }
}

impl<'a> Config<'a, ApplicationCfg> for OverlayService {
    fn from_config(config: &ApplicationCfg) -> Result<Self, String> {
        let catalog = Catalog::from_optional_config(&config.catalog)?;
        let style = OverlayStyle::from(&config.service.overlay);
        check_style(&config.service);
        Ok(OverlayService::new(catalog, style))
    }
    fn gen_config() -> String {
        let mut config = String::new();
        config.push_str(TOML_SERVICES);
        config.push_str(&StaticCatalog::gen_config());
        config
    }
    fn gen_runtime_config(&self) -> String {
        let mut config = String::new();
        config.push_str("# tilemark configuration\n");
        config.push_str(&self.gen_style_config());
        config.push_str(&self.catalog.gen_runtime_config());
        config
    }
}

fn check_style(cfg: &ServiceCfg) {
    if cfg.overlay.stroke_color == [0, 0, 0] {
        warn!("Black outlines are removed together with the tile background");
    }
    if cfg.overlay.stroke_width == 0 {
        warn!("Outline width 0 - objects will not be visible");
    } else if cfg.overlay.stroke_width > TILE_SIZE / 2 {
        warn!(
            "Outline width {} exceeds half a tile - objects are drawn filled",
            cfg.overlay.stroke_width
        );
    }
}

const TOML_SERVICES: &'static str = r#"# tilemark configuration

[service.overlay]
# Outline color of objects (RGB). Black is reserved for the transparent background.
stroke_color = [255, 0, 0]
# Outline width in pixels
stroke_width = 3
"#;
