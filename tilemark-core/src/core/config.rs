//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::bbox::GeoBBox;
use serde::Deserialize;
use std;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use tera::{Context, Tera};
use toml::Value;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self, String>;
    /// Generate configuration template
    fn gen_config() -> String;
    /// Generate configuration template with runtime information
    fn gen_runtime_config(&self) -> String {
        Self::gen_config()
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationCfg {
    #[serde(default)]
    pub service: ServiceCfg,
    pub catalog: Option<CatalogCfg>,
    pub webserver: WebserverCfg,
}

#[derive(Deserialize, Clone, Default, Debug)]
pub struct ServiceCfg {
    #[serde(default)]
    pub overlay: OverlayCfg,
}

#[derive(Deserialize, Clone, Debug)]
pub struct OverlayCfg {
    /// Outline color (RGB). Black outlines are keyed out with the background.
    #[serde(default = "default_stroke_color")]
    pub stroke_color: [u8; 3],
    /// Outline width in pixels
    #[serde(default = "default_stroke_width")]
    pub stroke_width: u32,
}

impl Default for OverlayCfg {
    fn default() -> OverlayCfg {
        OverlayCfg {
            stroke_color: default_stroke_color(),
            stroke_width: default_stroke_width(),
        }
    }
}

pub fn default_stroke_color() -> [u8; 3] {
    [255, 0, 0]
}

pub fn default_stroke_width() -> u32 {
    3
}

#[derive(Deserialize, Clone, Debug)]
pub struct CatalogCfg {
    pub name: Option<String>,
    /// Inline object footprints [lat1, lon1, lat2, lon2]
    #[serde(default)]
    pub objects: Vec<GeoBBox>,
    /// JSON file with object footprints
    pub path: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct WebserverCfg {
    pub bind: Option<String>,
    pub port: Option<u16>,
    pub threads: Option<u8>,
    // Cache-Control headers set by web server
    // https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/Cache-Control#Expiration
    pub cache_control_max_age: Option<u32>,
}

pub const DEFAULT_CONFIG: &'static str = r#"
[service.overlay]
stroke_color = [255, 0, 0]
stroke_width = 3

[catalog]
name = "cars"
objects = [
    [54.18632391751572, 45.177304744720466, 54.18631842427248, 45.17738252878187],
    [54.1863247022647, 45.17730206251144, 54.18630351403713, 45.17737850546836],
    [54.18468, 45.17661, 54.18466, 45.17668],
    [54.18465, 45.17665, 54.18463, 45.17673],
    [54.18467, 45.17683, 54.18465, 45.1769],
    [54.18472, 45.17717, 54.18468, 45.17723],
    [54.18463, 45.17707, 54.18461, 45.17713],
]

[webserver]
bind = "127.0.0.1"
port = 6767
"#;

/// Load and parse the config file into an config struct.
pub fn read_config<'a, T: Deserialize<'a>>(path: &str) -> Result<T, String> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Err("Could not find config file!".to_string());
        }
    };
    let mut config_toml = String::new();
    if let Err(err) = file.read_to_string(&mut config_toml) {
        return Err(format!("Error while reading config: [{}]", err));
    };

    parse_config(config_toml, path)
}

/// Parse the configuration into an config struct.
///
/// The content is rendered as template first, with environment variables
/// accessible as `{{env.VARNAME}}`.
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T, String> {
    let mut tera = Tera::default();
    tera.add_raw_template(path, &config_toml)
        .map_err(|e| format!("Template error: {}", e))?;
    let mut context = Context::new();
    let env: HashMap<String, String> = env::vars().collect();
    context.insert("env", &env);
    let toml = tera.render(path, &context).map_err(|e| match e.source() {
        Some(source) => format!("Template error: {}", source),
        None => format!("Template error: {}", e),
    })?;

    toml.parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| format!("{} - {}", path, err))
}
