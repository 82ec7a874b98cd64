//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use tilemark_core::catalog::{ObjectCatalog, StaticCatalog, UnavailableCatalog};
use tilemark_core::core::bbox::GeoBBox;
use tilemark_core::core::config::CatalogCfg;
use tilemark_core::core::{Config, TileError};

#[derive(Clone)]
pub enum Catalog {
    Static(StaticCatalog),
    Unavailable(UnavailableCatalog),
}

impl ObjectCatalog for Catalog {
    fn is_ready(&self) -> bool {
        match self {
            &Catalog::Static(ref cat) => cat.is_ready(),
            &Catalog::Unavailable(ref cat) => cat.is_ready(),
        }
    }
    fn retrieve_objects<F>(&self, read: F) -> Result<u64, TileError>
    where
        F: FnMut(&GeoBBox),
    {
        match self {
            &Catalog::Static(ref cat) => cat.retrieve_objects(read),
            &Catalog::Unavailable(ref cat) => cat.retrieve_objects(read),
        }
    }
}

impl Catalog {
    /// Catalog of the optional `[catalog]` configuration table
    pub fn from_optional_config(cfg: &Option<CatalogCfg>) -> Result<Self, String> {
        match cfg {
            Some(cfg) => Catalog::from_config(cfg),
            None => {
                warn!("No object catalog configured");
                Ok(Catalog::Unavailable(UnavailableCatalog::new(
                    "no object catalog configured",
                )))
            }
        }
    }
}

impl<'a> Config<'a, CatalogCfg> for Catalog {
    fn from_config(cfg: &CatalogCfg) -> Result<Self, String> {
        if cfg.path.is_some() || !cfg.objects.is_empty() {
            StaticCatalog::from_config(cfg).and_then(|cat| Ok(Catalog::Static(cat)))
        } else {
            Err(format!("Catalog requires `objects` or `path`"))
        }
    }
    fn gen_config() -> String {
        StaticCatalog::gen_config()
    }
    fn gen_runtime_config(&self) -> String {
        match self {
            &Catalog::Static(ref cat) => cat.gen_runtime_config(),
            &Catalog::Unavailable(_) => "\n#[catalog]\n#path = \"objects.json\"\n".to_string(),
        }
    }
}

#[cfg(test)]
fn catalog_from_config(toml: &str) -> Result<Catalog, String> {
    use tilemark_core::core::parse_config;

    let config = parse_config(toml.to_string(), "");
    Catalog::from_config(&config?)
}

#[test]
fn test_catalog_from_config() {
    let toml = r#"
        #[catalog]
        name = "two"
        objects = [[54.18468, 45.17661, 54.18466, 45.17668], [54.18465, 45.17665, 54.18463, 45.17673]]
        "#;
    let cat = match catalog_from_config(toml).unwrap() {
        Catalog::Static(cat) => cat,
        _ => panic!(),
    };
    assert_eq!(cat.name, "two");
    assert_eq!(cat.len(), 2);

    let toml = r#"
        #[catalog]
        path = "src/test/objects.json"
        "#;
    let cat = catalog_from_config(toml).unwrap();
    assert!(cat.is_ready());
    assert_eq!(cat.retrieve_objects(|_| {}).unwrap(), 3);
}

#[test]
fn test_catalog_config_errors() {
    assert_eq!(
        catalog_from_config("").err(),
        Some("Catalog requires `objects` or `path`".to_string())
    );

    let toml = r#"
        #[catalog]
        objects = [[91.0, 45.17661, 54.18466, 45.17668]]
        "#;
    let err = catalog_from_config(toml).err().unwrap();
    assert!(err.starts_with("Catalog 'objects': Coordinate (91, 45.17661)"));

    let toml = r#"
        #[catalog]
        objects = [[54.18468, 45.17661]]
        "#;
    assert!(catalog_from_config(toml).is_err());
}

#[test]
fn test_unconfigured_catalog() {
    let cat = Catalog::from_optional_config(&None).unwrap();
    assert!(!cat.is_ready());
    match cat.retrieve_objects(|_| {}) {
        Err(TileError::CatalogUnavailable(_)) => {}
        other => panic!("unexpected result {:?}", other),
    }
    assert!(cat.gen_runtime_config().contains("#[catalog]"));
}
