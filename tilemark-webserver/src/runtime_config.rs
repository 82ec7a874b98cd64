//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::catalogs::Catalog;
use crate::core::config::{ApplicationCfg, CatalogCfg, DEFAULT_CONFIG};
use crate::core::{parse_config, read_config, Config};
use crate::overlay_service::OverlayService;
use clap::ArgMatches;
use std::str::FromStr;

/// Configuration from `--config` or the built-in defaults,
/// with `--bind` and `--port` taking precedence.
pub fn config_from_args(args: &ArgMatches) -> Result<ApplicationCfg, String> {
    let mut config: ApplicationCfg = if let Some(cfgpath) = args.value_of("config") {
        info!("Reading configuration from '{}'", cfgpath);
        read_config(cfgpath)?
    } else {
        parse_config(DEFAULT_CONFIG.to_string(), "")?
    };
    if let Some(bind) = args.value_of("bind") {
        config.webserver.bind = Some(bind.to_string());
    }
    if let Some(port) = args.value_of("port") {
        let port = u16::from_str(port).map_err(|_| format!("Invalid port number '{}'", port))?;
        config.webserver.port = Some(port);
    }
    if config.webserver.threads == Some(0) {
        return Err("webserver.threads must be greater than 0".to_string());
    }
    Ok(config)
}

pub fn service_from_args(
    config: &ApplicationCfg,
    args: &ArgMatches,
) -> Result<OverlayService, String> {
    let mut service = OverlayService::from_config(config)?;
    if let Some(path) = args.value_of("objects") {
        if config.catalog.is_some() {
            warn!("Replacing configured catalog with objects from '{}'", path);
        }
        let cfg = CatalogCfg {
            name: None,
            objects: Vec::new(),
            path: Some(path.to_string()),
        };
        service.catalog = Catalog::from_config(&cfg)?;
    }
    Ok(service)
}

pub fn gen_config(args: &ArgMatches) -> Result<String, String> {
    let toml = r#"
[webserver]
# Bind address. Use 0.0.0.0 to listen on all adresses.
bind = "127.0.0.1"
port = 6767
#threads = 4
cache_control_max_age = 300
"#;
    let mut config = if args.value_of("objects").is_some() {
        let service = service_from_args(&config_from_args(args)?, args)?;
        service.gen_runtime_config()
    } else {
        OverlayService::gen_config()
    };
    config.push_str(toml);
    Ok(config)
}

#[cfg(test)]
fn test_args(args: Vec<&str>) -> ArgMatches<'static> {
    use clap::App;

    App::new("test")
        .args_from_usage(
            "-c, --config=[FILE] 'Load from custom config file'
             --objects=[FILE] 'JSON file with object footprints'
             --bind=[IPADDRESS] 'Bind web server to this address'
             --port=[PORT] 'Bind web server to this port'",
        )
        .get_matches_from(args)
}

#[test]
fn test_gen_config() {
    let args = ArgMatches::new();
    let toml = gen_config(&args).unwrap();
    println!("{}", toml);
    assert_eq!(Some("# tilemark configuration"), toml.lines().next());

    let config: ApplicationCfg = parse_config(toml, "").unwrap();
    assert_eq!(config.webserver.port, Some(6767));
    let service = OverlayService::from_config(&config).unwrap();
    assert!(service.is_ready());
}

#[test]
fn test_runtime_config() {
    let args = test_args(vec!["", "--objects", "../tilemark-service/src/test/objects.json"]);
    let toml = gen_config(&args).unwrap();
    println!("{}", toml);
    assert_eq!(Some("# tilemark configuration"), toml.lines().next());

    let config: ApplicationCfg = parse_config(toml, "").unwrap();
    let catalog = config.catalog.unwrap();
    assert_eq!(catalog.objects.len(), 3);
    assert_eq!(catalog.path, None);
}

#[test]
fn test_config_from_args() {
    let config = config_from_args(&ArgMatches::new()).unwrap();
    assert_eq!(config.webserver.bind, Some("127.0.0.1".to_string()));
    assert_eq!(config.webserver.port, Some(6767));
    assert!(config.catalog.is_some());

    let args = test_args(vec![
        "",
        "--config",
        "../tilemark-service/src/test/example.toml",
        "--port",
        "9090",
    ]);
    let config = config_from_args(&args).unwrap();
    assert_eq!(config.webserver.bind, Some("0.0.0.0".to_string()));
    assert_eq!(config.webserver.port, Some(9090));
    assert_eq!(config.webserver.threads, Some(2));

    let args = test_args(vec!["", "--port", "http"]);
    assert_eq!(
        config_from_args(&args).err(),
        Some("Invalid port number 'http'".to_string())
    );

    let args = test_args(vec!["", "--config", "src/test/zero_threads.toml"]);
    assert_eq!(
        config_from_args(&args).err(),
        Some("webserver.threads must be greater than 0".to_string())
    );

    let args = test_args(vec!["", "--config", "missing.toml"]);
    assert_eq!(
        config_from_args(&args).err(),
        Some("Could not find config file!".to_string())
    );
}

#[test]
fn test_service_from_args() {
    let config = config_from_args(&ArgMatches::new()).unwrap();
    let service = service_from_args(&config, &ArgMatches::new()).unwrap();
    match service.catalog {
        Catalog::Static(ref cat) => assert_eq!(cat.len(), 7),
        _ => panic!("static catalog expected"),
    }

    let args = test_args(vec!["", "--objects", "../tilemark-service/src/test/objects.json"]);
    let service = service_from_args(&config, &args).unwrap();
    match service.catalog {
        Catalog::Static(ref cat) => assert_eq!(cat.len(), 3),
        _ => panic!("static catalog expected"),
    }

    let args = test_args(vec!["", "--objects", "missing.json"]);
    assert!(service_from_args(&config, &args).is_err());
}
