//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use clap::{App, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use log::Record;
use std::env;
use std::fs;
use std::io::Write;
use std::process;
use tile_grid::TileIndex;
use tilemark_core::render::encode_png;
use tilemark_webserver as webserver;
use time;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap_or_default(),
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log_env = env::var("RUST_LOG");
    let rust_log = match (args.value_of("loglevel"), rust_log_env.as_ref()) {
        (None, Ok(rust_log)) => rust_log.as_str(),
        (loglevel, _) => match loglevel.unwrap_or("info") {
            "debug" => "debug,actix_server=info",
            loglevel => loglevel,
        },
    };
    builder.parse_filters(rust_log);

    builder.init();
}

fn exit_with_error(err: String) -> ! {
    error!("{}", err);
    eprintln!("Error: {}", err);
    process::exit(1)
}

fn parse_arg(args: &ArgMatches<'_>, name: &str) -> Result<i64, String> {
    let value = args
        .value_of(name)
        .ok_or_else(|| format!("Missing argument '{}'", name))?;
    value
        .parse::<i64>()
        .map_err(|_| format!("Error parsing '{}' as integer value", name))
}

fn render(args: &ArgMatches<'_>) -> Result<(), String> {
    let config = webserver::config_from_args(args)?;
    let service = webserver::service_from_args(&config, args)?;
    let tile = TileIndex::new(
        parse_arg(args, "x")?,
        parse_arg(args, "y")?,
        parse_arg(args, "z")?,
    )
    .map_err(|e| e.to_string())?;
    let image = service.tile(&tile).map_err(|e| e.to_string())?;
    let png = encode_png(&image).map_err(|e| e.to_string())?;
    let out = args.value_of("out").unwrap_or("tile.png");
    fs::write(out, png).map_err(|e| format!("Error writing {}: {}", out, e))?;
    info!("Tile {} written to '{}'", tile, out);
    Ok(())
}

fn main() {
    dotenv().ok();
    // http://kbknapp.github.io/clap-rs/clap/
    let mut app = App::new("tilemark")
        .version(crate_version!())
        .author("Pirmin Kalberer <pka@sourcepole.ch>")
        .about("raster tile server outlining catalog objects")
        .subcommand(SubCommand::with_name("serve")
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --objects=[FILE] 'JSON file with object footprints'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --bind=[IPADDRESS] 'Bind web server to this address (0.0.0.0 for all)'
                                              --port=[PORT] 'Bind web server to this port'")
                        .about("Start web server and serve overlay tiles"))
        .subcommand(SubCommand::with_name("genconfig")
                        .args_from_usage("--objects=[FILE] 'JSON file with object footprints'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Generate configuration template"))
        .subcommand(SubCommand::with_name("render")
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --objects=[FILE] 'JSON file with object footprints'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --z=<LEVEL> 'Zoom level'
                                              --x=<COL> 'Tile column'
                                              --y=<ROW> 'Tile row (XYZ scheme)'
                                              --out=[FILE] 'Output PNG file (Default: tile.png)'")
                        .about("Render a single tile into a PNG file"));

    match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        Result::Err(e) => {
            println!("{}", e);
        }
        Result::Ok(matches) => match matches.subcommand() {
            ("serve", Some(sub_m)) => {
                init_logger(sub_m);
                if let Err(err) = webserver::webserver(sub_m) {
                    exit_with_error(err);
                }
            }
            ("genconfig", Some(sub_m)) => {
                init_logger(sub_m);
                match webserver::gen_config(sub_m) {
                    Ok(config) => println!("{}", config),
                    Err(err) => exit_with_error(err),
                }
            }
            ("render", Some(sub_m)) => {
                init_logger(sub_m);
                if let Err(err) = render(sub_m) {
                    exit_with_error(err);
                }
            }
            _ => {
                let _ = app.print_help();
                println!("");
            }
        },
    }
}
