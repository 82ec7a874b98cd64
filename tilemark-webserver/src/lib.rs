//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

use tilemark_core::core;
use tilemark_service::{catalogs, overlay_service};

mod runtime_config;
pub mod server;
#[cfg(test)]
mod server_test;

pub use runtime_config::{config_from_args, gen_config, service_from_args};
pub use server::webserver;
