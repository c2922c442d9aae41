pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{badges::BadgeFetcher, ra_client::RaClient};
pub use crate::core::{engine::DesignDocEngine, markdown::Document};
pub use crate::domain::model::GameId;
pub use crate::utils::error::{DocError, Result};
