pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::{
    engine::{FixtureEngine, RunReport},
    pipeline::ScenarioPipeline,
};
pub use domain::cloneable::{AttributeOverrides, Cloneable};
pub use domain::data::SchemaRevision;
pub use utils::error::{FixtureError, Result};
