pub mod document;
pub mod engine;
pub mod pipeline;
pub mod scenarios;

pub use crate::domain::model::{RenderedScenario, Scenario};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
