use crate::domain::data::SchemaRevision;
use crate::domain::model::{CustomScenario, RenderedScenario, Scenario};
use crate::utils::error::Result;

pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn output_path(&self) -> &str;
    fn file_prefix(&self) -> &str;
    fn schema_revision(&self) -> SchemaRevision;
    /// Scenarios to generate; empty means all of them.
    fn scenarios(&self) -> &[String];
    fn custom_scenarios(&self) -> &[CustomScenario];
}

pub trait Pipeline {
    /// Names of the scenarios to generate, in order.
    fn plan(&self) -> Result<Vec<String>>;
    fn build(&self, name: &str) -> Result<Scenario>;
    fn render(&self, scenario: &Scenario) -> Result<RenderedScenario>;
    fn load(&self, rendered: RenderedScenario) -> Result<Vec<String>>;
}
