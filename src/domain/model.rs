use crate::domain::cloneable::AttributeOverrides;
use crate::domain::dfd::Dfd;
use crate::domain::dpia::Dpia;
use serde::{Deserialize, Serialize};

/// A named `(DFD, DPIA)` pair written as one fixture directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub dfd: Dfd,
    pub dpia: Dpia,
}

impl Scenario {
    pub fn new(name: impl Into<String>, dfd: Dfd, dpia: Dpia) -> Self {
        Self {
            name: name.into(),
            dfd,
            dpia,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Dfd,
    Dpia,
}

impl Artifact {
    pub const ALL: [Artifact; 2] = [Artifact::Dfd, Artifact::Dpia];

    pub fn as_str(&self) -> &'static str {
        match self {
            Artifact::Dfd => "dfd",
            Artifact::Dpia => "dpia",
        }
    }

    /// `<scenario>/<prefix><artifact>.yml`
    pub fn relative_path(&self, scenario: &str, prefix: &str) -> String {
        format!("{}/{}{}.yml", scenario, prefix, self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub artifact: Artifact,
    pub path: String,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct RenderedScenario {
    pub name: String,
    pub documents: Vec<RenderedDocument>,
}

/// Scenario declared in configuration: attribute overrides applied to the
/// DFD and DPIA roots of a built-in scenario.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomScenario {
    pub name: String,
    #[serde(default)]
    pub base: Option<String>,
    /// Overrides `[generator] file_prefix` for this scenario's files.
    #[serde(default)]
    pub file_prefix: Option<String>,
    #[serde(default)]
    pub dfd: AttributeOverrides,
    #[serde(default)]
    pub dpia: AttributeOverrides,
}
