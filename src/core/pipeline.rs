use crate::core::document::to_yaml;
use crate::core::scenarios::{self, Baseline};
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::dfd::Revise;
use crate::domain::model::{Artifact, CustomScenario, RenderedDocument, RenderedScenario, Scenario};
use crate::utils::error::{FixtureError, Result};
use std::path::Path;

pub struct ScenarioPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    baseline: Baseline,
}

impl<S: Storage, C: ConfigProvider> ScenarioPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            baseline: Baseline::new(),
        }
    }

    fn find_custom(&self, name: &str) -> Option<&CustomScenario> {
        self.config.custom_scenarios().iter().find(|c| c.name == name)
    }

    /// File prefix for a scenario: its own when configured, else the
    /// generator-wide one.
    fn file_prefix(&self, name: &str) -> &str {
        self.find_custom(name)
            .and_then(|c| c.file_prefix.as_deref())
            .unwrap_or_else(|| self.config.file_prefix())
    }

    fn is_known(&self, name: &str) -> bool {
        scenarios::find_builtin(name).is_some() || self.find_custom(name).is_some()
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ScenarioPipeline<S, C> {
    fn plan(&self) -> Result<Vec<String>> {
        let selected = self.config.scenarios();
        if selected.is_empty() {
            return Ok(scenarios::builtin_names()
                .map(str::to_string)
                .chain(self.config.custom_scenarios().iter().map(|c| c.name.clone()))
                .collect());
        }

        if let Some(unknown) = selected.iter().find(|name| !self.is_known(name)) {
            return Err(FixtureError::UnknownScenario {
                name: unknown.clone(),
            });
        }

        Ok(selected.to_vec())
    }

    fn build(&self, name: &str) -> Result<Scenario> {
        tracing::debug!("Building scenario '{}'", name);

        if let Some(build) = scenarios::find_builtin(name) {
            return Ok(build(&self.baseline));
        }

        let spec = self.find_custom(name).ok_or_else(|| FixtureError::UnknownScenario {
            name: name.to_string(),
        })?;
        scenarios::custom(&self.baseline, spec)
    }

    fn render(&self, scenario: &Scenario) -> Result<RenderedScenario> {
        let revision = self.config.schema_revision();
        let dfd = scenario.dfd.revise(revision);
        let prefix = self.file_prefix(&scenario.name);

        let mut documents = Vec::with_capacity(Artifact::ALL.len());
        for artifact in Artifact::ALL {
            let body = match artifact {
                Artifact::Dfd => to_yaml(&dfd)?,
                Artifact::Dpia => to_yaml(&scenario.dpia)?,
            };
            documents.push(RenderedDocument {
                artifact,
                path: artifact.relative_path(&scenario.name, prefix),
                body,
            });
        }

        tracing::debug!(
            "Rendered scenario '{}' ({} revision)",
            scenario.name,
            revision
        );

        Ok(RenderedScenario {
            name: scenario.name.clone(),
            documents,
        })
    }

    fn load(&self, rendered: RenderedScenario) -> Result<Vec<String>> {
        let mut written = Vec::with_capacity(rendered.documents.len());
        for document in rendered.documents {
            self.storage
                .write_file(&document.path, document.body.as_bytes())?;

            let full_path = Path::new(self.config.output_path())
                .join(&document.path)
                .display()
                .to_string();
            tracing::info!("Wrote {} for '{}' to {}", document.artifact.as_str(), rendered.name, full_path);
            written.push(full_path);
        }
        Ok(written)
    }
}
