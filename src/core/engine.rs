use crate::core::Pipeline;
use crate::utils::error::{FixtureError, Result};

#[derive(Debug, Default)]
pub struct RunReport {
    pub generated: Vec<String>,
    pub written: Vec<String>,
    pub failed: Vec<FixtureError>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct FixtureEngine<P: Pipeline> {
    pipeline: P,
    dry_run: bool,
}

impl<P: Pipeline> FixtureEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            dry_run: false,
        }
    }

    /// Render every scenario but write nothing.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Generates every planned scenario. A failing scenario is recorded in the
    /// report and does not stop the others; files already written stay.
    pub fn run(&self) -> Result<RunReport> {
        let plan = self.pipeline.plan()?;
        tracing::info!("Generating {} scenario(s)", plan.len());

        let mut report = RunReport::default();
        for name in plan {
            match self.run_scenario(&name) {
                Ok(paths) => {
                    tracing::info!("Scenario '{}' done ({} file(s))", name, paths.len());
                    report.written.extend(paths);
                    report.generated.push(name);
                }
                Err(e) => {
                    tracing::error!("Scenario '{}' failed: {} (Category: {:?})", name, e, e.category());
                    report.failed.push(e.in_scenario(name));
                }
            }
        }

        Ok(report)
    }

    fn run_scenario(&self, name: &str) -> Result<Vec<String>> {
        let scenario = self.pipeline.build(name)?;
        let rendered = self.pipeline.render(&scenario)?;

        if self.dry_run {
            let paths = rendered.documents.iter().map(|d| d.path.clone()).collect();
            tracing::info!("Dry run, skipping write for '{}'", name);
            return Ok(paths);
        }

        self.pipeline.load(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{RenderedScenario, Scenario};
    use crate::core::scenarios::{compliant, Baseline};
    use std::cell::RefCell;

    struct FakePipeline {
        plan: Vec<String>,
        failing: &'static str,
        loaded: RefCell<Vec<String>>,
    }

    impl Pipeline for FakePipeline {
        fn plan(&self) -> Result<Vec<String>> {
            Ok(self.plan.clone())
        }

        fn build(&self, name: &str) -> Result<Scenario> {
            if name == self.failing {
                return Err(FixtureError::UnknownAttribute {
                    entity: "DFD".into(),
                    attribute: "bla".into(),
                });
            }
            let mut scenario = compliant(&Baseline::new());
            scenario.name = name.to_string();
            Ok(scenario)
        }

        fn render(&self, scenario: &Scenario) -> Result<RenderedScenario> {
            Ok(RenderedScenario {
                name: scenario.name.clone(),
                documents: vec![],
            })
        }

        fn load(&self, rendered: RenderedScenario) -> Result<Vec<String>> {
            self.loaded.borrow_mut().push(rendered.name.clone());
            Ok(vec![format!("{}/out.dfd.yml", rendered.name)])
        }
    }

    fn fake(failing: &'static str) -> FakePipeline {
        FakePipeline {
            plan: vec!["one".into(), "two".into(), "three".into()],
            failing,
            loaded: RefCell::new(vec![]),
        }
    }

    #[test]
    fn test_failure_is_isolated() {
        let engine = FixtureEngine::new(fake("two"));
        let report = engine.run().unwrap();

        assert!(!report.is_success());
        assert_eq!(report.generated, vec!["one", "three"]);
        assert_eq!(report.failed.len(), 1);
        assert!(matches!(
            &report.failed[0],
            FixtureError::ScenarioFailed { scenario, .. } if scenario == "two"
        ));
        assert_eq!(*engine.pipeline.loaded.borrow(), vec!["one", "three"]);
    }

    #[test]
    fn test_dry_run_skips_load() {
        let engine = FixtureEngine::new(fake("")).with_dry_run(true);
        let report = engine.run().unwrap();

        assert!(report.is_success());
        assert_eq!(report.generated.len(), 3);
        assert!(engine.pipeline.loaded.borrow().is_empty());
    }
}
