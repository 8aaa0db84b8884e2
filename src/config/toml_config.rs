use crate::core::scenarios;
use crate::core::ConfigProvider;
use crate::domain::data::SchemaRevision;
use crate::domain::model::CustomScenario;
use crate::utils::error::{FixtureError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_OUTPUT_PATH: &str = ".devprivops/tests";
pub const DEFAULT_FILE_PREFIX: &str = "out.";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub custom: Vec<CustomScenario>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
    #[serde(default)]
    pub schema_revision: SchemaRevision,
    #[serde(default)]
    pub scenarios: Vec<String>,
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

fn default_file_prefix() -> String {
    DEFAULT_FILE_PREFIX.to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            file_prefix: default_file_prefix(),
            schema_revision: SchemaRevision::default(),
            scenarios: Vec::new(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FixtureError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FixtureError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FixtureError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("generator.output_path", &self.generator.output_path)?;

        validate_prefix("generator.file_prefix", &self.generator.file_prefix)?;

        for name in &self.generator.scenarios {
            validation::validate_scenario_name("generator.scenarios", name)?;
        }

        validation::validate_unique_names("custom.name", self.custom.iter().map(|c| c.name.as_str()))?;
        let builtins: Vec<&str> = scenarios::builtin_names().collect();
        for custom in &self.custom {
            validation::validate_scenario_name("custom.name", &custom.name)?;

            if builtins.contains(&custom.name.as_str()) {
                return Err(FixtureError::InvalidConfigValueError {
                    field: "custom.name".to_string(),
                    value: custom.name.clone(),
                    reason: "Name is already used by a built-in scenario".to_string(),
                });
            }

            if let Some(base) = &custom.base {
                validation::validate_one_of("custom.base", base, &builtins)?;
            }

            if let Some(prefix) = &custom.file_prefix {
                validate_prefix("custom.file_prefix", prefix)?;
            }
        }

        Ok(())
    }
}

fn validate_prefix(field: &str, prefix: &str) -> Result<()> {
    if prefix.contains(['/', '\\']) {
        return Err(FixtureError::InvalidConfigValueError {
            field: field.to_string(),
            value: prefix.to_string(),
            reason: "Prefix cannot contain path separators".to_string(),
        });
    }
    Ok(())
}

impl ConfigProvider for TomlConfig {
    fn output_path(&self) -> &str {
        &self.generator.output_path
    }

    fn file_prefix(&self) -> &str {
        &self.generator.file_prefix
    }

    fn schema_revision(&self) -> SchemaRevision {
        self.generator.schema_revision
    }

    fn scenarios(&self) -> &[String] {
        &self.generator.scenarios
    }

    fn custom_scenarios(&self) -> &[CustomScenario] {
        &self.custom
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
