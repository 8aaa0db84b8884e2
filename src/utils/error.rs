use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Unknown attribute '{attribute}' for {entity}")]
    UnknownAttribute { entity: String, attribute: String },

    #[error("Cannot construct {entity}: {message}")]
    TypeMismatch { entity: String, message: String },

    #[error("Unknown scenario: {name}")]
    UnknownScenario { name: String },

    #[error("Scenario '{scenario}' failed: {source}")]
    ScenarioFailed {
        scenario: String,
        #[source]
        source: Box<FixtureError>,
    },

    #[error("Cannot write {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// An override named an attribute the entity does not have.
    Protocol,
    /// Computed attributes could not build the concrete entity.
    Construction,
    Io,
    Configuration,
    Scenario,
}

impl FixtureError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FixtureError::UnknownAttribute { .. } => ErrorCategory::Protocol,
            FixtureError::TypeMismatch { .. }
            | FixtureError::YamlError(_)
            | FixtureError::SerializationError(_) => ErrorCategory::Construction,
            FixtureError::WriteFailed { .. } | FixtureError::IoError(_) => ErrorCategory::Io,
            FixtureError::UnknownScenario { .. }
            | FixtureError::ConfigError { .. }
            | FixtureError::ConfigValidationError { .. }
            | FixtureError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            FixtureError::ScenarioFailed { .. } => ErrorCategory::Scenario,
        }
    }

    /// Wraps an error with the name of the scenario it aborted.
    pub fn in_scenario(self, scenario: impl Into<String>) -> Self {
        FixtureError::ScenarioFailed {
            scenario: scenario.into(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, FixtureError>;
