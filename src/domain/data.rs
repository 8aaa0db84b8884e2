//! Structured data references.
//!
//! Older fixture layouts referenced data by bare identifier (`":message"`);
//! newer ones carry a [`Data`] record with its format and processing
//! categorization. Both forms deserialize into [`DataRef`], and
//! [`SchemaRevision`] decides which one is written out.

use crate::domain::cloneable::entity;
use serde::{Deserialize, Serialize};

entity! {
    /// How a data item is encoded.
    DataFormat as "DataFormat", overrides DataFormatOverrides {
        id_: String,
        description: String,
        domain: String,
    }
}

impl Default for DataFormat {
    /// Plain business text, i.e. no special handling.
    fn default() -> Self {
        Self {
            id_: "psdc:plain".to_string(),
            description: "plain text".to_string(),
            domain: "business".to_string(),
        }
    }
}

entity! {
    ProcessedCategorization as "ProcessedCategorization", overrides ProcessedCategorizationOverrides {
        category: String,
        representation: String,
    }
}

impl Default for ProcessedCategorization {
    fn default() -> Self {
        Self {
            category: "logical".to_string(),
            representation: "boolean".to_string(),
        }
    }
}

entity! {
    /// A data item flowing through the DFD.
    Data as "Data", overrides DataOverrides {
        id_: String,
        format: DataFormat,
        processed_categorization: ProcessedCategorization,
    }
}

impl Data {
    /// Data item with the default format and categorization.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id_: id.into(),
            format: DataFormat::default(),
            processed_categorization: ProcessedCategorization::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SchemaRevision {
    /// References are bare identifier strings.
    Identifier,
    /// References are `Data` records.
    #[default]
    Structured,
}

impl SchemaRevision {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaRevision::Identifier => "identifier",
            SchemaRevision::Structured => "structured",
        }
    }
}

impl std::fmt::Display for SchemaRevision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataRef {
    Identifier(String),
    Structured(Data),
}

impl DataRef {
    /// Structured reference with default format and categorization.
    pub fn data(id: impl Into<String>) -> Self {
        DataRef::Structured(Data::new(id))
    }

    pub fn id(&self) -> &str {
        match self {
            DataRef::Identifier(id) => id,
            DataRef::Structured(data) => &data.id_,
        }
    }

    /// Converts to the form used by `revision`. Promoting an identifier to a
    /// record fills in the default format and categorization.
    pub fn for_revision(&self, revision: SchemaRevision) -> Self {
        match (revision, self) {
            (SchemaRevision::Identifier, reference) => DataRef::Identifier(reference.id().to_string()),
            (SchemaRevision::Structured, DataRef::Identifier(id)) => DataRef::data(id.as_str()),
            (SchemaRevision::Structured, structured) => structured.clone(),
        }
    }
}

/// Structured references for each of `ids`, in order.
pub fn data_refs<const N: usize>(ids: [&str; N]) -> Vec<DataRef> {
    ids.into_iter().map(DataRef::data).collect()
}

pub fn refs_for_revision(refs: &[DataRef], revision: SchemaRevision) -> Vec<DataRef> {
    refs.iter().map(|r| r.for_revision(revision)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cloneable::Cloneable;

    #[test]
    fn test_defaults_are_stable() {
        let a = DataFormat::default();
        let b = DataFormat::default();
        assert_eq!(a, b);
        assert_eq!(a.id_, "psdc:plain");
        assert_eq!(a.description, "plain text");
        assert_eq!(a.domain, "business");

        let c = ProcessedCategorization::default();
        assert_eq!(c, ProcessedCategorization::default());
        assert_eq!(c.category, "logical");
        assert_eq!(c.representation, "boolean");
    }

    #[test]
    fn test_nested_clone_is_independent() {
        let data = Data::new(":message");
        let mut copy = data.with_overrides(DataOverrides::default());
        copy.format = copy
            .format
            .with_overrides(DataFormatOverrides::default().id_("psdc:encrypted"));

        assert_eq!(data.format, DataFormat::default());
        assert_eq!(copy.format.id_, "psdc:encrypted");
        assert_eq!(copy.processed_categorization, data.processed_categorization);
    }

    #[test]
    fn test_revision_conversion() {
        let structured = DataRef::data(":message");
        let identifier = structured.for_revision(SchemaRevision::Identifier);
        assert_eq!(identifier, DataRef::Identifier(":message".into()));

        let promoted = identifier.for_revision(SchemaRevision::Structured);
        assert_eq!(promoted, structured);
        assert_eq!(promoted.id(), ":message");
    }

    #[test]
    fn test_both_forms_deserialize() {
        let refs: Vec<DataRef> = serde_json::from_str(
            r#"[":type 4", {"id_": ":message", "format": {"id_": "psdc:plain", "description": "plain text", "domain": "business"}, "processed_categorization": {"category": "logical", "representation": "boolean"}}]"#,
        )
        .unwrap();

        assert_eq!(refs[0], DataRef::Identifier(":type 4".into()));
        assert_eq!(refs[1], DataRef::data(":message"));
    }
}
