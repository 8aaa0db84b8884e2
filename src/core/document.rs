//! YAML documents in the layout the compliance engine reads.
//!
//! Attribute names are stored with underscores (`id_`, `from_`,
//! `legal_impact_for_the_user`). On output every key has its underscores
//! turned into spaces and trailing whitespace dropped, so `id_` becomes `id`
//! and `legal_impact_for_the_user` becomes `legal impact for the user`.
//! Keys are written sorted.

use crate::utils::error::Result;
use serde::Serialize;
use serde_yaml::{Mapping, Value};

pub fn wire_key(attribute: &str) -> String {
    attribute.replace('_', " ").trim_end().to_string()
}

pub fn to_document<T: Serialize>(entity: &T) -> Result<Value> {
    let value = serde_yaml::to_value(entity)?;
    Ok(rename_keys(value))
}

pub fn to_yaml<T: Serialize>(entity: &T) -> Result<String> {
    let document = to_document(entity)?;
    Ok(serde_yaml::to_string(&document)?)
}

fn rename_keys(value: Value) -> Value {
    match value {
        Value::Mapping(mapping) => {
            let mut entries: Vec<(Value, Value)> = mapping
                .into_iter()
                .map(|(key, value)| (rename_key(key), rename_keys(value)))
                .collect();
            entries.sort_by(|(a, _), (b, _)| a.as_str().cmp(&b.as_str()));

            let mut renamed = Mapping::new();
            for (key, value) in entries {
                renamed.insert(key, value);
            }
            Value::Mapping(renamed)
        }
        Value::Sequence(items) => Value::Sequence(items.into_iter().map(rename_keys).collect()),
        Value::Tagged(mut tagged) => {
            let inner = std::mem::replace(&mut tagged.value, Value::Null);
            tagged.value = rename_keys(inner);
            Value::Tagged(tagged)
        }
        scalar => scalar,
    }
}

fn rename_key(key: Value) -> Value {
    match key {
        Value::String(name) => Value::String(wire_key(&name)),
        other => other,
    }
}
