//! Copy-with-overrides protocol shared by every DFD and DPIA entity.
//!
//! Each entity gets a companion `*Overrides` struct holding one `Option` per
//! attribute. [`Cloneable::with_overrides`] builds a new value where every
//! `Some` replaces the attribute and every `None` keeps an owned copy of the
//! current value. Nested entities and label lists are owned, so the clone
//! never shares a container with its source.
//!
//! [`Cloneable::clone_with`] is the runtime-keyed form used by scenarios
//! declared in configuration, where attribute names are only known as strings.

use crate::utils::error::{FixtureError, Result};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

/// Attribute name to replacement value.
pub type AttributeOverrides = Map<String, Value>;

pub trait Cloneable: Clone {
    /// Entity name reported in errors.
    const ENTITY: &'static str;

    type Overrides: Default;

    fn with_overrides(&self, overrides: Self::Overrides) -> Self;

    /// Clones `self` replacing the attributes named in `overrides`.
    ///
    /// Keys are the stored attribute names (`id_`, `from_`, `DPO_`, ...).
    /// Replacements are taken whole, never merged into nested entities.
    fn clone_with(&self, overrides: &AttributeOverrides) -> Result<Self>
    where
        Self: Serialize + DeserializeOwned,
    {
        let current = match serde_json::to_value(self)? {
            Value::Object(map) => map,
            other => {
                return Err(FixtureError::TypeMismatch {
                    entity: Self::ENTITY.to_string(),
                    message: format!("expected a record, found {}", other),
                })
            }
        };

        if let Some(unknown) = overrides.keys().find(|name| !current.contains_key(*name)) {
            return Err(FixtureError::UnknownAttribute {
                entity: Self::ENTITY.to_string(),
                attribute: unknown.clone(),
            });
        }

        serde_json::from_value(Value::Object(with_replacements(&current, overrides))).map_err(|e| {
            FixtureError::TypeMismatch {
                entity: Self::ENTITY.to_string(),
                message: locate_mismatch::<Self>(&current, overrides, e),
            }
        })
    }
}

fn with_replacements(current: &AttributeOverrides, overrides: &AttributeOverrides) -> AttributeOverrides {
    let mut attributes = current.clone();
    attributes.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    attributes
}

/// Names the first override that cannot be deserialized on its own. The
/// current attributes always round-trip, so that override is the culprit.
fn locate_mismatch<T: DeserializeOwned>(
    current: &AttributeOverrides,
    overrides: &AttributeOverrides,
    error: serde_json::Error,
) -> String {
    for (name, value) in overrides {
        let mut attributes = current.clone();
        attributes.insert(name.clone(), value.clone());
        if let Err(e) = serde_json::from_value::<T>(Value::Object(attributes)) {
            return format!("attribute '{}': {}", name, e);
        }
    }
    error.to_string()
}

/// Declares an entity record together with its overrides struct and its
/// [`Cloneable`] impl, so the attribute list is written once.
macro_rules! entity {
    (
        $(#[$meta:meta])*
        $name:ident as $label:literal, overrides $overrides:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        #[doc = concat!("Replacement attributes for a [`", stringify!($name), "`] clone.")]
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $overrides {
            $( pub $field: Option<$ty>, )*
        }

        #[allow(clippy::wrong_self_convention)]
        impl $overrides {
            $(
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }

        impl $crate::domain::cloneable::Cloneable for $name {
            const ENTITY: &'static str = $label;
            type Overrides = $overrides;

            fn with_overrides(&self, overrides: Self::Overrides) -> Self {
                Self {
                    $( $field: overrides.$field.unwrap_or_else(|| self.$field.clone()), )*
                }
            }
        }
    };
}

pub(crate) use entity;
