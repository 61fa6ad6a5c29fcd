//! Per-language classification tables.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::{
    JAVA_CONTAINERS, JAVA_MAP_CONTAINERS, JAVA_PRIMITIVES, JAVA_UNIT_TYPES, KOTLIN_CONTAINERS,
    KOTLIN_MAP_CONTAINERS, KOTLIN_PRIMITIVES, KOTLIN_UNIT_TYPES,
};
use crate::model::Visibility;

/// Type tables that drive relationship classification for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageProfile {
    /// Value types that never produce a relationship.
    pub primitives: BTreeSet<String>,
    /// Generic containers whose element type is recorded instead.
    pub containers: BTreeSet<String>,
    /// Containers whose element is the last type argument (the key is dropped).
    pub map_containers: BTreeSet<String>,
    /// "No value" return types (`void`, `Unit`).
    pub unit_types: BTreeSet<String>,
    /// Visibility when no modifier is present.
    pub default_visibility: Visibility,
}

fn to_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl LanguageProfile {
    /// Built-in Java tables.
    pub fn java() -> Self {
        Self {
            primitives: to_set(JAVA_PRIMITIVES),
            containers: to_set(JAVA_CONTAINERS),
            map_containers: to_set(JAVA_MAP_CONTAINERS),
            unit_types: to_set(JAVA_UNIT_TYPES),
            default_visibility: Visibility::Package,
        }
    }

    /// Built-in Kotlin tables.
    pub fn kotlin() -> Self {
        Self {
            primitives: to_set(KOTLIN_PRIMITIVES),
            containers: to_set(KOTLIN_CONTAINERS),
            map_containers: to_set(KOTLIN_MAP_CONTAINERS),
            unit_types: to_set(KOTLIN_UNIT_TYPES),
            default_visibility: Visibility::Public,
        }
    }

    pub fn is_primitive(&self, name: &str) -> bool {
        self.primitives.contains(name)
    }

    pub fn is_unit(&self, name: &str) -> bool {
        self.unit_types.contains(name)
    }

    pub fn is_container(&self, name: &str) -> bool {
        self.containers.contains(name) || self.map_containers.contains(name)
    }

    pub fn is_map_container(&self, name: &str) -> bool {
        self.map_containers.contains(name)
    }

    /// Whether a simplified type name can be the target of a relationship.
    pub fn is_relatable(&self, name: &str) -> bool {
        let starts_like_identifier = name
            .chars()
            .next()
            .map(|c| c.is_alphabetic() || c == '_' || c == '$')
            .unwrap_or(false);

        starts_like_identifier && !self.is_primitive(name) && !self.is_unit(name)
    }

    /// Apply user overrides on top of these tables.
    pub fn with_overrides(mut self, overrides: &ProfileOverrides) -> Self {
        if let Some(primitives) = &overrides.primitives {
            self.primitives = primitives.iter().cloned().collect();
        }
        if let Some(containers) = &overrides.containers {
            self.containers = containers.iter().cloned().collect();
        }
        if let Some(map_containers) = &overrides.map_containers {
            self.map_containers = map_containers.iter().cloned().collect();
        }
        if let Some(unit_types) = &overrides.unit_types {
            self.unit_types = unit_types.iter().cloned().collect();
        }
        if let Some(visibility) = overrides.default_visibility {
            self.default_visibility = visibility;
        }
        self
    }
}

/// Optional replacements for a [`LanguageProfile`], as read from config.
///
/// Each present list replaces the built-in table wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primitives: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub containers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_containers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_visibility: Option<Visibility>,
}
