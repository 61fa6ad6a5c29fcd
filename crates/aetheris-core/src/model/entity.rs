//! Entity, field and method types.
//!
//! These are produced once per source unit by an extractor and handed to the
//! synthesizer as an immutable batch. The serde representation is the JSON
//! export format.

use serde::{Deserialize, Serialize};

use super::visibility::{member_visibility, Visibility};

// =============================================================================
// ENTITY KIND
// =============================================================================

/// The kind of declaration an entity was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Class,
    Interface,
    Enum,
    Object,
    Annotation,
}

impl EntityKind {
    /// Keyword used in diagram headers.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Object => "object",
            Self::Annotation => "annotation",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

// =============================================================================
// ENTITY
// =============================================================================

/// A class, interface, enum, object or annotation declaration.
///
/// Relationship lists hold raw target names as the classifier found them,
/// duplicates included. Deduplication and subsumption happen at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Simple (unqualified) name, never empty.
    pub name: String,

    #[serde(rename = "type")]
    pub kind: EntityKind,

    #[serde(default)]
    pub visibility: Visibility,

    #[serde(default)]
    pub fields: Vec<Field>,

    #[serde(default)]
    pub methods: Vec<Method>,

    /// Single supertype, if any.
    #[serde(rename = "extends", default)]
    pub super_type: Option<String>,

    /// Implemented or realized type names.
    #[serde(rename = "implements", default)]
    pub interfaces: Vec<String>,

    /// Only meaningful for `EntityKind::Class`.
    #[serde(default)]
    pub is_abstract: bool,

    /// Source package or module used for grouping.
    #[serde(rename = "package", default)]
    pub namespace: Option<String>,

    #[serde(default)]
    pub associations: Vec<String>,

    #[serde(default)]
    pub dependencies: Vec<String>,

    #[serde(default)]
    pub aggregations: Vec<String>,

    #[serde(default)]
    pub compositions: Vec<String>,
}

impl Entity {
    /// Create an empty entity of the given kind.
    pub fn new(name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            name: name.into(),
            kind,
            visibility: Visibility::default(),
            fields: Vec::new(),
            methods: Vec::new(),
            super_type: None,
            interfaces: Vec::new(),
            is_abstract: false,
            namespace: None,
            associations: Vec::new(),
            dependencies: Vec::new(),
            aggregations: Vec::new(),
            compositions: Vec::new(),
        }
    }

    /// Set the namespace (builder style).
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set the supertype (builder style).
    pub fn extending(mut self, super_type: impl Into<String>) -> Self {
        self.super_type = Some(super_type.into());
        self
    }

    /// Add an implemented interface (builder style).
    pub fn implementing(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Whether the header should render as `abstract class`.
    pub fn renders_abstract(&self) -> bool {
        self.is_abstract && self.kind == EntityKind::Class
    }

    /// Whether `target` names this entity.
    pub fn is_self(&self, target: &str) -> bool {
        self.name == target
    }
}

// =============================================================================
// MEMBERS
// =============================================================================

/// A field (attribute) of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,

    /// Already simplified for single-argument containers. Empty for enum constants.
    #[serde(rename = "type")]
    pub type_name: String,

    /// `None` for enum constants.
    #[serde(with = "member_visibility", default)]
    pub visibility: Option<Visibility>,

    #[serde(rename = "static", default)]
    pub is_static: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            visibility: Some(visibility),
            is_static: false,
        }
    }

    /// An enum constant: no type, no visibility.
    pub fn constant(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: String::new(),
            visibility: None,
            is_static: false,
        }
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }
}

/// A method of an entity. Parameter names are not modeled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,

    pub return_type: String,

    #[serde(default)]
    pub parameters: Vec<String>,

    #[serde(with = "member_visibility", default)]
    pub visibility: Option<Visibility>,

    #[serde(rename = "static", default)]
    pub is_static: bool,
}

impl Method {
    pub fn new(
        name: impl Into<String>,
        return_type: impl Into<String>,
        parameters: Vec<String>,
        visibility: Visibility,
    ) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            parameters,
            visibility: Some(visibility),
            is_static: false,
        }
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }
}
