//! Relationship classification.
//!
//! Pure functions that decide which relationship, if any, a referenced type
//! creates. Extractors call these while building an [`Entity`]; language
//! specifics arrive only through a [`LanguageProfile`].
//!
//! - A field whose simplified type is relatable becomes an **aggregation** when
//!   it was declared through a container, an **association** otherwise.
//! - Every relatable return or parameter type becomes a **dependency**.
//! - Self-references are never recorded.
//!
//! Duplicates are kept here; the synthesizer deduplicates and applies
//! subsumption when rendering.

mod profile;
mod types;

pub use profile::{LanguageProfile, ProfileOverrides};
pub use types::{base_name, simplify_type, TypeRef};

use crate::model::{Entity, RelationKind};

/// Relationship created by a field of `owner` with the given type, if any.
pub fn field_relation(owner: &str, field_type: &TypeRef, profile: &LanguageProfile) -> Option<RelationKind> {
    if !profile.is_relatable(&field_type.name) || field_type.name == owner {
        return None;
    }

    if field_type.is_container {
        Some(RelationKind::Aggregation)
    } else {
        Some(RelationKind::Association)
    }
}

/// Dependency targets created by a method signature of `owner`.
///
/// Returned in signature order (return type first), duplicates included.
pub fn signature_dependencies<'a>(
    owner: &str,
    return_type: &'a str,
    parameters: &'a [String],
    profile: &LanguageProfile,
) -> Vec<&'a str> {
    std::iter::once(return_type)
        .chain(parameters.iter().map(String::as_str))
        .filter(|t| profile.is_relatable(t) && *t != owner)
        .collect()
}

/// Record the relationship for a field on `entity`.
pub fn classify_field(entity: &mut Entity, field_type: &TypeRef, profile: &LanguageProfile) {
    if let Some(kind) = field_relation(&entity.name, field_type, profile) {
        if let Some(targets) = entity.targets_mut(kind) {
            targets.push(field_type.name.clone());
        }
    }
}

/// Record dependencies for a method signature on `entity`.
pub fn classify_signature(entity: &mut Entity, return_type: &str, parameters: &[String], profile: &LanguageProfile) {
    let targets: Vec<String> = signature_dependencies(&entity.name, return_type, parameters, profile)
        .into_iter()
        .map(String::from)
        .collect();
    entity.dependencies.extend(targets);
}
