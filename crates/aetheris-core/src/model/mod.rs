//! Language-independent entity model.
//!
//! Extractors produce [`Entity`] values; the synthesizer consumes them.
//! Nothing in here knows which source language an entity came from.

mod entity;
mod relation;
mod visibility;

pub use entity::{Entity, EntityKind, Field, Method};
pub use relation::RelationKind;
pub use visibility::Visibility;
