//! Relationship set construction.
//!
//! Every renderer draws edges from the same per-entity relation set; only the
//! notation differs.

use std::collections::{BTreeSet, HashSet};

use crate::model::{Entity, RelationKind};

/// One edge from `source` to `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Relation<'a> {
    pub kind: RelationKind,
    pub source: &'a str,
    pub target: &'a str,
}

/// Textual form of a relation in a particular diagram language.
pub trait Notation {
    fn line(&self, relation: &Relation<'_>) -> String;
}

/// Relations authored by one entity, in precedence order.
///
/// Each kind is deduplicated by target. Field-based kinds and dependencies
/// skip self-references, and a dependency whose target is already covered by
/// an association, aggregation or composition is dropped.
pub fn entity_relations(entity: &Entity) -> Vec<Relation<'_>> {
    let mut set = RelationSet::new(&entity.name);

    if let Some(parent) = entity.super_type.as_deref() {
        set.push(RelationKind::Inheritance, parent);
    }
    for interface in &entity.interfaces {
        set.push(RelationKind::Realization, interface);
    }

    let structural: HashSet<&str> = RelationKind::STRUCTURAL
        .iter()
        .flat_map(|kind| entity.targets(*kind))
        .map(String::as_str)
        .collect();

    for kind in RelationKind::STRUCTURAL {
        for target in entity.targets(kind) {
            if !entity.is_self(target) {
                set.push(kind, target);
            }
        }
    }

    for target in &entity.dependencies {
        if !entity.is_self(target) && !structural.contains(target.as_str()) {
            set.push(RelationKind::Dependency, target);
        }
    }

    set.relations
}

struct RelationSet<'a> {
    source: &'a str,
    seen: HashSet<(RelationKind, &'a str)>,
    relations: Vec<Relation<'a>>,
}

impl<'a> RelationSet<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            seen: HashSet::new(),
            relations: Vec::new(),
        }
    }

    fn push(&mut self, kind: RelationKind, target: &'a str) {
        if !target.is_empty() && self.seen.insert((kind, target)) {
            self.relations.push(Relation {
                kind,
                source: self.source,
                target,
            });
        }
    }
}

/// Rendered relationship lines for the whole diagram, deduplicated and sorted.
pub fn collect_lines(entities: &[Entity], notation: &dyn Notation) -> BTreeSet<String> {
    entities
        .iter()
        .flat_map(entity_relations)
        .map(|relation| notation.line(&relation))
        .collect()
}
