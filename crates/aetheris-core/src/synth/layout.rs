//! Layout heuristics for the PlantUML renderer.
//!
//! Orientation and spacing are chosen from two numbers: the entity count `T`
//! and the namespace count `P`. Link counts are computed alongside and
//! reported, but never change the plan.

use std::collections::{BTreeMap, BTreeSet};

use super::puml::PumlNotation;
use super::relations::{entity_relations, Notation};
use crate::config::LayoutConfig;
use crate::model::Entity;

/// Diagram flow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LeftToRight,
    TopToBottom,
}

impl Direction {
    /// PlantUML directive line.
    pub fn directive(&self) -> &'static str {
        match self {
            Self::LeftToRight => "left to right direction",
            Self::TopToBottom => "top to bottom direction",
        }
    }
}

/// Layout decisions for one diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    pub direction: Direction,
    pub node_separation: u32,
    pub rank_separation: u32,
    /// Approximate links per entity name (authored plus incoming).
    pub link_counts: BTreeMap<String, usize>,
    pub average_links: f64,
}

/// Choose orientation and spacing for a set of entities.
pub fn plan_layout(entities: &[Entity], config: &LayoutConfig) -> LayoutPlan {
    let total = entities.len();
    let packages = entities
        .iter()
        .filter_map(|e| e.namespace.as_deref())
        .collect::<BTreeSet<_>>()
        .len();

    let density = total as f64 / packages.max(1) as f64;
    let direction = if packages >= config.package_orientation_threshold
        || density > config.density_orientation_threshold
    {
        Direction::LeftToRight
    } else {
        Direction::TopToBottom
    };

    let (mut node_separation, mut rank_separation) = (config.node_separation, config.rank_separation);
    if total > config.large_diagram_threshold {
        node_separation += config.large_node_separation_bonus;
        rank_separation += config.large_rank_separation_bonus;
    }

    let link_counts = link_counts(entities);
    let average_links = if total > 0 {
        link_counts.values().sum::<usize>() as f64 / total as f64
    } else {
        0.0
    };

    tracing::debug!(
        entities = total,
        packages,
        density,
        direction = direction.directive(),
        node_separation,
        rank_separation,
        average_links,
        "planned layout"
    );

    LayoutPlan {
        direction,
        node_separation,
        rank_separation,
        link_counts,
        average_links,
    }
}

/// Authored relationship lines per entity, plus one for every line of another
/// entity in which this entity's name appears as a whitespace-separated token.
///
/// Token matching is textual, so unrelated entities sharing a name both count.
fn link_counts(entities: &[Entity]) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> = entities.iter().map(|e| (e.name.clone(), 0)).collect();

    for entity in entities {
        let lines: Vec<String> = entity_relations(entity)
            .iter()
            .map(|relation| PumlNotation.line(relation))
            .collect();

        if let Some(count) = counts.get_mut(&entity.name) {
            *count += lines.len();
        }

        for line in &lines {
            for other in entities.iter().filter(|o| o.name != entity.name) {
                if line.split_whitespace().any(|token| token == other.name) {
                    if let Some(count) = counts.get_mut(&other.name) {
                        *count += 1;
                    }
                }
            }
        }
    }

    counts
}
