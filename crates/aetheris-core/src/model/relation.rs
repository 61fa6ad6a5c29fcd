//! Relationship categories between entities.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Kind of edge between two entities.
///
/// Variant order is render precedence: inheritance first, dependency last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    Inheritance,
    Realization,
    Association,
    Aggregation,
    Composition,
    Dependency,
}

impl RelationKind {
    /// Field-based kinds. A dependency on any of their targets is subsumed.
    pub const STRUCTURAL: [RelationKind; 3] = [Self::Association, Self::Aggregation, Self::Composition];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Inheritance => "inheritance",
            Self::Realization => "realization",
            Self::Association => "association",
            Self::Aggregation => "aggregation",
            Self::Composition => "composition",
            Self::Dependency => "dependency",
        }
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Entity {
    /// Raw targets recorded for a classifier-populated kind.
    ///
    /// Inheritance and realization live in `super_type` / `interfaces` and
    /// return an empty slice here.
    pub fn targets(&self, kind: RelationKind) -> &[String] {
        match kind {
            RelationKind::Association => &self.associations,
            RelationKind::Aggregation => &self.aggregations,
            RelationKind::Composition => &self.compositions,
            RelationKind::Dependency => &self.dependencies,
            RelationKind::Inheritance | RelationKind::Realization => &[],
        }
    }

    /// Mutable target list for a classifier-populated kind.
    pub fn targets_mut(&mut self, kind: RelationKind) -> Option<&mut Vec<String>> {
        match kind {
            RelationKind::Association => Some(&mut self.associations),
            RelationKind::Aggregation => Some(&mut self.aggregations),
            RelationKind::Composition => Some(&mut self.compositions),
            RelationKind::Dependency => Some(&mut self.dependencies),
            RelationKind::Inheritance | RelationKind::Realization => None,
        }
    }
}
