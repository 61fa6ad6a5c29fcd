//! Diagram synthesis.
//!
//! Turns a merged entity list into AML, PlantUML or JSON text. Rendering is a
//! pure function of its input: the same entities always produce the same
//! bytes.
//!
//! ## Ordering
//!
//! - Namespaced groups come first, sorted by namespace; ungrouped entities last.
//! - Entities are sorted by name inside each group.
//! - Relationship lines are emitted after every entity block, deduplicated and
//!   sorted lexicographically.
//!
//! JSON skips all of the above and serializes the list as given.

mod aml;
mod json;
mod layout;
mod puml;
mod relations;

pub use aml::{AmlNotation, AmlRenderer};
pub use json::JsonRenderer;
pub use layout::{plan_layout, Direction, LayoutPlan};
pub use puml::{PumlNotation, PumlRenderer};
pub use relations::{collect_lines, entity_relations, Notation, Relation};

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::config::LayoutConfig;
use crate::model::Entity;

/// A diagram text format.
pub trait Renderer {
    fn render(&self, entities: &[Entity], title: Option<&str>) -> String;
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Aml,
    Puml,
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [Self::Aml, Self::Puml, Self::Json];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Aml => "aml",
            Self::Puml => "puml",
            Self::Json => "json",
        }
    }

    /// The format named by a file's extension, if it names one.
    pub fn from_extension(path: impl AsRef<Path>) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .and_then(|ext| ext.parse().ok())
    }

    /// Infer the format from an output file extension; anything unrecognized is PlantUML.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self::from_extension(path).unwrap_or(Self::Puml)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "aml" => Ok(Self::Aml),
            "puml" => Ok(Self::Puml),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s} (expected aml, puml or json)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Renders entity lists in any [`OutputFormat`].
#[derive(Debug, Clone, Default)]
pub struct DiagramSynthesizer {
    layout: LayoutConfig,
}

impl DiagramSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom PlantUML layout thresholds.
    pub fn with_layout(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    /// Render `entities` as diagram text. Never fails.
    pub fn render(&self, entities: &[Entity], format: OutputFormat, title: Option<&str>) -> String {
        let _span = tracing::debug_span!("render", %format, entities = entities.len()).entered();

        let text = match format {
            OutputFormat::Aml => AmlRenderer::new().render(entities, title),
            OutputFormat::Puml => PumlRenderer::new(self.layout.clone()).render(entities, title),
            OutputFormat::Json => JsonRenderer.render(entities, title),
        };

        tracing::debug!(bytes = text.len(), "rendered diagram");
        text
    }
}

/// Entities partitioned for rendering.
pub(crate) struct Groups<'a> {
    pub namespaced: BTreeMap<&'a str, Vec<&'a Entity>>,
    pub ungrouped: Vec<&'a Entity>,
}

/// Partition by namespace; every group is sorted by entity name.
pub(crate) fn group_by_namespace(entities: &[Entity]) -> Groups<'_> {
    let mut namespaced: BTreeMap<&str, Vec<&Entity>> = BTreeMap::new();
    let mut ungrouped = Vec::new();

    for entity in entities {
        match entity.namespace.as_deref() {
            Some(namespace) => namespaced.entry(namespace).or_default().push(entity),
            None => ungrouped.push(entity),
        }
    }

    for members in namespaced.values_mut() {
        members.sort_by(|a, b| a.name.cmp(&b.name));
    }
    ungrouped.sort_by(|a, b| a.name.cmp(&b.name));

    Groups { namespaced, ungrouped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntityKind;

    #[test]
    fn test_format_parsing() {
        assert_eq!("AML".parse::<OutputFormat>(), Ok(OutputFormat::Aml));
        assert_eq!("puml".parse::<OutputFormat>(), Ok(OutputFormat::Puml));
        assert_eq!("Json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("svg".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path("out/model.json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_path("diagram.aml"), OutputFormat::Aml);
        assert_eq!(OutputFormat::from_path("diagram.puml"), OutputFormat::Puml);
        assert_eq!(OutputFormat::from_path("diagram.txt"), OutputFormat::Puml);
        assert_eq!(OutputFormat::from_path("diagram"), OutputFormat::Puml);
        assert_eq!(OutputFormat::from_extension("diagram.txt"), None);
    }

    #[test]
    fn test_grouping_order() {
        let entities = vec![
            Entity::new("Zeta", EntityKind::Class),
            Entity::new("Beta", EntityKind::Class).in_namespace("b.pkg"),
            Entity::new("Alpha", EntityKind::Class).in_namespace("b.pkg"),
            Entity::new("Gamma", EntityKind::Class).in_namespace("a.pkg"),
            Entity::new("Eta", EntityKind::Class),
        ];
        let groups = group_by_namespace(&entities);

        let keys: Vec<&str> = groups.namespaced.keys().copied().collect();
        assert_eq!(keys, vec!["a.pkg", "b.pkg"]);

        let b: Vec<&str> = groups.namespaced["b.pkg"].iter().map(|e| e.name.as_str()).collect();
        assert_eq!(b, vec!["Alpha", "Beta"]);

        let loose: Vec<&str> = groups.ungrouped.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(loose, vec!["Eta", "Zeta"]);
    }

    #[test]
    fn test_render_dispatch() {
        let entities = vec![Entity::new("Solo", EntityKind::Class)];
        let synth = DiagramSynthesizer::new();

        assert!(synth.render(&entities, OutputFormat::Puml, None).starts_with("@startuml"));
        assert!(synth.render(&entities, OutputFormat::Aml, None).starts_with("class Solo {"));
        assert!(synth.render(&entities, OutputFormat::Json, None).starts_with('['));
    }
}
