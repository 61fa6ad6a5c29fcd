//! PlantUML renderer.

use super::layout::plan_layout;
use super::relations::{collect_lines, Notation, Relation};
use super::{group_by_namespace, Renderer};
use crate::config::LayoutConfig;
use crate::model::{Entity, Field, Method, RelationKind};

/// Fixed skin lines emitted before the layout directives.
const SKIN: &[&str] = &[
    "skinparam shadowing false",
    "skinparam class {",
    "    BackgroundColor white",
    "    ArrowColor #263238",
    "    BorderColor #263238",
    "}",
    "skinparam packageStyle rectangle",
];

const CLASS_INDENT: &str = "    ";
const MEMBER_INDENT: &str = "      ";

/// PlantUML arrow syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct PumlNotation;

impl Notation for PumlNotation {
    fn line(&self, relation: &Relation<'_>) -> String {
        let Relation { kind, source, target } = *relation;
        match kind {
            RelationKind::Inheritance => format!("{target} <|-- {source}"),
            RelationKind::Realization => format!("{target} <|.. {source}"),
            RelationKind::Association => format!("{source} --> {target}"),
            RelationKind::Aggregation => format!("{source} o-- {target}"),
            RelationKind::Composition => format!("{source} *-- {target}"),
            RelationKind::Dependency => format!("{source} ..> {target}"),
        }
    }
}

/// Renders entities as a PlantUML class diagram.
#[derive(Debug, Clone, Default)]
pub struct PumlRenderer {
    layout: LayoutConfig,
}

impl PumlRenderer {
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    fn write_entity(&self, entity: &Entity, lines: &mut Vec<String>) {
        let header = if entity.renders_abstract() {
            format!("abstract class {}", entity.name)
        } else {
            format!("{} {}", entity.kind, entity.name)
        };

        lines.push(format!("{CLASS_INDENT}{header} {{"));
        lines.extend(entity.fields.iter().map(field_line));
        lines.extend(entity.methods.iter().map(method_line));
        lines.push(format!("{CLASS_INDENT}}}"));
    }
}

impl Renderer for PumlRenderer {
    fn render(&self, entities: &[Entity], title: Option<&str>) -> String {
        let mut lines = Vec::new();

        match title.filter(|t| !t.is_empty()) {
            Some(title) => lines.push(format!("@startuml {title}")),
            None => lines.push("@startuml".to_string()),
        }
        lines.push(String::new());
        lines.extend(SKIN.iter().map(|s| s.to_string()));

        let plan = plan_layout(entities, &self.layout);
        lines.push(plan.direction.directive().to_string());
        lines.push(format!("skinparam nodesep {}", plan.node_separation));
        lines.push(format!("skinparam ranksep {}", plan.rank_separation));
        lines.push("skinparam linetype polyline".to_string());
        lines.push(String::new());

        let groups = group_by_namespace(entities);
        for (namespace, members) in &groups.namespaced {
            lines.push(format!("  package \"{namespace}\" {{"));
            for entity in members {
                self.write_entity(entity, &mut lines);
            }
            lines.push("  }".to_string());
            lines.push(String::new());
        }
        for entity in &groups.ungrouped {
            self.write_entity(entity, &mut lines);
        }

        let relationships = collect_lines(entities, &PumlNotation);
        if !relationships.is_empty() {
            lines.push(String::new());
            lines.push("' Relationships".to_string());
            lines.extend(relationships);
        }

        lines.push("@enduml".to_string());
        lines.join("\n")
    }
}

fn static_marker(is_static: bool) -> &'static str {
    if is_static {
        "{static} "
    } else {
        ""
    }
}

fn field_line(field: &Field) -> String {
    let visibility = field.visibility.map(|v| v.symbol()).unwrap_or("");
    let suffix = if field.type_name.is_empty() {
        String::new()
    } else {
        format!(" : {}", field.type_name)
    };
    format!(
        "{MEMBER_INDENT}{visibility}{}{}{suffix}",
        static_marker(field.is_static),
        field.name
    )
}

fn method_line(method: &Method) -> String {
    let visibility = method.visibility.map(|v| v.symbol()).unwrap_or("");
    let suffix = if method.return_type.is_empty() {
        String::new()
    } else {
        format!(" : {}", method.return_type)
    };
    format!(
        "{MEMBER_INDENT}{visibility}{}{}({}){suffix}",
        static_marker(method.is_static),
        method.name,
        method.parameters.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EntityKind, Visibility};

    #[test]
    fn test_notation() {
        let relation = Relation {
            kind: RelationKind::Inheritance,
            source: "Dog",
            target: "Animal",
        };
        assert_eq!(PumlNotation.line(&relation), "Animal <|-- Dog");

        let relation = Relation {
            kind: RelationKind::Dependency,
            source: "Order",
            target: "Invoice",
        };
        assert_eq!(PumlNotation.line(&relation), "Order ..> Invoice");
    }

    #[test]
    fn test_member_lines() {
        let field = Field::new("count", "int", Visibility::Private).with_static(true);
        assert_eq!(field_line(&field), "      -{static} count : int");
        assert_eq!(field_line(&Field::constant("RED")), "      RED");

        let method = Method::new("add", "void", vec!["Product".into(), "int".into()], Visibility::Public);
        assert_eq!(method_line(&method), "      +add(Product, int) : void");
    }

    #[test]
    fn test_full_document() {
        let mut order = Entity::new("Order", EntityKind::Class).in_namespace("shop");
        order.fields.push(Field::new("items", "Product", Visibility::Private));
        order.aggregations.push("Product".into());
        let mut shape = Entity::new("Shape", EntityKind::Class);
        shape.is_abstract = true;

        let text = PumlRenderer::default().render(&[shape, order], Some("demo"));
        let expected = [
            "@startuml demo",
            "",
            "skinparam shadowing false",
            "skinparam class {",
            "    BackgroundColor white",
            "    ArrowColor #263238",
            "    BorderColor #263238",
            "}",
            "skinparam packageStyle rectangle",
            "top to bottom direction",
            "skinparam nodesep 50",
            "skinparam ranksep 60",
            "skinparam linetype polyline",
            "",
            "  package \"shop\" {",
            "    class Order {",
            "      -items : Product",
            "    }",
            "  }",
            "",
            "    abstract class Shape {",
            "    }",
            "",
            "' Relationships",
            "Order o-- Product",
            "@enduml",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_no_relationship_section_when_empty() {
        let text = PumlRenderer::default().render(&[Entity::new("Lonely", EntityKind::Class)], None);
        assert!(text.starts_with("@startuml\n"));
        assert!(!text.contains("' Relationships"));
        assert!(text.ends_with("    }\n@enduml"));
    }
}
