//! AML (Aetheris Modeling Language) renderer.
//!
//! A brace-based notation: one `namespace` block per package, entity blocks
//! inside, and a trailing relationship section. There is no layout step.

use super::relations::{collect_lines, Notation, Relation};
use super::{group_by_namespace, Renderer};
use crate::model::{Entity, Field, Method, RelationKind, Visibility};

const INDENT: &str = "    ";

/// AML arrow syntax. Edges always read from the authoring entity.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmlNotation;

impl Notation for AmlNotation {
    fn line(&self, relation: &Relation<'_>) -> String {
        let Relation { kind, source, target } = *relation;
        match kind {
            RelationKind::Inheritance => format!("{source} --|> {target}"),
            RelationKind::Realization => format!("{source} ..|> {target}"),
            RelationKind::Association => format!("{source} -> {target} [type: association]"),
            RelationKind::Aggregation => format!("{source} o-- {target} [type: aggregation]"),
            RelationKind::Composition => format!("{source} *-- {target} [type: composition]"),
            RelationKind::Dependency => format!("{source} ..> {target} [type: dependency]"),
        }
    }
}

/// Renders entities as AML.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmlRenderer;

impl AmlRenderer {
    pub fn new() -> Self {
        Self
    }

    fn write_entity(&self, entity: &Entity, indent: &str, lines: &mut Vec<String>) {
        let modifier = if entity.renders_abstract() { "abstract " } else { "" };
        lines.push(format!("{indent}{modifier}{} {} {{", entity.kind, entity.name));

        let member_indent = format!("{indent}{INDENT}");
        for field in &entity.fields {
            lines.push(format!("{member_indent}{}", field_line(field)));
        }
        for method in &entity.methods {
            lines.push(format!("{member_indent}{}", method_line(method)));
        }

        lines.push(format!("{indent}}}"));
    }
}

impl Renderer for AmlRenderer {
    /// AML has no title line; `title` is ignored.
    fn render(&self, entities: &[Entity], _title: Option<&str>) -> String {
        let mut lines = Vec::new();
        let groups = group_by_namespace(entities);

        for (namespace, members) in &groups.namespaced {
            lines.push(format!("namespace {namespace} {{"));
            for entity in members {
                self.write_entity(entity, INDENT, &mut lines);
            }
            lines.push("}".to_string());
            lines.push(String::new());
        }

        for entity in &groups.ungrouped {
            self.write_entity(entity, "", &mut lines);
            lines.push(String::new());
        }

        lines.push("// Relationships".to_string());
        lines.extend(collect_lines(entities, &AmlNotation));
        lines.join("\n")
    }
}

/// Members without a visibility render as public, except enum constants.
fn visibility_suffix(visibility: Option<Visibility>) -> String {
    format!(" [{}]", visibility.unwrap_or_default().symbol())
}

fn static_suffix(is_static: bool) -> &'static str {
    if is_static {
        " static"
    } else {
        ""
    }
}

fn field_line(field: &Field) -> String {
    if field.type_name.is_empty() && field.visibility.is_none() {
        return field.name.clone();
    }
    format!(
        "{}: {}{}{}",
        field.name,
        field.type_name,
        visibility_suffix(field.visibility),
        static_suffix(field.is_static)
    )
}

fn method_line(method: &Method) -> String {
    format!(
        "{}({}): {}{}{}",
        method.name,
        method.parameters.join(", "),
        method.return_type,
        visibility_suffix(method.visibility),
        static_suffix(method.is_static)
    )
}
