use aetheris_core::synth::Direction;
use aetheris_core::{
    plan_layout, DiagramSynthesizer, Entity, EntityKind, JavaExtractor, KotlinExtractor, LanguageExtractor,
    LayoutConfig, OutputFormat,
};

/// Lines following the relationship marker, up to the end of the document.
fn relationship_lines<'a>(text: &'a str, marker: &str) -> Vec<&'a str> {
    text.lines()
        .skip_while(|line| *line != marker)
        .skip(1)
        .filter(|line| *line != "@enduml")
        .collect()
}

fn puml_relationships(text: &str) -> Vec<&str> {
    relationship_lines(text, "' Relationships")
}

fn aml_relationships(text: &str) -> Vec<&str> {
    relationship_lines(text, "// Relationships")
}

fn dog() -> Entity {
    Entity::new("Dog", EntityKind::Class)
        .extending("Animal")
        .implementing("Runnable")
}

fn spread(count: usize, namespaces: usize) -> Vec<Entity> {
    (0..count)
        .map(|i| Entity::new(format!("C{i:02}"), EntityKind::Class).in_namespace(format!("pkg{}", i % namespaces)))
        .collect()
}

#[test]
fn test_container_field_renders_single_aggregation() {
    let entities = JavaExtractor::new()
        .parse(
            r#"
class Order {
    private java.util.List<Product> items;
    public void add(Product product) {}
}
"#,
        )
        .unwrap();
    let synth = DiagramSynthesizer::new();

    let puml = synth.render(&entities, OutputFormat::Puml, None);
    assert_eq!(puml_relationships(&puml), vec!["Order o-- Product"]);

    let aml = synth.render(&entities, OutputFormat::Aml, None);
    assert_eq!(aml_relationships(&aml), vec!["Order o-- Product [type: aggregation]"]);
}

#[test]
fn test_inheritance_and_realization_lines() {
    let entities = vec![dog()];
    let synth = DiagramSynthesizer::new();

    let puml = synth.render(&entities, OutputFormat::Puml, None);
    assert_eq!(puml_relationships(&puml), vec!["Animal <|-- Dog", "Runnable <|.. Dog"]);

    let aml = synth.render(&entities, OutputFormat::Aml, None);
    assert_eq!(aml_relationships(&aml), vec!["Dog --|> Animal", "Dog ..|> Runnable"]);
}

#[test]
fn test_enum_renders_constants_only() {
    let entities = JavaExtractor::new()
        .parse("public enum Color { RED, GREEN, BLUE }")
        .unwrap();

    let puml = DiagramSynthesizer::new().render(&entities, OutputFormat::Puml, None);
    assert!(puml.contains("    enum Color {\n      RED\n      GREEN\n      BLUE\n    }"));
    assert!(!puml.contains("' Relationships"));

    let aml = DiagramSynthesizer::new().render(&entities, OutputFormat::Aml, None);
    assert!(aml.contains("enum Color {\n    RED\n    GREEN\n    BLUE\n}"));
}

#[test]
fn test_many_namespaces_flow_left_to_right() {
    let entities = spread(20, 5);
    let plan = plan_layout(&entities, &LayoutConfig::default());
    assert_eq!(plan.direction, Direction::LeftToRight);

    let puml = DiagramSynthesizer::new().render(&entities, OutputFormat::Puml, None);
    assert!(puml.contains("left to right direction"));
}

#[test]
fn test_large_diagram_gets_extra_spacing() {
    let entities = spread(20, 2);
    let puml = DiagramSynthesizer::new().render(&entities, OutputFormat::Puml, None);
    assert!(puml.contains("skinparam nodesep 80"));
    assert!(puml.contains("skinparam ranksep 100"));
}

#[test]
fn test_small_diagram_flows_top_to_bottom() {
    let entities = spread(6, 2);
    let puml = DiagramSynthesizer::new().render(&entities, OutputFormat::Puml, Some("shop"));
    assert!(puml.starts_with("@startuml shop\n"));
    assert!(puml.contains("top to bottom direction"));
    assert!(puml.contains("skinparam nodesep 50"));
    assert!(puml.contains("skinparam ranksep 60"));
}

#[test]
fn test_custom_layout_thresholds() {
    let layout = LayoutConfig {
        package_orientation_threshold: 10,
        density_orientation_threshold: 50.0,
        ..LayoutConfig::default()
    };
    let entities = spread(20, 5);

    let puml = DiagramSynthesizer::with_layout(layout).render(&entities, OutputFormat::Puml, None);
    assert!(puml.contains("top to bottom direction"));
}

#[test]
fn test_namespace_blocks_are_sorted() {
    let entities = vec![
        Entity::new("Zed", EntityKind::Class).in_namespace("b"),
        Entity::new("Loose", EntityKind::Class),
        Entity::new("Amy", EntityKind::Class).in_namespace("a"),
    ];

    let puml = DiagramSynthesizer::new().render(&entities, OutputFormat::Puml, None);
    let a = puml.find("package \"a\"").unwrap();
    let b = puml.find("package \"b\"").unwrap();
    let loose = puml.find("class Loose").unwrap();
    assert!(a < b && b < loose);

    let aml = DiagramSynthesizer::new().render(&entities, OutputFormat::Aml, None);
    assert!(aml.find("namespace a {").unwrap() < aml.find("namespace b {").unwrap());
}

#[test]
fn test_mixed_language_model() {
    let mut entities = JavaExtractor::new()
        .parse(
            r#"
package com.fleet.legacy;

public class Hangar {
    private java.util.List<Starship> ships;
}
"#,
        )
        .unwrap();
    entities.extend(
        KotlinExtractor::new()
            .parse(
                r#"
package com.fleet

class Starship(val hangar: Hangar)
"#,
            )
            .unwrap(),
    );

    let puml = DiagramSynthesizer::new().render(&entities, OutputFormat::Puml, None);
    assert!(puml.contains("package \"com.fleet\" {"));
    assert!(puml.contains("package \"com.fleet.legacy\" {"));
    assert_eq!(puml_relationships(&puml), vec!["Hangar o-- Starship", "Starship --> Hangar"]);
}

#[test]
fn test_rendering_is_deterministic() {
    let entities = vec![
        dog(),
        Entity::new("Cat", EntityKind::Class).extending("Animal"),
        Entity::new("Animal", EntityKind::Class).in_namespace("zoo"),
    ];
    let synth = DiagramSynthesizer::new();

    for format in OutputFormat::ALL {
        assert_eq!(
            synth.render(&entities, format, Some("zoo")),
            synth.render(&entities, format, Some("zoo"))
        );
    }
}

#[test]
fn test_json_export_parses_back() {
    let entities = vec![dog()];
    let json = DiagramSynthesizer::new().render(&entities, OutputFormat::Json, None);

    let parsed: Vec<Entity> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, entities);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["extends"], "Animal");
    assert_eq!(value[0]["implements"][0], "Runnable");
    assert_eq!(value[0]["type"], "class");
}
