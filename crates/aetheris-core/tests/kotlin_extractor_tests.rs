use aetheris_core::{Entity, EntityKind, ExtractionError, KotlinExtractor, LanguageExtractor, Visibility};

fn extract(source: &str) -> Vec<Entity> {
    KotlinExtractor::new().parse(source).unwrap()
}

fn find<'a>(entities: &'a [Entity], name: &str) -> &'a Entity {
    entities
        .iter()
        .find(|e| e.name == name)
        .unwrap_or_else(|| panic!("entity {name} not extracted"))
}

const FLEET: &str = r#"
package com.fleet

abstract class SpaceVehicle(val name: String)

interface CombatTarget {
    fun takeDamage(amount: Int)
}

class Starship(
    val captain: Captain?,
    private val drones: List<RepairDrone>,
    count: Int
) : SpaceVehicle("Enterprise"), CombatTarget {
    var core: WarpCore? = null

    fun engage(target: CombatTarget): Boolean {
        return true
    }

    override fun takeDamage(amount: Int) {
    }

    companion object {
        fun create(): Starship = Starship(null, emptyList(), 0)
    }
}

enum class Alert {
    GREEN, YELLOW, RED
}

object Registry {
    private val ships: MutableList<Starship> = mutableListOf()
}
"#;

#[test]
fn test_declarations_in_document_order() {
    let entities = extract(FLEET);
    let names: Vec<&str> = entities.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["SpaceVehicle", "CombatTarget", "Starship", "Alert", "Registry"]);
    assert!(entities.iter().all(|e| e.namespace.as_deref() == Some("com.fleet")));
}

#[test]
fn test_kinds() {
    let entities = extract(FLEET);
    assert_eq!(find(&entities, "SpaceVehicle").kind, EntityKind::Class);
    assert!(find(&entities, "SpaceVehicle").is_abstract);
    assert_eq!(find(&entities, "CombatTarget").kind, EntityKind::Interface);
    assert_eq!(find(&entities, "Alert").kind, EntityKind::Enum);
    assert_eq!(find(&entities, "Registry").kind, EntityKind::Object);
}

#[test]
fn test_constructor_call_marks_superclass() {
    let entities = extract(FLEET);
    let ship = find(&entities, "Starship");
    assert_eq!(ship.super_type.as_deref(), Some("SpaceVehicle"));
    assert_eq!(ship.interfaces, vec!["CombatTarget".to_string()]);
}

#[test]
fn test_primary_constructor_properties() {
    let entities = extract(FLEET);
    let ship = find(&entities, "Starship");

    let fields: Vec<(&str, &str)> = ship
        .fields
        .iter()
        .map(|f| (f.name.as_str(), f.type_name.as_str()))
        .collect();
    assert_eq!(
        fields,
        vec![("captain", "Captain"), ("drones", "RepairDrone"), ("core", "WarpCore")]
    );
    assert_eq!(ship.fields[0].visibility, Some(Visibility::Public));
    assert_eq!(ship.fields[1].visibility, Some(Visibility::Private));

    assert_eq!(ship.associations, vec!["Captain".to_string(), "WarpCore".to_string()]);
    assert_eq!(ship.aggregations, vec!["RepairDrone".to_string()]);
}

#[test]
fn test_functions() {
    let entities = extract(FLEET);
    let ship = find(&entities, "Starship");

    let methods: Vec<(&str, &str, bool)> = ship
        .methods
        .iter()
        .map(|m| (m.name.as_str(), m.return_type.as_str(), m.is_static))
        .collect();
    assert_eq!(
        methods,
        vec![
            ("engage", "Boolean", false),
            ("takeDamage", "Unit", false),
            ("create", "Starship", true),
        ]
    );
    assert_eq!(ship.methods[0].parameters, vec!["CombatTarget".to_string()]);
    assert_eq!(ship.methods[1].parameters, vec!["Int".to_string()]);

    // `create` returns the owner itself and `Int` is a value type.
    assert_eq!(ship.dependencies, vec!["CombatTarget".to_string()]);
}

#[test]
fn test_interface_function_without_body() {
    let entities = extract(FLEET);
    let target = find(&entities, "CombatTarget");
    assert_eq!(target.methods.len(), 1);
    assert_eq!(target.methods[0].return_type, "Unit");
    assert!(target.dependencies.is_empty());
}

#[test]
fn test_enum_entries() {
    let entities = extract(FLEET);
    let alert = find(&entities, "Alert");
    let names: Vec<&str> = alert.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["GREEN", "YELLOW", "RED"]);
    assert!(alert.fields.iter().all(|f| f.visibility.is_none()));
}

#[test]
fn test_object_members() {
    let entities = extract(FLEET);
    let registry = find(&entities, "Registry");
    assert_eq!(registry.fields.len(), 1);
    assert_eq!(registry.fields[0].type_name, "Starship");
    assert_eq!(registry.fields[0].visibility, Some(Visibility::Private));
    assert_eq!(registry.aggregations, vec!["Starship".to_string()]);
}

#[test]
fn test_data_class_without_body() {
    let entities = extract("data class Point(val x: Double, val y: Double, val label: Label?)");
    let point = &entities[0];
    assert_eq!(point.kind, EntityKind::Class);
    assert_eq!(point.namespace, None);
    assert_eq!(point.fields.len(), 3);
    assert_eq!(point.associations, vec!["Label".to_string()]);
    assert!(point.methods.is_empty());
}

#[test]
fn test_plain_supertype_is_an_interface() {
    let entities = extract(
        r#"
class Cache : Store, Closeable {
}
"#,
    );
    let cache = &entities[0];
    assert_eq!(cache.super_type, None);
    assert_eq!(cache.interfaces, vec!["Store".to_string(), "Closeable".to_string()]);
}

#[test]
fn test_delegated_interface_keeps_type_name() {
    let entities = extract(
        "class Dog(private val r: Runner) : Animal<Int>(1), Runner by r, Comparable<Dog>",
    );
    let dog = &entities[0];
    assert_eq!(dog.super_type.as_deref(), Some("Animal"));
    assert_eq!(dog.interfaces, vec!["Runner".to_string(), "Comparable".to_string()]);
}

#[test]
fn test_single_line_bodies() {
    let entities = extract("class A { fun f(): Int = 1 }");
    assert_eq!(entities[0].methods.len(), 1);
    assert_eq!(entities[0].methods[0].name, "f");
    assert_eq!(entities[0].methods[0].return_type, "Int");

    let entities = extract("object Registry { fun f(o: Order) {} }");
    assert_eq!(entities[0].kind, EntityKind::Object);
    assert_eq!(entities[0].dependencies, vec!["Order".to_string()]);

    let entities = extract("class Impl : Runner { override fun run() {} }");
    assert_eq!(entities[0].interfaces, vec!["Runner".to_string()]);
    assert_eq!(entities[0].methods[0].return_type, "Unit");
}

#[test]
fn test_single_line_enum_with_members() {
    let entities = extract(r#"enum class Color(val rgb: Int) { RED(1), GREEN(2); fun hex(): String = "" }"#);
    let color = &entities[0];
    assert_eq!(color.kind, EntityKind::Enum);
    let names: Vec<&str> = color.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["rgb", "RED", "GREEN"]);
    assert_eq!(color.methods.len(), 1);
    assert_eq!(color.methods[0].name, "hex");
    assert_eq!(color.methods[0].return_type, "String");
}

#[test]
fn test_internal_maps_to_package_visibility() {
    let entities = extract("internal class Hidden");
    assert_eq!(entities[0].visibility, Visibility::Package);

    let entities = extract("class Shown");
    assert_eq!(entities[0].visibility, Visibility::Public);
}

#[test]
fn test_untyped_property_uses_inferred_placeholder() {
    let entities = extract(
        r#"
class Settings {
    val retries = 3
}
"#,
    );
    let settings = &entities[0];
    assert_eq!(settings.fields[0].name, "retries");
    assert_eq!(settings.fields[0].type_name, "Any");
    assert!(settings.associations.is_empty());
}

#[test]
fn test_syntax_error_names_the_unit() {
    let err = KotlinExtractor::new()
        .extract("Broken.kt", "class Broken( {")
        .unwrap_err();
    assert!(matches!(err, ExtractionError::Syntax { .. }));
    assert_eq!(err.unit(), Some("Broken.kt"));
    assert_eq!(err.language(), "Kotlin");
}

#[test]
fn test_extensions() {
    let extractor = KotlinExtractor::new();
    assert_eq!(extractor.language_name(), "Kotlin");
    assert!(extractor.can_parse("kt"));
    assert!(extractor.can_parse("kts"));
    assert!(!extractor.can_parse("java"));
}
