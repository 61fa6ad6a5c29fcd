//! Kotlin extractor using tree-sitter.
//!
//! The grammar carries no semantic type information, so a supertype is
//! treated as the superclass only when it is written as a constructor call
//! (`: Base()`); every other delegation specifier is an implemented
//! interface. This misclassifies, for example, a class extending a parent
//! through a secondary constructor.

use tree_sitter::Node;

use super::error::ExtractionError;
use super::traits::LanguageExtractor;
use super::treesitter::TreeSitterBase;
use crate::classifier::{base_name, classify_field, classify_signature, simplify_type, LanguageProfile};
use crate::config::{KOTLIN_DEFAULT_RETURN_TYPE, KOTLIN_INFERRED_TYPE};
use crate::model::{Entity, EntityKind, Field, Method, Visibility};

const NAME_KINDS: &[&str] = &["identifier", "simple_identifier", "type_identifier"];

const TYPE_KINDS: &[&str] = &[
    "type",
    "user_type",
    "nullable_type",
    "non_nullable_type",
    "not_nullable_type",
    "definitely_non_nullable_type",
    "function_type",
    "parenthesized_type",
    "type_reference",
];

/// Wrapper nodes whose children are the actual members.
const MEMBER_WRAPPERS: &[&str] = &[
    "class_member_declarations",
    "class_member_declaration",
    "enum_entries",
    "declaration",
];

/// Kotlin extractor using tree-sitter.
pub struct KotlinExtractor {
    base: TreeSitterBase,
    profile: LanguageProfile,
}

impl KotlinExtractor {
    pub fn new() -> Self {
        Self::with_profile(LanguageProfile::kotlin())
    }

    /// Create an extractor with custom classification tables.
    pub fn with_profile(profile: LanguageProfile) -> Self {
        Self {
            base: TreeSitterBase::new(tree_sitter_kotlin_ng::LANGUAGE.into(), "Kotlin"),
            profile,
        }
    }

    fn package_name(&self, root: &Node, content: &str) -> Option<String> {
        let header = TreeSitterBase::child_of_kind(root, &["package_header"])?;
        let name = TreeSitterBase::child_of_kind(&header, &["qualified_identifier", "identifier"])?;
        Some(TreeSitterBase::node_text(&name, content).trim().to_string())
    }

    fn visibility(&self, modifiers: &[String]) -> Visibility {
        Visibility::from_modifiers(modifiers, self.profile.default_visibility)
    }

    fn name_of(node: &Node, content: &str) -> Option<String> {
        node.child_by_field_name("name")
            .or_else(|| TreeSitterBase::child_of_kind(node, NAME_KINDS))
            .map(|n| TreeSitterBase::node_text(&n, content).to_string())
            .filter(|n| !n.is_empty())
    }

    /// Source text of the declared type, if the node has one.
    fn declared_type<'a>(node: &Node, content: &'a str) -> Option<&'a str> {
        TreeSitterBase::child_of_kind(node, TYPE_KINDS).map(|t| TreeSitterBase::node_text(&t, content))
    }

    fn declaration_kind(node: &Node, modifiers: &[String]) -> Option<EntityKind> {
        match node.kind() {
            "object_declaration" => Some(EntityKind::Object),
            "interface_declaration" => Some(EntityKind::Interface),
            "class_declaration" => {
                let kind = if TreeSitterBase::has_child_kind(node, "interface") {
                    EntityKind::Interface
                } else if modifiers.iter().any(|m| m == "enum") {
                    EntityKind::Enum
                } else if modifiers.iter().any(|m| m == "annotation") {
                    EntityKind::Annotation
                } else {
                    EntityKind::Class
                };
                Some(kind)
            }
            _ => None,
        }
    }

    fn extract_declaration(&self, node: &Node, content: &str, package: Option<&str>) -> Option<Entity> {
        let modifiers = TreeSitterBase::modifier_keywords(node, content);
        let kind = Self::declaration_kind(node, &modifiers)?;
        let name = Self::name_of(node, content)?;

        let mut entity = Entity::new(name, kind);
        entity.visibility = self.visibility(&modifiers);
        entity.is_abstract = kind == EntityKind::Class && modifiers.iter().any(|m| m == "abstract");
        entity.namespace = package.map(String::from);

        self.extract_delegation(node, content, &mut entity);
        self.extract_primary_constructor(node, content, &mut entity);

        if let Some(body) = TreeSitterBase::child_of_kind(node, &["class_body", "enum_class_body"]) {
            self.extract_members(&body, content, &mut entity, false);
        }

        Some(entity)
    }

    /// Supertypes after the colon.
    fn extract_delegation(&self, node: &Node, content: &str, entity: &mut Entity) {
        let mut specifiers = TreeSitterBase::children_of_kind(node, &["delegation_specifier"]);
        for wrapper in TreeSitterBase::children_of_kind(node, &["delegation_specifiers"]) {
            specifiers.extend(TreeSitterBase::children_of_kind(&wrapper, &["delegation_specifier"]));
        }

        for spec in specifiers {
            let invocation = TreeSitterBase::child_of_kind(&spec, &["constructor_invocation"]);
            // `Runner by r` names the type before `by`.
            let delegation = TreeSitterBase::child_of_kind(&spec, &["explicit_delegation"]);
            let holder = invocation.or(delegation).unwrap_or(spec);
            let type_text = Self::declared_type(&holder, content)
                .or_else(|| Self::declared_type(&spec, content))
                .unwrap_or_else(|| TreeSitterBase::node_text(&spec, content));
            let parent = base_name(type_text);
            if parent.is_empty() {
                continue;
            }

            if invocation.is_some() && entity.super_type.is_none() {
                entity.super_type = Some(parent);
            } else {
                entity.interfaces.push(parent);
            }
        }
    }

    /// `val` / `var` primary-constructor parameters are properties.
    fn extract_primary_constructor(&self, node: &Node, content: &str, entity: &mut Entity) {
        let parameters = TreeSitterBase::child_of_kind(node, &["primary_constructor"])
            .and_then(|ctor| TreeSitterBase::child_of_kind(&ctor, &["class_parameters"]))
            .or_else(|| TreeSitterBase::child_of_kind(node, &["class_parameters"]));
        let Some(parameters) = parameters else {
            return;
        };

        for param in TreeSitterBase::children_of_kind(&parameters, &["class_parameter"]) {
            let is_property = TreeSitterBase::has_child_kind(&param, "val")
                || TreeSitterBase::has_child_kind(&param, "var")
                || TreeSitterBase::child_of_kind(&param, &["binding_pattern_kind"]).is_some();
            if !is_property {
                continue;
            }
            let Some(name) = Self::name_of(&param, content) else {
                continue;
            };

            let modifiers = TreeSitterBase::modifier_keywords(&param, content);
            self.add_property(entity, name, Self::declared_type(&param, content), &modifiers, false);
        }
    }

    fn extract_members(&self, body: &Node, content: &str, entity: &mut Entity, is_static: bool) {
        for child in TreeSitterBase::children(body) {
            match child.kind() {
                kind if MEMBER_WRAPPERS.contains(&kind) => {
                    self.extract_members(&child, content, entity, is_static)
                }
                "enum_entry" => {
                    if let Some(name) = Self::name_of(&child, content) {
                        entity.fields.push(Field::constant(name));
                    }
                }
                "property_declaration" => self.extract_property(&child, content, entity, is_static),
                "function_declaration" => self.extract_function(&child, content, entity, is_static),
                // Companion members are the Kotlin counterpart of statics.
                "companion_object" => {
                    if let Some(body) = TreeSitterBase::child_of_kind(&child, &["class_body"]) {
                        self.extract_members(&body, content, entity, true);
                    }
                }
                _ => {}
            }
        }
    }

    fn extract_property(&self, node: &Node, content: &str, entity: &mut Entity, is_static: bool) {
        let Some(variable) = TreeSitterBase::child_of_kind(node, &["variable_declaration"]) else {
            return;
        };
        let Some(name) = Self::name_of(&variable, content) else {
            return;
        };

        let modifiers = TreeSitterBase::modifier_keywords(node, content);
        self.add_property(entity, name, Self::declared_type(&variable, content), &modifiers, is_static);
    }

    fn add_property(
        &self,
        entity: &mut Entity,
        name: String,
        type_text: Option<&str>,
        modifiers: &[String],
        is_static: bool,
    ) {
        let field_type = simplify_type(type_text.unwrap_or(KOTLIN_INFERRED_TYPE), &self.profile);
        classify_field(entity, &field_type, &self.profile);

        entity
            .fields
            .push(Field::new(name, field_type.name, self.visibility(modifiers)).with_static(is_static));
    }

    fn extract_function(&self, node: &Node, content: &str, entity: &mut Entity, is_static: bool) {
        let Some(name) = Self::name_of(node, content) else {
            return;
        };

        let children = TreeSitterBase::children(node);
        let params_index = children.iter().position(|c| c.kind() == "function_value_parameters");

        let parameters = params_index
            .map(|i| self.extract_parameters(&children[i], content))
            .unwrap_or_default();

        // The return type follows the parameter list; a type before it is a receiver.
        let return_type = params_index
            .and_then(|i| children[i + 1..].iter().find(|c| TYPE_KINDS.contains(&c.kind())))
            .map(|t| simplify_type(TreeSitterBase::node_text(t, content), &self.profile).name)
            .unwrap_or_else(|| KOTLIN_DEFAULT_RETURN_TYPE.to_string());

        classify_signature(entity, &return_type, &parameters, &self.profile);

        let modifiers = TreeSitterBase::modifier_keywords(node, content);
        entity.methods.push(
            Method::new(name, return_type, parameters, self.visibility(&modifiers)).with_static(is_static),
        );
    }

    fn extract_parameters(&self, params: &Node, content: &str) -> Vec<String> {
        let mut types = Vec::new();
        for child in TreeSitterBase::children(params) {
            let parameter = if child.kind() == "parameter" {
                Some(child)
            } else {
                TreeSitterBase::child_of_kind(&child, &["parameter"])
            };
            let Some(parameter) = parameter else {
                continue;
            };

            let type_text = Self::declared_type(&parameter, content).unwrap_or(KOTLIN_INFERRED_TYPE);
            types.push(simplify_type(type_text, &self.profile).name);
        }
        types
    }

    fn process_node(&self, node: Node, content: &str, package: Option<&str>, entities: &mut Vec<Entity>) {
        if matches!(node.kind(), "class_declaration" | "object_declaration" | "interface_declaration") {
            if let Some(entity) = self.extract_declaration(&node, content, package) {
                tracing::trace!(entity = %entity.name, kind = %entity.kind, "extracted declaration");
                entities.push(entity);
            }
        }

        for child in TreeSitterBase::children(&node) {
            self.process_node(child, content, package, entities);
        }
    }
}

impl Default for KotlinExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageExtractor for KotlinExtractor {
    fn extract(&self, unit: &str, content: &str) -> Result<Vec<Entity>, ExtractionError> {
        let _span = tracing::debug_span!("extract", language = "Kotlin", unit).entered();

        let tree = self.base.parse_tree(unit, content)?;
        let root = tree.root_node();
        let package = self.package_name(&root, content);

        let mut entities = Vec::new();
        self.process_node(root, content, package.as_deref(), &mut entities);

        tracing::debug!(count = entities.len(), "extracted entities");
        Ok(entities)
    }

    fn language_name(&self) -> &'static str {
        "Kotlin"
    }

    fn supported_extensions(&self) -> &[&'static str] {
        &["kt", "kts"]
    }
}
