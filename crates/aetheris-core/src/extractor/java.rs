//! Java extractor using tree-sitter.

use tree_sitter::Node;

use super::error::ExtractionError;
use super::traits::LanguageExtractor;
use super::treesitter::TreeSitterBase;
use crate::classifier::{base_name, classify_field, classify_signature, simplify_type, LanguageProfile};
use crate::model::{Entity, EntityKind, Field, Method, Visibility};

/// Java extractor using tree-sitter.
pub struct JavaExtractor {
    base: TreeSitterBase,
    profile: LanguageProfile,
}

impl JavaExtractor {
    pub fn new() -> Self {
        Self::with_profile(LanguageProfile::java())
    }

    /// Create an extractor with custom classification tables.
    pub fn with_profile(profile: LanguageProfile) -> Self {
        Self {
            base: TreeSitterBase::new(tree_sitter_java::LANGUAGE.into(), "Java"),
            profile,
        }
    }

    fn declaration_kind(node_kind: &str) -> Option<EntityKind> {
        match node_kind {
            "class_declaration" | "record_declaration" => Some(EntityKind::Class),
            "interface_declaration" => Some(EntityKind::Interface),
            "enum_declaration" => Some(EntityKind::Enum),
            "annotation_type_declaration" => Some(EntityKind::Annotation),
            _ => None,
        }
    }

    fn package_name(&self, root: &Node, content: &str) -> Option<String> {
        let package = TreeSitterBase::child_of_kind(root, &["package_declaration"])?;
        let name = TreeSitterBase::child_of_kind(&package, &["scoped_identifier", "identifier"])?;
        Some(TreeSitterBase::node_text(&name, content).to_string())
    }

    fn visibility(&self, modifiers: &[String]) -> Visibility {
        Visibility::from_modifiers(modifiers, self.profile.default_visibility)
    }

    fn extract_declaration(
        &self,
        node: &Node,
        kind: EntityKind,
        content: &str,
        package: Option<&str>,
    ) -> Option<Entity> {
        let name_node = node.child_by_field_name("name")?;
        let name = TreeSitterBase::node_text(&name_node, content).to_string();
        if name.is_empty() {
            return None;
        }

        let modifiers = TreeSitterBase::modifier_keywords(node, content);
        let mut entity = Entity::new(name, kind);
        entity.visibility = self.visibility(&modifiers);
        entity.is_abstract = kind == EntityKind::Class && modifiers.iter().any(|m| m == "abstract");
        entity.namespace = package.map(String::from);

        self.extract_supertypes(node, content, &mut entity);
        if node.kind() == "record_declaration" {
            self.extract_record_components(node, content, &mut entity);
        }

        if let Some(body) = node.child_by_field_name("body") {
            self.extract_members(&body, content, &mut entity);
        }

        Some(entity)
    }

    /// `extends` / `implements` clauses.
    fn extract_supertypes(&self, node: &Node, content: &str, entity: &mut Entity) {
        if let Some(superclass) = node.child_by_field_name("superclass") {
            entity.super_type = Self::type_list(&superclass, content).into_iter().next();
        }

        if let Some(interfaces) = node.child_by_field_name("interfaces") {
            entity.interfaces.extend(Self::type_list(&interfaces, content));
        }

        // Interfaces extend other interfaces; only the first is kept as the supertype.
        if let Some(extends) = TreeSitterBase::child_of_kind(node, &["extends_interfaces"]) {
            let mut parents = Self::type_list(&extends, content).into_iter();
            entity.super_type = parents.next();
            let dropped: Vec<String> = parents.collect();
            if !dropped.is_empty() {
                tracing::debug!(entity = %entity.name, ?dropped, "ignoring additional extended interfaces");
            }
        }
    }

    /// Type names inside a `superclass`, `super_interfaces` or `extends_interfaces` clause.
    fn type_list(clause: &Node, content: &str) -> Vec<String> {
        let mut names = Vec::new();
        for child in TreeSitterBase::children(clause) {
            if !child.is_named() {
                continue;
            }
            if child.kind() == "type_list" {
                for item in TreeSitterBase::children(&child) {
                    if item.is_named() {
                        names.push(base_name(TreeSitterBase::node_text(&item, content)));
                    }
                }
            } else {
                names.push(base_name(TreeSitterBase::node_text(&child, content)));
            }
        }
        names.retain(|n| !n.is_empty());
        names
    }

    /// Record components are private fields.
    fn extract_record_components(&self, node: &Node, content: &str, entity: &mut Entity) {
        let Some(params) = node.child_by_field_name("parameters") else {
            return;
        };

        for param in TreeSitterBase::children_of_kind(&params, &["formal_parameter"]) {
            let (Some(name), Some(type_node)) = (param.child_by_field_name("name"), param.child_by_field_name("type"))
            else {
                continue;
            };
            let field_type = simplify_type(TreeSitterBase::node_text(&type_node, content), &self.profile);
            classify_field(entity, &field_type, &self.profile);
            entity.fields.push(Field::new(
                TreeSitterBase::node_text(&name, content),
                field_type.name,
                Visibility::Private,
            ));
        }
    }

    fn extract_members(&self, body: &Node, content: &str, entity: &mut Entity) {
        for child in TreeSitterBase::children(body) {
            match child.kind() {
                "enum_constant" => {
                    if let Some(name) = child.child_by_field_name("name") {
                        entity
                            .fields
                            .push(Field::constant(TreeSitterBase::node_text(&name, content)));
                    }
                }
                "enum_body_declarations" => self.extract_members(&child, content, entity),
                "field_declaration" | "constant_declaration" => self.extract_field(&child, content, entity),
                "method_declaration" => self.extract_method(&child, content, entity),
                "annotation_type_element_declaration" => self.extract_annotation_element(&child, content, entity),
                _ => {}
            }
        }
    }

    fn extract_field(&self, node: &Node, content: &str, entity: &mut Entity) {
        let Some(type_node) = node.child_by_field_name("type") else {
            return;
        };

        let modifiers = TreeSitterBase::modifier_keywords(node, content);
        let visibility = self.visibility(&modifiers);
        let is_static = modifiers.iter().any(|m| m == "static");
        let field_type = simplify_type(TreeSitterBase::node_text(&type_node, content), &self.profile);

        classify_field(entity, &field_type, &self.profile);

        for declarator in TreeSitterBase::children_of_kind(node, &["variable_declarator"]) {
            if let Some(name) = declarator.child_by_field_name("name") {
                entity.fields.push(
                    Field::new(TreeSitterBase::node_text(&name, content), field_type.name.clone(), visibility)
                        .with_static(is_static),
                );
            }
        }
    }

    fn extract_method(&self, node: &Node, content: &str, entity: &mut Entity) {
        let Some(name) = node.child_by_field_name("name") else {
            return;
        };

        let modifiers = TreeSitterBase::modifier_keywords(node, content);
        let return_type = node
            .child_by_field_name("type")
            .map(|t| simplify_type(TreeSitterBase::node_text(&t, content), &self.profile).name)
            .unwrap_or_else(|| "void".to_string());
        let parameters = self.extract_parameters(node, content);

        classify_signature(entity, &return_type, &parameters, &self.profile);

        entity.methods.push(
            Method::new(
                TreeSitterBase::node_text(&name, content),
                return_type,
                parameters,
                self.visibility(&modifiers),
            )
            .with_static(modifiers.iter().any(|m| m == "static")),
        );
    }

    /// Annotation elements (`String value() default "";`) render as methods.
    fn extract_annotation_element(&self, node: &Node, content: &str, entity: &mut Entity) {
        let (Some(name), Some(type_node)) = (node.child_by_field_name("name"), node.child_by_field_name("type")) else {
            return;
        };

        let modifiers = TreeSitterBase::modifier_keywords(node, content);
        let return_type = simplify_type(TreeSitterBase::node_text(&type_node, content), &self.profile).name;
        classify_signature(entity, &return_type, &[], &self.profile);

        entity.methods.push(Method::new(
            TreeSitterBase::node_text(&name, content),
            return_type,
            Vec::new(),
            self.visibility(&modifiers),
        ));
    }

    /// Parameter types only; names are not modeled.
    fn extract_parameters(&self, node: &Node, content: &str) -> Vec<String> {
        let Some(params) = node.child_by_field_name("parameters") else {
            return Vec::new();
        };

        let mut types = Vec::new();
        for child in TreeSitterBase::children(&params) {
            let type_node = match child.kind() {
                "formal_parameter" => child.child_by_field_name("type"),
                // `String... names` has no `type` field.
                "spread_parameter" => TreeSitterBase::children(&child)
                    .into_iter()
                    .find(|c| c.is_named() && c.kind() != "modifiers" && c.kind() != "variable_declarator"),
                _ => continue,
            };

            let type_name = type_node
                .map(|t| simplify_type(TreeSitterBase::node_text(&t, content), &self.profile).name)
                .unwrap_or_else(|| "Object".to_string());
            types.push(type_name);
        }

        types
    }

    fn process_node(&self, node: Node, content: &str, package: Option<&str>, entities: &mut Vec<Entity>) {
        if let Some(kind) = Self::declaration_kind(node.kind()) {
            if let Some(entity) = self.extract_declaration(&node, kind, content, package) {
                tracing::trace!(entity = %entity.name, kind = %entity.kind, "extracted declaration");
                entities.push(entity);
            }
        }

        // Nested and local declarations become entities of their own.
        for child in TreeSitterBase::children(&node) {
            self.process_node(child, content, package, entities);
        }
    }
}

impl Default for JavaExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageExtractor for JavaExtractor {
    fn extract(&self, unit: &str, content: &str) -> Result<Vec<Entity>, ExtractionError> {
        let _span = tracing::debug_span!("extract", language = "Java", unit).entered();

        let tree = self.base.parse_tree(unit, content)?;
        let root = tree.root_node();
        let package = self.package_name(&root, content);

        let mut entities = Vec::new();
        self.process_node(root, content, package.as_deref(), &mut entities);

        tracing::debug!(count = entities.len(), "extracted entities");
        Ok(entities)
    }

    fn language_name(&self) -> &'static str {
        "Java"
    }

    fn supported_extensions(&self) -> &[&'static str] {
        &["java"]
    }
}
