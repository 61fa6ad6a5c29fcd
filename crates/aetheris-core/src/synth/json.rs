//! JSON export of the entity list.

use super::Renderer;
use crate::model::Entity;

/// Pretty-printed array of entities in their natural order.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, entities: &[Entity], _title: Option<&str>) -> String {
        match serde_json::to_string_pretty(entities) {
            Ok(json) => json,
            Err(e) => {
                // Plain structs with string keys always serialize.
                tracing::error!(error = %e, "failed to serialize entities");
                "[]".to_string()
            }
        }
    }
}
