//! Default values for Aetheris configuration.
//!
//! All hardcoded tables are centralized here and passed into the classifier
//! and layout code as data.

// ============================================================================
// Output Defaults
// ============================================================================

/// Default output format name.
pub const DEFAULT_FORMAT: &str = "puml";

/// Default output file name, without extension, when none is given on the command line.
pub const DEFAULT_OUTPUT_STEM: &str = "diagram";

// ============================================================================
// Layout Defaults
// ============================================================================

/// Base horizontal separation between nodes.
pub const DEFAULT_NODE_SEPARATION: u32 = 50;

/// Base separation between ranks.
pub const DEFAULT_RANK_SEPARATION: u32 = 60;

/// Diagrams with more entities than this get extra spacing.
pub const DEFAULT_LARGE_DIAGRAM_THRESHOLD: usize = 15;

/// Node separation added to large diagrams.
pub const DEFAULT_LARGE_NODE_SEPARATION_BONUS: u32 = 30;

/// Rank separation added to large diagrams.
pub const DEFAULT_LARGE_RANK_SEPARATION_BONUS: u32 = 40;

/// Package count at which the diagram flips to left-to-right.
pub const DEFAULT_PACKAGE_ORIENTATION_THRESHOLD: usize = 4;

/// Entities-per-package density above which the diagram flips to left-to-right.
pub const DEFAULT_DENSITY_ORIENTATION_THRESHOLD: f64 = 5.0;

// ============================================================================
// Java Defaults
// ============================================================================

/// Java types that never produce a relationship.
pub const JAVA_PRIMITIVES: &[&str] = &[
    "int", "long", "short", "byte", "float", "double", "boolean", "char",
    "String", "Object", "Integer", "Long", "Boolean", "Double", "Float",
];

/// Java single-element container types.
pub const JAVA_CONTAINERS: &[&str] = &[
    "List", "Set", "Collection", "Map", "ArrayList", "HashSet", "HashMap", "LinkedList",
];

/// Java map-like containers (element is the value type).
pub const JAVA_MAP_CONTAINERS: &[&str] = &["Map", "HashMap"];

/// Java "no value" return types.
pub const JAVA_UNIT_TYPES: &[&str] = &["void"];

// ============================================================================
// Kotlin Defaults
// ============================================================================

/// Kotlin types that never produce a relationship.
pub const KOTLIN_PRIMITIVES: &[&str] = &[
    "Int", "Long", "Short", "Byte", "Float", "Double", "Boolean", "Char", "String", "Any", "Unit",
];

/// Kotlin single-element container types.
pub const KOTLIN_CONTAINERS: &[&str] = &[
    "List", "Set", "Map", "Collection", "ArrayList", "HashSet",
    "MutableList", "MutableSet", "MutableMap", "Array",
];

/// Kotlin map-like containers (element is the value type).
pub const KOTLIN_MAP_CONTAINERS: &[&str] = &["Map", "MutableMap"];

/// Kotlin "no value" return types.
pub const KOTLIN_UNIT_TYPES: &[&str] = &["Unit"];

/// Kotlin return type when a function declares none.
pub const KOTLIN_DEFAULT_RETURN_TYPE: &str = "Unit";

/// Kotlin property or parameter type when none is declared.
pub const KOTLIN_INFERRED_TYPE: &str = "Any";

// ============================================================================
// Serve Defaults
// ============================================================================

/// Port for the layout persistence service.
pub const DEFAULT_SERVE_PORT: u16 = 8000;

/// Model JSON file served at `/api/model`.
pub const DEFAULT_MODEL_PATH: &str = "model.json";

/// Layout JSON file read and written at `/api/layout`.
pub const DEFAULT_LAYOUT_PATH: &str = "layout.json";

/// Origins allowed to call the service (the visualizer dev server).
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &["http://localhost:5173"];

// ============================================================================
// Config File Locations
// ============================================================================

/// Project-local config file name.
pub const PROJECT_CONFIG_FILE: &str = "aetheris.toml";

/// Directory under the user config dir.
pub const USER_CONFIG_DIR: &str = "aetheris";

/// File name inside the user config directory.
pub const USER_CONFIG_FILE: &str = "config.toml";
