//! Type-text simplification.
//!
//! Works on the source text of a type node so the same rules apply to every
//! grammar. Qualified names reduce to their last segment and single-element
//! containers collapse to their element type.

use super::profile::LanguageProfile;

/// A simplified type reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// Simplified type name as recorded on fields, returns and parameters.
    pub name: String,
    /// Whether the declared type was a container with a type argument.
    pub is_container: bool,
}

impl TypeRef {
    fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_container: false,
        }
    }
}

/// Simplify the source text of a type.
///
/// ```ignore
/// simplify_type("java.util.List<com.shop.Product>", &java).name == "Product"
/// simplify_type("Map<String, Order>", &java).name == "Order"
/// simplify_type("Captain?", &kotlin).name == "Captain"
/// ```
pub fn simplify_type(raw: &str, profile: &LanguageProfile) -> TypeRef {
    let cleaned = clean(raw);

    // Function and parenthesized types are kept verbatim.
    if cleaned.starts_with('(') || cleaned.contains("->") {
        return TypeRef::plain(cleaned);
    }

    let Some((base, arguments)) = split_generic(cleaned) else {
        return TypeRef::plain(simple_name(cleaned));
    };

    let base = simple_name(base);
    let arguments: Vec<TypeRef> = arguments
        .into_iter()
        .filter_map(strip_variance)
        .map(|arg| simplify_type(arg, profile))
        .collect();

    if arguments.is_empty() {
        return TypeRef::plain(base);
    }

    if profile.is_container(&base) {
        let element = if profile.is_map_container(&base) {
            arguments.last()
        } else {
            arguments.first()
        };
        if let Some(element) = element {
            return TypeRef {
                name: element.name.clone(),
                is_container: true,
            };
        }
    }

    let rendered: Vec<&str> = arguments.iter().map(|a| a.name.as_str()).collect();
    TypeRef::plain(format!("{}<{}>", base, rendered.join(", ")))
}

/// Simple name of a type with its generic arguments dropped.
///
/// Used for supertype references, where `Repository<User>` relates to `Repository`.
pub fn base_name(raw: &str) -> String {
    let cleaned = clean(raw);
    let head = cleaned.split('<').next().unwrap_or(cleaned);
    simple_name(head)
}

/// Strip annotations, nullability, array and varargs markers.
fn clean(raw: &str) -> &str {
    let mut text = raw.trim();

    while let Some(rest) = text.strip_prefix('@') {
        text = skip_annotation(rest).trim_start();
    }

    loop {
        let before = text.len();
        text = text
            .trim_end_matches('?')
            .trim_end_matches("!!")
            .trim_end_matches("...")
            .trim_end();
        if let Some(rest) = text.strip_suffix("[]") {
            text = rest.trim_end();
        }
        if text.len() == before {
            break;
        }
    }

    text
}

/// Skip an annotation name and its optional argument list.
fn skip_annotation(text: &str) -> &str {
    let name_end = text
        .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == '.' || c == ':'))
        .unwrap_or(text.len());
    let rest = &text[name_end..];

    if !rest.starts_with('(') {
        return rest;
    }

    let mut depth = 0usize;
    for (i, c) in rest.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return &rest[i + 1..];
                }
            }
            _ => {}
        }
    }
    ""
}

/// Split `Base<A, B<C>>` into `Base` and its top-level arguments.
fn split_generic(text: &str) -> Option<(&str, Vec<&str>)> {
    let open = text.find('<')?;
    let base = text[..open].trim();

    let mut depth = 0usize;
    let mut close = None;
    for (i, c) in text[open..].char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    close = Some(open + i);
                    break;
                }
            }
            _ => {}
        }
    }

    let inner = &text[open + 1..close.unwrap_or(text.len())];
    Some((base, split_top_level(inner)))
}

/// Split on commas that are not nested inside `<>` or `()`.
fn split_top_level(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        match c {
            '<' | '(' => depth += 1,
            '>' | ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(text[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(text[start..].trim());

    parts.into_iter().filter(|p| !p.is_empty()).collect()
}

/// Drop wildcard and projection markers; bare wildcards yield nothing.
fn strip_variance(arg: &str) -> Option<&str> {
    let arg = arg.trim();
    if arg == "?" || arg == "*" {
        return None;
    }
    for prefix in ["? extends ", "? super ", "out ", "in "] {
        if let Some(rest) = arg.strip_prefix(prefix) {
            return Some(rest.trim());
        }
    }
    Some(arg)
}

/// Last segment of a qualified name.
fn simple_name(text: &str) -> String {
    text.trim().rsplit('.').next().unwrap_or("").trim().to_string()
}
