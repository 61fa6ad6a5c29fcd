//! UML visibility markers.

use serde::{Deserialize, Serialize};

/// Member or type visibility, rendered as its UML symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Visibility {
    /// `+`
    #[default]
    #[serde(rename = "+")]
    Public,
    /// `-`
    #[serde(rename = "-")]
    Private,
    /// `#`
    #[serde(rename = "#")]
    Protected,
    /// `~` (package-private / internal)
    #[serde(rename = "~")]
    Package,
}

impl Visibility {
    /// UML symbol for this visibility.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Public => "+",
            Self::Private => "-",
            Self::Protected => "#",
            Self::Package => "~",
        }
    }

    /// Parse a UML symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Public),
            "-" => Some(Self::Private),
            "#" => Some(Self::Protected),
            "~" => Some(Self::Package),
            _ => None,
        }
    }

    /// Map source modifiers to a visibility.
    ///
    /// `public`, `private` and `protected` win in that order; `internal` maps to
    /// package visibility; anything else falls back to `default`.
    pub fn from_modifiers<S: AsRef<str>>(modifiers: &[S], default: Visibility) -> Self {
        let has = |m: &str| modifiers.iter().any(|s| s.as_ref() == m);
        if has("public") {
            Self::Public
        } else if has("private") {
            Self::Private
        } else if has("protected") {
            Self::Protected
        } else if has("internal") {
            Self::Package
        } else {
            default
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Serde adapter for member visibility, where an absent visibility is `""`.
pub(crate) mod member_visibility {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::Visibility;

    pub fn serialize<S: Serializer>(value: &Option<Visibility>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.map(|v| v.symbol()).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Visibility>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(symbol) => Visibility::from_symbol(symbol)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("unknown visibility symbol: {}", symbol))),
        }
    }
}
