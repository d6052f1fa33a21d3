//! Model identifier value object

use std::fmt;

/// Shortcut used when no model is given on the command line
pub const DEFAULT_MODEL_ALIAS: &str = "sonnet";

/// Short aliases and the canonical identifiers they stand for
pub const MODEL_ALIASES: &[(&str, &str)] = &[
    ("sonnet", "claude-sonnet-4-5-20250929"),
    ("haiku", "claude-3-5-haiku-20241022"),
    ("opus", "claude-opus-4-1-20250805"),
];

/// Substring that marks the most expensive model tier
const PREMIUM_TIER_MARKER: &str = "opus";

/// Canonical model identifier as expected by the remote service.
///
/// Built through [`ModelId::resolve`], which expands known aliases and
/// passes everything else through untouched. Unknown identifiers are not
/// validated here; the service rejects them at request time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelId(String);

impl ModelId {
    /// Resolve an alias or full identifier into a canonical model id
    pub fn resolve(input: &str) -> Self {
        let key = input.trim().to_lowercase();
        MODEL_ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, canonical)| Self((*canonical).to_string()))
            .unwrap_or_else(|| Self(input.to_string()))
    }

    /// The identifier as sent to the service
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this model belongs to the premium (most expensive) tier
    pub fn is_premium_tier(&self) -> bool {
        self.0.to_lowercase().contains(PREMIUM_TIER_MARKER)
    }
}

impl Default for ModelId {
    fn default() -> Self {
        Self::resolve(DEFAULT_MODEL_ALIAS)
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
