//! Static price table and cost estimation

use std::fmt;

use super::model_id::ModelId;

const TOKENS_PER_MILLION: f64 = 1_000_000.0;

/// USD price per million tokens
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelPrice {
    pub input_per_mtok: f64,
    pub output_per_mtok: f64,
}

/// Known canonical models and their list prices
pub const PRICE_TABLE: &[(&str, ModelPrice)] = &[
    (
        "claude-3-5-haiku-20241022",
        ModelPrice {
            input_per_mtok: 0.80,
            output_per_mtok: 4.00,
        },
    ),
    (
        "claude-haiku-4-5-20251001",
        ModelPrice {
            input_per_mtok: 1.00,
            output_per_mtok: 5.00,
        },
    ),
    (
        "claude-sonnet-4-20250514",
        ModelPrice {
            input_per_mtok: 3.00,
            output_per_mtok: 15.00,
        },
    ),
    (
        "claude-sonnet-4-5-20250929",
        ModelPrice {
            input_per_mtok: 3.00,
            output_per_mtok: 15.00,
        },
    ),
    (
        "claude-opus-4-20250514",
        ModelPrice {
            input_per_mtok: 15.00,
            output_per_mtok: 75.00,
        },
    ),
    (
        "claude-opus-4-1-20250805",
        ModelPrice {
            input_per_mtok: 15.00,
            output_per_mtok: 75.00,
        },
    ),
];

/// Token counts reported by the service for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub const fn new(input_tokens: u64, output_tokens: u64) -> Self {
        Self {
            input_tokens,
            output_tokens,
        }
    }
}

/// Result of a cost lookup. A model missing from the table is `Unknown`,
/// never a guess.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CostEstimate {
    Usd(f64),
    Unknown,
}

impl CostEstimate {
    /// The amount in USD, if known
    pub fn amount(&self) -> Option<f64> {
        match self {
            Self::Usd(v) => Some(*v),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for CostEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usd(v) => write!(f, "${:.4}", v),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Look up the list price of a canonical model
pub fn price_for(model: &ModelId) -> Option<ModelPrice> {
    PRICE_TABLE
        .iter()
        .find(|(id, _)| *id == model.as_str())
        .map(|(_, price)| *price)
}

/// Estimate what a request cost given the tokens it consumed
pub fn estimate_cost(model: &ModelId, usage: TokenUsage) -> CostEstimate {
    match price_for(model) {
        Some(price) => CostEstimate::Usd(
            usage.input_tokens as f64 / TOKENS_PER_MILLION * price.input_per_mtok
                + usage.output_tokens as f64 / TOKENS_PER_MILLION * price.output_per_mtok,
        ),
        None => CostEstimate::Unknown,
    }
}
