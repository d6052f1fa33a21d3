//! Model domain module

mod model_id;
mod pricing;

pub use model_id::{ModelId, DEFAULT_MODEL_ALIAS, MODEL_ALIASES};
pub use pricing::{estimate_cost, price_for, CostEstimate, ModelPrice, TokenUsage, PRICE_TABLE};
