//! PDF download adapters

mod cached_http;

pub use cached_http::{CachedHttpFetcher, CACHE_DIR_ENV};
