//! Application services composed from transports and invokers

mod direct_rewriter;
mod fallback_engine;

pub use direct_rewriter::{DirectRewriter, MAX_REWRITE_CHARS};
pub use fallback_engine::{Capability, FallbackEngine, DEFAULT_MOOD_SERIES_DAYS};
