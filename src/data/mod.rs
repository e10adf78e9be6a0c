mod fallback;
mod riasec;

pub use fallback::{sample_result, FALLBACK_MESSAGE, UNREACHABLE_MESSAGE};
pub use riasec::Dimension;
