//! Visual theme for the archive site.

mod styles;

pub use styles::GLOBAL_STYLES;
