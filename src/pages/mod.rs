//! Page components for the Kolam Analyzer.

mod analysis;
mod index;

pub use analysis::Analysis;
pub use index::Index;
