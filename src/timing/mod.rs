//! Per-operator timing samples shown in labels of unnamed operators.
//!
//! Purely cosmetic: timings never influence graph structure.

pub mod parse;
pub mod table;

pub use parse::parse_timing_file;
pub use table::{TimingTable, Timings};
