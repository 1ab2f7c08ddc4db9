//! Inline text handling: markup tokenization, word measurement and line packing.

pub mod tokenizer;
pub mod wrapper;

pub use tokenizer::{StyledRun, WordUnit, split_units, tokenize};
pub use wrapper::{PackedLine, line_elements, pack_lines, wrap_plain};
