//! Decoding pipeline: raw text -> lines -> fields -> table.

pub mod parser;
pub mod scanner;
pub mod tokenizer;
