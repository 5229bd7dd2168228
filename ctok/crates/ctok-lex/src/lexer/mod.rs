//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch loop
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Integer literal lexing
//! - `buffer` - Bounded lexeme storage shared by the multi-byte scanners

mod buffer;
mod core;
mod identifier;
mod number;

pub use self::core::Lexer;
