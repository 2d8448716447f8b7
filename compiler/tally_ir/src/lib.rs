//! Tally IR - shared types for the match-result language.
//!
//! This crate contains the data structures every other phase agrees on:
//! - Spans for source locations
//! - Tokens and token kinds produced by the lexer
//! - AST nodes (`Team`, `Score`, `GameStatement`, `Statement`, `Program`)
//!
//! No phase logic lives here. Lexing, parsing and evaluation each have
//! their own crate.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod span;
mod token;

pub use ast::{GameStatement, Program, Score, Statement, Team};
pub use span::Span;
pub use token::{Token, TokenKind};
