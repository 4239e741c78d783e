//! JavaScript-subset parser
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parser`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Supported Subset
//!
//! The parser supports a small slice of JavaScript:
//! - Statements: `let`/`const`/`var` declarations (initializer required),
//!   `function` declarations, `return`, `if`/`else`, `while`,
//!   `console.log(...)`, expression statements
//! - Expressions: numbers, strings, identifiers, `name(args)` calls,
//!   binary arithmetic and comparison, assignment
//! - No unary operators, no member access beyond `console.log`, no
//!   objects, arrays, classes, or `for` loops
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent with one function per precedence level
//! for binary operators; no parser generator involved.

pub mod ast;
pub mod lexer;
pub mod parser;
