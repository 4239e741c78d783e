//! # Introduction
//!
//! unbrace translates a small JavaScript subset into Python source, turning
//! brace-delimited blocks into indented ones as it goes.  Translation is a
//! single forward pass with no type checking and no optimization; the
//! result is plain text and is never executed here.
//!
//! ## Translation pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → Codegen → Python text
//! ```
//!
//! 1. [`parser::lexer`] — tokenises the source into `{kind, text}` tokens.
//! 2. [`parser::parser`] — recursive descent over the token stream,
//!    building the closed [`parser::ast::Node`] variant set.
//! 3. [`codegen`] — syntax-directed rendering, one rule per variant, with
//!    recursive block indentation.
//!
//! ## Supported subset
//!
//! Statements: `let`/`const`/`var`, `function`, `return`, `if/else`,
//! `while`, `console.log`, expression statements.
//! Expressions: numbers, strings, identifiers, calls, `+ - * /`,
//! comparisons, assignment.
//!
//! A full run is one call:
//!
//! ```
//! let python = unbrace::translate("let x = 5 + 3;").unwrap();
//! assert_eq!(python, "x = (5.0 + 3.0)");
//! ```

use std::fmt;

pub mod codegen;
pub mod parser;

use parser::lexer::{LexError, Lexer};
use parser::parser::{Parser, SyntaxError};

/// Any failure a translation run can produce.
///
/// Both variants end the run immediately; there is no recovery, partial
/// output, or error aggregation.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslateError {
    Lex(LexError),
    Syntax(SyntaxError),
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::Lex(err) => err.fmt(f),
            TranslateError::Syntax(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for TranslateError {}

impl From<LexError> for TranslateError {
    fn from(err: LexError) -> Self {
        TranslateError::Lex(err)
    }
}

impl From<SyntaxError> for TranslateError {
    fn from(err: SyntaxError) -> Self {
        TranslateError::Syntax(err)
    }
}

/// Translate a JavaScript-subset program into Python source.
///
/// The returned text has no trailing newline. A translation run is a pure
/// function of its input: no state is shared between calls.
pub fn translate(source: &str) -> Result<String, TranslateError> {
    let tokens = Lexer::new(source).tokenize()?;
    let mut parser = Parser::new(tokens);
    let program = parser.parse_program()?;
    Ok(codegen::render(&program))
}
