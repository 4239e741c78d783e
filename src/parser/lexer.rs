//! Lexer (tokenizer) for the JavaScript subset
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser. Horizontal whitespace is discarded; line breaks are kept as
//! [`TokenKind::Newline`] tokens because the parser skips them only between
//! statements, never inside an expression or a block header.

use std::fmt;

/// Lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Integer or decimal literal, e.g. `5` or `2.75`.
    Number,
    /// Quoted string with the quotes stripped and escapes decoded.
    String,
    /// Name or keyword. Keywords are not reserved; the parser decides by
    /// position whether `let`, `if`, etc. introduce a statement.
    Identifier,
    /// A greedy run of one or more of `+ - * / = < > !`, so `==`, `<=` and
    /// also stray runs like `=+` arrive as a single token.
    Operator,
    /// A single `.` (member access is its own kind because the grammar only
    /// ever accepts it in `console.log`).
    Dot,
    /// One of `{ } [ ] ( ) , ; :`.
    Punctuation,
    /// A line break.
    Newline,
}

/// One lexical unit: a kind plus the literal (or, for strings, decoded) text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Number => write!(f, "number '{}'", self.text),
            TokenKind::String => write!(f, "string \"{}\"", self.text),
            TokenKind::Identifier => write!(f, "identifier '{}'", self.text),
            TokenKind::Operator
            | TokenKind::Dot
            | TokenKind::Punctuation => write!(f, "'{}'", self.text),
            TokenKind::Newline => write!(f, "line break"),
        }
    }
}

/// Line and column of a scan position, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lex error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for LexError {}

/// Lexer for the JavaScript subset
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input.
    ///
    /// Fails with a [`LexError`] on the first character that fits no
    /// category; nothing is skipped or recovered.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            match ch {
                ' ' | '\t' | '\r' => {
                    self.advance();
                }
                '\n' => {
                    self.advance();
                    tokens.push(Token::new(TokenKind::Newline, "\n"));
                }
                '"' | '\'' => tokens.push(self.string_literal()?),
                '0'..='9' => tokens.push(self.number_literal()),
                'a'..='z' | 'A'..='Z' | '_' => tokens.push(self.identifier()),
                _ if is_operator_char(ch) => tokens.push(self.operator_run()),
                '.' => {
                    self.advance();
                    tokens.push(Token::new(TokenKind::Dot, "."));
                }
                '{' | '}' | '[' | ']' | '(' | ')' | ',' | ';' | ':' => {
                    self.advance();
                    tokens.push(Token::new(TokenKind::Punctuation, ch));
                }
                _ => {
                    return Err(LexError {
                        message: format!(
                            "unrecognized character '{}' near \"{}\"",
                            ch,
                            self.surrounding_text()
                        ),
                        location: self.current_location(),
                    });
                }
            }
        }

        Ok(tokens)
    }

    /// Scan a string literal delimited by either quote character.
    ///
    /// The body runs to the next occurrence of the same quote; a backslash
    /// does not protect the closing quote, and a raw line break is legal
    /// string content. Escapes are decoded once the body is complete.
    fn string_literal(&mut self) -> Result<Token, LexError> {
        let start = self.current_location();
        let quote = self.advance().ok_or_else(|| LexError {
            message: "unterminated string literal".to_string(),
            location: start,
        })?;

        let mut body = String::new();
        loop {
            match self.advance() {
                Some(ch) if ch == quote => break,
                Some(ch) => body.push(ch),
                None => {
                    return Err(LexError {
                        message: "unterminated string literal".to_string(),
                        location: start,
                    });
                }
            }
        }

        let decoded = decode_escapes(&body, start)?;
        Ok(Token::new(TokenKind::String, decoded))
    }

    /// Scan an integer or decimal literal.
    ///
    /// A dot counts only when a digit follows, so `5.` is the number `5`
    /// followed by a Dot token.
    fn number_literal(&mut self) -> Token {
        let mut text = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if self.peek() == Some('.')
            && self.peek_ahead(1).is_some_and(|ch| ch.is_ascii_digit())
        {
            text.push('.');
            self.advance();
            while let Some(ch) = self.peek() {
                if ch.is_ascii_digit() {
                    text.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }
        }

        Token::new(TokenKind::Number, text)
    }

    /// Scan an identifier: ASCII letter or underscore, then word characters.
    fn identifier(&mut self) -> Token {
        let mut text = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::new(TokenKind::Identifier, text)
    }

    /// Scan a greedy run of operator characters as one token.
    fn operator_run(&mut self) -> Token {
        let mut text = String::new();

        while let Some(ch) = self.peek() {
            if is_operator_char(ch) {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::new(TokenKind::Operator, text)
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        if self.position < self.input.len() {
            Some(self.input[self.position])
        } else {
            None
        }
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        let pos = self.position + n;
        if pos < self.input.len() {
            Some(self.input[pos])
        } else {
            None
        }
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        if self.position >= self.input.len() {
            return None;
        }

        let ch = self.input[self.position];
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }

    /// The rest of the current line (capped) for error messages.
    fn surrounding_text(&self) -> String {
        self.input[self.position..]
            .iter()
            .copied()
            .take_while(|&ch| ch != '\n')
            .take(16)
            .collect()
    }
}

fn is_operator_char(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/' | '=' | '<' | '>' | '!')
}

/// Resolve backslash escapes in a scanned string body.
///
/// Recognizes `\n \t \r \0 \a \b \f \v \\ \' \"`, two-digit `\xHH` and
/// four-digit `\uHHHH`. An unknown escape keeps the backslash and the
/// character verbatim; a lone trailing backslash or a malformed hex escape
/// is a [`LexError`].
fn decode_escapes(body: &str, start: SourceLocation) -> Result<String, LexError> {
    let mut decoded = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            decoded.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => decoded.push('\n'),
            Some('t') => decoded.push('\t'),
            Some('r') => decoded.push('\r'),
            Some('0') => decoded.push('\0'),
            Some('a') => decoded.push('\u{07}'),
            Some('b') => decoded.push('\u{08}'),
            Some('f') => decoded.push('\u{0C}'),
            Some('v') => decoded.push('\u{0B}'),
            Some('\\') => decoded.push('\\'),
            Some('\'') => decoded.push('\''),
            Some('"') => decoded.push('"'),
            Some('x') => decoded.push(hex_escape(&mut chars, 2, start)?),
            Some('u') => decoded.push(hex_escape(&mut chars, 4, start)?),
            Some(other) => {
                decoded.push('\\');
                decoded.push(other);
            }
            None => {
                return Err(LexError {
                    message: "incomplete escape at end of string literal"
                        .to_string(),
                    location: start,
                });
            }
        }
    }

    Ok(decoded)
}

/// Read exactly `len` hex digits and convert them to a character.
fn hex_escape(
    chars: &mut std::str::Chars<'_>,
    len: usize,
    start: SourceLocation,
) -> Result<char, LexError> {
    let digits: String = chars.by_ref().take(len).collect();

    if digits.chars().count() != len {
        return Err(LexError {
            message: format!("incomplete hex escape '\\{}'", digits),
            location: start,
        });
    }

    let code = u32::from_str_radix(&digits, 16).map_err(|_| LexError {
        message: format!("invalid hex escape '\\{}'", digits),
        location: start,
    })?;

    char::from_u32(code).ok_or_else(|| LexError {
        message: format!("hex escape '\\{}' is not a valid character", digits),
        location: start,
    })
}
