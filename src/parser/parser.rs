use crate::parser::ast::*;
use crate::parser::lexer::{Token, TokenKind};
use std::fmt;

/// Parser error type
#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxError {
    /// A token was present but did not fit the grammar production.
    Unexpected { expected: String, found: Token },
    /// The token stream ran out in the middle of a production.
    UnexpectedEnd { expected: String },
    /// The expression left of `=` is not a plain identifier.
    InvalidAssignmentTarget,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::Unexpected { expected, found } => {
                write!(f, "syntax error: expected {}, found {}", expected, found)
            }
            SyntaxError::UnexpectedEnd { expected } => {
                write!(
                    f,
                    "syntax error: expected {}, found end of input",
                    expected
                )
            }
            SyntaxError::InvalidAssignmentTarget => {
                write!(f, "syntax error: invalid assignment target")
            }
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Recursive descent parser for the JavaScript subset
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse the entire program (top-level statements).
    ///
    /// The stream must be consumed to the end; a `}` with no open block is
    /// rejected here rather than silently truncating the program.
    pub fn parse_program(&mut self) -> Result<Program, SyntaxError> {
        let mut program = Program::new();

        loop {
            self.skip_newlines();
            match self.peek() {
                None => break,
                Some(tok)
                    if tok.kind == TokenKind::Punctuation
                        && tok.text == "}" =>
                {
                    return Err(SyntaxError::Unexpected {
                        expected: "a statement".to_string(),
                        found: tok.clone(),
                    });
                }
                Some(_) => {
                    let statement = self.parse_statement()?;
                    program.statements.push(statement);
                }
            }
        }

        Ok(program)
    }

    /// Parse statements inside braces, excluding the braces themselves.
    ///
    /// Stops at `}` or end of input; the caller's closing `expect` turns an
    /// exhausted stream into the unterminated-block error.
    fn parse_block_statements(&mut self) -> Result<Vec<Node>, SyntaxError> {
        let mut statements = Vec::new();

        loop {
            self.skip_newlines();
            match self.peek() {
                None => break,
                Some(tok)
                    if tok.kind == TokenKind::Punctuation
                        && tok.text == "}" =>
                {
                    break;
                }
                Some(_) => statements.push(self.parse_statement()?),
            }
        }

        Ok(statements)
    }

    /// Parse a statement
    fn parse_statement(&mut self) -> Result<Node, SyntaxError> {
        let tok = match self.peek() {
            Some(tok) => tok.clone(),
            None => {
                return Err(SyntaxError::UnexpectedEnd {
                    expected: "a statement".to_string(),
                });
            }
        };

        // Keyword dispatch on a leading identifier. None of these words are
        // reserved; in any other position they are ordinary identifiers.
        if tok.kind == TokenKind::Identifier {
            if let Some(kind) = DeclKind::from_keyword(&tok.text) {
                self.advance();
                let statement = self.parse_variable_declaration(kind)?;
                self.expect_punct(";", "after variable declaration")?;
                return Ok(statement);
            }

            match tok.text.as_str() {
                "function" => {
                    self.advance();
                    return self.parse_function_declaration();
                }
                "return" => {
                    self.advance();
                    let statement = self.parse_return_statement()?;
                    self.expect_punct(";", "after return value")?;
                    return Ok(statement);
                }
                "if" => {
                    self.advance();
                    return self.parse_if_statement();
                }
                "while" => {
                    self.advance();
                    return self.parse_while_statement();
                }
                "console" => {
                    self.advance();
                    return self.parse_console_log();
                }
                _ => {}
            }
        }

        // Otherwise, it's an expression statement
        let expr = self.parse_expression()?;
        self.expect_punct(";", "after expression")?;
        Ok(expr)
    }

    /// Parse a variable declaration after its keyword: name `=` initializer.
    /// The terminating `;` is consumed by the caller.
    fn parse_variable_declaration(
        &mut self,
        kind: DeclKind,
    ) -> Result<Node, SyntaxError> {
        let name = self.expect_identifier("for the variable name")?;
        self.expect_operator("=", "after the variable name")?;
        let value = self.parse_expression()?;

        Ok(Node::VariableDeclaration {
            kind,
            name,
            value: Box::new(value),
        })
    }

    /// Parse a function declaration after the `function` keyword.
    fn parse_function_declaration(&mut self) -> Result<Node, SyntaxError> {
        let name = self.expect_identifier("for the function name")?;
        self.expect_punct("(", "after function name")?;
        let params = self.parse_parameter_list()?;
        self.expect_punct("{", "before function body")?;
        let body = self.parse_block_statements()?;
        self.expect_punct("}", "after function body")?;

        Ok(Node::FunctionDeclaration { name, params, body })
    }

    /// Parse parameter names up to and including the closing `)`.
    ///
    /// Separating commas are optional and one trailing comma is tolerated;
    /// anything other than a name or `)` is rejected.
    fn parse_parameter_list(&mut self) -> Result<Vec<String>, SyntaxError> {
        let mut params = Vec::new();

        loop {
            let tok = match self.peek() {
                Some(tok) => tok.clone(),
                None => {
                    return Err(SyntaxError::UnexpectedEnd {
                        expected: "')' to close the parameter list"
                            .to_string(),
                    });
                }
            };

            if tok.kind == TokenKind::Punctuation && tok.text == ")" {
                self.advance();
                break;
            }

            if tok.kind == TokenKind::Identifier {
                self.advance();
                params.push(tok.text);
                self.match_punct(",");
            } else {
                return Err(SyntaxError::Unexpected {
                    expected: "a parameter name or ')'".to_string(),
                    found: tok,
                });
            }
        }

        Ok(params)
    }

    /// Parse a return statement after the `return` keyword; the argument is
    /// mandatory and the `;` is consumed by the caller.
    fn parse_return_statement(&mut self) -> Result<Node, SyntaxError> {
        let argument = self.parse_expression()?;

        Ok(Node::ReturnStatement {
            argument: Box::new(argument),
        })
    }

    /// Parse an if statement after the `if` keyword.
    ///
    /// There is no `else if` form; a chain is written as a nested `if`
    /// inside the `else` block.
    fn parse_if_statement(&mut self) -> Result<Node, SyntaxError> {
        self.expect_punct("(", "after 'if'")?;
        let test = self.parse_expression()?;
        self.expect_punct(")", "after if condition")?;
        self.expect_punct("{", "before if body")?;
        let consequent = self.parse_block_statements()?;
        self.expect_punct("}", "after if body")?;

        let alternate = if self
            .match_token(TokenKind::Identifier, Some("else"))
            .is_some()
        {
            self.expect_punct("{", "after 'else'")?;
            let block = self.parse_block_statements()?;
            self.expect_punct("}", "after else body")?;
            Some(block)
        } else {
            None
        };

        Ok(Node::IfStatement {
            test: Box::new(test),
            consequent,
            alternate,
        })
    }

    /// Parse a while statement after the `while` keyword.
    fn parse_while_statement(&mut self) -> Result<Node, SyntaxError> {
        self.expect_punct("(", "after 'while'")?;
        let test = self.parse_expression()?;
        self.expect_punct(")", "after while condition")?;
        self.expect_punct("{", "before while body")?;
        let body = self.parse_block_statements()?;
        self.expect_punct("}", "after while body")?;

        Ok(Node::WhileStatement {
            test: Box::new(test),
            body,
        })
    }

    /// Parse `console.log(args);` after the `console` identifier.
    ///
    /// `log` is the only member the grammar knows, and unlike ordinary call
    /// expressions the arguments here require separating commas.
    fn parse_console_log(&mut self) -> Result<Node, SyntaxError> {
        self.expect(TokenKind::Dot, None, "'.' after 'console'")?;
        let member =
            self.expect(TokenKind::Identifier, None, "'log' after 'console.'")?;
        if member.text != "log" {
            return Err(SyntaxError::Unexpected {
                expected: "'log' after 'console.'".to_string(),
                found: member,
            });
        }
        self.expect_punct("(", "after 'console.log'")?;

        let mut arguments = Vec::new();
        if self.peek().is_some() && !self.check_punct(")") {
            arguments.push(self.parse_expression()?);
            while self.match_punct(",") {
                arguments.push(self.parse_expression()?);
            }
        }

        self.expect_punct(")", "after print arguments")?;
        self.expect_punct(";", "after print statement")?;

        Ok(Node::PrintStatement { arguments })
    }

    // ===== Expression grammar, lowest precedence first =====

    /// Parse expression (top-level entry point)
    fn parse_expression(&mut self) -> Result<Node, SyntaxError> {
        self.parse_assignment()
    }

    /// Parse assignment (right-associative).
    ///
    /// The target check runs after the value is parsed, so an error inside
    /// the value surfaces before a bad target does.
    fn parse_assignment(&mut self) -> Result<Node, SyntaxError> {
        let node = self.parse_equality()?;

        if self.check(TokenKind::Operator, "=") {
            self.advance();
            let value = self.parse_assignment()?;
            return match node {
                Node::Identifier(name) => Ok(Node::Assignment {
                    target: name,
                    value: Box::new(value),
                }),
                _ => Err(SyntaxError::InvalidAssignmentTarget),
            };
        }

        Ok(node)
    }

    /// Parse equality (`==`, `!=`), left-associative
    fn parse_equality(&mut self) -> Result<Node, SyntaxError> {
        let mut left = self.parse_comparison()?;

        while let Some(op) = self.match_operator(&[BinOp::Eq, BinOp::Ne]) {
            let right = self.parse_comparison()?;
            left = Node::BinaryOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parse relational comparison (`<`, `>`, `<=`, `>=`), left-associative
    fn parse_comparison(&mut self) -> Result<Node, SyntaxError> {
        let mut left = self.parse_term()?;

        while let Some(op) = self
            .match_operator(&[BinOp::Lt, BinOp::Gt, BinOp::Le, BinOp::Ge])
        {
            let right = self.parse_term()?;
            left = Node::BinaryOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parse additive term (`+`, `-`), left-associative
    fn parse_term(&mut self) -> Result<Node, SyntaxError> {
        let mut left = self.parse_factor()?;

        while let Some(op) = self.match_operator(&[BinOp::Add, BinOp::Sub]) {
            let right = self.parse_factor()?;
            left = Node::BinaryOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parse multiplicative factor (`*`, `/`), left-associative
    fn parse_factor(&mut self) -> Result<Node, SyntaxError> {
        let mut left = self.parse_atom()?;

        while let Some(op) = self.match_operator(&[BinOp::Mul, BinOp::Div]) {
            let right = self.parse_atom()?;
            left = Node::BinaryOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parse an atom: number, string, identifier (optionally called), or a
    /// parenthesized sub-expression.
    fn parse_atom(&mut self) -> Result<Node, SyntaxError> {
        let tok = match self.peek() {
            Some(tok) => tok.clone(),
            None => {
                return Err(SyntaxError::UnexpectedEnd {
                    expected: "an expression".to_string(),
                });
            }
        };

        match tok.kind {
            TokenKind::Number => {
                self.advance();
                let value = match tok.text.parse::<f64>() {
                    Ok(v) if v.is_finite() => v,
                    _ => {
                        return Err(SyntaxError::Unexpected {
                            expected: "a representable number".to_string(),
                            found: tok,
                        });
                    }
                };
                Ok(Node::NumberLiteral(value))
            }
            TokenKind::String => {
                self.advance();
                Ok(Node::StringLiteral(tok.text))
            }
            TokenKind::Identifier => {
                self.advance();
                if self.match_punct("(") {
                    let arguments = self.parse_call_arguments()?;
                    Ok(Node::CallExpression {
                        callee: Box::new(Node::Identifier(tok.text)),
                        arguments,
                    })
                } else {
                    Ok(Node::Identifier(tok.text))
                }
            }
            TokenKind::Punctuation if tok.text == "(" => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect_punct(")", "after parenthesized expression")?;
                Ok(expr)
            }
            _ => Err(SyntaxError::Unexpected {
                expected: "an expression".to_string(),
                found: tok,
            }),
        }
    }

    /// Parse call arguments up to and including the closing `)`.
    /// Separating commas are optional here, trailing comma included.
    fn parse_call_arguments(&mut self) -> Result<Vec<Node>, SyntaxError> {
        let mut arguments = Vec::new();

        while self.peek().is_some() && !self.check_punct(")") {
            arguments.push(self.parse_expression()?);
            self.match_punct(",");
        }

        self.expect_punct(")", "after call arguments")?;
        Ok(arguments)
    }

    // ===== Cursor helpers =====

    /// Peek at the current token without consuming
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Advance past the current token
    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    /// Skip newline tokens; called only between statements.
    fn skip_newlines(&mut self) {
        while matches!(self.peek(), Some(tok) if tok.kind == TokenKind::Newline)
        {
            self.advance();
        }
    }

    fn check(&self, kind: TokenKind, text: &str) -> bool {
        matches!(self.peek(), Some(tok) if tok.kind == kind && tok.text == text)
    }

    fn check_punct(&self, text: &str) -> bool {
        self.check(TokenKind::Punctuation, text)
    }

    /// Consume and return the current token if it matches the kind (and the
    /// text, when given).
    fn match_token(
        &mut self,
        kind: TokenKind,
        text: Option<&str>,
    ) -> Option<Token> {
        let tok = self.peek()?;
        if tok.kind != kind {
            return None;
        }
        if let Some(text) = text {
            if tok.text != text {
                return None;
            }
        }

        let tok = tok.clone();
        self.advance();
        Some(tok)
    }

    fn match_punct(&mut self, text: &str) -> bool {
        self.match_token(TokenKind::Punctuation, Some(text)).is_some()
    }

    /// Consume an operator token if it maps to one of the given operators.
    fn match_operator(&mut self, ops: &[BinOp]) -> Option<BinOp> {
        let tok = self.peek()?;
        if tok.kind != TokenKind::Operator {
            return None;
        }
        let op = BinOp::from_symbol(&tok.text)?;
        if !ops.contains(&op) {
            return None;
        }

        self.advance();
        Some(op)
    }

    /// Like [`Parser::match_token`], but failure to match is a
    /// [`SyntaxError`] describing what was expected.
    fn expect(
        &mut self,
        kind: TokenKind,
        text: Option<&str>,
        expected: &str,
    ) -> Result<Token, SyntaxError> {
        match self.match_token(kind, text) {
            Some(tok) => Ok(tok),
            None => Err(self.unexpected(expected)),
        }
    }

    fn expect_punct(
        &mut self,
        text: &str,
        ctx: &str,
    ) -> Result<(), SyntaxError> {
        self.expect(
            TokenKind::Punctuation,
            Some(text),
            &format!("'{}' {}", text, ctx),
        )?;
        Ok(())
    }

    fn expect_operator(
        &mut self,
        text: &str,
        ctx: &str,
    ) -> Result<(), SyntaxError> {
        self.expect(
            TokenKind::Operator,
            Some(text),
            &format!("'{}' {}", text, ctx),
        )?;
        Ok(())
    }

    fn expect_identifier(&mut self, ctx: &str) -> Result<String, SyntaxError> {
        let tok = self.expect(
            TokenKind::Identifier,
            None,
            &format!("identifier {}", ctx),
        )?;
        Ok(tok.text)
    }

    fn unexpected(&self, expected: &str) -> SyntaxError {
        match self.peek() {
            Some(tok) => SyntaxError::Unexpected {
                expected: expected.to_string(),
                found: tok.clone(),
            },
            None => SyntaxError::UnexpectedEnd {
                expected: expected.to_string(),
            },
        }
    }
}
