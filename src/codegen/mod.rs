//! Python code generation
//!
//! Walks the syntax tree and emits Python source, one fixed rule per node
//! variant. All functions are pure: indentation is applied by prefixing the
//! lines of each nested block, so nesting compounds naturally without a
//! depth counter.

use crate::parser::ast::{Node, Program};

/// One level of block indentation.
const INDENT: &str = "    ";

/// Render a whole program as Python source.
///
/// Top-level statements are joined with single line breaks; the result has
/// no trailing newline. An empty program renders as an empty string.
pub fn render(program: &Program) -> String {
    let lines: Vec<String> =
        program.statements.iter().map(render_node).collect();
    lines.join("\n")
}

/// Render a single node. Block-bearing statements produce multi-line
/// chunks; everything else produces a single line.
pub fn render_node(node: &Node) -> String {
    match node {
        Node::NumberLiteral(value) => render_number(*value),
        Node::StringLiteral(text) => render_string(text),
        Node::Identifier(name) => name.clone(),
        Node::BinaryOp { left, op, right } => format!(
            "({} {} {})",
            render_node(left),
            op.symbol(),
            render_node(right)
        ),
        Node::Assignment { target, value } => {
            format!("{} = {}", target, render_node(value))
        }
        Node::CallExpression { callee, arguments } => {
            format!("{}({})", render_node(callee), render_list(arguments))
        }
        Node::VariableDeclaration { name, value, .. } => {
            // let/const/var all flatten to a plain binding.
            format!("{} = {}", name, render_node(value))
        }
        Node::FunctionDeclaration { name, params, body } => format!(
            "def {}({}):\n{}",
            name,
            params.join(", "),
            render_block(body)
        ),
        Node::ReturnStatement { argument } => {
            format!("return {}", render_node(argument))
        }
        Node::IfStatement {
            test,
            consequent,
            alternate,
        } => {
            let mut code = format!(
                "if {}:\n{}",
                render_node(test),
                render_block(consequent)
            );
            if let Some(alternate) = alternate {
                code.push_str("\nelse:\n");
                code.push_str(&render_block(alternate));
            }
            code
        }
        Node::WhileStatement { test, body } => {
            format!("while {}:\n{}", render_node(test), render_block(body))
        }
        Node::PrintStatement { arguments } => {
            format!("print({})", render_list(arguments))
        }
    }
}

/// Render comma-separated expression arguments.
fn render_list(nodes: &[Node]) -> String {
    let rendered: Vec<String> = nodes.iter().map(render_node).collect();
    rendered.join(", ")
}

/// Render a block body indented one level.
///
/// Every line of every child chunk gets the prefix, so a chunk that
/// already carries indentation from its own children gains one more level.
/// An empty block becomes a single `pass`.
fn render_block(statements: &[Node]) -> String {
    if statements.is_empty() {
        return format!("{}pass", INDENT);
    }

    let mut lines = Vec::new();
    for statement in statements {
        let chunk = render_node(statement);
        for line in chunk.lines() {
            lines.push(format!("{}{}", INDENT, line));
        }
    }
    lines.join("\n")
}

/// Render a number: whole values get a trailing `.0`, fractional values
/// keep their shortest decimal form. Exponent notation is never used, even
/// at magnitudes where Python's `str` would switch to it.
fn render_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Render a string as a double-quoted Python literal.
///
/// Always double-quoted whatever the source used. Backslash, double quote
/// and the control characters that would break the literal are re-escaped;
/// single quotes pass through as-is.
fn render_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 2);
    escaped.push('"');
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            '\0' => escaped.push_str("\\x00"),
            _ => escaped.push(ch),
        }
    }
    escaped.push('"');
    escaped
}
