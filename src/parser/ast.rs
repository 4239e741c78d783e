// AST (Abstract Syntax Tree) definitions for the translator

/// Binary operators accepted by the expression grammar.
///
/// Assignment is not a [`BinOp`]; it has its own node variant because its
/// left side is restricted to an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    // Comparison
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
}

impl BinOp {
    /// Map an operator token's text to its operator, if it is one of the
    /// ten supported symbols. Greedy runs like `=+` map to nothing and are
    /// rejected by the parser wherever they appear.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(BinOp::Add),
            "-" => Some(BinOp::Sub),
            "*" => Some(BinOp::Mul),
            "/" => Some(BinOp::Div),
            "<" => Some(BinOp::Lt),
            ">" => Some(BinOp::Gt),
            "<=" => Some(BinOp::Le),
            ">=" => Some(BinOp::Ge),
            "==" => Some(BinOp::Eq),
            "!=" => Some(BinOp::Ne),
            _ => None,
        }
    }

    /// The operator's surface syntax, identical in source and target.
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Lt => "<",
            BinOp::Gt => ">",
            BinOp::Le => "<=",
            BinOp::Ge => ">=",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
        }
    }
}

/// Which keyword introduced a variable declaration.
///
/// The generator discards this (the target has no let/const/var
/// distinction), but the parser records what it saw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Let,
    Const,
    Var,
}

impl DeclKind {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "let" => Some(DeclKind::Let),
            "const" => Some(DeclKind::Const),
            "var" => Some(DeclKind::Var),
            _ => None,
        }
    }
}

/// AST nodes representing statements and expressions.
///
/// A closed set: every consumer matches exhaustively, so adding a variant
/// is a compile error at each site until it is handled.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // Expressions
    NumberLiteral(f64),
    StringLiteral(String),
    Identifier(String),
    BinaryOp {
        left: Box<Node>,
        op: BinOp,
        right: Box<Node>,
    },
    Assignment {
        /// Name of the identifier being assigned. Restricting the field to
        /// a name (rather than a node) makes a non-identifier target
        /// unrepresentable.
        target: String,
        value: Box<Node>,
    },
    CallExpression {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },

    // Statements
    VariableDeclaration {
        kind: DeclKind,
        name: String,
        value: Box<Node>,
    },
    FunctionDeclaration {
        name: String,
        params: Vec<String>,
        body: Vec<Node>,
    },
    ReturnStatement {
        argument: Box<Node>,
    },
    IfStatement {
        test: Box<Node>,
        consequent: Vec<Node>,
        alternate: Option<Vec<Node>>,
    },
    WhileStatement {
        test: Box<Node>,
        body: Vec<Node>,
    },
    PrintStatement {
        arguments: Vec<Node>,
    },
}

/// Top-level program structure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Node>, // All top-level statements in source order
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }
}
