// AST (Abstract Syntax Tree) definitions for minic

use std::fmt;

/// Type tags attached to literals, symbols and function return types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Int,
    String,
    Void,
    /// Anything the front end cannot resolve
    Unknown,
}

impl TypeTag {
    /// Map a type keyword to its tag.
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "int" => Some(TypeTag::Int),
            "string" => Some(TypeTag::String),
            "void" => Some(TypeTag::Void),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Int => "int",
            TypeTag::String => "string",
            TypeTag::Void => "void",
            TypeTag::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Lt,
    Gt,
}

impl BinOp {
    /// Map an operator symbol to its variant.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(BinOp::Add),
            "-" => Some(BinOp::Sub),
            "*" => Some(BinOp::Mul),
            "/" => Some(BinOp::Div),
            "%" => Some(BinOp::Mod),
            "<" => Some(BinOp::Lt),
            ">" => Some(BinOp::Gt),
            _ => None,
        }
    }

    /// Binding strength; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinOp::Lt | BinOp::Gt => 0,
            BinOp::Add | BinOp::Sub => 1,
            BinOp::Mul | BinOp::Div | BinOp::Mod => 2,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
            BinOp::Lt => "<",
            BinOp::Gt => ">",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Neg, // -x
}

impl fmt::Display for UnOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnOp::Neg => f.write_str("-"),
        }
    }
}

/// Function parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub declared_type: TypeTag,
}

/// AST nodes representing statements and expressions
///
/// Every composite node owns its children; the tree has a single owner and no
/// cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstNode {
    // Top-level declarations
    FunctionDef {
        name: String,
        params: Vec<Param>,
        body: Vec<AstNode>,
        return_type: TypeTag,
    },

    // Statements
    Assign {
        target: String,
        value: Box<AstNode>,
    },
    Return {
        value: Box<AstNode>,
    },
    If {
        condition: Box<AstNode>,
        then_body: Vec<AstNode>,
        else_body: Vec<AstNode>,
    },
    While {
        condition: Box<AstNode>,
        body: Vec<AstNode>,
    },

    // Expressions
    BinaryOp {
        op: BinOp,
        left: Box<AstNode>,
        right: Box<AstNode>,
    },
    UnaryOp {
        op: UnOp,
        operand: Box<AstNode>,
    },
    Literal {
        text: String,
        type_tag: TypeTag,
    },
    Variable {
        name: String,
    },
}

impl AstNode {
    pub fn int(text: impl Into<String>) -> Self {
        AstNode::Literal {
            text: text.into(),
            type_tag: TypeTag::Int,
        }
    }

    pub fn string(text: impl Into<String>) -> Self {
        AstNode::Literal {
            text: text.into(),
            type_tag: TypeTag::String,
        }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        AstNode::Variable { name: name.into() }
    }

    pub fn binary(op: BinOp, left: AstNode, right: AstNode) -> Self {
        AstNode::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn neg(operand: AstNode) -> Self {
        AstNode::UnaryOp {
            op: UnOp::Neg,
            operand: Box::new(operand),
        }
    }

    pub fn assign(target: impl Into<String>, value: AstNode) -> Self {
        AstNode::Assign {
            target: target.into(),
            value: Box::new(value),
        }
    }
}

/// Renders expressions in fully parenthesized infix form, e.g. `(2 + (3 * 4))`.
/// Statements render as a one-line summary.
impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstNode::Literal { text, .. } => f.write_str(text),
            AstNode::Variable { name } => f.write_str(name),
            AstNode::BinaryOp { op, left, right } => write!(f, "({} {} {})", left, op, right),
            AstNode::UnaryOp { op, operand } => write!(f, "{}{}", op, operand),
            AstNode::Assign { target, value } => write!(f, "{} = {}", target, value),
            AstNode::Return { value } => write!(f, "return {}", value),
            AstNode::If { condition, .. } => write!(f, "if {}", condition),
            AstNode::While { condition, .. } => write!(f, "while {}", condition),
            AstNode::FunctionDef {
                name, return_type, ..
            } => write!(f, "{} {}()", return_type, name),
        }
    }
}

/// Top-level program structure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub functions: Vec<AstNode>, // FunctionDef nodes, in source order
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }
}
