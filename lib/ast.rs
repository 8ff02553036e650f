use std::{fmt, rc::Rc};

use crate::{
    position::Range,
    token::{BRANCH, ELSE, FALSE, FUNCTION, RETURN, TABLE_MARKER, TRUE},
};

#[derive(Debug, PartialEq, Clone)]
pub struct Program {
    pub statements: Vec<Statement>,
    pub range: Range,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub range: Range,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Branch {
        predicate: Expression,
        consequence: Block,
        alternative: Option<Block>,
        range: Range,
    },
    Return {
        expression: Expression,
        range: Range,
    },
    Expression(Expression),
}

impl Statement {
    pub fn range(&self) -> Range {
        match self {
            Statement::Branch { range, .. } | Statement::Return { range, .. } => *range,
            Statement::Expression(expression) => expression.range(),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Identifier {
    pub name: String,
    pub range: Range,
}

impl Identifier {
    pub fn new(name: impl Into<String>, range: Range) -> Self {
        Self {
            name: name.into(),
            range,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PrefixOperator {
    Plus,
    Minus,
    Bang,
}

impl PrefixOperator {
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        match lexeme {
            "+" => Some(PrefixOperator::Plus),
            "-" => Some(PrefixOperator::Minus),
            "!" => Some(PrefixOperator::Bang),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InfixOperator {
    Plus,
    Minus,
    Asterisk,
    Slash,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
}

impl InfixOperator {
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        match lexeme {
            "+" => Some(InfixOperator::Plus),
            "-" => Some(InfixOperator::Minus),
            "*" => Some(InfixOperator::Asterisk),
            "/" => Some(InfixOperator::Slash),
            "==" => Some(InfixOperator::Eq),
            "!=" => Some(InfixOperator::NotEq),
            "<" => Some(InfixOperator::Lt),
            ">" => Some(InfixOperator::Gt),
            "<=" => Some(InfixOperator::LtEq),
            ">=" => Some(InfixOperator::GtEq),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Identifier(Identifier),
    Number {
        value: f64,
        range: Range,
    },
    Boolean {
        value: bool,
        range: Range,
    },
    String {
        value: String,
        range: Range,
    },
    Prefix {
        operator: PrefixOperator,
        operand: Box<Expression>,
        range: Range,
    },
    Infix {
        operator: InfixOperator,
        left: Box<Expression>,
        right: Box<Expression>,
        range: Range,
    },
    Function {
        parameters: Vec<Identifier>,
        body: Rc<Block>,
        range: Range,
    },
    Call {
        function: Box<Expression>,
        arguments: Vec<Expression>,
        range: Range,
    },
    Assignment {
        left: Identifier,
        right: Box<Expression>,
        range: Range,
    },
    List {
        elements: Vec<Expression>,
        range: Range,
    },
    Table {
        pairs: Vec<(Expression, Expression)>,
        range: Range,
    },
}

impl Expression {
    pub fn range(&self) -> Range {
        match self {
            Expression::Identifier(identifier) => identifier.range,
            Expression::Number { range, .. }
            | Expression::Boolean { range, .. }
            | Expression::String { range, .. }
            | Expression::Prefix { range, .. }
            | Expression::Infix { range, .. }
            | Expression::Function { range, .. }
            | Expression::Call { range, .. }
            | Expression::Assignment { range, .. }
            | Expression::List { range, .. }
            | Expression::Table { range, .. } => *range,
        }
    }

    /// Replaces the node's range, used to widen a parenthesized expression
    /// over its delimiters.
    pub fn with_range(mut self, new_range: Range) -> Self {
        match &mut self {
            Expression::Identifier(identifier) => identifier.range = new_range,
            Expression::Number { range, .. }
            | Expression::Boolean { range, .. }
            | Expression::String { range, .. }
            | Expression::Prefix { range, .. }
            | Expression::Infix { range, .. }
            | Expression::Function { range, .. }
            | Expression::Call { range, .. }
            | Expression::Assignment { range, .. }
            | Expression::List { range, .. }
            | Expression::Table { range, .. } => *range = new_range,
        }
        self
    }

    pub fn is_callable(&self) -> bool {
        matches!(
            self,
            Expression::Identifier(_) | Expression::Function { .. } | Expression::Call { .. }
        )
    }
}

/// Renders a number without a trailing fraction when it is integral.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

pub fn format_boolean(value: bool) -> &'static str {
    if value {
        TRUE
    } else {
        FALSE
    }
}

fn join<T: fmt::Display>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<String>>()
        .join(separator)
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", join(&self.statements, "\n"))
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.statements.is_empty() {
            write!(f, "{{ }}")
        } else {
            write!(f, "{{ {} }}", join(&self.statements, " "))
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Statement::Branch {
                predicate,
                consequence,
                alternative,
                ..
            } => {
                write!(f, "{BRANCH} {predicate} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " {ELSE} {alternative}")?;
                }
                Ok(())
            }
            Statement::Return { expression, .. } => write!(f, "{RETURN} {expression}"),
            Statement::Expression(expression) => write!(f, "{expression}"),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PrefixOperator::Plus => write!(f, "+"),
            PrefixOperator::Minus => write!(f, "-"),
            PrefixOperator::Bang => write!(f, "!"),
        }
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InfixOperator::Plus => write!(f, "+"),
            InfixOperator::Minus => write!(f, "-"),
            InfixOperator::Asterisk => write!(f, "*"),
            InfixOperator::Slash => write!(f, "/"),
            InfixOperator::Eq => write!(f, "=="),
            InfixOperator::NotEq => write!(f, "!="),
            InfixOperator::Lt => write!(f, "<"),
            InfixOperator::Gt => write!(f, ">"),
            InfixOperator::LtEq => write!(f, "<="),
            InfixOperator::GtEq => write!(f, ">="),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Identifier(identifier) => write!(f, "{identifier}"),
            Expression::Number { value, .. } => write!(f, "{}", format_number(*value)),
            Expression::Boolean { value, .. } => write!(f, "{}", format_boolean(*value)),
            Expression::String { value, .. } => write!(f, "'{value}'"),
            Expression::Prefix {
                operator, operand, ..
            } => write!(f, "({operator}{operand})"),
            Expression::Infix {
                operator,
                left,
                right,
                ..
            } => write!(f, "({left} {operator} {right})"),
            Expression::Function {
                parameters, body, ..
            } => write!(f, "{FUNCTION}({}) {body}", join(parameters, ", ")),
            Expression::Call {
                function,
                arguments,
                ..
            } => write!(f, "{function}({})", join(arguments, ", ")),
            Expression::Assignment { left, right, .. } => write!(f, "({left} = {right})"),
            Expression::List { elements, .. } => write!(f, "[{}]", join(elements, ", ")),
            Expression::Table { pairs, .. } => {
                let pairs = pairs
                    .iter()
                    .map(|(key, value)| format!("{key}: {value}"))
                    .collect::<Vec<String>>()
                    .join(", ");
                write!(f, "[{TABLE_MARKER}{pairs}]")
            }
        }
    }
}
