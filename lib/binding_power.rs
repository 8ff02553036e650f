use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::token::{Token, TokenKind};

/// How tightly an operator binds to the expression on its left and right.
///
/// The relation between the two numbers decides associativity: when `right`
/// is lower than `left` a recursive parse at the same level re-enters and the
/// operator associates to the right; when it is higher, chained operators of
/// the same class nest to the left.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct BindingPower {
    pub left: u8,
    pub right: u8,
}

impl BindingPower {
    pub const LOWEST: Self = Self::new(0, 1);
    pub const ASSIGNMENT: Self = Self::new(31, 30);
    pub const COMPARISON: Self = Self::new(41, 40);
    pub const SUMMATIVE: Self = Self::new(50, 51);
    pub const PRODUCTIVE: Self = Self::new(60, 61);
    pub const PREFIX: Self = Self::new(70, 71);
    pub const CALL: Self = Self::new(80, 81);

    const fn new(left: u8, right: u8) -> Self {
        Self { left, right }
    }

    /// Binding power of `token` when it shows up after a complete expression.
    /// Anything that is not an infix or call operator maps to `LOWEST`.
    pub fn of(token: &Token) -> Self {
        match token.kind {
            TokenKind::Operator | TokenKind::GroupDelimiter => Self::of_lexeme(&token.value),
            _ => Self::LOWEST,
        }
    }

    pub fn of_lexeme(lexeme: &str) -> Self {
        TABLE.get(lexeme).copied().unwrap_or(Self::LOWEST)
    }
}

lazy_static! {
    static ref TABLE: HashMap<&'static str, BindingPower> = {
        let mut table = HashMap::new();
        table.insert("=", BindingPower::ASSIGNMENT);
        for lexeme in ["==", "!=", "<", ">", "<=", ">="] {
            table.insert(lexeme, BindingPower::COMPARISON);
        }
        table.insert("+", BindingPower::SUMMATIVE);
        table.insert("-", BindingPower::SUMMATIVE);
        table.insert("*", BindingPower::PRODUCTIVE);
        table.insert("/", BindingPower::PRODUCTIVE);
        table.insert("(", BindingPower::CALL);
        table
    };
}
