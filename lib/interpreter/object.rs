use core::fmt;
use std::rc::Rc;

use super::environment::Env;
use crate::{
    ast::{format_boolean, format_number, Block, Identifier},
    token::{FUNCTION, TABLE_MARKER},
};

#[derive(Debug, Clone)]
pub enum Value {
    Number(f64),
    String(String),
    Boolean(bool),
    Function(Rc<Function>),
    Empty,
    List(Vec<Value>),
    Table(Table),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Boolean(_) => "boolean",
            Value::Function(_) => "function",
            Value::Empty => "empty",
            Value::List(_) => "list",
            Value::Table(_) => "table",
        }
    }

    /// Whether the value may be used as a table key. NaN is excluded since
    /// it never compares equal to itself and could not be found again.
    pub fn hashable(&self) -> bool {
        match self {
            Value::Number(value) => !value.is_nan(),
            Value::String(_) | Value::Boolean(_) => true,
            _ => false,
        }
    }

    /// Type name for error reports, with NaN spelled out so a rejected
    /// number key doesn't read as a plain `number`.
    pub fn describe(&self) -> String {
        match self {
            Value::Number(value) if value.is_nan() => self.to_string(),
            _ => self.type_name().to_string(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(left), Value::Number(right)) => left == right,
            (Value::String(left), Value::String(right)) => left == right,
            (Value::Boolean(left), Value::Boolean(right)) => left == right,
            (Value::Function(left), Value::Function(right)) => Rc::ptr_eq(left, right),
            (Value::Empty, Value::Empty) => true,
            (Value::List(left), Value::List(right)) => left == right,
            (Value::Table(left), Value::Table(right)) => left == right,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Number(value) => write!(f, "{}", format_number(*value)),
            Value::String(value) => write!(f, "{}", value),
            Value::Boolean(value) => write!(f, "{}", format_boolean(*value)),
            Value::Function(function) => write!(f, "{}", function),
            Value::Empty => Ok(()),
            Value::List(values) => {
                let values: Vec<String> = values.iter().map(|v| format!("{}", v)).collect();
                write!(f, "[{}]", values.join(", "))
            }
            Value::Table(table) => write!(f, "{}", table),
        }
    }
}

/// A closure: parameters and body together with the environment that was
/// active where the function literal was evaluated.
pub struct Function {
    pub parameters: Vec<Identifier>,
    pub body: Rc<Block>,
    pub env: Env,
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Function")
            .field("parameters", &self.parameters)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let parameters: Vec<&str> = self.parameters.iter().map(|p| p.name.as_str()).collect();
        write!(f, "{FUNCTION}({}) {}", parameters.join(", "), self.body)
    }
}

/// Key/value pairs in insertion order. Re-inserting an existing key replaces
/// the value but keeps the key where it was first inserted.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Table {
    entries: Vec<(Value, Value)>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: Value, value: Value) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn remove(&mut self, key: &Value) -> Option<Value> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let pairs = self
            .entries
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "[{TABLE_MARKER}{pairs}]")
    }
}
