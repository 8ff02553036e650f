use super::object::Value;
use crate::{error::EvalError, position::Range};

type Result<T> = std::result::Result<T, EvalError>;

/// Receives everything the running program writes.
pub type Output<'a> = &'a mut dyn FnMut(&str);

pub type Builtin = fn(Output, Vec<Value>, Range) -> Result<Value>;

pub const LENGTH: &str = "길이";
pub const INSERT: &str = "넣기";
pub const REMOVE: &str = "빼기";
pub const FIND: &str = "찾기";
pub const WRITE: &str = "쓰기";

pub struct Builtins;

impl Builtins {
    pub fn get(name: &str) -> Option<Builtin> {
        match name {
            LENGTH => Some(Self::length_fn),
            INSERT => Some(Self::insert_fn),
            REMOVE => Some(Self::remove_fn),
            FIND => Some(Self::find_fn),
            WRITE => Some(Self::write_fn),
            _ => None,
        }
    }

    fn write_fn(output: Output, args: Vec<Value>, _: Range) -> Result<Value> {
        let line = args
            .iter()
            .map(|arg| arg.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        output(&line);
        Ok(Value::Empty)
    }

    fn length_fn(_: Output, args: Vec<Value>, range: Range) -> Result<Value> {
        expect_count(LENGTH, &args, &[1], range)?;

        match &args[0] {
            Value::String(value) => Ok(Value::Number(value.chars().count() as f64)),
            Value::List(values) => Ok(Value::Number(values.len() as f64)),
            Value::Table(table) => Ok(Value::Number(table.len() as f64)),
            other => Err(bad_argument(LENGTH, "string, list or table", other, range)),
        }
    }

    fn insert_fn(_: Output, args: Vec<Value>, range: Range) -> Result<Value> {
        expect_count(INSERT, &args, &[2, 3], range)?;

        let mut args = args.into_iter();
        match (args.next(), args.next(), args.next()) {
            (Some(Value::List(mut values)), Some(value), None) => {
                values.push(value);
                Ok(Value::List(values))
            }
            (Some(Value::List(mut values)), Some(index), Some(value)) => {
                let index = list_index(INSERT, &index, values.len() + 1, range)?;
                values.insert(index, value);
                Ok(Value::List(values))
            }
            (Some(Value::Table(mut table)), Some(key), Some(value)) => {
                table_key(INSERT, &key, range)?;
                table.insert(key, value);
                Ok(Value::Table(table))
            }
            (Some(Value::Table(_)), Some(_), None) => {
                Err(argument_count(INSERT, "3", 2, range))
            }
            (Some(other), ..) => Err(bad_argument(INSERT, "list or table", &other, range)),
            (None, ..) => Err(argument_count(INSERT, "2 or 3", 0, range)),
        }
    }

    fn remove_fn(_: Output, args: Vec<Value>, range: Range) -> Result<Value> {
        expect_count(REMOVE, &args, &[2], range)?;

        let mut args = args.into_iter();
        match (args.next(), args.next()) {
            (Some(Value::List(mut values)), Some(index)) => {
                let index = list_index(REMOVE, &index, values.len(), range)?;
                values.remove(index);
                Ok(Value::List(values))
            }
            (Some(Value::Table(mut table)), Some(key)) => {
                table_key(REMOVE, &key, range)?;
                match table.remove(&key) {
                    Some(_) => Ok(Value::Table(table)),
                    None => Err(missing_key(REMOVE, &key, range)),
                }
            }
            (Some(other), _) => Err(bad_argument(REMOVE, "list or table", &other, range)),
            _ => Err(argument_count(REMOVE, "2", 0, range)),
        }
    }

    fn find_fn(_: Output, args: Vec<Value>, range: Range) -> Result<Value> {
        expect_count(FIND, &args, &[2], range)?;

        match (&args[0], &args[1]) {
            (Value::List(values), index) => {
                let index = list_index(FIND, index, values.len(), range)?;
                Ok(values[index].clone())
            }
            (Value::Table(table), key) => {
                table_key(FIND, key, range)?;
                table
                    .get(key)
                    .cloned()
                    .ok_or_else(|| missing_key(FIND, key, range))
            }
            (other, _) => Err(bad_argument(FIND, "list or table", other, range)),
        }
    }
}

fn expect_count(name: &str, args: &[Value], allowed: &[usize], range: Range) -> Result<()> {
    if allowed.contains(&args.len()) {
        return Ok(());
    }
    let want = allowed
        .iter()
        .map(|count| count.to_string())
        .collect::<Vec<String>>()
        .join(" or ");
    Err(argument_count(name, &want, args.len(), range))
}

fn argument_count(name: &str, want: &str, got: usize, range: Range) -> EvalError {
    EvalError::BadBuiltinArgument {
        received: format!("{got} arguments"),
        expected: format!("{want} arguments for `{name}`"),
        range,
    }
}

fn bad_argument(name: &str, expected: &str, value: &Value, range: Range) -> EvalError {
    EvalError::BadBuiltinArgument {
        received: value.type_name().to_string(),
        expected: format!("{expected} for `{name}`"),
        range,
    }
}

fn missing_key(name: &str, key: &Value, range: Range) -> EvalError {
    EvalError::BadBuiltinArgument {
        received: format!("missing key `{key}`"),
        expected: format!("existing key for `{name}`"),
        range,
    }
}

fn table_key(name: &str, key: &Value, range: Range) -> Result<()> {
    if key.hashable() {
        Ok(())
    } else {
        Err(EvalError::BadTableKey {
            received: key.describe(),
            expected: format!("non-NaN number, string or boolean key for `{name}`"),
            range,
        })
    }
}

/// Converts `index` into a position below `upper`.
fn list_index(name: &str, index: &Value, upper: usize, range: Range) -> Result<usize> {
    match index {
        Value::Number(value) if value.fract() == 0.0 && *value >= 0.0 && *value < upper as f64 => {
            Ok(*value as usize)
        }
        Value::Number(value) => Err(EvalError::BadBuiltinArgument {
            received: format!("index {value}"),
            expected: format!("whole index below {upper} for `{name}`"),
            range,
        }),
        other => Err(bad_argument(name, "number index", other, range)),
    }
}
