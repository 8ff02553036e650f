pub mod builtins;
pub mod environment;
pub mod evaluator;
pub mod object;

pub use environment::{Env, Environment};
pub use evaluator::{Evaluator, OutputSink};
pub use object::{Function, Table, Value};

use crate::{error::Error, Engine, Lexer, Parser};

/// Runs programs against one global environment, so bindings made by one
/// `execute` call are visible to the next.
pub struct Interpreter {
    evaluator: Evaluator,
    env: Env,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_output(Box::new(|line: &str| println!("{line}")))
    }

    pub fn with_output(output: OutputSink) -> Self {
        Self {
            evaluator: Evaluator::with_output(output),
            env: Environment::new(),
        }
    }

    pub fn execute(&mut self, input: &str) -> Result<Value, Error> {
        let mut parser = Parser::new(Lexer::new(input));
        let program = parser.parse_source()?;
        tracing::debug!(statements = program.statements.len(), "parsed program");

        Ok(self.evaluator.eval(&program, &self.env)?)
    }
}

impl Engine for Interpreter {
    fn run(&mut self, input: &str) -> anyhow::Result<String> {
        let result = self.execute(input)?;
        Ok(result.to_string())
    }
}

pub fn new_interpreter() -> Box<dyn Engine> {
    Box::new(Interpreter::new())
}

/// Parses and evaluates `input` in a fresh global environment, writing
/// `쓰기` output to stdout, and renders the final value.
pub fn execute(input: &str) -> Result<String, Error> {
    Ok(Interpreter::new().execute(input)?.to_string())
}

pub fn execute_with_output(input: &str, output: OutputSink) -> Result<String, Error> {
    Ok(Interpreter::with_output(output).execute(input)?.to_string())
}
