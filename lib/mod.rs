pub mod ast;
pub mod binding_power;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod position;
pub mod token;

mod engine;

pub use engine::Engine;
pub use error::{Error, EvalError, SyntaxError};
pub use interpreter::{execute, execute_with_output, new_interpreter, Interpreter, Value};
pub use lexer::Lexer;
pub use parser::Parser;
pub use position::{Position, Range};
