use std::rc::Rc;

use super::{
    builtins::Builtins,
    environment::{Env, Environment},
    object::{Function, Table, Value},
};
use crate::{
    ast::{Block, Expression, Identifier, InfixOperator, PrefixOperator, Program, Statement},
    error::EvalError,
    position::Range,
    token::RETURN,
};

type Result<T> = std::result::Result<T, EvalError>;

/// Callback receiving one pre-joined line per `쓰기` call.
pub type OutputSink = Box<dyn FnMut(&str)>;

/// Outcome of evaluating a statement. A `Return` stops the remaining
/// statements of every enclosing block until a function call unwraps it.
#[derive(Debug, PartialEq)]
enum Signal {
    Value(Value),
    Return { value: Value, range: Range },
}

pub struct Evaluator {
    output: OutputSink,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self::with_output(Box::new(|line: &str| println!("{line}")))
    }

    pub fn with_output(output: OutputSink) -> Self {
        Self { output }
    }

    /// Evaluates `program` directly in `env`, so top-level assignments
    /// stay visible to later calls with the same environment.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn eval(&mut self, program: &Program, env: &Env) -> Result<Value> {
        match self.eval_statements(&program.statements, env)? {
            Signal::Value(value) => Ok(value),
            Signal::Return { value, range } => Err(EvalError::TopLevelReturn {
                received: format!("{RETURN} {value}"),
                expected: "enclosing function call".to_string(),
                range,
            }),
        }
    }

    fn eval_statements(&mut self, statements: &[Statement], env: &Env) -> Result<Signal> {
        let mut result = Value::Empty;
        for statement in statements {
            match self.eval_statement(statement, env)? {
                Signal::Value(value) => result = value,
                signal @ Signal::Return { .. } => return Ok(signal),
            }
        }
        Ok(Signal::Value(result))
    }

    fn eval_statement(&mut self, statement: &Statement, env: &Env) -> Result<Signal> {
        match statement {
            Statement::Expression(expression) => {
                Ok(Signal::Value(self.eval_expression(expression, env)?))
            }
            Statement::Return { expression, range } => Ok(Signal::Return {
                value: self.eval_expression(expression, env)?,
                range: *range,
            }),
            Statement::Branch {
                predicate,
                consequence,
                alternative,
                ..
            } => self.eval_branch_statement(predicate, consequence, alternative.as_ref(), env),
        }
    }

    fn eval_branch_statement(
        &mut self,
        predicate: &Expression,
        consequence: &Block,
        alternative: Option<&Block>,
        env: &Env,
    ) -> Result<Signal> {
        let condition = match self.eval_expression(predicate, env)? {
            Value::Boolean(condition) => condition,
            other => {
                return Err(EvalError::BadPredicate {
                    received: other.type_name().to_string(),
                    expected: "boolean".to_string(),
                    range: predicate.range(),
                })
            }
        };

        if condition {
            self.eval_block(consequence, env)
        } else if let Some(alternative) = alternative {
            self.eval_block(alternative, env)
        } else {
            Ok(Signal::Value(Value::Empty))
        }
    }

    /// Runs `block` in a fresh child frame so its bindings don't leak outward.
    fn eval_block(&mut self, block: &Block, env: &Env) -> Result<Signal> {
        let block_env = Environment::new_enclosed_environment(env.clone());
        let signal = self.eval_statements(&block.statements, &block_env);
        Environment::release(block_env);
        signal
    }

    fn eval_expression(&mut self, expression: &Expression, env: &Env) -> Result<Value> {
        let value = match expression {
            Expression::Number { value, .. } => Value::Number(*value),
            Expression::String { value, .. } => Value::String(value.clone()),
            Expression::Boolean { value, .. } => Value::Boolean(*value),
            Expression::Identifier(identifier) => self.eval_identifier(identifier, env)?,
            Expression::Prefix {
                operator, operand, ..
            } => {
                let value = self.eval_expression(operand, env)?;
                self.eval_prefix_expression(*operator, value, operand.range())?
            }
            Expression::Infix {
                operator,
                left,
                right,
                ..
            } => {
                let left_value = self.eval_expression(left, env)?;
                let right_value = self.eval_expression(right, env)?;
                self.eval_infix_expression(
                    *operator,
                    (left_value, left.range()),
                    (right_value, right.range()),
                )?
            }
            Expression::Assignment { left, right, .. } => {
                let value = self.eval_expression(right, env)?;
                env.borrow_mut().set(&left.name, value.clone());
                value
            }
            Expression::Function {
                parameters, body, ..
            } => Value::Function(Rc::new(Function {
                parameters: parameters.clone(),
                body: Rc::clone(body),
                env: env.clone(),
            })),
            Expression::Call {
                function,
                arguments,
                range,
            } => self.eval_call_expression(function, arguments, *range, env)?,
            Expression::List { elements, .. } => Value::List(
                elements
                    .iter()
                    .map(|element| self.eval_expression(element, env))
                    .collect::<Result<Vec<Value>>>()?,
            ),
            Expression::Table { pairs, .. } => self.eval_table_literal(pairs, env)?,
        };
        Ok(value)
    }

    fn eval_identifier(&mut self, identifier: &Identifier, env: &Env) -> Result<Value> {
        match env.borrow().get(&identifier.name) {
            Some(value) => Ok(value),
            None => Err(EvalError::BadIdentifier {
                received: identifier.name.clone(),
                expected: "bound identifier".to_string(),
                range: identifier.range,
            }),
        }
    }

    fn eval_table_literal(&mut self, pairs: &[(Expression, Expression)], env: &Env) -> Result<Value> {
        let mut table = Table::new();
        for (key_expression, value_expression) in pairs {
            let key = self.eval_expression(key_expression, env)?;
            if !key.hashable() {
                return Err(EvalError::BadTableKey {
                    received: key.describe(),
                    expected: "non-NaN number, string or boolean".to_string(),
                    range: key_expression.range(),
                });
            }
            let value = self.eval_expression(value_expression, env)?;
            table.insert(key, value);
        }
        Ok(Value::Table(table))
    }

    fn eval_call_expression(
        &mut self,
        function: &Expression,
        arguments: &[Expression],
        range: Range,
        env: &Env,
    ) -> Result<Value> {
        if let Expression::Identifier(identifier) = function {
            if let Some(builtin) = Builtins::get(&identifier.name) {
                let args = self.eval_arguments(arguments, env)?;
                tracing::debug!(name = %identifier.name, args = args.len(), "calling builtin");
                return builtin(&mut *self.output, args, range);
            }
        }

        let callee = self.eval_expression(function, env)?;
        let args = self.eval_arguments(arguments, env)?;

        match callee {
            Value::Function(function) => self.apply_function(function, args),
            other => Err(EvalError::BadCallTarget {
                received: other.type_name().to_string(),
                expected: "function".to_string(),
                range: function.range(),
            }),
        }
    }

    fn eval_arguments(&mut self, arguments: &[Expression], env: &Env) -> Result<Vec<Value>> {
        arguments
            .iter()
            .map(|argument| self.eval_expression(argument, env))
            .collect()
    }

    /// Binds parameters positionally in a frame enclosed by the function's
    /// captured environment. Missing arguments bind `Empty`; extra ones are dropped.
    fn apply_function(&mut self, function: Rc<Function>, args: Vec<Value>) -> Result<Value> {
        let call_env = Environment::new_enclosed_environment(function.env.clone());
        {
            let mut frame = call_env.borrow_mut();
            let mut args = args.into_iter();
            for parameter in &function.parameters {
                frame.set(&parameter.name, args.next().unwrap_or(Value::Empty));
            }
        }
        tracing::trace!(parameters = function.parameters.len(), "entering function");

        let signal = self.eval_statements(&function.body.statements, &call_env);
        Environment::release(call_env);

        match signal? {
            Signal::Value(value) | Signal::Return { value, .. } => Ok(value),
        }
    }

    fn eval_prefix_expression(
        &mut self,
        operator: PrefixOperator,
        operand: Value,
        range: Range,
    ) -> Result<Value> {
        match (operator, operand) {
            (PrefixOperator::Plus, Value::Number(value)) => Ok(Value::Number(value)),
            (PrefixOperator::Minus, Value::Number(value)) => Ok(Value::Number(-value)),
            (PrefixOperator::Bang, Value::Boolean(value)) => Ok(Value::Boolean(!value)),
            (PrefixOperator::Bang, other) => Err(bad_operand(&other, "boolean", range)),
            (_, other) => Err(bad_operand(&other, "number", range)),
        }
    }

    fn eval_infix_expression(
        &mut self,
        operator: InfixOperator,
        left: (Value, Range),
        right: (Value, Range),
    ) -> Result<Value> {
        match operator {
            InfixOperator::Plus
            | InfixOperator::Minus
            | InfixOperator::Asterisk
            | InfixOperator::Slash => {
                let (left, right) = match (left, right) {
                    ((Value::Number(left), _), (Value::Number(right), _)) => (left, right),
                    ((Value::Number(_), _), (other, range)) | ((other, range), _) => {
                        return Err(bad_operand(&other, "number", range))
                    }
                };
                Ok(Value::Number(match operator {
                    InfixOperator::Plus => left + right,
                    InfixOperator::Minus => left - right,
                    InfixOperator::Asterisk => left * right,
                    _ => left / right,
                }))
            }
            InfixOperator::Eq | InfixOperator::NotEq => {
                let equal = match (left, right) {
                    ((Value::Number(left), _), (Value::Number(right), _)) => left == right,
                    ((Value::String(left), _), (Value::String(right), _)) => left == right,
                    ((Value::Boolean(left), _), (Value::Boolean(right), _)) => left == right,
                    (
                        (left @ (Value::Number(_) | Value::String(_) | Value::Boolean(_)), _),
                        (other, range),
                    ) => {
                        return Err(bad_operand(&other, left.type_name(), range))
                    }
                    ((other, range), _) => {
                        return Err(bad_operand(&other, "number, string or boolean", range))
                    }
                };
                Ok(Value::Boolean(if operator == InfixOperator::Eq {
                    equal
                } else {
                    !equal
                }))
            }
            InfixOperator::Lt | InfixOperator::Gt | InfixOperator::LtEq | InfixOperator::GtEq => {
                let ordering = match (left, right) {
                    ((Value::Number(left), _), (Value::Number(right), _)) => left.partial_cmp(&right),
                    ((Value::String(left), _), (Value::String(right), _)) => Some(left.cmp(&right)),
                    ((left @ (Value::Number(_) | Value::String(_)), _), (other, range)) => {
                        return Err(bad_operand(&other, left.type_name(), range))
                    }
                    ((other, range), _) => {
                        return Err(bad_operand(&other, "number or string", range))
                    }
                };
                // NaN compares false both ways.
                Ok(Value::Boolean(ordering.is_some_and(|ordering| match operator {
                    InfixOperator::Lt => ordering.is_lt(),
                    InfixOperator::Gt => ordering.is_gt(),
                    InfixOperator::LtEq => ordering.is_le(),
                    _ => ordering.is_ge(),
                })))
            }
        }
    }
}

fn bad_operand(value: &Value, expected: &str, range: Range) -> EvalError {
    EvalError::BadOperand {
        received: value.type_name().to_string(),
        expected: expected.to_string(),
        range,
    }
}
