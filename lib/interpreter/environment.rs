use super::object::Value;
use std::{cell::RefCell, collections::HashMap, rc::Rc};

pub type Env = Rc<RefCell<Environment>>;

/// One frame of the lexical scope chain.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Env>,
}

impl Environment {
    pub fn new() -> Env {
        Rc::new(RefCell::new(Environment::default()))
    }

    pub fn new_enclosed_environment(outer: Env) -> Env {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: Some(outer),
        }))
    }

    /// Looks `name` up in this frame, then outward through enclosing frames.
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => match &self.outer {
                Some(outer) => outer.borrow().get(name),
                None => None,
            },
        }
    }

    /// Always binds in this frame; enclosing frames are never written through.
    pub fn set(&mut self, name: &str, value: Value) {
        self.store.insert(name.to_string(), value);
    }

    /// Drops the bindings of a finished frame when every remaining reference
    /// to it comes from a function bound in the frame itself and held nowhere
    /// else. Those functions and the frame keep each other alive, so without
    /// this the frame would never be freed.
    pub fn release(env: Env) {
        let internal = env
            .borrow()
            .store
            .values()
            .filter(|value| match value {
                Value::Function(function) => {
                    Rc::strong_count(function) == 1 && Rc::ptr_eq(&function.env, &env)
                }
                _ => false,
            })
            .count();

        if internal > 0 && Rc::strong_count(&env) == internal + 1 {
            let store = std::mem::take(&mut env.borrow_mut().store);
            drop(store);
        }
    }
}
