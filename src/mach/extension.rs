use super::Runtime;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

pub type StatementHook = Rc<dyn Fn(&mut Runtime) -> Result<()>>;
pub type ExpressionHook = Rc<dyn Fn(&mut Runtime) -> Result<Option<f64>>>;

/// ## Extension hooks
///
/// Statements are found by keyword before the built-in statements.
/// Expression hooks run in order at the start of every expression;
/// the first to return a value wins, otherwise normal parsing continues.

#[derive(Default)]
pub struct Hooks {
    statements: HashMap<String, StatementHook>,
    expressions: Vec<ExpressionHook>,
}

impl Hooks {
    pub fn statement(&self, keyword: &str) -> Option<StatementHook> {
        self.statements.get(keyword).cloned()
    }

    pub fn expression(&self, index: usize) -> Option<ExpressionHook> {
        self.expressions.get(index).cloned()
    }
}

impl Runtime {
    pub fn add_statement<F>(&mut self, keyword: &str, hook: F)
    where
        F: Fn(&mut Runtime) -> Result<()> + 'static,
    {
        self.hooks
            .statements
            .insert(keyword.to_lowercase(), Rc::new(hook));
    }

    pub fn add_expression<F>(&mut self, hook: F)
    where
        F: Fn(&mut Runtime) -> Result<Option<f64>> + 'static,
    {
        self.hooks.expressions.push(Rc::new(hook));
    }

    /// Adds a native function callable from BASIC. Names already taken,
    /// including builtins, are refused.
    pub fn add_function<F>(&mut self, name: &str, arity: usize, f: F) -> Result<()>
    where
        F: Fn(&[f64]) -> f64 + 'static,
    {
        self.functions.define_native(&name.to_lowercase(), arity, f)
    }
}
