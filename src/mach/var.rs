use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Every value is a double. Reading a name that was never stored
/// is an error, not zero.

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Var {
    vars: HashMap<Rc<str>, f64>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    /// Fresh memory holding only `names` bound to `values`.
    pub fn bind(names: &[Rc<str>], values: &[f64]) -> Var {
        debug_assert_eq!(names.len(), values.len());
        Var {
            vars: names.iter().cloned().zip(values.iter().copied()).collect(),
        }
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn contains(&self, var_name: &str) -> bool {
        self.vars.contains_key(var_name)
    }

    pub fn get(&self, var_name: &str) -> Option<f64> {
        self.vars.get(var_name).copied()
    }

    pub fn fetch(&self, var_name: &str) -> Result<f64> {
        match self.vars.get(var_name) {
            Some(val) => Ok(*val),
            None => Err(error!(UndefinedVariable; &format!("VAR NOT FOUND: {}", var_name))),
        }
    }

    pub fn store(&mut self, var_name: &str, value: f64) -> Result<()> {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                if self.vars.len() > u16::max_value() as usize {
                    return Err(error!(OutOfMemory));
                }
                self.vars.insert(var_name.into(), value);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_store_fetch() {
        let mut v = Var::new();
        v.store("a", 1.5).unwrap();
        v.store("a", 2.5).unwrap();
        assert_eq!(v.fetch("a").unwrap(), 2.5);
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn test_undefined() {
        let v = Var::new();
        let e = v.fetch("zz").unwrap_err();
        assert!(e.is(ErrorCode::UndefinedVariable));
        assert_eq!(e.to_string(), "UNDEFINED VARIABLE; VAR NOT FOUND: zz");
    }

    #[test]
    fn test_bind() {
        let v = Var::bind(&["x".into(), "y".into()], &[3.0, 4.0]);
        assert_eq!(v.get("x"), Some(3.0));
        assert_eq!(v.get("y"), Some(4.0));
        assert!(!v.contains("z"));
    }
}
