use super::function::Body;
use super::{Frame, Runtime, Var};
use crate::error;
use crate::lang::{Cursor, Error};

type Result<T> = std::result::Result<T, Error>;

const TRUE: f64 = -1.0;
const FALSE: f64 = 0.0;

fn truth(b: bool) -> f64 {
    if b {
        TRUE
    } else {
        FALSE
    }
}

// Precedence, loosest first:
// OR, AND, NOT, relations, + -, * / \, ^, then signed factors.
// Each level only ever calls the next tighter one, except ^ which
// recurses into itself for its right operand.

impl Runtime {
    /// Evaluates the expression at the cursor.
    pub fn parse_expression(&mut self) -> Result<f64> {
        let mut index = 0;
        while let Some(hook) = self.hooks.expression(index) {
            if let Some(value) = hook(self)? {
                return Ok(value);
            }
            index += 1;
        }
        self.parse_disjunction()
    }

    fn parse_disjunction(&mut self) -> Result<f64> {
        let mut lhs = self.parse_conjunction()?;
        while self.frame.cursor.match_nocase("or") {
            let rhs = self.parse_conjunction()?;
            lhs = truth(lhs != 0.0 || rhs != 0.0);
        }
        Ok(lhs)
    }

    fn parse_conjunction(&mut self) -> Result<f64> {
        let mut lhs = self.parse_negation()?;
        while self.frame.cursor.match_nocase("and") {
            let rhs = self.parse_negation()?;
            lhs = truth(lhs != 0.0 && rhs != 0.0);
        }
        Ok(lhs)
    }

    fn parse_negation(&mut self) -> Result<f64> {
        if self.frame.cursor.match_nocase("not") {
            Ok(truth(self.parse_comparison()? == 0.0))
        } else {
            self.parse_comparison()
        }
    }

    fn parse_comparison(&mut self) -> Result<f64> {
        let lhs = self.parse_arithmetic()?;
        match self.frame.cursor.match_relation() {
            Some(op) => {
                let rhs = self.parse_arithmetic()?;
                Ok(truth(op.compare(lhs, rhs)))
            }
            None => Ok(lhs),
        }
    }

    /// Sums and differences only. Used where a relation would be
    /// ambiguous, like the bounds of FOR.
    pub fn parse_arithmetic(&mut self) -> Result<f64> {
        let mut lhs = self.parse_term()?;
        while let Some(op) = self.frame.cursor.match_add_sub() {
            let rhs = self.parse_term()?;
            lhs = op.apply(lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_term(&mut self) -> Result<f64> {
        let mut lhs = self.parse_power()?;
        while let Some(op) = self.frame.cursor.match_mul_div() {
            let rhs = self.parse_power()?;
            lhs = op.apply(lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_power(&mut self) -> Result<f64> {
        let base = self.parse_factor()?;
        if self.frame.cursor.match_literal("^") {
            Ok(base.powf(self.parse_power()?))
        } else {
            Ok(base)
        }
    }

    fn parse_factor(&mut self) -> Result<f64> {
        let signum = if self.frame.cursor.match_literal("-") {
            -1.0
        } else {
            self.frame.cursor.match_literal("+");
            1.0
        };
        if let Some(n) = self.frame.cursor.match_number() {
            return Ok(n * signum);
        }
        if let Some(name) = self.frame.cursor.match_varname() {
            if self.functions.contains(&name) {
                let args = self.parse_args()?;
                return Ok(self.call_fn(&name, &args)? * signum);
            }
            return Ok(self.frame.vars.fetch(&name)? * signum);
        }
        if self.frame.cursor.match_literal("(") {
            let value = self.parse_expression()?;
            if self.frame.cursor.match_literal(")") {
                return Ok(value * signum);
            }
            return Err(error!(SyntaxError; "MISSING ')'"));
        }
        Err(error!(SyntaxError; "EXPRESSION EXPECTED"))
    }

    /// Parenthesized arguments. No parentheses at all means no arguments.
    fn parse_args(&mut self) -> Result<Vec<f64>> {
        let mut args = vec![];
        if !self.frame.cursor.match_literal("(") {
            return Ok(args);
        }
        if self.frame.cursor.match_literal(")") {
            return Ok(args);
        }
        args.push(self.parse_expression()?);
        while self.frame.cursor.match_literal(",") {
            args.push(self.parse_expression()?);
        }
        if self.frame.cursor.match_literal(")") {
            Ok(args)
        } else {
            Err(error!(SyntaxError; "MISSING ')'"))
        }
    }

    /// Calls a builtin, native, or user function by name.
    pub fn call_fn(&mut self, name: &str, args: &[f64]) -> Result<f64> {
        let function = match self.functions.get(name) {
            Some(function) => function.clone(),
            None => {
                return Err(error!(UndefinedUserFunction; &format!("FUNCTION NOT FOUND: {}", name)))
            }
        };
        if args.len() != function.arity() {
            return Err(error!(IllegalFunctionCall; "BAD ARGUMENT COUNT"));
        }
        match function.body() {
            Body::Builtin(builtin) => Ok(builtin.call(args, &mut self.rng)),
            Body::Native(native) => Ok(native(args)),
            Body::User(body) => {
                let frame = Frame::new(Cursor::new(body.clone()), Var::bind(function.params(), args));
                self.with_frame(frame, |runtime| {
                    let value = runtime.parse_expression()?;
                    if runtime.frame.cursor.match_eol() {
                        Ok(value)
                    } else {
                        Err(error!(SyntaxError; "END OF FUNCTION EXPECTED"))
                    }
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn eval(s: &str) -> Result<f64> {
        let mut r = Runtime::default();
        r.frame.cursor = Cursor::new(s);
        r.parse_expression()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("1+2*3").unwrap(), 7.0);
        assert_eq!(eval("(1+2)*3").unwrap(), 9.0);
        assert_eq!(eval("10-4-3").unwrap(), 3.0);
        assert_eq!(eval("2*3^2").unwrap(), 18.0);
        assert_eq!(eval("1+1=2").unwrap(), -1.0);
    }

    #[test]
    fn test_power_right_assoc() {
        assert_eq!(eval("2^3^2").unwrap(), 512.0);
        assert_eq!(eval("(2^3)^2").unwrap(), 64.0);
    }

    #[test]
    fn test_sign_binds_to_factor() {
        assert_eq!(eval("-2^2").unwrap(), 4.0);
        assert_eq!(eval("-(2^2)").unwrap(), -4.0);
        assert_eq!(eval("3*-2").unwrap(), -6.0);
        assert_eq!(eval("+5").unwrap(), 5.0);
    }

    #[test]
    fn test_int_division() {
        assert_eq!(eval("7\\2").unwrap(), 3.0);
        assert_eq!(eval("-7\\2").unwrap(), -4.0);
        assert_eq!(eval("7/2").unwrap(), 3.5);
    }

    #[test]
    fn test_truth_values() {
        for s in &["1<2", "2<=2", "3>2", "2>=2", "1<>2", "2=2", "1 and 2", "0 or 5", "not 0"] {
            assert_eq!(eval(s).unwrap(), -1.0, "{}", s);
        }
        for s in &["2<1", "3<=2", "2>3", "1>=2", "2<>2", "1=2", "1 and 0", "0 or 0", "not 7"] {
            assert_eq!(eval(s).unwrap(), 0.0, "{}", s);
        }
    }

    #[test]
    fn test_arithmetic_passes_through_logic() {
        assert_eq!(eval("42").unwrap(), 42.0);
        assert_eq!(eval("1+2 or 0").unwrap(), -1.0);
    }

    #[test]
    fn test_not_binds_looser_than_relation() {
        assert_eq!(eval("not 1=2").unwrap(), -1.0);
        assert_eq!(eval("not 1=1 or 1=1").unwrap(), -1.0);
    }

    #[test]
    fn test_errors() {
        let e = eval("a+1").unwrap_err();
        assert!(e.is(ErrorCode::UndefinedVariable));
        let e = eval("(1+2").unwrap_err();
        assert_eq!(e.to_string(), "SYNTAX ERROR; MISSING ')'");
        let e = eval("*").unwrap_err();
        assert_eq!(e.to_string(), "SYNTAX ERROR; EXPRESSION EXPECTED");
        let e = eval("sin(1,2)").unwrap_err();
        assert!(e.is(ErrorCode::IllegalFunctionCall));
    }

    #[test]
    fn test_builtin_calls() {
        assert_eq!(eval("abs(-3)+max(1,2)").unwrap(), 5.0);
        assert_eq!(eval("pi").unwrap(), std::f64::consts::PI);
        assert_eq!(eval("pi()").unwrap(), std::f64::consts::PI);
        assert_eq!(eval("int(-2.5)").unwrap(), -2.0);
        assert_eq!(eval("iif(1>2, 10, 20)").unwrap(), 20.0);
    }

    #[test]
    fn test_user_function_frame() {
        let mut r = Runtime::default();
        r.functions
            .define("sq", vec!["x".into()], "x*x")
            .unwrap();
        r.frame.vars.store("x", 99.0).unwrap();
        r.frame.cursor = Cursor::new("sq(4)+x");
        assert_eq!(r.parse_expression().unwrap(), 115.0);
        assert_eq!(r.frame.vars.get("x"), Some(99.0));
        assert!(r.frames.is_empty());
    }

    #[test]
    fn test_user_function_restores_on_error() {
        let mut r = Runtime::default();
        r.functions.define("f", vec!["x".into()], "y").unwrap();
        r.frame.vars.store("y", 1.0).unwrap();
        r.frame.cursor = Cursor::new("1 + f(2)");
        let e = r.parse_expression().unwrap_err();
        assert!(e.is(ErrorCode::UndefinedVariable));
        assert_eq!(r.frame.cursor.line().as_ref(), "1 + f(2)");
        assert_eq!(r.frame.vars.get("y"), Some(1.0));
        assert!(r.frames.is_empty());
    }

    #[test]
    fn test_runaway_recursion() {
        let mut r = Runtime::default();
        r.functions.define("f", vec!["x".into()], "f(x+1)").unwrap();
        r.frame.cursor = Cursor::new("f(1)");
        let e = r.parse_expression().unwrap_err();
        assert!(e.is(ErrorCode::OutOfMemory));
        assert!(r.frames.is_empty());
        assert_eq!(r.frame.cursor.line().as_ref(), "f(1)");
    }
}
