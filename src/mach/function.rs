use crate::error;
use crate::lang::Error;
use rand::rngs::StdRng;
use rand::Rng;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Native function added by an embedder. Arity is checked before the call.
pub type Native = Rc<dyn Fn(&[f64]) -> f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Builtin {
    Timer,
    Rnd,
    Pi,
    Int,
    Abs,
    Sqr,
    Sin,
    Cos,
    Rad,
    Deg,
    Min,
    Max,
    Mod,
    Hypot2,
    Hypot3,
    Iif,
}

impl Builtin {
    pub const ALL: [Builtin; 16] = [
        Builtin::Timer,
        Builtin::Rnd,
        Builtin::Pi,
        Builtin::Int,
        Builtin::Abs,
        Builtin::Sqr,
        Builtin::Sin,
        Builtin::Cos,
        Builtin::Rad,
        Builtin::Deg,
        Builtin::Min,
        Builtin::Max,
        Builtin::Mod,
        Builtin::Hypot2,
        Builtin::Hypot3,
        Builtin::Iif,
    ];

    pub fn name(self) -> &'static str {
        use Builtin::*;
        match self {
            Timer => "timer",
            Rnd => "rnd",
            Pi => "pi",
            Int => "int",
            Abs => "abs",
            Sqr => "sqr",
            Sin => "sin",
            Cos => "cos",
            Rad => "rad",
            Deg => "deg",
            Min => "min",
            Max => "max",
            Mod => "mod",
            Hypot2 => "hypot2",
            Hypot3 => "hypot3",
            Iif => "iif",
        }
    }

    pub fn params(self) -> &'static [&'static str] {
        use Builtin::*;
        match self {
            Timer | Rnd | Pi => &[],
            Int | Abs | Sqr | Sin | Cos | Rad | Deg => &["n"],
            Min | Max | Mod | Hypot2 => &["a", "b"],
            Hypot3 | Iif => &["a", "b", "c"],
        }
    }

    pub fn call(self, args: &[f64], rng: &mut StdRng) -> f64 {
        debug_assert_eq!(args.len(), self.params().len());
        use Builtin::*;
        match self {
            Timer => chrono::Utc::now().timestamp_millis() as f64 / 1000.0,
            Rnd => rng.gen::<f64>(),
            Pi => std::f64::consts::PI,
            Int => args[0].trunc(),
            Abs => args[0].abs(),
            Sqr => args[0].sqrt(),
            Sin => args[0].sin(),
            Cos => args[0].cos(),
            Rad => args[0].to_radians(),
            Deg => args[0].to_degrees(),
            Min => args[0].min(args[1]),
            Max => args[0].max(args[1]),
            Mod => args[0] % args[1],
            Hypot2 => (args[0] * args[0] + args[1] * args[1]).sqrt(),
            Hypot3 => (args[0] * args[0] + args[1] * args[1] + args[2] * args[2]).sqrt(),
            Iif => {
                if args[0] != 0.0 {
                    args[1]
                } else {
                    args[2]
                }
            }
        }
    }
}

#[derive(Clone)]
pub enum Body {
    Builtin(Builtin),
    Native(Native),
    /// Unparsed expression text, evaluated fresh on every call.
    User(Rc<str>),
}

impl std::fmt::Debug for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Body::Builtin(b) => write!(f, "Builtin({:?})", b),
            Body::Native(_) => write!(f, "Native"),
            Body::User(s) => write!(f, "User({:?})", s),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Function {
    params: Rc<[Rc<str>]>,
    body: Body,
}

impl Function {
    pub fn params(&self) -> &[Rc<str>] {
        &self.params
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn is_user(&self) -> bool {
        matches!(self.body, Body::User(_))
    }
}

/// ## Function registry
///
/// Builtins are present from construction. A name can be defined once;
/// defining it again, or defining a builtin name, is an error.

#[derive(Debug)]
pub struct Functions {
    map: HashMap<Rc<str>, Function>,
}

impl Default for Functions {
    fn default() -> Functions {
        let map: HashMap<Rc<str>, Function> = Builtin::ALL
            .iter()
            .map(|&b| {
                let params: Vec<Rc<str>> = b.params().iter().map(|&p| p.into()).collect();
                let function = Function {
                    params: params.into(),
                    body: Body::Builtin(b),
                };
                (b.name().into(), function)
            })
            .collect();
        Functions { map }
    }
}

impl Functions {
    pub fn new() -> Functions {
        Functions::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Function> {
        self.map.get(name)
    }

    fn insert(&mut self, name: &str, function: Function) -> Result<()> {
        if self.map.contains_key(name) {
            return Err(error!(DuplicateDefinition; &format!("DUPLICATE FUNCTION: {}", name)));
        }
        self.map.insert(name.into(), function);
        Ok(())
    }

    pub fn define(&mut self, name: &str, params: Vec<Rc<str>>, body: &str) -> Result<()> {
        self.insert(
            name,
            Function {
                params: params.into(),
                body: Body::User(body.into()),
            },
        )
    }

    pub fn define_native<F>(&mut self, name: &str, arity: usize, native: F) -> Result<()>
    where
        F: Fn(&[f64]) -> f64 + 'static,
    {
        let params: Vec<Rc<str>> = (0..arity).map(|i| format!("arg{}", i).into()).collect();
        self.insert(
            name,
            Function {
                params: params.into(),
                body: Body::Native(Rc::new(native)),
            },
        )
    }

    /// Removes every DEF FN, keeping builtins and natives.
    pub fn forget_user(&mut self) {
        self.map.retain(|_, f| !f.is_user());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;
    use rand::SeedableRng;

    fn call(b: Builtin, args: &[f64]) -> f64 {
        b.call(args, &mut StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_builtins_registered() {
        let f = Functions::new();
        for b in Builtin::ALL.iter() {
            let function = f.get(b.name()).unwrap();
            assert_eq!(function.arity(), b.params().len());
            assert!(!function.is_user());
        }
    }

    #[test]
    fn test_int_truncates() {
        assert_eq!(call(Builtin::Int, &[2.7]), 2.0);
        assert_eq!(call(Builtin::Int, &[-2.7]), -2.0);
        assert_eq!(call(Builtin::Int, &[-3.0]), -3.0);
    }

    #[test]
    fn test_math() {
        assert_eq!(call(Builtin::Hypot2, &[3.0, 4.0]), 5.0);
        assert_eq!(call(Builtin::Hypot3, &[2.0, 3.0, 6.0]), 7.0);
        assert_eq!(call(Builtin::Mod, &[-7.0, 3.0]), -1.0);
        assert_eq!(call(Builtin::Iif, &[0.0, 1.0, 2.0]), 2.0);
        assert_eq!(call(Builtin::Iif, &[-1.0, 1.0, 2.0]), 1.0);
        assert!((call(Builtin::Deg, &[std::f64::consts::PI]) - 180.0).abs() < 1e-9);
        assert_eq!(call(Builtin::Min, &[3.0, -4.0]), -4.0);
    }

    #[test]
    fn test_rnd_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let r = Builtin::Rnd.call(&[], &mut rng);
            assert!((0.0..1.0).contains(&r));
        }
    }

    #[test]
    fn test_no_redefinition() {
        let mut f = Functions::new();
        let e = f.define("sin", vec!["x".into()], "x").unwrap_err();
        assert!(e.is(ErrorCode::DuplicateDefinition));
        f.define("sq", vec!["x".into()], "x*x").unwrap();
        assert!(f.define("sq", vec![], "1").is_err());
        assert!(f.define_native("pi", 0, |_| 3.0).is_err());
    }

    #[test]
    fn test_forget_user() {
        let mut f = Functions::new();
        f.define("sq", vec!["x".into()], "x*x").unwrap();
        f.define_native("e", 0, |_| std::f64::consts::E).unwrap();
        f.forget_user();
        assert!(!f.contains("sq"));
        assert!(f.contains("e"));
        assert!(f.contains("sin"));
    }
}
