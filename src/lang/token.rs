/// Relational operators in match order.
/// Two character operators come first so `<=` never scans as `<`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RelOp {
    LessEqual,
    GreaterEqual,
    NotEqual,
    Less,
    Greater,
    Equal,
}

impl RelOp {
    pub const ALL: [RelOp; 6] = [
        RelOp::LessEqual,
        RelOp::GreaterEqual,
        RelOp::NotEqual,
        RelOp::Less,
        RelOp::Greater,
        RelOp::Equal,
    ];

    pub fn as_str(self) -> &'static str {
        use RelOp::*;
        match self {
            LessEqual => "<=",
            GreaterEqual => ">=",
            NotEqual => "<>",
            Less => "<",
            Greater => ">",
            Equal => "=",
        }
    }

    pub fn compare(self, lhs: f64, rhs: f64) -> bool {
        use RelOp::*;
        match self {
            LessEqual => lhs <= rhs,
            GreaterEqual => lhs >= rhs,
            NotEqual => lhs != rhs,
            Less => lhs < rhs,
            Greater => lhs > rhs,
            Equal => lhs == rhs,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AddOp {
    Plus,
    Minus,
}

impl AddOp {
    pub const ALL: [AddOp; 2] = [AddOp::Plus, AddOp::Minus];

    pub fn as_str(self) -> &'static str {
        match self {
            AddOp::Plus => "+",
            AddOp::Minus => "-",
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            AddOp::Plus => lhs + rhs,
            AddOp::Minus => lhs - rhs,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum MulOp {
    Multiply,
    Divide,
    DivideInt,
}

impl MulOp {
    pub const ALL: [MulOp; 3] = [MulOp::Multiply, MulOp::Divide, MulOp::DivideInt];

    pub fn as_str(self) -> &'static str {
        match self {
            MulOp::Multiply => "*",
            MulOp::Divide => "/",
            MulOp::DivideInt => "\\",
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            MulOp::Multiply => lhs * rhs,
            MulOp::Divide => lhs / rhs,
            MulOp::DivideInt => (lhs / rhs).floor(),
        }
    }
}

macro_rules! op_display {
    ($($op:ident),*) => {
        $(
            impl std::fmt::Display for $op {
                fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                    write!(f, "{}", self.as_str())
                }
            }
        )*
    };
}

op_display!(RelOp, AddOp, MulOp);
