mod common;
use common::*;

#[test]
fn test_fn_math() {
    let mut b = Basic::new();
    assert_eq!(
        exec(&mut b, "print abs(-3), \" \", sqr(16), \" \", int(-2.7), \" \", int(2.7)"),
        "3 4 -2 2\n"
    );
    assert_eq!(exec(&mut b, "print min(3,4), max(3,4), mod(7,3)"), "341\n");
    assert_eq!(exec(&mut b, "print hypot2(3,4), \" \", hypot3(2,3,6)"), "5 7\n");
    assert_eq!(exec(&mut b, "print sin(0), cos(0)"), "01\n");
}

#[test]
fn test_fn_angles() {
    let mut b = Basic::new();
    assert_eq!(exec(&mut b, "print deg(pi)"), "180\n");
    assert_eq!(exec(&mut b, "print rad(180)"), "3.14159\n");
    assert_eq!(exec(&mut b, "print pi()"), "3.14159\n");
}

#[test]
fn test_fn_iif() {
    let mut b = Basic::new();
    assert_eq!(exec(&mut b, "print iif(0, 1, 2)"), "2\n");
    assert_eq!(exec(&mut b, "print iif(-1, 1, 2)"), "1\n");
}

#[test]
fn test_fn_rnd_and_timer() {
    let mut b = Basic::new();
    for _ in 0..20 {
        assert_eq!(exec(&mut b, "let r = rnd"), "");
        let r = b.var("r").unwrap();
        assert!((0.0..1.0).contains(&r));
    }
    assert_eq!(exec(&mut b, "let t = timer"), "");
    assert!(b.var("t").unwrap() > 0.0);
}

#[test]
fn test_wrong_argument_count() {
    let mut b = Basic::new();
    assert_eq!(
        exec(&mut b, "print abs(1,2)"),
        "?ILLEGAL FUNCTION CALL IN COLUMN 14; BAD ARGUMENT COUNT\n"
    );
}

#[test]
fn test_def_fn_leaves_caller_alone() {
    let mut b = Basic::new();
    exec(&mut b, "let x = 99");
    assert_eq!(exec(&mut b, "def fn sq(x) = x*x"), "");
    assert_eq!(exec(&mut b, "print sq(4)"), "16\n");
    assert_eq!(b.var("x"), Some(99.0));
}

#[test]
fn test_def_fn_cannot_see_globals() {
    let mut b = Basic::new();
    exec(&mut b, "let g = 1");
    exec(&mut b, "def fn f(a) = a + g");
    assert_eq!(
        exec(&mut b, "print f(1)"),
        "?UNDEFINED VARIABLE IN COLUMN 10; VAR NOT FOUND: g\n"
    );
    assert_eq!(exec(&mut b, "print g"), "1\n");
}

#[test]
fn test_def_fn_arguments() {
    let mut b = Basic::new();
    exec(&mut b, "def fn two() = 2");
    assert_eq!(exec(&mut b, "print two*3, \" \", two()"), "6 2\n");
    exec(&mut b, "def fn add(a, b) = a + b");
    assert_eq!(exec(&mut b, "print add(2, 3)"), "5\n");
    exec(&mut b, "def fn dbl(x) = x*2");
    exec(&mut b, "def fn quad(x) = dbl(dbl(x))");
    assert_eq!(exec(&mut b, "print quad(3)"), "12\n");
}

#[test]
fn test_def_fn_duplicate() {
    let mut b = Basic::new();
    assert_eq!(
        exec(&mut b, "def fn sin(x)=x"),
        "?DUPLICATE DEFINITION IN COLUMN 10; DUPLICATE FUNCTION: sin\n"
    );
    assert_eq!(exec(&mut b, "def fn f(x)=x"), "");
    assert_eq!(
        exec(&mut b, "def fn f(y)=y"),
        "?DUPLICATE DEFINITION IN COLUMN 8; DUPLICATE FUNCTION: f\n"
    );
}

#[test]
fn test_def_fn_needs_fn() {
    let mut b = Basic::new();
    assert_eq!(
        exec(&mut b, "def f(x)=x"),
        "?SYNTAX ERROR IN COLUMN 3; 'FN' EXPECTED\n"
    );
}

#[test]
fn test_runaway_recursion() {
    let mut b = Basic::new();
    exec(&mut b, "def fn fact(n) = iif(n<2, 1, n*fact(n-1))");
    assert_eq!(
        exec(&mut b, "print fact(5)"),
        "?OUT OF MEMORY IN COLUMN 13; FUNCTION CALLS NESTED TOO DEEP\n"
    );
    assert_eq!(exec(&mut b, "print 1"), "1\n");
}

#[test]
fn test_function_body_must_end() {
    let mut b = Basic::new();
    exec(&mut b, "def fn bad(x) = x x");
    assert_eq!(
        exec(&mut b, "print bad(1)"),
        "?SYNTAX ERROR IN COLUMN 12; END OF FUNCTION EXPECTED\n"
    );
}
