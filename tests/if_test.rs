mod common;
use common::*;

#[test]
fn test_if_then() {
    let mut b = Basic::new();
    assert_eq!(exec(&mut b, "if 1 then print \"yes\""), "yes\n");
    assert_eq!(exec(&mut b, "if 0 then print \"yes\""), "");
    assert_eq!(exec(&mut b, "if -1 then print \"t\""), "t\n");
}

#[test]
fn test_false_skips_rest_of_line() {
    let mut b = Basic::new();
    assert_eq!(exec(&mut b, "if 0 then ]] not even ( valid"), "");
}

#[test]
fn test_if_without_then() {
    let mut b = Basic::new();
    assert_eq!(
        exec(&mut b, "if 1 print 1"),
        "?SYNTAX ERROR IN COLUMN 4; IF WITHOUT THEN\n"
    );
}

#[test]
fn test_nested_if() {
    let mut b = Basic::new();
    assert_eq!(exec(&mut b, "if 1 then if 0 then print 1"), "");
    assert_eq!(exec(&mut b, "if 1 then if 2 then print 2"), "2\n");
}

#[test]
fn test_if_then_gosub_and_goto() {
    let mut b = Basic::new();
    program(
        &mut b,
        &[
            "10 let a=10",
            "20 if a<30 then gosub 100",
            "30 if a<30 then goto 20",
            "40 end",
            "100 print a",
            "110 let a=a+10",
            "120 return",
        ],
    );
    assert_eq!(exec(&mut b, "run"), "10\n20\n");
}

#[test]
fn test_logic_in_condition() {
    let mut b = Basic::new();
    exec(&mut b, "let x = 5");
    assert_eq!(exec(&mut b, "if x>1 and x<10 then print \"in\""), "in\n");
    assert_eq!(exec(&mut b, "if x<1 or x>10 then print \"out\""), "");
    assert_eq!(exec(&mut b, "if not x=5 then print \"no\""), "");
}
