/*!
# Expressions

Every value is a 64-bit floating point number. Variables need not be
declared but must be assigned with `LET` before they are read.
Reading a variable that was never assigned is an error.
Variable names are a letter followed by letters and digits.
Case does not matter anywhere except inside strings.

```text
LET PI2 = 6.28
PRINT pi2 / 2
3.14
```

Numbers are written as digits with an optional fraction. There is
no exponent syntax. A leading `-` or `+` may be put before any number,
variable, function call, or parenthesized expression.

## Operators

From loosest to tightest binding:

| Operator              | Meaning                         |
|-----------------------|---------------------------------|
| `OR`                  | true if either side is not zero |
| `AND`                 | true if both sides are not zero |
| `NOT`                 | true if its operand is zero     |
| `= <> < <= > >=`      | comparison, at most one         |
| `+ -`                 | addition and subtraction        |
| `* / \`               | multiply, divide, floor divide  |
| `^`                   | power, grouping to the right    |

True is -1 and false is 0. Anything other than 0 counts as true.

```text
PRINT 2^3^2, " ", 7\2, " ", -7\2
512 3 -4
PRINT 1<2, " ", NOT 1=1
-1 0
```

Because the sign belongs to the number that follows it,
`-2^2` is 4. Write `-(2^2)` to get -4.

*/
