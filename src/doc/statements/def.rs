/*!
# `DEF FN <name>(<parameters>) = <expression>`

## Purpose
Defines a function.

## Remarks
The expression is kept as text and evaluated on each call. Inside it
only the parameters exist; variables of the caller cannot be seen and
are never changed. A function may call other functions, itself
included, up to 100 calls deep.

Names of builtin functions and functions already defined are refused
with `DUPLICATE DEFINITION`. `RUN` forgets every defined function.

## Example
```text
10 DEF FN SQ(X) = X*X
20 X = 5
30 PRINT SQ(4), " ", X
RUN
16 5
```

*/
