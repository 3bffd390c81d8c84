/*!
# `LOOP WHILE <expression>` or `LOOP UNTIL <expression>`

## Purpose
Closes a `DO` loop.

## Remarks
`WHILE` goes back to the `DO` while the expression is not zero.
`UNTIL` goes back while it is zero.

## Example
```text
10 N = 0
20 DO
30 N = N + 1
40 LOOP UNTIL N = 5
50 PRINT N
RUN
5
```

*/
