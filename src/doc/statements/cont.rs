/*!
# `CONTINUE` or `CONT`

## Purpose
Resume a program after `STOP`, CTRL-C, or an error.

## Remarks
Execution picks up at the line after the one that stopped.
Lines added since `RUN` are not seen until the next `RUN`.
A program that ran to its end, or never ran, gives `CAN'T CONTINUE`.

## Example
```text
10 PRINT "ONE"
20 STOP
30 PRINT "TWO"
RUN
ONE
CONT
TWO
```

*/
