/*!
# `STOP`

## Purpose
Halts the program after the current line.

## Remarks
Typically used for debugging.
`CONT` may be used to resume execution.
When a program given on the command line stops, the shell opens
instead of exiting.

## Example
```text
10 PRINT 1
20 STOP
30 PRINT 2
RUN
1
CONT
2
```

*/
