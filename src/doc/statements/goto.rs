/*!
# `GOTO <line number>`

## Purpose
Move execution to the specified line number.

## Remarks
Targets are looked up among the lines that existed at `RUN`.

## Example
```text
10 N = 0
20 N = N + 1
30 IF N < 3 THEN GOTO 20
40 PRINT N
RUN
3
```

*/
