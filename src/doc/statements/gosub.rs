/*!
# `GOSUB <line number>`

## Purpose
Remember the current line and move execution to the specified line number.

## Remarks
`RETURN` goes back to the line after the `GOSUB`.
The line number may be any expression without a comparison.

## Example
```text
10 GOSUB 100
20 PRINT "WORLD"
90 END
100 PRINT "HELLO ";
110 RETURN
RUN
HELLO WORLD
```

*/
