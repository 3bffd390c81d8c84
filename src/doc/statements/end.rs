/*!
# `END`

## Purpose
Ends the program.

## Remarks
Same as running off the last line. `CONT` will not resume it.

## Example
```text
10 GOSUB 100
20 END
100 PRINT "SUB"
110 RETURN
RUN
SUB
```

*/
