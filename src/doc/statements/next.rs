/*!
# `NEXT <variable>`

## Purpose
Closes the innermost `FOR` loop.

## Remarks
The step is added to the variable. When it has not yet passed
the limit, execution goes back to the line after the `FOR`.

## Example
```text
10 FOR I=3 TO 1 STEP -1
20 PRINT I;
30 NEXT I
RUN
321
```

*/
