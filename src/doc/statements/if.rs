/*!
# `IF <expression> THEN <statement>`

## Purpose
Do something contingent on a predicate.

## Remarks
Any value other than zero is true. There is no `ELSE`; when the
predicate is zero the rest of the line is skipped.

## Example
```text
10 A=10
20 IF A<30 THEN GOSUB 100
30 IF A<30 THEN GOTO 20
40 END
100 PRINT A
110 A=A+10
120 RETURN
RUN
10
20
```

*/
