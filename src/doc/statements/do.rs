/*!
# `DO`

## Purpose
Marks the head of a loop closed by `LOOP WHILE` or `LOOP UNTIL`.

## Remarks
The body always runs at least once.

## Example
```text
10 I = 1
20 DO
30 PRINT I;
40 I = I * 2
50 LOOP WHILE I < 100
RUN
1248163264
```

*/
