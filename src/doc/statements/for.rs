/*!
# `FOR <variable>=x TO y [STEP z]`
Where x, y, and z are expressions.
## Purpose
Used with `NEXT` to repeat execution of statements
while iterating over a sequence of numbers.

## Remarks
If we wanted the numbers 1,3,5,7 we would write `FOR I=1 TO 7 STEP 2`.
On the first iteration, 1 will be assigned to variable I.
Statements execute until a `NEXT` statement.
On subsequent iterations, the variable I gets 2 added to it.
If the result passes 7 the loop ends and I is left at 9.

The body always executes once, even when starting past the end.
A `STEP` of zero is an `INFINITE LOOP` error.

## Example
```text
10 FOR X=1 TO 2
20 FOR Y=5 TO 6
30 PRINT X, " ", Y
40 NEXT Y
50 NEXT X
RUN
1 5
1 6
2 5
2 6
```

*/
