/*!
# `CLEAR`

## Purpose
Forgets every variable.

## Remarks
The program and any `DEF FN` functions stay. `CLEAR` is a shell
command and cannot appear in a program line.

## Example
```text
> LET A=1
> CLEAR
> PRINT A
?UNDEFINED VARIABLE IN COLUMN 7; VAR NOT FOUND: a
```

*/
