/*!
# `LET <variable>=<expression>`

## Purpose
Assigns a value to a variable.

## Remarks
The word `LET` is required. Variable names are a letter followed
by letters or digits and are not case sensitive.

## Example
```text
LET A=1.5
LET B2=A*2
PRINT B2
3
```

*/
