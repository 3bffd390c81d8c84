/*!
# `LIST`

## Purpose
Prints the program.

## Remarks
Each line number is followed by a tab. `SAVE` writes the same text.

## Example
```text
20 PRINT "B"
10 PRINT "A"
LIST
10	PRINT "A"
20	PRINT "B"
```

*/
