/*!
# `DELETE <line number>`

## Purpose
Removes one line from the program.

## Remarks
Typing the line number alone does the same.

## Example
```text
10 PRINT "A"
20 PRINT "B"
DELETE 10
LIST
20	PRINT "B"
```

*/
