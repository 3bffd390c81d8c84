/*!
# `SAVE "<filename>"`

## Purpose
Writes the program to a file in `LIST` format.

## Example
```text
SAVE "hello.bas"
FILE SAVED
```

*/
