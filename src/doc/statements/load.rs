/*!
# `LOAD "<filename>"`

## Purpose
Reads a program from a file.

## Remarks
Lines from the file are merged into the program in memory. Every
line in the file needs a line number or nothing is loaded and
`DIRECT STATEMENT IN FILE` is reported.

## Example
```text
LOAD "hello.bas"
FILE LOADED
```

*/
