/*!
# `NEW`

## Purpose
Erases the program.

## Remarks
Variables are kept. Use `CLEAR` to forget them.

*/
