/*!
# `RUN`

## Purpose
Starts the program from its first line.

## Remarks
`GOSUB`, `FOR`, and `DO` state is reset and `DEF FN` functions are
forgotten. Variables are kept.

*/
