/*!
# `INPUT ["<prompt string>",]<variable>[,<variable>...]`

## Purpose
Reads numbers typed at the terminal.

## Remarks
One line is read and split at commas. A missing or empty field
gives 0. A field that is not a number also gives 0 and prints a
warning, then the program carries on.

## Example
```text
10 INPUT "WIDTH, HEIGHT? ", W, H
20 PRINT W * H
RUN
WIDTH, HEIGHT? 3,4
12
```

*/
