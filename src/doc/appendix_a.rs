/*!
# Errors

Errors print with a leading `?`. An error in a program line names the
line and the column where scanning stopped. An error in direct mode
names the column only.

```text
10 LET A = B
RUN
?UNDEFINED VARIABLE IN 10 COLUMN 9; VAR NOT FOUND: b
```

After an error in a program, `CONT` retries from the next line.

| Code | Message                  | Cause                                            |
|------|--------------------------|--------------------------------------------------|
| 1    | NEXT WITHOUT FOR         | `NEXT` with no open `FOR`                        |
| 2    | SYNTAX ERROR             | Something expected was missing                   |
| 3    | RETURN WITHOUT GOSUB     | `RETURN` with no pending `GOSUB`                 |
| 5    | ILLEGAL FUNCTION CALL    | Wrong number of arguments                        |
| 7    | OUT OF MEMORY            | Stacks overflowed or functions nested too deep   |
| 8    | UNDEFINED LINE           | Jump to a line that does not exist               |
| 10   | DUPLICATE DEFINITION     | `DEF FN` of a name already in use                |
| 17   | CAN'T CONTINUE           | `CONT` with nothing to continue                  |
| 18   | UNDEFINED USER FUNCTION  | Call to a function that does not exist           |
| 24   | UNDEFINED VARIABLE       | Variable read before `LET`                       |
| 27   | LOOP WITHOUT DO          | `LOOP` with no open `DO`                         |
| 28   | INFINITE LOOP            | `FOR` with a `STEP` of zero                      |
| 31   | BREAK                    | CTRL-C                                           |
| 51   | INTERNAL ERROR           | A bug in Tiny BASIC                              |
| 53   | FILE NOT FOUND           | `LOAD` of a missing file                         |
| 57   | DISK I/O ERROR           | Any other file problem                           |
| 66   | DIRECT STATEMENT IN FILE | A line in a loaded file has no line number       |

*/
