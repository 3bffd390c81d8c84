/*!
# `RANDOMIZE [<expression>]`

## Purpose
Reseeds the generator used by `RND`.

## Remarks
With an expression the sequence repeats for the same seed.
Without one, fresh entropy is used.

## Example
```text
RANDOMIZE 42
PRINT RND
```

*/
