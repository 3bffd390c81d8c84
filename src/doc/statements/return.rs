/*!
# `RETURN`

## Purpose
Go back to the line after the most recent `GOSUB`.

## Remarks
Without a pending `GOSUB` this is `RETURN WITHOUT GOSUB`.

*/
