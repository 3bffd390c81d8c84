/*!
# `PRINT [<expression or string>[,<expression or string>...]][;]`

## Purpose
Prints to the terminal.

## Remarks
Items are joined without spaces. Numbers use up to six significant
digits, switching to an exponent for very large or small values.
A trailing `;` keeps the cursor on the same line.

## Example
```text
PRINT "A THIRD IS ", 1/3
A THIRD IS 0.333333
PRINT 2^20
1.04858e+06
```

*/
