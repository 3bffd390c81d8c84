/*!
# Functions

Builtin functions cannot be redefined. Functions without arguments
may be called with or without empty parentheses.
*/

pub mod ABS {
    /*!
    ## `ABS(X)` Returns the absolute value of X.
    ```text
    PRINT ABS(-0.123)
    0.123
    ```
    */
}

pub mod COS {
    /*!
    ## `COS(X)` Returns the cosine of X in radians.
    ```text
    PRINT COS(PI)
    -1
    ```
    */
}

pub mod DEG {
    /*!
    ## `DEG(X)` Converts X radians to degrees.
    ```text
    PRINT DEG(PI/2)
    90
    ```
    */
}

pub mod HYPOT2 {
    /*!
    ## `HYPOT2(X, Y)` Returns the length of the vector (X, Y).
    ```text
    PRINT HYPOT2(3, 4)
    5
    ```
    */
}

pub mod HYPOT3 {
    /*!
    ## `HYPOT3(X, Y, Z)` Returns the length of the vector (X, Y, Z).
    ```text
    PRINT HYPOT3(2, 3, 6)
    7
    ```
    */
}

pub mod IIF {
    /*!
    ## `IIF(C, X, Y)` Returns X when C is not zero, otherwise Y.
    Both X and Y are always evaluated.
    ```text
    PRINT IIF(1>2, 10, 20)
    20
    ```
    */
}

pub mod INT {
    /*!
    ## `INT(X)` Drops the fraction of X, rounding toward zero.
    ```text
    PRINT INT(2.7), " ", INT(-2.7)
    2 -2
    ```
    */
}

pub mod MAX {
    /*!
    ## `MAX(X, Y)` Returns the larger of X and Y.
    */
}

pub mod MIN {
    /*!
    ## `MIN(X, Y)` Returns the smaller of X and Y.
    */
}

pub mod MOD {
    /*!
    ## `MOD(X, Y)` Returns the remainder of X divided by Y.
    The result has the sign of X.
    ```text
    PRINT MOD(7, 3), " ", MOD(-7, 3)
    1 -1
    ```
    */
}

pub mod PI {
    /*!
    ## `PI` Returns 3.14159...
    */
}

pub mod RAD {
    /*!
    ## `RAD(X)` Converts X degrees to radians.
    */
}

pub mod RND {
    /*!
    ## `RND` Returns a random number from 0 up to but not including 1.
    See `RANDOMIZE` to repeat a sequence.
    */
}

pub mod SIN {
    /*!
    ## `SIN(X)` Returns the sine of X in radians.
    */
}

pub mod SQR {
    /*!
    ## `SQR(X)` Returns the square root of X.
    ```text
    PRINT SQR(2)
    1.41421
    ```
    */
}

pub mod TIMER {
    /*!
    ## `TIMER` Returns seconds since 1970 with millisecond resolution.
    */
}
