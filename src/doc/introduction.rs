/*!
# Introductory Tutorial for Tiny BASIC

Open a terminal and run the executable. If you get the following,
you are ready for this tutorial. Type CTRL-D or `BYE` to exit.
<pre><code>&nbsp;  TINY BASIC 0.1.0 READY
&nbsp;
&nbsp;> █
</code></pre>

Stop a running program with CTRL-C. `CONT` picks up where it left off.

At the `>` prompt Tiny BASIC accepts a statement and runs it right away.
This is called direct mode. Lines that you type are marked with a "`>`".

<pre><code>&nbsp;> print "Hello World"
&nbsp;  Hello World
</code></pre>

To write a program, put a line number in front of each statement.
Lines are kept in line number order no matter what order they are typed in.

<pre><code>&nbsp;> 20 print "World"
&nbsp;> 10 print "Hello ";
&nbsp;> list
&nbsp;  10	print "Hello ";
&nbsp;  20	print "World"
&nbsp;> run
&nbsp;  Hello World
</code></pre>

Typing a line number that already exists replaces that line.
Typing the number alone deletes it.

Every value in Tiny BASIC is a number. Strings are only used for
messages in `PRINT` and `INPUT` and for file names.

<pre><code>&nbsp;> 10 input "How many? ", n
&nbsp;> 20 for i = 1 to n
&nbsp;> 30 print i, " squared is ", i * i
&nbsp;> 40 next i
&nbsp;> run
&nbsp;  How many? 3
&nbsp;  1 squared is 1
&nbsp;  2 squared is 4
&nbsp;  3 squared is 9
</code></pre>

Programs are kept with `SAVE "name.bas"` and brought back with
`LOAD "name.bas"`. Files can also be given on the command line,
in which case they are run right away:

```text
basic hello.bas
```

Set `RUST_LOG=debug` to see what the interpreter is doing on stderr.

*/
