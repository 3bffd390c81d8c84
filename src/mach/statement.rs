use super::format::format_number;
use super::runtime::ForLoop;
use super::Runtime;
use crate::error;
use crate::lang::{Error, LineNumber};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::rc::Rc;
use tracing::warn;

type Result<T> = std::result::Result<T, Error>;

impl Runtime {
    pub(super) fn parse_statement(&mut self) -> Result<()> {
        match self.frame.cursor.match_keyword() {
            Some(keyword) => self.dispatch_statement(&keyword),
            None => Err(error!(SyntaxError; "STATEMENT EXPECTED")),
        }
    }

    fn dispatch_statement(&mut self, keyword: &str) -> Result<()> {
        if let Some(hook) = self.hooks.statement(keyword) {
            return hook(self);
        }
        match keyword {
            "let" => self.parse_let(),
            "if" => self.parse_if(),
            "goto" => self.parse_goto(),
            "gosub" => self.parse_gosub(),
            "return" => self.parse_return(),
            "for" => self.parse_for(),
            "next" => self.parse_next(),
            "do" => self.rstack.push(self.crt_line),
            "loop" => self.parse_loop(),
            "def" => self.parse_def(),
            "print" => self.parse_print(),
            "input" => self.parse_input(),
            "randomize" => self.parse_randomize(),
            "rem" => {
                self.frame.cursor.skip_to_end();
                Ok(())
            }
            "stop" => {
                self.stop = true;
                Ok(())
            }
            "end" => {
                self.crt_line = self.addr.len();
                Ok(())
            }
            _ => Err(error!(SyntaxError;
                &format!("UNKNOWN STATEMENT: {}", keyword.to_uppercase()))),
        }
    }

    fn parse_varname(&mut self) -> Result<String> {
        match self.frame.cursor.match_varname() {
            Some(name) => Ok(name),
            None => Err(error!(SyntaxError; "VARIABLE EXPECTED")),
        }
    }

    fn parse_varlist(&mut self) -> Result<Vec<String>> {
        let mut varlist = vec![self.parse_varname()?];
        while self.frame.cursor.match_literal(",") {
            varlist.push(self.parse_varname()?);
        }
        Ok(varlist)
    }

    fn parse_let(&mut self) -> Result<()> {
        let var_name = self.parse_varname()?;
        self.frame.cursor.expect("=")?;
        let value = self.parse_expression()?;
        self.frame.vars.store(&var_name, value)
    }

    fn parse_if(&mut self) -> Result<()> {
        let condition = self.parse_expression()?;
        if !self.frame.cursor.match_nocase("then") {
            return Err(error!(SyntaxError; "IF WITHOUT THEN"));
        }
        if condition != 0.0 {
            self.parse_statement()
        } else {
            self.frame.cursor.skip_to_end();
            Ok(())
        }
    }

    /// Position of line `n` in the address table.
    fn resolve(&self, n: f64) -> Result<usize> {
        let n = n.trunc();
        if n >= 0.0 && n <= LineNumber::max_value() as f64 {
            if let Some(index) = self.addr.index_of(n as LineNumber) {
                return Ok(index);
            }
        }
        Err(error!(UndefinedLine; &format!("LINE NOT FOUND: {}", format_number(n))))
    }

    fn parse_goto(&mut self) -> Result<()> {
        let n = self.parse_arithmetic()?;
        self.crt_line = self.resolve(n)?;
        Ok(())
    }

    fn parse_gosub(&mut self) -> Result<()> {
        let n = self.parse_arithmetic()?;
        let index = self.resolve(n)?;
        self.rstack.push(self.crt_line)?;
        self.crt_line = index;
        Ok(())
    }

    fn parse_return(&mut self) -> Result<()> {
        if self.rstack.is_empty() {
            return Err(error!(ReturnWithoutGosub));
        }
        self.crt_line = self.rstack.pop()?;
        Ok(())
    }

    fn parse_for(&mut self) -> Result<()> {
        let var_name = self.parse_varname()?;
        self.frame.cursor.expect("=")?;
        let start = self.parse_arithmetic()?;
        self.frame.vars.store(&var_name, start)?;
        if !self.frame.cursor.match_nocase("to") {
            return Err(error!(SyntaxError; "'TO' EXPECTED"));
        }
        let limit = self.parse_arithmetic()?;
        let step = if self.frame.cursor.match_nocase("step") {
            let step = self.parse_arithmetic()?;
            if step == 0.0 {
                return Err(error!(InfiniteLoop));
            }
            step
        } else {
            1.0
        };
        self.rstack.push(self.crt_line)?;
        self.dstack.push(ForLoop { limit, step })
    }

    fn parse_next(&mut self) -> Result<()> {
        let for_loop = match self.dstack.last() {
            Some(for_loop) => *for_loop,
            None => return Err(error!(NextWithoutFor)),
        };
        let var_name = self.parse_varname()?;
        let value = self.frame.vars.fetch(&var_name)? + for_loop.step;
        self.frame.vars.store(&var_name, value)?;
        let done = if for_loop.step > 0.0 {
            value > for_loop.limit
        } else if for_loop.step < 0.0 {
            value < for_loop.limit
        } else {
            return Err(error!(InfiniteLoop));
        };
        if done {
            self.dstack.pop()?;
            self.rstack
                .pop()
                .map_err(|_| error!(NextWithoutFor))?;
        } else {
            match self.rstack.last() {
                Some(index) => self.crt_line = *index,
                None => return Err(error!(NextWithoutFor)),
            }
        }
        Ok(())
    }

    fn parse_loop(&mut self) -> Result<()> {
        let repeat = if self.frame.cursor.match_nocase("while") {
            self.parse_expression()? != 0.0
        } else if self.frame.cursor.match_nocase("until") {
            self.parse_expression()? == 0.0
        } else {
            return Err(error!(SyntaxError; "CONDITION EXPECTED"));
        };
        let head = match self.rstack.last() {
            Some(index) => *index,
            None => return Err(error!(LoopWithoutDo)),
        };
        if repeat {
            self.crt_line = head;
        } else {
            self.rstack.pop()?;
        }
        Ok(())
    }

    fn parse_def(&mut self) -> Result<()> {
        if !self.frame.cursor.match_nocase("fn") {
            return Err(error!(SyntaxError; "'FN' EXPECTED"));
        }
        let name = match self.frame.cursor.match_varname() {
            Some(name) => name,
            None => return Err(error!(SyntaxError; "FUNCTION NAME EXPECTED")),
        };
        if self.functions.contains(&name) {
            return Err(error!(DuplicateDefinition; &format!("DUPLICATE FUNCTION: {}", name)));
        }
        self.frame.cursor.expect("(")?;
        let args = if self.frame.cursor.match_literal(")") {
            vec![]
        } else {
            let args = self.parse_varlist()?;
            self.frame.cursor.expect(")")?;
            args
        };
        self.frame.cursor.expect("=")?;
        let params: Vec<Rc<str>> = args.into_iter().map(Rc::from).collect();
        let body = self.frame.cursor.rest().to_string();
        self.frame.cursor.skip_to_end();
        self.functions.define(&name, params, &body)
    }

    fn parse_randomize(&mut self) -> Result<()> {
        if self.frame.cursor.match_eol() {
            self.rng = StdRng::from_entropy();
        } else {
            let seed = self.parse_arithmetic()? as i64;
            self.rng = StdRng::seed_from_u64(seed as u64);
        }
        Ok(())
    }

    /// A string literal as is, or an expression formatted for output.
    pub fn parse_printable(&mut self) -> Result<String> {
        match self.frame.cursor.match_string()? {
            Some(s) => Ok(s),
            None => Ok(format_number(self.parse_expression()?)),
        }
    }

    fn parse_print(&mut self) -> Result<()> {
        if self.frame.cursor.match_eol() {
            writeln!(self.output)?;
            return Ok(());
        }
        let mut value = self.parse_printable()?;
        while self.frame.cursor.match_literal(",") {
            value.push_str(&self.parse_printable()?);
        }
        if self.frame.cursor.match_literal(";") {
            write!(self.output, "{}", value)?;
        } else {
            writeln!(self.output, "{}", value)?;
        }
        Ok(())
    }

    fn parse_input(&mut self) -> Result<()> {
        let prompt = match self.frame.cursor.match_string()? {
            Some(prompt) => {
                self.frame.cursor.expect(",")?;
                prompt
            }
            None => String::new(),
        };
        let input_vars = self.parse_varlist()?;
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut input_line = String::new();
        if let Err(error) = self.input.read_line(&mut input_line) {
            warn!(%error, "input failed");
            input_line.clear();
        }
        let data: Vec<&str> = input_line.split(',').map(str::trim).collect();
        for (i, var_name) in input_vars.iter().enumerate() {
            let field = data.get(i).copied().unwrap_or("");
            let value = if field.is_empty() {
                0.0
            } else {
                match field.parse::<f64>() {
                    Ok(value) => value,
                    Err(_) => {
                        warn!(field, "input is not a number");
                        writeln!(
                            self.error,
                            "CAN'T PARSE NUMBER: {}. MAYBE YOU FORGOT A COMMA?",
                            field
                        )?;
                        0.0
                    }
                }
            };
            self.frame.vars.store(var_name, value)?;
        }
        Ok(())
    }
}
