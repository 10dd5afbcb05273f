use crate::config::Config;
use crate::error_handling::*;
use crate::parsing::*;
use crate::scanning::*;
use crate::variables::VarTable;
use std::io::BufRead;

#[derive(Debug, PartialEq)]
pub enum Outcome {
    output(String),
    quit,
    finished,
}

/// Plain decimal for everyday magnitudes, exponent form for very large or very small ones.
pub fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-5..1e15).contains(&magnitude) {
        format!("{value:e}")
    } else {
        value.to_string()
    }
}

/// One calculator session: the token stream it reads from and the variables defined so far.
pub struct Calculator<S> {
    tokens: TokenStream<S>,
    variables: VarTable,
}

impl<R: BufRead> Calculator<LineScanner<R>> {
    pub fn from_reader(reader: R, config: &Config) -> Self {
        Self::new(LineScanner::new(reader), config)
    }
}

impl<S: Scanner> Calculator<S> {
    pub fn new(scanner: S, config: &Config) -> Self {
        Self{
            tokens: TokenStream::new(scanner, &config.keyword),
            variables: VarTable::with_constants(),
        }
    }

    /// Reads and runs one statement. After an error call [`Calculator::recover`]
    /// before the next statement.
    pub fn next_statement(&mut self) -> Result<Outcome> {
        let token = match self.tokens.get() {
            Err(CalcError::end_of_input) => return Ok(Outcome::finished),
            token => token?,
        };
        if token == Token::quit {
            return Ok(Outcome::quit);
        }

        self.tokens.putback(token)?;
        let output = self.statement()?;
        // the token that ended an expression is still pending
        self.tokens.clear();
        Ok(Outcome::output(output))
    }

    pub fn statement(&mut self) -> Result<String> {
        match self.tokens.get()? {
            Token::declare => self.declaration(),
            token => {
                self.tokens.putback(token)?;
                Ok(format_number(expression(&mut self.tokens, &self.variables)?))
            },
        }
    }

    pub fn declaration(&mut self) -> Result<String> {
        let name = match self.tokens.get()? {
            Token::name(name) => name,
            _ => return Err(CalcError::expected("variable name")),
        };
        expect(&mut self.tokens, Token::assign, "'='")?;
        let value = expression(&mut self.tokens, &self.variables)?;
        expect(&mut self.tokens, Token::end_statement, "';'")?;

        self.variables.define(&name, value)?;
        Ok(format!("Defined: {name}={}", format_number(value)))
    }

    pub fn recover(&mut self) {
        self.tokens.discard_line();
    }

    pub fn variables(&self) -> &VarTable {
        &self.variables
    }
}
