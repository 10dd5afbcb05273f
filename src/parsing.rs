use crate::error_handling::*;
use crate::scanning::*;
use crate::variables::VarTable;

// expression := term (('+' | '-') term)*
// term       := primary (('*' | '/') primary | '(' expression ')')*
// primary    := number | name | ('+' | '-') number | '(' expression ')'

pub fn expression<S: Scanner>(tokens: &mut TokenStream<S>, variables: &VarTable) -> Result<f64> {
    let mut left = term(tokens, variables)?;
    loop {
        match tokens.get()? {
            Token::plus => left += term(tokens, variables)?,
            Token::minus => left -= term(tokens, variables)?,
            token => {
                tokens.putback(token)?;
                return Ok(left);
            },
        }
    }
}

pub fn term<S: Scanner>(tokens: &mut TokenStream<S>, variables: &VarTable) -> Result<f64> {
    let mut left = primary(tokens, variables)?;
    loop {
        match tokens.get()? {
            Token::star => left *= primary(tokens, variables)?,
            // 4(x+1) is 4*(x+1)
            Token::left_paren => {
                tokens.putback(Token::left_paren)?;
                left *= primary(tokens, variables)?;
            },
            Token::slash => {
                let divisor = primary(tokens, variables)?;
                if divisor == 0.0 {
                    return Err(CalcError::division_by_zero);
                }
                left /= divisor;
            },
            token => {
                tokens.putback(token)?;
                return Ok(left);
            },
        }
    }
}

pub fn primary<S: Scanner>(tokens: &mut TokenStream<S>, variables: &VarTable) -> Result<f64> {
    match tokens.get()? {
        Token::number(value) => Ok(value),
        Token::name(name) => variables.get(&name).ok_or_else(|| CalcError::undefined(name)),
        Token::minus => signed_number(tokens).map(|value| -value),
        Token::plus => signed_number(tokens),
        Token::left_paren => {
            let value = expression(tokens, variables)?;
            expect(tokens, Token::right_paren, "')'")?;
            Ok(value)
        },
        _ => Err(CalcError::expected_primary),
    }
}

/// A sign only applies to a number literal, never to a parenthesised expression.
fn signed_number<S: Scanner>(tokens: &mut TokenStream<S>) -> Result<f64> {
    match tokens.get()? {
        Token::number(value) => Ok(value),
        token => {
            tokens.putback(token)?;
            Err(CalcError::expected("number after sign"))
        },
    }
}

pub fn expect<S: Scanner>(tokens: &mut TokenStream<S>, wanted: Token, what: &'static str) -> Result<()> {
    if tokens.get()? == wanted {
        Ok(())
    } else {
        Err(CalcError::expected(what))
    }
}
