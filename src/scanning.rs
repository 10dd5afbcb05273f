use crate::error_handling::*;
use std::io::BufRead;

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    number(f64),
    name(String),
    quit,
    declare,
    end_statement,
    assign,
    plus,
    minus,
    star,
    slash,
    left_paren,
    right_paren,
}

/// A source of raw characters, read one line at a time.
pub trait Scanner {
    /// Next non-whitespace character, waiting for more input if the current line is used up.
    fn next_char(&mut self) -> Result<char>;
    /// Next character of the current line, whitespace included. `None` at the end of the line.
    fn next_raw(&mut self) -> Option<char>;
    /// Steps back one character within the current line.
    fn unget(&mut self);
    fn discard_line(&mut self);
}

pub struct LineScanner<R> {
    reader: R,
    line: Vec<char>,
    index: usize,
}

impl<R: BufRead> LineScanner<R> {
    pub fn new(reader: R) -> Self {
        Self{reader, line: Vec::new(), index: 0}
    }

    fn fill_line(&mut self) -> Result<()> {
        let mut buffer = String::new();
        let count = self.reader
            .read_line(&mut buffer)
            .map_err(|e| CalcError::bad_input(e.to_string()))?;
        if count == 0 {
            return Err(CalcError::end_of_input);
        }
        self.line = buffer.chars().collect();
        self.index = 0;
        Ok(())
    }
}

impl<R: BufRead> Scanner for LineScanner<R> {
    fn next_char(&mut self) -> Result<char> {
        loop {
            while let Some(c) = self.next_raw() {
                if !c.is_whitespace() {
                    return Ok(c);
                }
            }
            self.fill_line()?;
        }
    }

    fn next_raw(&mut self) -> Option<char> {
        let c = self.line.get(self.index).copied()?;
        self.index += 1;
        Some(c)
    }

    fn unget(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    fn discard_line(&mut self) {
        self.index = self.line.len();
    }
}

fn is_name_character(character: char) -> bool {
    character.is_ascii_alphabetic()
}

fn is_digit_or_dot(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

/// Tokens over a [`Scanner`], with room for one token of putback.
pub struct TokenStream<S> {
    scanner: S,
    buffer: Option<Token>,
    keyword: String,
}

impl<S: Scanner> TokenStream<S> {
    pub fn new(scanner: S, keyword: &str) -> Self {
        Self{scanner, buffer: None, keyword: keyword.into()}
    }

    pub fn get(&mut self) -> Result<Token> {
        match self.buffer.take() {
            Some(token) => Ok(token),
            None => self.scan(),
        }
    }

    pub fn putback(&mut self, token: Token) -> Result<()> {
        if self.buffer.is_some() {
            return Err(CalcError::buffer_full);
        }
        self.buffer = Some(token);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.buffer = None;
    }

    /// Drops the pending token and whatever is left of the current input line.
    pub fn discard_line(&mut self) {
        self.clear();
        self.scanner.discard_line();
    }

    fn scan(&mut self) -> Result<Token> {
        use Token::*;
        let c = self.scanner.next_char()?;
        match c {
            c if is_name_character(c) => Ok(self.scan_name(c)),
            c if is_digit_or_dot(c) => self.scan_number(c),
            '+' => Ok(plus),
            '-' => Ok(minus),
            '*' => Ok(star),
            '/' => Ok(slash),
            '(' => Ok(left_paren),
            ')' => Ok(right_paren),
            ';' => Ok(end_statement),
            '=' => Ok(assign),
            other => Err(CalcError::invalid_character(other)),
        }
    }

    fn scan_name(&mut self, first: char) -> Token {
        let mut name = String::from(first);
        while let Some(c) = self.scanner.next_raw() {
            if !is_name_character(c) {
                self.scanner.unget();
                break;
            }
            name.push(c);
        }

        if name == "q" {
            Token::quit
        } else if name == self.keyword {
            Token::declare
        } else {
            Token::name(name)
        }
    }

    fn scan_number(&mut self, first: char) -> Result<Token> {
        let mut literal = String::from(first);
        let mut seen_dot = first == '.';
        while let Some(c) = self.scanner.next_raw() {
            match c {
                '0'..='9' => literal.push(c),
                '.' if !seen_dot => {
                    seen_dot = true;
                    literal.push(c);
                },
                'e' | 'E' => {
                    self.scan_exponent(&mut literal, c);
                    break;
                },
                _ => {
                    self.scanner.unget();
                    break;
                },
            }
        }

        literal
            .parse()
            .map(Token::number)
            .map_err(|_| CalcError::invalid_number(literal))
    }

    // The marker has already been read. Without a digit after it (and an
    // optional sign) it is not an exponent and everything read is given back.
    fn scan_exponent(&mut self, literal: &mut String, marker: char) {
        let mut exponent = String::from(marker);
        let mut next = self.scanner.next_raw();
        if let Some(sign @ ('+' | '-')) = next {
            exponent.push(sign);
            next = self.scanner.next_raw();
        }

        match next {
            Some(c) if c.is_ascii_digit() => exponent.push(c),
            other => {
                let taken = exponent.len() + usize::from(other.is_some());
                for _ in 0..taken {
                    self.scanner.unget();
                }
                return;
            },
        }

        while let Some(c) = self.scanner.next_raw() {
            if !c.is_ascii_digit() {
                self.scanner.unget();
                break;
            }
            exponent.push(c);
        }
        literal.push_str(&exponent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Token::*;

    fn stream(input: &str) -> TokenStream<LineScanner<&[u8]>> {
        TokenStream::new(LineScanner::new(input.as_bytes()), "let")
    }

    fn tokens(input: &str) -> Vec<Token> {
        let mut stream = stream(input);
        let mut tokens = Vec::new();
        loop {
            match stream.get() {
                Ok(token) => tokens.push(token),
                Err(CalcError::end_of_input) => return tokens,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }
    }

    #[test]
    fn operators_and_punctuation() {
        assert_eq!(
            tokens("+-*/()=;"),
            vec![plus, minus, star, slash, left_paren, right_paren, assign, end_statement]
        );
    }

    #[test]
    fn names_keyword_and_quit() {
        assert_eq!(
            tokens("let x = abc;\nq"),
            vec![declare, name("x".into()), assign, name("abc".into()), end_statement, quit]
        );
    }

    #[test]
    fn longer_names_starting_with_q_are_names() {
        assert_eq!(tokens("qq quit"), vec![name("qq".into()), name("quit".into())]);
    }

    #[test]
    fn names_stop_at_non_alphabetic() {
        assert_eq!(tokens("ab2"), vec![name("ab".into()), number(2.0)]);
    }

    #[test]
    fn numbers() {
        assert_eq!(tokens("42 3.5 .25 7."), vec![number(42.0), number(3.5), number(0.25), number(7.0)]);
    }

    #[test]
    fn exponent_needs_a_digit() {
        assert_eq!(tokens("1e3 2.5E-1"), vec![number(1000.0), number(0.25)]);
        assert_eq!(tokens("2e;"), vec![number(2.0), name("e".into()), end_statement]);
        assert_eq!(tokens("2e+x"), vec![number(2.0), name("e".into()), plus, name("x".into())]);
    }

    #[test]
    fn second_dot_starts_a_new_number() {
        assert_eq!(tokens("1.2.3"), vec![number(1.2), number(0.3)]);
    }

    #[test]
    fn lone_dot_is_not_a_number() {
        let mut stream = stream(". ");
        assert_eq!(stream.get(), Err(CalcError::invalid_number(".".into())));
    }

    #[test]
    fn unexpected_character() {
        let mut stream = stream("#");
        assert_eq!(stream.get(), Err(CalcError::invalid_character('#')));
    }

    #[test]
    fn tokens_span_lines() {
        assert_eq!(tokens("1\n+\n\n2"), vec![number(1.0), plus, number(2.0)]);
    }

    #[test]
    fn putback_is_read_first() {
        let mut stream = stream("1 2");
        let first = stream.get().unwrap();
        stream.putback(first).unwrap();
        assert_eq!(stream.get(), Ok(number(1.0)));
        assert_eq!(stream.get(), Ok(number(2.0)));
    }

    #[test]
    fn second_putback_fails() {
        let mut stream = stream("");
        stream.putback(plus).unwrap();
        assert_eq!(stream.putback(minus), Err(CalcError::buffer_full));
        assert_eq!(stream.get(), Ok(plus));
    }

    #[test]
    fn discard_line_drops_putback_and_rest_of_line() {
        let mut stream = stream("1 2 3\n4");
        let first = stream.get().unwrap();
        stream.putback(first).unwrap();
        stream.discard_line();
        assert_eq!(stream.get(), Ok(number(4.0)));
    }

    #[test]
    fn custom_keyword() {
        let mut stream = TokenStream::new(LineScanner::new("var let".as_bytes()), "var");
        assert_eq!(stream.get(), Ok(declare));
        assert_eq!(stream.get(), Ok(name("let".into())));
    }
}
