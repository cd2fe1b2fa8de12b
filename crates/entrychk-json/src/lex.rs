//! JSON lexer: a deterministic tokenizer over a byte buffer.
//!
//! The lexer delimits tokens and tracks source positions; it performs no
//! numeric or escape conversion. On the first error it returns `Err` and
//! the caller stops: lexical errors abort the document.

use entrychk_types::Span;

/// Kinds of JSON tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Colon,
    Comma,
    Str,
    Number,
    True,
    False,
    Null,
    Eof,
}

/// A delimited token. `raw` is the full lexeme, quotes included for
/// strings.
#[derive(Debug, Clone, Copy)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub span: Span,
    pub raw: &'a [u8],
}

/// A lexical error with its source position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at line {line}, column {column}")]
pub struct LexError {
    pub message: String,
    pub line: u32,
    pub column: u32,
}

pub struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
    line: u32,
    column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn err(&self, message: impl Into<String>) -> LexError {
        LexError {
            message: message.into(),
            line: self.line,
            column: self.column,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(b)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.bump();
        }
    }

    fn token(&self, kind: TokenKind, start: (usize, u32, u32)) -> Token<'a> {
        let (offset, line, column) = start;
        Token {
            kind,
            span: Span {
                line,
                column,
                offset,
                length: self.pos - offset,
            },
            raw: &self.input[offset..self.pos],
        }
    }

    /// Next token, or the first lexical error.
    pub fn next_token(&mut self) -> Result<Token<'a>, LexError> {
        self.skip_whitespace();
        let start = (self.pos, self.line, self.column);
        let Some(b) = self.peek() else {
            return Ok(self.token(TokenKind::Eof, start));
        };
        match b {
            b'{' => {
                self.bump();
                Ok(self.token(TokenKind::LBrace, start))
            }
            b'}' => {
                self.bump();
                Ok(self.token(TokenKind::RBrace, start))
            }
            b'[' => {
                self.bump();
                Ok(self.token(TokenKind::LBracket, start))
            }
            b']' => {
                self.bump();
                Ok(self.token(TokenKind::RBracket, start))
            }
            b':' => {
                self.bump();
                Ok(self.token(TokenKind::Colon, start))
            }
            b',' => {
                self.bump();
                Ok(self.token(TokenKind::Comma, start))
            }
            b'"' => self.lex_string(start),
            b'-' | b'0'..=b'9' => self.lex_number(start),
            b't' | b'f' | b'n' => self.lex_keyword(start),
            _ => Err(self.err(format!("unexpected byte 0x{b:02x}"))),
        }
    }

    fn lex_keyword(&mut self, start: (usize, u32, u32)) -> Result<Token<'a>, LexError> {
        while matches!(self.peek(), Some(b'a'..=b'z')) {
            self.bump();
        }
        let word = &self.input[start.0..self.pos];
        let kind = match word {
            b"true" => TokenKind::True,
            b"false" => TokenKind::False,
            b"null" => TokenKind::Null,
            _ => {
                return Err(LexError {
                    message: format!("invalid keyword {:?}", String::from_utf8_lossy(word)),
                    line: start.1,
                    column: start.2,
                })
            }
        };
        Ok(self.token(kind, start))
    }

    fn lex_string(&mut self, start: (usize, u32, u32)) -> Result<Token<'a>, LexError> {
        self.bump(); // opening quote
        loop {
            let Some(b) = self.bump() else {
                return Err(LexError {
                    message: "unterminated string".into(),
                    line: start.1,
                    column: start.2,
                });
            };
            match b {
                b'"' => return Ok(self.token(TokenKind::Str, start)),
                b'\\' => {
                    let Some(esc) = self.bump() else {
                        return Err(LexError {
                            message: "unterminated string".into(),
                            line: start.1,
                            column: start.2,
                        });
                    };
                    match esc {
                        b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' => {}
                        b'u' => {
                            for _ in 0..4 {
                                match self.bump() {
                                    Some(h) if h.is_ascii_hexdigit() => {}
                                    _ => return Err(self.err("invalid \\u escape")),
                                }
                            }
                        }
                        _ => {
                            return Err(self.err(format!("invalid escape \\{}", esc as char)));
                        }
                    }
                }
                0x00..=0x1f => {
                    return Err(self.err(format!("control byte 0x{b:02x} in string")));
                }
                _ => {}
            }
        }
    }

    fn lex_number(&mut self, start: (usize, u32, u32)) -> Result<Token<'a>, LexError> {
        if self.peek() == Some(b'-') {
            self.bump();
        }
        // integer part: 0, or [1-9][0-9]*
        match self.peek() {
            Some(b'0') => {
                self.bump();
            }
            Some(b'1'..=b'9') => {
                while matches!(self.peek(), Some(b'0'..=b'9')) {
                    self.bump();
                }
            }
            _ => return Err(self.err("invalid number")),
        }
        if self.peek() == Some(b'.') {
            self.bump();
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(self.err("invalid number: expected digits after '.'"));
            }
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.bump();
            }
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.bump();
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.bump();
            }
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(self.err("invalid number: expected exponent digits"));
            }
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.bump();
            }
        }
        Ok(self.token(TokenKind::Number, start))
    }
}
