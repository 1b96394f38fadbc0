use std::fmt::{Display, Formatter};
use std::str::Chars;
use thiserror::Error;
use crate::compiler::value::Value;
use crate::util;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenPos {
    pub line: i32,
    pub column: i32,
}

impl TokenPos {
    pub fn new(line: i32, column: i32) -> TokenPos {
        TokenPos { line, column }
    }

    pub fn begin() -> TokenPos {
        TokenPos::new(1, 1)
    }
}

impl Display for TokenPos {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}:{}]", self.line, self.column)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum TokenType {
    None,

    ParenthesisLeft, ParenthesisRight,

    Plus, Minus,
    Multiply, Divide,

    Identifier,
    Number,

    // Keywords
    True, False,

    // EOF
    Eof,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    token_type: TokenType,
    source: String,
    value: Option<Value>,
    start: TokenPos,
}

impl Token {
    pub fn new(token_type: TokenType, source: String, start: TokenPos) -> Token {
        Token {
            token_type, source,
            value: None,
            start,
        }
    }

    pub fn with_value(mut self, value: Option<Value>) -> Token {
        self.value = value;
        self
    }

    pub fn empty() -> Token {
        Token::new(TokenType::None, String::new(), TokenPos::begin())
    }

    pub fn token_type(&self) -> TokenType { self.token_type }
    pub fn source(&self) -> &str { &self.source }
    pub fn value(&self) -> Option<Value> { self.value }
    pub fn start(&self) -> &TokenPos { &self.start }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.token_type {
            TokenType::None => f.write_str("None"),
            TokenType::Eof => f.write_str("Eof"),
            _ => write!(f, "`{}`", self.source),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("Unexpected EOF")]
    UnexpectedEof,

    #[error("{0} Unexpected character '{1}'")]
    UnexpectedCharacter(TokenPos, char),

    #[error("{0} Unterminated block comment")]
    UnterminatedComment(TokenPos),
}

type LexerResult<T> = Result<T, LexerError>;

pub struct Lexer<'source> {
    input: &'source str,

    chars: Chars<'source>,
    peek_1: Option<char>,
    peek_2: Option<char>,

    start_index: usize,
    current_index: usize,

    start_pos: TokenPos,
    current_pos: TokenPos,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Lexer<'source> {
        Lexer {
            input: source,

            chars: source.chars(),
            peek_1: None,
            peek_2: None,

            start_index: 0,
            current_index: 0,

            start_pos: TokenPos::begin(),
            current_pos: TokenPos::begin(),
        }
    }

    pub fn scan_token(&mut self) -> LexerResult<Token> {
        loop {
            self.skip_whitespace();
            self.start_index = self.current_index;
            self.start_pos = self.current_pos;

            if self.is_eof() {
                return Ok(self.make_token(TokenType::Eof));
            }

            let c = self.consume()?;

            return match c {
                '(' => Ok(self.make_token(TokenType::ParenthesisLeft)),
                ')' => Ok(self.make_token(TokenType::ParenthesisRight)),

                '+' => Ok(self.make_token(TokenType::Plus)),
                '-' => Ok(self.make_token(TokenType::Minus)),
                '*' => Ok(self.make_token(TokenType::Multiply)),
                '/' => if self.expect('/') {
                    self.skip_line();
                    continue;
                } else if self.expect('*') {
                    self.skip_block_comment()?;
                    continue;
                } else {
                    Ok(self.make_token(TokenType::Divide))
                },

                '0'..='9' => Ok(self.scan_number()),
                c if util::is_alphabetic(c) => Ok(self.scan_identifier()),

                _ => Err(LexerError::UnexpectedCharacter(self.start_pos, c)),
            };
        }
    }

    fn scan_number(&mut self) -> Token {
        while let Ok('0'..='9') = self.peek() {
            let _ = self.consume();
        }

        // Out-of-range literals keep no value; the parser reports them
        let value = self.input[self.start_index..self.current_index].parse::<i32>().ok().map(Value::Int);
        self.make_token(TokenType::Number).with_value(value)
    }

    fn scan_identifier(&mut self) -> Token {
        while let Ok(c) = self.peek() {
            if !util::is_alphanumeric(c) {
                break;
            }

            let _ = self.consume();
        }

        let name = &self.input[self.start_index..self.current_index];

        let token_type = match name.chars().next() {
            Some('t') => Lexer::check_keyword(name, 1, "true", TokenType::True),
            Some('f') => Lexer::check_keyword(name, 1, "false", TokenType::False),
            _ => TokenType::Identifier,
        };

        let value = match token_type {
            TokenType::True => Some(Value::Boolean(true)),
            TokenType::False => Some(Value::Boolean(false)),
            _ => None,
        };

        self.make_token(token_type).with_value(value)
    }

    fn check_keyword(name: &str, start: usize, keyword: &'static str, token_type: TokenType) -> TokenType {
        if name.get(start..) == keyword.get(start..) {
            token_type
        } else {
            TokenType::Identifier
        }
    }

    fn make_token(&self, token_type: TokenType) -> Token {
        Token::new(token_type, self.input[self.start_index..self.current_index].to_owned(), self.start_pos)
    }

    fn consume(&mut self) -> LexerResult<char> {
        (if let Some(c) = self.peek_1.take() {
            self.peek_1 = self.peek_2.take();
            Ok(c)
        } else {
            self.chars.next().ok_or(LexerError::UnexpectedEof)
        }).map(|c| {
            self.current_index += c.len_utf8();

            if c == '\n' {
                self.current_pos.line += 1;
                self.current_pos.column = 1;
            } else {
                self.current_pos.column += 1;
            }

            c
        })
    }

    fn peek(&mut self) -> LexerResult<char> {
        if let Some(c) = self.peek_1 {
            Ok(c)
        } else if let Some(c) = self.chars.next() {
            self.peek_1 = Some(c);
            Ok(c)
        } else {
            Err(LexerError::UnexpectedEof)
        }
    }

    fn expect(&mut self, expected: char) -> bool {
        match self.peek() {
            Ok(actual) if actual == expected => self.consume().is_ok(),
            _ => false,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Ok(c) = self.peek() {
            if !c.is_whitespace() {
                return;
            }

            let _ = self.consume();
        }
    }

    fn skip_line(&mut self) {
        while let Ok(c) = self.peek() {
            let _ = self.consume();

            if c == '\n' {
                return;
            }
        }
    }

    fn skip_block_comment(&mut self) -> LexerResult<()> {
        let mut comment_count = 1;

        while let Ok(c) = self.consume() {
            if c == '/' && self.expect('*') {
                comment_count += 1;
            } else if c == '*' && self.expect('/') {
                comment_count -= 1;
            }

            if comment_count <= 0 {
                return Ok(());
            }
        }

        Err(LexerError::UnterminatedComment(self.start_pos))
    }

    fn is_eof(&self) -> bool {
        self.current_index >= self.input.len()
    }
}
