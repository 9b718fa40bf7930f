//! Structured value grammar.
//!
//! Compound properties (flags, skills, outfit, strategy, inventory, talk) share
//! one small grammar of brace lists, parenthesised tuples, quoted strings and
//! bare words:
//!
//! ```text
//! {KickBoxes, SeeInvisible}
//! {(HitPoints, 20, 0, 20, 0, 0, 0), (GoStrength, 14, 14, 14, 0, 0, 0)}
//! {"Meep!", "Squeak"}
//! (21, 0-0-0-0)
//! ```
//!
//! Everything parses into [`Element`]s. Bare words are flags, tuples carry
//! their components as attributes, strings carry only their text. Inside a
//! tuple a component may be named (`default=200`).

use std::fmt;

use thiserror::Error;

/// A component of an element.
///
/// Positional components keep their text in `name` and have no value;
/// named components (`key=value`) and flag payloads carry a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: Option<String>,
}

impl Attribute {
    /// A bare component such as `200` or `HitPoints`.
    pub fn positional(text: impl Into<String>) -> Self {
        Self {
            name: text.into(),
            value: None,
        }
    }

    /// A `name=value` component.
    pub fn named(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// The component's text: the value when named, otherwise the name.
    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or(&self.name)
    }
}

/// One structured token of a compound value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Flag word, string text, or the first component of a tuple
    pub name: String,
    /// Whether this element was written as a bare word
    pub is_flag: bool,
    pub attributes: Vec<Attribute>,
}

impl Element {
    /// Component texts in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(Attribute::text)
    }
}

/// Grammar failure, reported without property context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct GrammarError(pub String);

type GrammarResult<T> = std::result::Result<T, GrammarError>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    Comma,
    Equals,
    Str(String),
    Word(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::OpenBrace => write!(f, "`{{`"),
            Token::CloseBrace => write!(f, "`}}`"),
            Token::OpenParen => write!(f, "`(`"),
            Token::CloseParen => write!(f, "`)`"),
            Token::Comma => write!(f, "`,`"),
            Token::Equals => write!(f, "`=`"),
            Token::Str(s) => write!(f, "\"{}\"", s),
            Token::Word(w) => write!(f, "`{}`", w),
        }
    }
}

fn is_delimiter(c: char) -> bool {
    matches!(c, '{' | '}' | '(' | ')' | ',' | '=' | '"')
}

fn lex(input: &str) -> GrammarResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        let single = match c {
            '{' => Some(Token::OpenBrace),
            '}' => Some(Token::CloseBrace),
            '(' => Some(Token::OpenParen),
            ')' => Some(Token::CloseParen),
            ',' => Some(Token::Comma),
            '=' => Some(Token::Equals),
            _ => None,
        };
        if let Some(token) = single {
            chars.next();
            tokens.push(token);
            continue;
        }

        if c.is_whitespace() {
            chars.next();
        } else if c == '"' {
            chars.next();
            let mut text = String::new();
            let mut closed = false;
            while let Some(c) = chars.next() {
                match c {
                    '\\' => {
                        if let Some(escaped) = chars.next() {
                            text.push(escaped);
                        }
                    }
                    '"' => {
                        closed = true;
                        break;
                    }
                    _ => text.push(c),
                }
            }
            if !closed {
                return Err(GrammarError(format!("unterminated string \"{}", text)));
            }
            tokens.push(Token::Str(text));
        } else {
            let mut word = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() || is_delimiter(c) {
                    break;
                }
                word.push(c);
                chars.next();
            }
            tokens.push(Token::Word(word));
        }
    }

    Ok(tokens)
}

struct ElementParser {
    tokens: std::vec::IntoIter<Token>,
    peeked: Option<Token>,
}

impl ElementParser {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter(),
            peeked: None,
        }
    }

    fn peek(&mut self) -> Option<&Token> {
        if self.peeked.is_none() {
            self.peeked = self.tokens.next();
        }
        self.peeked.as_ref()
    }

    fn next(&mut self) -> Option<Token> {
        self.peeked.take().or_else(|| self.tokens.next())
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.peek() == Some(token) {
            self.next();
            true
        } else {
            false
        }
    }

    fn value(&mut self) -> GrammarResult<Vec<Element>> {
        match self.peek() {
            None => Ok(Vec::new()),
            Some(Token::OpenBrace) => {
                self.next();
                self.list()
            }
            Some(_) => Ok(vec![self.element()?]),
        }
    }

    fn list(&mut self) -> GrammarResult<Vec<Element>> {
        let mut elements = Vec::new();
        if self.eat(&Token::CloseBrace) {
            return Ok(elements);
        }

        loop {
            elements.push(self.element()?);
            match self.next() {
                Some(Token::Comma) => continue,
                Some(Token::CloseBrace) => return Ok(elements),
                Some(token) => return Err(unexpected(&token, "`,` or `}`")),
                None => return Err(GrammarError("unclosed `{`".to_string())),
            }
        }
    }

    fn element(&mut self) -> GrammarResult<Element> {
        match self.next() {
            Some(Token::OpenParen) => self.tuple(),
            Some(Token::Str(text)) => Ok(Element {
                name: text,
                is_flag: false,
                attributes: Vec::new(),
            }),
            Some(Token::Word(word)) => {
                let value = if self.eat(&Token::Equals) {
                    Some(self.scalar()?)
                } else {
                    None
                };
                Ok(Element {
                    name: word.clone(),
                    is_flag: true,
                    attributes: vec![Attribute { name: word, value }],
                })
            }
            Some(token) => Err(unexpected(&token, "an element")),
            None => Err(GrammarError(
                "expected an element, found end of value".to_string(),
            )),
        }
    }

    fn tuple(&mut self) -> GrammarResult<Element> {
        let mut attributes = Vec::new();
        if !self.eat(&Token::CloseParen) {
            loop {
                attributes.push(self.attribute()?);
                match self.next() {
                    Some(Token::Comma) => continue,
                    Some(Token::CloseParen) => break,
                    Some(token) => return Err(unexpected(&token, "`,` or `)`")),
                    None => return Err(GrammarError("unclosed `(`".to_string())),
                }
            }
        }

        let name = attributes
            .first()
            .map(|a| a.text().to_string())
            .unwrap_or_default();
        Ok(Element {
            name,
            is_flag: false,
            attributes,
        })
    }

    fn attribute(&mut self) -> GrammarResult<Attribute> {
        match self.next() {
            Some(Token::Word(word)) => {
                if self.eat(&Token::Equals) {
                    Ok(Attribute::named(word, self.scalar()?))
                } else {
                    Ok(Attribute::positional(word))
                }
            }
            Some(Token::Str(text)) => Ok(Attribute::positional(text)),
            Some(token) => Err(unexpected(&token, "an attribute")),
            None => Err(GrammarError(
                "expected an attribute, found end of value".to_string(),
            )),
        }
    }

    fn scalar(&mut self) -> GrammarResult<String> {
        match self.next() {
            Some(Token::Word(text)) | Some(Token::Str(text)) => Ok(text),
            Some(token) => Err(unexpected(&token, "a value")),
            None => Err(GrammarError(
                "expected a value, found end of value".to_string(),
            )),
        }
    }
}

fn unexpected(token: &Token, expected: &str) -> GrammarError {
    GrammarError(format!("expected {}, found {}", expected, token))
}

/// Parse a raw value into its elements.
///
/// A brace list yields one element per entry; any other value yields a
/// single element. Empty input yields no elements.
pub fn parse_elements(input: &str) -> GrammarResult<Vec<Element>> {
    let mut parser = ElementParser::new(lex(input)?);
    let elements = parser.value()?;

    if let Some(token) = parser.next() {
        return Err(unexpected(&token, "end of value"));
    }

    Ok(elements)
}
