//! Lexer (tokenizer) for minic source text
//!
//! Converts a line of source text into a flat [`Token`] stream consumed by the
//! parser. Words are split on whitespace and on a fixed set of single-character
//! symbols; there are no multi-character operators, no comments and no string
//! token kind. Quoted text is classified as an identifier and left for the
//! parser to interpret.
//!
//! Tokens carry no line or column. Results from successive lines concatenate
//! into one stream (see [`tokenize_source`]), so diagnostics can only refer to
//! a token's text and its position in that stream.

use std::fmt;

/// Single-character symbols. Each one is always a token of its own.
pub const SYMBOLS: &[char] = &[
    '+', '-', '*', '/', '%', '(', ')', '{', '}', '=', ';', '<', '>',
];

/// Reserved words. Membership is checked before any other classification.
pub const KEYWORDS: &[&str] = &[
    "auto",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "explicit",
    "export",
    "extern",
    "false",
    "for",
    "friend",
    "goto",
    "if",
    "inline",
    "mutable",
    "namespace",
    "new",
    "operator",
    "private",
    "protected",
    "public",
    "register",
    "reinterpret_cast",
    "return",
    "sizeof",
    "static",
    "static_cast",
    "struct",
    "switch",
    "template",
    "this",
    "throw",
    "true",
    "try",
    "typedef",
    "typeid",
    "typename",
    "union",
    "using",
    "virtual",
    "void",
    "volatile",
    "while",
    "int",
    "string",
];

/// Token classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    Symbol,
    /// Reserved for tokens that fit no class. Classification never produces it:
    /// unrecognized words fall back to [`TokenKind::Identifier`].
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Symbol => "symbol",
            TokenKind::Unknown => "unknown",
        };
        f.pad(label)
    }
}

/// A classified piece of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Classify a word and build its token.
    pub fn classify(word: &str) -> Self {
        Self::new(classify(word), word)
    }

    /// True for a keyword token with exactly this text.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text == word
    }

    /// True for a symbol token with exactly this character.
    pub fn is_symbol(&self, symbol: char) -> bool {
        self.kind == TokenKind::Symbol && self.text.len() == 1 && self.text.starts_with(symbol)
    }

    /// True for an identifier whose text is wrapped in double quotes.
    pub fn is_quoted(&self) -> bool {
        self.kind == TokenKind::Identifier && is_quoted(&self.text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Classify a word. First match wins.
pub fn classify(word: &str) -> TokenKind {
    if KEYWORDS.contains(&word) {
        return TokenKind::Keyword;
    }

    if !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit()) {
        return TokenKind::Number;
    }

    let mut chars = word.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        if is_symbol(ch) {
            return TokenKind::Symbol;
        }
    }

    // Quoted text has no kind of its own and lands here too
    TokenKind::Identifier
}

/// True if `ch` is one of the single-character [`SYMBOLS`].
pub fn is_symbol(ch: char) -> bool {
    SYMBOLS.contains(&ch)
}

fn is_quoted(word: &str) -> bool {
    word.len() >= 2 && word.starts_with('"') && word.ends_with('"')
}

/// Line tokenizer
pub struct Lexer<'a> {
    input: &'a str,
    word: String,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer over one line of text.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            word: String::new(),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire input.
    pub fn tokenize(mut self) -> Vec<Token> {
        for ch in self.input.chars() {
            if ch.is_whitespace() {
                self.flush_word();
            } else if is_symbol(ch) {
                // A symbol ends the pending word before being emitted itself
                self.flush_word();
                self.tokens.push(Token::new(TokenKind::Symbol, ch.to_string()));
            } else {
                self.word.push(ch);
            }
        }
        self.flush_word();

        self.tokens
    }

    fn flush_word(&mut self) {
        if self.word.is_empty() {
            return;
        }
        let word = std::mem::take(&mut self.word);
        self.tokens.push(Token::classify(&word));
    }
}

/// Tokenize a single line.
pub fn tokenize(line: &str) -> Vec<Token> {
    Lexer::new(line).tokenize()
}

/// Tokenize a sequence of lines and concatenate the results.
pub fn tokenize_lines<'a, I>(lines: I) -> Vec<Token>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tokens = Vec::new();
    for line in lines {
        tokens.extend(tokenize(line));
    }
    log::debug!("tokenized {} token(s)", tokens.len());
    tokens
}

/// Tokenize a whole source text, line by line.
pub fn tokenize_source(source: &str) -> Vec<Token> {
    tokenize_lines(source.lines())
}
