//! Restricted graph text formats
//!
//! Two formats are accepted:
//!
//! * A mapping literal, optionally bound to `graph` and accompanied by a
//!   `Heuristic_Values` mapping:
//!
//!   ```text
//!   graph = {
//!     'A': [('B', 3), ('C', 1)],
//!     'B': [('E', 7)],
//!     'C': [],
//!   }
//!   Heuristic_Values = {'A': 5, 'B': 2.5}
//!   ```
//!
//! * An edge list with one `from to [weight]` triple per line, separated
//!   by whitespace or commas. A missing weight defaults to `1`.
//!
//! `#` starts a comment in both formats. The literal format is parsed by a
//! small lexer and recursive-descent parser; nothing is evaluated.

use thiserror::Error;
use tracing::debug;

use super::{Edge, Graph};

/// Errors reported while reading graph text
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphParseError {
    /// Character that cannot start any token
    #[error("unexpected character '{ch}' at line {line}, column {column}")]
    UnexpectedChar {
        /// Offending character
        ch: char,
        /// 1-based line
        line: usize,
        /// 1-based column
        column: usize,
    },

    /// String literal without closing quote
    #[error("unterminated string starting at line {line}, column {column}")]
    UnterminatedString {
        /// 1-based line
        line: usize,
        /// 1-based column
        column: usize,
    },

    /// Token that does not fit the grammar at this point
    #[error("expected {expected} but found '{found}' at line {line}, column {column}")]
    UnexpectedToken {
        /// What the parser was looking for
        expected: &'static str,
        /// Rendering of the token actually seen
        found: String,
        /// 1-based line
        line: usize,
        /// 1-based column
        column: usize,
    },

    /// Input ended inside a construct
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd {
        /// What the parser was looking for
        expected: &'static str,
    },

    /// Assignment to a name other than `graph` or `Heuristic_Values`
    #[error("unknown binding '{name}' at line {line} (expected 'graph' or 'Heuristic_Values')")]
    UnknownBinding {
        /// Name on the left-hand side
        name: String,
        /// 1-based line
        line: usize,
    },

    /// Text contained no graph mapping
    #[error("no graph mapping found")]
    MissingGraph,

    /// Edge-list line with too few or too many fields
    #[error("malformed edge on line {line}: '{content}'")]
    MalformedEdge {
        /// 1-based line
        line: usize,
        /// The trimmed line
        content: String,
    },

    /// Edge-list weight that is not a number
    #[error("invalid weight '{value}' on line {line}")]
    InvalidWeight {
        /// Rejected weight text
        value: String,
        /// 1-based line
        line: usize,
    },
}

/// Parse the mapping-literal format
pub fn parse_literal(text: &str) -> Result<Graph, GraphParseError> {
    let tokens = Lexer::new(text).tokenize()?;
    let graph = Parser::new(tokens).document()?;
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "parsed graph literal"
    );
    Ok(graph)
}

/// Parse the edge-list format
pub fn parse_edge_list(text: &str) -> Result<Graph, GraphParseError> {
    let mut graph = Graph::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let content = raw.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }

        let fields: Vec<&str> = content
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|field| !field.is_empty() && *field != "->")
            .collect();

        let (from, to, weight) = match fields.as_slice() {
            [from, to] => (*from, *to, 1.0),
            [from, to, weight] => {
                let weight = weight.parse::<f64>().map_err(|_| GraphParseError::InvalidWeight {
                    value: weight.to_string(),
                    line: line_no,
                })?;
                (*from, *to, weight)
            }
            _ => {
                return Err(GraphParseError::MalformedEdge {
                    line: line_no,
                    content: content.to_string(),
                })
            }
        };

        graph.add_edge(from, to, weight);
        graph.add_node(to);
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "parsed edge list"
    );
    Ok(graph)
}

#[derive(Debug, Clone, PartialEq)]
enum TokenKind {
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    LParen,
    RParen,
    Colon,
    Comma,
    Equals,
    Str(String),
    Number(f64),
    Ident(String),
}

impl TokenKind {
    fn describe(&self) -> String {
        match self {
            TokenKind::LBrace => "{".into(),
            TokenKind::RBrace => "}".into(),
            TokenKind::LBracket => "[".into(),
            TokenKind::RBracket => "]".into(),
            TokenKind::LParen => "(".into(),
            TokenKind::RParen => ")".into(),
            TokenKind::Colon => ":".into(),
            TokenKind::Comma => ",".into(),
            TokenKind::Equals => "=".into(),
            TokenKind::Str(s) => format!("'{s}'"),
            TokenKind::Number(n) => n.to_string(),
            TokenKind::Ident(name) => name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Token {
    kind: TokenKind,
    line: usize,
    column: usize,
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn tokenize(mut self) -> Result<Vec<Token>, GraphParseError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
                continue;
            }
            if ch == '#' {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
                continue;
            }

            let (line, column) = (self.line, self.column);
            let kind = match ch {
                '{' | '}' | '[' | ']' | '(' | ')' | ':' | ',' | '=' => {
                    self.advance();
                    match ch {
                        '{' => TokenKind::LBrace,
                        '}' => TokenKind::RBrace,
                        '[' => TokenKind::LBracket,
                        ']' => TokenKind::RBracket,
                        '(' => TokenKind::LParen,
                        ')' => TokenKind::RParen,
                        ':' => TokenKind::Colon,
                        ',' => TokenKind::Comma,
                        _ => TokenKind::Equals,
                    }
                }
                '\'' | '"' => self.string(ch, line, column)?,
                c if c.is_ascii_digit() || c == '-' || c == '+' || c == '.' => {
                    self.number(line, column)?
                }
                c if c.is_alphabetic() || c == '_' => {
                    let mut name = String::new();
                    while let Some(c) = self.peek().filter(|c| c.is_alphanumeric() || *c == '_') {
                        name.push(c);
                        self.advance();
                    }
                    TokenKind::Ident(name)
                }
                _ => return Err(GraphParseError::UnexpectedChar { ch, line, column }),
            };

            tokens.push(Token { kind, line, column });
        }

        Ok(tokens)
    }

    fn string(&mut self, quote: char, line: usize, column: usize) -> Result<TokenKind, GraphParseError> {
        self.advance();
        let mut value = String::new();
        loop {
            match self.advance() {
                None | Some('\n') => return Err(GraphParseError::UnterminatedString { line, column }),
                Some('\\') => match self.advance() {
                    Some(escaped) => value.push(escaped),
                    None => return Err(GraphParseError::UnterminatedString { line, column }),
                },
                Some(c) if c == quote => return Ok(TokenKind::Str(value)),
                Some(c) => value.push(c),
            }
        }
    }

    fn number(&mut self, line: usize, column: usize) -> Result<TokenKind, GraphParseError> {
        let mut text = String::new();
        if let Some(sign) = self.peek().filter(|c| *c == '-' || *c == '+') {
            text.push(sign);
            self.advance();
        }
        while let Some(c) = self
            .peek()
            .filter(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '_'))
        {
            // Exponent sign
            if matches!(c, 'e' | 'E') {
                text.push(c);
                self.advance();
                if let Some(sign) = self.peek().filter(|c| *c == '-' || *c == '+') {
                    text.push(sign);
                    self.advance();
                }
                continue;
            }
            if c != '_' {
                text.push(c);
            }
            self.advance();
        }

        text.parse::<f64>()
            .map(TokenKind::Number)
            .map_err(|_| GraphParseError::UnexpectedToken {
                expected: "a number",
                found: text,
                line,
                column,
            })
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&TokenKind> {
        self.tokens.get(self.pos).map(|t| &t.kind)
    }

    fn next(&mut self, expected: &'static str) -> Result<Token, GraphParseError> {
        let token = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or(GraphParseError::UnexpectedEnd { expected })?;
        self.pos += 1;
        Ok(token)
    }

    fn unexpected(expected: &'static str, token: &Token) -> GraphParseError {
        GraphParseError::UnexpectedToken {
            expected,
            found: token.kind.describe(),
            line: token.line,
            column: token.column,
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<(), GraphParseError> {
        let token = self.next(expected)?;
        if token.kind == kind {
            Ok(())
        } else {
            Err(Self::unexpected(expected, &token))
        }
    }

    /// Consume `,` if present. Returns whether one was consumed.
    fn comma(&mut self) -> bool {
        if self.peek() == Some(&TokenKind::Comma) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn document(&mut self) -> Result<Graph, GraphParseError> {
        if self.peek() == Some(&TokenKind::LBrace) {
            let graph = self.graph_mapping()?;
            if let Some(token) = self.tokens.get(self.pos) {
                return Err(Self::unexpected("end of input", token));
            }
            return Ok(graph);
        }

        let mut graph = None;
        let mut heuristics = Vec::new();

        while self.pos < self.tokens.len() {
            let token = self.next("a binding name")?;
            let TokenKind::Ident(name) = token.kind.clone() else {
                return Err(Self::unexpected("a binding name", &token));
            };
            self.expect(TokenKind::Equals, "'='")?;

            match name.as_str() {
                "graph" => graph = Some(self.graph_mapping()?),
                "Heuristic_Values" | "heuristic_values" | "heuristics" => {
                    heuristics = self.heuristic_mapping()?
                }
                _ => {
                    return Err(GraphParseError::UnknownBinding {
                        name,
                        line: token.line,
                    })
                }
            }
        }

        let mut graph = graph.ok_or(GraphParseError::MissingGraph)?;
        for (node, value) in heuristics {
            graph.set_heuristic(node, value);
        }
        Ok(graph)
    }

    fn key(&mut self) -> Result<String, GraphParseError> {
        let token = self.next("a node name")?;
        match token.kind {
            TokenKind::Str(name) | TokenKind::Ident(name) => Ok(name),
            _ => Err(Self::unexpected("a node name", &token)),
        }
    }

    fn number(&mut self) -> Result<f64, GraphParseError> {
        let token = self.next("a number")?;
        match token.kind {
            TokenKind::Number(value) => Ok(value),
            _ => Err(Self::unexpected("a number", &token)),
        }
    }

    /// `{ key: [edge, ...], ... }`
    fn graph_mapping(&mut self) -> Result<Graph, GraphParseError> {
        let mut graph = Graph::new();
        self.expect(TokenKind::LBrace, "'{'")?;

        while self.peek() != Some(&TokenKind::RBrace) {
            let node = self.key()?;
            self.expect(TokenKind::Colon, "':'")?;
            let edges = self.edge_list()?;
            if graph.contains(&node) {
                debug!(node = %node, "duplicate key in graph literal, later entry wins");
            }
            graph.set_edges(node, edges);
            if !self.comma() {
                break;
            }
        }

        self.expect(TokenKind::RBrace, "'}'")?;
        Ok(graph)
    }

    /// `[ (target, weight), ... ]`
    fn edge_list(&mut self) -> Result<Vec<Edge>, GraphParseError> {
        let mut edges = Vec::new();
        self.expect(TokenKind::LBracket, "'['")?;

        while self.peek() != Some(&TokenKind::RBracket) {
            let open = self.next("'(' or '['")?;
            let close = match open.kind {
                TokenKind::LParen => TokenKind::RParen,
                TokenKind::LBracket => TokenKind::RBracket,
                _ => return Err(Self::unexpected("'(' or '['", &open)),
            };
            let to = self.key()?;
            self.expect(TokenKind::Comma, "','")?;
            let weight = self.number()?;
            self.comma();
            self.expect(close, "end of edge")?;
            edges.push(Edge::new(to, weight));

            if !self.comma() {
                break;
            }
        }

        self.expect(TokenKind::RBracket, "']'")?;
        Ok(edges)
    }

    /// `{ key: number, ... }`
    fn heuristic_mapping(&mut self) -> Result<Vec<(String, f64)>, GraphParseError> {
        let mut values = Vec::new();
        self.expect(TokenKind::LBrace, "'{'")?;

        while self.peek() != Some(&TokenKind::RBrace) {
            let node = self.key()?;
            self.expect(TokenKind::Colon, "':'")?;
            values.push((node, self.number()?));
            if !self.comma() {
                break;
            }
        }

        self.expect(TokenKind::RBrace, "'}'")?;
        Ok(values)
    }
}
