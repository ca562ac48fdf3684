//! String generation from a restricted regex grammar.
//!
//! Supported: literal characters, character classes (`[a-z0-9]`, ranges
//! and singletons), fixed repetition (`{n}` and `{n,m}`) and alternation
//! groups (`(ab|cd)`, nestable). Everything else fails with
//! [`GenError::UnsupportedPattern`]: silently misreading a pattern would
//! produce plausible output whose shape quietly disagrees with the
//! caller's intent, breaking reproducibility guarantees downstream.

use crate::error::GenError;
use crate::source::RandomSource;

/// Generate a string matching `pattern`.
pub fn from_regex<R: RandomSource>(rng: &mut R, pattern: &str) -> Result<String, GenError> {
    let nodes = parse(pattern)?;
    let mut out = String::new();
    realize_sequence(rng, &nodes, &mut out);
    Ok(out)
}

#[derive(Debug, Clone)]
enum Node {
    Literal(char),
    /// Inclusive character ranges; singletons are stored as `(c, c)`.
    Class(Vec<(char, char)>),
    /// Alternative branches, each a sequence of nodes.
    Group(Vec<Vec<Node>>),
    Repeat {
        node: Box<Node>,
        min: usize,
        max: usize,
    },
}

fn parse(pattern: &str) -> Result<Vec<Node>, GenError> {
    let mut parser = Parser {
        chars: pattern.chars().collect(),
        pos: 0,
    };
    let nodes = parser.parse_sequence()?;
    if let Some(c) = parser.peek() {
        // parse_sequence only stops early on '|' or ')'.
        return Err(parser.unsupported(format!("unmatched '{c}'")));
    }
    Ok(nodes)
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_second(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn unsupported(&self, message: impl Into<String>) -> GenError {
        GenError::UnsupportedPattern(format!("{} at position {}", message.into(), self.pos))
    }

    fn parse_sequence(&mut self) -> Result<Vec<Node>, GenError> {
        let mut nodes = Vec::new();
        while let Some(c) = self.peek() {
            if c == ')' || c == '|' {
                break;
            }
            let atom = self.parse_atom()?;
            nodes.push(self.parse_quantifier(atom)?);
        }
        Ok(nodes)
    }

    fn parse_atom(&mut self) -> Result<Node, GenError> {
        match self.peek() {
            Some('[') => self.parse_class(),
            Some('(') => self.parse_group(),
            Some(c @ ('*' | '+' | '?' | '.' | '^' | '$' | '\\' | ']' | '{' | '}')) => {
                Err(self.unsupported(format!("construct '{c}'")))
            }
            Some(c) => {
                self.bump();
                Ok(Node::Literal(c))
            }
            None => Err(self.unsupported("unexpected end of pattern")),
        }
    }

    fn parse_class(&mut self) -> Result<Node, GenError> {
        self.bump(); // consume '['
        if self.peek() == Some('^') {
            return Err(self.unsupported("negated character class"));
        }

        let mut ranges = Vec::new();
        loop {
            match self.bump() {
                None => return Err(self.unsupported("unterminated character class")),
                Some(']') => break,
                Some('\\') => return Err(self.unsupported("escape in character class")),
                Some(start) => {
                    let is_range = self.peek() == Some('-')
                        && self.peek_second().map_or(false, |next| next != ']');
                    if is_range {
                        self.bump(); // consume '-'
                        let end = match self.bump() {
                            Some(end) => end,
                            None => {
                                return Err(self.unsupported("unterminated character class"))
                            }
                        };
                        if start > end {
                            return Err(GenError::InvalidRange(format!(
                                "character range {start}-{end} is inverted"
                            )));
                        }
                        ranges.push((start, end));
                    } else {
                        ranges.push((start, start));
                    }
                }
            }
        }

        if ranges.is_empty() {
            return Err(self.unsupported("empty character class"));
        }
        Ok(Node::Class(ranges))
    }

    fn parse_group(&mut self) -> Result<Node, GenError> {
        self.bump(); // consume '('
        if self.peek() == Some('?') {
            return Err(self.unsupported("group modifier '(?'"));
        }

        let mut alternatives = vec![self.parse_sequence()?];
        loop {
            match self.peek() {
                Some('|') => {
                    self.bump();
                    alternatives.push(self.parse_sequence()?);
                }
                Some(')') => {
                    self.bump();
                    break;
                }
                _ => return Err(self.unsupported("unterminated group")),
            }
        }

        if alternatives.len() == 1 && alternatives[0].is_empty() {
            return Err(self.unsupported("empty group"));
        }
        Ok(Node::Group(alternatives))
    }

    fn parse_quantifier(&mut self, node: Node) -> Result<Node, GenError> {
        if self.peek() != Some('{') {
            return Ok(node);
        }
        self.bump(); // consume '{'

        let min = self.parse_count()?;
        let max = if self.peek() == Some(',') {
            self.bump();
            self.parse_count()?
        } else {
            min
        };
        if self.bump() != Some('}') {
            return Err(self.unsupported("unterminated repetition"));
        }
        if min > max {
            return Err(GenError::InvalidRange(format!(
                "repetition {{{min},{max}}} is inverted"
            )));
        }

        Ok(Node::Repeat {
            node: Box::new(node),
            min,
            max,
        })
    }

    fn parse_count(&mut self) -> Result<usize, GenError> {
        let mut digits = String::new();
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            digits.push(c);
            self.bump();
        }
        if digits.is_empty() {
            // Covers `{,n}`, `{n,}` and `{}`; open-ended repetition is
            // outside the subset.
            return Err(self.unsupported("missing repetition count"));
        }
        digits
            .parse()
            .map_err(|_| self.unsupported("repetition count out of range"))
    }
}

fn realize_sequence<R: RandomSource>(rng: &mut R, nodes: &[Node], out: &mut String) {
    for node in nodes {
        realize_node(rng, node, out);
    }
}

fn realize_node<R: RandomSource>(rng: &mut R, node: &Node, out: &mut String) {
    match node {
        Node::Literal(c) => out.push(*c),
        Node::Class(ranges) => out.push(pick_from_class(rng, ranges)),
        Node::Group(alternatives) => {
            let index = rng.next_below(alternatives.len() as u64) as usize;
            realize_sequence(rng, &alternatives[index], out);
        }
        Node::Repeat { node, min, max } => {
            let count = min + rng.next_below((max - min) as u64 + 1) as usize;
            for _ in 0..count {
                realize_node(rng, node, out);
            }
        }
    }
}

/// Pick a class member uniformly, weighting each range by its width so
/// every character is equally likely regardless of how ranges are split.
fn pick_from_class<R: RandomSource>(rng: &mut R, ranges: &[(char, char)]) -> char {
    let total: u64 = ranges
        .iter()
        .map(|(lo, hi)| u64::from(*hi as u32 - *lo as u32) + 1)
        .sum();
    let mut target = rng.next_below(total);
    for (lo, hi) in ranges {
        let width = u64::from(*hi as u32 - *lo as u32) + 1;
        if target < width {
            return char::from_u32(*lo as u32 + target as u32).unwrap_or(*lo);
        }
        target -= width;
    }
    ranges[0].0
}
