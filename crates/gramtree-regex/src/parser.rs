//! Recursive-descent front end for the regex-like surface syntax (§4.3).

use std::collections::BTreeSet;
use std::sync::Arc;

use gramtree_core::{glossary, ops, CharRange, GrammarNode, UnicodeCategory};

use crate::error::RegexParseError;

/// Parses `pattern` into a grammar tree.
///
/// `pattern := alt` per §4.3 — the whole string must reduce to a single
/// `alt`, not merely a prefix of it, so any unconsumed input left over
/// (e.g. a stray top-level `)`) is an error rather than silently dropped.
pub fn parse(pattern: &str) -> Result<Arc<GrammarNode>, RegexParseError> {
    let mut parser = Parser::new(pattern);
    let tree = parser.parse_alt()?;
    if !parser.at_end() {
        return Err(parser.err(
            parser.pos..parser.chars.len(),
            "Unexpected trailing input after pattern.",
        ));
    }
    Ok(tree)
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    next_capture_position: u32,
}

type PResult<T> = Result<T, RegexParseError>;

impl Parser {
    fn new(pattern: &str) -> Self {
        Self {
            chars: pattern.chars().collect(),
            pos: 0,
            next_capture_position: 1,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn err(&self, range: std::ops::Range<usize>, message: impl Into<String>) -> RegexParseError {
        RegexParseError::new(range, message)
    }

    // alt := seq ('|' seq)*
    fn parse_alt(&mut self) -> PResult<Arc<GrammarNode>> {
        let mut node = self.parse_seq()?;
        while self.peek() == Some('|') {
            self.advance();
            let rhs = self.parse_seq()?;
            node = ops::or(node, rhs);
        }
        Ok(node)
    }

    // seq := atom*  (may be empty -> canonical empty node)
    fn parse_seq(&mut self) -> PResult<Arc<GrammarNode>> {
        let mut node: Option<Arc<GrammarNode>> = None;
        while !self.at_end() && self.peek() != Some('|') && self.peek() != Some(')') {
            let atom = self.parse_atom()?;
            node = Some(match node {
                Some(existing) => ops::then(existing, atom),
                None => atom,
            });
        }
        Ok(node.unwrap_or_else(|| Arc::new(GrammarNode::negated_alternation(vec![]))))
    }

    // atom := primary quantifier?
    fn parse_atom(&mut self) -> PResult<Arc<GrammarNode>> {
        let primary = self.parse_primary()?;
        match self.try_parse_quantifier()? {
            Some((min, max)) => {
                let mut is_lazy = false;
                if self.peek() == Some('?') {
                    self.advance();
                    is_lazy = true;
                }
                let node = GrammarNode::repetition(primary, min, max, is_lazy)
                    .expect("quantifier bounds are always internally consistent");
                Ok(Arc::new(node))
            }
            None => Ok(primary),
        }
    }

    // quantifier := '?' | '*' | '+' | '{' N (',' N?)? '}'
    fn try_parse_quantifier(&mut self) -> PResult<Option<(u32, Option<u32>)>> {
        match self.peek() {
            Some('?') => {
                self.advance();
                Ok(Some((0, Some(1))))
            }
            Some('*') => {
                self.advance();
                Ok(Some((0, None)))
            }
            Some('+') => {
                self.advance();
                Ok(Some((1, None)))
            }
            Some('{') => {
                let checkpoint = self.pos;
                self.advance();
                match self.try_parse_brace_bounds() {
                    Some(bounds) => Ok(Some(bounds)),
                    None => {
                        self.pos = checkpoint;
                        Ok(None)
                    }
                }
            }
            _ => Ok(None),
        }
    }

    fn try_parse_brace_bounds(&mut self) -> Option<(u32, Option<u32>)> {
        let min_digits = self.read_digits();
        if min_digits.is_empty() {
            return None;
        }
        let min: u32 = min_digits.parse().ok()?;
        if self.peek() == Some('}') {
            self.advance();
            return Some((min, Some(min)));
        }
        if self.peek() != Some(',') {
            return None;
        }
        self.advance();
        let max_digits = self.read_digits();
        let max = if max_digits.is_empty() {
            None
        } else {
            Some(max_digits.parse().ok()?)
        };
        if self.peek() != Some('}') {
            return None;
        }
        self.advance();
        Some((min, max))
    }

    fn read_digits(&mut self) -> String {
        let mut s = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                s.push(c);
                self.advance();
            } else {
                break;
            }
        }
        s
    }

    // primary := '.' | char | '\' escape | '[' '^'? setItem+ ']' | group | backref
    fn parse_primary(&mut self) -> PResult<Arc<GrammarNode>> {
        match self.peek() {
            Some('.') => {
                self.advance();
                Ok(Arc::new(GrammarNode::Any))
            }
            Some('\\') => self.parse_escape_or_backref(),
            Some('[') => self.parse_set(),
            Some('(') => self.parse_group(),
            Some(c) => {
                self.advance();
                Ok(Arc::new(GrammarNode::CharacterTerminal(c)))
            }
            None => unreachable!("parse_seq only calls parse_atom while input remains"),
        }
    }

    // group := '(' ( '?:' alt | '?=' alt | '?!' alt | '?<' name '>' alt | alt ) ')'
    fn parse_group(&mut self) -> PResult<Arc<GrammarNode>> {
        let start = self.pos;
        self.advance(); // '('

        if self.peek() == Some('?') {
            return self.parse_special_group(start);
        }

        let position = self.next_capture_position;
        self.next_capture_position += 1;
        let inner = self.parse_alt()?;
        if self.peek() != Some(')') {
            return Err(self.err(start..self.pos, "Expected closing ')' for capture group."));
        }
        self.advance();
        Ok(Arc::new(GrammarNode::numbered_capture(position, inner)))
    }

    fn parse_special_group(&mut self, start: usize) -> PResult<Arc<GrammarNode>> {
        // '?' already confirmed at self.pos
        match self.peek_at(1) {
            Some(':') => {
                self.advance(); // '?'
                self.advance(); // ':'
                let inner = self.parse_alt()?;
                if self.peek() != Some(')') {
                    return Err(self.err(start..self.pos, "Unfinished non-capturing group."));
                }
                self.advance();
                Ok(inner)
            }
            Some('=') => {
                self.advance();
                self.advance();
                let inner = self.parse_alt()?;
                if self.peek() != Some(')') {
                    return Err(self.err(start..self.pos, "Unfinished lookahead."));
                }
                self.advance();
                Ok(Arc::new(GrammarNode::Lookahead(inner)))
            }
            Some('!') => {
                self.advance();
                self.advance();
                let inner = self.parse_alt()?;
                if self.peek() != Some(')') {
                    return Err(self.err(start..self.pos, "Unfinished lookahead."));
                }
                self.advance();
                Ok(Arc::new(GrammarNode::NegativeLookahead(inner)))
            }
            Some('<') => {
                self.advance(); // '?'
                self.advance(); // '<'
                let name = self.read_name();
                if name.is_empty() {
                    return Err(self.err(start..self.pos, "Invalid named capture group name."));
                }
                if self.peek() != Some('>') {
                    return Err(
                        self.err(start..self.pos, "Expected closing '>' for named capture group name.")
                    );
                }
                self.advance();
                let inner = self.parse_alt()?;
                if self.peek() != Some(')') {
                    return Err(self.err(start..self.pos, "Expected closing ')' for named capture group."));
                }
                self.advance();
                Ok(Arc::new(GrammarNode::named_capture(name, inner)))
            }
            _ => Err(self.err(start..start + 2, "Unrecognized group type.")),
        }
    }

    fn read_name(&mut self) -> String {
        let mut s = String::new();
        match self.peek() {
            Some(c) if c.is_alphabetic() || c == '_' => {
                s.push(c);
                self.advance();
            }
            _ => return s,
        }
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' {
                s.push(c);
                self.advance();
            } else {
                break;
            }
        }
        s
    }

    // '\' escape | '\' digits | '\k<' name '>'
    fn parse_escape_or_backref(&mut self) -> PResult<Arc<GrammarNode>> {
        let start = self.pos;
        self.advance(); // '\'

        match self.peek() {
            Some(c) if c.is_ascii_digit() => {
                let mut digits = String::new();
                while digits.len() < 4 {
                    match self.peek() {
                        Some(c) if c.is_ascii_digit() => {
                            digits.push(c);
                            self.advance();
                        }
                        _ => break,
                    }
                }
                if digits.len() >= 4 {
                    return Err(self.err(start..self.pos, "Invalid backreference."));
                }
                let position: u32 = digits.parse().expect("1-3 ascii digits");
                Ok(Arc::new(GrammarNode::NumberedBackreference(position)))
            }
            Some('k') => {
                self.advance();
                if self.peek() != Some('<') {
                    return Err(
                        self.err(start..self.pos, "Expected opening '<' for named backreference.")
                    );
                }
                self.advance();
                let name = self.read_name();
                if name.is_empty() {
                    return Err(self.err(start..self.pos, "Invalid named backreference name."));
                }
                if self.peek() != Some('>') {
                    return Err(
                        self.err(start..self.pos, "Expected closing '>' in named backreference.")
                    );
                }
                self.advance();
                Ok(Arc::new(GrammarNode::NamedBackreference(Arc::from(name))))
            }
            _ => {
                let node = self.parse_escape_body(start)?;
                Ok(Arc::new(node))
            }
        }
    }

    /// Parses the body of a non-backreference escape (`\X`), used both at
    /// the primary level and, via [`Self::parse_set_escape`], inside
    /// bracket expressions.
    fn parse_escape_body(&mut self, start: usize) -> PResult<GrammarNode> {
        let c = match self.peek() {
            Some(c) => c,
            None => return Err(self.err(start..self.pos, "Invalid escape sequence.")),
        };
        let literal = |c: char| Some(GrammarNode::CharacterTerminal(c));
        let simple = match c {
            'a' => literal('\u{7}'),
            'f' => literal('\u{C}'),
            'n' => literal('\n'),
            'r' => literal('\r'),
            't' => literal('\t'),
            'v' => literal('\u{B}'),
            '.' | '$' | '^' | '{' | '[' | '(' | '|' | ')' | '*' | '+' | '?' | '\\' => literal(c),
            _ => None,
        };
        if let Some(node) = simple {
            self.advance();
            return Ok(node);
        }
        match c {
            'x' => {
                self.advance();
                let h1 = self.advance();
                let h2 = self.advance();
                match (h1.and_then(|c| c.to_digit(16)), h2.and_then(|c| c.to_digit(16))) {
                    (Some(a), Some(b)) => {
                        let code = a * 16 + b;
                        let ch = char::from_u32(code)
                            .ok_or_else(|| self.err(start..self.pos, "Invalid escape sequence."))?;
                        Ok(GrammarNode::CharacterTerminal(ch))
                    }
                    _ => Err(self.err(start..self.pos, "Invalid escape sequence.")),
                }
            }
            'd' => {
                self.advance();
                Ok(GrammarNode::CharacterRange(glossary::digit_range()))
            }
            'D' => {
                self.advance();
                Ok(GrammarNode::NegatedCharacterRange(glossary::digit_range()))
            }
            'w' => {
                self.advance();
                Ok(word_class(false))
            }
            'W' => {
                self.advance();
                Ok(word_class(true))
            }
            's' => {
                self.advance();
                Ok(whitespace_class(false))
            }
            'S' => {
                self.advance();
                Ok(whitespace_class(true))
            }
            'p' | 'P' => {
                let negated = c == 'P';
                self.advance();
                self.parse_unicode_category(start, negated)
            }
            _ => Err(self.err(start..self.pos + 1, "Invalid escape sequence.")),
        }
    }

    fn parse_unicode_category(&mut self, start: usize, negated: bool) -> PResult<GrammarNode> {
        if self.peek() != Some('{') {
            return Err(self.err(start..self.pos, "Invalid escape sequence."));
        }
        self.advance();
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if c == '}' {
                break;
            }
            name.push(c);
            self.advance();
        }
        if self.peek() != Some('}') {
            return Err(self.err(start..self.pos, "Invalid escape sequence."));
        }
        self.advance();
        match UnicodeCategory::parse(&name) {
            Some(cat) => Ok(if negated {
                GrammarNode::NegatedUnicodeCategoryTerminal(cat)
            } else {
                GrammarNode::UnicodeCategoryTerminal(cat)
            }),
            None => Err(self.err(
                start..self.pos,
                format!("Invalid unicode class or code block name: {name}."),
            )),
        }
    }

    // '[' '^'? setItem+ ']'
    fn parse_set(&mut self) -> PResult<Arc<GrammarNode>> {
        let start = self.pos;
        self.advance(); // '['

        let negated = if self.peek() == Some('^') {
            self.advance();
            true
        } else {
            false
        };

        let mut chars = BTreeSet::new();
        let mut nodes: Vec<Arc<GrammarNode>> = Vec::new();
        let mut first = true;

        loop {
            match self.peek() {
                None => return Err(self.err(start..self.pos, "Unfinished set.")),
                Some(']') if !first => {
                    self.advance();
                    break;
                }
                Some(']') => {
                    // literal ']' allowed as the very first item
                    self.advance();
                    chars.insert(']');
                }
                Some('\\') => {
                    let esc_start = self.pos;
                    self.advance();
                    let node = self.parse_escape_body(esc_start)?;
                    classify_set_member(node, &mut chars, &mut nodes);
                }
                Some(c1) => {
                    self.advance();
                    if self.peek() == Some('-')
                        && self.peek_at(1).is_some()
                        && self.peek_at(1) != Some(']')
                    {
                        self.advance(); // '-'
                        let c2 = self.advance().expect("checked above");
                        match CharRange::new(c1, c2) {
                            Some(range) => nodes.push(Arc::new(GrammarNode::CharacterRange(range))),
                            None => return Err(self.err(start..self.pos, "Unfinished set.")),
                        }
                    } else {
                        chars.insert(c1);
                    }
                }
            }
            first = false;
        }

        Ok(Arc::new(if negated {
            GrammarNode::negated_character_set(chars, nodes)
        } else {
            GrammarNode::character_set(chars, nodes)
        }))
    }
}

fn classify_set_member(node: GrammarNode, chars: &mut BTreeSet<char>, nodes: &mut Vec<Arc<GrammarNode>>) {
    match node {
        GrammarNode::CharacterTerminal(c) => {
            chars.insert(c);
        }
        other => nodes.push(Arc::new(other)),
    }
}

fn word_class(negated: bool) -> GrammarNode {
    let chars: BTreeSet<char> = glossary::word_extra_chars().into_iter().collect();
    let nodes = glossary::word_ranges()
        .into_iter()
        .map(|r| Arc::new(GrammarNode::CharacterRange(r)))
        .collect();
    if negated {
        GrammarNode::negated_character_set(chars, nodes)
    } else {
        GrammarNode::character_set(chars, nodes)
    }
}

fn whitespace_class(negated: bool) -> GrammarNode {
    let chars: BTreeSet<char> = glossary::whitespace_chars().into_iter().collect();
    if negated {
        GrammarNode::negated_character_set(chars, vec![])
    } else {
        GrammarNode::character_set(chars, vec![])
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod parser_tests;
