//! Character-class catalogue: inclusive ranges and Unicode general
//! categories shared by the regex surface syntax and the grammar node
//! algebra.

/// An inclusive range of characters, `start ..= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharRange {
    pub start: char,
    pub end: char,
}

impl CharRange {
    pub fn new(start: char, end: char) -> Option<Self> {
        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    pub fn contains(&self, c: char) -> bool {
        c >= self.start && c <= self.end
    }
}

/// The Unicode general category of a code point, covering the standard
/// two-letter categories and their single-letter aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnicodeCategory {
    Lu,
    Ll,
    Lt,
    Lm,
    Lo,
    Mn,
    Mc,
    Me,
    Nd,
    Nl,
    No,
    Pc,
    Pd,
    Ps,
    Pe,
    Pi,
    Pf,
    Po,
    Sm,
    Sc,
    Sk,
    So,
    Zs,
    Zl,
    Zp,
    Cc,
    Cf,
    Cs,
    Co,
    Cn,
    /// Aggregate: union of Lu, Ll, Lt, Lm, Lo.
    L,
    /// Aggregate: union of Mn, Mc, Me.
    M,
    /// Aggregate: union of Nd, Nl, No.
    N,
    /// Aggregate: union of Pc, Pd, Ps, Pe, Pi, Pf, Po.
    P,
    /// Aggregate: union of Sm, Sc, Sk, So.
    S,
    /// Aggregate: union of Zs, Zl, Zp.
    Z,
    /// Aggregate: union of Cc, Cf, Cs, Co, Cn.
    C,
}

impl UnicodeCategory {
    /// Parses a category name as it appears in `\p{NAME}` / `\P{NAME}`.
    pub fn parse(name: &str) -> Option<Self> {
        use UnicodeCategory::*;
        Some(match name {
            "Lu" => Lu,
            "Ll" => Ll,
            "Lt" => Lt,
            "Lm" => Lm,
            "Lo" => Lo,
            "Mn" => Mn,
            "Mc" => Mc,
            "Me" => Me,
            "Nd" => Nd,
            "Nl" => Nl,
            "No" => No,
            "Pc" => Pc,
            "Pd" => Pd,
            "Ps" => Ps,
            "Pe" => Pe,
            "Pi" => Pi,
            "Pf" => Pf,
            "Po" => Po,
            "Sm" => Sm,
            "Sc" => Sc,
            "Sk" => Sk,
            "So" => So,
            "Zs" => Zs,
            "Zl" => Zl,
            "Zp" => Zp,
            "Cc" => Cc,
            "Cf" => Cf,
            "Cs" => Cs,
            "Co" => Co,
            "Cn" => Cn,
            "L" => L,
            "M" => M,
            "N" => N,
            "P" => P,
            "S" => S,
            "Z" => Z,
            "C" => C,
            _ => return None,
        })
    }

    /// Classifies a character into its specific (non-aggregate) category.
    ///
    /// Implemented with `char` predicates from `core`/`std` rather than a
    /// full Unicode Character Database table; this covers ASCII precisely
    /// and approximates the wider ranges via the standard library's own
    /// classification (`is_alphabetic`, `is_numeric`, `is_whitespace`,
    /// `is_control`).
    pub fn classify(c: char) -> UnicodeCategory {
        use UnicodeCategory::*;
        if c.is_control() {
            return Cc;
        }
        if c.is_whitespace() {
            return Zs;
        }
        if c.is_ascii_uppercase() || (c.is_alphabetic() && c.is_uppercase()) {
            return Lu;
        }
        if c.is_ascii_lowercase() || (c.is_alphabetic() && c.is_lowercase()) {
            return Ll;
        }
        if c.is_alphabetic() {
            return Lo;
        }
        if c.is_ascii_digit() || c.is_numeric() {
            return Nd;
        }
        if "!\"#%&'*,./:;?@\\".contains(c) {
            return Po;
        }
        if "(".contains(c) {
            return Ps;
        }
        if ")".contains(c) {
            return Pe;
        }
        if "-".contains(c) {
            return Pd;
        }
        if "+<=>|~^$".contains(c) {
            return Sm;
        }
        if c == '_' {
            return Pc;
        }
        So
    }

    /// True iff `c`'s category equals or aggregates to `self`.
    pub fn matches(&self, c: char) -> bool {
        use UnicodeCategory::*;
        let specific = Self::classify(c);
        if specific == *self {
            return true;
        }
        match self {
            L => matches!(specific, Lu | Ll | Lt | Lm | Lo),
            M => matches!(specific, Mn | Mc | Me),
            N => matches!(specific, Nd | Nl | No),
            P => matches!(specific, Pc | Pd | Ps | Pe | Pi | Pf | Po),
            S => matches!(specific, Sm | Sc | Sk | So),
            Z => matches!(specific, Zs | Zl | Zp),
            C => matches!(specific, Cc | Cf | Cs | Co | Cn),
            _ => false,
        }
    }
}

/// `\d`: `[0-9]`.
pub fn digit_range() -> CharRange {
    CharRange::new('0', '9').expect("'0' <= '9'")
}

/// `\w`: `[A-Za-z0-9_]`, expressed as its constituent ranges plus `_`.
pub fn word_ranges() -> Vec<CharRange> {
    vec![
        CharRange::new('A', 'Z').expect("'A' <= 'Z'"),
        CharRange::new('a', 'z').expect("'a' <= 'z'"),
        CharRange::new('0', '9').expect("'0' <= '9'"),
    ]
}

pub fn word_extra_chars() -> Vec<char> {
    vec!['_']
}

/// `\s`: `[ \t\n\r\f\v]`.
pub fn whitespace_chars() -> Vec<char> {
    vec![' ', '\t', '\n', '\r', '\u{000C}', '\u{000B}']
}

#[cfg(test)]
#[path = "glossary_tests.rs"]
mod glossary_tests;
