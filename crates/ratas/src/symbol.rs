// Symbols, state labels and the memory bottom marker.

use std::fmt;

/// A state label. Opaque: the engine assumes nothing beyond equality.
pub type State = String;

/// Sentinel symbol sitting at the base of every memory stack.
///
/// It is placed there when a memoried run starts and is never removed by
/// an ordinary pop, so a legal run can never observe an empty stack.
pub const BOTTOM_MARKER: char = '|';

/// One input or memory symbol, or the distinguished epsilon marker.
///
/// Epsilon means "consume nothing" on whichever axis it appears:
/// as a read symbol it consumes no input, as a pop symbol it leaves the
/// memory stack untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// No symbol on this axis.
    Epsilon,
    /// A concrete single character.
    Char(char),
}

impl Symbol {
    /// `true` for the epsilon marker.
    #[inline]
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Symbol::Epsilon)
    }

    /// The concrete character, if any.
    #[inline]
    pub fn as_char(&self) -> Option<char> {
        match self {
            Symbol::Epsilon => None,
            Symbol::Char(c) => Some(*c),
        }
    }

    /// `true` when this symbol would consume the given lookahead character.
    #[inline]
    pub fn matches_char(&self, ch: char) -> bool {
        matches!(self, Symbol::Char(c) if *c == ch)
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol::Char(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // U+03B5 GREEK SMALL LETTER EPSILON, display only
            Symbol::Epsilon => f.write_str("\u{03b5}"),
            Symbol::Char(c) => write!(f, "{c}"),
        }
    }
}
