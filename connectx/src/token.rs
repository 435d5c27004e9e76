use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A player's marker, e.g. `X` or `O`.
///
/// Any character except whitespace can be a token, since a blank is how an
/// empty cell is rendered. An empty cell is represented by `Option::<Token>::None`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Token(char);

impl Token {
    pub fn new(c: char) -> Result<Self, InvalidToken> {
        if c.is_whitespace() || c.is_control() {
            Err(InvalidToken(c))
        } else {
            Ok(Self(c))
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Token {
    type Error = InvalidToken;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Token::new(c)
    }
}

impl From<Token> for char {
    fn from(token: Token) -> char {
        token.0
    }
}

impl FromStr for Token {
    type Err = InvalidToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Token::new(c),
            _ => Err(InvalidToken(s.chars().next().unwrap_or(' '))),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The error type for creating a [`Token`] from a blank character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidToken(pub char);

impl std::error::Error for InvalidToken {}

impl std::fmt::Display for InvalidToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?} cannot be used as a token, tokens must be single visible characters",
            self.0
        )
    }
}

/// Shorthand for creating a token from a character literal.
///
/// ```
/// # use connectx::{token, Token};
/// assert_eq!(token!('X'), Token::new('X').unwrap());
/// ```
#[macro_export]
macro_rules! token {
    ($c:literal) => {
        $crate::Token::new($c).expect("Invalid character given to token! macro")
    };
}
// The import is for using the macro in other modules
#[allow(unused_imports)]
pub(crate) use token;
