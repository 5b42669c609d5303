// neurafeed-schema/src/tokens.rs
// Keywords of the textual network format.

use std::fmt;

/// A keyword of the schema format. Key tokens end with `=` and are directly
/// followed by their value; `layer={` and `}` stand alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    Name,
    StartLayer,
    EndLayer,
    ActivationFunction,
    InputUnits,
    OutputUnits,
    Weights,
}

impl Token {
    pub const ALL: [Token; 7] = [
        Token::StartLayer,
        Token::EndLayer,
        Token::Name,
        Token::ActivationFunction,
        Token::InputUnits,
        Token::OutputUnits,
        Token::Weights,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Token::Name => "nome=",
            Token::StartLayer => "layer={",
            Token::EndLayer => "}",
            Token::ActivationFunction => "activationFunction=",
            Token::InputUnits => "inputUnits=",
            Token::OutputUnits => "outputUnits=",
            Token::Weights => "weights=",
        }
    }

    /// Every token but `weights=` must appear on a layer line.
    pub fn is_mandatory(self) -> bool {
        self != Token::Weights
    }

    fn is_standalone(self) -> bool {
        matches!(self, Token::StartLayer | Token::EndLayer)
    }

    /// Recognises a whitespace separated fragment, returning the token and
    /// its value (empty for standalone tokens).
    pub fn split(fragment: &str) -> Option<(Token, &str)> {
        Token::ALL.iter().find_map(|&token| {
            if token.is_standalone() {
                (fragment == token.as_str()).then_some((token, ""))
            } else {
                fragment
                    .strip_prefix(token.as_str())
                    .map(|value| (token, value))
            }
        })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
