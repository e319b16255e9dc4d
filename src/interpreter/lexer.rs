use logos::Logos;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines the closed set of tokens the calculator understands; the
/// parser and evaluator never see anything else.
///
/// Two kinds are never produced by the lexer itself: [`Token::Error`] is
/// emitted by [`tokenize`] when the input contains an unrecognizable slice,
/// and [`Token::EndOfInput`] is the sentinel appended by the token stream.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\f\r]+")]
pub enum Token {
    /// Marks a slice of input the lexer could not recognize.
    Error,
    /// Synthetic end-of-input sentinel.
    EndOfInput,
    /// `\n`
    #[token("\n")]
    Newline,
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// Identifier tokens; variable names such as `x` or `eulerMascheroni`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `sqrt`
    #[token("sqrt")]
    FuncSqrt,
    /// `log`
    #[token("log")]
    FuncLog,
    /// `sin`
    #[token("sin")]
    FuncSin,
    /// `cos`
    #[token("cos")]
    FuncCos,
    /// `tan`
    #[token("tan")]
    FuncTan,
    /// `arcsin`
    #[token("arcsin")]
    FuncArcsin,
    /// `arccos`
    #[token("arccos")]
    FuncArccos,
    /// `arctan`
    #[token("arctan")]
    FuncArctan,
    /// `=`
    #[token("=")]
    Assign,
    /// `(`
    #[token("(")]
    ParenL,
    /// `)`
    #[token(")")]
    ParenR,
}

impl Token {
    /// Returns `true` when the token may stand alone as a leaf of an
    /// expression: a number or an identifier.
    ///
    /// # Example
    /// ```
    /// use cuentas::interpreter::lexer::Token;
    ///
    /// assert!(Token::Number(2.0).is_operand());
    /// assert!(Token::Identifier("x".to_string()).is_operand());
    /// assert!(!Token::Plus.is_operand());
    /// ```
    #[must_use]
    pub const fn is_operand(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Identifier(_))
    }

    /// Returns `true` for the five infix arithmetic operators:
    /// `+`, `-`, `*`, `/` and `^`.
    #[must_use]
    pub const fn is_binary_operator(&self) -> bool {
        matches!(self,
                 Self::Plus | Self::Minus | Self::Asterisk | Self::Slash | Self::Caret)
    }

    /// Returns `true` for tokens usable in prefix position: the signs `+` and
    /// `-`, and every function token.
    #[must_use]
    pub const fn is_unary_operator(&self) -> bool {
        matches!(self,
                 Self::Plus
                 | Self::Minus
                 | Self::FuncSqrt
                 | Self::FuncLog
                 | Self::FuncSin
                 | Self::FuncCos
                 | Self::FuncTan
                 | Self::FuncArcsin
                 | Self::FuncArccos
                 | Self::FuncArctan)
    }

    /// Returns `true` when the token is usable as an operator in either
    /// position.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        self.is_binary_operator() || self.is_unary_operator()
    }

    /// Returns `true` for the only right-associative operator, `^`.
    #[must_use]
    pub const fn is_right_associative(&self) -> bool {
        matches!(self, Self::Caret)
    }

    /// Returns the binding power of the token in infix position, or `None`
    /// for tokens that are not binary operators.
    ///
    /// Higher binds tighter: `+`/`-` bind at 1, `*`/`/` at 2, `^` at 3.
    ///
    /// # Example
    /// ```
    /// use cuentas::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Plus.binary_binding_power(), Some(1));
    /// assert_eq!(Token::Caret.binary_binding_power(), Some(3));
    /// assert_eq!(Token::ParenL.binary_binding_power(), None);
    /// ```
    #[must_use]
    pub const fn binary_binding_power(&self) -> Option<i8> {
        match self {
            Self::Plus | Self::Minus => Some(1),
            Self::Asterisk | Self::Slash => Some(2),
            Self::Caret => Some(3),
            _ => None,
        }
    }

    /// Returns the binding power of the token in prefix position, or `None`
    /// for tokens that are not unary operators.
    ///
    /// The signs bind at 5 and the function tokens at 4. Both exceed every
    /// binary binding power, so a prefix operator always binds tighter than
    /// the binary operator that follows its operand.
    ///
    /// # Example
    /// ```
    /// use cuentas::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Minus.unary_binding_power(), Some(5));
    /// assert_eq!(Token::FuncSqrt.unary_binding_power(), Some(4));
    /// assert_eq!(Token::Asterisk.unary_binding_power(), None);
    /// ```
    #[must_use]
    pub const fn unary_binding_power(&self) -> Option<i8> {
        match self {
            Self::Plus | Self::Minus => Some(5),
            Self::FuncSqrt
            | Self::FuncLog
            | Self::FuncSin
            | Self::FuncCos
            | Self::FuncTan
            | Self::FuncArcsin
            | Self::FuncArccos
            | Self::FuncArctan => Some(4),
            _ => None,
        }
    }

    /// Returns the numeric payload of a `Number` token.
    #[must_use]
    pub const fn number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the name carried by an `Identifier` token.
    #[must_use]
    pub fn identifier_name(&self) -> Option<&str> {
        match self {
            Self::Identifier(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Returns the display name of the token's kind, without any payload.
    ///
    /// Used to compose the expected-kind lists of parser diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Error => "<Error token>",
            Self::EndOfInput => "<EOF>",
            Self::Newline => "Newline",
            Self::Number(_) => "Number",
            Self::Identifier(_) => "Identifier",
            Self::Plus => "Plus ('+')",
            Self::Minus => "Minus ('-')",
            Self::Asterisk => "Asterisk ('*')",
            Self::Slash => "Slash ('/')",
            Self::Caret => "Caret ('^')",
            Self::FuncSqrt => "Sqrt function",
            Self::FuncLog => "Log function",
            Self::FuncSin => "Sin function",
            Self::FuncCos => "Cos function",
            Self::FuncTan => "Tan function",
            Self::FuncArcsin => "Arcsin function",
            Self::FuncArccos => "Arccos function",
            Self::FuncArctan => "Arctan function",
            Self::Assign => "Assign ('=')",
            Self::ParenL => "Left Parenthesis ('(')",
            Self::ParenR => "Right Parenthesis (')')",
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "<Error token>"),
            Self::EndOfInput => write!(f, "<EOF>"),
            Self::Newline => write!(f, "<Newline>"),
            Self::Number(value) => write!(f, "<Number {value}>"),
            Self::Identifier(name) => write!(f, "<Identifier {name}>"),
            Self::Plus => write!(f, "<Plus>"),
            Self::Minus => write!(f, "<Minus>"),
            Self::Asterisk => write!(f, "<Asterisk>"),
            Self::Slash => write!(f, "<Slash>"),
            Self::Caret => write!(f, "<Caret>"),
            Self::FuncSqrt => write!(f, "<Sqrt>"),
            Self::FuncLog => write!(f, "<Log>"),
            Self::FuncSin => write!(f, "<Sin>"),
            Self::FuncCos => write!(f, "<Cos>"),
            Self::FuncTan => write!(f, "<Tan>"),
            Self::FuncArcsin => write!(f, "<Arcsin>"),
            Self::FuncArccos => write!(f, "<Arccos>"),
            Self::FuncArctan => write!(f, "<Arctan>"),
            Self::Assign => write!(f, "<Assign>"),
            Self::ParenL => write!(f, "<Left Parenthesis>"),
            Self::ParenR => write!(f, "<Right Parenthesis>"),
        }
    }
}

/// Tokenizes one line of input.
///
/// Unrecognizable slices become [`Token::Error`] entries instead of aborting
/// the scan; callers that intend to parse the result must refuse it if any
/// error token is present.
///
/// The output does not end with [`Token::EndOfInput`]; the token stream
/// appends the sentinel on construction.
///
/// # Example
/// ```
/// use cuentas::interpreter::lexer::{Token, tokenize};
///
/// assert_eq!(tokenize("1 + x"),
///            vec![Token::Number(1.0),
///                 Token::Plus,
///                 Token::Identifier("x".to_string())]);
///
/// assert_eq!(tokenize("2 @"), vec![Token::Number(2.0), Token::Error]);
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    Token::lexer(input).map(|token| token.unwrap_or(Token::Error))
                       .collect()
}

/// Parses a numeric literal from the current token slice.
///
/// Returns `None` when the slice is not a valid `f64`, which makes logos
/// report the slice as a lexing error.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
