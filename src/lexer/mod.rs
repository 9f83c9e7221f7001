//! BrightScript scanner.
//!
//! [`Lexer::lex`] walks the source once, classifying lexemes through a
//! [`MatchProvider`], building [`Token`]s and routing every lexeme through the
//! style rules as it goes.

mod driver;
mod matcher;
mod result;
mod state;
mod token;

pub use driver::Lexer;
pub use matcher::{BrightScriptMatcher, Classified, MatchProvider, Unmatched};
pub use result::{ScanOutcome, ScanResult, ScanStatus};
pub use state::{LineState, ScanCursor, ScanState, SuppressionState};
pub use token::{Token, TokenKind, build_token};
