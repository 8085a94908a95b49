use crate::interpreter::recognizer::{default_recognizer, DefaultRecognizer, Recognizer};
use crate::interpreter::token::Token;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Words (possibly hyphenated), numerals (possibly grouped by thousands), or any other
/// single non-space character.
static LEXICAL_UNIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\p{Alphabetic}+(?:-\p{Alphabetic}+)*|[0-9]{1,3}(?:,[0-9]{3})+|[0-9]+|[^\s\p{Alphabetic}0-9]")
        .unwrap()
});

/// Turns free-form text into the tokens of an expression.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// Splits text into lexical units and classifies each of them with a [`Recognizer`].
///
/// Units that are not recognized are skipped, so filler words such as the "by" in
/// "divided by" do not take part in the expression. A hyphenated unit that is not
/// recognized as a whole is retried word by word, so `five-minus-two` reads as
/// `five minus two`.
#[derive(Debug, Clone)]
pub struct WordTokenizer<R> {
    recognizer: R,
}

impl<R: Recognizer> WordTokenizer<R> {
    pub fn new(recognizer: R) -> WordTokenizer<R> {
        WordTokenizer { recognizer }
    }

    fn recognize_or_skip(&self, unit: &str) -> Option<Token> {
        let token = self.recognizer.recognize(unit);
        if token.is_none() {
            debug!("Skipping unrecognized lexical unit {:?}", unit);
        }
        token
    }
}

impl Default for WordTokenizer<DefaultRecognizer> {
    fn default() -> Self {
        WordTokenizer::new(default_recognizer())
    }
}

impl<R: Recognizer> Tokenizer for WordTokenizer<R> {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        for unit in lexical_units(text) {
            if let Some(token) = self.recognizer.recognize(unit) {
                tokens.push(token);
            } else if unit.contains('-') {
                debug!("Splitting unrecognized hyphenated unit {:?}", unit);
                tokens.extend(unit.split('-').filter_map(|word| self.recognize_or_skip(word)));
            } else {
                debug!("Skipping unrecognized lexical unit {:?}", unit);
            }
        }
        tokens
    }
}

/// Splits the given text into the units a recognizer is asked to classify.
pub fn lexical_units(text: &str) -> impl Iterator<Item = &str> {
    LEXICAL_UNIT_RE.find_iter(text).map(|unit| unit.as_str())
}

/// Tokenizes text with the default recognizers.
///
/// # Examples
///
/// ```
/// use verbal_calculator::interpreter::lexer::tokenize;
/// use verbal_calculator::interpreter::operator::BasicArithmetic;
/// use verbal_calculator::interpreter::token::Token;
///
/// let tokens = tokenize("seventy-two divided by 8");
/// assert_eq!(
///     tokens,
///     [Token::Number(72), BasicArithmetic::Divide.into(), Token::Number(8)]
/// );
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    WordTokenizer::default().tokenize(text)
}
