use crate::interpreter::operator::{BasicArithmetic, OperationRef};
use crate::interpreter::token::Token;
use crate::interpreter::Number;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Classifies a single lexical unit of text as a token, if it can.
///
/// Recognizers are composed with [`chained`](Recognizer::chained): the first recognizer
/// that classifies a unit wins. Any `Fn(&str) -> Option<Token>` is a recognizer.
///
/// # Examples
///
/// ```
/// use verbal_calculator::interpreter::recognizer::{DecimalNumbers, Recognizer};
/// use verbal_calculator::interpreter::token::Token;
///
/// let dozen = |unit: &str| (unit == "dozen").then(|| Token::Number(12));
/// let recognizer = DecimalNumbers.chained(dozen);
///
/// assert_eq!(recognizer.recognize("dozen"), Some(Token::Number(12)));
/// assert_eq!(recognizer.recognize("1,024"), Some(Token::Number(1024)));
/// assert_eq!(recognizer.recognize("gross"), None);
/// ```
pub trait Recognizer {
    fn recognize(&self, unit: &str) -> Option<Token>;

    fn chained<R: Recognizer>(self, next: R) -> Chained<Self, R>
    where
        Self: Sized,
    {
        Chained { first: self, next }
    }
}

impl<F> Recognizer for F
where
    F: Fn(&str) -> Option<Token>,
{
    fn recognize(&self, unit: &str) -> Option<Token> {
        self(unit)
    }
}

/// Two recognizers tried in order.
#[derive(Debug, Clone)]
pub struct Chained<A, B> {
    first: A,
    next: B,
}

impl<A: Recognizer, B: Recognizer> Recognizer for Chained<A, B> {
    fn recognize(&self, unit: &str) -> Option<Token> {
        self.first
            .recognize(unit)
            .or_else(|| self.next.recognize(unit))
    }
}

/// The recognizers used when none are given: numerals, then number words, then operators.
pub type DefaultRecognizer = Chained<Chained<DecimalNumbers, SpelledOutNumbers>, OperatorWords>;

pub fn default_recognizer() -> DefaultRecognizer {
    DecimalNumbers
        .chained(SpelledOutNumbers)
        .chained(OperatorWords::basic_arithmetic())
}

static DECIMAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)$").unwrap());

/// Decimal numerals, optionally grouped by thousands: `17`, `1,000`.
#[derive(Debug, Copy, Clone, Default)]
pub struct DecimalNumbers;

impl Recognizer for DecimalNumbers {
    fn recognize(&self, unit: &str) -> Option<Token> {
        if !DECIMAL_RE.is_match(unit) {
            return None;
        }
        match unit.replace(',', "").parse::<Number>() {
            Ok(value) => Some(Token::Number(value)),
            Err(error) => {
                debug!("Numeral {:?} is not representable: {}", unit, error);
                None
            }
        }
    }
}

/// English number words, including hyphenated compounds such as `seventy-two` or
/// `three-hundred-five`.
#[derive(Debug, Copy, Clone, Default)]
pub struct SpelledOutNumbers;

impl Recognizer for SpelledOutNumbers {
    fn recognize(&self, unit: &str) -> Option<Token> {
        spelled_out_value(&unit.to_lowercase()).map(Token::Number)
    }
}

fn digit(word: &str) -> Option<Number> {
    let value = match word {
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        _ => return None,
    };
    Some(value)
}

fn teen(word: &str) -> Option<Number> {
    let value = match word {
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        "thirteen" => 13,
        "fourteen" => 14,
        "fifteen" => 15,
        "sixteen" => 16,
        "seventeen" => 17,
        "eighteen" => 18,
        "nineteen" => 19,
        _ => return None,
    };
    Some(value)
}

fn tens(word: &str) -> Option<Number> {
    let value = match word {
        "twenty" => 20,
        "thirty" => 30,
        "forty" => 40,
        "fifty" => 50,
        "sixty" => 60,
        "seventy" => 70,
        "eighty" => 80,
        "ninety" => 90,
        _ => return None,
    };
    Some(value)
}

/// Scales that separate groups of up to three digits, largest first in a compound.
fn group_scale(word: &str) -> Option<Number> {
    match word {
        "thousand" => Some(1_000),
        "million" => Some(1_000_000),
        _ => None,
    }
}

/// `seven`, `fourteen`, `forty`, `forty-two`.
fn below_hundred(words: &[&str]) -> Option<Number> {
    match words {
        [word] => digit(word).or_else(|| teen(word)).or_else(|| tens(word)),
        [ten, unit] => Some(tens(ten)? + digit(unit)?),
        _ => None,
    }
}

/// `three-hundred`, `three-hundred-five`, or anything below a hundred.
fn below_thousand(words: &[&str]) -> Option<Number> {
    match words {
        [hundreds, "hundred"] => Some(digit(hundreds)? * 100),
        [hundreds, "hundred", rest @ ..] => Some(digit(hundreds)? * 100 + below_hundred(rest)?),
        _ => below_hundred(words),
    }
}

fn spelled_out_value(unit: &str) -> Option<Number> {
    match unit {
        "zero" => return Some(0),
        "hundred" => return Some(100),
        _ => {}
    }
    if let Some(scale) = group_scale(unit) {
        return Some(scale);
    }

    let mut total: Number = 0;
    let mut previous_scale: Option<Number> = None;
    let mut group: Vec<&str> = Vec::new();

    for word in unit.split('-') {
        let scale = match group_scale(word) {
            Some(scale) => scale,
            None => {
                group.push(word);
                continue;
            }
        };
        if previous_scale.map_or(false, |previous| scale >= previous) {
            return None;
        }
        total += below_thousand(&group)? * scale;
        previous_scale = Some(scale);
        group.clear();
    }

    if !group.is_empty() {
        total += below_thousand(&group)?;
    }
    Some(total)
}

/// Words and symbols naming operations.
#[derive(Debug, Clone, Default)]
pub struct OperatorWords {
    words: HashMap<String, OperationRef>,
}

impl OperatorWords {
    pub fn new() -> OperatorWords {
        OperatorWords::default()
    }

    /// All aliases of the built-in arithmetic operations, such as `plus`, `×` and `divided`.
    pub fn basic_arithmetic() -> OperatorWords {
        BasicArithmetic::ALL
            .iter()
            .flat_map(|arithmetic| {
                arithmetic
                    .aliases()
                    .iter()
                    .map(move |alias| (*alias, arithmetic.as_operation()))
            })
            .fold(OperatorWords::new(), |words, (alias, operation)| {
                words.with_word(alias, operation)
            })
    }

    /// Registers a word for an operation, replacing any earlier registration of the word.
    pub fn with_word(mut self, word: impl Into<String>, operation: OperationRef) -> OperatorWords {
        self.words.insert(word.into().to_lowercase(), operation);
        self
    }
}

impl Recognizer for OperatorWords {
    fn recognize(&self, unit: &str) -> Option<Token> {
        self.words
            .get(&unit.to_lowercase())
            .map(|operation| Token::Operation(*operation))
    }
}
