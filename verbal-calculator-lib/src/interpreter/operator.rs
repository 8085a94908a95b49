use crate::interpreter::error::EvaluationError;
use crate::interpreter::Number;
use std::fmt;
use std::fmt::Formatter;

/// How tightly an operation binds. Higher values are reduced first.
pub type Priority = u8;

/// A shared, immutable reference to an operation.
pub type OperationRef = &'static dyn Operation;

/// A binary operation that can appear between two numbers of an expression chain.
///
/// The evaluator only ever looks at [`priority`](Operation::priority) and
/// [`reduce`](Operation::reduce), so new operations can be plugged in by implementing
/// this trait on a type with a `'static` instance.
///
/// # Examples
///
/// ```
/// use verbal_calculator::interpreter::error::EvaluationError;
/// use verbal_calculator::interpreter::operator::{BasicArithmetic, Operation, Priority};
/// use verbal_calculator::interpreter::syntax::expression_chain::ChainBuilder;
/// use verbal_calculator::interpreter::Number;
///
/// #[derive(Debug)]
/// struct Power;
///
/// impl Operation for Power {
///     fn priority(&self) -> Priority {
///         15
///     }
///     fn symbol(&self) -> &str {
///         "^"
///     }
///     fn reduce(&self, left: Number, right: Number) -> Result<Number, EvaluationError> {
///         Ok(left.pow(right as u32))
///     }
/// }
///
/// static POWER: Power = Power;
///
/// let expression = ChainBuilder::new(2)
///     .op(BasicArithmetic::Multiply.as_operation(), 3)
///     .op(&POWER, 2)
///     .build()
///     .unwrap();
/// assert_eq!(expression.evaluate(), Ok(18));
/// ```
pub trait Operation: fmt::Debug + Send + Sync {
    fn priority(&self) -> Priority;

    /// The canonical symbol used when rendering the operation.
    fn symbol(&self) -> &str;

    fn reduce(&self, left: Number, right: Number) -> Result<Number, EvaluationError>;

    fn precedence_eq(&self, other: &dyn Operation) -> bool {
        self.priority().eq(&other.priority())
    }

    fn precedence_gt(&self, other: &dyn Operation) -> bool {
        self.priority().gt(&other.priority())
    }

    fn precedence_ge(&self, other: &dyn Operation) -> bool {
        self.priority().ge(&other.priority())
    }

    fn precedence_lt(&self, other: &dyn Operation) -> bool {
        self.priority().lt(&other.priority())
    }
}

/// The built-in arithmetic operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BasicArithmetic {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BasicArithmetic {
    pub const ALL: [BasicArithmetic; 4] = [
        BasicArithmetic::Add,
        BasicArithmetic::Subtract,
        BasicArithmetic::Multiply,
        BasicArithmetic::Divide,
    ];

    pub fn as_operation(self) -> OperationRef {
        match self {
            BasicArithmetic::Add => &BasicArithmetic::Add,
            BasicArithmetic::Subtract => &BasicArithmetic::Subtract,
            BasicArithmetic::Multiply => &BasicArithmetic::Multiply,
            BasicArithmetic::Divide => &BasicArithmetic::Divide,
        }
    }

    /// Words and symbols that name this operation in free-form text.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            BasicArithmetic::Add => &["+", "plus", "add", "adding"],
            BasicArithmetic::Subtract => &["-", "−", "minus", "subtract", "subtracting"],
            BasicArithmetic::Multiply => &["*", "×", "times", "multiplied"],
            BasicArithmetic::Divide => &["/", "÷", "divided", "over"],
        }
    }

    fn overflow(&self, left: Number, right: Number) -> EvaluationError {
        EvaluationError::Overflow {
            left,
            symbol: self.symbol().to_string(),
            right,
        }
    }
}

impl Operation for BasicArithmetic {
    fn priority(&self) -> Priority {
        match self {
            BasicArithmetic::Add | BasicArithmetic::Subtract => 5,
            BasicArithmetic::Multiply | BasicArithmetic::Divide => 10,
        }
    }

    fn symbol(&self) -> &str {
        match self {
            BasicArithmetic::Add => "+",
            BasicArithmetic::Subtract => "-",
            BasicArithmetic::Multiply => "×",
            BasicArithmetic::Divide => "÷",
        }
    }

    fn reduce(&self, left: Number, right: Number) -> Result<Number, EvaluationError> {
        let result = match self {
            BasicArithmetic::Add => left.checked_add(right),
            BasicArithmetic::Subtract => left.checked_sub(right),
            BasicArithmetic::Multiply => left.checked_mul(right),
            BasicArithmetic::Divide => {
                if right == 0 {
                    return Err(EvaluationError::DivisionByZero { dividend: left });
                }
                left.checked_div(right)
            }
        };
        result.ok_or_else(|| self.overflow(left, right))
    }
}

impl fmt::Display for BasicArithmetic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
