use std::fmt;
use serde::{Deserialize, Serialize};

/// How many facts a practice run is advertised to contain.
///
/// Shown on the welcome page only; the grader never stops on its own.
pub const DEFAULT_MAX_QUESTIONS: u32 = 150;

// ---------------------------------------------------------------------------
// Fact primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Addition,
    Subtraction,
    Multiplication,
}

impl Operator {
    /// Symbol shown between the operands.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Addition       => "+",
            Operator::Subtraction    => "-",
            Operator::Multiplication => "*",
        }
    }

    /// Expected result of `x <op> y`.
    pub fn apply(self, x: u32, y: u32) -> i64 {
        let (x, y) = (i64::from(x), i64::from(y));
        match self {
            Operator::Addition       => x + y,
            Operator::Subtraction    => x - y,
            Operator::Multiplication => x * y,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single arithmetic problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub x: u32,
    pub y: u32,
    pub operator: Operator,
}

impl Fact {
    pub fn new(x: u32, operator: Operator, y: u32) -> Self {
        Fact { x, y, operator }
    }

    pub fn answer(&self) -> i64 {
        self.operator.apply(self.x, self.y)
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.operator, self.y)
    }
}

// ---------------------------------------------------------------------------
// Views handed to the rendering layer
// ---------------------------------------------------------------------------

/// Read-only projection of a session's current problem and counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactView {
    pub operand_x: u32,
    pub operand_y: u32,
    pub operator_symbol: String,
    pub questions_answered: u32,
    pub errors_charged: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeView {
    pub configured_max_questions: u32,
}

// ---------------------------------------------------------------------------
// Grading result
// ---------------------------------------------------------------------------

/// What one call to [`submit_answer`](crate::practice_engine::grader::submit_answer) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// First contact: the opening problem was generated, nothing graded.
    Started,
    /// Right answer; a new problem is installed.
    Correct,
    /// Wrong answer that used up the strike and cost one error.
    Charged,
    /// Wrong answer after the strike was already spent; nothing changed.
    FreeRetry,
    /// Submission was not an integer; nothing changed.
    Ignored,
    /// No submission although a problem is pending. The caller should start over.
    MissingAnswer,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Started       => "started",
            Outcome::Correct       => "correct",
            Outcome::Charged       => "charged",
            Outcome::FreeRetry     => "free retry",
            Outcome::Ignored       => "ignored",
            Outcome::MissingAnswer => "missing answer",
        };
        write!(f, "{}", s)
    }
}
