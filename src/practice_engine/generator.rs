use rand::Rng;

use crate::practice_engine::models::{Fact, Operator};

/// Weighted operator wheel: one uniform draw over its 11 slots picks the
/// operator. Five slots add, five subtract, one multiplies.
pub const OPERATOR_WHEEL: [Operator; 11] = [
    Operator::Addition,
    Operator::Addition,
    Operator::Addition,
    Operator::Addition,
    Operator::Addition,
    Operator::Subtraction,
    Operator::Subtraction,
    Operator::Subtraction,
    Operator::Subtraction,
    Operator::Subtraction,
    Operator::Multiplication,
];

/// Draw operands for `operator`.
///
/// Subtraction operands come back ordered so the result is never negative.
pub fn operands_for<R: Rng>(rng: &mut R, operator: Operator) -> (u32, u32) {
    match operator {
        Operator::Addition => (rng.gen_range(0..20), rng.gen_range(0..20)),
        Operator::Subtraction => {
            let (x, y) = (rng.gen_range(0..20), rng.gen_range(0..20));
            if x < y { (y, x) } else { (x, y) }
        }
        Operator::Multiplication => (rng.gen_range(0..10), rng.gen_range(0..3)),
    }
}

/// Generate the next fact from `rng`.
pub fn next_fact<R: Rng>(rng: &mut R) -> Fact {
    let operator = OPERATOR_WHEEL[rng.gen_range(0..OPERATOR_WHEEL.len())];
    let (x, y) = operands_for(rng, operator);
    Fact { x, y, operator }
}
