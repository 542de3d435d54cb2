//! One request's worth of session progress.
//!
//! ## Strike policy
//!
//! Every new problem arrives with the strike raised. The first wrong answer
//! lowers it and costs one error; further wrong answers on the same problem
//! are free. A correct answer counts, installs the next problem and raises
//! the strike again.

use tracing::debug;

use crate::practice_engine::{models::Outcome, session::Session};

/// Parse a submitted answer. Accepts an optional sign followed by digits.
pub fn parse_answer(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok()
}

/// Run one transition of `session` against `raw`.
///
/// Empty and absent submissions are treated alike.
pub fn submit_answer(session: &mut Session, raw: Option<&str>) -> Outcome {
    let Some(fact) = session.current else {
        let fact = session.advance();
        debug!(token = session.token(), %fact, "first problem");
        return Outcome::Started;
    };

    let raw = match raw {
        Some(r) if !r.is_empty() => r,
        _ => return Outcome::MissingAnswer,
    };

    let Some(value) = parse_answer(raw) else {
        debug!(token = session.token(), raw, "unparsable answer ignored");
        return Outcome::Ignored;
    };

    let outcome = if value == fact.answer() {
        session.questions_answered += 1;
        session.advance();
        Outcome::Correct
    } else if session.pending_strike {
        session.errors_charged += 1;
        session.pending_strike = false;
        Outcome::Charged
    } else {
        Outcome::FreeRetry
    };

    debug!(
        token = session.token(),
        %fact,
        value,
        %outcome,
        answered = session.questions_answered,
        errors = session.errors_charged,
        "graded"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice_engine::models::{Fact, Operator};

    fn session_with(fact: Fact, answered: u32, errors: u32, strike: bool) -> Session {
        let mut s = Session::new("test", Some(11));
        s.install(fact, answered, errors, strike);
        s
    }

    #[test]
    fn parse_accepts_signed_integers_only() {
        assert_eq!(parse_answer("12"), Some(12));
        assert_eq!(parse_answer("-3"), Some(-3));
        assert_eq!(parse_answer("+4"), Some(4));
        assert_eq!(parse_answer(" 4"), None);
        assert_eq!(parse_answer("4.0"), None);
        assert_eq!(parse_answer("abc"), None);
        assert_eq!(parse_answer(""), None);
    }

    #[test]
    fn first_contact_generates_without_grading() {
        let mut s = Session::new("t", Some(3));
        assert_eq!(submit_answer(&mut s, Some("5")), Outcome::Started);
        assert!(s.current().is_some());
        assert_eq!(s.questions_answered(), 0);
        assert_eq!(s.errors_charged(), 0);
    }

    #[test]
    fn missing_answer_leaves_state_alone() {
        let fact = Fact::new(2, Operator::Addition, 2);
        let mut s = session_with(fact, 1, 0, true);
        assert_eq!(submit_answer(&mut s, None), Outcome::MissingAnswer);
        assert_eq!(submit_answer(&mut s, Some("")), Outcome::MissingAnswer);
        assert_eq!(s.current(), Some(fact));
        assert_eq!(s.questions_answered(), 1);
        assert!(s.pending_strike());
    }

    #[test]
    fn garbage_is_idempotent() {
        let fact = Fact::new(9, Operator::Subtraction, 4);
        for strike in [true, false] {
            let mut s = session_with(fact, 2, 1, strike);
            for _ in 0..25 {
                assert_eq!(submit_answer(&mut s, Some("abc")), Outcome::Ignored);
            }
            assert_eq!(s.current(), Some(fact));
            assert_eq!(s.questions_answered(), 2);
            assert_eq!(s.errors_charged(), 1);
            assert_eq!(s.pending_strike(), strike);
        }
    }

    #[test]
    fn every_operator_is_graded_by_its_own_result() {
        let cases = [
            (Fact::new(7, Operator::Addition, 5), "12"),
            (Fact::new(13, Operator::Subtraction, 6), "7"),
            (Fact::new(9, Operator::Multiplication, 2), "18"),
        ];
        for (fact, answer) in cases {
            let mut s = session_with(fact, 0, 0, true);
            assert_eq!(submit_answer(&mut s, Some(answer)), Outcome::Correct, "{fact}");
            assert_eq!(s.questions_answered(), 1, "{fact}");
        }
    }

    #[test]
    fn wrong_wrong_correct_follows_the_strike_law() {
        let fact = Fact::new(3, Operator::Addition, 4);
        let mut s = session_with(fact, 0, 0, true);

        assert_eq!(submit_answer(&mut s, Some("8")), Outcome::Charged);
        assert_eq!(s.errors_charged(), 1);
        assert!(!s.pending_strike());
        assert_eq!(s.current(), Some(fact));

        assert_eq!(submit_answer(&mut s, Some("9")), Outcome::FreeRetry);
        assert_eq!(s.errors_charged(), 1);
        assert!(!s.pending_strike());
        assert_eq!(s.current(), Some(fact));

        assert_eq!(submit_answer(&mut s, Some("7")), Outcome::Correct);
        assert_eq!(s.questions_answered(), 1);
        assert_eq!(s.errors_charged(), 1);
        assert!(s.pending_strike());
    }

    #[test]
    fn repeated_wrong_answers_charge_once() {
        let fact = Fact::new(6, Operator::Multiplication, 2);
        let mut s = session_with(fact, 4, 0, true);
        for _ in 0..5 {
            submit_answer(&mut s, Some("0"));
        }
        assert_eq!(s.errors_charged(), 1);
        assert_eq!(s.questions_answered(), 4);
    }

    #[test]
    fn first_problem_wrong_answer_is_charged() {
        let mut s = Session::new("t", Some(8));
        submit_answer(&mut s, None);
        let fact = s.current().expect("first problem");
        let wrong = (fact.answer() + 1).to_string();
        assert_eq!(submit_answer(&mut s, Some(&wrong)), Outcome::Charged);
        assert_eq!(s.errors_charged(), 1);
    }
}
