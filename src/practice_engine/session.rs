//! Per-client practice state.
//!
//! A [`Session`] owns its own seeded random stream, the problem currently on
//! screen, and the two counters shown to the learner. It never talks to the
//! registry; the registry hands it out behind a lock and the grader mutates it.

use chrono::{DateTime, Utc};
use rand::{rngs::StdRng, SeedableRng};

use crate::practice_engine::{
    generator::next_fact,
    models::{Fact, FactView},
};

#[derive(Debug)]
pub struct Session {
    token: String,
    created_at: DateTime<Utc>,
    pub(crate) rng: StdRng,
    pub(crate) current: Option<Fact>,
    /// Raised by every newly installed problem, lowered by the first wrong
    /// answer that charges an error.
    pub(crate) pending_strike: bool,
    pub(crate) questions_answered: u32,
    pub(crate) errors_charged: u32,
}

impl Session {
    /// Create an empty session. `None` seeds the stream from the clock.
    pub fn new(token: impl Into<String>, rng_seed: Option<u64>) -> Self {
        let created_at = Utc::now();
        let seed = rng_seed.unwrap_or_else(|| clock_seed(created_at));
        Self::with_rng(token.into(), created_at, StdRng::seed_from_u64(seed))
    }

    /// Session for the `issued`-th registry token. The stream seed mixes the
    /// clock with `issued`, so sessions created within one clock tick differ.
    pub(crate) fn for_issue(token: impl Into<String>, issued: u64) -> Self {
        let created_at = Utc::now();
        let seed = stream_seed(clock_seed(created_at), issued);
        Self::with_rng(token.into(), created_at, StdRng::from_seed(seed))
    }

    fn with_rng(token: String, created_at: DateTime<Utc>, rng: StdRng) -> Self {
        Session {
            token,
            created_at,
            rng,
            current: None,
            pending_strike: false,
            questions_answered: 0,
            errors_charged: 0,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn current(&self) -> Option<Fact> {
        self.current
    }

    pub fn pending_strike(&self) -> bool {
        self.pending_strike
    }

    pub fn questions_answered(&self) -> u32 {
        self.questions_answered
    }

    pub fn errors_charged(&self) -> u32 {
        self.errors_charged
    }

    /// Draw the next problem from this session's stream and make it current.
    pub fn advance(&mut self) -> Fact {
        let fact = next_fact(&mut self.rng);
        self.current = Some(fact);
        self.pending_strike = true;
        fact
    }

    /// Projection for the rendering layer, or `None` before the first problem.
    pub fn view(&self) -> Option<FactView> {
        self.current.map(|fact| FactView {
            operand_x: fact.x,
            operand_y: fact.y,
            operator_symbol: fact.operator.symbol().to_string(),
            questions_answered: self.questions_answered,
            errors_charged: self.errors_charged,
        })
    }

    /// Put the session into an exact state.
    #[cfg(test)]
    pub(crate) fn install(&mut self, fact: Fact, answered: u32, errors: u32, strike: bool) {
        self.current = Some(fact);
        self.questions_answered = answered;
        self.errors_charged = errors;
        self.pending_strike = strike;
    }
}

/// 32-byte stream seed: clock reading in bytes 0..8, issue counter in 8..16.
pub(crate) fn stream_seed(clock: u64, issued: u64) -> [u8; 32] {
    let mut seed = [0u8; 32];
    seed[..8].copy_from_slice(&clock.to_le_bytes());
    seed[8..16].copy_from_slice(&issued.to_le_bytes());
    seed
}

/// Nanosecond clock reading folded into a seed.
pub(crate) fn clock_seed(now: DateTime<Utc>) -> u64 {
    now.timestamp_nanos_opt()
        .map(|n| n as u64)
        .unwrap_or_else(|| now.timestamp_micros() as u64)
}
