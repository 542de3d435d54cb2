//! # facts_drill
//!
//! An in-memory arithmetic facts trainer served over HTTP.
//!
//! Each client gets a session keyed by an opaque token. The session holds its
//! own seeded random stream, the problem currently on screen, and two
//! counters: questions answered and errors charged.
//!
//! ## How it works
//!
//! 1. [`SessionRegistry::create_session`] issues a unique token and an empty
//!    [`Session`].
//! 2. Every request calls [`submit_answer`]. The first call installs the
//!    opening problem; later calls grade the submitted value against it.
//! 3. [`Session::view`] gives the renderer the operands, operator symbol and
//!    counters.
//!
//! ## Grading rules
//!
//! - A correct answer counts and brings a new problem.
//! - The first wrong answer on a problem costs one error; further wrong
//!   answers on the same problem are free.
//! - Anything that is not an integer is ignored and the same problem is shown
//!   again.
//! - The advertised question count ([`DEFAULT_MAX_QUESTIONS`]) is not
//!   enforced; the session keeps producing problems.
//!
//! ## Quick start
//!
//! ```rust
//! use facts_drill::{submit_answer, Outcome, SessionRegistry, lock_session};
//!
//! let registry = SessionRegistry::new();
//! let (token, handle) = registry.create_session();
//!
//! let mut session = lock_session(&handle);
//! assert_eq!(submit_answer(&mut session, None), Outcome::Started);
//!
//! let fact = session.current().unwrap();
//! let answer = fact.answer().to_string();
//! assert_eq!(submit_answer(&mut session, Some(&answer)), Outcome::Correct);
//! assert_eq!(session.questions_answered(), 1);
//! # let _ = token;
//! ```

pub mod config;
pub mod practice_engine;
pub mod web;

// Convenience re-exports so callers can use `facts_drill::submit_answer`
// directly without reaching into `practice_engine::`.
pub use practice_engine::{
    lock_session, next_fact, submit_answer, Fact, FactView, Operator, Outcome, RegistryError,
    Session, SessionHandle, SessionRegistry, WelcomeView, DEFAULT_MAX_QUESTIONS,
};
