//! Core practice engine: fact generation, session state, grading, registry.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: operators, facts, views handed to the renderer, grading outcomes |
//! | `generator` | Weighted operator wheel and operand draws |
//! | `session`   | One client's seeded stream, current problem and counters |
//! | `grader`    | The per-request transition: first problem, parse, grade, strike policy |
//! | `registry`  | Thread-safe token → session map with token allocation |

pub mod generator;
pub mod grader;
pub mod models;
pub mod registry;
pub mod session;

// Re-export the public API surface so callers can use
// `practice_engine::submit_answer` without reaching into sub-modules.
pub use generator::{next_fact, OPERATOR_WHEEL};
pub use grader::{parse_answer, submit_answer};
pub use models::{Fact, FactView, Operator, Outcome, WelcomeView, DEFAULT_MAX_QUESTIONS};
pub use registry::{lock_session, RegistryError, SessionHandle, SessionRegistry};
pub use session::Session;
