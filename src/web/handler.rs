use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, Form, Query, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::practice_engine::{
    lock_session, submit_answer, FactView, Outcome, SessionRegistry, WelcomeView,
};
use crate::web::render::{render_question, render_welcome};

/// Name of the cookie carrying the session token.
pub const COOKIE_NAME: &str = "facts_session";

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<SessionRegistry>,
    pub max_questions: u32,
}

impl AppState {
    pub fn new(registry: SessionRegistry, max_questions: u32) -> Self {
        AppState { registry: Arc::new(registry), max_questions }
    }
}

// ---------------------------------------------------------------------------
// Query / body types
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct AnswerForm {
    pub answer: Option<String>,
}

/// What one request ends up showing.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    Welcome { token: String, welcome: WelcomeView },
    Question { token: String, fact: FactView },
}

impl Page {
    fn token(&self) -> &str {
        match self {
            Page::Welcome { token, .. } | Page::Question { token, .. } => token,
        }
    }
}

// ---------------------------------------------------------------------------
// Cookie transport
// ---------------------------------------------------------------------------

/// Pull the session token out of the request's `Cookie` headers.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == COOKIE_NAME)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

fn set_cookie(token: &str) -> String {
    format!("{COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax")
}

// ---------------------------------------------------------------------------
// Session flow
// ---------------------------------------------------------------------------

fn welcome_page(state: &AppState, token: String) -> Page {
    info!(%token, "new practice session");
    Page::Welcome {
        token,
        welcome: WelcomeView { configured_max_questions: state.max_questions },
    }
}

fn start_over(state: &AppState) -> Page {
    let (token, _) = state.registry.create_session();
    welcome_page(state, token)
}

/// Resolve the caller's session and run one grading transition.
pub fn step(state: &AppState, token: Option<&str>, answer: Option<&str>) -> Page {
    let (token, handle, created) = state.registry.resolve_or_create(token);
    if created {
        return welcome_page(state, token);
    }

    let (outcome, view) = {
        let mut session = lock_session(&handle);
        let outcome = submit_answer(&mut session, answer);
        (outcome, session.view())
    };
    match (outcome, view) {
        (Outcome::MissingAnswer, _) | (_, None) => start_over(state),
        (_, Some(fact)) => Page::Question { token, fact },
    }
}

/// Body field wins over the query string; a body that is not a form is skipped.
fn merged_answer(
    query: AnswerForm,
    form: Result<Form<AnswerForm>, FormRejection>,
) -> Option<String> {
    form.ok().and_then(|Form(f)| f.answer).or(query.answer)
}

fn html_response(page: Page) -> Response {
    let cookie = set_cookie(page.token());
    let body = match &page {
        Page::Welcome { welcome, .. } => render_welcome(welcome),
        Page::Question { fact, .. } => render_question(fact),
    };
    ([(header::SET_COOKIE, cookie)], Html(body)).into_response()
}

fn json_response(page: Page) -> Response {
    let cookie = set_cookie(page.token());
    ([(header::SET_COOKIE, cookie)], Json(page)).into_response()
}

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

pub async fn welcome(State(state): State<AppState>) -> Response {
    html_response(start_over(&state))
}

// ---------------------------------------------------------------------------
// GET|POST /next   field: answer
// ---------------------------------------------------------------------------

pub async fn next_get(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(form): Query<AnswerForm>,
) -> Response {
    let token = token_from_headers(&headers);
    html_response(step(&state, token.as_deref(), form.answer.as_deref()))
}

pub async fn next_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<AnswerForm>,
    form: Result<Form<AnswerForm>, FormRejection>,
) -> Response {
    let token = token_from_headers(&headers);
    let answer = merged_answer(query, form);
    html_response(step(&state, token.as_deref(), answer.as_deref()))
}

// ---------------------------------------------------------------------------
// GET|POST /api/next   field: answer
// ---------------------------------------------------------------------------

pub async fn api_next_get(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(form): Query<AnswerForm>,
) -> Response {
    let token = token_from_headers(&headers);
    json_response(step(&state, token.as_deref(), form.answer.as_deref()))
}

pub async fn api_next_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<AnswerForm>,
    form: Result<Form<AnswerForm>, FormRejection>,
) -> Response {
    let token = token_from_headers(&headers);
    let answer = merged_answer(query, form);
    json_response(step(&state, token.as_deref(), answer.as_deref()))
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status":   "ok",
        "version":  env!("CARGO_PKG_VERSION"),
        "sessions": state.registry.len(),
    }))
}
