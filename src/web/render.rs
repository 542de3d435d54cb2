//! Inline HTML pages. Only numbers and fixed symbols are interpolated.

use crate::practice_engine::{FactView, WelcomeView};

const STYLE: &str = "body{font-family:sans-serif;text-align:center;margin-top:4em}\
                     .fact{font-size:3em}.stats{color:#666}";

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{title}</title>\
         <style>{STYLE}</style></head><body>{body}</body></html>\n"
    )
}

pub fn render_welcome(view: &WelcomeView) -> String {
    let body = format!(
        "<h1>Math facts</h1>\
         <p>This practice run has {} facts. Each correct answer brings the next one.</p>\
         <form action=\"/next\" method=\"get\"><button type=\"submit\">Start</button></form>",
        view.configured_max_questions
    );
    page("Math facts", &body)
}

pub fn render_question(view: &FactView) -> String {
    let body = format!(
        "<form action=\"/next\" method=\"post\">\
         <div class=\"fact\">{} {} {} = \
         <input name=\"answer\" size=\"4\" autofocus autocomplete=\"off\"></div>\
         <button type=\"submit\">Check</button></form>\
         <p class=\"stats\">Answered: {} &middot; Errors: {}</p>",
        view.operand_x,
        view.operator_symbol,
        view.operand_y,
        view.questions_answered,
        view.errors_charged
    );
    page("Math facts", &body)
}
