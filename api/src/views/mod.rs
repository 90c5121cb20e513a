//! Server-rendered pages for the section picker.
//!
//! Markup is deliberately plain; styling and scripts belong to the front end
//! that embeds these pages. Every user-controlled string goes through [`escape`].

use crate::auth::{Claims, csrf::CSRF_FIELD, csrf_token_for};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use services::{ServiceError, pick_service::rating_field, section_days::SectionDays};
use std::fmt::Write;
use util::config;

/// Per-request values every page needs.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub user_id: i64,
    pub csrf_token: String,
    pub project_name: String,
}

impl PageContext {
    pub fn for_session(claims: &Claims) -> Self {
        Self {
            user_id: claims.sub,
            csrf_token: csrf_token_for(claims),
            project_name: config::project_name(),
        }
    }
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

fn layout(ctx: &PageContext, title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"csrf-token\" content=\"{csrf}\">\n\
         <title>{title} | {project}</title>\n</head>\n<body data-user-id=\"{user}\">\n{body}</body>\n</html>\n",
        csrf = escape(&ctx.csrf_token),
        title = escape(title),
        project = escape(&ctx.project_name),
        user = ctx.user_id,
    ))
}

fn csrf_input(ctx: &PageContext) -> String {
    format!(
        "<input type=\"hidden\" name=\"{CSRF_FIELD}\" value=\"{}\">\n",
        escape(&ctx.csrf_token)
    )
}

/// The pick form: one checkbox per section, grouped by day.
pub fn pick_sections(ctx: &PageContext, days: &SectionDays) -> Html<String> {
    let mut body = String::from("<h1>Pick your sections</h1>\n");
    body.push_str("<form method=\"post\" action=\"/sections/pick\">\n");
    body.push_str(&csrf_input(ctx));

    for (day, sections) in days.iter() {
        let _ = writeln!(body, "<section class=\"day\" data-weekday=\"{day}\">\n<h2>{day}</h2>");
        if sections.is_empty() {
            body.push_str("<p class=\"empty\">No sections.</p>\n");
        } else {
            body.push_str("<ul>\n");
            for section in sections {
                let _ = writeln!(
                    body,
                    "<li data-section-id=\"{id}\"><label><input type=\"checkbox\" name=\"{field}\" value=\"1\"> {time}</label></li>",
                    id = section.id,
                    field = rating_field(section.id),
                    time = escape(&section.time),
                );
            }
            body.push_str("</ul>\n");
        }
        body.push_str("</section>\n");
    }

    body.push_str("<button type=\"submit\">Save picks</button>\n</form>\n");
    layout(ctx, "Pick sections", &body)
}

pub fn pick_thanks(ctx: &PageContext, recorded: usize) -> Html<String> {
    let body = format!(
        "<h1>Thanks!</h1>\n<p>Your picks were saved ({recorded} sections).</p>\n\
         <p><a href=\"/sections/pick\">Back to sections</a></p>\n"
    );
    layout(ctx, "Picks saved", &body)
}

/// Admin listing with the forms driving `/sections/change` and `/sections/delete`.
pub fn manage_sections(ctx: &PageContext, days: &SectionDays) -> Html<String> {
    let mut body = String::from("<h1>Manage sections</h1>\n");

    for (day, sections) in days.iter() {
        let _ = writeln!(body, "<section class=\"day\" data-weekday=\"{day}\">\n<h2>{day}</h2>");
        body.push_str("<table>\n<tr><th>Id</th><th>Weekday</th><th>Time</th></tr>\n");
        for section in sections {
            let _ = writeln!(
                body,
                "<tr data-section-id=\"{id}\"><td>{id}</td><td>{weekday}</td><td>{time}</td></tr>",
                id = section.id,
                weekday = section.weekday,
                time = escape(&section.time),
            );
        }
        body.push_str("</table>\n</section>\n");
    }

    body.push_str("<form class=\"change-section\" method=\"post\" action=\"/sections/change\">\n");
    body.push_str(&csrf_input(ctx));
    body.push_str(
        "<input name=\"id\" placeholder=\"id (blank to create)\">\n\
         <input name=\"weekday\" placeholder=\"Weekday\">\n\
         <input name=\"time\" placeholder=\"Time\">\n\
         <button type=\"submit\">Save</button>\n</form>\n",
    );
    body.push_str("<form class=\"delete-section\" method=\"post\" action=\"/sections/delete\">\n");
    body.push_str(&csrf_input(ctx));
    body.push_str("<input name=\"id\" placeholder=\"id\">\n<button type=\"submit\">Delete</button>\n</form>\n");

    layout(ctx, "Manage sections", &body)
}

/// Error page for the HTML routes.
pub fn error_page(err: &ServiceError) -> Response {
    match err {
        ServiceError::Database(db_err) => {
            tracing::error!(error = %db_err, "Database failure while rendering page")
        }
        other => tracing::warn!(error = %other, "Page request rejected"),
    }
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let message = escape(&err.public_message());
    let page = format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Error</title></head>\n\
         <body>\n<h1>{}</h1>\n<p>{message}</p>\n</body>\n</html>\n",
        status.as_u16()
    );
    (status, Html(page)).into_response()
}
