// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Server-rendered HTML pages.
//!
//! The portal is a handful of small form pages; everything is rendered
//! from string templates here, with user-supplied values escaped.

use crate::models::ProfileForm;

/// Escape text for interpolation into HTML.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

fn error_banner(error: Option<&str>) -> String {
    match error {
        Some(message) => format!("<p class=\"error\">{}</p>\n", escape(message)),
        None => String::new(),
    }
}

pub fn home_page() -> String {
    layout(
        "Welcome",
        "<h1>Hello, World!</h1>\n\
         <p><a href=\"/signin\">Sign in</a> or <a href=\"/signup\">create an account</a>.</p>",
    )
}

pub fn signup_page(error: Option<&str>) -> String {
    let body = format!(
        "<h1>Sign Up</h1>\n{}\
         <form method=\"post\">\n\
         Email: <input type=\"text\" name=\"email\"><br>\n\
         Password: <input type=\"password\" name=\"password\"><br>\n\
         <input type=\"submit\" value=\"Sign Up\">\n\
         </form>\n\
         <p>Already have an account? <a href=\"/signin\">Sign in</a>.</p>",
        error_banner(error)
    );
    layout("Sign Up", &body)
}

pub fn signin_page(error: Option<&str>) -> String {
    let body = format!(
        "<h1>Sign In</h1>\n{}\
         <form method=\"post\">\n\
         Email: <input type=\"text\" name=\"email\"><br>\n\
         Password: <input type=\"password\" name=\"password\"><br>\n\
         <input type=\"submit\" value=\"Sign In\">\n\
         </form>\n\
         <p><a href=\"/password-reset\">Forgot your password?</a></p>",
        error_banner(error)
    );
    layout("Sign In", &body)
}

pub fn verify_page() -> String {
    layout(
        "Email Verification Required",
        "<h1>Email Verification Required</h1>\n\
         <p>Please check your email and click the verification link to complete your registration.</p>\n\
         <p>Once verified, you can <a href=\"/signin\">sign in</a> to your account.</p>",
    )
}

pub fn password_reset_page(notice: Option<&str>, error: Option<&str>) -> String {
    let notice = match notice {
        Some(message) => format!("<p class=\"notice\">{}</p>\n", escape(message)),
        None => String::new(),
    };
    let body = format!(
        "<h1>Reset Password</h1>\n{}{}\
         <form method=\"post\">\n\
         Email: <input type=\"text\" name=\"email\"><br>\n\
         <input type=\"submit\" value=\"Reset Password\">\n\
         </form>",
        notice,
        error_banner(error)
    );
    layout("Reset Password", &body)
}

pub fn dashboard_page(email: &str) -> String {
    let body = format!(
        "<h1>Welcome to your dashboard, {}!</h1>\n\
         <p><a href=\"/profile\">Your profile</a> | <a href=\"/logout\">Log out</a></p>",
        escape(email)
    );
    layout("Dashboard", &body)
}

pub fn profile_page(values: &ProfileForm) -> String {
    let body = format!(
        "<h1>Your Profile</h1>\n\
         <form method=\"post\" action=\"/profile\">\n\
         Name: <input type=\"text\" name=\"name\" value=\"{name}\"><br>\n\
         Email: <input type=\"text\" name=\"email\" value=\"{email}\"><br>\n\
         Phone: <input type=\"text\" name=\"phone\" value=\"{phone}\"><br>\n\
         LinkedIn: <input type=\"text\" name=\"linkedin\" value=\"{linkedin}\"><br>\n\
         GitHub: <input type=\"text\" name=\"github\" value=\"{github}\"><br>\n\
         Portfolio: <input type=\"text\" name=\"portfolio\" value=\"{portfolio}\"><br>\n\
         Professional summary:<br>\n\
         <textarea name=\"professional_summary\">{summary}</textarea><br>\n\
         <input type=\"submit\" value=\"Save Profile\">\n\
         </form>\n\
         <form method=\"post\" action=\"/delete_profile\">\n\
         <input type=\"submit\" value=\"Delete Profile\">\n\
         </form>\n\
         <p><a href=\"/dashboard\">Back to dashboard</a></p>",
        name = escape(&values.name),
        email = escape(&values.email),
        phone = escape(&values.phone),
        linkedin = escape(&values.linkedin),
        github = escape(&values.github),
        portfolio = escape(&values.portfolio),
        summary = escape(&values.professional_summary),
    );
    layout("Your Profile", &body)
}

pub fn error_page(message: &str) -> String {
    let body = format!(
        "<h1>Something went wrong</h1>\n<p>{}</p>\n<p><a href=\"/\">Back home</a></p>",
        escape(message)
    );
    layout("Error", &body)
}
