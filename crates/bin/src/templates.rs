//! HTML templates for web interface
//!
//! Simple inline HTML templates without a template engine.

use paperboard::{
    Oid, format_millis,
    papers::{PaperDetail, PaperForm, PaperSummary, PostForm},
};

use crate::output::format_average;
use crate::session::Flash;

/// Common CSS styles for all pages
const COMMON_STYLES: &str = r#"
    body {
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
        max-width: 1000px;
        margin: 40px auto;
        padding: 0 20px;
        background: #f5f5f5;
    }
    .container {
        background: white;
        padding: 30px;
        border-radius: 8px;
        box-shadow: 0 2px 4px rgba(0,0,0,0.1);
    }
    nav {
        margin-bottom: 20px;
    }
    nav a {
        margin-right: 15px;
    }
    nav .user {
        float: right;
        color: #666;
    }
    h1 {
        color: #333;
        border-bottom: 2px solid #0066cc;
        padding-bottom: 10px;
    }
    h2 {
        color: #555;
        margin-top: 30px;
    }
    .info-row {
        margin: 10px 0;
        padding: 8px;
        background: #f9f9f9;
        border-radius: 4px;
    }
    .label {
        font-weight: bold;
        color: #666;
        display: inline-block;
        width: 150px;
    }
    .value {
        color: #0066cc;
    }
    form {
        margin: 20px 0;
    }
    form.inline {
        display: inline;
        margin: 0;
    }
    .form-group {
        margin: 15px 0;
    }
    label {
        display: block;
        font-weight: bold;
        margin-bottom: 5px;
        color: #333;
    }
    input[type="text"],
    input[type="email"],
    input[type="password"],
    input[type="url"],
    input[type="date"],
    input[type="number"],
    textarea {
        width: 100%;
        padding: 10px;
        border: 1px solid #ddd;
        border-radius: 4px;
        font-size: 14px;
        box-sizing: border-box;
    }
    textarea {
        resize: vertical;
    }
    button {
        background: #0066cc;
        color: white;
        padding: 10px 20px;
        border: none;
        border-radius: 4px;
        cursor: pointer;
        font-size: 14px;
        font-weight: bold;
    }
    button:hover {
        background: #0052a3;
    }
    button.danger {
        background: #d9534f;
    }
    button.danger:hover {
        background: #c9302c;
    }
    table {
        width: 100%;
        border-collapse: collapse;
        margin: 20px 0;
    }
    th, td {
        text-align: left;
        padding: 12px;
        border-bottom: 1px solid #ddd;
    }
    th {
        background: #f0f0f0;
        font-weight: bold;
        color: #333;
    }
    tr:hover {
        background: #f9f9f9;
    }
    .error {
        color: #d9534f;
        background: #f2dede;
        padding: 10px;
        border-radius: 4px;
        margin: 10px 0;
    }
    .success {
        color: #3c763d;
        background: #dff0d8;
        padding: 10px;
        border-radius: 4px;
        margin: 10px 0;
    }
    .post {
        border-left: 3px solid #0066cc;
        padding: 10px 15px;
        margin: 15px 0;
        background: #fafafa;
    }
    .meta {
        color: #888;
        font-size: 13px;
    }
    .score {
        font-weight: bold;
        color: #0066cc;
    }
"#;

/// Per-request page context: who is looking and which flashes to show.
pub struct PageContext<'a> {
    pub username: Option<&'a str>,
    pub flashes: &'a [Flash],
}

impl<'a> PageContext<'a> {
    pub fn anonymous(flashes: &'a [Flash]) -> Self {
        Self {
            username: None,
            flashes,
        }
    }

    pub fn user(username: &'a str, flashes: &'a [Flash]) -> Self {
        Self {
            username: Some(username),
            flashes,
        }
    }
}

/// Wrap page content in the shared document shell.
fn layout(ctx: &PageContext<'_>, title: &str, body: &str) -> String {
    let nav = match ctx.username {
        Some(username) => format!(
            r#"<nav>
            <a href="/">Home</a>
            <a href="/papers">Papers</a>
            <a href="/papers?mine=true">My papers</a>
            <a href="/add_paper">Add paper</a>
            <span class="user">{} &middot; <a href="/logout">Logout</a></span>
        </nav>"#,
            html_escape(username)
        ),
        None => r#"<nav><a href="/login">Login</a> <a href="/register">Register</a></nav>"#
            .to_string(),
    };

    let flashes: String = ctx
        .flashes
        .iter()
        .map(|f| {
            format!(
                r#"<div class="{}">{}</div>"#,
                f.level.css_class(),
                html_escape(&f.message)
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Paperboard - {title}</title>
    <style>{COMMON_STYLES}</style>
</head>
<body>
    <div class="container">
        {nav}
        {flashes}
        {body}
    </div>
</body>
</html>"#,
        title = html_escape(title),
    )
}

fn error_box(error: Option<&str>) -> String {
    error.map_or(String::new(), |e| {
        format!(r#"<div class="error">{}</div>"#, html_escape(e))
    })
}

/// Render the login page
pub fn login_page(ctx: &PageContext<'_>, error: Option<&str>, email: &str) -> String {
    let body = format!(
        r#"<h1>Paperboard</h1>
        <h2>Login</h2>
        {error_html}
        <form method="POST" action="/login">
            <div class="form-group">
                <label for="email">Email:</label>
                <input type="email" id="email" name="email" value="{email}" required autofocus>
            </div>
            <div class="form-group">
                <label for="password">Password:</label>
                <input type="password" id="password" name="password" required>
            </div>
            <button type="submit">Login</button>
        </form>
        <p style="margin-top: 20px; text-align: center;">
            Don't have an account? <a href="/register">Register here</a>
        </p>"#,
        error_html = error_box(error),
        email = html_escape(email),
    );
    layout(ctx, "Login", &body)
}

/// Render the registration page
pub fn register_page(
    ctx: &PageContext<'_>,
    error: Option<&str>,
    username: &str,
    email: &str,
) -> String {
    let body = format!(
        r#"<h1>Paperboard</h1>
        <h2>Register New Account</h2>
        {error_html}
        <form method="POST" action="/register">
            <div class="form-group">
                <label for="username">Username:</label>
                <input type="text" id="username" name="username" value="{username}" required autofocus>
            </div>
            <div class="form-group">
                <label for="email">Email:</label>
                <input type="email" id="email" name="email" value="{email}" required>
            </div>
            <div class="form-group">
                <label for="password">Password:</label>
                <input type="password" id="password" name="password" required>
            </div>
            <button type="submit">Register</button>
        </form>
        <p style="margin-top: 20px; text-align: center;">
            Already have an account? <a href="/login">Login here</a>
        </p>"#,
        error_html = error_box(error),
        username = html_escape(username),
        email = html_escape(email),
    );
    layout(ctx, "Register", &body)
}

/// Render the home page greeting
pub fn home_page(ctx: &PageContext<'_>, username: &str) -> String {
    let body = format!(
        r#"<h1>Hello, {}!</h1>
        <p>Browse the <a href="/papers">papers</a>, see <a href="/papers?mine=true">your own</a>,
        or <a href="/add_paper">add a new one</a>.</p>"#,
        html_escape(username)
    );
    layout(ctx, "Home", &body)
}

/// Render the paper listing
pub fn papers_page(ctx: &PageContext<'_>, papers: &[PaperSummary], mine: bool) -> String {
    let heading = if mine { "My Papers" } else { "Papers" };

    let table = if papers.is_empty() {
        r#"<p><em>No papers yet. <a href="/add_paper">Add one</a>.</em></p>"#.to_string()
    } else {
        let rows: String = papers
            .iter()
            .map(|s| {
                format!(
                    r#"<tr>
                <td><a href="/paper/{id}">{title}</a></td>
                <td>{authors}</td>
                <td>{date}</td>
                <td>{posts}</td>
                <td>{average}</td>
            </tr>"#,
                    id = s.id.to_safe(),
                    title = html_escape(&s.paper.title),
                    authors = html_escape(&author_line(&s.paper.owner, &s.paper.authors)),
                    date = html_escape(&s.paper.publication_date),
                    posts = s.post_count,
                    average = format_average(s.average_score),
                )
            })
            .collect();
        format!(
            r#"<table>
            <tr><th>Title</th><th>Authors</th><th>Published</th><th>Reviews</th><th>Average</th></tr>
            {rows}
        </table>"#
        )
    };

    let toggle = if mine {
        r#"<a href="/papers">Show all papers</a>"#
    } else {
        r#"<a href="/papers?mine=true">Show only my papers</a>"#
    };

    let body = format!("<h1>{heading}</h1>\n        <p>{toggle}</p>\n        {table}");
    layout(ctx, heading, &body)
}

/// Render the paper detail page with its posts
pub fn paper_page(ctx: &PageContext<'_>, detail: &PaperDetail) -> String {
    let safe_id = detail.id.to_safe();
    let paper = &detail.paper;

    let owner_actions = if detail.is_owner {
        format!(
            r#"<p>
            <a href="/edit_paper/{safe_id}">Edit paper</a>
            <form class="inline" method="POST" action="/delete_paper/{safe_id}"
                  onsubmit="return confirm('Delete this paper and all its reviews?');">
                <button type="submit" class="danger">Delete paper</button>
            </form>
        </p>"#
        )
    } else {
        String::new()
    };

    let review_prompt = if detail.has_reviewed {
        "<p><em>You have already reviewed this paper.</em></p>".to_string()
    } else {
        format!(r#"<p><a href="/add_post/{safe_id}">Write a review</a></p>"#)
    };

    let author_note = if detail.is_author {
        "<p><em>You are an author of this paper.</em></p>"
    } else {
        ""
    };

    let viewer = ctx.username.unwrap_or_default();
    let posts: String = if detail.posts.is_empty() {
        "<p><em>No reviews yet.</em></p>".to_string()
    } else {
        detail
            .posts
            .iter()
            .map(|(id, post)| post_block(id, post, viewer))
            .collect()
    };

    let body = format!(
        r#"<h1>{title}</h1>
        {author_note}
        <div class="info-row"><span class="label">Authors:</span> <span class="value">{authors}</span></div>
        <div class="info-row"><span class="label">Published:</span> <span class="value">{date}</span></div>
        <div class="info-row"><span class="label">Link:</span> <a href="{url}">{url}</a></div>
        <div class="info-row"><span class="label">Average score:</span> <span class="value">{average}</span></div>
        <h2>Summary</h2>
        <p>{summary}</p>
        {owner_actions}
        <h2>Reviews ({count})</h2>
        {review_prompt}
        {posts}"#,
        title = html_escape(&paper.title),
        authors = html_escape(&author_line(&paper.owner, &paper.authors)),
        date = html_escape(&paper.publication_date),
        url = html_escape(&paper.url),
        average = format_average(detail.average_score),
        summary = html_escape(&paper.summary),
        count = detail.posts.len(),
    );
    layout(ctx, &paper.title, &body)
}

fn post_block(id: &Oid, post: &paperboard::models::Post, viewer: &str) -> String {
    let score = post
        .score
        .map(|s| format!(r#" &middot; <span class="score">{s}/10</span>"#))
        .unwrap_or_default();

    let actions = if post.user_id == viewer {
        let safe_id = id.to_safe();
        format!(
            r#"<p>
                <a href="/edit_post/{safe_id}">Edit</a>
                <form class="inline" method="POST" action="/delete_post/{safe_id}">
                    <button type="submit" class="danger">Delete</button>
                </form>
            </p>"#
        )
    } else {
        String::new()
    };

    format!(
        r#"<div class="post">
            <div class="meta">{author} &middot; {when}{score}</div>
            <p>{content}</p>
            {actions}
        </div>"#,
        author = html_escape(&post.user_id),
        when = format_millis(post.timestamp),
        content = html_escape(&post.content),
    )
}

/// Which submission a paper form page performs
pub enum PaperFormMode<'a> {
    Add,
    Edit(&'a Oid),
}

/// Render the add/edit paper form
pub fn paper_form_page(
    ctx: &PageContext<'_>,
    mode: PaperFormMode<'_>,
    form: &PaperForm,
    error: Option<&str>,
) -> String {
    let (heading, action, button) = match mode {
        PaperFormMode::Add => ("Add Paper", "/add_paper".to_string(), "Add paper"),
        PaperFormMode::Edit(id) => (
            "Edit Paper",
            format!("/edit_paper/{}", id.to_safe()),
            "Save changes",
        ),
    };

    let body = format!(
        r#"<h1>{heading}</h1>
        {error_html}
        <form method="POST" action="{action}">
            <div class="form-group">
                <label for="title">Title:</label>
                <input type="text" id="title" name="title" value="{title}" required>
            </div>
            <div class="form-group">
                <label for="summary">Summary:</label>
                <textarea id="summary" name="summary" rows="6" required>{summary}</textarea>
            </div>
            <div class="form-group">
                <label for="url">URL:</label>
                <input type="url" id="url" name="url" value="{url}" required>
            </div>
            <div class="form-group">
                <label for="publication_date">Publication date:</label>
                <input type="date" id="publication_date" name="publication_date" value="{date}" required>
            </div>
            <div class="form-group">
                <label for="authors">Co-authors:</label>
                <input type="text" id="authors" name="authors" value="{authors}">
                <small style="color: #666;">Comma separated usernames</small>
            </div>
            <button type="submit">{button}</button>
        </form>"#,
        error_html = error_box(error),
        title = html_escape(&form.title),
        summary = html_escape(&form.summary),
        url = html_escape(&form.url),
        date = html_escape(&form.publication_date),
        authors = html_escape(&form.authors),
    );
    layout(ctx, heading, &body)
}

/// Render the add/edit review form
pub fn post_form_page(
    ctx: &PageContext<'_>,
    paper_title: &str,
    action: &str,
    form: &PostForm,
    error: Option<&str>,
) -> String {
    let body = format!(
        r#"<h1>Review: {title}</h1>
        {error_html}
        <form method="POST" action="{action}">
            <div class="form-group">
                <label for="content">Review:</label>
                <textarea id="content" name="content" rows="8" required>{content}</textarea>
            </div>
            <div class="form-group">
                <label for="score">Score (1-10, optional):</label>
                <input type="number" id="score" name="score" min="1" max="10" value="{score}">
            </div>
            <button type="submit">Save review</button>
        </form>"#,
        title = html_escape(paper_title),
        error_html = error_box(error),
        action = html_escape(action),
        content = html_escape(&form.content),
        score = html_escape(form.score.as_deref().unwrap_or_default()),
    );
    layout(ctx, "Review", &body)
}

/// Render a bare error page
pub fn error_page(ctx: &PageContext<'_>, message: &str) -> String {
    let body = format!(
        r#"<h1>Something went wrong</h1>
        <div class="error">{}</div>
        <p><a href="/">Back to home</a></p>"#,
        html_escape(message)
    );
    layout(ctx, "Error", &body)
}

fn author_line(owner: &str, authors: &[String]) -> String {
    std::iter::once(owner)
        .chain(authors.iter().map(String::as_str).filter(|a| *a != owner))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Escape HTML special characters
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
