//! Serve command - runs the Paperboard web server.

use std::path::Path as FsPath;

use axum::{
    Form, Json, Router,
    extract::{FromRequestParts, Path, Query, State},
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tokio::signal::unix::{SignalKind, signal};
use tower_cookies::{Cookie, CookieManagerLayer, Cookies};
use tracing_subscriber::EnvFilter;

use paperboard::{
    Error, Instance, Oid,
    backend::database::{InMemory, Sqlite},
    models::User,
    papers::{PaperError, PaperFilter, PaperForm, PostForm},
    user::{Credentials, Registration},
};

use crate::backend::{create_backend, json_path};
use crate::cli::ServeArgs;
use crate::session::{Flash, FlashLevel, SessionStore};
use crate::templates::{self, PageContext, PaperFormMode};

const SESSION_COOKIE: &str = "paperboard_session";

/// Shared application state
#[derive(Clone)]
pub(crate) struct AppState {
    instance: Instance,
    sessions: SessionStore,
}

impl AppState {
    pub(crate) fn new(instance: Instance) -> Self {
        Self {
            instance,
            sessions: SessionStore::new(),
        }
    }

    async fn flash_redirect(
        &self,
        token: &str,
        level: FlashLevel,
        message: impl Into<String>,
        to: &str,
    ) -> Response {
        self.sessions.push_flash(token, level, message).await;
        Redirect::to(to).into_response()
    }

    /// Report a failed operation: expected failures become an error flash
    /// and a redirect to `back`, anything else a 500 page.
    async fn fail(&self, current: &CurrentUser, err: Error, back: &str) -> Response {
        if err.is_not_found() || err.is_permission_denied() || err.is_validation_error() {
            tracing::debug!(error = %err, user = current.username(), "Request rejected");
            self.flash_redirect(&current.token, FlashLevel::Error, flash_message(&err), back)
                .await
        } else {
            internal_error(Some(current.username()), &err)
        }
    }
}

/// The logged-in user of a request.
///
/// Extraction redirects to `/login` when the request has no valid session.
/// The user record is reloaded from storage on every request.
pub(crate) struct CurrentUser {
    token: String,
    user: User,
}

impl CurrentUser {
    fn username(&self) -> &str {
        &self.user.username
    }

    async fn flashes(&self, state: &AppState) -> Vec<Flash> {
        state.sessions.take_flashes(&self.token).await
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let cookies = Cookies::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let Some(token) = cookies.get(SESSION_COOKIE).map(|c| c.value().to_string()) else {
            return Err(Redirect::to("/login").into_response());
        };
        let Some(username) = state.sessions.username_for(&token).await else {
            return Err(Redirect::to("/login").into_response());
        };

        match state.instance.load_user(&username).await {
            Ok(Some(user)) => Ok(Self { token, user }),
            Ok(None) => {
                tracing::warn!(username, "Session refers to a missing user");
                state.sessions.destroy_session(&token).await;
                clear_session_cookie(&cookies);
                Err(Redirect::to("/login").into_response())
            }
            Err(e) => Err(internal_error(None, &e)),
        }
    }
}

/// Query string of `GET /papers`
#[derive(Debug, Default, Deserialize)]
struct PapersQuery {
    #[serde(default)]
    mine: bool,
}

/// Build the application router
pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_home))
        .route("/health", get(handle_health))
        .route("/login", get(handle_login_page).post(handle_login_submit))
        .route(
            "/register",
            get(handle_register_page).post(handle_register_submit),
        )
        .route("/logout", get(handle_logout))
        .route("/papers", get(handle_papers))
        .route("/paper/{id}", get(handle_paper))
        .route(
            "/add_paper",
            get(handle_add_paper_page).post(handle_add_paper_submit),
        )
        .route(
            "/edit_paper/{id}",
            get(handle_edit_paper_page).post(handle_edit_paper_submit),
        )
        .route("/delete_paper/{id}", post(handle_delete_paper))
        .route(
            "/add_post/{paper_id}",
            get(handle_add_post_page).post(handle_add_post_submit),
        )
        .route(
            "/edit_post/{id}",
            get(handle_edit_post_page).post(handle_edit_post_submit),
        )
        .route("/delete_post/{id}", post(handle_delete_post))
        .layer(CookieManagerLayer::new())
        .with_state(state)
}

/// Run the Paperboard server
pub async fn run(args: &ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("paperboard=info".parse()?))
        .init();

    // Create the storage backend
    let backend = create_backend(&args.backend_config).await?;
    let instance = Instance::open(backend);

    let stats = instance.stats().await?;
    tracing::info!(
        users = stats.users,
        papers = stats.papers,
        posts = stats.posts,
        "Instance opened"
    );

    let app = router(AppState::new(instance.clone()));

    // Bind server
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let local_addr = listener.local_addr()?;

    // Print startup message
    println!("Paperboard started");
    println!();
    println!("Web Interface: http://localhost:{}", local_addr.port());
    println!();
    println!("Available endpoints:");
    println!("  GET  /                  - Home (requires login)");
    println!("  GET  /login, /register  - Account pages");
    println!("  GET  /papers            - Paper listing (?mine=true for your own)");
    println!("  GET  /paper/{{id}}        - Paper with its reviews");
    println!("  GET  /add_paper         - Add a paper");
    println!("  GET  /health            - Health check");
    println!();
    println!("Press Ctrl+C to shutdown");

    let json_path = json_path(&args.backend_config);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            save_in_memory(&instance, &json_path).await;
        })
        .await?;

    println!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(sigterm) => sigterm,
        Err(e) => {
            tracing::warn!("Failed to set up SIGTERM handler: {e}");
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Received SIGINT, initiating graceful shutdown...");
            return;
        }
    };

    tokio::select! {
        _ = sigterm.recv() => tracing::info!("Received SIGTERM, initiating graceful shutdown..."),
        _ = tokio::signal::ctrl_c() => tracing::info!("Received SIGINT, initiating graceful shutdown..."),
    }
}

/// Save the store on shutdown (only needed for the InMemory backend)
async fn save_in_memory(instance: &Instance, json_path: &FsPath) {
    let Some(in_memory) = instance.backend().as_any().downcast_ref::<InMemory>() else {
        return;
    };
    match in_memory.save_to_file(json_path).await {
        Ok(()) => {
            tracing::info!("Database saved to {}", json_path.display());
            println!("\nDatabase saved successfully");
        }
        Err(e) => {
            tracing::error!("Failed to save database: {e:?}");
            eprintln!("Failed to save database: {e}");
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn set_session_cookie(cookies: &Cookies, token: String) {
    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_http_only(true);
    cookie.set_path("/");
    cookies.add(cookie);
}

fn clear_session_cookie(cookies: &Cookies) {
    let mut cookie = Cookie::from(SESSION_COOKIE);
    cookie.set_path("/");
    cookies.remove(cookie);
}

/// Username of a valid session, if the request carries one.
async fn session_username(state: &AppState, cookies: &Cookies) -> Option<String> {
    let cookie = cookies.get(SESSION_COOKIE)?;
    state.sessions.username_for(cookie.value()).await
}

fn paper_url(id: &Oid) -> String {
    format!("/paper/{}", id.to_safe())
}

/// Decode a paper id from the URL. Malformed ids are a missing paper.
fn parse_paper_id(raw: &str) -> paperboard::Result<Oid> {
    Oid::from_safe(raw).map_err(|_| {
        PaperError::PaperNotFound {
            id: raw.to_string(),
        }
        .into()
    })
}

/// Decode a post id from the URL. Malformed ids are a missing post.
fn parse_post_id(raw: &str) -> paperboard::Result<Oid> {
    Oid::from_safe(raw).map_err(|_| {
        PaperError::PostNotFound {
            id: raw.to_string(),
        }
        .into()
    })
}

fn flash_message(err: &Error) -> String {
    match err {
        Error::Paper(PaperError::PaperNotFound { .. }) => "Paper not found".to_string(),
        Error::Paper(PaperError::PostNotFound { .. }) => "Review not found".to_string(),
        Error::Paper(PaperError::NotOwner { .. }) => {
            "Only the owner can change this paper".to_string()
        }
        Error::Paper(PaperError::NotAuthor { .. }) => {
            "Only the author can change this review".to_string()
        }
        _ if err.is_not_found() => "Not found".to_string(),
        _ => err.to_string(),
    }
}

fn internal_error(username: Option<&str>, err: &Error) -> Response {
    tracing::error!(error = %err, module = err.module(), "Request failed");
    let ctx = PageContext {
        username,
        flashes: &[],
    };
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(templates::error_page(
            &ctx,
            "The request could not be completed. Please try again later.",
        )),
    )
        .into_response()
}

// ============================================================================
// Authentication Handlers
// ============================================================================

/// Handler for GET /login - Show login page
async fn handle_login_page(State(state): State<AppState>, cookies: Cookies) -> Response {
    if session_username(&state, &cookies).await.is_some() {
        return Redirect::to("/").into_response();
    }
    Html(templates::login_page(&PageContext::anonymous(&[]), None, "")).into_response()
}

/// Handler for POST /login - Process login
async fn handle_login_submit(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<Credentials>,
) -> Response {
    match state.instance.login_user(&form.email, &form.password).await {
        Ok(user) => {
            let token = state.sessions.create_session(&user.username).await;
            set_session_cookie(&cookies, token.clone());
            state
                .flash_redirect(
                    &token,
                    FlashLevel::Success,
                    format!("Welcome back, {}!", user.username),
                    "/",
                )
                .await
        }
        Err(e) if e.is_authentication_error() => Html(templates::login_page(
            &PageContext::anonymous(&[]),
            Some("Invalid email or password"),
            &form.email,
        ))
        .into_response(),
        Err(e) => internal_error(None, &e),
    }
}

/// Handler for GET /logout - Logout and destroy session
async fn handle_logout(State(state): State<AppState>, cookies: Cookies) -> Redirect {
    if let Some(cookie) = cookies.get(SESSION_COOKIE) {
        state.sessions.destroy_session(cookie.value()).await;
        clear_session_cookie(&cookies);
    }
    Redirect::to("/")
}

/// Handler for GET /register - Show registration page
async fn handle_register_page(State(state): State<AppState>, cookies: Cookies) -> Response {
    if session_username(&state, &cookies).await.is_some() {
        return Redirect::to("/").into_response();
    }
    Html(templates::register_page(
        &PageContext::anonymous(&[]),
        None,
        "",
        "",
    ))
    .into_response()
}

/// Handler for POST /register - Create the account and log it in
async fn handle_register_submit(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<Registration>,
) -> Response {
    let (username, email) = (form.username.clone(), form.email.clone());

    match state.instance.register_user(form).await {
        Ok(user) => {
            let token = state.sessions.create_session(&user.username).await;
            set_session_cookie(&cookies, token.clone());
            state
                .flash_redirect(
                    &token,
                    FlashLevel::Success,
                    format!("Welcome to Paperboard, {}!", user.username),
                    "/",
                )
                .await
        }
        Err(e) if e.is_user_facing() => Html(templates::register_page(
            &PageContext::anonymous(&[]),
            Some(&e.to_string()),
            &username,
            &email,
        ))
        .into_response(),
        Err(e) => internal_error(None, &e),
    }
}

// ============================================================================
// Page Handlers
// ============================================================================

/// Handler for GET / - Greeting
async fn handle_home(State(state): State<AppState>, current: CurrentUser) -> Html<String> {
    let flashes = current.flashes(&state).await;
    let ctx = PageContext::user(current.username(), &flashes);
    Html(templates::home_page(&ctx, current.username()))
}

/// Handler for GET /papers - Paper listing
async fn handle_papers(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(query): Query<PapersQuery>,
) -> Response {
    let filter = if query.mine {
        PaperFilter::AuthoredBy(current.username().to_string())
    } else {
        PaperFilter::All
    };

    match state.instance.list_papers(&filter).await {
        Ok(papers) => {
            let flashes = current.flashes(&state).await;
            let ctx = PageContext::user(current.username(), &flashes);
            Html(templates::papers_page(&ctx, &papers, query.mine)).into_response()
        }
        Err(e) => internal_error(Some(current.username()), &e),
    }
}

/// Handler for GET /paper/{id} - Paper detail with reviews
async fn handle_paper(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> Response {
    let result = async {
        let oid = parse_paper_id(&id)?;
        state.instance.paper_detail(&oid, current.username()).await
    }
    .await;

    match result {
        Ok(detail) => {
            let flashes = current.flashes(&state).await;
            let ctx = PageContext::user(current.username(), &flashes);
            Html(templates::paper_page(&ctx, &detail)).into_response()
        }
        Err(e) => state.fail(&current, e, "/papers").await,
    }
}

/// Handler for GET /add_paper - Empty paper form
async fn handle_add_paper_page(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Html<String> {
    let flashes = current.flashes(&state).await;
    let ctx = PageContext::user(current.username(), &flashes);
    Html(templates::paper_form_page(
        &ctx,
        PaperFormMode::Add,
        &PaperForm::default(),
        None,
    ))
}

/// Handler for POST /add_paper - Create a paper
async fn handle_add_paper_submit(
    State(state): State<AppState>,
    current: CurrentUser,
    Form(form): Form<PaperForm>,
) -> Response {
    match state
        .instance
        .add_paper(current.username(), form.clone())
        .await
    {
        Ok(id) => {
            state
                .flash_redirect(
                    &current.token,
                    FlashLevel::Success,
                    "Paper added",
                    &paper_url(&id),
                )
                .await
        }
        Err(e) if e.is_validation_error() => {
            let ctx = PageContext::user(current.username(), &[]);
            Html(templates::paper_form_page(
                &ctx,
                PaperFormMode::Add,
                &form,
                Some(&e.to_string()),
            ))
            .into_response()
        }
        Err(e) => state.fail(&current, e, "/papers").await,
    }
}

/// Handler for GET /edit_paper/{id} - Prefilled paper form
async fn handle_edit_paper_page(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> Response {
    let result = async {
        let oid = parse_paper_id(&id)?;
        let paper = state.instance.get_paper(&oid).await?;
        Ok::<_, Error>((oid, paper))
    }
    .await;

    match result {
        Ok((oid, paper)) if paper.owner != current.username() => {
            state
                .flash_redirect(
                    &current.token,
                    FlashLevel::Error,
                    "Only the owner can change this paper",
                    &paper_url(&oid),
                )
                .await
        }
        Ok((oid, paper)) => {
            let flashes = current.flashes(&state).await;
            let ctx = PageContext::user(current.username(), &flashes);
            Html(templates::paper_form_page(
                &ctx,
                PaperFormMode::Edit(&oid),
                &PaperForm::from_paper(&paper),
                None,
            ))
            .into_response()
        }
        Err(e) => state.fail(&current, e, "/papers").await,
    }
}

/// Handler for POST /edit_paper/{id} - Overwrite a paper
async fn handle_edit_paper_submit(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
    Form(form): Form<PaperForm>,
) -> Response {
    let oid = match parse_paper_id(&id) {
        Ok(oid) => oid,
        Err(e) => return state.fail(&current, e, "/papers").await,
    };

    match state
        .instance
        .edit_paper(&oid, current.username(), form.clone())
        .await
    {
        Ok(()) => {
            state
                .flash_redirect(
                    &current.token,
                    FlashLevel::Success,
                    "Paper updated",
                    &paper_url(&oid),
                )
                .await
        }
        Err(e) if e.is_validation_error() => {
            let ctx = PageContext::user(current.username(), &[]);
            Html(templates::paper_form_page(
                &ctx,
                PaperFormMode::Edit(&oid),
                &form,
                Some(&e.to_string()),
            ))
            .into_response()
        }
        Err(e) if e.is_permission_denied() => state.fail(&current, e, &paper_url(&oid)).await,
        Err(e) => state.fail(&current, e, "/papers").await,
    }
}

/// Handler for POST /delete_paper/{id} - Delete a paper and its reviews
async fn handle_delete_paper(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> Response {
    let oid = match parse_paper_id(&id) {
        Ok(oid) => oid,
        Err(e) => return state.fail(&current, e, "/papers").await,
    };

    match state.instance.delete_paper(&oid, current.username()).await {
        Ok(outcome) if outcome.is_complete() => {
            state
                .flash_redirect(&current.token, FlashLevel::Success, "Paper deleted", "/papers")
                .await
        }
        Ok(outcome) => {
            state
                .flash_redirect(
                    &current.token,
                    FlashLevel::Error,
                    format!(
                        "Paper deleted, but {} of its reviews could not be removed",
                        outcome.posts_failed
                    ),
                    "/papers",
                )
                .await
        }
        Err(e) if e.is_permission_denied() => state.fail(&current, e, &paper_url(&oid)).await,
        Err(e) => state.fail(&current, e, "/papers").await,
    }
}

/// Handler for GET /add_post/{paper_id} - Empty review form
async fn handle_add_post_page(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(paper_id): Path<String>,
) -> Response {
    let result = async {
        let oid = parse_paper_id(&paper_id)?;
        let paper = state.instance.get_paper(&oid).await?;
        Ok::<_, Error>((oid, paper))
    }
    .await;

    match result {
        Ok((oid, paper)) => {
            let flashes = current.flashes(&state).await;
            let ctx = PageContext::user(current.username(), &flashes);
            Html(templates::post_form_page(
                &ctx,
                &paper.title,
                &format!("/add_post/{}", oid.to_safe()),
                &PostForm::default(),
                None,
            ))
            .into_response()
        }
        Err(e) => state.fail(&current, e, "/papers").await,
    }
}

/// Handler for POST /add_post/{paper_id} - Create a review
async fn handle_add_post_submit(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(paper_id): Path<String>,
    Form(form): Form<PostForm>,
) -> Response {
    let oid = match parse_paper_id(&paper_id) {
        Ok(oid) => oid,
        Err(e) => return state.fail(&current, e, "/papers").await,
    };

    match state
        .instance
        .add_post(&oid, current.username(), form.clone())
        .await
    {
        Ok(_) => {
            state
                .flash_redirect(
                    &current.token,
                    FlashLevel::Success,
                    "Review added",
                    &paper_url(&oid),
                )
                .await
        }
        Err(e) if e.is_validation_error() => {
            let title = state
                .instance
                .get_paper(&oid)
                .await
                .map(|p| p.title)
                .unwrap_or_default();
            let ctx = PageContext::user(current.username(), &[]);
            Html(templates::post_form_page(
                &ctx,
                &title,
                &format!("/add_post/{}", oid.to_safe()),
                &form,
                Some(&e.to_string()),
            ))
            .into_response()
        }
        Err(e) => state.fail(&current, e, "/papers").await,
    }
}

/// Handler for GET /edit_post/{id} - Prefilled review form
async fn handle_edit_post_page(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> Response {
    let result = async {
        let oid = parse_post_id(&id)?;
        let post = state.instance.get_post(&oid).await?;
        Ok::<_, Error>((oid, post))
    }
    .await;

    let (oid, post) = match result {
        Ok(found) => found,
        Err(e) => return state.fail(&current, e, "/papers").await,
    };

    if post.user_id != current.username() {
        return state
            .flash_redirect(
                &current.token,
                FlashLevel::Error,
                "Only the author can change this review",
                &paper_url(&post.paper_id),
            )
            .await;
    }

    let title = state
        .instance
        .get_paper(&post.paper_id)
        .await
        .map(|p| p.title)
        .unwrap_or_default();
    let form = PostForm {
        content: post.content,
        score: post.score.map(|s| s.to_string()),
    };

    let flashes = current.flashes(&state).await;
    let ctx = PageContext::user(current.username(), &flashes);
    Html(templates::post_form_page(
        &ctx,
        &title,
        &format!("/edit_post/{}", oid.to_safe()),
        &form,
        None,
    ))
    .into_response()
}

/// Handler for POST /edit_post/{id} - Update a review
async fn handle_edit_post_submit(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
    Form(form): Form<PostForm>,
) -> Response {
    let oid = match parse_post_id(&id) {
        Ok(oid) => oid,
        Err(e) => return state.fail(&current, e, "/papers").await,
    };

    match state
        .instance
        .edit_post(&oid, current.username(), form.clone())
        .await
    {
        Ok(paper) => {
            state
                .flash_redirect(
                    &current.token,
                    FlashLevel::Success,
                    "Review updated",
                    &paper_url(&paper),
                )
                .await
        }
        Err(e) if e.is_validation_error() => {
            let title = match state.instance.get_post(&oid).await {
                Ok(post) => state
                    .instance
                    .get_paper(&post.paper_id)
                    .await
                    .map(|p| p.title)
                    .unwrap_or_default(),
                Err(_) => String::new(),
            };
            let ctx = PageContext::user(current.username(), &[]);
            Html(templates::post_form_page(
                &ctx,
                &title,
                &format!("/edit_post/{}", oid.to_safe()),
                &form,
                Some(&e.to_string()),
            ))
            .into_response()
        }
        Err(e) if e.is_permission_denied() => {
            let back = parent_url(&state, &oid).await;
            state.fail(&current, e, &back).await
        }
        Err(e) => state.fail(&current, e, "/papers").await,
    }
}

/// Handler for POST /delete_post/{id} - Delete a review
async fn handle_delete_post(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> Response {
    let oid = match parse_post_id(&id) {
        Ok(oid) => oid,
        Err(e) => return state.fail(&current, e, "/papers").await,
    };

    match state.instance.delete_post(&oid, current.username()).await {
        Ok(paper) => {
            state
                .flash_redirect(
                    &current.token,
                    FlashLevel::Success,
                    "Review deleted",
                    &paper_url(&paper),
                )
                .await
        }
        Err(e) if e.is_permission_denied() => {
            let back = parent_url(&state, &oid).await;
            state.fail(&current, e, &back).await
        }
        Err(e) => state.fail(&current, e, "/papers").await,
    }
}

/// Detail page of the paper a post belongs to, or the listing.
async fn parent_url(state: &AppState, post: &Oid) -> String {
    state
        .instance
        .get_post(post)
        .await
        .map(|p| paper_url(&p.paper_id))
        .unwrap_or_else(|_| "/papers".to_string())
}

// ============================================================================
// Health
// ============================================================================

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    backend: &'static str,
}

/// Handler for GET /health
async fn handle_health(State(state): State<AppState>) -> Json<HealthResponse> {
    let backend = state.instance.backend().as_any();
    let backend_type = if backend.is::<Sqlite>() {
        "sqlite"
    } else if backend.is::<InMemory>() {
        "inmemory"
    } else {
        "unknown"
    };

    Json(HealthResponse {
        status: "healthy",
        backend: backend_type,
    })
}
