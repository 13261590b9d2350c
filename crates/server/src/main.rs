// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::{Date, OffsetDateTime};
use tokio::sync::Mutex;
use tracing::info;

use bigster_api::{
    ApiError, AssignHrRequest, AuthenticatedActor, ChangeStatusRequest, ChangeStatusResponse,
    CreateSelectionRequest, CreateSelectionResponse, EditSelectionRequest, EditSelectionResponse,
    ListSelectionsResponse, ListStatusesResponse, SelectionCapabilities, SelectionHistoryResponse,
    SelectionStore, SelectionView, assign_hr, authenticate_stub, change_status, create_selection,
    edit_selection, get_selection, list_selections, list_statuses, selection_capabilities,
    selection_history,
};
use bigster_domain::{Role, UserId};

/// BigSter Selection Server - HTTP server for the selection lifecycle engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Seed the store with a handful of demo selections
    #[arg(long)]
    seed: bool,
}

/// Application state shared across handlers.
///
/// The store is wrapped in a Mutex so the read-apply-commit cycle of each
/// request runs against a consistent snapshot.
#[derive(Clone)]
struct AppState {
    /// The in-memory selection store.
    store: Arc<Mutex<SelectionStore>>,
}

/// API request for creating a selection.
///
/// This includes authentication information in addition to the selection data.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateSelectionApiRequest {
    /// The actor ID performing this action.
    actor_id: i64,
    /// The role of the actor.
    actor_role: String,
    /// The actor's department, if any.
    department_id: Option<i64>,
    /// The selection title.
    title: String,
    /// The selection type (INTERNAL or EXTERNAL).
    selection_type: String,
    /// The contracted package (BASE or MDO).
    package: String,
    /// The department the selection recruits for.
    selection_department_id: i64,
    /// The professional figure being recruited.
    professional_figure_id: i64,
}

/// API request for transitioning a selection.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ChangeStatusApiRequest {
    /// The actor ID performing this action.
    actor_id: i64,
    /// The role of the actor.
    actor_role: String,
    /// The actor's department, if any.
    department_id: Option<i64>,
    /// The target status code.
    new_status: String,
    /// Optional due date for the next stage (ISO 8601).
    due_date: Option<String>,
    /// Optional note recorded in the history.
    note: Option<String>,
}

/// API request for assigning the responsible HR user.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct AssignHrApiRequest {
    /// The actor ID performing this action.
    actor_id: i64,
    /// The role of the actor.
    actor_role: String,
    /// The actor's department, if any.
    department_id: Option<i64>,
    /// The HR user to assign.
    hr_user_id: i64,
    /// Optional due date for the next stage (ISO 8601).
    due_date: Option<String>,
    /// Optional note recorded in the history.
    note: Option<String>,
}

/// API request for editing selection metadata.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct EditSelectionApiRequest {
    /// The actor ID performing this action.
    actor_id: i64,
    /// The role of the actor.
    actor_role: String,
    /// The actor's department, if any.
    department_id: Option<i64>,
    /// The new title.
    title: String,
}

/// Query parameters carrying the caller's identity on read endpoints.
#[derive(Debug, Deserialize)]
struct ActorQuery {
    /// The actor ID performing this request.
    actor_id: i64,
    /// The role of the actor.
    actor_role: String,
    /// The actor's department, if any.
    department_id: Option<i64>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            // A status outside the registry is data corruption or version
            // skew, not a malformed request.
            ApiError::UnknownStatus { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::SelectionClosed { .. } | ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::InvalidTransition { .. }
            | ApiError::NoChange { .. }
            | ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Authenticates the caller's claimed identity.
fn authenticate(
    actor_id: i64,
    actor_role: &str,
    department_id: Option<i64>,
) -> Result<AuthenticatedActor, HttpError> {
    authenticate_stub(actor_id, actor_role, department_id)
        .map_err(|e| HttpError::from(ApiError::from(e)))
}

/// Parses an optional ISO 8601 due date.
fn parse_due_date(due_date: Option<&str>) -> Result<Option<Date>, HttpError> {
    due_date
        .map(|raw| {
            Date::parse(raw, &time::format_description::well_known::Iso8601::DEFAULT).map_err(
                |e| {
                    HttpError::from(ApiError::InvalidInput {
                        field: String::from("due_date"),
                        message: format!("Invalid date '{raw}': {e}"),
                    })
                },
            )
        })
        .transpose()
}

/// Handler for POST `/selections`.
async fn handle_create_selection(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateSelectionApiRequest>,
) -> Result<Json<CreateSelectionResponse>, HttpError> {
    info!(
        actor_id = req.actor_id,
        role = %req.actor_role,
        title = %req.title,
        "Handling create_selection request"
    );

    let actor: AuthenticatedActor = authenticate(req.actor_id, &req.actor_role, req.department_id)?;
    let create_request: CreateSelectionRequest = CreateSelectionRequest {
        title: req.title,
        selection_type: req.selection_type,
        package: req.package,
        department_id: req.selection_department_id,
        professional_figure_id: req.professional_figure_id,
    };

    let mut store = app_state.store.lock().await;
    let response: CreateSelectionResponse = create_selection(
        &mut store,
        create_request,
        &actor,
        OffsetDateTime::now_utc(),
    )?;
    drop(store);
    Ok(Json(response))
}

/// Handler for GET `/selections`.
async fn handle_list_selections(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ActorQuery>,
) -> Result<Json<ListSelectionsResponse>, HttpError> {
    let actor: AuthenticatedActor =
        authenticate(query.actor_id, &query.actor_role, query.department_id)?;
    let store = app_state.store.lock().await;
    let response: ListSelectionsResponse = list_selections(&store, &actor);
    drop(store);
    Ok(Json(response))
}

/// Handler for GET `/selections/{id}`.
async fn handle_get_selection(
    AxumState(app_state): AxumState<AppState>,
    Path(selection_id): Path<i64>,
    Query(query): Query<ActorQuery>,
) -> Result<Json<SelectionView>, HttpError> {
    let actor: AuthenticatedActor =
        authenticate(query.actor_id, &query.actor_role, query.department_id)?;
    let store = app_state.store.lock().await;
    let view: SelectionView = get_selection(&store, selection_id, &actor)?;
    drop(store);
    Ok(Json(view))
}

/// Handler for POST `/selections/{id}/status`.
async fn handle_change_status(
    AxumState(app_state): AxumState<AppState>,
    Path(selection_id): Path<i64>,
    Json(req): Json<ChangeStatusApiRequest>,
) -> Result<Json<ChangeStatusResponse>, HttpError> {
    info!(
        actor_id = req.actor_id,
        role = %req.actor_role,
        selection_id,
        new_status = %req.new_status,
        "Handling change_status request"
    );

    let actor: AuthenticatedActor = authenticate(req.actor_id, &req.actor_role, req.department_id)?;
    let due_date: Option<Date> = parse_due_date(req.due_date.as_deref())?;
    let change_request: ChangeStatusRequest = ChangeStatusRequest {
        new_status: req.new_status,
        due_date,
        note: req.note,
    };

    let mut store = app_state.store.lock().await;
    let response: ChangeStatusResponse = change_status(
        &mut store,
        selection_id,
        change_request,
        &actor,
        OffsetDateTime::now_utc(),
    )?;
    drop(store);
    Ok(Json(response))
}

/// Handler for POST `/selections/{id}/assign_hr`.
async fn handle_assign_hr(
    AxumState(app_state): AxumState<AppState>,
    Path(selection_id): Path<i64>,
    Json(req): Json<AssignHrApiRequest>,
) -> Result<Json<ChangeStatusResponse>, HttpError> {
    info!(
        actor_id = req.actor_id,
        role = %req.actor_role,
        selection_id,
        hr_user_id = req.hr_user_id,
        "Handling assign_hr request"
    );

    let actor: AuthenticatedActor = authenticate(req.actor_id, &req.actor_role, req.department_id)?;
    let due_date: Option<Date> = parse_due_date(req.due_date.as_deref())?;
    let assign_request: AssignHrRequest = AssignHrRequest {
        hr_user_id: req.hr_user_id,
        due_date,
        note: req.note,
    };

    let mut store = app_state.store.lock().await;
    let response: ChangeStatusResponse = assign_hr(
        &mut store,
        selection_id,
        assign_request,
        &actor,
        OffsetDateTime::now_utc(),
    )?;
    drop(store);
    Ok(Json(response))
}

/// Handler for POST `/selections/{id}/edit`.
async fn handle_edit_selection(
    AxumState(app_state): AxumState<AppState>,
    Path(selection_id): Path<i64>,
    Json(req): Json<EditSelectionApiRequest>,
) -> Result<Json<EditSelectionResponse>, HttpError> {
    let actor: AuthenticatedActor = authenticate(req.actor_id, &req.actor_role, req.department_id)?;
    let edit_request: EditSelectionRequest = EditSelectionRequest { title: req.title };

    let mut store = app_state.store.lock().await;
    let response: EditSelectionResponse = edit_selection(
        &mut store,
        selection_id,
        edit_request,
        &actor,
        OffsetDateTime::now_utc(),
    )?;
    drop(store);
    Ok(Json(response))
}

/// Handler for GET `/selections/{id}/history`.
async fn handle_selection_history(
    AxumState(app_state): AxumState<AppState>,
    Path(selection_id): Path<i64>,
    Query(query): Query<ActorQuery>,
) -> Result<Json<SelectionHistoryResponse>, HttpError> {
    let actor: AuthenticatedActor =
        authenticate(query.actor_id, &query.actor_role, query.department_id)?;
    let store = app_state.store.lock().await;
    let response: SelectionHistoryResponse = selection_history(&store, selection_id, &actor)?;
    drop(store);
    Ok(Json(response))
}

/// Handler for GET `/selections/{id}/capabilities`.
async fn handle_selection_capabilities(
    AxumState(app_state): AxumState<AppState>,
    Path(selection_id): Path<i64>,
    Query(query): Query<ActorQuery>,
) -> Result<Json<SelectionCapabilities>, HttpError> {
    let actor: AuthenticatedActor =
        authenticate(query.actor_id, &query.actor_role, query.department_id)?;
    let store = app_state.store.lock().await;
    let capabilities: SelectionCapabilities =
        selection_capabilities(&store, selection_id, &actor)?;
    drop(store);
    Ok(Json(capabilities))
}

/// Handler for GET `/statuses`.
#[allow(clippy::unused_async)]
async fn handle_list_statuses() -> Json<ListStatusesResponse> {
    Json(list_statuses())
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/selections", post(handle_create_selection))
        .route("/selections", get(handle_list_selections))
        .route("/selections/{id}", get(handle_get_selection))
        .route("/selections/{id}/status", post(handle_change_status))
        .route("/selections/{id}/assign_hr", post(handle_assign_hr))
        .route("/selections/{id}/edit", post(handle_edit_selection))
        .route("/selections/{id}/history", get(handle_selection_history))
        .route(
            "/selections/{id}/capabilities",
            get(handle_selection_capabilities),
        )
        .route("/statuses", get(handle_list_statuses))
        .with_state(app_state)
}

/// Seeds the store with demo selections for local development.
fn seed_store(store: &mut SelectionStore) -> Result<(), ApiError> {
    let administration: AuthenticatedActor =
        AuthenticatedActor::new(UserId::new(1), Role::Amministrazione, None);
    let hr_manager: AuthenticatedActor =
        AuthenticatedActor::new(UserId::new(2), Role::ResponsabileRisorseUmane, None);
    let now: OffsetDateTime = OffsetDateTime::now_utc();

    let first: CreateSelectionResponse = create_selection(
        store,
        CreateSelectionRequest {
            title: String::from("Senior backend developer"),
            selection_type: String::from("EXTERNAL"),
            package: String::from("BASE"),
            department_id: 1,
            professional_figure_id: 1,
        },
        &administration,
        now,
    )?;
    create_selection(
        store,
        CreateSelectionRequest {
            title: String::from("Marketing specialist"),
            selection_type: String::from("INTERNAL"),
            package: String::from("MDO"),
            department_id: 2,
            professional_figure_id: 2,
        },
        &administration,
        now,
    )?;

    // Move the first selection into the hands of an HR user.
    assign_hr(
        store,
        first.selection.selection.id.value(),
        AssignHrRequest {
            hr_user_id: 3,
            due_date: None,
            note: Some(String::from("Seeded assignment")),
        },
        &hr_manager,
        now,
    )?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing BigSter Selection Server");

    let mut store: SelectionStore = SelectionStore::new();
    if args.seed {
        info!("Seeding demo selections");
        seed_store(&mut store)?;
    }

    let app_state: AppState = AppState {
        store: Arc::new(Mutex::new(store)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use tower::ServiceExt;

    /// Helper to create test app state with an empty store.
    fn create_test_app_state() -> AppState {
        AppState {
            store: Arc::new(Mutex::new(SelectionStore::new())),
        }
    }

    /// Helper to create a test selection creation request.
    fn create_test_selection_request(actor_id: i64, role: &str) -> CreateSelectionApiRequest {
        CreateSelectionApiRequest {
            actor_id,
            actor_role: String::from(role),
            department_id: None,
            title: String::from("Data engineer"),
            selection_type: String::from("EXTERNAL"),
            package: String::from("BASE"),
            selection_department_id: 4,
            professional_figure_id: 9,
        }
    }

    fn post_json<T: Serialize>(uri: &str, body: &T) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(body).unwrap()))
            .unwrap()
    }

    fn get_as(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_selection_as_administration_succeeds() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(post_json(
                "/selections",
                &create_test_selection_request(1, "AMMINISTRAZIONE"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["selection"]["selection"]["title"], "Data engineer");
        assert_eq!(
            body["selection"]["selection"]["status"],
            "FATTURA_AV_SALDATA"
        );
        assert_eq!(body["selection"]["step"]["ordinal"], 1);
    }

    #[tokio::test]
    async fn test_create_selection_as_ceo_is_forbidden() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(post_json(
                "/selections",
                &create_test_selection_request(5, "CEO"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::FORBIDDEN);
        let body = body_json(response).await;
        assert_eq!(body["error"], true);
    }

    #[tokio::test]
    async fn test_unknown_role_is_unauthorized() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(post_json(
                "/selections",
                &create_test_selection_request(1, "SUPERUSER"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_unknown_status_is_unprocessable() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());

        app.clone()
            .oneshot(post_json(
                "/selections",
                &create_test_selection_request(1, "AMMINISTRAZIONE"),
            ))
            .await
            .unwrap();

        let change: ChangeStatusApiRequest = ChangeStatusApiRequest {
            actor_id: 2,
            actor_role: String::from("RESPONSABILE_RISORSE_UMANE"),
            department_id: None,
            new_status: String::from("STATO_FANTASMA"),
            due_date: None,
            note: None,
        };
        let response = app
            .oneshot(post_json("/selections/1/status", &change))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_skipping_a_step_is_bad_request() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());

        app.clone()
            .oneshot(post_json(
                "/selections",
                &create_test_selection_request(1, "AMMINISTRAZIONE"),
            ))
            .await
            .unwrap();

        let change: ChangeStatusApiRequest = ChangeStatusApiRequest {
            actor_id: 2,
            actor_role: String::from("RESPONSABILE_RISORSE_UMANE"),
            department_id: None,
            new_status: String::from("COLLOQUI_IN_CORSO"),
            due_date: None,
            note: None,
        };
        let response = app
            .oneshot(post_json("/selections/1/status", &change))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_selection_is_not_found() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(get_as(
                "/selections/42?actor_id=2&actor_role=RESPONSABILE_RISORSE_UMANE",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_assign_hr_and_advance_through_server() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());

        app.clone()
            .oneshot(post_json(
                "/selections",
                &create_test_selection_request(1, "AMMINISTRAZIONE"),
            ))
            .await
            .unwrap();

        let assign: AssignHrApiRequest = AssignHrApiRequest {
            actor_id: 2,
            actor_role: String::from("RESPONSABILE_RISORSE_UMANE"),
            department_id: None,
            hr_user_id: 3,
            due_date: Some(String::from("2026-09-15")),
            note: Some(String::from("Kickoff scheduled")),
        };
        let response = app
            .clone()
            .oneshot(post_json("/selections/1/assign_hr", &assign))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["selection"]["selection"]["status"], "HR_ASSEGNATA");
        assert_eq!(body["selection"]["selection"]["assigned_hr_id"], 3);

        // The assigned HR user drives the next step.
        let change: ChangeStatusApiRequest = ChangeStatusApiRequest {
            actor_id: 3,
            actor_role: String::from("RISORSE_UMANE"),
            department_id: None,
            new_status: String::from("PRIMA_CALL_COMPLETATA"),
            due_date: None,
            note: None,
        };
        let response = app
            .clone()
            .oneshot(post_json("/selections/1/status", &change))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let history = app
            .oneshot(get_as(
                "/selections/1/history?actor_id=2&actor_role=RESPONSABILE_RISORSE_UMANE",
            ))
            .await
            .unwrap();
        let body = body_json(history).await;
        assert_eq!(body["entries"].as_array().unwrap().len(), 3);
        assert_eq!(body["entries"][1]["due_date"], "2026-09-15");
        assert_eq!(body["entries"][1]["note"], "Kickoff scheduled");
    }

    #[tokio::test]
    async fn test_closed_selection_conflicts() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());

        app.clone()
            .oneshot(post_json(
                "/selections",
                &create_test_selection_request(1, "AMMINISTRAZIONE"),
            ))
            .await
            .unwrap();

        // Administration owns the selection and cancels it outright.
        let cancel: ChangeStatusApiRequest = ChangeStatusApiRequest {
            actor_id: 1,
            actor_role: String::from("AMMINISTRAZIONE"),
            department_id: None,
            new_status: String::from("ANNULLATA"),
            due_date: None,
            note: Some(String::from("Client withdrew")),
        };
        let response = app
            .clone()
            .oneshot(post_json("/selections/1/status", &cancel))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let change: ChangeStatusApiRequest = ChangeStatusApiRequest {
            actor_id: 2,
            actor_role: String::from("RESPONSABILE_RISORSE_UMANE"),
            department_id: None,
            new_status: String::from("PRIMA_CALL_COMPLETATA"),
            due_date: None,
            note: None,
        };
        let response = app
            .oneshot(post_json("/selections/1/status", &change))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_the_caller() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());

        app.clone()
            .oneshot(post_json(
                "/selections",
                &create_test_selection_request(1, "AMMINISTRAZIONE"),
            ))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(get_as(
                "/selections?actor_id=2&actor_role=RESPONSABILE_RISORSE_UMANE",
            ))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["total"], 1);

        // An unrelated HR operator sees an empty list, not an error.
        let response = app
            .oneshot(get_as("/selections?actor_id=9&actor_role=RISORSE_UMANE"))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["total"], 0);
    }

    #[tokio::test]
    async fn test_status_registry_endpoint() {
        let app: Router = build_router(create_test_app_state());

        let response = app.oneshot(get_as("/statuses")).await.unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let body = body_json(response).await;
        let statuses = body["statuses"].as_array().unwrap();
        assert_eq!(statuses.len(), 14);
        assert_eq!(statuses[0]["code"], "FATTURA_AV_SALDATA");
        assert_eq!(statuses[0]["step"]["kind"], "linear");
        assert_eq!(statuses[13]["code"], "ANNULLATA");
        assert_eq!(statuses[13]["display"]["tone"], "danger");
    }

    #[tokio::test]
    async fn test_capabilities_endpoint() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());

        app.clone()
            .oneshot(post_json(
                "/selections",
                &create_test_selection_request(1, "AMMINISTRAZIONE"),
            ))
            .await
            .unwrap();

        let response = app
            .oneshot(get_as("/selections/1/capabilities?actor_id=5&actor_role=CEO"))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["can_view"], "allowed");
        assert_eq!(body["can_create_selection"], "denied");
    }

    #[tokio::test]
    async fn test_seeded_store_serves_selections() {
        let mut store: SelectionStore = SelectionStore::new();
        seed_store(&mut store).unwrap();
        let app: Router = build_router(AppState {
            store: Arc::new(Mutex::new(store)),
        });

        let response = app
            .oneshot(get_as("/selections?actor_id=9&actor_role=DEVELOPER"))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["total"], 2);
        assert_eq!(
            body["selections"][0]["selection"]["status"],
            "HR_ASSEGNATA"
        );
    }
}
