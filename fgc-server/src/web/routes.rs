//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::controller::ControllerError;
use crate::domain::DomainError;
use crate::dto::{
    ErrorResponse, FavoriteJourneyDto, FavoriteJourneyResponse, FriendsDto, StationDto, UserDto,
};

use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(get_stations))
        .route("/stations/:name", get(get_station))
        .route("/users", get(get_users))
        .route("/users/:username", get(get_user))
        .route(
            "/users/:username/favoriteJourneys",
            get(get_favorite_journeys).post(add_favorite_journey),
        )
        .route(
            "/users/:username/favoriteJourneys/:id",
            delete(remove_favorite_journey),
        )
        .route("/users/:username/friends", get(get_user_friends))
        .route("/friends", get(get_all_friends).post(save_friends))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn get_stations(State(state): State<AppState>) -> Result<Json<Vec<StationDto>>, AppError> {
    let stations = state.controller.get_stations()?;
    Ok(Json(stations.iter().map(StationDto::from).collect()))
}

async fn get_station(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<StationDto>, AppError> {
    let station = state.controller.get_station(&name)?;
    Ok(Json(StationDto::from(&station)))
}

async fn get_users(State(state): State<AppState>) -> Result<Json<Vec<UserDto>>, AppError> {
    let users = state.controller.get_users()?;
    Ok(Json(users.iter().map(UserDto::from).collect()))
}

async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserDto>, AppError> {
    let user = state.controller.get_user(&username)?;
    Ok(Json(UserDto::from(&user)))
}

async fn get_favorite_journeys(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Vec<FavoriteJourneyResponse>>, AppError> {
    let favorites = state.controller.get_user_favorite_journeys(&username)?;
    Ok(Json(
        favorites.iter().map(FavoriteJourneyResponse::from).collect(),
    ))
}

/// Save a favorite journey for a user.
async fn add_favorite_journey(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(req): Json<FavoriteJourneyDto>,
) -> Result<(StatusCode, Json<FavoriteJourneyResponse>), AppError> {
    let favorite = state
        .controller
        .add_user_favorite_journey(&username, &req)?;
    Ok((
        StatusCode::CREATED,
        Json(FavoriteJourneyResponse::from(&favorite)),
    ))
}

async fn remove_favorite_journey(
    State(state): State<AppState>,
    Path((username, id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    state
        .controller
        .remove_user_favorite_journey(&username, &id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_user_friends(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<FriendsDto>, AppError> {
    Ok(Json(state.controller.get_user_friends(&username)?))
}

async fn get_all_friends(State(state): State<AppState>) -> Result<Json<Vec<FriendsDto>>, AppError> {
    Ok(Json(state.controller.get_all_friends()?))
}

/// Add friends to a user's friend list.
async fn save_friends(
    State(state): State<AppState>,
    Json(req): Json<FriendsDto>,
) -> Result<StatusCode, AppError> {
    state.controller.save_friends(&req)?;
    Ok(StatusCode::CREATED)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl From<ControllerError> for AppError {
    fn from(e: ControllerError) -> Self {
        let message = e.to_string();
        match e {
            ControllerError::Validation(_) | ControllerError::Station(_) => {
                AppError::BadRequest { message }
            }
            ControllerError::Domain(DomainError::SameOriginDestination) => {
                AppError::BadRequest { message }
            }
            ControllerError::Domain(
                DomainError::UserDoesNotExist(_)
                | DomainError::StationNotFound(_)
                | DomainError::FavoriteJourneyNotFound(_),
            ) => AppError::NotFound { message },
            ControllerError::Domain(
                DomainError::FriendAlreadyExists | DomainError::FavoriteJourneyAlreadyExists,
            ) => AppError::Conflict { message },
            ControllerError::Store(_) => AppError::Internal { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::controller::FgcController;
    use crate::domain::Station;
    use crate::store::{MemoryStore, StoreError};
    use crate::validation::ValidationError;

    fn app() -> Router {
        let store = MemoryStore::with_stations([
            Station::new("SR", "Sabadell Rambla").unwrap(),
            Station::new("PC", "Barcelona Pl. Catalunya").unwrap(),
        ]);
        let controller = FgcController::new(Arc::new(store));
        controller
            .save_friends(&FriendsDto {
                username: "username".to_string(),
                friends: vec!["existingfriend".to_string()],
            })
            .unwrap();
        create_router(AppState::new(controller))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::String(
                String::from_utf8_lossy(&bytes).into_owned(),
            ))
        };
        (status, value)
    }

    #[tokio::test]
    async fn health() {
        let (status, body) = send(&app(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::String("ok".to_string()));
    }

    #[tokio::test]
    async fn stations() {
        let app = app();
        let (status, body) = send(&app, "GET", "/stations", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 2);

        let (status, body) = send(&app, "GET", "/stations/Sabadell%20Rambla", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "id": "SR", "name": "Sabadell Rambla" }));

        let (status, body) = send(&app, "GET", "/stations/Manresa", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "station Manresa doesn't exist");
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let (status, body) = send(&app(), "GET", "/users/nonexistentuser", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "user nonexistentuser doesn't exist");
    }

    #[tokio::test]
    async fn save_friends_and_read_back() {
        let app = app();
        let (status, _) = send(
            &app,
            "POST",
            "/friends",
            Some(json!({ "username": "username", "friends": ["joan"] })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(&app, "GET", "/users/username/friends", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "username": "username", "friends": ["existingfriend", "joan"] })
        );

        let (status, body) = send(&app, "GET", "/friends", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_friend_is_conflict() {
        let (status, body) = send(
            &app(),
            "POST",
            "/friends",
            Some(json!({ "username": "username", "friends": ["existingfriend"] })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "Friend already exists");
    }

    #[tokio::test]
    async fn invalid_username_is_bad_request() {
        let (status, body) = send(
            &app(),
            "POST",
            "/friends",
            Some(json!({ "username": "ab", "friends": [] })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "El nombre de usuario debe tener al menos 3 caracteres"
        );
    }

    #[tokio::test]
    async fn favorite_journey_lifecycle() {
        let app = app();
        let (status, body) = send(
            &app,
            "POST",
            "/users/username/favoriteJourneys",
            Some(json!({
                "origin": "Sabadell Rambla",
                "destination": "Barcelona Pl. Catalunya",
                "startList": [{ "dayOfWeek": "Monday", "time": "08:15" }]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["journeyId"], "SR-PC");
        assert_eq!(body["origin"]["name"], "Sabadell Rambla");
        assert_eq!(body["startList"][0]["dayOfWeek"], "Monday");
        let id = body["id"].as_str().unwrap().to_string();

        let (status, body) = send(&app, "GET", "/users/username/favoriteJourneys", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);

        let uri = format!("/users/username/favoriteJourneys/{id}");
        let (status, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn favorite_journey_rule_violations() {
        let app = app();
        let (status, body) = send(
            &app,
            "POST",
            "/users/username/favoriteJourneys",
            Some(json!({ "origin": "abc", "destination": "abc" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "El origen y el destino deben tener entre 4 y 25 caracteres"
        );

        let (status, body) = send(
            &app,
            "POST",
            "/users/username/favoriteJourneys",
            Some(json!({ "origin": "Sabadell Rambla", "destination": "Sabadell Rambla" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Origin and destination must be different");

        let (status, _) = send(
            &app,
            "POST",
            "/users/nobody/favoriteJourneys",
            Some(json!({ "origin": "Sabadell Rambla", "destination": "Barcelona Pl. Catalunya" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn error_status_mapping() {
        let cases = [
            (
                ControllerError::Validation(ValidationError::TIME_PATTERN),
                StatusCode::BAD_REQUEST,
            ),
            (
                ControllerError::Domain(DomainError::SameOriginDestination),
                StatusCode::BAD_REQUEST,
            ),
            (
                ControllerError::Domain(DomainError::FavoriteJourneyNotFound("fav-1".into())),
                StatusCode::NOT_FOUND,
            ),
            (
                ControllerError::Domain(DomainError::FavoriteJourneyAlreadyExists),
                StatusCode::CONFLICT,
            ),
            (
                ControllerError::Store(StoreError::Poisoned("users")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
