use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, Uri},
    response::{IntoResponse, Response},
    Json, Router
};
use log::{error, info};
use serde::Serialize;
use serde_json::Value;

use crate::backend::UserStore;
use crate::core::{Dataset, Fields, User, UserUpdate};
use crate::server::error::ServerError;

pub type SharedStore = Arc<dyn UserStore + Send + Sync>;

type HandlerResult = Result<Response, ServerError>;

#[derive(Serialize)]
struct Message {
    message: &'static str
}

fn confirm(message: &'static str) -> Response {
    Json(Message { message }).into_response()
}

/// Every request lands in `dispatch`, whatever its path.
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .fallback(dispatch)
        .with_state(store)
}

async fn dispatch(State(store): State<SharedStore>, method: Method, uri: Uri, body: Bytes) -> Response {
    info!("{} {}", method, uri);
    let store = store.as_ref();
    let result = match method {
        Method::GET => list_users(store),
        Method::POST => create_user(store, &body),
        Method::PUT => update_user(store, &body),
        Method::DELETE => delete_user(store, target_id(&uri)),
        _ => Err(ServerError::MethodNotAllowed)
    };
    result.into_response()
}

/// The request target minus its leading `/`, query string included,
/// without any decoding.
fn target_id(uri: &Uri) -> &str {
    let target = uri.path_and_query()
        .map(|path_and_query| path_and_query.as_str())
        .unwrap_or("/");
    target.strip_prefix('/').unwrap_or(target)
}

fn load(store: &dyn UserStore, failure: &'static str) -> Result<Dataset, ServerError> {
    store.load().map_err(|err| ServerError::Unavailable(failure, err))
}

/// A failed write is only logged; the client is still told the change went through.
fn persist(store: &dyn UserStore, dataset: &Dataset) {
    if let Err(err) = store.save(dataset) {
        error!("error writing data file: {}", err);
    }
}

fn list_users(store: &dyn UserStore) -> HandlerResult {
    let dataset = load(store, "Failed to read data")?;
    Ok(Json(dataset).into_response())
}

fn create_user(store: &dyn UserStore, body: &[u8]) -> HandlerResult {
    let user: User = serde_json::from_slice(body)?;
    let mut dataset = load(store, "Failed to create data")?;
    dataset.add_user(user);
    persist(store, &dataset);
    Ok(confirm("Data created successfully"))
}

fn update_user(store: &dyn UserStore, body: &[u8]) -> HandlerResult {
    let update = UserUpdate::from(serde_json::from_slice::<Fields>(body)?);
    let mut dataset = load(store, "Failed to update data")?;
    if dataset.update_user(&update).is_none() {
        return Err(ServerError::NotFound(update.id.unwrap_or(Value::Null)));
    }
    persist(store, &dataset);
    Ok(confirm("Data updated successfully"))
}

fn delete_user(store: &dyn UserStore, id: &str) -> HandlerResult {
    let mut dataset = load(store, "Failed to delete data")?;
    if dataset.remove_user(id).is_none() {
        return Err(ServerError::NotFound(Value::from(id)));
    }
    persist(store, &dataset);
    Ok(confirm("Data deleted successfully"))
}
