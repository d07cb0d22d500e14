//! JSON surface under `/items`.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Extension, Path,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use stockroom_core::ItemId;
use stockroom_inventory::{CreateItem, PatchItem};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/:id", get(get_item).put(update_item).delete(delete_item))
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreateItemRequest>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_body_rejection("create", rejection),
    };

    match services.inventory().create(&CreateItem::from(body)).await {
        Ok(item) => (StatusCode::CREATED, Json(dto::CreatedItemResponse::from(&item))).into_response(),
        Err(e) => errors::service_error_to_json(e),
    }
}

pub async fn list_items(Extension(services): Extension<Arc<AppServices>>) -> Response {
    match services.inventory().list().await {
        Ok(items) => {
            let body: Vec<dto::ItemResponse> = items.iter().map(dto::ItemResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => errors::service_error_to_json(e),
    }
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    id: Result<Path<ItemId>, PathRejection>,
) -> Response {
    let Path(id) = match id {
        Ok(id) => id,
        Err(rejection) => return errors::json_path_rejection("get", rejection),
    };

    match services.inventory().get(id).await {
        Ok(item) => (StatusCode::OK, Json(dto::ItemResponse::from(&item))).into_response(),
        Err(e) => errors::service_error_to_json(e),
    }
}

/// Partial update: only the fields present in the body are overwritten.
pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    id: Result<Path<ItemId>, PathRejection>,
    body: Result<Json<dto::UpdateItemRequest>, JsonRejection>,
) -> Response {
    let Path(id) = match id {
        Ok(id) => id,
        Err(rejection) => return errors::json_path_rejection("patch", rejection),
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_body_rejection("patch", rejection),
    };

    match services.inventory().patch(id, &PatchItem::from(body)).await {
        Ok(item) => (StatusCode::OK, Json(dto::ItemResponse::from(&item))).into_response(),
        Err(e) => errors::service_error_to_json(e),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    id: Result<Path<ItemId>, PathRejection>,
) -> Response {
    let Path(id) = match id {
        Ok(id) => id,
        Err(rejection) => return errors::json_path_rejection("delete", rejection),
    };

    match services.inventory().delete(id).await {
        // hyper drops the body of a 204.
        Ok(_) => (
            StatusCode::NO_CONTENT,
            Json(dto::DeletedResponse { result: "Item deleted" }),
        )
            .into_response(),
        Err(e) => errors::service_error_to_json(e),
    }
}
