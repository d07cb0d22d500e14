//! Page surface: HTML forms, rendered pages, and redirects back to `/`.
//!
//! Differences from the JSON surface are intentional: edits overwrite both
//! fields, and deleting a missing id still redirects.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};

use stockroom_core::ItemId;
use stockroom_infra::ServiceError;
use stockroom_inventory::{AssignSupplier, CreateItem, ReplaceItem};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(index).post(create))
        .route("/delete/:id", post(delete))
        .route("/edit/:id", get(edit_form).post(edit))
        .route("/add_supplier/:id", get(supplier_form).post(add_supplier))
}

fn home() -> Redirect {
    Redirect::to("/")
}

pub async fn index(Extension(services): Extension<Arc<AppServices>>) -> Response {
    tracing::info!("accessed home page");
    match services.inventory().list().await {
        Ok(items) => errors::page(services.views().index(&items, None)),
        Err(e) => errors::service_error_to_page(&e, |msg| services.views().index(&[], Some(msg))),
    }
}

/// On failure the page is re-rendered with the error and an empty item list.
pub async fn create(
    Extension(services): Extension<Arc<AppServices>>,
    Form(form): Form<dto::CreateItemForm>,
) -> Response {
    match services.inventory().create(&CreateItem::from(form)).await {
        Ok(_) => home().into_response(),
        Err(e) => errors::service_error_to_page(&e, |msg| services.views().index(&[], Some(msg))),
    }
}

/// Missing ids are ignored; the caller is always sent home unless the store fails.
pub async fn delete(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<ItemId>,
) -> Response {
    match services.inventory().delete_if_exists(id).await {
        Ok(_) => home().into_response(),
        Err(e) => errors::service_error_to_text(e),
    }
}

pub async fn edit_form(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<ItemId>,
) -> Response {
    match services.inventory().get(id).await {
        Ok(item) => errors::page(services.views().edit(&item)),
        Err(e) => errors::service_error_to_text(e),
    }
}

pub async fn edit(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<ItemId>,
    Form(form): Form<dto::EditItemForm>,
) -> Response {
    redirect_or_text(services.inventory().replace(id, &ReplaceItem::from(form)).await)
}

pub async fn supplier_form(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<ItemId>,
) -> Response {
    match services.inventory().get(id).await {
        Ok(item) => errors::page(services.views().add_supplier(&item)),
        Err(e) => errors::service_error_to_text(e),
    }
}

pub async fn add_supplier(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<ItemId>,
    Form(form): Form<dto::SupplierForm>,
) -> Response {
    redirect_or_text(services.inventory().assign_supplier(id, &AssignSupplier::from(form)).await)
}

fn redirect_or_text<T>(result: Result<T, ServiceError>) -> Response {
    match result {
        Ok(_) => home().into_response(),
        Err(e) => errors::service_error_to_text(e),
    }
}
