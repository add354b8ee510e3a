use actix_web::{
    delete, get, patch, post,
    web::{self, Json},
};
use common::{
    entities::inventory::{InventoryItem, PublicInventoryItem},
    error,
    repository::RepositoryObject,
};

use crate::service::{
    inventory::{CreateInventory, InventoryChange, InventoryService},
    DeleteResponse,
};

#[post("/api/inventory")]
pub async fn post_inventory(
    repo: web::Data<RepositoryObject<InventoryItem>>,
    Json(data): web::Json<CreateInventory>,
) -> error::Result<Json<PublicInventoryItem>> {
    Ok(Json(
        InventoryService::new(repo.get_ref().clone())
            .create(data)
            .await?,
    ))
}

#[get("/api/inventory")]
pub async fn get_inventory(
    repo: web::Data<RepositoryObject<InventoryItem>>,
) -> error::Result<Json<Vec<PublicInventoryItem>>> {
    Ok(Json(
        InventoryService::new(repo.get_ref().clone()).list().await?,
    ))
}

#[patch("/api/inventory")]
pub async fn patch_inventory(
    repo: web::Data<RepositoryObject<InventoryItem>>,
    Json(data): web::Json<InventoryChange>,
) -> error::Result<Json<PublicInventoryItem>> {
    Ok(Json(
        InventoryService::new(repo.get_ref().clone())
            .update(data)
            .await?,
    ))
}

#[delete("/api/inventory/{id}")]
pub async fn delete_inventory(
    repo: web::Data<RepositoryObject<InventoryItem>>,
    id: web::Path<i64>,
) -> error::Result<Json<DeleteResponse>> {
    Ok(Json(DeleteResponse {
        success: InventoryService::new(repo.get_ref().clone())
            .delete(id.into_inner())
            .await?,
    }))
}
