use actix_web::{
    delete, get, patch, post,
    web::{self, Json},
};
use common::{
    entities::outgoing_mail::{OutgoingMail, PublicOutgoingMail},
    error,
    repository::RepositoryObject,
};

use crate::service::{
    outgoing_mail::{CreateOutgoingMail, OutgoingMailChange, OutgoingMailService},
    DeleteResponse,
};

#[post("/api/outgoing_mail")]
pub async fn post_outgoing_mail(
    repo: web::Data<RepositoryObject<OutgoingMail>>,
    Json(data): web::Json<CreateOutgoingMail>,
) -> error::Result<Json<PublicOutgoingMail>> {
    Ok(Json(
        OutgoingMailService::new(repo.get_ref().clone())
            .create(data)
            .await?,
    ))
}

#[get("/api/outgoing_mail")]
pub async fn get_outgoing_mail(
    repo: web::Data<RepositoryObject<OutgoingMail>>,
) -> error::Result<Json<Vec<PublicOutgoingMail>>> {
    Ok(Json(
        OutgoingMailService::new(repo.get_ref().clone())
            .list()
            .await?,
    ))
}

#[patch("/api/outgoing_mail")]
pub async fn patch_outgoing_mail(
    repo: web::Data<RepositoryObject<OutgoingMail>>,
    Json(data): web::Json<OutgoingMailChange>,
) -> error::Result<Json<PublicOutgoingMail>> {
    Ok(Json(
        OutgoingMailService::new(repo.get_ref().clone())
            .update(data)
            .await?,
    ))
}

#[delete("/api/outgoing_mail/{id}")]
pub async fn delete_outgoing_mail(
    repo: web::Data<RepositoryObject<OutgoingMail>>,
    id: web::Path<i64>,
) -> error::Result<Json<DeleteResponse>> {
    Ok(Json(DeleteResponse {
        success: OutgoingMailService::new(repo.get_ref().clone())
            .delete(id.into_inner())
            .await?,
    }))
}
