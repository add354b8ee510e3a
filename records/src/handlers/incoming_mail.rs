use actix_web::{
    delete, get, patch, post,
    web::{self, Json},
};
use common::{
    entities::incoming_mail::{IncomingMail, PublicIncomingMail},
    error,
    repository::RepositoryObject,
};

use crate::service::{
    incoming_mail::{CreateIncomingMail, IncomingMailChange, IncomingMailService},
    DeleteResponse,
};

#[post("/api/incoming_mail")]
pub async fn post_incoming_mail(
    repo: web::Data<RepositoryObject<IncomingMail>>,
    Json(data): web::Json<CreateIncomingMail>,
) -> error::Result<Json<PublicIncomingMail>> {
    Ok(Json(
        IncomingMailService::new(repo.get_ref().clone())
            .create(data)
            .await?,
    ))
}

#[get("/api/incoming_mail")]
pub async fn get_incoming_mail(
    repo: web::Data<RepositoryObject<IncomingMail>>,
) -> error::Result<Json<Vec<PublicIncomingMail>>> {
    Ok(Json(
        IncomingMailService::new(repo.get_ref().clone())
            .list()
            .await?,
    ))
}

#[patch("/api/incoming_mail")]
pub async fn patch_incoming_mail(
    repo: web::Data<RepositoryObject<IncomingMail>>,
    Json(data): web::Json<IncomingMailChange>,
) -> error::Result<Json<PublicIncomingMail>> {
    Ok(Json(
        IncomingMailService::new(repo.get_ref().clone())
            .update(data)
            .await?,
    ))
}

#[delete("/api/incoming_mail/{id}")]
pub async fn delete_incoming_mail(
    repo: web::Data<RepositoryObject<IncomingMail>>,
    id: web::Path<i64>,
) -> error::Result<Json<DeleteResponse>> {
    Ok(Json(DeleteResponse {
        success: IncomingMailService::new(repo.get_ref().clone())
            .delete(id.into_inner())
            .await?,
    }))
}

#[cfg(test)]
mod test {
    use actix_web::test::{self, init_service};
    use chrono::NaiveDate;
    use common::entities::incoming_mail::PublicIncomingMail;

    use crate::{create_test_app, service::incoming_mail::CreateIncomingMail};

    fn test_mail() -> CreateIncomingMail {
        CreateIncomingMail {
            sender: "District Office".to_string(),
            letter_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            letter_number: "005/DO/2024".to_string(),
            subject: "Coordination meeting".to_string(),
            attachment_label: Some("X".to_string()),
        }
    }

    #[actix_web::test]
    async fn test_post_incoming_mail_round_trips_letter_date() {
        let mut app = init_service(create_test_app()).await;

        let req = test::TestRequest::post()
            .uri("/api/incoming_mail")
            .set_json(&test_mail())
            .to_request();
        let resp = test::call_service(&mut app, req).await;
        assert!(resp.status().is_success());

        let created: PublicIncomingMail = test::read_body_json(resp).await;
        assert!(created.id > 0);
        assert_eq!(created.sender, "District Office");
        assert_eq!(
            created.letter_date,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );

        // reading back yields the same calendar date, no timezone drift
        let req = test::TestRequest::get()
            .uri("/api/incoming_mail")
            .to_request();
        let resp = test::call_service(&mut app, req).await;
        let mails: Vec<PublicIncomingMail> = test::read_body_json(resp).await;
        assert_eq!(
            mails[0].letter_date,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }

    #[actix_web::test]
    async fn test_post_incoming_mail_rejects_invalid_date() {
        let mut app = init_service(create_test_app()).await;

        let req = test::TestRequest::post()
            .uri("/api/incoming_mail")
            .set_json(&serde_json::json!({
                "sender": "District Office",
                "letter_date": "not-a-date",
                "letter_number": "005/DO/2024",
                "subject": "Coordination meeting",
                "attachment_label": null,
            }))
            .to_request();
        let resp = test::call_service(&mut app, req).await;
        assert!(resp.status().is_client_error());
    }

    #[actix_web::test]
    async fn test_post_incoming_mail_rejects_empty_sender() {
        let mut app = init_service(create_test_app()).await;

        let mut input = test_mail();
        input.sender = String::new();

        let req = test::TestRequest::post()
            .uri("/api/incoming_mail")
            .set_json(&input)
            .to_request();
        let resp = test::call_service(&mut app, req).await;
        assert_eq!(resp.status().as_u16(), 400);
    }

    #[actix_web::test]
    async fn test_patch_incoming_mail_preserves_omitted_attachment() {
        let mut app = init_service(create_test_app()).await;

        let req = test::TestRequest::post()
            .uri("/api/incoming_mail")
            .set_json(&test_mail())
            .to_request();
        let created: PublicIncomingMail =
            test::read_body_json(test::call_service(&mut app, req).await).await;

        // unrelated field only: attachment_label must survive untouched
        let req = test::TestRequest::patch()
            .uri("/api/incoming_mail")
            .set_json(&serde_json::json!({"id": created.id, "subject": "Rescheduled meeting"}))
            .to_request();
        let resp = test::call_service(&mut app, req).await;
        assert!(resp.status().is_success());

        let updated: PublicIncomingMail = test::read_body_json(resp).await;
        assert_eq!(updated.subject, "Rescheduled meeting");
        assert_eq!(updated.attachment_label.as_deref(), Some("X"));
        assert!(updated.updated_at > created.updated_at);

        // explicit null clears it
        let req = test::TestRequest::patch()
            .uri("/api/incoming_mail")
            .set_json(&serde_json::json!({"id": created.id, "attachment_label": null}))
            .to_request();
        let updated: PublicIncomingMail =
            test::read_body_json(test::call_service(&mut app, req).await).await;
        assert_eq!(updated.attachment_label, None);
    }

    #[actix_web::test]
    async fn test_patch_incoming_mail_not_found_leaves_store_unchanged() {
        let mut app = init_service(create_test_app()).await;

        let req = test::TestRequest::post()
            .uri("/api/incoming_mail")
            .set_json(&test_mail())
            .to_request();
        let resp = test::call_service(&mut app, req).await;
        assert!(resp.status().is_success());

        let req = test::TestRequest::patch()
            .uri("/api/incoming_mail")
            .set_json(&serde_json::json!({"id": 999, "subject": "ghost"}))
            .to_request();
        let resp = test::call_service(&mut app, req).await;
        assert_eq!(resp.status().as_u16(), 404);

        let req = test::TestRequest::get()
            .uri("/api/incoming_mail")
            .to_request();
        let resp = test::call_service(&mut app, req).await;
        let mails: Vec<PublicIncomingMail> = test::read_body_json(resp).await;
        assert_eq!(mails.len(), 1);
        assert_eq!(mails[0].subject, "Coordination meeting");
    }

    #[actix_web::test]
    async fn test_delete_incoming_mail() {
        let mut app = init_service(create_test_app()).await;

        let req = test::TestRequest::post()
            .uri("/api/incoming_mail")
            .set_json(&test_mail())
            .to_request();
        let created: PublicIncomingMail =
            test::read_body_json(test::call_service(&mut app, req).await).await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/incoming_mail/{}", created.id))
            .to_request();
        let body: serde_json::Value =
            test::read_body_json(test::call_service(&mut app, req).await).await;
        assert_eq!(body["success"], true);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/incoming_mail/{}", created.id))
            .to_request();
        let body: serde_json::Value =
            test::read_body_json(test::call_service(&mut app, req).await).await;
        assert_eq!(body["success"], false);
    }
}
