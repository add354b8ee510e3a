pub mod handlers;
pub mod service;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::ServiceFactory;
use actix_web::dev::ServiceRequest;
use actix_web::dev::ServiceResponse;
use actix_web::middleware;
use actix_web::web;
use actix_web::App;

use common::auth::Credentials;
use common::entities::incoming_mail::IncomingMail;
use common::entities::inventory::InventoryItem;
use common::entities::outgoing_mail::OutgoingMail;
use common::repository::RepositoryObject;

pub use crate::handlers::auth::*;
pub use crate::handlers::healthcheck::*;
pub use crate::handlers::incoming_mail::*;
pub use crate::handlers::inventory::*;
pub use crate::handlers::outgoing_mail::*;

pub fn create_app(
    inventory_repo: RepositoryObject<InventoryItem>,
    incoming_mail_repo: RepositoryObject<IncomingMail>,
    outgoing_mail_repo: RepositoryObject<OutgoingMail>,
    credentials: Credentials,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = actix_web::Error,
    >,
> {
    let cors = Cors::permissive();
    let app = App::new()
        .wrap(cors)
        .wrap(middleware::Logger::default())
        .app_data(web::Data::new(inventory_repo))
        .app_data(web::Data::new(incoming_mail_repo))
        .app_data(web::Data::new(outgoing_mail_repo))
        .app_data(web::Data::new(credentials))
        .service(healthcheck)
        .service(login)
        .service(post_inventory)
        .service(get_inventory)
        .service(patch_inventory)
        .service(delete_inventory)
        .service(post_incoming_mail)
        .service(get_incoming_mail)
        .service(patch_incoming_mail)
        .service(delete_incoming_mail)
        .service(post_outgoing_mail)
        .service(get_outgoing_mail)
        .service(patch_outgoing_mail)
        .service(delete_outgoing_mail);
    app
}

#[cfg(test)]
pub fn create_test_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = actix_web::Error,
    >,
> {
    use std::sync::Arc;

    use common::repository::test_repository::TestRepository;

    create_app(
        Arc::new(TestRepository::new()),
        Arc::new(TestRepository::new()),
        Arc::new(TestRepository::new()),
        Credentials {
            email: "operator@example.com".to_string(),
            password: "operator-pass".to_string(),
        },
    )
}
