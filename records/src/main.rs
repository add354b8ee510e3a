use std::{env, sync::Arc};

use actix_web::HttpServer;
use common::{
    auth::Credentials,
    entities::{incoming_mail::IncomingMail, inventory::InventoryItem, outgoing_mail::OutgoingMail},
    repository::{mongo_repository::MongoRepository, RepositoryObject},
};
use records::create_app;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let mongo_uri = env::var("MONGOURI").unwrap();
    let port = env::var("SERVER_PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(2022);

    let credentials = Credentials::from_env();

    let inventory_repo: RepositoryObject<InventoryItem> =
        Arc::new(MongoRepository::new(&mongo_uri).await);
    let incoming_mail_repo: RepositoryObject<IncomingMail> =
        Arc::new(MongoRepository::new(&mongo_uri).await);
    let outgoing_mail_repo: RepositoryObject<OutgoingMail> =
        Arc::new(MongoRepository::new(&mongo_uri).await);

    log::info!("archive server listening at port {}", port);

    HttpServer::new(move || {
        create_app(
            inventory_repo.clone(),
            incoming_mail_repo.clone(),
            outgoing_mail_repo.clone(),
            credentials.clone(),
        )
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
