use actix_web::{
    post,
    web::{self, Json},
};
use common::{
    auth::{check_login, Credentials, Login, LoginResponse},
    error,
};

#[post("/api/auth/login")]
pub async fn login(
    credentials: web::Data<Credentials>,
    Json(data): web::Json<Login>,
) -> error::Result<Json<LoginResponse>> {
    Ok(Json(check_login(&credentials, &data)))
}

#[cfg(test)]
mod test {
    use actix_web::test::{self, init_service};
    use common::auth::Login;

    use crate::create_test_app;

    #[actix_web::test]
    async fn test_login_with_configured_pair() {
        let mut app = init_service(create_test_app()).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(&Login {
                email: "operator@example.com".to_string(),
                password: "operator-pass".to_string(),
            })
            .to_request();
        let resp = test::call_service(&mut app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["user"]["email"], "operator@example.com");
    }

    #[actix_web::test]
    async fn test_login_with_wrong_password() {
        let mut app = init_service(create_test_app()).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(&Login {
                email: "operator@example.com".to_string(),
                password: "guess".to_string(),
            })
            .to_request();
        let resp = test::call_service(&mut app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().is_some());
        // user must be absent entirely, not null
        assert!(body.get("user").is_none());
    }
}
