//! End-to-end tests for the login flow and the protected endpoint

#[cfg(test)]
mod tests {
    use actix_web::{http::header, test};
    use serde_json::json;
    use tg_api::app::{build_services, create_app};
    use tg_shared::{AuthConfig, CredentialsConfig, Environment, JwtConfig};

    fn auth_config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt: JwtConfig::new(
                secret,
                "https://auth.tokengate.test",
                "https://api.tokengate.test",
            ),
            credentials: CredentialsConfig {
                username: "admin".to_string(),
                password: "password".to_string(),
            },
        }
    }

    const SECRET: &str = "login-test-secret-0123456789abcdefgh";

    macro_rules! init_app {
        ($secret:expr, $environment:expr) => {{
            let services = build_services(&auth_config($secret)).unwrap();
            test::init_service(create_app(services.state, services.validator, $environment))
                .await
        }};
    }

    #[actix_web::test]
    async fn test_home_and_health() {
        let app = init_app!(SECRET, Environment::Development);

        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "A simple JWT Token application!");

        let req = test::TestRequest::get().uri("/health").to_request();
        let health: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(health["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_login_then_access_secure_endpoint() {
        let app = init_app!(SECRET, Environment::Development);

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"username": "admin", "password": "password"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let login: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(login["token_type"], "Bearer");
        assert_eq!(login["expires_in"], 1800);
        let token = login["token"].as_str().unwrap().to_string();
        assert_eq!(token.split('.').count(), 3);

        let req = test::TestRequest::get()
            .uri("/api/test/secure")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "You accessed a protected API endpoint!");
        assert_eq!(body["subject"], "admin");
    }

    #[actix_web::test]
    async fn test_login_with_wrong_password() {
        let app = init_app!(SECRET, Environment::Development);

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"username": "admin", "password": "wrong"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "UNAUTHORIZED");
        assert_eq!(body["message"], "Access denied");
        assert!(body.get("token").is_none());
    }

    #[actix_web::test]
    async fn test_unknown_user_and_wrong_password_look_the_same() {
        let app = init_app!(SECRET, Environment::Development);

        let mut messages = Vec::new();
        for (username, password) in [("admin", "wrong"), ("nobody", "password")] {
            let req = test::TestRequest::post()
                .uri("/api/auth/login")
                .set_json(json!({"username": username, "password": password}))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 401);
            let body: serde_json::Value = test::read_body_json(resp).await;
            messages.push((body["error"].clone(), body["message"].clone()));
        }
        assert_eq!(messages[0], messages[1]);
    }

    #[actix_web::test]
    async fn test_login_rejects_bad_input() {
        let app = init_app!(SECRET, Environment::Development);

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"username": "", "password": "password"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "BAD_REQUEST");
    }

    #[actix_web::test]
    async fn test_secure_endpoint_requires_token() {
        let app = init_app!(SECRET, Environment::Development);

        let req = test::TestRequest::get().uri("/api/test/secure").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
        assert_eq!(
            resp.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
        // Rejections still carry the security headers
        assert_eq!(
            resp.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
            "nosniff"
        );
    }

    #[actix_web::test]
    async fn test_token_from_another_deployment_is_rejected() {
        let other = init_app!("another-deployment-secret-0123456789ab", Environment::Development);
        let app = init_app!(SECRET, Environment::Development);

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"username": "admin", "password": "password"}))
            .to_request();
        let login: serde_json::Value = test::call_and_read_body_json(&other, req).await;
        let token = login["token"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri("/api/test/secure")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_unknown_path_is_json_404() {
        let app = init_app!(SECRET, Environment::Development);

        let req = test::TestRequest::get().uri("/does/not/exist").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_hsts_only_outside_development() {
        let dev = init_app!(SECRET, Environment::Development);
        let resp = test::call_service(&dev, test::TestRequest::get().uri("/").to_request()).await;
        assert!(resp.headers().get(header::STRICT_TRANSPORT_SECURITY).is_none());

        let prod = init_app!(SECRET, Environment::Production);
        let resp = test::call_service(&prod, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(
            resp.headers().get(header::STRICT_TRANSPORT_SECURITY).unwrap(),
            "max-age=31536000; includeSubDomains"
        );
    }
}
