use super::jwt_auth_service::JwtAuthService;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use std::sync::Arc;
use tower::Layer;

#[derive(Clone)]
pub struct JwtAuthLayer {
    validation: Arc<Validation>,
    key: Arc<DecodingKey>,
}

impl JwtAuthLayer {
    pub fn new(key: DecodingKey, algorithms: Vec<Algorithm>) -> Self {
        let mut validation = Validation::default();
        validation.algorithms = algorithms;

        Self {
            validation: Arc::new(validation),
            key: Arc::new(key),
        }
    }
}

impl<S> Layer<S> for JwtAuthLayer {
    type Service = JwtAuthService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        JwtAuthService::new(inner, self.validation.clone(), self.key.clone())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::auth::User;
    use axum::{
        body::Body,
        http::{header::AUTHORIZATION, HeaderValue, Method, Request, StatusCode},
        routing::get,
        Extension, Router,
    };
    use jsonwebtoken::{Algorithm, EncodingKey, Header};
    use serde::Serialize;
    use tower::ServiceExt;
    use uuid::Uuid;

    #[derive(Serialize)]
    struct TestClaims {
        sub: Uuid,
        exp: i64,
        email: String,
        realm_access: TestRealmAccess,
    }

    #[derive(Serialize)]
    struct TestRealmAccess {
        roles: Vec<String>,
    }

    const SECRET: &[u8] = b"some secret";

    fn encode_token(sub: Uuid, exp: i64, email: &str, roles: Vec<String>) -> String {
        let claims = TestClaims {
            sub,
            exp,
            email: email.to_string(),
            realm_access: TestRealmAccess { roles },
        };
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn missing_authorization_header() {
        test_invalid_authorization_header(None).await;
    }

    #[tokio::test]
    async fn invalid_authorization_header() {
        test_invalid_authorization_header("invalid characters ąćś").await;
    }

    #[tokio::test]
    async fn authorization_type_not_bearer() {
        test_invalid_authorization_header("NotBearer").await;
    }

    #[tokio::test]
    async fn invalid_token() {
        test_invalid_authorization_header("Bearer that's not correct JWT").await;
    }

    #[tokio::test]
    async fn expired_token() {
        let token = encode_token(Uuid::new_v4(), 12312, "someone@example.com", vec![]);
        let authorization = format!("Bearer {token}");
        test_invalid_authorization_header(authorization.as_str()).await;
    }

    #[tokio::test]
    async fn invalid_signature() {
        let claims = TestClaims {
            sub: Uuid::new_v4(),
            exp: 253402210800,
            email: "someone@example.com".to_string(),
            realm_access: TestRealmAccess { roles: vec![] },
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"wrong key"),
        )
        .unwrap();
        let authorization = format!("Bearer {token}");
        test_invalid_authorization_header(authorization.as_str()).await;
    }

    #[tokio::test]
    async fn correct_request_extension() {
        let sub = Uuid::new_v4();
        let email = "someone@example.com";
        let roles = vec![
            "first_other_application_role".to_string(),
            "second_other_application_role".to_string(),
        ];
        let token = encode_token(sub, 253402210800, email, roles.clone());

        let algorithms = vec![Algorithm::HS256];
        let key = DecodingKey::from_secret(SECRET);

        let router = Router::new()
            .route(
                "/",
                get(move |Extension(user): Extension<User>| async move {
                    if user.id != sub {
                        return StatusCode::INTERNAL_SERVER_ERROR;
                    }
                    if user.email != email {
                        return StatusCode::INTERNAL_SERVER_ERROR;
                    }
                    if user.roles != roles {
                        return StatusCode::INTERNAL_SERVER_ERROR;
                    }

                    StatusCode::OK
                }),
            )
            .route_layer(JwtAuthLayer::new(key, algorithms));

        let request = Request::builder()
            .method(Method::GET)
            .uri("/")
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK)
    }

    async fn test_invalid_authorization_header(authorization: impl Into<Option<&str>>) {
        let algorithms = vec![Algorithm::HS256];
        let key = DecodingKey::from_secret(SECRET);

        let router = Router::new()
            .route("/", get(|| async { StatusCode::OK }))
            .route_layer(JwtAuthLayer::new(key, algorithms));

        let mut request = Request::builder()
            .method(Method::GET)
            .uri("/")
            .body(Body::empty())
            .unwrap();
        if let Some(authorization) = authorization.into() {
            request
                .headers_mut()
                .insert(AUTHORIZATION, HeaderValue::try_from(authorization).unwrap());
        }

        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
