use actix_web::http::{StatusCode, header};
use actix_web::{App, HttpResponse, Responder, get, test, web};
use chrono::Utc;
use healio::domain::auth::AuthenticatedUser;
use healio::middleware::TokenKeys;

const SECRET: &str = "middleware-test-secret";

#[get("/whoami")]
async fn whoami(user: AuthenticatedUser) -> impl Responder {
    HttpResponse::Ok().body(user.email)
}

fn claims(exp: i64) -> AuthenticatedUser {
    AuthenticatedUser {
        sub: "1".into(),
        email: "desk@clinic.org".into(),
        name: None,
        role: "staff".into(),
        exp,
    }
}

#[actix_web::test]
async fn valid_token_reaches_handler() {
    let keys = TokenKeys::new(SECRET, 1);
    let token = keys
        .encode(&claims((Utc::now() + chrono::Duration::hours(1)).timestamp()))
        .unwrap();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(keys))
            .service(whoami),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "desk@clinic.org");
}

#[actix_web::test]
async fn missing_and_non_bearer_headers_are_unauthorized() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(TokenKeys::new(SECRET, 1)))
            .service(whoami),
    )
    .await;

    let req = test::TestRequest::get().uri("/whoami").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header((header::AUTHORIZATION, "Basic ZGVzazpzZWNyZXQ="))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn expired_or_foreign_tokens_are_forbidden() {
    let keys = TokenKeys::new(SECRET, 1);
    let expired = keys
        .encode(&claims((Utc::now() - chrono::Duration::hours(2)).timestamp()))
        .unwrap();
    let foreign = TokenKeys::new("some-other-secret", 1)
        .encode(&claims((Utc::now() + chrono::Duration::hours(1)).timestamp()))
        .unwrap();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(keys))
            .service(whoami),
    )
    .await;

    for token in [expired, foreign] {
        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}

#[actix_web::test]
async fn unregistered_keys_are_a_server_error() {
    let app = test::init_service(App::new().service(whoami)).await;

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header((header::AUTHORIZATION, "Bearer anything"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[actix_web::test]
async fn verify_round_trips_claims() {
    let keys = TokenKeys::new(SECRET, 1);
    let exp = (Utc::now() + chrono::Duration::minutes(5)).timestamp();
    let token = keys.encode(&claims(exp)).unwrap();

    let user = keys.verify(&token).unwrap();
    assert_eq!(user, claims(exp));
    assert_eq!(user.account_id(), Some(1));
}
