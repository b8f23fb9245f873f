use actix_web::cookie::Cookie;
use actix_web::http::{StatusCode, header};
use rstest::*;
use serde::Deserialize;
use serde_json::json;

use crate::services::account::PASSWORD_GUIDELINES;
use crate::tests::utils::seed::{PASSWORD, USERNAME, seed_account, seed_inactive_account};
use crate::tests::{Error, TestContext, context, request_cookie};

use crate::app;
use crate::domain::models::account::CreateAccount;
use crate::domain::repositories::account::AccountRepository;
use crate::domain::repositories::repository::RepositoryError;
use crate::infrastructure::repositories::account::AccountRepositoryImpl;
use std::sync::Arc;
use actix_web::test;
use actix_web::test::TestRequest;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Account {
    #[allow(dead_code)]
    id: String,
    username: String,
    email: Option<String>,
    #[allow(dead_code)]
    created_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Registered {
    message: String,
    account: Account,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccessToken {
    token: String,
    expires_at: i64,
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_success_register(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::post()
        .uri("/api/users/register")
        .set_json(json!({
            "username": "new_account",
            "email": "new_account@gmail.com",
            "password": "stR0ngP4ssw0rd!",
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::CREATED);

    let registered: Registered = test::read_body_json(res).await;

    assert_eq!(registered.message, "User registered successfully.");
    assert_eq!(registered.account.username, "new_account");
    assert_eq!(
        registered.account.email,
        Some("new_account@gmail.com".to_string())
    );
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_register_blank_email(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::post()
        .uri("/api/users/register")
        .set_json(json!({
            "username": "no_email",
            "email": "",
            "password": "stR0ngP4ssw0rd!",
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::CREATED);

    let registered: Registered = test::read_body_json(res).await;

    assert_eq!(registered.account.username, "no_email");
    assert_eq!(registered.account.email, None);
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_register_existing_username(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let account = seed_account(&context.db).await;

    let res = TestRequest::post()
        .uri("/api/users/register")
        .set_json(json!({
            "username": account.username,
            "password": account.password,
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let err: Error = test::read_body_json(res).await;

    assert_eq!(err.code, 400);
    assert_eq!(err.message, "User already exists.");
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_register_weak_password(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::post()
        .uri("/api/users/register")
        .set_json(json!({
            "username": "weak_account",
            "password": "password",
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let err: Error = test::read_body_json(res).await;

    assert_eq!(err.message, "Password is not strong enough.");
    assert_eq!(err.errors.unwrap().len(), 3);
    assert_eq!(
        err.guidelines.unwrap(),
        PASSWORD_GUIDELINES
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
    );
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_success_login(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let account = seed_account(&context.db).await;

    let res = TestRequest::post()
        .uri("/api/users/login")
        .set_json(json!({
            "username": account.username,
            "password": account.password,
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let headers = res.headers().clone();
    let header = headers.get("set-cookie").unwrap();
    let cookie = header.to_str().unwrap();

    let cookie = Cookie::parse_encoded(cookie.to_owned()).unwrap();

    let access_token: AccessToken = test::read_body_json(res).await;

    assert_eq!(cookie.name(), "Authorization");
    assert_eq!(cookie.value(), access_token.token);
    assert!(access_token.expires_at > 0);
    assert_eq!(
        cookie
            .expires()
            .unwrap()
            .datetime()
            .unwrap()
            .unix_timestamp(),
        access_token.expires_at
    );
}

#[rstest]
#[case::unknown_username("fake_account", PASSWORD)]
#[case::invalid_password(USERNAME, "p4ssw0rd")]
#[awt]
#[actix_web::test]
async fn test_invalid_login(
    #[future] context: TestContext,
    #[case] username: &str,
    #[case] password: &str,
) {
    let app = test::init_service(app::create(context.container)).await;

    seed_account(&context.db).await;

    let res = TestRequest::post()
        .uri("/api/users/login")
        .set_json(json!({
            "username": username,
            "password": password,
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let err: Error = test::read_body_json(res).await;
    assert_eq!(err.code, 401);
    assert_eq!(
        err.message,
        "The request was not successful because it lacks valid authentication credentials"
    );
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_inactive_account_login(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let account = seed_inactive_account(&context.db, "dormant").await;

    let res = TestRequest::post()
        .uri("/api/users/login")
        .set_json(json!({
            "username": account.username,
            "password": account.password,
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_logout_revokes_token(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let account = seed_account(&context.db).await;
    let cookie = request_cookie(&app, &account.username, &account.password).await;
    let token = cookie.value().to_string();

    let res = TestRequest::post()
        .uri("/api/users/logout")
        .cookie(cookie)
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::RESET_CONTENT);

    let cleared = res.headers().get(header::SET_COOKIE).unwrap();
    assert!(cleared.to_str().unwrap().starts_with("Authorization=;"));

    let res = TestRequest::get()
        .uri("/api/users/templates")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_logout_without_token(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::post()
        .uri("/api/users/logout")
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_unique_username_index_is_reported_as_duplicate(#[future] context: TestContext) {
    let repository = AccountRepositoryImpl::new(Arc::new(context.db.clone()));

    let new_account = || CreateAccount {
        username: "twice".to_string(),
        email: None,
        password: "hash".to_string(),
    };

    repository.register(new_account()).await.unwrap();

    let result = repository.register(new_account()).await;

    assert!(matches!(result, Err(RepositoryError::Duplicate("account"))));
}
