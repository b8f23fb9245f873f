mod account;

pub mod utils;

use ::surrealdb::engine::any;

use crate::infrastructure::generator::mock::FakeGenerator;
use crate::infrastructure::mailer::mock::RecordingMailer;
use crate::tests::utils::crypto::generate_keypair;
use std::sync::Arc;

use serde::Deserialize;
use surrealdb_migrations::MigrationRunner;

use crate::MIGRATIONS_DIR;
use crate::infrastructure::databases::surrealdb::Database;
use crate::{config::AppConfig, container::Container};

use actix_http::Request;
use actix_web::cookie::Cookie;
use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    test::TestRequest,
};

use serde_json::json;

use rstest::*;

pub struct TestContext {
    pub db: Database,
    pub container: Arc<Container>,
    pub mailer: Arc<RecordingMailer>,
    pub generator: Arc<FakeGenerator>,
}

async fn build_context(generator: FakeGenerator) -> TestContext {
    let db = any::connect("mem://").await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();

    let _ = MigrationRunner::new(&db)
        .load_files(&MIGRATIONS_DIR)
        .up()
        .await;

    let mut config = AppConfig::default();
    config.dispatch.delay_ms = 0;

    let mailer = Arc::new(RecordingMailer::default());
    let generator = Arc::new(generator);

    let container = Arc::new(Container::new(
        db.clone(),
        generate_keypair(),
        mailer.clone(),
        generator.clone(),
        &config,
    ));

    TestContext {
        db,
        container,
        mailer,
        generator,
    }
}

#[fixture]
async fn context() -> TestContext {
    build_context(FakeGenerator::echo()).await
}

#[fixture]
async fn failing_generator_context() -> TestContext {
    build_context(FakeGenerator::failing()).await
}

async fn request_cookie<'a, S, B>(app: &'a S, username: &'a str, password: &'a str) -> Cookie<'a>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = TestRequest::post()
        .uri("/api/users/login")
        .set_json(json!({
            "username": username,
            "password": password,
        }))
        .send_request(&app)
        .await;

    let headers = res.headers().clone();
    let header = headers.get("set-cookie").unwrap();
    let cookie = header.to_str().unwrap();

    Cookie::parse_encoded(cookie.to_owned()).unwrap()
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct Error {
    code: u16,
    message: String,
    errors: Option<Vec<String>>,
    guidelines: Option<Vec<String>>,
}
