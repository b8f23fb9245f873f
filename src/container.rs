use std::sync::Arc;

use crate::config::AppConfig;

use crate::domain::repositories::{
    account::AccountRepository, delivery::DeliveryRepository, template::TemplateRepository,
};
use crate::domain::services::{
    account::AccountService, dispatch::DispatchQueue, email::EmailService,
    generator::TextGenerator, jsonwebtoken::JsonWebTokenService, mailer::Mailer,
    suggestion::SuggestionService, template::TemplateService,
};

use crate::services::account::AccountServiceImpl;
use crate::services::email::EmailServiceImpl;
use crate::services::jsonwebtoken::{JsonWebTokenServiceImpl, KeyPair};
use crate::services::recipient::RecipientPolicy;
use crate::services::suggestion::SuggestionServiceImpl;
use crate::services::template::TemplateServiceImpl;

use crate::infrastructure::databases::surrealdb::Database;
use crate::infrastructure::queue::worker::ChannelDispatchQueue;
use crate::infrastructure::repositories::{
    account::AccountRepositoryImpl, delivery::DeliveryRepositoryImpl,
    template::TemplateRepositoryImpl,
};

pub struct Container {
    pub account_service: Arc<dyn AccountService>,
    pub jsonwebtoken_service: Arc<dyn JsonWebTokenService>,
    pub template_service: Arc<dyn TemplateService>,
    pub email_service: Arc<dyn EmailService>,
    pub suggestion_service: Arc<dyn SuggestionService>,
}

impl Container {
    /// Must be called inside a tokio runtime: the dispatch workers are spawned here.
    pub fn new(
        conn: Database,
        keys: KeyPair,
        mailer: Arc<dyn Mailer>,
        generator: Arc<dyn TextGenerator>,
        config: &AppConfig,
    ) -> Self {
        let db = Arc::new(conn);

        let queue: Arc<dyn DispatchQueue> =
            Arc::new(ChannelDispatchQueue::start(mailer, &config.dispatch));

        Container {
            account_service: account_service(db.clone()),
            jsonwebtoken_service: jsonwebtoken_service(keys, config.jsonwebtoken.lifetime_minutes),
            template_service: template_service(db.clone()),
            email_service: email_service(db, queue, &config.recipients.allowed_domains),
            suggestion_service: Arc::new(SuggestionServiceImpl::new(generator)),
        }
    }
}

fn account_service(db: Arc<Database>) -> Arc<dyn AccountService> {
    let account_repository: Arc<dyn AccountRepository> =
        Arc::new(AccountRepositoryImpl::new(db.clone()));

    Arc::new(AccountServiceImpl::new(account_repository))
}

fn jsonwebtoken_service(keys: KeyPair, lifetime_minutes: i64) -> Arc<dyn JsonWebTokenService> {
    Arc::new(JsonWebTokenServiceImpl::new(keys, lifetime_minutes))
}

fn template_service(db: Arc<Database>) -> Arc<dyn TemplateService> {
    let template_repository: Arc<dyn TemplateRepository> =
        Arc::new(TemplateRepositoryImpl::new(db));

    Arc::new(TemplateServiceImpl::new(template_repository))
}

fn email_service(
    db: Arc<Database>,
    queue: Arc<dyn DispatchQueue>,
    allowed_domains: &[String],
) -> Arc<dyn EmailService> {
    let delivery_repository: Arc<dyn DeliveryRepository> =
        Arc::new(DeliveryRepositoryImpl::new(db));

    Arc::new(EmailServiceImpl::new(
        RecipientPolicy::new(allowed_domains),
        queue,
        delivery_repository,
    ))
}
