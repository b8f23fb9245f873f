use crate::config::SurrealDbConfig;

use surrealdb::{
    Error, Surreal,
    engine::any::{self, Any},
    opt::auth::Root,
};

pub type Database = Surreal<Any>;

pub async fn connect(db_config: &SurrealDbConfig) -> Result<Database, Error> {
    let db = any::connect(format!("ws://{}:{}", db_config.host, db_config.port)).await?;

    db.signin(Root {
        username: db_config.username.as_str(),
        password: db_config.password.as_str(),
    })
    .await?;

    db.use_ns(db_config.namespace.as_str())
        .use_db(db_config.database.as_str())
        .await?;

    Ok(db)
}
