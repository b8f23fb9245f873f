use crate::domain::models::account::Account;
use crate::infrastructure::databases::surrealdb::Database;
use ::surrealdb::sql::Thing;
use chrono::Utc;

pub const USERNAME: &str = "test_account";
pub const PASSWORD: &str = "stR0ngP4ssw0rd!";

pub async fn seed_account(conn: &Database) -> Account {
    seed(conn, USERNAME, true).await
}

pub async fn seed_inactive_account(conn: &Database, username: &str) -> Account {
    seed(conn, username, false).await
}

async fn seed(conn: &Database, username: &str, is_active: bool) -> Account {
    let query = format!(
        r#"
        LET $account = (CREATE account CONTENT {{
            username: '{}',
            password: crypto::argon2::generate('{}'),
            is_active: {}
        }});
        RETURN $account[0].id;
        "#,
        username, PASSWORD, is_active
    );

    let thing: Option<Thing> = conn.query(query).await.unwrap().take(1).unwrap();

    Account {
        id: thing.unwrap().id.to_raw(),
        username: username.to_string(),
        email: None,
        password: PASSWORD.to_string(),
        is_active,
        is_staff: false,
        created_at: Utc::now(),
    }
}
