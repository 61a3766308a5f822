/*
 * Responsibility
 * - users テーブルからの lookup-by-id (PrincipalResolver の外部 collaborator)
 * - 行の形 (UserRow) を Principal に変換して返す
 */
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;
use crate::services::auth::principal::{Principal, UserLookup};

#[derive(Debug, FromRow)]
pub struct UserRow {
    #[sqlx(rename = "userId")]
    pub id: Uuid,
    #[sqlx(rename = "userName")]
    pub user_name: String,
    #[sqlx(rename = "imageUrl")]
    pub image_url: Option<String>,
}

impl From<UserRow> for Principal {
    fn from(row: UserRow) -> Self {
        Principal {
            id: row.id.to_string(),
            user_name: row.user_name,
            image_url: row.image_url,
        }
    }
}

pub async fn get(db: &PgPool, user_id: Uuid) -> Result<Option<UserRow>, RepoError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT "userId", "userName", "imageUrl"
        FROM users
        WHERE "userId" = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

/// Postgres-backed user lookup. Subjects are user UUIDs.
#[derive(Clone, Debug)]
pub struct PgUserRepo {
    db: PgPool,
}

impl PgUserRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserLookup for PgUserRepo {
    async fn find_by_id(&self, id: &str) -> Result<Option<Principal>, RepoError> {
        // A subject that is not a UUID cannot match any row.
        let Ok(user_id) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        Ok(get(&self.db, user_id).await?.map(Principal::from))
    }
}
