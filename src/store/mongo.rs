use crate::models::user::User;
use crate::store::{NewUser, UserStore, UserStoreError};
use async_trait::async_trait;
use chrono::Utc;
use mongodb::{Client, Collection, bson::doc};
use std::env;
use uuid::Uuid;

/// # MongoDB User Store
///
/// Owns the durable user records. Assigns `id` (UUID v4) and `created_at`
/// (UTC, RFC 3339) on insert and enforces email uniqueness with a lookup
/// before the insert.
///
/// ## Configuration
/// - `DB_NAME`: database name (default `user_registry`)
/// - `DB_USERS_COLLECTION`: collection name (default `users`)
#[derive(Clone)]
pub struct MongoUserStore {
    collection: Collection<User>,
}

impl MongoUserStore {
    pub fn new(client: &Client) -> Self {
        let db_name = env::var("DB_NAME").unwrap_or_else(|_| "user_registry".to_string());
        let collection_name =
            env::var("DB_USERS_COLLECTION").unwrap_or_else(|_| "users".to_string());

        Self {
            collection: client.database(&db_name).collection(&collection_name),
        }
    }

    /// Builds the record the store persists; `id` and `created_at` are
    /// assigned here so callers can never supply them.
    fn new_record(input: NewUser) -> User {
        User {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn create(&self, input: NewUser) -> Result<User, UserStoreError> {
        let existing = self
            .collection
            .find_one(doc! { "email": &input.email })
            .await
            .map_err(backend)?;

        if existing.is_some() {
            return Err(UserStoreError::DuplicateEmail);
        }

        let user = Self::new_record(input);
        self.collection.insert_one(&user).await.map_err(backend)?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(backend)
    }
}

fn backend(err: mongodb::error::Error) -> UserStoreError {
    UserStoreError::Backend(err.to_string())
}
