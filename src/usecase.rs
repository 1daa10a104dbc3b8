use crate::models::user::User;
use crate::store::{NewUser, UserStore, UserStoreError};
use std::sync::Arc;

/// Orchestration layer between the routes and the [`UserStore`].
///
/// Deliberately a pass-through: persistence rules (uniqueness, id and
/// timestamp assignment) live in the store, HTTP mapping lives in the
/// routes. Held as `web::Data<UserService>` so handlers share one `Arc`.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, input: NewUser) -> Result<User, UserStoreError> {
        self.store.create(input).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError> {
        self.store.find_by_email(email).await
    }
}
