//! User management service

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, User, UserQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<User> {
        self.repository.users.get_by_id(id).await
    }

    pub async fn search_users(&self, query: &UserQuery) -> AppResult<(Vec<User>, i64)> {
        self.repository.users.search(query).await
    }

    /// Create a user; emails are unique case-insensitively
    pub async fn create_user(&self, data: &CreateUser) -> AppResult<User> {
        if self.repository.users.email_exists(&data.email).await? {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }
        let user = self.repository.users.create(data).await?;
        tracing::info!("User {} created ({})", user.id, user.display_name());
        Ok(user)
    }
}
