use crate::models::{User, UserPayload};
use crate::utils::AppError;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory user store.
///
/// Reads (`find_all`, `find_by_id`, `count`) share the lock; writes (`insert`,
/// `update`, `delete`) take it exclusively. Clones share the same map.
#[derive(Clone, Default)]
pub struct UserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every record. Order is unspecified.
    pub async fn find_all(&self) -> Vec<User> {
        let users = self.users.read().await;
        users.values().cloned().collect()
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<User, AppError> {
        let users = self.users.read().await;
        users.get(&id).cloned().ok_or(AppError::NotFound)
    }

    /// Stores the candidate under a freshly generated identifier.
    pub async fn insert(&self, candidate: UserPayload) -> User {
        let mut users = self.users.write().await;

        // never overwrite an existing record
        let mut id = Uuid::new_v4();
        while users.contains_key(&id) {
            id = Uuid::new_v4();
        }

        let user = User::from_payload(id, candidate);
        users.insert(id, user.clone());
        user
    }

    pub async fn update(&self, id: Uuid, candidate: UserPayload) -> Result<User, AppError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&id).ok_or(AppError::NotFound)?;
        user.apply(candidate);
        Ok(user.clone())
    }

    /// Removes the record and returns its last value.
    pub async fn delete(&self, id: Uuid) -> Result<User, AppError> {
        let mut users = self.users.write().await;
        users.remove(&id).ok_or(AppError::NotFound)
    }

    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}
