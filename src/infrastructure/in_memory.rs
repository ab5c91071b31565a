use crate::domain::ports::SessionStore;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A session flag that lives only as long as the process.
///
/// Clones share the same flag.
#[derive(Default, Clone)]
pub struct InMemorySessionStore {
    active: Arc<RwLock<bool>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn is_active(&self) -> Result<bool> {
        Ok(*self.active.read().await)
    }

    async fn activate(&self) -> Result<()> {
        *self.active.write().await = true;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.active.write().await = false;
        Ok(())
    }
}
