use crate::error::Result;
use async_trait::async_trait;

/// Persistence for the single "session is active" flag.
///
/// The flag has no expiry: once set it stays set until `clear` is called.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn is_active(&self) -> Result<bool>;
    async fn activate(&self) -> Result<()>;
    async fn clear(&self) -> Result<()>;
}

pub type SessionStoreBox = Box<dyn SessionStore>;
