use crate::domain::ports::SessionStoreBox;
use crate::error::{LoanError, Result};
use tracing::{info, warn};

pub const DEMO_USERNAME: &str = "admin";
pub const DEMO_PASSWORD: &str = "admin";

/// Demo sign-in against a fixed credential pair.
///
/// This is a gate, not security: the credentials are public and the session
/// flag never expires.
pub struct Authenticator {
    sessions: SessionStoreBox,
}

impl Authenticator {
    pub fn new(sessions: SessionStoreBox) -> Self {
        Self { sessions }
    }

    /// Activates the session when the demo credentials match.
    ///
    /// A failed attempt leaves an existing session as it was.
    pub async fn attempt_login(&self, username: &str, password: &str) -> Result<()> {
        if username != DEMO_USERNAME || password != DEMO_PASSWORD {
            warn!(username, "rejected sign-in attempt");
            return Err(LoanError::AuthenticationFailed);
        }

        self.sessions.activate().await?;
        info!(username, "signed in");
        Ok(())
    }

    pub async fn logout(&self) -> Result<()> {
        self.sessions.clear().await?;
        info!("signed out");
        Ok(())
    }

    pub async fn is_authenticated(&self) -> Result<bool> {
        self.sessions.is_active().await
    }

    /// Fails with [`LoanError::Unauthenticated`] unless a session is active.
    pub async fn require_session(&self) -> Result<()> {
        if self.is_authenticated().await? {
            Ok(())
        } else {
            Err(LoanError::Unauthenticated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::SessionStore;
    use crate::infrastructure::in_memory::InMemorySessionStore;

    fn authenticator() -> (Authenticator, InMemorySessionStore) {
        let store = InMemorySessionStore::new();
        (Authenticator::new(Box::new(store.clone())), store)
    }

    #[tokio::test]
    async fn test_demo_credentials_sign_in() {
        let (auth, _) = authenticator();
        assert!(!auth.is_authenticated().await.unwrap());

        auth.attempt_login("admin", "admin").await.unwrap();
        assert!(auth.is_authenticated().await.unwrap());
        auth.require_session().await.unwrap();
    }

    #[tokio::test]
    async fn test_wrong_credentials_rejected() {
        let (auth, _) = authenticator();
        for (user, pass) in [("admin", "password"), ("root", "admin"), ("", "")] {
            assert!(matches!(
                auth.attempt_login(user, pass).await,
                Err(LoanError::AuthenticationFailed)
            ));
        }
        assert!(matches!(
            auth.require_session().await,
            Err(LoanError::Unauthenticated)
        ));
    }

    #[tokio::test]
    async fn test_failed_attempt_keeps_existing_session() {
        let (auth, store) = authenticator();
        auth.attempt_login("admin", "admin").await.unwrap();
        let _ = auth.attempt_login("admin", "wrong").await;
        assert!(store.is_active().await.unwrap());
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let (auth, store) = authenticator();
        auth.attempt_login("admin", "admin").await.unwrap();
        auth.logout().await.unwrap();
        assert!(!store.is_active().await.unwrap());
    }
}
