//! Session middleware configuration.
//!
//! Each visitor gets an in-memory session holding the id of their cart.
//! Records are evicted by `moka` once their expiry date passes or when the
//! store is full. Nothing survives a restart of the process.

use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_moka_store::MokaStore;

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "ap_session";

/// Upper bound on session records held at once.
pub const MAX_SESSIONS: u64 = 100_000;

/// Create the session layer with an evicting in-memory store.
///
/// Sessions expire after `config.session_idle_minutes` without a request.
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MokaStore> {
    SessionManagerLayer::new(MokaStore::new(Some(MAX_SESSIONS)))
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::minutes(config.session_idle_minutes),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use tower_sessions::SessionStore;
    use tower_sessions::cookie::time::{self, OffsetDateTime};
    use tower_sessions::session::{Id, Record};

    use super::*;

    #[tokio::test]
    async fn test_expired_session_record_is_dropped() {
        let store = MokaStore::new(Some(10));
        let mut record = Record {
            id: Id::default(),
            data: Default::default(),
            expiry_date: OffsetDateTime::now_utc() + time::Duration::milliseconds(100),
        };
        store.create(&mut record).await.unwrap();
        assert!(store.load(&record.id).await.unwrap().is_some());

        tokio::time::sleep(Duration::from_millis(300)).await;

        assert!(store.load(&record.id).await.unwrap().is_none());
    }
}
