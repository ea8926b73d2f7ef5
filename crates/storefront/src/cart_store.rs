//! In-memory cart storage.
//!
//! The session only carries a cart id; the cart itself lives here, behind a
//! per-cart mutex. Handlers hold the lock for the whole read-modify step, so
//! overlapping requests from one visitor apply one after another.
//!
//! Carts are evicted after the session idle period without access, or when
//! the store is full (least recently used first).

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tokio::sync::Mutex;
use uuid::Uuid;

use autoparts_core::Cart;

/// Upper bound on carts held at once.
pub const MAX_CARTS: u64 = 100_000;

/// A cart shared between the requests of one session.
pub type SharedCart = Arc<Mutex<Cart>>;

/// Carts keyed by the id stored in the visitor session.
#[derive(Clone)]
pub struct CartStore {
    carts: Cache<Uuid, SharedCart>,
}

impl CartStore {
    /// Create a store that drops carts idle for longer than `idle`.
    #[must_use]
    pub fn new(idle: Duration, max_capacity: u64) -> Self {
        let carts = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_idle(idle)
            .build();
        Self { carts }
    }

    /// The cart for `id`, created empty on first use.
    ///
    /// Concurrent callers for the same id get the same cart.
    pub async fn cart(&self, id: Uuid) -> SharedCart {
        self.carts
            .get_with(id, async { Arc::new(Mutex::new(Cart::new())) })
            .await
    }

    /// Run `change` on the cart for `id` while holding its lock.
    ///
    /// Changes for one id never interleave.
    pub async fn update<T>(&self, id: Uuid, change: impl FnOnce(&mut Cart) -> T) -> T {
        let cart = self.cart(id).await;
        let mut cart = cart.lock().await;
        change(&mut cart)
    }

    /// A copy of the cart for `id`, or an empty cart if there is none.
    pub async fn snapshot(&self, id: Uuid) -> Cart {
        match self.carts.get(&id).await {
            Some(cart) => cart.lock().await.clone(),
            None => Cart::new(),
        }
    }

    /// Number of carts held, after pending evictions have run.
    pub async fn len(&self) -> u64 {
        self.carts.run_pending_tasks().await;
        self.carts.entry_count()
    }

    /// Returns `true` if no carts are held.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
