//! In-memory stores for the catalog and user accounts.
//!
//! Both are safe to share across requests behind an `Arc`; reads clone a
//! snapshot so callers never hold a lock.

pub mod catalog;
pub mod identity;
pub mod seed;

pub use catalog::InMemoryCatalogStore;
pub use identity::InMemoryIdentityStore;
pub use seed::demo_catalog;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

// A panic while holding the lock cannot leave a half-applied write: every
// mutation is a single map operation after validation.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}
