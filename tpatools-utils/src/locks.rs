//! Lock aliases so the whole workspace agrees on one lock implementation.

/// Synchronous mutex.
pub type SyncMutex<T> = parking_lot::Mutex<T>;
/// Synchronous reader-writer lock.
pub type SyncRwLock<T> = parking_lot::RwLock<T>;
