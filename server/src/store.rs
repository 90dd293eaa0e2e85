//! Storage backends for todos.
//!
//! # Design
//! One `TodoStore` trait, two implementations, selected once at startup:
//!
//! - `MemoryStore`: an ordered `Vec` behind an async `RwLock`. Listing
//!   returns insertion order. The lock makes overlapping create/update/delete
//!   requests safe; every read-modify-write runs under a single guard.
//! - `SledStore`: an embedded sled tree named `todos`, values encoded with
//!   big-endian bincode. Listing returns key order, which callers must treat
//!   as unspecified. The completed flag is set through a per-key
//!   compare-and-swap so an update never writes over a concurrent remove.
//!
//! `complete` and `remove` report whether a record matched so handlers can
//! return 404 instead of silently succeeding on a no-op.

use std::path::Path;

use async_trait::async_trait;
use bincode::{
    config::{BigEndian, WithOtherEndian},
    DefaultOptions, Options,
};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::model::Todo;

/// Failures surfaced by a storage backend. Handlers map these to HTTP 500.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend failure: {0}")]
    Backend(#[from] sled::Error),

    #[error("stored todo could not be decoded: {0}")]
    Decode(#[from] bincode::Error),
}

/// The four operations every backend provides.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// All todos, in storage-native order.
    async fn list(&self) -> Result<Vec<Todo>, StoreError>;

    /// Persist a freshly created todo.
    async fn insert(&self, todo: Todo) -> Result<(), StoreError>;

    /// Mark the todo with `id` as completed. Returns the updated record,
    /// or `None` when no record matched.
    async fn complete(&self, id: Uuid) -> Result<Option<Todo>, StoreError>;

    /// Remove the todo with `id`. Returns whether a record matched.
    async fn remove(&self, id: Uuid) -> Result<bool, StoreError>;
}

/// Process-local backend: an insertion-ordered list behind a lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    todos: RwLock<Vec<Todo>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.todos.read().await.clone())
    }

    async fn insert(&self, todo: Todo) -> Result<(), StoreError> {
        self.todos.write().await.push(todo);
        Ok(())
    }

    async fn complete(&self, id: Uuid) -> Result<Option<Todo>, StoreError> {
        let mut todos = self.todos.write().await;
        match todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.completed = true;
                Ok(Some(todo.clone()))
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut todos = self.todos.write().await;
        match todos.iter().position(|t| t.id == id) {
            // Vec::remove keeps the relative order of the remaining todos.
            Some(index) => {
                todos.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Embedded document-store backend: one sled tree named `todos`, keyed by
/// the todo's UUID bytes.
pub struct SledStore {
    tree: sled::Tree,
    encoder: WithOtherEndian<DefaultOptions, BigEndian>,
}

impl SledStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        let tree = db.open_tree("todos")?;
        let encoder = bincode::options().with_big_endian();
        Ok(Self { tree, encoder })
    }

    fn decode(&self, bytes: &[u8]) -> Result<Todo, StoreError> {
        Ok(self.encoder.deserialize(bytes)?)
    }

    fn encode(&self, todo: &Todo) -> Result<Vec<u8>, StoreError> {
        Ok(self.encoder.serialize(todo)?)
    }
}

#[async_trait]
impl TodoStore for SledStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let mut todos = Vec::new();
        for item in self.tree.iter() {
            let (_, value) = item?;
            todos.push(self.decode(&value)?);
        }
        Ok(todos)
    }

    async fn insert(&self, todo: Todo) -> Result<(), StoreError> {
        let value = self.encode(&todo)?;
        self.tree.insert(todo.id.as_bytes(), value)?;
        Ok(())
    }

    async fn complete(&self, id: Uuid) -> Result<Option<Todo>, StoreError> {
        // update_and_fetch runs a compare-and-swap loop on the key, so a
        // remove landing between the read and the write makes the closure
        // re-run against the deleted state instead of resurrecting the todo.
        let mut codec_err = None;
        let updated = self.tree.update_and_fetch(id.as_bytes(), |old| {
            let old = old?;
            let reencoded = self.encoder.deserialize::<Todo>(old).and_then(|mut todo| {
                todo.completed = true;
                self.encoder.serialize(&todo)
            });
            match reencoded {
                Ok(bytes) => Some(bytes),
                // Leave the stored value untouched; the error surfaces below.
                Err(e) => {
                    codec_err = Some(e);
                    Some(old.to_vec())
                }
            }
        })?;
        if let Some(e) = codec_err {
            return Err(e.into());
        }
        match updated {
            Some(value) => Ok(Some(self.decode(&value)?)),
            None => Ok(None),
        }
    }

    async fn remove(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.tree.remove(id.as_bytes())?.is_some())
    }
}

impl std::fmt::Debug for SledStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SledStore").finish()
    }
}
