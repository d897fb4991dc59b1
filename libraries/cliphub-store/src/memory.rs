/// In-memory entity store
use crate::pipeline::{self, Snapshots};
use async_trait::async_trait;
use cliphub_core::{
    collections, document_id, ArrayUpdate, Document, EntityStore, Filter, HubError, Result, Stage,
};
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

/// Document store backed by one insertion-ordered map per collection.
///
/// Each collection sits behind its own `RwLock`; a write takes the lock
/// for the whole read-modify-write, which is what makes the membership
/// array primitives atomic. Handlers share the store through `Arc`.
pub struct MemoryStore {
    collections: HashMap<&'static str, RwLock<IndexMap<String, Document>>>,
}

impl MemoryStore {
    /// Create a store with the three playlist-subsystem collections.
    pub fn new() -> Self {
        let mut map = HashMap::new();
        for name in [collections::PLAYLISTS, collections::VIDEOS, collections::USERS] {
            map.insert(name, RwLock::new(IndexMap::new()));
        }
        Self { collections: map }
    }

    fn collection(&self, name: &str) -> Result<&RwLock<IndexMap<String, Document>>> {
        self.collections
            .get(name)
            .ok_or_else(|| HubError::storage(format!("unknown collection: {name}")))
    }

    async fn snapshot(&self, name: &str) -> Result<Vec<Document>> {
        Ok(self.collection(name)?.read().await.values().cloned().collect())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        Ok(self.collection(collection)?.read().await.get(id).cloned())
    }

    async fn find_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>> {
        let guard = self.collection(collection)?.read().await;
        Ok(guard.values().find(|doc| filter.matches(doc)).cloned())
    }

    async fn insert(&self, collection: &str, doc: Document) -> Result<Document> {
        let id = document_id(&doc)
            .ok_or_else(|| HubError::storage("document is missing a string _id"))?
            .to_string();

        let mut guard = self.collection(collection)?.write().await;
        if guard.contains_key(&id) {
            return Err(HubError::conflict(format!(
                "document {id} already exists in {collection}"
            )));
        }
        guard.insert(id, doc.clone());
        Ok(doc)
    }

    async fn update_by_id(
        &self,
        collection: &str,
        id: &str,
        patch: Document,
    ) -> Result<Option<Document>> {
        let mut guard = self.collection(collection)?.write().await;
        let Some(doc) = guard.get_mut(id) else {
            return Ok(None);
        };
        for (field, value) in patch {
            doc.insert(field, value);
        }
        Ok(Some(doc.clone()))
    }

    async fn delete_by_id(&self, collection: &str, id: &str) -> Result<bool> {
        let mut guard = self.collection(collection)?.write().await;
        Ok(guard.shift_remove(id).is_some())
    }

    async fn aggregate(&self, collection: &str, stages: &[Stage]) -> Result<Vec<Document>> {
        let mut names = HashSet::new();
        pipeline::referenced_collections(stages, &mut names);

        let mut snapshots = Snapshots::new();
        for name in &names {
            snapshots.insert(name.clone(), self.snapshot(name).await?);
        }
        let source = self.snapshot(collection).await?;

        tracing::debug!(collection, stages = stages.len(), "running aggregation pipeline");
        Ok(pipeline::run_pipeline(source, stages, &snapshots))
    }

    async fn array_push_if_absent(
        &self,
        collection: &str,
        id: &str,
        field: &str,
        value: Value,
    ) -> Result<ArrayUpdate> {
        let mut guard = self.collection(collection)?.write().await;
        let Some(doc) = guard.get_mut(id) else {
            return Ok(ArrayUpdate::DocumentMissing);
        };

        match doc.get_mut(field) {
            Some(Value::Array(items)) => {
                if items.contains(&value) {
                    return Ok(ArrayUpdate::Duplicate);
                }
                items.push(value);
            }
            Some(_) => {
                return Err(HubError::storage(format!("field {field} is not an array")));
            }
            None => {
                doc.insert(field.to_string(), Value::Array(vec![value]));
            }
        }
        Ok(ArrayUpdate::Updated(Box::new(doc.clone())))
    }

    async fn array_pull(
        &self,
        collection: &str,
        id: &str,
        field: &str,
        value: &Value,
    ) -> Result<ArrayUpdate> {
        let mut guard = self.collection(collection)?.write().await;
        let Some(doc) = guard.get_mut(id) else {
            return Ok(ArrayUpdate::DocumentMissing);
        };

        match doc.get_mut(field) {
            Some(Value::Array(items)) => match items.iter().position(|item| item == value) {
                Some(index) => {
                    items.remove(index);
                }
                None => return Ok(ArrayUpdate::NotMember),
            },
            Some(_) => {
                return Err(HubError::storage(format!("field {field} is not an array")));
            }
            None => return Ok(ArrayUpdate::NotMember),
        }
        Ok(ArrayUpdate::Updated(Box::new(doc.clone())))
    }
}
