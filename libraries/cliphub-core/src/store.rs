/// Entity store trait
///
/// Uniform CRUD plus the pipeline-query primitive over the three
/// collections of the playlist subsystem. Implementations own their
/// internal concurrency control; callers share a store through `Arc`.
use crate::document::Document;
use crate::error::Result;
use crate::query::{Filter, Stage};
use async_trait::async_trait;
use serde_json::Value;

/// Outcome of an atomic membership array operation.
///
/// The presence check and the mutation happen inside one critical
/// section, so two concurrent pushes of the same value cannot both
/// report `Updated`.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayUpdate {
    /// The array changed; carries the updated document
    Updated(Box<Document>),

    /// Push refused: the value is already an element
    Duplicate,

    /// Pull refused: the value is not an element
    NotMember,

    /// The document itself is gone
    DocumentMissing,
}

/// Storage adapter over named document collections.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Fetch a document by its `_id`
    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Option<Document>>;

    /// Fetch the first document matching the filter
    async fn find_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>>;

    /// Insert a document. The document must carry a string `_id`;
    /// inserting an existing id is a conflict.
    async fn insert(&self, collection: &str, doc: Document) -> Result<Document>;

    /// Shallow-merge a patch into the document with the given id.
    /// Returns the updated document, or `None` when it does not exist.
    async fn update_by_id(
        &self,
        collection: &str,
        id: &str,
        patch: Document,
    ) -> Result<Option<Document>>;

    /// Remove a document. Returns whether anything was removed.
    async fn delete_by_id(&self, collection: &str, id: &str) -> Result<bool>;

    /// Run an ordered stage pipeline rooted at a collection.
    async fn aggregate(&self, collection: &str, pipeline: &[Stage]) -> Result<Vec<Document>>;

    /// Append `value` to the array at `field` unless already present.
    async fn array_push_if_absent(
        &self,
        collection: &str,
        id: &str,
        field: &str,
        value: Value,
    ) -> Result<ArrayUpdate>;

    /// Remove the single occurrence of `value` from the array at
    /// `field`, preserving the order of the remaining elements.
    async fn array_pull(
        &self,
        collection: &str,
        id: &str,
        field: &str,
        value: &Value,
    ) -> Result<ArrayUpdate>;
}
