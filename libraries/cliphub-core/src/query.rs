/// Pipeline query vocabulary for the entity store
///
/// The store has no native relational join; every foreign-key relation
/// is a lookup by field equality, optionally post-processed by a nested
/// sub-pipeline before being embedded. The view composer builds its
/// staged pipelines out of these types so that join and projection
/// stages stay composable and independently testable.
use crate::document::Document;
use serde_json::Value;

/// Equality filter over document fields.
///
/// Every `(field, value)` pair must match for a document to pass.
/// An empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    conditions: Vec<(String, Value)>,
}

impl Filter {
    /// Create an empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `field == value`
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push((field.into(), value.into()));
        self
    }

    /// Whether a document satisfies every condition
    pub fn matches(&self, doc: &Document) -> bool {
        self.conditions
            .iter()
            .all(|(field, value)| doc.get(field) == Some(value))
    }
}

/// One stage of an aggregation pipeline. Stage order is preserved by
/// the executor.
#[derive(Debug, Clone)]
pub enum Stage {
    /// Keep only documents matching the filter
    Match(Filter),

    /// Join against a foreign collection.
    ///
    /// For each input document, collects the foreign documents whose
    /// `foreign_field` equals the local value; when the local field is
    /// an array, matches any element and preserves the local array's
    /// order. The nested `pipeline` runs over the joined set before it
    /// is embedded under `as_field`. Zero matches embed an empty array.
    Lookup {
        /// Foreign collection name
        from: String,
        /// Field on the input document
        local_field: String,
        /// Field on the foreign documents
        foreign_field: String,
        /// Name of the embedded result field
        as_field: String,
        /// Sub-stages applied to the joined set before embedding
        pipeline: Vec<Stage>,
    },

    /// Collapse an array field to its first element. An empty or
    /// missing array removes the field instead.
    First(String),

    /// Keep only the named fields. `_id` is always retained.
    Project(Vec<String>),
}

impl Stage {
    /// Shorthand for a projection stage
    pub fn project<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Project(fields.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => panic!("test document must be an object"),
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let d = doc(json!({ "name": "Favorites" }));
        assert!(Filter::new().matches(&d));
    }

    #[test]
    fn all_conditions_must_hold() {
        let d = doc(json!({ "name": "Favorites", "owner": "u1" }));

        assert!(Filter::new().eq("name", "Favorites").eq("owner", "u1").matches(&d));
        assert!(!Filter::new().eq("name", "Favorites").eq("owner", "u2").matches(&d));
        assert!(!Filter::new().eq("missing", "x").matches(&d));
    }
}
