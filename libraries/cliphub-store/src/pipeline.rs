/// Staged aggregation pipeline executor
///
/// Runs over immutable snapshots of the involved collections, so the
/// executor itself is a pure function and every stage can be tested in
/// isolation. Stage order is preserved.
use cliphub_core::{Document, Stage, ID_FIELD};
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// Snapshots of the collections a pipeline may look up into.
pub(crate) type Snapshots = HashMap<String, Vec<Document>>;

/// Collect the collection names referenced by lookup stages, recursing
/// into nested sub-pipelines.
pub(crate) fn referenced_collections(stages: &[Stage], out: &mut HashSet<String>) {
    for stage in stages {
        if let Stage::Lookup { from, pipeline, .. } = stage {
            out.insert(from.clone());
            referenced_collections(pipeline, out);
        }
    }
}

/// Run an ordered stage pipeline over the source documents.
///
/// `snapshots` must contain every collection referenced by a lookup
/// stage; a missing snapshot joins as an empty foreign collection.
pub(crate) fn run_pipeline(
    mut docs: Vec<Document>,
    stages: &[Stage],
    snapshots: &Snapshots,
) -> Vec<Document> {
    for stage in stages {
        docs = match stage {
            Stage::Match(filter) => docs.into_iter().filter(|doc| filter.matches(doc)).collect(),

            Stage::Lookup {
                from,
                local_field,
                foreign_field,
                as_field,
                pipeline,
            } => {
                let foreign = snapshots.get(from).map(Vec::as_slice).unwrap_or(&[]);
                docs.into_iter()
                    .map(|mut doc| {
                        let joined = join_foreign(&doc, local_field, foreign_field, foreign);
                        let joined = run_pipeline(joined, pipeline, snapshots);
                        let embedded = joined.into_iter().map(Value::Object).collect();
                        doc.insert(as_field.clone(), Value::Array(embedded));
                        doc
                    })
                    .collect()
            }

            Stage::First(field) => docs
                .into_iter()
                .map(|mut doc| {
                    collapse_first(&mut doc, field);
                    doc
                })
                .collect(),

            Stage::Project(fields) => docs
                .into_iter()
                .map(|mut doc| {
                    doc.retain(|key, _| key == ID_FIELD || fields.iter().any(|f| f == key));
                    doc
                })
                .collect(),
        };
    }
    docs
}

/// Collect the foreign documents joined to one local document.
///
/// An array-valued local field matches any of its elements and the
/// result follows the local array's order, so a playlist's membership
/// order survives the join.
fn join_foreign(
    doc: &Document,
    local_field: &str,
    foreign_field: &str,
    foreign: &[Document],
) -> Vec<Document> {
    match doc.get(local_field) {
        Some(Value::Array(keys)) => keys
            .iter()
            .flat_map(|key| {
                foreign
                    .iter()
                    .filter(move |f| f.get(foreign_field) == Some(key))
                    .cloned()
            })
            .collect(),
        Some(key) => foreign
            .iter()
            .filter(|f| f.get(foreign_field) == Some(key))
            .cloned()
            .collect(),
        None => Vec::new(),
    }
}

/// Collapse an array field to its first element; an empty or missing
/// array removes the field. Non-array fields are left untouched.
fn collapse_first(doc: &mut Document, field: &str) {
    let collapsed = match doc.get_mut(field) {
        Some(Value::Array(items)) => {
            if items.is_empty() {
                None
            } else {
                Some(items.remove(0))
            }
        }
        _ => return,
    };

    match collapsed {
        Some(value) => {
            doc.insert(field.to_string(), value);
        }
        None => {
            doc.remove(field);
        }
    }
}
