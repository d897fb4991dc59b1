/// Denormalized playlist view composition
///
/// The store has no native relational join, so every foreign-key
/// relation is a lookup by id equality: single-valued relations
/// (owner) are collapsed to their first joined element, multi-valued
/// relations (videos) keep the full ordered sequence. Each stage
/// re-projects so borrowed entities only leak their public fields.
use cliphub_core::{
    collections, from_document, EntityStore, Filter, HubError, PlaylistDetailView,
    PlaylistId, PlaylistListView, Result, Stage, UserId, ID_FIELD,
};

const USER_SUMMARY_FIELDS: [&str; 3] = ["fullName", "username", "avatar"];

/// Join a document's `owner` against the users collection and project
/// the result down to the public summary fields.
fn owner_summary_lookup(as_field: &str) -> Stage {
    Stage::Lookup {
        from: collections::USERS.to_string(),
        local_field: "owner".to_string(),
        foreign_field: ID_FIELD.to_string(),
        as_field: as_field.to_string(),
        pipeline: vec![Stage::project(USER_SUMMARY_FIELDS)],
    }
}

/// Join the playlist's video ids against the videos collection; each
/// joined video gets its own owner summary embedded before the final
/// field projection.
fn videos_lookup(projection: Stage) -> Stage {
    Stage::Lookup {
        from: collections::VIDEOS.to_string(),
        local_field: "videos".to_string(),
        foreign_field: ID_FIELD.to_string(),
        as_field: "videos".to_string(),
        pipeline: vec![
            owner_summary_lookup("owner"),
            Stage::First("owner".to_string()),
            projection,
        ],
    }
}

/// Compose the list view of every playlist owned by a user.
///
/// Zero results surface as `NotFound`: callers distinguish "user has
/// no playlists" from "no such user" only by id validity.
pub async fn compose_list_view<S: EntityStore>(
    store: &S,
    owner: &UserId,
) -> Result<Vec<PlaylistListView>> {
    let pipeline = vec![
        Stage::Match(Filter::new().eq("owner", owner.as_str())),
        videos_lookup(Stage::project(["title", "thumbnail", "description", "owner"])),
        owner_summary_lookup("createdBy"),
        Stage::First("createdBy".to_string()),
        Stage::project(["videos", "createdBy", "name", "description"]),
    ];

    let docs = store.aggregate(collections::PLAYLISTS, &pipeline).await?;
    if docs.is_empty() {
        return Err(HubError::not_found(format!("no playlists for user {owner}")));
    }
    docs.into_iter().map(from_document).collect()
}

/// Compose the detail view of a single playlist.
pub async fn compose_detail_view<S: EntityStore>(
    store: &S,
    playlist_id: &PlaylistId,
) -> Result<PlaylistDetailView> {
    let pipeline = vec![
        Stage::Match(Filter::new().eq(ID_FIELD, playlist_id.as_str())),
        owner_summary_lookup("createdBy"),
        Stage::First("createdBy".to_string()),
        videos_lookup(Stage::project([
            "thumbnail",
            "title",
            "duration",
            "views",
            "owner",
            "createdAt",
            "updatedAt",
        ])),
        Stage::project(["videos", "description", "name", "createdBy"]),
    ];

    let docs = store.aggregate(collections::PLAYLISTS, &pipeline).await?;
    let Some(doc) = docs.into_iter().next() else {
        return Err(HubError::not_found(format!("playlist {playlist_id}")));
    };
    from_document(doc)
}
