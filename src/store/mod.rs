use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::error;
use validator::Validate;

use crate::error::Result;

pub mod postgrest;
pub mod projects;
pub mod services;
pub mod staff;
pub mod vacancies;

pub use postgrest::PostgrestClient;

/// One remote content collection: its table, wire row shape and the
/// translation into the domain entity. Rows are the only place the wire
/// shape is visible.
pub trait Collection: Send + Sync + 'static {
    type Entity: Clone + Send + Sync + 'static;
    type Row: DeserializeOwned + Send;
    type CreatePayload: Serialize + Validate + Send + Sync;
    type UpdatePayload: Serialize + Validate + Send + Sync;

    const TABLE: &'static str;

    fn entity_from_row(row: Self::Row) -> Self::Entity;
    fn entity_id(entity: &Self::Entity) -> &str;
}

/// CRUD adapter over one collection.
///
/// Two surfaces: the `fetch_*`/`try_*` layer reports failures as `Err`, and
/// the `get_*`/`create`/`update`/`delete` surface logs failures and collapses
/// them to empty/`None`/`false` sentinels. An empty list from `get_all` is
/// therefore ambiguous between "no rows" and "fetch failed"; the feed layer
/// uses `fetch_all` so it can tell the two apart.
pub struct RemoteStore<C: Collection> {
    rest: PostgrestClient,
    _collection: PhantomData<C>,
}

impl<C: Collection> Clone for RemoteStore<C> {
    fn clone(&self) -> Self {
        Self {
            rest: self.rest.clone(),
            _collection: PhantomData,
        }
    }
}

impl<C: Collection> RemoteStore<C> {
    pub fn new(rest: PostgrestClient) -> Self {
        Self {
            rest,
            _collection: PhantomData,
        }
    }

    /// All rows, newest first.
    pub async fn fetch_all(&self) -> Result<Vec<C::Entity>> {
        let rows: Vec<C::Row> = self
            .rest
            .select(C::TABLE, &[("select", "*"), ("order", "created_at.desc")])
            .await?;
        Ok(rows.into_iter().map(C::entity_from_row).collect())
    }

    pub async fn fetch_by_id(&self, id: &str) -> Result<Option<C::Entity>> {
        let eq = format!("eq.{}", id);
        let rows: Vec<C::Row> = self
            .rest
            .select(C::TABLE, &[("select", "*"), ("id", &eq), ("limit", "1")])
            .await?;
        Ok(rows.into_iter().next().map(C::entity_from_row))
    }

    /// Timestamps are never sent; the server stamps them on insert.
    pub async fn try_create(&self, payload: &C::CreatePayload) -> Result<C::Entity> {
        payload.validate()?;
        let body = serde_json::to_value(payload)?;
        let row = self.rest.insert(C::TABLE, &body).await?;
        let row: C::Row = serde_json::from_value(row)?;
        Ok(C::entity_from_row(row))
    }

    /// Patches only the fields present in the serialized payload;
    /// `updated_at` is re-stamped server-side.
    pub async fn try_update(&self, id: &str, patch: &C::UpdatePayload) -> Result<()> {
        patch.validate()?;
        let body = serde_json::to_value(patch)?;
        self.rest.update(C::TABLE, id, &body).await
    }

    pub async fn try_delete(&self, id: &str) -> Result<()> {
        self.rest.delete(C::TABLE, id).await
    }

    pub async fn get_all(&self) -> Vec<C::Entity> {
        match self.fetch_all().await {
            Ok(items) => items,
            Err(e) => {
                error!(table = C::TABLE, error = %e, "list fetch failed");
                Vec::new()
            }
        }
    }

    pub async fn get_by_id(&self, id: &str) -> Option<C::Entity> {
        match self.fetch_by_id(id).await {
            Ok(found) => found,
            Err(e) => {
                error!(table = C::TABLE, id, error = %e, "row fetch failed");
                None
            }
        }
    }

    pub async fn create(&self, payload: &C::CreatePayload) -> Option<String> {
        match self.try_create(payload).await {
            Ok(entity) => Some(C::entity_id(&entity).to_string()),
            Err(e) => {
                error!(table = C::TABLE, error = %e, "insert failed");
                None
            }
        }
    }

    pub async fn update(&self, id: &str, patch: &C::UpdatePayload) -> bool {
        match self.try_update(id, patch).await {
            Ok(()) => true,
            Err(e) => {
                error!(table = C::TABLE, id, error = %e, "update failed");
                false
            }
        }
    }

    pub async fn delete(&self, id: &str) -> bool {
        match self.try_delete(id).await {
            Ok(()) => true,
            Err(e) => {
                error!(table = C::TABLE, id, error = %e, "delete failed");
                false
            }
        }
    }
}
