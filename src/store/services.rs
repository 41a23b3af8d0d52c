use serde::Deserialize;

use super::{Collection, RemoteStore};
use crate::dto::service_dto::{CreateServicePayload, UpdateServicePayload};
use crate::models::service::Service;
use crate::utils::time;

#[derive(Debug, Deserialize)]
pub struct ServiceRow {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

pub struct ServiceCollection;

impl Collection for ServiceCollection {
    type Entity = Service;
    type Row = ServiceRow;
    type CreatePayload = CreateServicePayload;
    type UpdatePayload = UpdateServicePayload;

    const TABLE: &'static str = "services";

    fn entity_from_row(row: ServiceRow) -> Service {
        Service {
            id: row.id,
            title: row.title,
            description: row.description,
            image: row.image.unwrap_or_default(),
            features: row.features.unwrap_or_default(),
            created_at: time::parse_timestamp(row.created_at.as_deref()),
            updated_at: time::parse_timestamp(row.updated_at.as_deref()),
        }
    }

    fn entity_id(entity: &Service) -> &str {
        &entity.id
    }
}

pub type ServiceStore = RemoteStore<ServiceCollection>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_features_become_an_empty_list() {
        let row: ServiceRow = serde_json::from_value(json!({
            "id": "s1",
            "title": "Design & Build",
            "description": "Single point of responsibility from concept to handover.",
            "image": null,
            "features": null
        }))
        .unwrap();
        let service = ServiceCollection::entity_from_row(row);
        assert!(service.features.is_empty());
        assert_eq!(service.image_url(), None);
    }
}
