use serde::Deserialize;

use super::{Collection, RemoteStore};
use crate::dto::project_dto::{CreateProjectPayload, UpdateProjectPayload};
use crate::models::project::{ImageRef, Project};
use crate::utils::time;

/// Wire shape of a `projects` row. A missing or malformed column must not
/// fail the fetch, so every non-key field is defaulted.
#[derive(Debug, Deserialize)]
pub struct ProjectRow {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub reference_number: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completion_date: Option<String>,
    #[serde(default)]
    pub project_value: Option<String>,
    #[serde(default)]
    pub key_features: Option<Vec<String>>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

pub struct ProjectCollection;

impl Collection for ProjectCollection {
    type Entity = Project;
    type Row = ProjectRow;
    type CreatePayload = CreateProjectPayload;
    type UpdatePayload = UpdateProjectPayload;

    const TABLE: &'static str = "projects";

    fn entity_from_row(row: ProjectRow) -> Project {
        Project {
            id: row.id,
            title: row.title,
            category: row.category,
            client: row.client,
            reference_number: row.reference_number,
            location: row.location,
            image: row.image.unwrap_or_default(),
            description: row.description,
            completion_date: time::parse_date(row.completion_date.as_deref()),
            project_value: row.project_value,
            key_features: row.key_features,
            created_at: time::parse_timestamp(row.created_at.as_deref()),
            updated_at: time::parse_timestamp(row.updated_at.as_deref()),
        }
    }

    fn entity_id(entity: &Project) -> &str {
        &entity.id
    }
}

pub type ProjectStore = RemoteStore<ProjectCollection>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn row_translation_populates_present_fields_only() {
        let row: ProjectRow = serde_json::from_value(json!({
            "id": "7f2b",
            "title": "A14 Overbridge Refurbishment",
            "category": "Infrastructure",
            "client": "National Highways",
            "reference_number": "BLC-2031",
            "location": "Cambridgeshire",
            "image": ["deck.jpg", "parapet.jpg"],
            "completion_date": "2025-11-30",
            "created_at": "2025-01-07T08:00:00+00:00"
        }))
        .unwrap();

        let project = ProjectCollection::entity_from_row(row);
        assert_eq!(project.reference_number.as_deref(), Some("BLC-2031"));
        assert_eq!(project.primary_image(), Some("deck.jpg"));
        assert_eq!(
            project.completion_date,
            chrono::NaiveDate::from_ymd_opt(2025, 11, 30)
        );
        assert!(project.description.is_none());
        assert!(project.project_value.is_none());
        assert!(project.key_features.is_none());
        assert!(project.created_at.is_some());
        assert!(project.updated_at.is_none());
    }

    #[test]
    fn single_image_rows_still_translate() {
        let row: ProjectRow = serde_json::from_value(json!({
            "id": "7f2c",
            "title": "Hillcrest Apartments",
            "image": "front.jpg"
        }))
        .unwrap();
        let project = ProjectCollection::entity_from_row(row);
        assert_eq!(project.primary_image(), Some("front.jpg"));
    }

    #[test]
    fn image_less_rows_degrade_to_no_primary() {
        let row: ProjectRow = serde_json::from_value(json!({ "id": "7f2d" })).unwrap();
        let project = ProjectCollection::entity_from_row(row);
        assert_eq!(project.primary_image(), None);
    }

    // Write path then read path reproduces the payload, modulo the
    // server-assigned id and timestamps.
    #[test]
    fn payload_round_trips_through_the_wire_shape() {
        let payload = CreateProjectPayload {
            title: "Riverside Business Park".to_string(),
            category: "Commercial".to_string(),
            client: "Fenland Estates".to_string(),
            reference_number: None,
            location: "Peterborough".to_string(),
            image: ImageRef::Gallery(vec!["aerial.jpg".to_string()]),
            description: Some("42,000 sq ft of Grade A office space.".to_string()),
            completion_date: chrono::NaiveDate::from_ymd_opt(2024, 6, 14),
            project_value: Some("£18.5M".to_string()),
            key_features: Some(vec![
                "BREEAM Excellent".to_string(),
                "Two-storey atrium".to_string(),
            ]),
        };

        let mut wire = serde_json::to_value(&payload).unwrap();
        assert!(wire.get("reference_number").is_none());
        assert_eq!(wire["completion_date"], "2024-06-14");

        wire["id"] = json!("assigned-by-server");
        wire["created_at"] = json!("2024-06-20T10:30:00+00:00");
        wire["updated_at"] = json!("2024-06-20T10:30:00+00:00");

        let row: ProjectRow = serde_json::from_value(wire).unwrap();
        let project = ProjectCollection::entity_from_row(row);
        assert_eq!(project.title, payload.title);
        assert_eq!(project.category, payload.category);
        assert_eq!(project.client, payload.client);
        assert_eq!(project.location, payload.location);
        assert_eq!(project.image, payload.image);
        assert_eq!(project.description, payload.description);
        assert_eq!(project.completion_date, payload.completion_date);
        assert_eq!(project.project_value, payload.project_value);
        assert_eq!(project.key_features, payload.key_features);
        assert!(project.reference_number.is_none());
    }
}
