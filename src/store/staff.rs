use serde::Deserialize;

use super::{Collection, RemoteStore};
use crate::dto::staff_dto::{CreateStaffPayload, UpdateStaffPayload};
use crate::models::staff::Staff;
use crate::utils::time;

#[derive(Debug, Deserialize)]
pub struct StaffRow {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

pub struct StaffCollection;

impl Collection for StaffCollection {
    type Entity = Staff;
    type Row = StaffRow;
    type CreatePayload = CreateStaffPayload;
    type UpdatePayload = UpdateStaffPayload;

    const TABLE: &'static str = "staff";

    fn entity_from_row(row: StaffRow) -> Staff {
        Staff {
            id: row.id,
            name: row.name,
            role: row.role,
            photo: row.photo.unwrap_or_default(),
            bio: row.bio,
            department: row.department,
            email: row.email,
            phone: row.phone,
            linkedin: row.linkedin,
            experience: row.experience,
            created_at: time::parse_timestamp(row.created_at.as_deref()),
            updated_at: time::parse_timestamp(row.updated_at.as_deref()),
        }
    }

    fn entity_id(entity: &Staff) -> &str {
        &entity.id
    }
}

pub type StaffStore = RemoteStore<StaffCollection>;
