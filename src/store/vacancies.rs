use serde::Deserialize;

use super::{Collection, RemoteStore};
use crate::dto::vacancy_dto::{CreateVacancyPayload, UpdateVacancyPayload};
use crate::error::Result;
use crate::models::vacancy::{EmploymentType, Vacancy};
use crate::utils::time;

#[derive(Debug, Deserialize)]
pub struct VacancyRow {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub employment_type: Option<String>,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Option<Vec<String>>,
    #[serde(default)]
    pub responsibilities: Option<Vec<String>>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub posted_date: Option<String>,
    #[serde(default)]
    pub application_deadline: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

pub struct VacancyCollection;

impl Collection for VacancyCollection {
    type Entity = Vacancy;
    type Row = VacancyRow;
    type CreatePayload = CreateVacancyPayload;
    type UpdatePayload = UpdateVacancyPayload;

    const TABLE: &'static str = "vacancies";

    fn entity_from_row(row: VacancyRow) -> Vacancy {
        let created_at = time::parse_timestamp(row.created_at.as_deref());
        Vacancy {
            id: row.id,
            title: row.title,
            location: row.location,
            employment_type: row
                .employment_type
                .as_deref()
                .and_then(EmploymentType::parse)
                .unwrap_or(EmploymentType::FullTime),
            department: row.department,
            description: row.description,
            requirements: row.requirements.unwrap_or_default(),
            responsibilities: row.responsibilities.unwrap_or_default(),
            is_active: row.is_active.unwrap_or(true),
            posted_date: time::parse_date(row.posted_date.as_deref())
                .or_else(|| created_at.map(|at| at.date_naive()))
                .unwrap_or_else(|| time::now().date_naive()),
            application_deadline: time::parse_date(row.application_deadline.as_deref()),
            created_at,
            updated_at: time::parse_timestamp(row.updated_at.as_deref()),
        }
    }

    fn entity_id(entity: &Vacancy) -> &str {
        &entity.id
    }
}

pub type VacancyStore = RemoteStore<VacancyCollection>;

impl RemoteStore<VacancyCollection> {
    /// Listing for the public careers page: open vacancies only, filtered
    /// server-side. Closed vacancies remain reachable via `fetch_by_id`.
    pub async fn fetch_active(&self) -> Result<Vec<Vacancy>> {
        let rows: Vec<VacancyRow> = self
            .rest
            .select(
                VacancyCollection::TABLE,
                &[
                    ("select", "*"),
                    ("is_active", "eq.true"),
                    ("order", "created_at.desc"),
                ],
            )
            .await?;
        Ok(rows
            .into_iter()
            .map(VacancyCollection::entity_from_row)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_employment_type_degrades_to_full_time() {
        let row: VacancyRow = serde_json::from_value(json!({
            "id": "v1",
            "title": "Civil Engineer",
            "employment_type": "Zero-hours"
        }))
        .unwrap();
        let vacancy = VacancyCollection::entity_from_row(row);
        assert_eq!(vacancy.employment_type, EmploymentType::FullTime);
    }

    #[test]
    fn posted_date_falls_back_to_the_creation_timestamp() {
        let row: VacancyRow = serde_json::from_value(json!({
            "id": "v2",
            "title": "Site Supervisor",
            "created_at": "2025-09-02T07:45:00+00:00"
        }))
        .unwrap();
        let vacancy = VacancyCollection::entity_from_row(row);
        assert_eq!(
            vacancy.posted_date,
            chrono::NaiveDate::from_ymd_opt(2025, 9, 2).unwrap()
        );
        assert!(vacancy.is_active);
    }

    #[test]
    fn closed_vacancies_keep_their_flag() {
        let row: VacancyRow = serde_json::from_value(json!({
            "id": "v3",
            "title": "Quantity Surveyor",
            "is_active": false,
            "posted_date": "2025-05-19",
            "application_deadline": "2025-06-30"
        }))
        .unwrap();
        let vacancy = VacancyCollection::entity_from_row(row);
        assert!(!vacancy.is_active);
        assert_eq!(
            vacancy.application_deadline,
            chrono::NaiveDate::from_ymd_opt(2025, 6, 30)
        );
    }
}
