use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Temporary,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::PartTime => "Part-time",
            EmploymentType::Contract => "Contract",
            EmploymentType::Temporary => "Temporary",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Full-time" => Some(EmploymentType::FullTime),
            "Part-time" => Some(EmploymentType::PartTime),
            "Contract" => Some(EmploymentType::Contract),
            "Temporary" => Some(EmploymentType::Temporary),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vacancy {
    pub id: String,
    pub title: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub department: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    /// Closed vacancies stay retrievable by id for editing, but are excluded
    /// from public listings.
    pub is_active: bool,
    pub posted_date: NaiveDate,
    pub application_deadline: Option<NaiveDate>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
