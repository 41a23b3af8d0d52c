use chrono::NaiveDate;

use super::seed_id;
use crate::models::vacancy::{EmploymentType, Vacancy};
use crate::utils::time;

pub fn seed() -> Vec<Vacancy> {
    let now = time::now();
    let entries = vec![
        Vacancy {
            id: String::new(),
            title: "Civil Engineer".to_string(),
            location: "Leeds".to_string(),
            employment_type: EmploymentType::FullTime,
            department: "Engineering".to_string(),
            description: "Deliver highway and drainage packages on our framework \
                          schemes, reporting to the senior engineer."
                .to_string(),
            requirements: vec![
                "Degree in civil engineering or equivalent".to_string(),
                "2+ years on site".to_string(),
                "CSCS card".to_string(),
            ],
            responsibilities: vec![
                "Setting out and quality records".to_string(),
                "Subcontractor coordination".to_string(),
            ],
            is_active: true,
            posted_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            application_deadline: NaiveDate::from_ymd_opt(2025, 9, 30),
            created_at: Some(now),
            updated_at: Some(now),
        },
        Vacancy {
            id: String::new(),
            title: "Site Supervisor".to_string(),
            location: "Peterborough".to_string(),
            employment_type: EmploymentType::FullTime,
            department: "Operations".to_string(),
            description: "Run day-to-day site activity on a commercial new build, \
                          keeping the programme and the paperwork straight."
                .to_string(),
            requirements: vec![
                "SMSTS or SSSTS".to_string(),
                "First aid at work".to_string(),
            ],
            responsibilities: vec![
                "Daily briefings and permits".to_string(),
                "Progress reporting".to_string(),
            ],
            is_active: true,
            posted_date: NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(),
            application_deadline: None,
            created_at: Some(now),
            updated_at: Some(now),
        },
        Vacancy {
            id: String::new(),
            title: "Heavy Equipment Operator".to_string(),
            location: "Cambridgeshire".to_string(),
            employment_type: EmploymentType::Contract,
            department: "Plant".to_string(),
            description: "360 excavator operator for bulk earthworks on an \
                          infrastructure scheme, initial six-month contract."
                .to_string(),
            requirements: vec![
                "CPCS or NPORS ticket".to_string(),
                "GPS machine control experience".to_string(),
            ],
            responsibilities: Vec::new(),
            is_active: true,
            posted_date: NaiveDate::from_ymd_opt(2025, 7, 20).unwrap(),
            application_deadline: NaiveDate::from_ymd_opt(2025, 8, 31),
            created_at: Some(now),
            updated_at: Some(now),
        },
        Vacancy {
            id: String::new(),
            title: "Quantity Surveyor".to_string(),
            location: "Leeds".to_string(),
            employment_type: EmploymentType::FullTime,
            department: "Commercial".to_string(),
            description: "Manage subcontract accounts and monthly valuations across \
                          two residential schemes."
                .to_string(),
            requirements: vec![
                "RICS accredited degree".to_string(),
                "JCT contract experience".to_string(),
            ],
            responsibilities: Vec::new(),
            is_active: false,
            posted_date: NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
            application_deadline: NaiveDate::from_ymd_opt(2025, 3, 31),
            created_at: Some(now),
            updated_at: Some(now),
        },
    ];

    entries
        .into_iter()
        .enumerate()
        .map(|(index, mut vacancy)| {
            vacancy.id = seed_id(index);
            vacancy
        })
        .collect()
}

/// Fallback for the public careers listing: the same seed list, filtered the
/// way the server-side `is_active` filter would.
pub fn active_seed() -> Vec<Vacancy> {
    seed().into_iter().filter(|v| v.is_active).collect()
}
