use chrono::NaiveDate;

use super::seed_id;
use crate::models::project::{ImageRef, Project};
use crate::utils::time;

pub fn seed() -> Vec<Project> {
    let now = time::now();
    let entries = vec![
        Project {
            id: String::new(),
            title: "Riverside Business Park".to_string(),
            category: "Commercial".to_string(),
            client: "Fenland Estates".to_string(),
            reference_number: Some("BLC-1847".to_string()),
            location: "Peterborough".to_string(),
            image: ImageRef::Gallery(vec![
                "/images/projects/riverside-aerial.jpg".to_string(),
                "/images/projects/riverside-atrium.jpg".to_string(),
            ]),
            description: Some(
                "42,000 sq ft of Grade A office space across three blocks, delivered \
                 on a live riverside site with full external landscaping."
                    .to_string(),
            ),
            completion_date: NaiveDate::from_ymd_opt(2024, 6, 14),
            project_value: Some("£18.5M".to_string()),
            key_features: Some(vec![
                "BREEAM Excellent rating".to_string(),
                "Two-storey glazed atrium".to_string(),
                "340-space decked car park".to_string(),
            ]),
            created_at: Some(now),
            updated_at: Some(now),
        },
        Project {
            id: String::new(),
            title: "Hillcrest Apartments".to_string(),
            category: "Residential".to_string(),
            client: "Northgate Living".to_string(),
            reference_number: None,
            location: "Leeds".to_string(),
            image: ImageRef::Single("/images/projects/hillcrest-front.jpg".to_string()),
            description: Some(
                "86-unit residential development over basement parking, including \
                 eleven affordable homes and a rooftop residents' garden."
                    .to_string(),
            ),
            completion_date: NaiveDate::from_ymd_opt(2023, 10, 2),
            project_value: Some("£24M".to_string()),
            key_features: Some(vec![
                "Brick-clad reinforced concrete frame".to_string(),
                "Air-source heat pumps throughout".to_string(),
            ]),
            created_at: Some(now),
            updated_at: Some(now),
        },
        Project {
            id: String::new(),
            title: "A14 Overbridge Refurbishment".to_string(),
            category: "Infrastructure".to_string(),
            client: "National Highways".to_string(),
            reference_number: Some("BLC-2031".to_string()),
            location: "Cambridgeshire".to_string(),
            image: ImageRef::Single("/images/projects/a14-deck.jpg".to_string()),
            description: Some(
                "Deck waterproofing, parapet replacement and bearing renewal across \
                 two overbridges under weekend possessions."
                    .to_string(),
            ),
            completion_date: NaiveDate::from_ymd_opt(2025, 3, 28),
            project_value: Some("£3.2M".to_string()),
            key_features: None,
            created_at: Some(now),
            updated_at: Some(now),
        },
        Project {
            id: String::new(),
            title: "Orchard Primary School Extension".to_string(),
            category: "Education".to_string(),
            client: "Swale Borough Council".to_string(),
            reference_number: None,
            location: "Sittingbourne".to_string(),
            image: ImageRef::Gallery(vec![
                "/images/projects/orchard-hall.jpg".to_string(),
            ]),
            description: Some(
                "Four-classroom teaching block and assembly hall extension built \
                 alongside a fully occupied school."
                    .to_string(),
            ),
            completion_date: NaiveDate::from_ymd_opt(2024, 8, 30),
            project_value: Some("£4.7M".to_string()),
            key_features: Some(vec![
                "Cross-laminated timber frame".to_string(),
                "Completed over two summer holidays".to_string(),
            ]),
            created_at: Some(now),
            updated_at: Some(now),
        },
    ];

    entries
        .into_iter()
        .enumerate()
        .map(|(index, mut project)| {
            project.id = seed_id(index);
            project
        })
        .collect()
}
