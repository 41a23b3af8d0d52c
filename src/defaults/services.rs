use super::seed_id;
use crate::models::service::Service;
use crate::utils::time;

pub fn seed() -> Vec<Service> {
    let now = time::now();
    let entries = vec![
        Service {
            id: String::new(),
            title: "General Contracting".to_string(),
            description: "Full-scope delivery of commercial and residential builds, \
                          from groundworks to handover, under a single contract."
                .to_string(),
            image: "/images/services/general-contracting.jpg".to_string(),
            features: vec![
                "Fixed-price and target-cost options".to_string(),
                "Directly employed site teams".to_string(),
                "NHBC and CHAS accredited".to_string(),
            ],
            created_at: Some(now),
            updated_at: Some(now),
        },
        Service {
            id: String::new(),
            title: "Design & Build".to_string(),
            description: "Single point of responsibility from concept drawings to \
                          completion, with in-house design coordination."
                .to_string(),
            image: "/images/services/design-build.jpg".to_string(),
            features: vec![
                "RIBA stage 2 onwards".to_string(),
                "BIM level 2 workflows".to_string(),
            ],
            created_at: Some(now),
            updated_at: Some(now),
        },
        Service {
            id: String::new(),
            title: "Civil Engineering".to_string(),
            description: "Roads, drainage, structures and earthworks for public and \
                          private sector clients."
                .to_string(),
            image: "/images/services/civil-engineering.jpg".to_string(),
            features: vec![
                "Section 278 and 38 works".to_string(),
                "Reinforced concrete structures".to_string(),
                "Deep drainage up to 6m".to_string(),
            ],
            created_at: Some(now),
            updated_at: Some(now),
        },
        Service {
            id: String::new(),
            title: "Refurbishment & Fit-Out".to_string(),
            description: "Occupied-building refurbishments, Cat A and Cat B fit-outs \
                          and phased office moves."
                .to_string(),
            image: "/images/services/fit-out.jpg".to_string(),
            features: Vec::new(),
            created_at: Some(now),
            updated_at: Some(now),
        },
    ];

    entries
        .into_iter()
        .enumerate()
        .map(|(index, mut service)| {
            service.id = seed_id(index);
            service
        })
        .collect()
}
