use super::seed_id;
use crate::models::staff::Staff;
use crate::utils::time;

pub fn seed() -> Vec<Staff> {
    let now = time::now();
    let entries = vec![
        Staff {
            id: String::new(),
            name: "Margaret Okafor".to_string(),
            role: "Managing Director".to_string(),
            photo: "/images/staff/margaret-okafor.jpg".to_string(),
            bio: Some(
                "Founded Brickline in 2004 after fifteen years delivering major \
                 infrastructure schemes across the north of England."
                    .to_string(),
            ),
            department: Some("Board".to_string()),
            email: Some("margaret.okafor@brickline.example".to_string()),
            phone: Some("+44 113 496 0141".to_string()),
            linkedin: Some("https://linkedin.com/in/margaret-okafor".to_string()),
            experience: Some("30+ years".to_string()),
            created_at: Some(now),
            updated_at: Some(now),
        },
        Staff {
            id: String::new(),
            name: "Daniel Whitfield".to_string(),
            role: "Operations Director".to_string(),
            photo: "/images/staff/daniel-whitfield.jpg".to_string(),
            bio: Some(
                "Oversees all live sites and the planning, commercial and delivery \
                 teams behind them."
                    .to_string(),
            ),
            department: Some("Operations".to_string()),
            email: Some("daniel.whitfield@brickline.example".to_string()),
            phone: None,
            linkedin: None,
            experience: Some("22 years".to_string()),
            created_at: Some(now),
            updated_at: Some(now),
        },
        Staff {
            id: String::new(),
            name: "Priya Shah".to_string(),
            role: "Senior Quantity Surveyor".to_string(),
            photo: "/images/staff/priya-shah.jpg".to_string(),
            bio: None,
            department: Some("Commercial".to_string()),
            email: Some("priya.shah@brickline.example".to_string()),
            phone: None,
            linkedin: Some("https://linkedin.com/in/priya-shah-qs".to_string()),
            experience: Some("12 years".to_string()),
            created_at: Some(now),
            updated_at: Some(now),
        },
        Staff {
            id: String::new(),
            name: "Tomasz Kowalski".to_string(),
            role: "Site Manager".to_string(),
            photo: "/images/staff/tomasz-kowalski.jpg".to_string(),
            bio: None,
            department: Some("Operations".to_string()),
            email: None,
            phone: None,
            linkedin: None,
            experience: Some("9 years".to_string()),
            created_at: Some(now),
            updated_at: Some(now),
        },
    ];

    entries
        .into_iter()
        .enumerate()
        .map(|(index, mut member)| {
            member.id = seed_id(index);
            member
        })
        .collect()
}
