//! Hand-authored fallback content for the public site.
//!
//! Seed rows carry synthetic `default-<index>` ids and are stamped with the
//! current time on every call; they are decorative, never persisted, and
//! never shown in the dashboard.

pub mod projects;
pub mod services;
pub mod staff;
pub mod vacancies;

pub(crate) fn seed_id(index: usize) -> String {
    format!("default-{}", index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_follow_the_default_index_form() {
        for (index, project) in projects::seed().iter().enumerate() {
            assert_eq!(project.id, format!("default-{}", index));
        }
        for (index, vacancy) in vacancies::seed().iter().enumerate() {
            assert_eq!(vacancy.id, format!("default-{}", index));
        }
    }

    #[test]
    fn consecutive_calls_agree_on_domain_fields() {
        let first = projects::seed();
        let second = projects::seed();
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.title, b.title);
            assert_eq!(a.category, b.category);
            assert_eq!(a.client, b.client);
            assert_eq!(a.location, b.location);
            assert_eq!(a.image, b.image);
            assert_eq!(a.key_features, b.key_features);
        }

        let first = staff::seed();
        let second = staff::seed();
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.role, b.role);
            assert_eq!(a.email, b.email);
        }
    }

    #[test]
    fn timestamps_are_stamped_fresh_per_call() {
        let seeded = services::seed();
        for service in &seeded {
            assert!(service.created_at.is_some());
            assert!(service.updated_at.is_some());
        }
    }

    #[test]
    fn active_seed_is_the_client_side_filter_of_the_full_seed() {
        let all = vacancies::seed();
        let active = vacancies::active_seed();
        assert_eq!(active.len(), 3);
        assert!(active.iter().all(|v| v.is_active));
        assert!(active.iter().all(|v| v.title != "Quantity Surveyor"));
        assert_eq!(
            active.len(),
            all.iter().filter(|v| v.is_active).count()
        );
    }
}
