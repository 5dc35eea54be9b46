//! Mentorship hub roster and filtering.
//!
//! The hub shows mentor and student cards behind a role tab and a
//! category dropdown. Both filters apply together: a card is visible only
//! when it matches the selected role and, if one is chosen, the selected
//! category.

use crate::models::{PersonCard, Role};

/// Cards visible for a role tab and an optional category selection. An
/// empty category selection means "All Categories".
pub fn filter_cards<'a>(
    cards: &'a [PersonCard],
    role: Role,
    category: Option<&str>,
) -> Vec<&'a PersonCard> {
    cards
        .iter()
        .filter(|card| card.role == role)
        .filter(|card| match category {
            Some(wanted) => card.category == wanted,
            None => true,
        })
        .collect()
}

/// Distinct categories across the roster, sorted, for the filter
/// dropdown.
pub fn categories(cards: &[PersonCard]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for card in cards {
        if !out.contains(&card.category) {
            out.push(card.category.clone());
        }
    }
    out.sort();
    out
}

/// Initials shown in the request modal's avatar circle: the first
/// character of each word of the name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Toast line after a session request goes out.
pub fn request_confirmation(name: &str) -> String {
    format!(
        "Request sent to {}! They'll respond within 24 hours.",
        name
    )
}

/// The built-in roster the hub page serves.
pub fn demo_roster() -> Vec<PersonCard> {
    fn card(
        name: &str,
        role: Role,
        category: &str,
        headline: &str,
        skills: &[&str],
        year: &str,
    ) -> PersonCard {
        PersonCard {
            name: name.to_string(),
            role,
            category: category.to_string(),
            headline: headline.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            year: year.to_string(),
        }
    }

    vec![
        card(
            "Priya Sharma",
            Role::Mentor,
            "Web Development",
            "Full-stack developer who loves walking beginners through their first deploy",
            &["React", "Node.js", "PostgreSQL"],
            "Graduate",
        ),
        card(
            "Daniel Okafor",
            Role::Mentor,
            "Career Growth",
            "Two internships in, happy to review resumes and mock-interview",
            &["Interview Prep", "Resume Review"],
            "4th Year",
        ),
        card(
            "Mei Chen",
            Role::Mentor,
            "Data Science",
            "Kaggle regular, runs the campus ML reading group",
            &["Python", "Pandas", "scikit-learn"],
            "Graduate",
        ),
        card(
            "Arjun Patel",
            Role::Mentor,
            "Academics",
            "Peer tutor for algorithms and discrete math",
            &["Algorithms", "Discrete Math"],
            "3rd Year",
        ),
        card(
            "Sofia Reyes",
            Role::Student,
            "Web Development",
            "Building my first portfolio site, looking for code review",
            &["HTML", "CSS", "JavaScript"],
            "1st Year",
        ),
        card(
            "Liam O'Brien",
            Role::Student,
            "Career Growth",
            "Hunting for a first internship, need direction",
            &["Java", "Git"],
            "2nd Year",
        ),
        card(
            "Noor Haddad",
            Role::Student,
            "Data Science",
            "Stats major trying to break into applied ML",
            &["R", "Statistics"],
            "3rd Year",
        ),
        card(
            "Tomás Silva",
            Role::Student,
            "Academics",
            "Looking for a study partner for systems courses",
            &["C", "Linux"],
            "2nd Year",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_tab_splits_the_roster() {
        let roster = demo_roster();
        let mentors = filter_cards(&roster, Role::Mentor, None);
        let students = filter_cards(&roster, Role::Student, None);

        assert_eq!(mentors.len() + students.len(), roster.len());
        assert!(mentors.iter().all(|c| c.role == Role::Mentor));
        assert!(students.iter().all(|c| c.role == Role::Student));
    }

    #[test]
    fn category_narrows_within_the_selected_role() {
        let roster = demo_roster();
        let visible = filter_cards(&roster, Role::Mentor, Some("Web Development"));

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Priya Sharma");
    }

    #[test]
    fn unknown_category_matches_nothing() {
        let roster = demo_roster();
        assert!(filter_cards(&roster, Role::Mentor, Some("Basket Weaving")).is_empty());
    }

    #[test]
    fn categories_are_unique_and_sorted() {
        let cats = categories(&demo_roster());
        assert_eq!(
            cats,
            vec!["Academics", "Career Growth", "Data Science", "Web Development"]
        );
    }

    #[test]
    fn initials_take_one_character_per_word() {
        assert_eq!(initials("Priya Sharma"), "PS");
        assert_eq!(initials("Liam O'Brien"), "LO");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn confirmation_names_the_recipient() {
        assert_eq!(
            request_confirmation("Mei Chen"),
            "Request sent to Mei Chen! They'll respond within 24 hours."
        );
    }
}
