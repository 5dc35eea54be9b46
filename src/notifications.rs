//! The bell dropdown in the navigation bar.
//!
//! Notifications live only for the current visit; nothing here touches
//! the user store. Clearing the list leaves an empty-state marker and
//! hides the unread badge.

use chrono::{DateTime, Duration, Utc};

use crate::models::Notification;

/// Shown in place of the list once every notification is cleared.
pub const EMPTY_MARKER: &str = "No notifications";

/// What a document-level click landed on, for the dismissal rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationClick {
    Bell,
    Panel,
    Outside,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationPanel {
    items: Vec<Notification>,
    open: bool,
}

impl NotificationPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Notification>) -> Self {
        Self { items, open: false }
    }

    /// The starter items every fresh visit sees.
    pub fn seeded() -> Self {
        let now = Utc::now();
        Self::with_items(vec![
            Notification {
                title: "New mentorship request".to_string(),
                body: "Priya Sharma wants to connect with you".to_string(),
                created_at: now - Duration::minutes(10),
                unread: true,
            },
            Notification {
                title: "Session confirmed".to_string(),
                body: "Daniel Okafor accepted your Thursday session".to_string(),
                created_at: now - Duration::hours(2),
                unread: true,
            },
            Notification {
                title: "Profile tip".to_string(),
                body: "Add interests so mentors can find you".to_string(),
                created_at: now - Duration::days(1),
                unread: false,
            },
        ])
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Bell click: open or close the dropdown.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| n.unread).count()
    }

    /// Badge content; `None` means the badge is hidden.
    pub fn badge(&self) -> Option<usize> {
        match self.unread_count() {
            0 => None,
            n => Some(n),
        }
    }

    /// Empty the list. The dropdown stays open so the empty-state marker
    /// is what the user sees next.
    pub fn clear_all(&mut self) {
        self.items.clear();
    }

    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.unread = false;
        }
    }

    /// Document-wide dismissal: a click outside both the bell and the
    /// panel closes the dropdown.
    pub fn document_click(&mut self, target: NotificationClick) {
        if target == NotificationClick::Outside {
            self.open = false;
        }
    }
}

/// Coarse age line under each notification, e.g. "2 hours ago".
pub fn relative_age(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return age_line(minutes, "minute");
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return age_line(hours, "hour");
    }
    age_line(elapsed.num_days(), "day")
}

fn age_line(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, unread: bool) -> Notification {
        Notification {
            title: title.to_string(),
            body: String::new(),
            created_at: Utc::now(),
            unread,
        }
    }

    #[test]
    fn clear_all_leaves_empty_state_and_hides_badge() {
        let mut panel = NotificationPanel::with_items(vec![
            item("one", true),
            item("two", false),
        ]);
        assert_eq!(panel.badge(), Some(1));

        panel.clear_all();

        assert!(panel.is_empty());
        assert_eq!(panel.items().len(), 0);
        assert_eq!(panel.badge(), None);
    }

    #[test]
    fn clear_all_on_empty_panel_is_a_no_op() {
        let mut panel = NotificationPanel::new();
        panel.clear_all();
        assert!(panel.is_empty());
        assert_eq!(panel.badge(), None);
    }

    #[test]
    fn badge_counts_only_unread() {
        let panel = NotificationPanel::with_items(vec![
            item("a", true),
            item("b", true),
            item("c", false),
        ]);
        assert_eq!(panel.unread_count(), 2);
        assert_eq!(panel.badge(), Some(2));
    }

    #[test]
    fn mark_all_read_keeps_items_but_hides_badge() {
        let mut panel = NotificationPanel::with_items(vec![item("a", true), item("b", true)]);
        panel.mark_all_read();

        assert_eq!(panel.items().len(), 2);
        assert_eq!(panel.badge(), None);
    }

    #[test]
    fn bell_toggles_and_outside_click_closes() {
        let mut panel = NotificationPanel::seeded();
        assert!(!panel.is_open());

        panel.toggle();
        assert!(panel.is_open());

        panel.document_click(NotificationClick::Bell);
        panel.document_click(NotificationClick::Panel);
        assert!(panel.is_open());

        panel.document_click(NotificationClick::Outside);
        assert!(!panel.is_open());
    }

    #[test]
    fn seeded_panel_starts_with_unread_items() {
        let panel = NotificationPanel::seeded();
        assert!(!panel.is_empty());
        assert_eq!(panel.badge(), Some(2));
    }

    #[test]
    fn ages_step_through_units() {
        let now = Utc::now();
        assert_eq!(relative_age(now, now), "just now");
        assert_eq!(relative_age(now - Duration::seconds(30), now), "just now");
        assert_eq!(relative_age(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(relative_age(now - Duration::minutes(45), now), "45 minutes ago");
        assert_eq!(relative_age(now - Duration::hours(2), now), "2 hours ago");
        assert_eq!(relative_age(now - Duration::days(1), now), "1 day ago");
        assert_eq!(relative_age(now - Duration::days(6), now), "6 days ago");
    }
}
