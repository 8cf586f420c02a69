//! Canned announcements shown in the notification feed. Read-only.

use chrono::Duration;

use crate::models::notification::{Notification, NotificationFeed, NotificationKind};

struct NotificationSeed {
    id: u32,
    title: &'static str,
    message: &'static str,
    kind: NotificationKind,
    urgent: bool,
    age_hours: i64,
    link: &'static str,
    location: Option<&'static str>,
    provider: Option<&'static str>,
}

const SEEDS: &[NotificationSeed] = &[
    NotificationSeed {
        id: 1,
        title: "New Govt Job for Health Assistant",
        message: "AIIMS Delhi is hiring Health Assistants. Apply by Sept 25, 2024.",
        kind: NotificationKind::Job,
        urgent: true,
        age_hours: 2,
        link: "https://aiims.edu/careers",
        location: Some("New Delhi"),
        provider: None,
    },
    NotificationSeed {
        id: 2,
        title: "Free Google Tech Certification",
        message: "Google Digital Marketing Fundamentals course is now available for free enrollment.",
        kind: NotificationKind::Certification,
        urgent: false,
        age_hours: 5,
        link: "https://skillshop.withgoogle.com",
        location: None,
        provider: Some("Google"),
    },
    NotificationSeed {
        id: 3,
        title: "Railways Hiring ITI Electricians",
        message: "Indian Railways is recruiting ITI qualified electricians this week. Don't miss out!",
        kind: NotificationKind::Job,
        urgent: true,
        age_hours: 24,
        link: "https://indianrailways.gov.in",
        location: Some("Various Locations"),
        provider: None,
    },
    NotificationSeed {
        id: 4,
        title: "Microsoft Azure Certification Discount",
        message: "Get 50% off on Microsoft Azure Fundamentals certification until month end.",
        kind: NotificationKind::Certification,
        urgent: false,
        age_hours: 48,
        link: "https://learn.microsoft.com",
        location: None,
        provider: Some("Microsoft"),
    },
    NotificationSeed {
        id: 5,
        title: "TCS Walk-in Interview",
        message: "TCS is conducting walk-in interviews for software developers in Bangalore.",
        kind: NotificationKind::Job,
        urgent: true,
        age_hours: 72,
        link: "https://careers.tcs.com",
        location: Some("Bangalore"),
        provider: None,
    },
];

/// The feed in seed order.
pub fn notification_feed() -> NotificationFeed {
    let notifications: Vec<Notification> = SEEDS
        .iter()
        .map(|seed| {
            let age = Duration::hours(seed.age_hours);
            Notification {
                id: seed.id,
                title: seed.title.to_string(),
                message: seed.message.to_string(),
                kind: seed.kind,
                urgent: seed.urgent,
                age_minutes: age.num_minutes(),
                time: relative_age(age),
                link: seed.link.to_string(),
                location: seed.location.map(str::to_string),
                provider: seed.provider.map(str::to_string),
            }
        })
        .collect();

    NotificationFeed {
        count: notifications.len(),
        notifications,
    }
}

/// "just now", "5 minutes ago", "1 hour ago", "3 days ago".
pub fn relative_age(age: Duration) -> String {
    let (n, unit) = if age.num_days() >= 1 {
        (age.num_days(), "day")
    } else if age.num_hours() >= 1 {
        (age.num_hours(), "hour")
    } else if age.num_minutes() >= 1 {
        (age.num_minutes(), "minute")
    } else {
        return "just now".to_string();
    };
    let plural = if n == 1 { "" } else { "s" };
    format!("{n} {unit}{plural} ago")
}
