// Static catalogue: job postings, certification offerings, announcements.

pub mod handlers;
pub mod notifications;
pub mod opportunities;
