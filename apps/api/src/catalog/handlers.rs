use axum::Json;

use crate::catalog::notifications::notification_feed;
use crate::catalog::opportunities::{
    certification_offerings, job_postings, opportunity_catalog,
};
use crate::models::notification::NotificationFeed;
use crate::models::opportunity::{CertificationOffering, JobPosting, OpportunityCatalog};

/// GET /api/v1/opportunities
pub async fn handle_opportunities() -> Json<OpportunityCatalog> {
    Json(opportunity_catalog())
}

/// GET /api/v1/opportunities/jobs
pub async fn handle_jobs() -> Json<Vec<JobPosting>> {
    Json(job_postings())
}

/// GET /api/v1/opportunities/certifications
pub async fn handle_certifications() -> Json<Vec<CertificationOffering>> {
    Json(certification_offerings())
}

/// GET /api/v1/notifications
pub async fn handle_notifications() -> Json<NotificationFeed> {
    Json(notification_feed())
}
