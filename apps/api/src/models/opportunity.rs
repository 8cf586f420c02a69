use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployerSector {
    Government,
    Mnc,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub sector: EmployerSector,
    pub deadline: NaiveDate,
    /// e.g. "Sep 30, 2024"
    pub deadline_label: String,
    pub experience: String,
    pub url: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificationLevel {
    Beginner,
    Intermediate,
    Professional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum Fee {
    Free,
    Inr(u32),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificationOffering {
    pub title: String,
    pub provider: String,
    pub duration: String,
    pub level: CertificationLevel,
    pub fee: Fee,
    /// "Free" or e.g. "₹3,500"
    pub fee_label: String,
    pub url: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpportunityCatalog {
    pub jobs: Vec<JobPosting>,
    pub certifications: Vec<CertificationOffering>,
}
