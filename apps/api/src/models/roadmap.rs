use serde::{Deserialize, Serialize};

use crate::models::profile::Profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepCategory {
    Education,
    Certification,
    Jobs,
    Growth,
}

impl StepCategory {
    /// Categories in roadmap order; ordinal = index + 1.
    pub const ORDER: [StepCategory; 4] = [
        StepCategory::Education,
        StepCategory::Certification,
        StepCategory::Jobs,
        StepCategory::Growth,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub ordinal: u8,
    pub category: StepCategory,
    pub title: String,
    pub description: String,
    pub references: Vec<ReferenceLink>,
}

/// Resolved roadmap for a stored profile, as returned by the display endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roadmap {
    pub profile: Profile,
    pub steps: [RoadmapStep; 4],
}
