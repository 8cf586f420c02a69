//! Profile → roadmap resolution.
//!
//! Four independent lookups, each falling back to a generic label on a miss.
//! Total over any pair of strings: always exactly four steps, never an error.

use crate::models::profile::{Interest, Profile, Qualification};
use crate::models::roadmap::{ReferenceLink, RoadmapStep, StepCategory};
use crate::roadmap::tables::{
    self, FALLBACK_CERTIFICATION, FALLBACK_COURSE, FALLBACK_GROWTH_PATH, FALLBACK_JOB_ROLES,
};

pub fn suggested_course(qualification: &str, interest: &str) -> &'static str {
    grid_cell(qualification, interest).map_or(FALLBACK_COURSE, |c| c.course)
}

pub fn certification(interest: &str) -> &'static str {
    Interest::from_value(interest).map_or(FALLBACK_CERTIFICATION, |i| {
        tables::track(i).certification
    })
}

pub fn job_roles(qualification: &str, interest: &str) -> &'static str {
    grid_cell(qualification, interest).map_or(FALLBACK_JOB_ROLES, |c| c.job_roles)
}

pub fn growth_path(interest: &str) -> &'static str {
    Interest::from_value(interest).map_or(FALLBACK_GROWTH_PATH, |i| tables::track(i).growth_path)
}

fn grid_cell(qualification: &str, interest: &str) -> Option<tables::PathwayCell> {
    let interest = Interest::from_value(interest)?;
    let qualification = Qualification::from_value(qualification)?;
    Some(tables::pathway(interest, qualification))
}

/// Resolves a profile into its four roadmap steps, ordered
/// education → certification → jobs → growth.
pub fn resolve(profile: &Profile) -> [RoadmapStep; 4] {
    let Profile {
        qualification,
        interest,
    } = profile;

    let title_for = |category: StepCategory| match category {
        StepCategory::Education => suggested_course(qualification, interest),
        StepCategory::Certification => certification(interest),
        StepCategory::Jobs => job_roles(qualification, interest),
        StepCategory::Growth => growth_path(interest),
    };

    // ordinal = position in StepCategory::ORDER, 1-based
    std::array::from_fn(|i| {
        let category = StepCategory::ORDER[i];
        build_step((i + 1) as u8, category, title_for(category))
    })
}

fn build_step(ordinal: u8, category: StepCategory, title: &str) -> RoadmapStep {
    RoadmapStep {
        ordinal,
        category,
        title: title.to_string(),
        description: tables::description(category).to_string(),
        references: tables::references(category)
            .iter()
            .map(|(label, url)| ReferenceLink {
                label: label.to_string(),
                url: url.to_string(),
            })
            .collect(),
    }
}
