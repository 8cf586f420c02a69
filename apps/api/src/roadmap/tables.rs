//! Static recommendation tables.
//!
//! Course titles and job roles share one grid keyed by (interest, qualification)
//! so the two can never drift apart for the same cell. Certification and growth
//! path depend on interest alone.

use crate::models::profile::{Interest, Qualification};
use crate::models::roadmap::StepCategory;

pub const FALLBACK_COURSE: &str = "Skill Development Course";
pub const FALLBACK_CERTIFICATION: &str = "NSQF Certification";
pub const FALLBACK_JOB_ROLES: &str = "Entry Level Positions";
pub const FALLBACK_GROWTH_PATH: &str = "Career Advancement Path";

/// One cell of the (interest, qualification) grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathwayCell {
    pub course: &'static str,
    pub job_roles: &'static str,
}

/// Per-interest recommendations that ignore qualification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterestTrack {
    pub certification: &'static str,
    pub growth_path: &'static str,
}

const fn cell(course: &'static str, job_roles: &'static str) -> PathwayCell {
    PathwayCell { course, job_roles }
}

pub fn pathway(interest: Interest, qualification: Qualification) -> PathwayCell {
    use Interest::*;
    use Qualification::*;

    match (interest, qualification) {
        (Technology, Tenth) => cell(
            "Basic Computer Skills & Programming Fundamentals",
            "Data Entry Operator, Computer Operator",
        ),
        (Technology, Twelfth) => cell(
            "Web Development & Mobile App Development",
            "Web Developer, Software Tester",
        ),
        (Technology, Iti) => cell(
            "Advanced Programming & Software Development",
            "System Administrator, Technical Support",
        ),
        (Technology, Diploma) => cell(
            "Full Stack Development & Cloud Computing",
            "Software Developer, Network Engineer",
        ),
        (Technology, Graduate) => cell(
            "Advanced Software Engineering & Data Science",
            "Software Engineer, Data Analyst, Project Manager",
        ),

        (Healthcare, Tenth) => cell(
            "Healthcare Assistant Training & First Aid",
            "Healthcare Assistant, Ward Attendant",
        ),
        (Healthcare, Twelfth) => cell(
            "Medical Laboratory Technician Course",
            "Medical Laboratory Assistant, Pharmacy Assistant",
        ),
        (Healthcare, Iti) => cell(
            "Medical Equipment Maintenance",
            "Medical Equipment Technician, Dialysis Technician",
        ),
        (Healthcare, Diploma) => cell(
            "Nursing & Healthcare Management",
            "Staff Nurse, Healthcare Coordinator",
        ),
        (Healthcare, Graduate) => cell(
            "Advanced Healthcare Specialization",
            "Medical Officer, Healthcare Manager, Specialist Nurse",
        ),

        (Finance, Tenth) => cell(
            "Basic Accounting & Financial Literacy",
            "Bank Clerk, Cashier",
        ),
        (Finance, Twelfth) => cell(
            "Banking & Insurance Fundamentals",
            "Banking Associate, Insurance Agent",
        ),
        (Finance, Iti) => cell(
            "Accounting Software & Taxation",
            "Accounting Assistant, Tax Assistant",
        ),
        (Finance, Diploma) => cell(
            "Financial Analysis & Investment Planning",
            "Financial Analyst, Loan Officer",
        ),
        (Finance, Graduate) => cell(
            "Advanced Finance & Risk Management",
            "Investment Advisor, Financial Manager, Bank Manager",
        ),

        (Mechanical, Tenth) => cell(
            "Basic Mechanical Skills & Safety Training",
            "Machine Operator, Maintenance Helper",
        ),
        (Mechanical, Twelfth) => cell(
            "Mechanical Drawing & CAD Software",
            "Mechanical Technician, Quality Inspector",
        ),
        (Mechanical, Iti) => cell(
            "Advanced Machine Operation & Maintenance",
            "Machinist, Mechanical Fitter, Welder",
        ),
        (Mechanical, Diploma) => cell(
            "Mechanical Engineering & Project Management",
            "Mechanical Engineer, Production Supervisor",
        ),
        (Mechanical, Graduate) => cell(
            "Advanced Mechanical Design & Research",
            "Design Engineer, Project Manager, R&D Engineer",
        ),

        (Hospitality, Tenth) => cell(
            "Customer Service & Food Safety Training",
            "Hotel Attendant, Kitchen Helper",
        ),
        (Hospitality, Twelfth) => cell(
            "Hotel Management Fundamentals",
            "Front Desk Associate, Restaurant Server",
        ),
        (Hospitality, Iti) => cell(
            "Culinary Arts & Restaurant Operations",
            "Chef Assistant, Housekeeping Supervisor",
        ),
        (Hospitality, Diploma) => cell(
            "Hotel & Event Management",
            "Hotel Manager, Event Coordinator",
        ),
        (Hospitality, Graduate) => cell(
            "Hospitality Business Management",
            "General Manager, Operations Director, Business Owner",
        ),
    }
}

pub fn track(interest: Interest) -> InterestTrack {
    match interest {
        Interest::Technology => InterestTrack {
            certification: "NSQF Level 4-6: IT Software Development",
            growth_path: "Senior Developer → Tech Lead → Engineering Manager → CTO",
        },
        Interest::Healthcare => InterestTrack {
            certification: "NSQF Level 3-5: Healthcare Services",
            growth_path:
                "Senior Practitioner → Department Head → Medical Director → Chief Medical Officer",
        },
        Interest::Finance => InterestTrack {
            certification: "NSQF Level 4-6: Banking & Financial Services",
            growth_path: "Senior Analyst → Finance Manager → Director → CFO",
        },
        Interest::Mechanical => InterestTrack {
            certification: "NSQF Level 3-5: Mechanical Engineering",
            growth_path:
                "Senior Engineer → Project Manager → Engineering Director → VP Engineering",
        },
        Interest::Hospitality => InterestTrack {
            certification: "NSQF Level 3-5: Tourism & Hospitality",
            growth_path: "Department Manager → General Manager → Regional Director → CEO",
        },
    }
}

/// Fixed description shown under each step, independent of the profile.
pub fn description(category: StepCategory) -> &'static str {
    match category {
        StepCategory::Education => "Build foundational skills and knowledge in your chosen field",
        StepCategory::Certification => {
            "Obtain industry-recognized certification to validate your skills"
        }
        StepCategory::Jobs => "Explore entry-level positions matching your profile",
        StepCategory::Growth => {
            "Long-term career advancement opportunities and leadership roles"
        }
    }
}

/// Fixed (label, url) references per step. Growth links are placeholders.
pub fn references(category: StepCategory) -> &'static [(&'static str, &'static str)] {
    match category {
        StepCategory::Education => &[
            ("Coursera Courses", "https://coursera.org"),
            ("edX Programs", "https://edx.org"),
        ],
        StepCategory::Certification => &[
            ("Skill India Portal", "https://skillindia.gov.in"),
            ("NSDC Certification", "https://nsdcindia.org"),
        ],
        StepCategory::Jobs => &[
            ("Naukri.com", "https://naukri.com"),
            ("LinkedIn Jobs", "https://linkedin.com/jobs"),
            ("Government Jobs", "https://sarkariresult.com"),
        ],
        StepCategory::Growth => &[
            ("Professional Development", "#"),
            ("Leadership Programs", "#"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_grid_cell_is_distinct() {
        let mut courses = HashSet::new();
        let mut roles = HashSet::new();
        for interest in Interest::ALL {
            for qualification in Qualification::ALL {
                let c = pathway(interest, qualification);
                assert!(courses.insert(c.course), "duplicate course {}", c.course);
                assert!(roles.insert(c.job_roles), "duplicate roles {}", c.job_roles);
            }
        }
        assert_eq!(courses.len(), 25);
    }

    #[test]
    fn test_tracks_are_nsqf_labelled() {
        for interest in Interest::ALL {
            assert!(track(interest).certification.starts_with("NSQF Level"));
        }
    }

    #[test]
    fn test_reference_counts() {
        assert_eq!(references(StepCategory::Education).len(), 2);
        assert_eq!(references(StepCategory::Certification).len(), 2);
        assert_eq!(references(StepCategory::Jobs).len(), 3);
        assert!(references(StepCategory::Growth)
            .iter()
            .all(|(_, url)| *url == "#"));
    }
}
