//! Static job postings and certification offerings.

use chrono::NaiveDate;

use crate::models::opportunity::{
    CertificationLevel, CertificationOffering, EmployerSector, Fee, JobPosting,
    OpportunityCatalog,
};

struct JobSeed {
    title: &'static str,
    company: &'static str,
    location: &'static str,
    sector: EmployerSector,
    deadline: (i32, u32, u32),
    experience: &'static str,
    url: &'static str,
    skills: &'static [&'static str],
}

struct CertificationSeed {
    title: &'static str,
    provider: &'static str,
    duration: &'static str,
    level: CertificationLevel,
    fee: Fee,
    url: &'static str,
    skills: &'static [&'static str],
}

const JOB_SEEDS: &[JobSeed] = &[
    JobSeed {
        title: "Software Developer",
        company: "TCS - Tata Consultancy Services",
        location: "Bangalore, Mumbai, Pune",
        sector: EmployerSector::Mnc,
        deadline: (2024, 9, 30),
        experience: "Fresher to 3 years",
        url: "https://careers.tcs.com",
        skills: &["Java", "Python", "React"],
    },
    JobSeed {
        title: "Banking Associate",
        company: "State Bank of India",
        location: "Pan India",
        sector: EmployerSector::Government,
        deadline: (2024, 10, 15),
        experience: "Fresher",
        url: "https://sbi.co.in/careers",
        skills: &["Banking", "Customer Service", "Finance"],
    },
    JobSeed {
        title: "Mechanical Engineer",
        company: "Indian Railways",
        location: "Various Locations",
        sector: EmployerSector::Government,
        deadline: (2024, 9, 25),
        experience: "Diploma/Graduate",
        url: "https://indianrailways.gov.in",
        skills: &["Mechanical Engineering", "Maintenance", "Safety"],
    },
    JobSeed {
        title: "Data Analyst",
        company: "Infosys",
        location: "Hyderabad, Chennai",
        sector: EmployerSector::Mnc,
        deadline: (2024, 10, 5),
        experience: "0-2 years",
        url: "https://infosys.com/careers",
        skills: &["SQL", "Python", "Excel", "Analytics"],
    },
    JobSeed {
        title: "Healthcare Assistant",
        company: "AIIMS Delhi",
        location: "New Delhi",
        sector: EmployerSector::Government,
        deadline: (2024, 9, 28),
        experience: "12th Pass",
        url: "https://aiims.edu/careers",
        skills: &["Patient Care", "Medical Knowledge", "Communication"],
    },
    JobSeed {
        title: "Hotel Management Trainee",
        company: "Taj Hotels",
        location: "Mumbai, Delhi, Goa",
        sector: EmployerSector::Mnc,
        deadline: (2024, 10, 10),
        experience: "Diploma/Graduate",
        url: "https://tajhotels.com/careers",
        skills: &["Hospitality", "Customer Service", "Management"],
    },
];

const CERTIFICATION_SEEDS: &[CertificationSeed] = &[
    CertificationSeed {
        title: "Google Digital Marketing Fundamentals",
        provider: "Google",
        duration: "40 hours",
        level: CertificationLevel::Beginner,
        fee: Fee::Free,
        url: "https://skillshop.withgoogle.com",
        skills: &["Digital Marketing", "SEO", "Analytics"],
    },
    CertificationSeed {
        title: "Microsoft Azure Fundamentals",
        provider: "Microsoft",
        duration: "6-8 hours",
        level: CertificationLevel::Beginner,
        fee: Fee::Inr(3_500),
        url: "https://learn.microsoft.com",
        skills: &["Cloud Computing", "Azure", "DevOps"],
    },
    CertificationSeed {
        title: "Financial Market Operations",
        provider: "NISM (SEBI)",
        duration: "30 hours",
        level: CertificationLevel::Intermediate,
        fee: Fee::Inr(2_000),
        url: "https://nism.ac.in",
        skills: &["Finance", "Trading", "Compliance"],
    },
    CertificationSeed {
        title: "Certified Nursing Assistant",
        provider: "NSDC",
        duration: "6 months",
        level: CertificationLevel::Professional,
        fee: Fee::Inr(15_000),
        url: "https://skillindia.gov.in",
        skills: &["Healthcare", "Patient Care", "Medical Procedures"],
    },
    CertificationSeed {
        title: "AutoCAD Professional",
        provider: "Autodesk",
        duration: "25 hours",
        level: CertificationLevel::Intermediate,
        fee: Fee::Inr(12_000),
        url: "https://autodesk.com/certification",
        skills: &["CAD", "Design", "Engineering Drawing"],
    },
    CertificationSeed {
        title: "Food & Beverage Service",
        provider: "Tourism & Hospitality Skill Council",
        duration: "3 months",
        level: CertificationLevel::Professional,
        fee: Fee::Inr(8_000),
        url: "https://thsc.co.in",
        skills: &["Hospitality", "Service", "Food Safety"],
    },
];

/// Builds the job postings. Seeds with an impossible date are skipped.
pub fn job_postings() -> Vec<JobPosting> {
    JOB_SEEDS
        .iter()
        .filter_map(|seed| {
            let (y, m, d) = seed.deadline;
            let deadline = NaiveDate::from_ymd_opt(y, m, d)?;
            Some(JobPosting {
                title: seed.title.to_string(),
                company: seed.company.to_string(),
                location: seed.location.to_string(),
                sector: seed.sector,
                deadline,
                deadline_label: deadline.format("%b %-d, %Y").to_string(),
                experience: seed.experience.to_string(),
                url: seed.url.to_string(),
                skills: seed.skills.iter().map(|s| s.to_string()).collect(),
            })
        })
        .collect()
}

pub fn certification_offerings() -> Vec<CertificationOffering> {
    CERTIFICATION_SEEDS
        .iter()
        .map(|seed| CertificationOffering {
            title: seed.title.to_string(),
            provider: seed.provider.to_string(),
            duration: seed.duration.to_string(),
            level: seed.level,
            fee: seed.fee,
            fee_label: fee_label(seed.fee),
            url: seed.url.to_string(),
            skills: seed.skills.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}

pub fn opportunity_catalog() -> OpportunityCatalog {
    OpportunityCatalog {
        jobs: job_postings(),
        certifications: certification_offerings(),
    }
}

pub fn fee_label(fee: Fee) -> String {
    match fee {
        Fee::Free => "Free".to_string(),
        Fee::Inr(amount) => format!("₹{}", group_indian(amount)),
    }
}

/// Indian digit grouping: last three digits, then pairs (1,00,000).
fn group_indian(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
