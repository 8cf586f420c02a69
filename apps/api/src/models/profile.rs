use serde::{Deserialize, Serialize};

/// The captured qualification + interest pair.
///
/// Both fields are free-form at this boundary. The roadmap resolver treats
/// anything outside the known options as a lookup miss, never as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub qualification: String,
    pub interest: String,
}

impl Profile {
    pub fn new(qualification: impl Into<String>, interest: impl Into<String>) -> Self {
        Self {
            qualification: qualification.into(),
            interest: interest.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Qualification {
    #[serde(rename = "10th")]
    Tenth,
    #[serde(rename = "12th")]
    Twelfth,
    #[serde(rename = "ITI")]
    Iti,
    Diploma,
    Graduate,
}

impl Qualification {
    pub const ALL: [Qualification; 5] = [
        Qualification::Tenth,
        Qualification::Twelfth,
        Qualification::Iti,
        Qualification::Diploma,
        Qualification::Graduate,
    ];

    /// Exact, case-sensitive match against the stored value.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.as_str() == value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Qualification::Tenth => "10th",
            Qualification::Twelfth => "12th",
            Qualification::Iti => "ITI",
            Qualification::Diploma => "Diploma",
            Qualification::Graduate => "Graduate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Qualification::Tenth => "10th Grade",
            Qualification::Twelfth => "12th Grade",
            Qualification::Iti => "ITI (Industrial Training Institute)",
            Qualification::Diploma => "Diploma",
            Qualification::Graduate => "Graduate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interest {
    Technology,
    Healthcare,
    Finance,
    Mechanical,
    Hospitality,
}

impl Interest {
    pub const ALL: [Interest; 5] = [
        Interest::Technology,
        Interest::Healthcare,
        Interest::Finance,
        Interest::Mechanical,
        Interest::Hospitality,
    ];

    /// Exact, case-sensitive match against the stored value.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.as_str() == value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Interest::Technology => "Technology",
            Interest::Healthcare => "Healthcare",
            Interest::Finance => "Finance",
            Interest::Mechanical => "Mechanical",
            Interest::Hospitality => "Hospitality",
        }
    }

    pub fn label(&self) -> &'static str {
        self.as_str()
    }
}

/// A selectable value with its display label.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProfileOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileOptions {
    pub qualifications: Vec<ProfileOption>,
    pub interests: Vec<ProfileOption>,
}

pub fn profile_options() -> ProfileOptions {
    ProfileOptions {
        qualifications: Qualification::ALL
            .iter()
            .map(|q| ProfileOption {
                value: q.as_str(),
                label: q.label(),
            })
            .collect(),
        interests: Interest::ALL
            .iter()
            .map(|i| ProfileOption {
                value: i.as_str(),
                label: i.label(),
            })
            .collect(),
    }
}
