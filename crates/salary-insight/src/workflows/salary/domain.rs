use serde::{Deserialize, Serialize};

use super::catalog::ProfileAxes;

/// Raw selections as they arrive from the intake form.
///
/// Omitted categorical fields deserialize to their placeholder option so the
/// presence check reports them instead of a parse error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateForm {
    #[serde(default = "placeholder_education")]
    pub education: String,
    #[serde(default = "placeholder_job_title")]
    pub job_title: String,
    #[serde(default = "default_experience")]
    pub experience_years: u32,
    #[serde(default = "default_age")]
    pub age_years: u32,
    #[serde(default = "default_gender")]
    pub gender: String,
    #[serde(default = "placeholder_location")]
    pub location: String,
}

impl Default for CandidateForm {
    fn default() -> Self {
        Self {
            education: placeholder_education(),
            job_title: placeholder_job_title(),
            experience_years: default_experience(),
            age_years: default_age(),
            gender: default_gender(),
            location: placeholder_location(),
        }
    }
}

fn placeholder_education() -> String {
    "Enter Education".to_string()
}

fn placeholder_job_title() -> String {
    "Enter Job Title".to_string()
}

fn placeholder_location() -> String {
    "Enter Location".to_string()
}

fn default_gender() -> String {
    "Male".to_string()
}

fn default_experience() -> u32 {
    2
}

fn default_age() -> u32 {
    24
}

/// A label together with the code it encodes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EncodedChoice {
    pub label: &'static str,
    pub code: u32,
}

/// Validated, encoded candidate. Immutable for the rest of the cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateProfile {
    pub education: EncodedChoice,
    pub job_title: EncodedChoice,
    pub experience_years: u32,
    pub age_years: u32,
    pub gender: EncodedChoice,
    pub location: EncodedChoice,
}

impl CandidateProfile {
    pub fn axes(&self) -> ProfileAxes {
        ProfileAxes::new(self.education.code, self.experience_years, self.age_years)
    }

    pub fn features(&self) -> FeatureVector {
        FeatureVector {
            education_level: self.education.code,
            experience: self.experience_years,
            location: self.location.code,
            job_title: self.job_title.code,
            age: self.age_years,
            gender: self.gender.code,
        }
    }
}

pub const FEATURE_COUNT: usize = 6;

/// Column names of the model input, in the order the model was trained on.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "education_level",
    "experience",
    "location",
    "job_title",
    "age",
    "gender",
];

/// Fixed-arity model input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub education_level: u32,
    pub experience: u32,
    pub location: u32,
    pub job_title: u32,
    pub age: u32,
    pub gender: u32,
}

impl FeatureVector {
    /// Values ordered as [`FEATURE_NAMES`].
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            f64::from(self.education_level),
            f64::from(self.experience),
            f64::from(self.location),
            f64::from(self.job_title),
            f64::from(self.age),
            f64::from(self.gender),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_fields_fall_back_to_placeholders() {
        let form: CandidateForm =
            serde_json::from_str(r#"{"education": "PhD"}"#).expect("form parses");
        assert_eq!(form.education, "PhD");
        assert_eq!(form.job_title, "Enter Job Title");
        assert_eq!(form.location, "Enter Location");
        assert_eq!(form.gender, "Male");
        assert_eq!(form.experience_years, 2);
        assert_eq!(form.age_years, 24);
    }

    #[test]
    fn feature_array_follows_training_order() {
        let features = FeatureVector {
            education_level: 3,
            experience: 5,
            location: 2,
            job_title: 4,
            age: 31,
            gender: 1,
        };
        assert_eq!(features.to_array(), [3.0, 5.0, 2.0, 4.0, 31.0, 1.0]);
    }
}
