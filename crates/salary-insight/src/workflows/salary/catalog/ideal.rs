use serde::{Deserialize, Serialize};

/// Education / experience / age triple used on both sides of the profile comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileAxes {
    pub education_level: u32,
    pub experience: u32,
    pub age: u32,
}

impl ProfileAxes {
    pub const fn new(education_level: u32, experience: u32, age: u32) -> Self {
        Self {
            education_level,
            experience,
            age,
        }
    }
}

/// Reference triple substituted for job titles without a dedicated entry.
pub const DEFAULT_IDEAL_PROFILE: ProfileAxes = ProfileAxes::new(2, 5, 30);

const IDEAL_PROFILES: &[(&str, ProfileAxes)] = &[
    ("Data Scientist", ProfileAxes::new(3, 5, 35)),
    ("Software Engineer", ProfileAxes::new(2, 4, 30)),
    ("Product Manager", ProfileAxes::new(2, 6, 35)),
    ("HR Manager", ProfileAxes::new(2, 7, 40)),
    ("Data Analyst", ProfileAxes::new(2, 3, 28)),
    ("Director", ProfileAxes::new(3, 15, 45)),
    ("Clerk", ProfileAxes::new(1, 2, 30)),
    ("Customer Support", ProfileAxes::new(1, 2, 28)),
    ("Technician", ProfileAxes::new(1, 3, 30)),
];

/// Static job title → ideal profile lookup with a fixed fallback.
#[derive(Debug, Clone)]
pub struct IdealProfileTable {
    entries: &'static [(&'static str, ProfileAxes)],
    fallback: ProfileAxes,
}

impl IdealProfileTable {
    pub(crate) const fn standard() -> Self {
        Self {
            entries: IDEAL_PROFILES,
            fallback: DEFAULT_IDEAL_PROFILE,
        }
    }

    /// Exact entry for a job title, if one is configured.
    pub fn get(&self, job_title: &str) -> Option<ProfileAxes> {
        self.entries
            .iter()
            .find(|(title, _)| *title == job_title)
            .map(|(_, profile)| *profile)
    }

    /// Entry for a job title, substituting the default triple when absent.
    pub fn lookup(&self, job_title: &str) -> ProfileAxes {
        self.get(job_title).unwrap_or(self.fallback)
    }

    pub fn fallback(&self) -> ProfileAxes {
        self.fallback
    }

    pub fn titles(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(title, _)| *title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_configured_entry() {
        let table = IdealProfileTable::standard();
        assert_eq!(table.lookup("Director"), ProfileAxes::new(3, 15, 45));
        assert_eq!(table.get("Data Analyst"), Some(ProfileAxes::new(2, 3, 28)));
    }

    #[test]
    fn lookup_falls_back_for_unknown_title() {
        let table = IdealProfileTable::standard();
        assert_eq!(table.get("UnknownTitle"), None);
        assert_eq!(table.lookup("UnknownTitle"), ProfileAxes::new(2, 5, 30));
        assert_eq!(table.fallback(), DEFAULT_IDEAL_PROFILE);
    }
}
