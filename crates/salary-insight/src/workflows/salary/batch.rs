//! CSV-driven prediction runs: one cycle per row, failures reported per row.

use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;

use super::adapter::SalaryModel;
use super::catalog::QuotePicker;
use super::domain::CandidateForm;
use super::report::SalaryInsight;
use super::service::{PredictionError, SalaryPredictionService};

#[derive(Debug)]
pub enum BatchError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for BatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchError::Io(err) => write!(f, "failed to access batch file: {}", err),
            BatchError::Csv(err) => write!(f, "invalid candidate CSV data: {}", err),
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchError::Io(err) => Some(err),
            BatchError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for BatchError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for BatchError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Deserialize)]
struct CandidateRow {
    education: String,
    job_title: String,
    experience: u32,
    age: u32,
    gender: String,
    location: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    growth_rate: Option<f64>,
}

impl CandidateRow {
    fn into_form(self) -> (CandidateForm, Option<f64>) {
        let form = CandidateForm {
            education: self.education,
            job_title: self.job_title,
            experience_years: self.experience,
            age_years: self.age,
            gender: self.gender,
            location: self.location,
        };
        (form, self.growth_rate)
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse::<f64>().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Result of one CSV row.
#[derive(Debug)]
pub struct BatchOutcome {
    /// 1-based data row number (header excluded).
    pub row: usize,
    /// Job title as submitted, so failed rows stay identifiable.
    pub job_title: String,
    pub result: Result<SalaryInsight, PredictionError>,
}

#[derive(Debug, Serialize)]
struct OutcomeRecord<'a> {
    row: usize,
    job_title: &'a str,
    predicted_salary: Option<String>,
    tier: Option<&'static str>,
    aligned: Option<bool>,
    final_year_salary: Option<String>,
    status: String,
}

/// Runs every candidate row through the service.
pub struct BatchPredictor<'a, M: ?Sized> {
    service: &'a SalaryPredictionService<M>,
}

impl<'a, M> BatchPredictor<'a, M>
where
    M: SalaryModel + ?Sized,
{
    pub fn new(service: &'a SalaryPredictionService<M>) -> Self {
        Self { service }
    }

    pub fn run_path<P, Q>(&self, path: P, picker: &mut Q) -> Result<Vec<BatchOutcome>, BatchError>
    where
        P: AsRef<Path>,
        Q: QuotePicker + ?Sized,
    {
        let file = std::fs::File::open(path)?;
        self.run_reader(file, picker)
    }

    /// Malformed CSV aborts the run; per-row prediction failures do not.
    pub fn run_reader<R, Q>(&self, reader: R, picker: &mut Q) -> Result<Vec<BatchOutcome>, BatchError>
    where
        R: Read,
        Q: QuotePicker + ?Sized,
    {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut outcomes = Vec::new();

        for (index, row) in csv_reader.deserialize::<CandidateRow>().enumerate() {
            let (form, growth_rate) = row?.into_form();
            let result = self.service.predict(&form, growth_rate, picker);
            outcomes.push(BatchOutcome {
                row: index + 1,
                job_title: form.job_title,
                result,
            });
        }

        Ok(outcomes)
    }
}

pub fn write_outcomes<W: Write>(writer: W, outcomes: &[BatchOutcome]) -> Result<(), BatchError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for outcome in outcomes {
        let record = match &outcome.result {
            Ok(insight) => OutcomeRecord {
                row: outcome.row,
                job_title: &outcome.job_title,
                predicted_salary: Some(format!("{:.2}", insight.predicted_salary)),
                tier: Some(insight.tier_label),
                aligned: Some(insight.comparison.aligned),
                final_year_salary: insight
                    .projection
                    .last()
                    .map(|salary| format!("{salary:.2}")),
                status: "ok".to_string(),
            },
            Err(err) => OutcomeRecord {
                row: outcome.row,
                job_title: &outcome.job_title,
                predicted_salary: None,
                tier: None,
                aligned: None,
                final_year_salary: None,
                status: err.to_string(),
            },
        };
        csv_writer.serialize(record)?;
    }

    csv_writer.flush()?;
    Ok(())
}
