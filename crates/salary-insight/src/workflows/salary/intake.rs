use serde::Serialize;
use std::fmt;

use super::catalog::{EncodingTable, FormField, SalaryCatalog};
use super::domain::{CandidateForm, CandidateProfile, EncodedChoice};
use super::service::PredictionError;

/// Required selections still sitting on their placeholder option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingFieldError {
    pub fields: Vec<FormField>,
}

impl MissingFieldError {
    pub fn field_labels(&self) -> Vec<&'static str> {
        self.fields.iter().map(|field| field.label()).collect()
    }
}

impl fmt::Display for MissingFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "please fill in the following fields before submitting: {}",
            self.field_labels().join(", ")
        )
    }
}

impl std::error::Error for MissingFieldError {}

/// Fields whose selection equals the placeholder label, in reporting order.
pub fn missing_fields(catalog: &SalaryCatalog, form: &CandidateForm) -> Vec<FormField> {
    FormField::presence_checked()
        .into_iter()
        .filter(|field| catalog.table(*field).is_sentinel(selection(form, *field)))
        .collect()
}

/// Runs the presence check, then encodes every categorical selection.
pub(crate) fn profile_from_form(
    catalog: &SalaryCatalog,
    form: &CandidateForm,
) -> Result<CandidateProfile, PredictionError> {
    let missing = missing_fields(catalog, form);
    if !missing.is_empty() {
        return Err(PredictionError::MissingFields(MissingFieldError {
            fields: missing,
        }));
    }

    Ok(CandidateProfile {
        education: encode_choice(&catalog.education, &form.education)?,
        job_title: encode_choice(&catalog.job_title, &form.job_title)?,
        experience_years: form.experience_years,
        age_years: form.age_years,
        gender: encode_choice(&catalog.gender, &form.gender)?,
        location: encode_choice(&catalog.location, &form.location)?,
    })
}

fn selection(form: &CandidateForm, field: FormField) -> &str {
    match field {
        FormField::Education => &form.education,
        FormField::Location => &form.location,
        FormField::JobTitle => &form.job_title,
        FormField::Gender => &form.gender,
    }
}

fn encode_choice(table: &EncodingTable, label: &str) -> Result<EncodedChoice, PredictionError> {
    let (label, code) = table.resolve(label)?;
    Ok(EncodedChoice { label, code })
}
