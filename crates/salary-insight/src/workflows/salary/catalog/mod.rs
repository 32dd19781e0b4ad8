//! Read-only lookup data behind the intake form: encoding tables, ideal
//! profiles per job title, career advice, and motivational quotes.

mod encoding;
mod guidance;
mod ideal;

pub use encoding::{EncodingTable, FormField, UnknownLabelError, SENTINEL_CODE};
pub use guidance::{
    select_quote, CareerGuidance, FixedPicker, Quote, QuotePicker, RandomPicker, DEFAULT_ADVICE,
};
pub use ideal::{IdealProfileTable, ProfileAxes, DEFAULT_IDEAL_PROFILE};

use serde::Serialize;
use std::sync::OnceLock;

/// Slider bounds of the intake form.
pub const EXPERIENCE_RANGE: (u32, u32) = (0, 40);
pub const AGE_RANGE: (u32, u32) = (18, 65);

#[derive(Debug, Clone)]
pub struct SalaryCatalog {
    pub education: EncodingTable,
    pub location: EncodingTable,
    pub job_title: EncodingTable,
    pub gender: EncodingTable,
    pub ideal_profiles: IdealProfileTable,
    pub guidance: CareerGuidance,
}

impl SalaryCatalog {
    pub fn standard() -> &'static SalaryCatalog {
        static CATALOG: OnceLock<SalaryCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| SalaryCatalog {
            education: EncodingTable::from_static(
                FormField::Education,
                Some("Enter Education"),
                encoding::EDUCATION,
            ),
            location: EncodingTable::from_static(
                FormField::Location,
                Some("Enter Location"),
                encoding::LOCATION,
            ),
            job_title: EncodingTable::from_static(
                FormField::JobTitle,
                Some("Enter Job Title"),
                encoding::JOB_TITLE,
            ),
            gender: EncodingTable::from_static(FormField::Gender, None, encoding::GENDER),
            ideal_profiles: IdealProfileTable::standard(),
            guidance: CareerGuidance::standard(),
        })
    }

    pub fn table(&self, field: FormField) -> &EncodingTable {
        match field {
            FormField::Education => &self.education,
            FormField::Location => &self.location,
            FormField::JobTitle => &self.job_title,
            FormField::Gender => &self.gender,
        }
    }

    /// Option lists handed to form renderers.
    pub fn view(&self) -> CatalogView {
        let fields = [
            FormField::Education,
            FormField::JobTitle,
            FormField::Location,
            FormField::Gender,
        ]
        .into_iter()
        .map(|field| {
            let table = self.table(field);
            FieldOptionsView {
                field,
                field_label: field.label(),
                placeholder: table.sentinel(),
                options: table.choices(),
            }
        })
        .collect();

        CatalogView {
            fields,
            experience_range: EXPERIENCE_RANGE,
            age_range: AGE_RANGE,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldOptionsView {
    pub field: FormField,
    pub field_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    pub options: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub fields: Vec<FieldOptionsView>,
    pub experience_range: (u32, u32),
    pub age_range: (u32, u32),
}
