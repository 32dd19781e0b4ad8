use crate::infra::{load_service, parse_growth_rate};
use clap::Args;
use salary_insight::config::AppConfig;
use salary_insight::error::AppError;
use salary_insight::workflows::salary::{
    format_amount, write_outcomes, BatchPredictor, CandidateForm, RandomPicker, SalaryCatalog,
    SalaryInsight,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// Highest completed education, e.g. "Master's"
    #[arg(long)]
    pub(crate) education: String,
    /// Job title as listed by the `catalog` command
    #[arg(long)]
    pub(crate) job_title: String,
    /// Years of professional experience
    #[arg(long)]
    pub(crate) experience: u32,
    /// Candidate age in years
    #[arg(long)]
    pub(crate) age: u32,
    #[arg(long, default_value = "Male")]
    pub(crate) gender: String,
    /// Work location: Rural, Suburban or Urban
    #[arg(long)]
    pub(crate) location: String,
    /// Yearly growth percentage (0-20). Defaults to the configured rate.
    #[arg(long, value_parser = parse_growth_rate)]
    pub(crate) growth_rate: Option<f64>,
    /// Override the configured model artifact path
    #[arg(long)]
    pub(crate) model: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV with education, job_title, experience, age, gender, location and an optional growth_rate column
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Where to write results. Prints to stdout when omitted.
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Override the configured model artifact path
    #[arg(long)]
    pub(crate) model: Option<PathBuf>,
}

fn load_config(model: Option<PathBuf>) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::load()?;
    if let Some(model) = model {
        config.model.artifact_path = model;
    }
    Ok(config)
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let PredictArgs {
        education,
        job_title,
        experience,
        age,
        gender,
        location,
        growth_rate,
        model,
    } = args;

    let config = load_config(model)?;
    let service = load_service(&config)?;
    let form = CandidateForm {
        education,
        job_title,
        experience_years: experience,
        age_years: age,
        gender,
        location,
    };

    let insight = service.predict(&form, growth_rate, &mut RandomPicker(rand::rng()))?;
    println!("{}", render_insight(&insight));
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let config = load_config(args.model)?;
    let service = load_service(&config)?;
    let outcomes =
        BatchPredictor::new(&service).run_path(&args.input, &mut RandomPicker(rand::rng()))?;

    match args.output {
        Some(path) => {
            let file = std::fs::File::create(&path)?;
            write_outcomes(file, &outcomes)?;
            let failed = outcomes
                .iter()
                .filter(|outcome| outcome.result.is_err())
                .count();
            println!(
                "Predicted {} of {} candidates -> {}",
                outcomes.len() - failed,
                outcomes.len(),
                path.display()
            );
        }
        None => write_outcomes(std::io::stdout().lock(), &outcomes)?,
    }

    Ok(())
}

pub(crate) fn run_catalog() -> Result<(), AppError> {
    println!("{}", render_catalog(SalaryCatalog::standard()));
    Ok(())
}

pub(crate) fn render_insight(insight: &SalaryInsight) -> String {
    let candidate = &insight.candidate;
    let mut lines = vec![
        "Salary prediction".to_string(),
        format!(
            "Candidate: {} | {} | {} years experience | age {} | {} | {}",
            candidate.job_title.label,
            candidate.education.label,
            candidate.experience_years,
            candidate.age_years,
            candidate.gender.label,
            candidate.location.label
        ),
        format!(
            "Predicted salary: {} ({})",
            format_amount(insight.predicted_salary),
            insight.tier_label
        ),
        format!("Model: {}", insight.model),
        String::new(),
        format!(
            "Growth projection at {}% per year",
            insight.growth_rate_percent
        ),
    ];

    for point in &insight.projection.points {
        lines.push(format!(
            "- Year {}: {}",
            point.year_offset,
            format_amount(point.projected_salary)
        ));
    }

    lines.push(String::new());
    lines.push("Comparison with the ideal profile (normalized)".to_string());
    let comparison = &insight.comparison;
    for (index, axis) in comparison.axes.iter().enumerate() {
        lines.push(format!(
            "- {}: you {:.2} | ideal {:.2}",
            axis.label(),
            comparison.candidate[index],
            comparison.ideal[index]
        ));
    }
    lines.push(insight.summary());

    lines.push(String::new());
    lines.push(format!("Career advice for {}", candidate.job_title.label));
    lines.extend(insight.advice.iter().map(|tip| format!("- {tip}")));

    if let Some(quote) = &insight.quote {
        lines.push(String::new());
        lines.push(quote.render());
    }

    lines.join("\n")
}

pub(crate) fn render_catalog(catalog: &SalaryCatalog) -> String {
    let view = catalog.view();
    let mut lines = vec!["Form options".to_string()];
    for field in &view.fields {
        let placeholder = field
            .placeholder
            .map(|label| format!(" (placeholder: {label})"))
            .unwrap_or_default();
        lines.push(format!(
            "- {}{}: {}",
            field.field_label,
            placeholder,
            field.options.join(", ")
        ));
    }
    lines.push(format!(
        "- Experience: {}-{} years",
        view.experience_range.0, view.experience_range.1
    ));
    lines.push(format!(
        "- Age: {}-{} years",
        view.age_range.0, view.age_range.1
    ));
    lines.join("\n")
}
