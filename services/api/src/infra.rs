use metrics_exporter_prometheus::PrometheusHandle;
use salary_insight::config::{self, AppConfig};
use salary_insight::error::AppError;
use salary_insight::workflows::model::{LoadedModel, ModelArtifactLoader};
use salary_insight::workflows::salary::{
    PredictionSettings, SalaryCatalog, SalaryPredictionService,
};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type ModelService = SalaryPredictionService<LoadedModel>;

/// Loads the artifact named by the configuration and wraps it in a service.
pub(crate) fn load_service(config: &AppConfig) -> Result<ModelService, AppError> {
    let model = ModelArtifactLoader::from_path(&config.model.artifact_path)?;
    let settings = PredictionSettings::from_config(&config.projection, SalaryCatalog::standard())?;
    Ok(SalaryPredictionService::new(Arc::new(model), settings))
}

/// clap value parser sharing the library's range check.
pub(crate) fn parse_growth_rate(raw: &str) -> Result<f64, String> {
    config::parse_growth_rate(raw).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_rate_bounds_are_inclusive() {
        assert_eq!(parse_growth_rate("0"), Ok(0.0));
        assert_eq!(parse_growth_rate(" 20 "), Ok(20.0));
        assert!(parse_growth_rate("20.5").is_err());
        assert!(parse_growth_rate("-1").is_err());
        assert!(parse_growth_rate("fast").is_err());
        assert!(parse_growth_rate("NaN").is_err());
    }
}
