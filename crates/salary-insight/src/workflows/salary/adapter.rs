use super::domain::FeatureVector;

/// Boundary to the pre-trained regression model.
///
/// Implementations receive the fixed six-feature input and return a salary.
/// The service rejects non-finite and negative outputs itself, so adapters only
/// report failures they detect internally.
pub trait SalaryModel: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<f64, AdapterFailure>;

    /// Short identifier surfaced in logs and reports.
    fn describe(&self) -> String {
        "external model".to_string()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdapterFailure {
    #[error("model failed to produce a prediction: {0}")]
    Model(String),
    #[error("model returned a non-finite salary ({0})")]
    NonFinite(f64),
    #[error("model returned a negative salary ({0})")]
    Negative(f64),
}

/// Calls the model and checks the output is a usable salary.
pub(crate) fn checked_predict<M: SalaryModel + ?Sized>(
    model: &M,
    features: &FeatureVector,
) -> Result<f64, AdapterFailure> {
    let salary = model.predict(features)?;
    if !salary.is_finite() {
        return Err(AdapterFailure::NonFinite(salary));
    }
    if salary < 0.0 {
        return Err(AdapterFailure::Negative(salary));
    }
    Ok(salary)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(f64);

    impl SalaryModel for Constant {
        fn predict(&self, _features: &FeatureVector) -> Result<f64, AdapterFailure> {
            Ok(self.0)
        }
    }

    fn features() -> FeatureVector {
        FeatureVector {
            education_level: 2,
            experience: 2,
            location: 1,
            job_title: 3,
            age: 28,
            gender: 0,
        }
    }

    #[test]
    fn passes_through_finite_salary() {
        assert_eq!(checked_predict(&Constant(41_500.0), &features()), Ok(41_500.0));
    }

    #[test]
    fn rejects_nan_and_infinity() {
        assert!(matches!(
            checked_predict(&Constant(f64::NAN), &features()),
            Err(AdapterFailure::NonFinite(_))
        ));
        assert!(matches!(
            checked_predict(&Constant(f64::INFINITY), &features()),
            Err(AdapterFailure::NonFinite(_))
        ));
    }

    #[test]
    fn rejects_negative_salary() {
        assert_eq!(
            checked_predict(&Constant(-1.0), &features()),
            Err(AdapterFailure::Negative(-1.0))
        );
    }
}
