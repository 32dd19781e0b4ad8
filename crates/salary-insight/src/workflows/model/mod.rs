//! Loading of the pre-trained salary regression model.
//!
//! The artifact is produced by an external training job and exported as JSON.
//! It is parsed and validated once at startup; the resulting [`LoadedModel`]
//! is immutable and shared read-only across prediction cycles.

mod artifact;
mod regressor;

pub use artifact::TreeNode;
pub use regressor::{ForestRegressor, LinearRegressor, LoadedModel, RegressionTree};

use crate::workflows::salary::{SalaryModel, FEATURE_COUNT, FEATURE_NAMES};
use artifact::{ForestArtifact, LinearArtifact, ModelArtifact, TreeArtifact};
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug)]
pub enum ModelArtifactError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Schema(String),
}

impl std::fmt::Display for ModelArtifactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelArtifactError::Io(err) => write!(f, "failed to read model artifact: {}", err),
            ModelArtifactError::Json(err) => write!(f, "model artifact is not valid JSON: {}", err),
            ModelArtifactError::Schema(detail) => {
                write!(f, "model artifact does not match the salary schema: {}", detail)
            }
        }
    }
}

impl std::error::Error for ModelArtifactError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelArtifactError::Io(err) => Some(err),
            ModelArtifactError::Json(err) => Some(err),
            ModelArtifactError::Schema(_) => None,
        }
    }
}

impl From<std::io::Error> for ModelArtifactError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ModelArtifactError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

pub struct ModelArtifactLoader;

impl ModelArtifactLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<LoadedModel, ModelArtifactError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let model = Self::from_reader(std::io::BufReader::new(file))?;
        info!(path = %path.display(), model = %model.describe(), "salary model loaded");
        Ok(model)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<LoadedModel, ModelArtifactError> {
        let artifact: ModelArtifact = serde_json::from_reader(reader)?;
        match artifact {
            ModelArtifact::RandomForest(forest) => build_forest(forest).map(LoadedModel::Forest),
            ModelArtifact::Linear(linear) => build_linear(linear).map(LoadedModel::Linear),
        }
    }
}

fn check_features(features: &[String]) -> Result<(), ModelArtifactError> {
    let matches = features.len() == FEATURE_COUNT
        && features
            .iter()
            .zip(FEATURE_NAMES.iter())
            .all(|(actual, expected)| actual == expected);
    if matches {
        Ok(())
    } else {
        Err(ModelArtifactError::Schema(format!(
            "expected features [{}], found [{}]",
            FEATURE_NAMES.join(", "),
            features.join(", ")
        )))
    }
}

fn build_forest(forest: ForestArtifact) -> Result<ForestRegressor, ModelArtifactError> {
    check_features(&forest.features)?;
    if forest.trees.is_empty() {
        return Err(ModelArtifactError::Schema("forest has no trees".to_string()));
    }

    let trees = forest
        .trees
        .into_iter()
        .enumerate()
        .map(|(index, tree)| build_tree(index, tree))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ForestRegressor::from_validated(trees))
}

fn build_tree(tree_index: usize, tree: TreeArtifact) -> Result<RegressionTree, ModelArtifactError> {
    let schema = |detail: String| ModelArtifactError::Schema(format!("tree {tree_index}: {detail}"));

    if tree.nodes.is_empty() {
        return Err(schema("has no nodes".to_string()));
    }

    let node_count = tree.nodes.len();
    for (index, node) in tree.nodes.iter().enumerate() {
        match *node {
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                if feature >= FEATURE_COUNT {
                    return Err(schema(format!(
                        "node {index} splits on unknown feature {feature}"
                    )));
                }
                if !threshold.is_finite() {
                    return Err(schema(format!("node {index} has a non-finite threshold")));
                }
                for child in [left, right] {
                    if child <= index || child >= node_count {
                        return Err(schema(format!(
                            "node {index} points to invalid child {child}"
                        )));
                    }
                }
            }
            TreeNode::Leaf { value } => {
                if !value.is_finite() {
                    return Err(schema(format!("leaf {index} has a non-finite value")));
                }
            }
        }
    }

    Ok(RegressionTree::from_validated(tree.nodes))
}

fn build_linear(linear: LinearArtifact) -> Result<LinearRegressor, ModelArtifactError> {
    check_features(&linear.features)?;
    let coefficients: [f64; FEATURE_COUNT] =
        linear.coefficients.as_slice().try_into().map_err(|_| {
            ModelArtifactError::Schema(format!(
                "expected {FEATURE_COUNT} coefficients, found {}",
                linear.coefficients.len()
            ))
        })?;
    if !linear.intercept.is_finite() || coefficients.iter().any(|weight| !weight.is_finite()) {
        return Err(ModelArtifactError::Schema(
            "linear weights must be finite".to_string(),
        ));
    }
    Ok(LinearRegressor::new(linear.intercept, coefficients))
}
