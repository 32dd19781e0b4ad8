use crate::workflows::salary::{AdapterFailure, FeatureVector, SalaryModel, FEATURE_COUNT};

use super::artifact::TreeNode;

/// A validated regression tree. Child indices always point past their parent.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionTree {
    nodes: Vec<TreeNode>,
}

impl RegressionTree {
    pub(crate) fn from_validated(nodes: Vec<TreeNode>) -> Self {
        Self { nodes }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn evaluate(&self, inputs: &[f64; FEATURE_COUNT]) -> Result<f64, AdapterFailure> {
        let mut index = 0;
        loop {
            match self.nodes.get(index) {
                Some(TreeNode::Leaf { value }) => return Ok(*value),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = inputs.get(*feature).ok_or_else(|| {
                        AdapterFailure::Model(format!("split references feature {feature}"))
                    })?;
                    index = if *value <= *threshold { *left } else { *right };
                }
                None => {
                    return Err(AdapterFailure::Model(format!(
                        "tree walked to missing node {index}"
                    )))
                }
            }
        }
    }
}

/// Averaging tree ensemble.
#[derive(Debug, Clone, PartialEq)]
pub struct ForestRegressor {
    trees: Vec<RegressionTree>,
}

impl ForestRegressor {
    pub(crate) fn from_validated(trees: Vec<RegressionTree>) -> Self {
        Self { trees }
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }
}

impl SalaryModel for ForestRegressor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, AdapterFailure> {
        if self.trees.is_empty() {
            return Err(AdapterFailure::Model("forest has no trees".to_string()));
        }
        let inputs = features.to_array();
        let mut total = 0.0;
        for tree in &self.trees {
            total += tree.evaluate(&inputs)?;
        }
        Ok(total / self.trees.len() as f64)
    }

    fn describe(&self) -> String {
        format!("random_forest({} trees)", self.trees.len())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegressor {
    intercept: f64,
    coefficients: [f64; FEATURE_COUNT],
}

impl LinearRegressor {
    pub fn new(intercept: f64, coefficients: [f64; FEATURE_COUNT]) -> Self {
        Self {
            intercept,
            coefficients,
        }
    }
}

impl SalaryModel for LinearRegressor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, AdapterFailure> {
        let inputs = features.to_array();
        Ok(self.intercept
            + self
                .coefficients
                .iter()
                .zip(inputs.iter())
                .map(|(weight, value)| weight * value)
                .sum::<f64>())
    }

    fn describe(&self) -> String {
        "linear".to_string()
    }
}

/// Whichever regressor the artifact described.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedModel {
    Forest(ForestRegressor),
    Linear(LinearRegressor),
}

impl SalaryModel for LoadedModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, AdapterFailure> {
        match self {
            LoadedModel::Forest(model) => model.predict(features),
            LoadedModel::Linear(model) => model.predict(features),
        }
    }

    fn describe(&self) -> String {
        match self {
            LoadedModel::Forest(model) => model.describe(),
            LoadedModel::Linear(model) => model.describe(),
        }
    }
}
