use serde::Deserialize;

/// On-disk model document, tagged by `kind`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum ModelArtifact {
    RandomForest(ForestArtifact),
    Linear(LinearArtifact),
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ForestArtifact {
    pub features: Vec<String>,
    pub trees: Vec<TreeArtifact>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TreeArtifact {
    pub nodes: Vec<TreeNode>,
}

/// Flat node list; node 0 is the root. Samples with `x[feature] <= threshold` go left.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LinearArtifact {
    pub features: Vec<String>,
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}
