use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading serialized scoring artifacts
///
/// All of these are startup failures: a bad artifact is reported before the
/// service accepts traffic, never swallowed per-row at prediction time.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed artifact {path}: {reason}")]
    Malformed { path: String, reason: String },

    #[error("model feature schema mismatch: expected {expected:?}, artifact declares {actual:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },
}

/// A label was not present in the encoder's fitted vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {encoder} label {label:?}: not in the fitted vocabulary")]
pub struct UnknownCategory {
    pub encoder: String,
    pub label: String,
}

fn read_artifact(path: &Path) -> Result<String, ArtifactError> {
    fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Fixed bidirectional mapping between string labels and integer codes
///
/// Fitted offline before deployment; immutable at runtime. The code for a
/// label is its position in the ordered class list the artifact declares.
#[derive(Debug, Clone)]
pub struct CategoricalEncoder {
    name: String,
    classes: Vec<String>,
    codes: HashMap<String, i64>,
}

#[derive(Debug, Deserialize)]
struct EncoderArtifact {
    name: String,
    classes: Vec<String>,
}

impl CategoricalEncoder {
    /// Load an encoder from a JSON artifact.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let raw = read_artifact(path)?;

        let artifact: EncoderArtifact =
            serde_json::from_str(&raw).map_err(|e| ArtifactError::Malformed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        if artifact.classes.is_empty() {
            return Err(ArtifactError::Malformed {
                path: path.display().to_string(),
                reason: "empty vocabulary".to_string(),
            });
        }

        let mut seen = std::collections::HashSet::new();
        for class in &artifact.classes {
            if !seen.insert(class.as_str()) {
                return Err(ArtifactError::Malformed {
                    path: path.display().to_string(),
                    reason: format!("duplicate class {:?}", class),
                });
            }
        }

        tracing::debug!(
            "Loaded {} encoder with {} classes",
            artifact.name,
            artifact.classes.len()
        );

        Ok(Self::from_classes(artifact.name, artifact.classes))
    }

    /// Build an encoder from an ordered class list; code = list position.
    pub fn from_classes(name: impl Into<String>, classes: Vec<String>) -> Self {
        let codes = classes
            .iter()
            .enumerate()
            .map(|(i, class)| (class.clone(), i as i64))
            .collect();

        Self {
            name: name.into(),
            classes,
            codes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The fitted vocabulary, in code order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Encode a label to its integer code.
    ///
    /// Fails for any label the encoder was not fitted on.
    pub fn encode(&self, label: &str) -> Result<i64, UnknownCategory> {
        self.codes.get(label).copied().ok_or_else(|| UnknownCategory {
            encoder: self.name.clone(),
            label: label.to_string(),
        })
    }

    /// Decode an integer code back to its label.
    pub fn decode(&self, code: i64) -> Option<&str> {
        usize::try_from(code)
            .ok()
            .and_then(|i| self.classes.get(i))
            .map(String::as_str)
    }
}

/// One node of a regression tree, stored as a flat array in the artifact
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum TreeNode {
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
struct Tree {
    nodes: Vec<TreeNode>,
}

impl Tree {
    /// Walk the tree from the root. Child indices are validated at load
    /// time to point strictly forward, so this always terminates.
    fn predict(&self, features: &[f64]) -> f64 {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                TreeNode::Leaf { value } => return *value,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if features[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct ModelArtifact {
    feature_names: Vec<String>,
    init_score: f64,
    trees: Vec<Tree>,
}

/// Pre-trained gradient-boosted tree regressor
///
/// Deserialized fully formed from a JSON artifact produced by the offline
/// training pipeline; invoked only through `predict`, never trained or
/// mutated at runtime.
#[derive(Debug, Clone)]
pub struct GradientBoostedModel {
    feature_names: Vec<String>,
    init_score: f64,
    trees: Vec<Tree>,
}

impl GradientBoostedModel {
    /// Load a model artifact and validate it against the expected feature
    /// schema.
    ///
    /// The artifact declares the ordered feature names it was fit against;
    /// any difference from `expected_schema` (order included) fails here,
    /// at startup, rather than producing meaningless predictions later.
    pub fn load<P: AsRef<Path>>(path: P, expected_schema: &[&str]) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let raw = read_artifact(path)?;

        let artifact: ModelArtifact =
            serde_json::from_str(&raw).map_err(|e| ArtifactError::Malformed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        if artifact.feature_names != expected_schema {
            return Err(ArtifactError::SchemaMismatch {
                expected: expected_schema.iter().map(|s| s.to_string()).collect(),
                actual: artifact.feature_names,
            });
        }

        validate_trees(&artifact.trees, artifact.feature_names.len()).map_err(|reason| {
            ArtifactError::Malformed {
                path: path.display().to_string(),
                reason,
            }
        })?;

        tracing::debug!(
            "Loaded gradient-boosted model ({} trees, {} features)",
            artifact.trees.len(),
            artifact.feature_names.len()
        );

        Ok(Self {
            feature_names: artifact.feature_names,
            init_score: artifact.init_score,
            trees: artifact.trees,
        })
    }

    /// The ordered feature names this model was fit against
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    /// Predict a single score from a feature vector in schema order.
    pub fn predict(&self, features: &[f64]) -> f64 {
        debug_assert_eq!(features.len(), self.feature_names.len());

        self.init_score + self.trees.iter().map(|tree| tree.predict(features)).sum::<f64>()
    }
}

/// Structural validation of the tree arrays: every split must reference an
/// in-range feature and strictly-forward child indices.
fn validate_trees(trees: &[Tree], n_features: usize) -> Result<(), String> {
    for (t, tree) in trees.iter().enumerate() {
        if tree.nodes.is_empty() {
            return Err(format!("tree {} has no nodes", t));
        }

        for (i, node) in tree.nodes.iter().enumerate() {
            if let TreeNode::Split {
                feature,
                left,
                right,
                ..
            } = node
            {
                if *feature >= n_features {
                    return Err(format!(
                        "tree {} node {} references feature {} of {}",
                        t, i, feature, n_features
                    ));
                }
                if *left <= i || *right <= i || *left >= tree.nodes.len() || *right >= tree.nodes.len() {
                    return Err(format!("tree {} node {} has invalid child indices", t, i));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const SCHEMA: [&str; 2] = ["a", "b"];

    fn model_json(feature_names: &str) -> String {
        format!(
            r#"{{
                "feature_names": {},
                "init_score": 1.0,
                "trees": [
                    {{ "nodes": [
                        {{ "kind": "split", "feature": 0, "threshold": 0.5, "left": 1, "right": 2 }},
                        {{ "kind": "leaf", "value": -0.5 }},
                        {{ "kind": "leaf", "value": 0.5 }}
                    ] }}
                ]
            }}"#,
            feature_names
        )
    }

    #[test]
    fn test_encoder_round_trip() {
        let encoder = CategoricalEncoder::from_classes(
            "industry",
            vec!["Automotive".to_string(), "Healthcare".to_string()],
        );

        assert_eq!(encoder.encode("Automotive").unwrap(), 0);
        assert_eq!(encoder.encode("Healthcare").unwrap(), 1);
        assert_eq!(encoder.decode(1), Some("Healthcare"));
        assert_eq!(encoder.decode(5), None);
        assert_eq!(encoder.decode(-1), None);
    }

    #[test]
    fn test_encoder_unknown_label() {
        let encoder =
            CategoricalEncoder::from_classes("region", vec!["Europe".to_string()]);

        let err = encoder.encode("Atlantis").unwrap_err();
        assert_eq!(err.encoder, "region");
        assert_eq!(err.label, "Atlantis");
    }

    #[test]
    fn test_encoder_load_from_file() {
        let file = write_temp(r#"{ "name": "region", "classes": ["North America", "Europe"] }"#);

        let encoder = CategoricalEncoder::load(file.path()).unwrap();
        assert_eq!(encoder.name(), "region");
        assert_eq!(encoder.encode("Europe").unwrap(), 1);
    }

    #[test]
    fn test_encoder_rejects_empty_vocabulary() {
        let file = write_temp(r#"{ "name": "region", "classes": [] }"#);

        let err = CategoricalEncoder::load(file.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::Malformed { .. }));
    }

    #[test]
    fn test_encoder_rejects_duplicate_classes() {
        let file = write_temp(r#"{ "name": "region", "classes": ["Europe", "Europe"] }"#);

        let err = CategoricalEncoder::load(file.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::Malformed { .. }));
    }

    #[test]
    fn test_model_load_and_predict() {
        let file = write_temp(&model_json(r#"["a", "b"]"#));

        let model = GradientBoostedModel::load(file.path(), &SCHEMA).unwrap();
        assert_eq!(model.n_features(), 2);

        // init 1.0 + left leaf -0.5
        assert_eq!(model.predict(&[0.0, 0.0]), 0.5);
        // init 1.0 + right leaf 0.5
        assert_eq!(model.predict(&[1.0, 0.0]), 1.5);
    }

    #[test]
    fn test_model_schema_mismatch_is_fatal() {
        let file = write_temp(&model_json(r#"["b", "a"]"#));

        let err = GradientBoostedModel::load(file.path(), &SCHEMA).unwrap_err();
        assert!(matches!(err, ArtifactError::SchemaMismatch { .. }));
    }

    #[test]
    fn test_model_rejects_out_of_range_feature() {
        let file = write_temp(
            r#"{
                "feature_names": ["a", "b"],
                "init_score": 0.0,
                "trees": [
                    { "nodes": [
                        { "kind": "split", "feature": 7, "threshold": 0.5, "left": 1, "right": 2 },
                        { "kind": "leaf", "value": 0.0 },
                        { "kind": "leaf", "value": 0.0 }
                    ] }
                ]
            }"#,
        );

        let err = GradientBoostedModel::load(file.path(), &SCHEMA).unwrap_err();
        assert!(matches!(err, ArtifactError::Malformed { .. }));
    }

    #[test]
    fn test_model_rejects_backward_child_indices() {
        let file = write_temp(
            r#"{
                "feature_names": ["a", "b"],
                "init_score": 0.0,
                "trees": [
                    { "nodes": [
                        { "kind": "split", "feature": 0, "threshold": 0.5, "left": 0, "right": 1 },
                        { "kind": "leaf", "value": 0.0 }
                    ] }
                ]
            }"#,
        );

        let err = GradientBoostedModel::load(file.path(), &SCHEMA).unwrap_err();
        assert!(matches!(err, ArtifactError::Malformed { .. }));
    }

    #[test]
    fn test_missing_artifact_file() {
        let err =
            GradientBoostedModel::load("does/not/exist.json", &SCHEMA).unwrap_err();
        assert!(matches!(err, ArtifactError::Io { .. }));
    }
}
