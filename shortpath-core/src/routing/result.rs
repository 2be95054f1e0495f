use serde::Serialize;

use crate::{VertexId, Weight};

/// Outcome of a single shortest path search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathResult {
    /// Minimum total weight and the vertices from source to destination inclusive
    Found { weight: Weight, path: Vec<VertexId> },
    /// Destination is unreachable from the source
    NoPath,
}

impl PathResult {
    pub fn weight(&self) -> Option<Weight> {
        match self {
            PathResult::Found { weight, .. } => Some(*weight),
            PathResult::NoPath => None,
        }
    }

    /// Vertices along the path, empty when no path exists
    pub fn path(&self) -> &[VertexId] {
        match self {
            PathResult::Found { path, .. } => path,
            PathResult::NoPath => &[],
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found { .. })
    }

    pub fn into_path(self) -> Vec<VertexId> {
        match self {
            PathResult::Found { path, .. } => path,
            PathResult::NoPath => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_has_no_weight_and_empty_path() {
        let result = PathResult::NoPath;
        assert!(!result.is_found());
        assert_eq!(result.weight(), None);
        assert!(result.path().is_empty());
        assert!(result.into_path().is_empty());
    }

    #[test]
    fn serializes_with_status_tag() {
        let found = PathResult::Found {
            weight: 6,
            path: vec![0, 1, 2, 3],
        };
        assert_eq!(
            serde_json::to_string(&found).unwrap(),
            r#"{"status":"found","weight":6,"path":[0,1,2,3]}"#
        );
        assert_eq!(
            serde_json::to_string(&PathResult::NoPath).unwrap(),
            r#"{"status":"no_path"}"#
        );
    }
}
