//! Schema versioning for serialized evaluation reports.

/// Current schema version for `EvaluationReport` JSON output.
///
/// Bump the minor version for additive fields, the major version when a
/// field changes meaning.
pub const SCHEMA_VERSION: &str = "1.0.0";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_version_is_semver() {
        let parts: Vec<&str> = SCHEMA_VERSION.split('.').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|p| p.parse::<u32>().is_ok()));
    }
}
