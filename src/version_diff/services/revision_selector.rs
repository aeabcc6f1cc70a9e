use crate::shared::error::DiffError;
use crate::shared::Result;
use crate::version_diff::domain::{ComparisonPlan, Endpoint};

/// Default "from" revision when the lockfile has no local modifications
pub const CLEAN_BASE_REVISION: &str = "HEAD~";

/// Default "from" revision when the lockfile has uncommitted changes
pub const DIRTY_BASE_REVISION: &str = "HEAD";

/// RevisionSelector service choosing the two snapshots to compare
///
/// | revisions   | from                              | to           |
/// |-------------|-----------------------------------|--------------|
/// | none        | `HEAD~` (clean) or `HEAD` (dirty) | working tree |
/// | `FROM`      | `FROM`                            | working tree |
/// | `FROM TO`   | `FROM`                            | `TO`         |
pub struct RevisionSelector;

impl RevisionSelector {
    /// Selects the comparison endpoints
    ///
    /// # Arguments
    /// * `revisions` - Zero, one or two user-supplied tree-ish values
    /// * `is_dirty` - Reports whether the lockfile has uncommitted changes;
    ///   only called when no revision was supplied
    ///
    /// # Errors
    /// - More than two revisions
    /// - The dirtiness check itself failed
    pub fn select<F>(revisions: &[String], is_dirty: F) -> Result<ComparisonPlan>
    where
        F: FnOnce() -> Result<bool>,
    {
        match revisions {
            [from, to] => Ok(ComparisonPlan::new(
                Endpoint::revision(from.as_str()),
                Endpoint::revision(to.as_str()),
            )),
            [from] => Ok(ComparisonPlan::new(
                Endpoint::revision(from.as_str()),
                Endpoint::WorkingTree,
            )),
            [] => {
                let base = if is_dirty()? {
                    DIRTY_BASE_REVISION
                } else {
                    CLEAN_BASE_REVISION
                };
                Ok(ComparisonPlan::new(
                    Endpoint::revision(base),
                    Endpoint::WorkingTree,
                ))
            }
            _ => Err(DiffError::TooManyRevisions {
                count: revisions.len(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn revs(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_no_args_clean_compares_previous_commit() {
        let plan = RevisionSelector::select(&[], || Ok(false)).unwrap();
        assert_eq!(plan.from_endpoint(), &Endpoint::revision("HEAD~"));
        assert_eq!(plan.to_endpoint(), &Endpoint::WorkingTree);
    }

    #[test]
    fn test_no_args_dirty_compares_head() {
        let plan = RevisionSelector::select(&[], || Ok(true)).unwrap();
        assert_eq!(plan.from_endpoint(), &Endpoint::revision("HEAD"));
        assert_eq!(plan.to_endpoint(), &Endpoint::WorkingTree);
    }

    #[test]
    fn test_one_arg_compares_against_working_tree() {
        let checked = Cell::new(false);
        let plan = RevisionSelector::select(&revs(&["v1.0"]), || {
            checked.set(true);
            Ok(true)
        })
        .unwrap();

        assert_eq!(plan.from_endpoint(), &Endpoint::revision("v1.0"));
        assert_eq!(plan.to_endpoint(), &Endpoint::WorkingTree);
        assert!(!checked.get(), "dirtiness check must not run with explicit revisions");
    }

    #[test]
    fn test_two_args_compare_history_only() {
        let checked = Cell::new(false);
        let plan = RevisionSelector::select(&revs(&["v1.0", "v2.0"]), || {
            checked.set(true);
            Ok(false)
        })
        .unwrap();

        assert_eq!(plan.from_endpoint(), &Endpoint::revision("v1.0"));
        assert_eq!(plan.to_endpoint(), &Endpoint::revision("v2.0"));
        assert!(!plan.to_endpoint().is_working_tree());
        assert!(!checked.get());
    }

    #[test]
    fn test_three_args_is_an_argument_error() {
        let result = RevisionSelector::select(&revs(&["a", "b", "c"]), || Ok(false));
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DiffError>(),
            Some(DiffError::TooManyRevisions { count: 3 })
        ));
    }

    #[test]
    fn test_dirtiness_failure_propagates() {
        let result = RevisionSelector::select(&[], || anyhow::bail!("not a git repository"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("not a git repository"));
    }
}
