use crate::version_diff::domain::{ChangeSet, Update, VersionMap};

/// VersionComparator service classifying dependency changes
///
/// Pure function over two immutable maps. One pass over `after` finds
/// additions and updates, one pass over `before` finds removals, and the
/// final sort makes the result independent of hash iteration order.
pub struct VersionComparator;

impl VersionComparator {
    /// Computes the change set taking `before` to `after`
    ///
    /// # Arguments
    /// * `before` - Versions at the "from" endpoint
    /// * `after` - Versions at the "to" endpoint
    ///
    /// # Returns
    /// ChangeSet with added, removed and updated dependencies, each sorted by name
    pub fn compare(before: &VersionMap, after: &VersionMap) -> ChangeSet {
        let mut added = Vec::new();
        let mut updates = Vec::new();

        for (name, new_revision) in after.iter() {
            match before.get(name) {
                None => added.push(name.to_string()),
                Some(old_revision) => {
                    if let Some(update) = Update::new(
                        name.to_string(),
                        old_revision.to_string(),
                        new_revision.to_string(),
                    ) {
                        updates.push(update);
                    }
                }
            }
        }

        let mut removed: Vec<String> = before
            .names()
            .filter(|name| !after.contains(name))
            .map(str::to_string)
            .collect();

        added.sort_unstable();
        removed.sort_unstable();
        // Names are unique map keys, so an unstable sort is still deterministic.
        updates.sort_unstable_by(|a, b| a.name().cmp(b.name()));

        ChangeSet::from_sorted(added, removed, updates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> VersionMap {
        pairs.iter().copied().collect()
    }

    fn is_strictly_sorted<T: Ord>(items: &[T]) -> bool {
        items.windows(2).all(|w| w[0] < w[1])
    }

    #[test]
    fn test_compare_identical_maps_is_empty() {
        let versions = map(&[("A", "abcdef1234"), ("B", "1111111111")]);
        let changes = VersionComparator::compare(&versions, &versions);
        assert!(changes.is_empty());
    }

    #[test]
    fn test_compare_empty_maps() {
        let changes = VersionComparator::compare(&VersionMap::new(), &VersionMap::new());
        assert!(changes.is_empty());
    }

    #[test]
    fn test_compare_added_and_removed() {
        let before = map(&[("A", "abcdef1234"), ("B", "1111111111")]);
        let after = map(&[("A", "abcdef1234"), ("C", "2222222222")]);

        let changes = VersionComparator::compare(&before, &after);

        assert_eq!(changes.added(), &["C".to_string()]);
        assert_eq!(changes.removed(), &["B".to_string()]);
        assert!(changes.updates().is_empty());
    }

    #[test]
    fn test_compare_single_update() {
        let before = map(&[("github.com/foo/bar", "aaaaaaaa11")]);
        let after = map(&[("github.com/foo/bar", "bbbbbbbb22")]);

        let changes = VersionComparator::compare(&before, &after);

        assert!(changes.added().is_empty());
        assert!(changes.removed().is_empty());
        assert_eq!(changes.updates().len(), 1);
        let update = &changes.updates()[0];
        assert_eq!(update.name(), "github.com/foo/bar");
        assert_eq!(update.from_revision(), "aaaaaaaa11");
        assert_eq!(update.to_revision(), "bbbbbbbb22");
    }

    #[test]
    fn test_compare_everything_added_from_empty() {
        let after = map(&[("z", "1"), ("a", "2"), ("m", "3")]);
        let changes = VersionComparator::compare(&VersionMap::new(), &after);

        assert_eq!(changes.added(), &["a", "m", "z"]);
        assert!(changes.removed().is_empty());
    }

    #[test]
    fn test_compare_everything_removed_to_empty() {
        let before = map(&[("z", "1"), ("a", "2")]);
        let changes = VersionComparator::compare(&before, &VersionMap::new());

        assert_eq!(changes.removed(), &["a", "z"]);
        assert!(changes.added().is_empty());
    }

    #[test]
    fn test_compare_results_are_sorted_and_disjoint() {
        let before = map(&[
            ("golang.org/x/net", "n1"),
            ("github.com/b/b", "b1"),
            ("github.com/a/a", "a1"),
            ("gopkg.in/yaml.v2", "y1"),
            ("github.com/gone/one", "g1"),
            ("github.com/gone/another", "g2"),
        ]);
        let after = map(&[
            ("golang.org/x/net", "n2"),
            ("github.com/b/b", "b2"),
            ("github.com/a/a", "a2"),
            ("gopkg.in/yaml.v2", "y1"),
            ("github.com/new/z", "z1"),
            ("github.com/new/c", "c1"),
        ]);

        let changes = VersionComparator::compare(&before, &after);

        assert!(is_strictly_sorted(changes.added()));
        assert!(is_strictly_sorted(changes.removed()));
        let update_names: Vec<&str> = changes.updates().iter().map(|u| u.name()).collect();
        assert!(is_strictly_sorted(&update_names));
        assert_eq!(
            update_names,
            vec!["github.com/a/a", "github.com/b/b", "golang.org/x/net"]
        );

        for name in changes.added() {
            assert!(!changes.removed().contains(name));
            assert!(!update_names.contains(&name.as_str()));
        }
        for name in changes.removed() {
            assert!(!update_names.contains(&name.as_str()));
        }
    }

    #[test]
    fn test_compare_classification_matches_inputs() {
        let before = map(&[("keep", "1"), ("bump", "1"), ("drop", "1")]);
        let after = map(&[("keep", "1"), ("bump", "2"), ("new", "1")]);

        let changes = VersionComparator::compare(&before, &after);

        for name in changes.added() {
            assert!(after.contains(name) && !before.contains(name));
        }
        for name in changes.removed() {
            assert!(before.contains(name) && !after.contains(name));
        }
        for update in changes.updates() {
            assert_ne!(before.get(update.name()), after.get(update.name()));
            assert!(before.contains(update.name()) && after.contains(update.name()));
        }
        assert_eq!(changes.update_count(), 1);
    }

    #[test]
    fn test_compare_is_independent_of_insertion_order() {
        let pairs_before = [("d", "1"), ("b", "1"), ("a", "1"), ("c", "1")];
        let pairs_after = [("e", "1"), ("a", "2"), ("c", "1"), ("b", "9")];

        let forward = VersionComparator::compare(&map(&pairs_before), &map(&pairs_after));

        let mut reversed_before = pairs_before;
        reversed_before.reverse();
        let mut reversed_after = pairs_after;
        reversed_after.reverse();
        let backward = VersionComparator::compare(&map(&reversed_before), &map(&reversed_after));

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_compare_swapped_inputs_mirror() {
        let before = map(&[("a", "1"), ("b", "1")]);
        let after = map(&[("b", "2"), ("c", "1")]);

        let forward = VersionComparator::compare(&before, &after);
        let backward = VersionComparator::compare(&after, &before);

        assert_eq!(forward.added(), backward.removed());
        assert_eq!(forward.removed(), backward.added());
        assert_eq!(forward.updates()[0].from_revision(), backward.updates()[0].to_revision());
    }
}
