//! Change-set computation between two parsed snapshots

use std::collections::HashSet;

use crate::package::Package;

/// Packages present in `current` but absent from `previous`.
///
/// Pure membership difference under package identity: duplicates within
/// either input are reported at most once, and the input order of `current`
/// is preserved in the result.
pub fn new_packages(previous: &[Package], current: &[Package]) -> Vec<Package> {
    let known: HashSet<&Package> = previous.iter().collect();
    let mut seen: HashSet<&Package> = HashSet::new();

    current
        .iter()
        .filter(|pkg| !known.contains(*pkg) && seen.insert(*pkg))
        .cloned()
        .collect()
}
