//! Shim optimization
//!
//! Rewrites declared shims into the most compact form the loader accepts.

use indexmap::IndexMap;
use rjs_domain::value_objects::{ShimDeclaration, ShimMap};

/// Optimize shim declarations
///
/// For every entry, in declaration order:
/// - an empty `deps` list is removed;
/// - an entry left without fields is dropped;
/// - an entry whose only field is a non-empty `deps` becomes the bare list;
/// - anything else is kept as a record.
pub fn optimize_shim(shim: &ShimMap) -> IndexMap<String, ShimDeclaration> {
    let mut optimized = IndexMap::with_capacity(shim.len());

    for (module, entry) in shim {
        let mut entry = entry.clone();
        if entry.deps.as_ref().is_some_and(Vec::is_empty) {
            entry.deps = None;
        }
        if entry.is_empty() {
            continue;
        }

        let declaration = match entry.deps.take() {
            Some(deps) if entry.is_empty() => ShimDeclaration::Deps(deps),
            deps => {
                entry.deps = deps;
                ShimDeclaration::Entry(entry)
            }
        };
        optimized.insert(module.clone(), declaration);
    }

    optimized
}
