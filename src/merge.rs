//! Centralized merge rules for combining partial mapping results.
//!
//! The rules are a pure fold over two values with each type's `Default` as
//! the "is this unset" witness:
//!
//! - list fields concatenate, order preserved;
//! - numeric fields prefer the **later** non-zero value;
//! - string fields prefer the **earlier** non-default value (first-wins), so
//!   a later pass never overwrites meaningful data with a placeholder;
//! - nested structs recurse with the same rules.
//!
//! First-wins on strings makes the merge associative but not commutative;
//! callers must preserve combination order (declaration order within a file).

use crate::graph::payload::{ExportTable, ImportTable, ModuleData, ModuleKind};

/// A value mergeable with a later partial value of the same type.
pub trait Merge: Sized {
    fn merge(self, later: Self) -> Self;
}

/// String rule: the earlier non-empty value wins.
pub fn merge_string(earlier: String, later: String) -> String {
    if earlier.is_empty() { later } else { earlier }
}

/// Numeric rule: the later non-zero value wins.
pub fn merge_count(earlier: u32, later: u32) -> u32 {
    if later != 0 { later } else { earlier }
}

/// List rule: concatenation, earlier elements first.
pub fn merge_vec<T>(mut earlier: Vec<T>, later: Vec<T>) -> Vec<T> {
    earlier.extend(later);
    earlier
}

/// Optional-value rule: the earlier set value wins (first-wins, like strings).
pub fn merge_opt<T>(earlier: Option<T>, later: Option<T>) -> Option<T> {
    earlier.or(later)
}

/// Enum-with-default rule: the earlier non-default value wins.
fn merge_module_kind(earlier: ModuleKind, later: ModuleKind) -> ModuleKind {
    if earlier == ModuleKind::default() { later } else { earlier }
}

impl Merge for ImportTable {
    fn merge(self, later: Self) -> Self {
        Self {
            named: merge_vec(self.named, later.named),
            defaults: merge_vec(self.defaults, later.defaults),
            namespaces: merge_vec(self.namespaces, later.namespaces),
        }
    }
}

impl Merge for ExportTable {
    fn merge(self, later: Self) -> Self {
        Self {
            named: merge_vec(self.named, later.named),
            re_exports: merge_vec(self.re_exports, later.re_exports),
            wildcards: merge_vec(self.wildcards, later.wildcards),
            default: merge_opt(self.default, later.default),
        }
    }
}

impl Merge for ModuleData {
    fn merge(self, later: Self) -> Self {
        Self {
            path: merge_string(self.path, later.path),
            module_kind: merge_module_kind(self.module_kind, later.module_kind),
            imports: self.imports.merge(later.imports),
            exports: self.exports.merge(later.exports),
        }
    }
}
