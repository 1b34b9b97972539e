//! Module map data model
//!
//! The parser produces a mapping from module name to the sets of function
//! and field names scraped from the dump. Sets deduplicate; sortedness is a
//! rendering-time concern, so nothing here relies on iteration order.

use std::collections::{HashMap, HashSet};

/// Name of the global/unscoped namespace in the dump.
///
/// Entries under it are rendered without a dotted qualifier.
pub const GLOBAL_MODULE: &str = "_G";

/// Functions and fields owned by one module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleEntry {
    /// Function names scraped from the module's `functions:` sub-block.
    pub functions: HashSet<String>,

    /// Field names taken from other indented lines under the module.
    pub fields: HashSet<String>,
}

impl ModuleEntry {
    /// Function names in lexicographic order.
    pub fn sorted_functions(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Field names in lexicographic order.
    pub fn sorted_fields(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fields.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Mapping from module name to its entry.
pub type ModuleMap = HashMap<String, ModuleEntry>;

/// Module names in lexicographic order.
pub fn sorted_modules(modules: &ModuleMap) -> Vec<&str> {
    let mut names: Vec<&str> = modules.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_functions() {
        let mut entry = ModuleEntry::default();
        entry.functions.insert("zz".to_string());
        entry.functions.insert("aa".to_string());
        entry.functions.insert("mm".to_string());
        assert_eq!(entry.sorted_functions(), vec!["aa", "mm", "zz"]);
    }

    #[test]
    fn test_sets_deduplicate() {
        let mut entry = ModuleEntry::default();
        entry.fields.insert("pos".to_string());
        entry.fields.insert("pos".to_string());
        assert_eq!(entry.fields.len(), 1);
    }

    #[test]
    fn test_sorted_modules() {
        let mut modules = ModuleMap::new();
        modules.insert("vehicle".to_string(), ModuleEntry::default());
        modules.insert("_G".to_string(), ModuleEntry::default());
        modules.insert("camera".to_string(), ModuleEntry::default());
        assert_eq!(sorted_modules(&modules), vec!["_G", "camera", "vehicle"]);
    }
}
