//! Module summary renderer
//!
//! One section per module in lexicographic order: a placeholder description
//! (the dump carries no description text), function/field counts, and the
//! first functions with a note for how many were omitted.

use crate::core::model::{sorted_modules, ModuleMap};

/// Number of functions listed inline per module before truncating.
const TOP_FUNCTIONS: usize = 20;

/// Render the module summary document.
///
/// `source` is the dump path named in the provenance line. Output is
/// deterministic for a given map: sections and lists are sorted, and the
/// document ends with exactly one trailing newline.
pub fn render_module_index(modules: &ModuleMap, source: &str) -> String {
    let mut lines: Vec<String> = vec![
        "# Module Index".to_string(),
        String::new(),
        format!("Generated from `{source}`."),
        String::new(),
    ];

    for module in sorted_modules(modules) {
        let entry = &modules[module];
        let functions = entry.sorted_functions();
        let fields = entry.sorted_fields();

        lines.push(format!("## {module}"));
        lines.push(String::new());
        lines.push("Description: _Unknown (from dump)_".to_string());
        lines.push(format!("Functions: {}", functions.len()));
        lines.push(format!("Fields: {}", fields.len()));
        lines.push(String::new());

        if !functions.is_empty() {
            lines.push("Top functions:".to_string());
            for name in functions.iter().take(TOP_FUNCTIONS) {
                lines.push(format!("- {name}"));
            }
            if functions.len() > TOP_FUNCTIONS {
                lines.push(format!(
                    "- ...and {} more (see index_functions)",
                    functions.len() - TOP_FUNCTIONS
                ));
            }
            lines.push(String::new());
        }
    }

    let mut doc = lines.join("\n").trim_end().to_string();
    doc.push('\n');
    doc
}
