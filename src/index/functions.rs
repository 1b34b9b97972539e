//! Function list renderer
//!
//! One flat entry line per function, modules in lexicographic order and
//! functions in lexicographic order within each module.

use crate::core::model::{sorted_modules, ModuleMap, GLOBAL_MODULE};

/// Qualify a function name with its module.
///
/// Entries under the global namespace stay unqualified, and names the dump
/// already wrote in `module:function` or `module.function` form pass
/// through untouched so they are never qualified twice.
pub fn qualify(module: &str, name: &str) -> String {
    if module == GLOBAL_MODULE {
        return name.to_string();
    }

    let self_qualified = (name.contains(':') || name.contains('.'))
        && (name.starts_with(&format!("{module}:")) || name.starts_with(&format!("{module}.")));

    if self_qualified {
        name.to_string()
    } else {
        format!("{module}.{name}")
    }
}

/// Render the flat function list document.
///
/// `source` is the dump path named in the heading. The document ends with
/// exactly one trailing newline.
pub fn render_function_index(modules: &ModuleMap, source: &str) -> String {
    let mut lines: Vec<String> = vec![
        "# Function Index".to_string(),
        String::new(),
        format!("One entry per function, generated from `{source}`."),
        String::new(),
    ];

    for module in sorted_modules(modules) {
        for name in modules[module].sorted_functions() {
            lines.push(qualify(module, name));
        }
    }

    let mut doc = lines.join("\n").trim_end().to_string();
    doc.push('\n');
    doc
}
