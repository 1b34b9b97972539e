//! Dump line classifier
//!
//! Parses the flat text dump of an API surface into a module map. Lines are
//! classified by leading-space depth:
//!
//! ```text
//! vehicle: table
//!   pos: vec3
//!   functions:
//!     getPosition
//!     setVelocity
//! ```
//!
//! Top-level `NAME: VALUE` lines open a module; a two-space `functions:`
//! header opens the functions sub-block; four-space lines inside it are
//! function names; other two-space `key: value` lines are fields. Anything
//! that fits no shape is dropped, never an error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::model::{ModuleEntry, ModuleMap};

/// Static regex for module header lines.
/// Format: `NAME: TYPE_OR_VALUE` at zero indentation, value required.
static MODULE_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\S+):\s+(\S+)").expect("Invalid MODULE_HEADER_RE regex"));

/// Two-space prefix that opens the functions sub-block of a module.
const FUNCTIONS_HEADER_PREFIX: &str = "  functions:";

/// Minimum indentation of a function entry inside the functions sub-block.
const FUNCTION_ENTRY_PREFIX: &str = "    ";

/// Minimum indentation of a field line under a module.
const FIELD_PREFIX: &str = "  ";

/// Try to match a top-level module header, returning the module name and
/// the text after the colon.
///
/// Lines with a colon but no trailing value fail to match.
pub fn try_parse_module_header(line: &str) -> Option<(&str, &str)> {
    let caps = MODULE_HEADER_RE.captures(line)?;
    let name = caps.get(1).map(|m| m.as_str())?;
    let rest = caps.get(2).map(|m| m.as_str())?;
    Some((name, rest))
}

/// Line classifier state, threaded over the dump one line at a time.
///
/// Carries the module currently in scope and whether the cursor sits inside
/// that module's `functions:` sub-block.
#[derive(Debug, Default)]
pub struct DumpParser {
    modules: ModuleMap,
    current: Option<String>,
    in_functions: bool,
}

impl DumpParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one line and fold it into the module map.
    pub fn feed_line(&mut self, raw: &str) {
        let line = raw.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            return;
        }

        if line.starts_with(' ') {
            self.feed_indented(line);
            return;
        }

        // Any top-level line closes a functions block.
        self.in_functions = false;
        match try_parse_module_header(line) {
            Some((name, _)) => {
                self.current = Some(name.to_string());
                self.modules.entry(name.to_string()).or_default();
            }
            None => {
                // Unrecognized top-level content orphans the indented lines
                // that follow until the next valid header.
                self.current = None;
            }
        }
    }

    fn feed_indented(&mut self, line: &str) {
        let Some(current) = self.current.clone() else {
            return;
        };

        if line.starts_with(FUNCTIONS_HEADER_PREFIX) {
            self.in_functions = true;
            return;
        }

        if self.in_functions {
            if !line.starts_with(FUNCTION_ENTRY_PREFIX) {
                // Shallower indent ends the block; the boundary line itself
                // is consumed by the transition.
                self.in_functions = false;
            } else {
                let name = line.trim();
                if !name.is_empty() && !name.ends_with(':') && !name.starts_with('(') {
                    self.entry_mut(&current).functions.insert(name.to_string());
                }
            }
            return;
        }

        if line.starts_with(FIELD_PREFIX) {
            if let Some((field, _)) = line.trim().split_once(':') {
                if field != "functions" {
                    self.entry_mut(&current).fields.insert(field.to_string());
                }
            }
        }
    }

    fn entry_mut(&mut self, module: &str) -> &mut ModuleEntry {
        self.modules.entry(module.to_string()).or_default()
    }

    /// Consume the parser and return the accumulated module map.
    pub fn finish(self) -> ModuleMap {
        self.modules
    }
}

/// Parse an ordered sequence of dump lines into a module map.
pub fn parse_dump<I, S>(lines: I) -> ModuleMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = DumpParser::new();
    for line in lines {
        parser.feed_line(line.as_ref());
    }
    parser.finish()
}
