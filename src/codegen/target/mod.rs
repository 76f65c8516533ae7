//! Output language backends.
//!
//! | Target | Extension | Layout                                          |
//! |--------|-----------|-------------------------------------------------|
//! | `cpp`  | `.hpp`    | `inline const` globals in nested namespaces     |
//! | `rust` | `.rs`     | `pub static` items in nested `pub mod`s         |

mod cpp;
mod rust;

pub use cpp::Cpp;
pub use rust::Rust;

use super::{Decl, Unit};
use crate::config::Target;

/// Module nested under the configured namespace that holds all declarations.
pub const BUNDLE_MODULE: &str = "web_bundle";

/// Names of the generated accessor functions.
pub const ACCESSORS: [&str; 5] = [
    "get_bundled_files",
    "get_bundled_file_paths",
    "get_bundled_file_mime_types",
    "get_bundled_file",
    "get_bundled_file_mime_type",
];

/// Locals and parameters declared inside the generated accessors.
///
/// An asset declaration with one of these names would be shadowed by (C++)
/// or conflict with (Rust) the accessor body.
pub const ACCESSOR_LOCALS: [&str; 4] = ["files", "paths", "mime_types", "path"];

/// Names every backend reserves besides its keywords.
fn is_accessor_name(ident: &str) -> bool {
    ACCESSORS.contains(&ident) || ACCESSOR_LOCALS.contains(&ident)
}

/// Settings shared by every unit of one run.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Namespace segments, outermost first (`a::b` -> `["a", "b"]`).
    pub namespace: Vec<&'a str>,
    pub bytes_per_line: usize,
}

impl<'a> RenderContext<'a> {
    pub fn new(namespace: &'a str, bytes_per_line: usize) -> Self {
        Self {
            namespace: namespace.split("::").filter(|s| !s.is_empty()).collect(),
            bytes_per_line,
        }
    }

    /// Namespace segments followed by [`BUNDLE_MODULE`].
    pub fn scope(&self) -> impl DoubleEndedIterator<Item = &'a str> + Clone {
        self.namespace
            .iter()
            .copied()
            .chain(std::iter::once(BUNDLE_MODULE))
    }
}

/// A target language's way of writing out a [`Unit`].
pub trait Syntax: Sync {
    /// Human-readable language name for messages.
    fn label(&self) -> &'static str;

    /// Extension of generated files, without the dot.
    fn extension(&self) -> &'static str;

    /// Whether `ident` cannot be used as a declaration name.
    fn is_reserved(&self, ident: &str) -> bool;

    /// Serialize one unit.
    fn render(&self, unit: &Unit<'_>, ctx: &RenderContext<'_>) -> String;

    /// File name of a unit with the given stem.
    fn file_name(&self, stem: &str) -> String {
        format!("{stem}.{}", self.extension())
    }
}

/// Backend for a configured target.
pub fn syntax_for(target: Target) -> &'static dyn Syntax {
    match target {
        Target::Cpp => &Cpp,
        Target::Rust => &Rust,
    }
}

/// Whether a blank separator line goes before `decl` in a unit body.
fn needs_gap(index: usize, decl: &Decl<'_>) -> bool {
    index > 0 && matches!(decl, Decl::Comment(_) | Decl::Accessors(_))
}
