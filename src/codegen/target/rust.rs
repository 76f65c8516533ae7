//! Rust source backend.
//!
//! The index unit is meant to be pulled in with
//! `include!(concat!(env!("OUT_DIR"), "/web_bundle.rs"));`. In split mode the
//! per-asset files hold bare items and are `include!`d from inside the
//! bundle module, so they must stay next to the index file.

use super::{RenderContext, Syntax, is_accessor_name, needs_gap};
use crate::bundle::{MIME_SUFFIX, PATH_SUFFIX, mime};
use crate::codegen::{Decl, IndexEntry, Unit, UnitKind, Writer, byte_lines};

const KEYWORDS: &[&str] = &[
    "_", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv",
    "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "try",
    "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

const HASH_MAP: &str = "::std::collections::HashMap";

/// Emits Rust items inside nested `pub mod` blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rust;

impl Syntax for Rust {
    fn label(&self) -> &'static str {
        "Rust"
    }

    fn extension(&self) -> &'static str {
        "rs"
    }

    fn is_reserved(&self, ident: &str) -> bool {
        KEYWORDS.contains(&ident) || is_accessor_name(ident)
    }

    fn render(&self, unit: &Unit<'_>, ctx: &RenderContext<'_>) -> String {
        let mut w = Writer::new("    ");

        w.line("// Auto-generated file - DO NOT EDIT");
        match unit.kind {
            UnitKind::Asset { source } => {
                w.line(format!("// Generated from {source}"));
                w.blank();
                write_body(&mut w, unit, ctx);
            }
            UnitKind::Index => {
                w.line("// Index of all bundled web files");
                w.blank();
                let depth = ctx.scope().count();
                for segment in ctx.scope() {
                    w.line(format!("pub mod {segment} {{"));
                    w.indent();
                }
                w.line("#![allow(dead_code, non_upper_case_globals, unused_mut)]");
                w.blank();
                write_body(&mut w, unit, ctx);
                for _ in 0..depth {
                    w.dedent();
                    w.line("}");
                }
            }
        }
        w.finish()
    }
}

fn write_body(w: &mut Writer, unit: &Unit<'_>, ctx: &RenderContext<'_>) {
    let mut includes = unit.includes().peekable();
    let has_includes = includes.peek().is_some();
    for file in includes {
        w.line(format!("include!({file:?});"));
    }

    let body = unit.decls.iter().filter(|d| !matches!(d, Decl::Include(_)));
    for (i, decl) in body.enumerate() {
        if needs_gap(i, decl) || (i == 0 && has_includes) {
            w.blank();
        }
        write_decl(w, decl, ctx);
    }
}

fn write_decl(w: &mut Writer, decl: &Decl<'_>, ctx: &RenderContext<'_>) {
    match decl {
        Decl::Comment(text) => w.line(format!("// {text}")),
        Decl::Bytes { name, bytes } => {
            w.line(format!("pub static {name}: [u8; {}] = [", bytes.len()));
            w.nested(|w| {
                for line in byte_lines(bytes, ctx.bytes_per_line) {
                    w.line(line);
                }
            });
            w.line("];");
        }
        Decl::Str { name, value } => {
            w.line(format!("pub static {name}: &str = {value:?};"));
        }
        Decl::Include(_) => {}
        Decl::Accessors(entries) => write_accessors(w, entries),
    }
}

fn write_accessors(w: &mut Writer, entries: &[IndexEntry<'_>]) {
    w.line("/// Get all bundled files");
    w.line(format!(
        "pub fn get_bundled_files() -> {HASH_MAP}<&'static str, &'static [u8]> {{"
    ));
    w.nested(|w| {
        w.line(format!("let mut files = {HASH_MAP}::new();"));
        for e in entries {
            w.line(format!("files.insert({:?}, &{}[..]);", e.path, e.symbol));
        }
        w.line("files");
    });
    w.line("}");
    w.blank();

    w.line("/// Get all bundled file paths");
    w.line(format!(
        "pub fn get_bundled_file_paths() -> {HASH_MAP}<&'static str, &'static str> {{"
    ));
    w.nested(|w| {
        w.line(format!("let mut paths = {HASH_MAP}::new();"));
        for e in entries {
            w.line(format!(
                "paths.insert({:?}, {}{PATH_SUFFIX});",
                e.path, e.symbol
            ));
        }
        w.line("paths");
    });
    w.line("}");
    w.blank();

    w.line("/// Get all bundled file MIME types");
    w.line(format!(
        "pub fn get_bundled_file_mime_types() -> {HASH_MAP}<&'static str, &'static str> {{"
    ));
    w.nested(|w| {
        w.line(format!("let mut mime_types = {HASH_MAP}::new();"));
        for e in entries {
            w.line(format!(
                "mime_types.insert({:?}, {}{MIME_SUFFIX});",
                e.path, e.symbol
            ));
        }
        w.line("mime_types");
    });
    w.line("}");
    w.blank();

    w.line("/// Get a bundled file by path");
    w.line("pub fn get_bundled_file(path: &str) -> Option<&'static [u8]> {");
    w.nested(|w| w.line("get_bundled_files().get(path).copied()"));
    w.line("}");
    w.blank();

    w.line("/// Get a bundled file MIME type by path");
    w.line("pub fn get_bundled_file_mime_type(path: &str) -> &'static str {");
    w.nested(|w| {
        w.line("get_bundled_file_mime_types()");
        w.nested(|w| {
            w.line(".get(path)");
            w.line(".copied()");
            w.line(format!(".unwrap_or({:?})", mime::types::OCTET_STREAM));
        });
    });
    w.line("}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::Asset;

    fn ctx() -> RenderContext<'static> {
        RenderContext::new("webembed", 12)
    }

    #[test]
    fn test_render_asset_unit_has_no_module() {
        let asset = Asset::new("js/app.js", b"ok".to_vec());
        let mut unit = Unit::new("js_app_js", UnitKind::Asset { source: "js/app.js" });
        unit.extend(Decl::for_asset(&asset));

        let out = Rust.render(&unit, &ctx());
        let expected = "\
// Auto-generated file - DO NOT EDIT
// Generated from js/app.js

// Bundled file: js/app.js
pub static js_app_js: [u8; 2] = [
    0x6f, 0x6b,
];
pub static js_app_js_path: &str = \"js/app.js\";
pub static js_app_js_mime: &str = \"application/javascript\";
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_index_unit() {
        let asset = Asset::new("index.html", b"<".to_vec());
        let mut unit = Unit::new("web_bundle", UnitKind::Index);
        unit.push(Decl::Include("index_html.rs".into()));
        unit.push(Decl::Accessors(vec![IndexEntry::from(&asset)]));

        let out = Rust.render(&unit, &ctx());
        assert!(out.starts_with(
            "// Auto-generated file - DO NOT EDIT\n// Index of all bundled web files\n\n\
             pub mod webembed {\n    pub mod web_bundle {\n        #![allow("
        ));
        assert!(out.contains("        include!(\"index_html.rs\");\n\n"));
        assert!(out.contains("files.insert(\"index.html\", &index_html[..]);"));
        assert!(out.contains("paths.insert(\"index.html\", index_html_path);"));
        assert!(out.contains("mime_types.insert(\"index.html\", index_html_mime);"));
        assert!(out.contains(".unwrap_or(\"application/octet-stream\")"));
        assert!(out.ends_with("    }\n}\n"));
    }

    #[test]
    fn test_string_values_are_escaped() {
        let asset = Asset::new("say \"hi\".txt", vec![]);
        let mut unit = Unit::new("x", UnitKind::Asset { source: "say \"hi\".txt" });
        unit.extend(Decl::for_asset(&asset));

        let out = Rust.render(&unit, &ctx());
        assert!(out.contains("_path: &str = \"say \\\"hi\\\".txt\";"));
    }

    #[test]
    fn test_reserved() {
        assert!(Rust.is_reserved("fn"));
        assert!(Rust.is_reserved("_"));
        assert!(Rust.is_reserved("get_bundled_files"));
        assert!(Rust.is_reserved("mime_types"));
        assert!(Rust.is_reserved("path"));
        // only C++ reserves `__`
        assert!(!Rust.is_reserved("__js"));
        assert!(!Rust.is_reserved("index_html"));
    }
}
