//! C++ header backend.
//!
//! ```cpp
//! namespace webembed {
//! namespace web_bundle {
//!
//! // Bundled file: index.html
//! inline const std::vector<unsigned char> index_html = {
//!     0x3c, 0x68, ...
//! };
//! inline const std::string index_html_path = "index.html";
//! inline const std::string index_html_mime = "text/html";
//!
//! } // namespace web_bundle
//! } // namespace webembed
//! ```

use super::{RenderContext, Syntax, is_accessor_name, needs_gap};
use crate::bundle::{MIME_SUFFIX, PATH_SUFFIX, mime};
use crate::codegen::{Decl, IndexEntry, Unit, UnitKind, Writer, byte_lines};

const KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "compl", "concept",
    "const", "consteval", "constexpr", "constinit", "const_cast", "continue", "co_await",
    "co_return", "co_yield", "decltype", "default", "delete", "do", "double", "dynamic_cast",
    "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
    "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
    "nullptr", "operator", "or", "or_eq", "private", "protected", "public", "register",
    "reinterpret_cast", "requires", "return", "short", "signed", "sizeof", "static",
    "static_assert", "static_cast", "struct", "switch", "template", "this", "thread_local",
    "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
    "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq",
];

/// Object-like and function-like macros the standard headers may define,
/// plus the lowercase ones GCC predefines in GNU modes.
const MACROS: &[&str] = &[
    "NULL", "EOF", "BUFSIZ", "FILENAME_MAX", "FOPEN_MAX", "L_tmpnam", "TMP_MAX", "SEEK_SET",
    "SEEK_CUR", "SEEK_END", "stdin", "stdout", "stderr", "errno", "assert", "offsetof",
    "EXIT_SUCCESS", "EXIT_FAILURE", "RAND_MAX", "MB_CUR_MAX", "MB_LEN_MAX", "CHAR_BIT",
    "CHAR_MIN", "CHAR_MAX", "SCHAR_MIN", "SCHAR_MAX", "UCHAR_MAX", "SHRT_MIN", "SHRT_MAX",
    "USHRT_MAX", "INT_MIN", "INT_MAX", "UINT_MAX", "LONG_MIN", "LONG_MAX", "ULONG_MAX",
    "LLONG_MIN", "LLONG_MAX", "ULLONG_MAX", "SIZE_MAX", "PTRDIFF_MIN", "PTRDIFF_MAX",
    "WCHAR_MIN", "WCHAR_MAX", "WEOF", "EDOM", "ERANGE", "EILSEQ", "setjmp", "va_start",
    "va_arg", "va_end", "va_copy", "linux", "unix", "i386",
];

/// Names the standard reserves for the implementation in every scope:
/// any containing `__`, or starting with `_` and an uppercase letter.
fn is_implementation_reserved(ident: &str) -> bool {
    let bytes = ident.as_bytes();
    ident.contains("__") || (bytes.len() > 1 && bytes[0] == b'_' && bytes[1].is_ascii_uppercase())
}

const BYTES_TYPE: &str = "std::vector<unsigned char>";
const FILES_MAP: &str = "std::unordered_map<std::string, const std::vector<unsigned char>*>";
const STRING_MAP: &str = "std::unordered_map<std::string, std::string>";

/// Emits `#pragma once` headers for C++17 and later.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cpp;

impl Syntax for Cpp {
    fn label(&self) -> &'static str {
        "C++"
    }

    fn extension(&self) -> &'static str {
        "hpp"
    }

    fn is_reserved(&self, ident: &str) -> bool {
        KEYWORDS.contains(&ident)
            || MACROS.contains(&ident)
            || is_implementation_reserved(ident)
            || is_accessor_name(ident)
    }

    fn render(&self, unit: &Unit<'_>, ctx: &RenderContext<'_>) -> String {
        let mut w = Writer::new("    ");

        w.line("// Auto-generated file - DO NOT EDIT");
        match unit.kind {
            UnitKind::Asset { source } => w.line(format!("// Generated from {source}")),
            UnitKind::Index => w.line("// Index of all bundled web files"),
        }
        w.blank();
        w.line("#pragma once");
        w.blank();
        w.line("#include <string>");
        if unit.accessors().is_some() {
            w.line("#include <unordered_map>");
        }
        w.line("#include <vector>");

        let mut includes = unit.includes().peekable();
        if includes.peek().is_some() {
            w.blank();
            for file in includes {
                w.line(format!("#include \"{}\"", escape(file)));
            }
        }
        w.blank();

        for segment in ctx.scope() {
            w.line(format!("namespace {segment} {{"));
        }
        w.blank();

        let body = unit.decls.iter().filter(|d| !matches!(d, Decl::Include(_)));
        for (i, decl) in body.enumerate() {
            if needs_gap(i, decl) {
                w.blank();
            }
            write_decl(&mut w, decl, ctx);
        }

        w.blank();
        for segment in ctx.scope().rev() {
            w.line(format!("}} // namespace {segment}"));
        }
        w.finish()
    }
}

fn write_decl(w: &mut Writer, decl: &Decl<'_>, ctx: &RenderContext<'_>) {
    match decl {
        Decl::Comment(text) => w.line(format!("// {text}")),
        Decl::Bytes { name, bytes } => {
            w.line(format!("inline const {BYTES_TYPE} {name} = {{"));
            w.nested(|w| {
                for line in byte_lines(bytes, ctx.bytes_per_line) {
                    w.line(line);
                }
            });
            w.line("};");
        }
        Decl::Str { name, value } => {
            w.line(format!(
                "inline const std::string {name} = \"{}\";",
                escape(value)
            ));
        }
        Decl::Include(_) => {}
        Decl::Accessors(entries) => write_accessors(w, entries),
    }
}

fn write_accessors(w: &mut Writer, entries: &[IndexEntry<'_>]) {
    w.line("// Get all bundled files");
    w.line(format!("inline {FILES_MAP} get_bundled_files() {{"));
    w.nested(|w| {
        w.line(format!("{FILES_MAP} files;"));
        for e in entries {
            w.line(format!("files[\"{}\"] = &{};", escape(e.path), e.symbol));
        }
        w.line("return files;");
    });
    w.line("}");
    w.blank();

    w.line("// Get all bundled file paths");
    w.line(format!("inline {STRING_MAP} get_bundled_file_paths() {{"));
    w.nested(|w| {
        w.line(format!("{STRING_MAP} paths;"));
        for e in entries {
            w.line(format!(
                "paths[\"{}\"] = {}{PATH_SUFFIX};",
                escape(e.path),
                e.symbol
            ));
        }
        w.line("return paths;");
    });
    w.line("}");
    w.blank();

    w.line("// Get all bundled file MIME types");
    w.line(format!("inline {STRING_MAP} get_bundled_file_mime_types() {{"));
    w.nested(|w| {
        w.line(format!("{STRING_MAP} mime_types;"));
        for e in entries {
            w.line(format!(
                "mime_types[\"{}\"] = {}{MIME_SUFFIX};",
                escape(e.path),
                e.symbol
            ));
        }
        w.line("return mime_types;");
    });
    w.line("}");
    w.blank();

    w.line("// Get a bundled file by path");
    w.line(format!(
        "inline const {BYTES_TYPE}* get_bundled_file(const std::string& path) {{"
    ));
    w.nested(|w| {
        w.line("auto files = get_bundled_files();");
        w.line("auto it = files.find(path);");
        w.line("if (it != files.end()) {");
        w.nested(|w| w.line("return it->second;"));
        w.line("}");
        w.line("return nullptr;");
    });
    w.line("}");
    w.blank();

    w.line("// Get a bundled file MIME type by path");
    w.line("inline std::string get_bundled_file_mime_type(const std::string& path) {");
    w.nested(|w| {
        w.line("auto mime_types = get_bundled_file_mime_types();");
        w.line("auto it = mime_types.find(path);");
        w.line("if (it != mime_types.end()) {");
        w.nested(|w| w.line("return it->second;"));
        w.line("}");
        w.line(format!("return \"{}\";", mime::types::OCTET_STREAM));
    });
    w.line("}");
}

/// Escape text for a C++ string literal.
///
/// Control characters use three-digit octal escapes, which never absorb
/// the following character the way `\x` escapes can.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '?' => out.push_str("\\?"),
            c if c.is_ascii_control() => out.push_str(&format!("\\{:03o}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
