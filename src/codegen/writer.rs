//! Indentation-aware line buffer used by the syntax backends.

/// Accumulates generated source one line at a time.
#[derive(Debug, Default)]
pub struct Writer {
    out: String,
    depth: usize,
    indent: &'static str,
}

impl Writer {
    pub fn new(indent: &'static str) -> Self {
        Self {
            out: String::new(),
            depth: 0,
            indent,
        }
    }

    /// Write one line at the current depth.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.out.push_str(self.indent);
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    /// Write an empty line.
    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Run `f` one level deeper.
    pub fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.indent();
        f(self);
        self.dedent();
    }

    pub fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_lines() {
        let mut w = Writer::new("    ");
        w.line("a {");
        w.nested(|w| {
            w.line("b;");
            w.blank();
            w.line("");
        });
        w.line("}");
        assert_eq!(w.finish(), "a {\n    b;\n\n\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut w = Writer::new("  ");
        w.dedent();
        w.line("x");
        assert_eq!(w.finish(), "x\n");
    }
}
