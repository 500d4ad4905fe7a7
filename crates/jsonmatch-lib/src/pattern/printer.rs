use std::fmt::Write;

use crate::parser::ast::{Element, Expr, ExprKind, Field, Reference};

const INDENT: &str = "    ";

/// Canonical pretty-printer for patterns.
///
/// One field or element per line, four-space indent, no trailing commas.
/// Output always parses back to an equivalent pattern.
pub struct PatternPrinter<'p> {
    root: &'p Expr,
}

impl<'p> PatternPrinter<'p> {
    pub fn new(root: &'p Expr) -> Self {
        Self { root }
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_expr(self.root, 0, w)
    }

    fn format_expr(&self, expr: &Expr, depth: usize, w: &mut impl Write) -> std::fmt::Result {
        match &expr.kind {
            ExprKind::Null => w.write_str("null"),
            ExprKind::Boolean(b) => write!(w, "{}", b),
            ExprKind::Number(n) => write!(w, "{}", n),
            ExprKind::String(s) => write!(w, "\"{}\"", s),
            ExprKind::Binding(name) => write!(w, "<={}>", name.name),
            ExprKind::Reference(reference) => self.format_reference(reference, w),
            ExprKind::BoundLiteral(bound) => {
                write!(w, "<={}> ", bound.name.name)?;
                self.format_expr(&bound.value, depth, w)
            }
            ExprKind::Object(fields) => self.format_object(fields, depth, w),
            ExprKind::Array(elements) => self.format_array(elements, depth, w),
        }
    }

    fn format_object(&self, fields: &[Field], depth: usize, w: &mut impl Write) -> std::fmt::Result {
        if fields.is_empty() {
            return w.write_str("{}");
        }

        w.write_str("{\n")?;
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                w.write_str(",\n")?;
            }
            write!(w, "{}\"{}\"", INDENT.repeat(depth + 1), field.key)?;
            if field.optional {
                w.write_char('?')?;
            }
            w.write_str(": ")?;
            self.format_expr(&field.value, depth + 1, w)?;
        }
        write!(w, "\n{}}}", INDENT.repeat(depth))
    }

    fn format_array(
        &self,
        elements: &[Element],
        depth: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        if elements.is_empty() {
            return w.write_str("[]");
        }

        w.write_str("[\n")?;
        for (i, element) in elements.iter().enumerate() {
            if i > 0 {
                w.write_str(",\n")?;
            }
            write!(w, "{}{}", INDENT.repeat(depth + 1), element.index)?;
            if element.optional {
                w.write_char('?')?;
            }
            w.write_str(": ")?;
            self.format_expr(&element.value, depth + 1, w)?;
        }
        write!(w, "\n{}]", INDENT.repeat(depth))
    }

    fn format_reference(&self, reference: &Reference, w: &mut impl Write) -> std::fmt::Result {
        w.write_char('<')?;
        for (i, segment) in reference.segments().enumerate() {
            if i > 0 {
                w.write_char('.')?;
            }
            w.write_str(&segment.ident.name)?;
            if segment.optional {
                w.write_char('?')?;
            }
        }
        w.write_char('>')
    }
}
