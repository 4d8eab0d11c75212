//! Rendering method records to target-language source text.
//!
//! The output is meant to be pasted inside a hand-written enclosing class,
//! hence the fixed two-space method indentation.

use super::{Catalog, SECTION_SEPARATOR};
use crate::method::MethodDef;

/// Render a single method definition, trailing blank line included.
pub fn render_method(method: &MethodDef) -> String {
    format!(
        "  public static {} {}({} a, {} b) {{\n    return {};\n  }}\n\n",
        method.return_type,
        method.name,
        method.left.name(),
        method.right.name(),
        method.body
    )
}

/// Render the full catalog: the primitive-pair section, the separator
/// comment, then the arbitrary-precision section.
pub fn render_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    for method in &catalog.primitive_methods {
        out.push_str(&render_method(method));
    }
    out.push_str(SECTION_SEPARATOR);
    out.push('\n');
    for method in &catalog.bignum_methods {
        out.push_str(&render_method(method));
    }
    out
}
