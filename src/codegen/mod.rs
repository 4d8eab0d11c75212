//! Method catalog generation.
//!
//! This module builds the ordered catalog of generated methods in two
//! sections: the primitive-pair section ([`primitives`]) and the
//! arbitrary-precision section ([`bignum`]). Generation only produces
//! [`MethodDef`] records; serializing them to target-language text lives in
//! [`render`].

mod bignum;
mod primitives;
mod render;

pub use render::{render_catalog, render_method};

use serde::{Deserialize, Serialize};

use crate::method::MethodDef;
use crate::GenResult;

/// Comment line separating the two catalog sections, kept verbatim
pub const SECTION_SEPARATOR: &str =
    "  // .....................................................";

/// The full ordered method catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Primitive-pair methods, in emission order
    pub primitive_methods: Vec<MethodDef>,
    /// Arbitrary-precision methods, in emission order
    pub bignum_methods: Vec<MethodDef>,
}

/// Generate the complete method catalog.
///
/// Deterministic: two runs produce identical record sequences.
pub fn generate_catalog() -> GenResult<Catalog> {
    Ok(Catalog {
        primitive_methods: primitives::generate()?,
        bignum_methods: bignum::generate()?,
    })
}
