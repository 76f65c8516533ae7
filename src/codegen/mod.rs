//! Source generation for bundled assets.
//!
//! # Module Structure
//!
//! - `decl` - Declarations and units assembled before serialization
//! - `encode` - Byte literal rendering
//! - `writer` - Indented line buffer
//! - `target` - Per-language serialization (`Syntax`)
//! - `emit` - Unit planning and file output

mod decl;
mod emit;
mod encode;
pub mod target;
mod writer;

pub use decl::{Decl, IndexEntry, Unit, UnitKind};
pub use emit::{EmitReport, Emitter};
pub use encode::byte_lines;
pub use target::syntax_for;
pub use writer::Writer;
