//! Output formats for parsed genealogical registers
//!
//!     This crate turns the records produced by `lineage-parser` into text: the LaTeX macro
//!     format the register books are typeset with, plus inspection formats.
//!
//! Architecture
//!
//!     - Format trait: Uniform interface for all formats
//!     - FormatRegistry: Centralized discovery and selection of formats
//!     - Format implementations: Concrete implementations for each supported format
//!
//!     This is a pure lib: it powers the lineage CLI but is shell agnostic, so no code here
//!     prints, reads env vars or touches files.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── common                  # Ordinal numbering shared by formats
//!     ├── formats
//!     │   ├── latex               # \entry, \marriage, \childentry... macros
//!     │   ├── tag                 # XML-like inspection output
//!     │   ├── json
//!     │   └── yaml
//!     ├── lib.rs
//!
//! Mentions
//!
//!     The parser hands over mentions as structured inlines, resolved or not. Each format picks
//!     its own markup for them; nothing upstream knows about LaTeX.

pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;
