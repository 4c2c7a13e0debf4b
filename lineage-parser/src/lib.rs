//! # lineage-parser
//!
//! Parser for OCR-derived genealogical registers.
//!
//! A register is loose prose: numbered person entries (`12345. John Doe, born ...`), optional
//! generation headings, marriage sentences and roman-numbered children lists. There is no
//! grammar, only a convention with exceptions, so everything here is heuristic and line based.
//!
//! Pipeline
//!
//!     source text
//!       └─ ocr::clean_ocr_text           typographic quotes and dashes to ASCII
//!       └─ segmenting::segment            line stream -> per-record sections
//!       └─ parsing::parse_section         section -> RecordDraft (plain strings)
//!       └─ registry::PersonRegistry       registration of the parsed record
//!       └─ resolving::Resolver::first_pass   drafts -> PersonRecord with mentions
//!       └─ resolving::Resolver::second_pass  retry placeholders with the full registry
//!
//! [pipeline::RegisterParser] drives all of it; [loader::RegisterLoader] is the file-facing
//! entry point. Rendering to markup lives in `lineage-babel`.
//!
//! File Layout
//!
//!     src
//!       ├── ast              PersonRecord, ChildRef, RichText
//!       ├── lexing           named line patterns, classification order
//!       ├── parsing          per-record classification and post-processing
//!       ├── resolving        mention rewriting, both passes
//!       ├── ocr.rs           typographic cleanup of OCR output
//!       ├── names.rs         name normalization
//!       ├── registry.rs      normalized name <-> id
//!       ├── segmenting.rs    record boundary state machine
//!       ├── pipeline.rs      options, the run driver, ParseOutcome
//!       ├── loader.rs        file and string entry points
//!       ├── error.rs         record errors and the skip log
//!       └── testing.rs       fluent record assertions for tests

pub mod ast;
pub mod error;
pub mod lexing;
pub mod loader;
pub mod names;
pub mod ocr;
pub mod parsing;
pub mod pipeline;
pub mod registry;
pub mod resolving;
pub mod segmenting;
pub mod testing;

pub use ast::{ChildRef, Inline, MarriageStatement, Mention, PersonName, PersonRecord, RichText, Target};
pub use error::{RecordError, SkipEntry, SkipLog};
pub use loader::{LoaderError, RegisterLoader};
pub use pipeline::{ParseOutcome, ParserOptions, RegisterParser};
pub use registry::PersonRegistry;
