//! Record data model
//!
//!     A register is a flat sequence of person records. Each record carries a numbered identifier,
//!     the display name from its header line, a biography, at most one primary marriage and an
//!     ordered children list. Generation headings are not nodes of their own: a heading is carried
//!     by the first record that follows it.
//!
//!     Text fields are [RichText] rather than strings. Cross-reference resolution turns name
//!     mentions into [Mention] inlines whose [Target] is either a real entry id or an unresolved
//!     placeholder. No markup syntax exists at this level, formats in `lineage-babel` decide how a
//!     placeholder looks.
//!
//! Lifecycle
//!
//!     Records are produced once per parse run and are treated as values. The only mutation after
//!     registration is the second resolution pass, which rewrites placeholders in place. See
//!     [crate::resolving] for both passes.

pub mod record;
pub mod rich_text;

pub use record::{Biography, ChildRef, MarriageStatement, PersonName, PersonRecord};
pub use rich_text::{Inline, Mention, RichText, Target};
