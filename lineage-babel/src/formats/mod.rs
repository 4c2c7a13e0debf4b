//! Format implementations
//!
//! This module contains all output formats that turn parsed register records into text.

pub mod json;
pub mod latex;
pub mod tag;
pub mod yaml;

pub use json::JsonFormat;
pub use latex::LatexFormat;
pub use tag::TagFormat;
pub use yaml::YamlFormat;
