// SPDX-License-Identifier: PMPL-1.0-or-later

//! Registry text ingestion: section splitting and record parsing.
//!
//! The IANA language-subtag registry is line-oriented text: records are
//! separated by lines containing exactly `%%`, and each record is a block of
//! `Name: value` header fields with RFC-822 folding (indented lines continue
//! the previous field). [`SectionReader`] produces per-record buffers;
//! [`Record`] parses one buffer into an ordered, case-insensitive multimap.
//!
//! Reference: <https://www.iana.org/assignments/language-subtag-registry>

mod record;
mod section;

pub use record::Record;
pub use section::{Records, SectionReader};
