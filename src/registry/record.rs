// SPDX-License-Identifier: PMPL-1.0-or-later

//! Header-block parsing with RFC-822-style folding.

use crate::error::RegistryError;

/// One registry record: an ordered multimap of field name to value.
///
/// Field names are matched case-insensitively on lookup. Duplicate names keep
/// every value in encounter order; some registry entries legitimately carry
/// several `Description` lines, and only the consumer decides which matter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Parses one record buffer into its fields.
    ///
    /// A field starts at column 0 as `Name: value`. Lines beginning with
    /// whitespace continue the previous field's value, joined by a single
    /// space. An empty line ends the block. Anything else is malformed, and
    /// malformed registry text fails the whole run rather than skipping the
    /// record.
    ///
    /// # Examples
    /// ```
    /// let record = langtab::registry::Record::parse(
    ///     "Type: language\r\nSubtag: en\r\nDescription: English\r\n",
    /// )
    /// .unwrap();
    /// assert_eq!(record.get("subtag"), Some("en"));
    /// ```
    pub fn parse(buffer: &str) -> Result<Self, RegistryError> {
        let mut fields: Vec<(String, String)> = Vec::new();
        for line in buffer.lines() {
            if line.is_empty() {
                break;
            }
            if line.starts_with(' ') || line.starts_with('\t') {
                let Some((_, value)) = fields.last_mut() else {
                    return Err(RegistryError::OrphanContinuation(line.to_string()));
                };
                value.push(' ');
                value.push_str(line.trim());
                continue;
            }
            let Some((name, value)) = line.split_once(':') else {
                return Err(RegistryError::MalformedField(line.to_string()));
            };
            fields.push((name.trim().to_string(), value.trim().to_string()));
        }
        Ok(Self { fields })
    }

    /// First value recorded under `name`, matched case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Every value recorded under `name`, in encounter order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> {
        self.fields
            .iter()
            .filter(move |(field, _)| field.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Number of fields, counting duplicates separately.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
