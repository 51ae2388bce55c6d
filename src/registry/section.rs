// SPDX-License-Identifier: PMPL-1.0-or-later

//! Splitting registry text into `%%`-delimited sections.

use std::io::BufRead;

use crate::error::RegistryError;
use crate::registry::record::Record;

/// The sentinel line separating registry records.
const SEPARATOR: &str = "%%";

/// Splits a line-oriented registry stream into record buffers.
///
/// Each buffer holds every line since the previous separator, re-terminated
/// with CRLF so it parses cleanly as a header block. The separator line is
/// not copied into the buffer; a single line ending stands in for it. Input
/// line endings may be LF or CRLF.
pub struct SectionReader<R> {
    reader: R,
}

impl<R: BufRead> SectionReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Next record buffer, or `None` once the input is exhausted.
    ///
    /// Returns `None` only when no line at all remains. A separator with no
    /// content lines in front of it yields an empty buffer instead, which
    /// parses as an empty record.
    pub fn next_section(&mut self) -> Result<Option<String>, RegistryError> {
        let mut buffer = String::new();
        let mut line = String::new();
        let mut lines = 0usize;
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                break;
            }
            lines += 1;
            let text = line.strip_suffix('\n').unwrap_or(&line);
            let text = text.strip_suffix('\r').unwrap_or(text);
            if text == SEPARATOR {
                buffer.push_str("\r\n");
                break;
            }
            buffer.push_str(text);
            buffer.push_str("\r\n");
        }
        if lines == 0 {
            return Ok(None);
        }
        Ok(Some(buffer))
    }

    /// Adapter fusing section reading and record parsing.
    pub fn records(self) -> Records<R> {
        Records {
            sections: self,
            done: false,
        }
    }
}

/// Iterator over parsed records; stops after the first error.
pub struct Records<R> {
    sections: SectionReader<R>,
    done: bool,
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = Result<Record, RegistryError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.sections.next_section() {
            Ok(Some(buffer)) => match Record::parse(&buffer) {
                Ok(record) => Some(Ok(record)),
                Err(err) => {
                    self.done = true;
                    Some(Err(err))
                }
            },
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn empty_input_ends_immediately() {
        let mut reader = SectionReader::new("".as_bytes());
        assert!(reader.next_section().unwrap().is_none());
        assert!(reader.next_section().unwrap().is_none());
    }

    #[test]
    fn splits_on_separator_lines() {
        let input = "File-Date: 2025-08-18\n%%\nType: language\nSubtag: en\n";
        let mut reader = SectionReader::new(input.as_bytes());
        assert_eq!(
            reader.next_section().unwrap().as_deref(),
            Some("File-Date: 2025-08-18\r\n\r\n")
        );
        assert_eq!(
            reader.next_section().unwrap().as_deref(),
            Some("Type: language\r\nSubtag: en\r\n")
        );
        assert!(reader.next_section().unwrap().is_none());
    }

    #[test]
    fn crlf_input_reads_the_same() {
        let input = "File-Date: 2025-08-18\r\n%%\r\nType: language\r\n";
        let mut reader = SectionReader::new(input.as_bytes());
        assert_eq!(
            reader.next_section().unwrap().as_deref(),
            Some("File-Date: 2025-08-18\r\n\r\n")
        );
        assert_eq!(
            reader.next_section().unwrap().as_deref(),
            Some("Type: language\r\n")
        );
    }

    #[test]
    fn bare_separator_yields_empty_section_not_end() {
        let mut reader = SectionReader::new("%%\n".as_bytes());
        assert_eq!(reader.next_section().unwrap().as_deref(), Some("\r\n"));
        assert!(reader.next_section().unwrap().is_none());
    }

    #[test]
    fn records_iterator_parses_each_section() {
        let input = "File-Date: 2025-08-18\n%%\nType: language\nSubtag: en\nDescription: English\n";
        let mut records = SectionReader::new(input.as_bytes()).records();

        let header = records.next().unwrap().unwrap();
        assert_eq!(header.get("File-Date"), Some("2025-08-18"));

        let entry = records.next().unwrap().unwrap();
        assert_eq!(entry.get("Subtag"), Some("en"));

        assert!(records.next().is_none());
        assert!(records.next().is_none());
    }

    #[test]
    fn records_iterator_stops_after_parse_error() {
        let input = "File-Date: 2025-08-18\n%%\n  orphan continuation\n%%\nType: language\n";
        let mut records = SectionReader::new(input.as_bytes()).records();

        assert!(records.next().unwrap().is_ok());
        assert!(records.next().unwrap().is_err());
        assert!(records.next().is_none());
    }

    struct FailingReader;

    impl io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "broken source"))
        }
    }

    impl io::BufRead for FailingReader {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            Err(io::Error::new(io::ErrorKind::Other, "broken source"))
        }

        fn consume(&mut self, _amt: usize) {}
    }

    #[test]
    fn read_failure_is_not_end_of_input() {
        let mut reader = SectionReader::new(FailingReader);
        let err = reader.next_section().unwrap_err();
        assert!(matches!(err, RegistryError::Io(_)));
    }
}
