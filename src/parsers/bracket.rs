use super::{LogRecord, RecordParser};

/// Parser for `[timestamp] [level] [name] message...` lines.
///
/// Text before a bracket pair is skipped, so `[t][Info][svc] ok` and
/// `[t] [Info] [svc] ok` parse the same way. Level and name must be non-empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct BracketParser;

impl BracketParser {
    pub fn new() -> Self {
        Self
    }
}

/// Find the next `[...]` field at or after `from`.
/// Returns the field contents and the index just past the closing bracket.
fn next_field(line: &str, from: usize) -> Option<(&str, usize)> {
    let open = from + line[from..].find('[')?;
    let start = open + 1;
    let close = start + line[start..].find(']')?;
    Some((&line[start..close], close + 1))
}

impl RecordParser for BracketParser {
    fn parse<'a>(&self, line: &'a str) -> Option<LogRecord<'a>> {
        let line = line.trim_end_matches(['\r', '\n']);

        let (timestamp, pos) = next_field(line, 0)?;
        let (level, pos) = next_field(line, pos)?;
        let (process, pos) = next_field(line, pos)?;

        if level.is_empty() || process.is_empty() {
            return None;
        }

        Some(LogRecord {
            timestamp,
            level,
            process,
            message: line[pos..].trim_start(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bracket_parser_basic() {
        let parser = BracketParser::new();
        let record = parser
            .parse("[2024-01-01 10:00:00] [Info] [svcA] started ok")
            .unwrap();

        assert_eq!(record.timestamp, "2024-01-01 10:00:00");
        assert_eq!(record.level, "Info");
        assert_eq!(record.process, "svcA");
        assert_eq!(record.message, "started ok");
    }

    #[test]
    fn test_bracket_parser_adjacent_fields() {
        let parser = BracketParser::new();
        let record = parser.parse("[t][Error][svcA] fail").unwrap();

        assert_eq!(record.level, "Error");
        assert_eq!(record.process, "svcA");
        assert_eq!(record.message, "fail");
    }

    #[test]
    fn test_bracket_parser_without_message() {
        let parser = BracketParser::new();
        let record = parser.parse("[t][Warn][svc]").unwrap();
        assert_eq!(record.message, "");
    }

    #[test]
    fn test_bracket_parser_strips_crlf() {
        let parser = BracketParser::new();
        let record = parser.parse("[t][Debug][svc]\r\n").unwrap();
        assert_eq!(record.process, "svc");
        assert_eq!(record.message, "");
    }

    #[test]
    fn test_bracket_parser_keeps_unknown_level() {
        let parser = BracketParser::new();
        let record = parser.parse("[t][Fatal][svc] boom").unwrap();
        assert_eq!(record.level, "Fatal");
    }

    #[test]
    fn test_bracket_parser_empty_timestamp_allowed() {
        let parser = BracketParser::new();
        assert!(parser.parse("[][Info][svc] ok").is_some());
    }

    #[test]
    fn test_bracket_parser_malformed_lines() {
        let parser = BracketParser::new();

        assert_eq!(parser.parse(""), None);
        assert_eq!(parser.parse("plain text line"), None);
        assert_eq!(parser.parse("[t][Info][svcA"), None);
        assert_eq!(parser.parse("[t][Info] svcA ok"), None);
        assert_eq!(parser.parse("[t][][svcA] ok"), None);
        assert_eq!(parser.parse("[t][Info][] ok"), None);
    }

    proptest! {
        #[test]
        fn prop_parser_never_panics(line in "\\PC*") {
            let _ = BracketParser::new().parse(&line);
        }

        #[test]
        fn prop_parser_extracts_generated_fields(
            ts in "[^\\[\\]]{0,12}",
            level in "[A-Za-z]{1,8}",
            name in "[a-zA-Z0-9_-]{1,12}",
            message in "[ -~]{0,20}",
        ) {
            let line = format!("[{}] [{}] [{}] {}", ts, level, name, message);
            let record = BracketParser::new().parse(&line).expect("well-formed line");

            prop_assert_eq!(record.level, level.as_str());
            prop_assert_eq!(record.process, name.as_str());
        }
    }
}
