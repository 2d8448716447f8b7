//! Line and column lookup for spans.
//!
//! Diagnostics carry byte offsets; humans want `line:column`.
//! [`LineOffsetTable`] pre-computes line starts so each lookup is a
//! binary search instead of a rescan.

/// Pre-computed line offset table for line/column lookup.
///
/// ```
/// use tally_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "TeamA 1-0 TeamB;\nTeamB 2-2 TeamC;";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 17), (2, 1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start. `offsets[0]` is always 0.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineOffsetTable { offsets }
    }

    /// 1-based line number containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX).saturating_add(1)
    }

    /// 1-based `(line, column)`. Columns count characters, not bytes.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self.line_start(line);
        let end = (offset as usize).min(source.len());
        let col = source
            .get(line_start..end)
            .map_or(0, |prefix| prefix.chars().count());
        (line, u32::try_from(col).unwrap_or(u32::MAX).saturating_add(1))
    }

    /// Text of a 1-based line, without its line terminator.
    pub fn line_text<'a>(&self, source: &'a str, line: u32) -> &'a str {
        let start = self.line_start(line).min(source.len());
        let rest = &source[start..];
        let end = rest.find('\n').unwrap_or(rest.len());
        rest[..end].trim_end_matches('\r')
    }

    fn line_start(&self, line: u32) -> usize {
        let idx = line.saturating_sub(1) as usize;
        self.offsets.get(idx).copied().unwrap_or(0) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SOURCE: &str = "TeamA 2-0 TeamB;\n    TeamA 3-0 TeamC;\r\nTeamB 0-1 TeamC;";

    #[test]
    fn test_line_lookup() {
        let table = LineOffsetTable::build(SOURCE);
        assert_eq!(table.line_from_offset(0), 1);
        assert_eq!(table.line_from_offset(16), 1);
        assert_eq!(table.line_from_offset(17), 2);
    }

    #[test]
    fn test_column_lookup() {
        let table = LineOffsetTable::build(SOURCE);
        assert_eq!(table.offset_to_line_col(SOURCE, 21), (2, 5));
    }

    #[test]
    fn test_line_text_strips_terminators() {
        let table = LineOffsetTable::build(SOURCE);
        assert_eq!(table.line_text(SOURCE, 1), "TeamA 2-0 TeamB;");
        assert_eq!(table.line_text(SOURCE, 2), "    TeamA 3-0 TeamC;");
        assert_eq!(table.line_text(SOURCE, 3), "TeamB 0-1 TeamC;");
    }

    #[test]
    fn test_column_after_crlf_line() {
        let table = LineOffsetTable::build(SOURCE);
        assert_eq!(table.line_from_offset(39), 3);
        assert_eq!(table.offset_to_line_col(SOURCE, 45), (3, 7));
    }

    #[test]
    fn test_empty_source() {
        let table = LineOffsetTable::build("");
        assert_eq!(table.offset_to_line_col("", 0), (1, 1));
        assert_eq!(table.line_text("", 1), "");
    }
}
