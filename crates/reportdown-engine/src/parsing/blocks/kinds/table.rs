/// Pipe table rows.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    /// A trimmed line wrapped in pipes with at least one character between them.
    pub fn is_row(trimmed: &str) -> bool {
        trimmed.len() >= 3 && trimmed.starts_with(Self::PIPE) && trimmed.ends_with(Self::PIPE)
    }

    /// Splits a row into trimmed cells, dropping the outer pipes.
    pub fn cells(row: &str) -> Vec<&str> {
        let inner = &row[1..row.len() - 1];
        inner.split(Self::PIPE).map(str::trim).collect()
    }

    /// A `|---|:--:|` row. Only the first cell may have whitespace before
    /// its dashes; any cell may have whitespace before the closing pipe.
    pub fn is_separator(row: &str) -> bool {
        let inner = &row[1..row.len() - 1];
        inner.split(Self::PIPE).enumerate().all(|(i, cell)| {
            let cell = if i == 0 { cell.trim_start() } else { cell };
            Self::is_separator_cell(cell.trim_end())
        })
    }

    fn is_separator_cell(cell: &str) -> bool {
        let cell = cell.strip_prefix(':').unwrap_or(cell);
        let cell = cell.strip_suffix(':').unwrap_or(cell);
        !cell.is_empty() && cell.chars().all(|c| c == '-')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_rows() {
        assert!(Table::is_row("|a|b|"));
        assert!(Table::is_row("|x|"));
        assert!(!Table::is_row("||"));
        assert!(!Table::is_row("|a|b"));
        assert!(!Table::is_row("a|b|"));
    }

    #[test]
    fn splits_and_trims_cells() {
        assert_eq!(Table::cells("| a | b |"), vec!["a", "b"]);
        assert_eq!(Table::cells("|a||c|"), vec!["a", "", "c"]);
    }

    #[test]
    fn separator_rows() {
        assert!(Table::is_separator("|---|---|"));
        assert!(Table::is_separator("|:--|--:|:-:|"));
        assert!(Table::is_separator("|  ---|--- |"));
    }

    #[test]
    fn non_separator_rows() {
        assert!(!Table::is_separator("|---|x|"));
        assert!(!Table::is_separator("| |"));
        assert!(!Table::is_separator("|:|"));
        assert!(!Table::is_separator("|---||"));
    }

    #[test]
    fn padded_later_cells_are_not_a_separator() {
        assert!(!Table::is_separator("| --- | --- |"));
        assert!(!Table::is_separator("|---| ---|"));
    }
}
