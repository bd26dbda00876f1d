//! Output format selection.

use std::path::Path;

/// How the cleaned table is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// UTF-8 CSV with a byte-order mark.
    Csv,
    /// xlsx workbook, one sheet.
    Excel,
}

impl OutputFormat {
    /// Picks the format from the file extension alone.
    ///
    /// `.xls` and `.xlsx` (any case) select [`OutputFormat::Excel`];
    /// everything else, including no extension, is CSV.
    pub fn from_path(path: &Path) -> Self {
        let is_excel = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xls") || ext.eq_ignore_ascii_case("xlsx"));
        if is_excel { Self::Excel } else { Self::Csv }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Excel => "xlsx",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excel_extensions() {
        assert_eq!(OutputFormat::from_path(Path::new("out.xlsx")), OutputFormat::Excel);
        assert_eq!(OutputFormat::from_path(Path::new("out.XLS")), OutputFormat::Excel);
        assert_eq!(OutputFormat::from_path(Path::new("dir/out.Xlsx")), OutputFormat::Excel);
    }

    #[test]
    fn test_everything_else_is_csv() {
        assert_eq!(OutputFormat::from_path(Path::new("out.csv")), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_path(Path::new("out")), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_path(Path::new("out.txt")), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_path(Path::new("out.xlsx.bak")), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_path(Path::new("xlsx")), OutputFormat::Csv);
    }
}
