//! Result rows as printed to the console

use std::fmt;

/// One column value from a result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Null,
    /// Numeric column, kept in the server's textual form.
    Number(String),
    Text(String),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("None"),
            Self::Number(n) => f.write_str(n),
            Self::Text(s) => write_quoted(f, s),
        }
    }
}

/// Single quotes unless the text holds a `'` and no `"`. Backslashes, the
/// chosen quote and control characters are escaped.
fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    write!(f, "{}", quote)?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            c if c == quote => write!(f, "\\{}", c)?,
            c if c.is_ascii_control() => write!(f, "\\x{:02x}", c as u32)?,
            c => write!(f, "{}", c)?,
        }
    }
    write!(f, "{}", quote)
}

/// A fetched row, printed as a tuple literal: `(1, 'Bq2Doris_Success')`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row(pub Vec<Cell>);

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, cell) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", cell)?;
        }
        // Single-element tuples keep their trailing comma
        if self.0.len() == 1 {
            f.write_str(",")?;
        }
        f.write_str(")")
    }
}

/// Whether a MySQL column type prints as a bare number.
pub fn is_numeric_type(type_name: &str) -> bool {
    let base = type_name.trim_end_matches(" UNSIGNED");
    matches!(
        base,
        "TINYINT"
            | "SMALLINT"
            | "MEDIUMINT"
            | "INT"
            | "BIGINT"
            | "DECIMAL"
            | "FLOAT"
            | "DOUBLE"
            | "YEAR"
            | "BOOLEAN"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_row_renders_as_tuple() {
        let row = Row(vec![
            Cell::Number("1".to_string()),
            Cell::Text("Bq2Doris_Success".to_string()),
        ]);
        assert_eq!(row.to_string(), "(1, 'Bq2Doris_Success')");
    }

    #[test]
    fn test_single_and_empty_rows() {
        assert_eq!(Row(vec![Cell::Number("1".into())]).to_string(), "(1,)");
        assert_eq!(Row::default().to_string(), "()");
    }

    #[test]
    fn test_null_and_escaping() {
        let row = Row(vec![Cell::Null, Cell::Text("a \\ path\n".into())]);
        assert_eq!(row.to_string(), r"(None, 'a \\ path\n')");
    }

    #[test]
    fn test_text_quoting_picks_quote_and_escapes() {
        let text = |s: &str| Cell::Text(s.to_string()).to_string();

        assert_eq!(text("it's"), r#""it's""#);
        assert_eq!(text(r#"say "hi""#), r#"'say "hi"'"#);
        assert_eq!(text(r#"it's "quoted""#), r#"'it\'s "quoted"'"#);
        assert_eq!(text("tab\there\r\n"), r"'tab\there\r\n'");
        assert_eq!(text("bell\u{7}"), r"'bell\x07'");
        assert_eq!(text("ünï"), "'ünï'");
    }

    #[test]
    fn test_numeric_type_names() {
        assert!(is_numeric_type("INT"));
        assert!(is_numeric_type("BIGINT UNSIGNED"));
        assert!(is_numeric_type("DECIMAL"));
        assert!(!is_numeric_type("VARCHAR"));
        assert!(!is_numeric_type("DATETIME"));
        assert!(!is_numeric_type("TEXT"));
    }
}
