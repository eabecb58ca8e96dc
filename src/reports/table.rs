//! Bordered text grid used by every table report.

use crate::Result;
use core::fmt::Write;
use owo_colors::OwoColorize;

/// Colour applied to a cell's text when colours are enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellStyle {
    #[default]
    Plain,
    Red,
    Green,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    text: String,
    style: CellStyle,
}

impl Cell {
    #[must_use]
    pub fn styled(text: impl Into<String>, style: CellStyle) -> Self {
        Self { text: text.into(), style }
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self::styled(text, CellStyle::Plain)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::styled(text, CellStyle::Plain)
    }
}

#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
    wrap_width: Option<usize>,
    row_lines: bool,
}

impl Table {
    #[must_use]
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: Vec::new(),
            wrap_width: None,
            row_lines: false,
        }
    }

    /// Word-wrap every cell so no column is wider than `width`.
    #[must_use]
    pub const fn wrap_at(mut self, width: usize) -> Self {
        self.wrap_width = Some(width);
        self
    }

    /// Draw a separator line between consecutive rows.
    #[must_use]
    pub const fn with_row_lines(mut self) -> Self {
        self.row_lines = true;
        self
    }

    /// Append a row; missing trailing cells render empty and extra cells are dropped.
    pub fn push(&mut self, row: impl IntoIterator<Item = Cell>) {
        let mut row: Vec<Cell> = row.into_iter().take(self.headers.len()).collect();
        row.resize_with(self.headers.len(), Cell::default);
        self.rows.push(row);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render<W: Write>(&self, use_colors: bool, writer: &mut W) -> Result<()> {
        let header_lines: Vec<Vec<String>> = self.headers.iter().map(|h| self.cell_lines(h)).collect();
        let body: Vec<Vec<Vec<String>>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(|cell| self.cell_lines(&cell.text)).collect())
            .collect();

        let mut widths: Vec<usize> = header_lines.iter().map(|lines| max_width(lines)).collect();
        for row in &body {
            for (width, lines) in widths.iter_mut().zip(row) {
                *width = (*width).max(max_width(lines));
            }
        }

        let border = border_line(&widths);

        writeln!(writer, "{border}")?;
        write_row(writer, &widths, &header_lines, None, use_colors)?;
        writeln!(writer, "{border}")?;

        for (index, (row, cells)) in body.iter().zip(&self.rows).enumerate() {
            if index > 0 && self.row_lines {
                writeln!(writer, "{border}")?;
            }
            write_row(writer, &widths, row, Some(cells), use_colors)?;
        }

        if !self.rows.is_empty() {
            writeln!(writer, "{border}")?;
        }

        Ok(())
    }

    fn cell_lines(&self, text: &str) -> Vec<String> {
        let lines: Vec<String> = text
            .lines()
            .flat_map(|line| match self.wrap_width {
                Some(width) => wrap_text(line, width),
                None => vec![line.to_string()],
            })
            .collect();

        if lines.is_empty() { vec![String::new()] } else { lines }
    }
}

fn write_row<W: Write>(
    writer: &mut W,
    widths: &[usize],
    row: &[Vec<String>],
    cells: Option<&[Cell]>,
    use_colors: bool,
) -> Result<()> {
    let height = row.iter().map(Vec::len).max().unwrap_or(1);

    for line_index in 0..height {
        write!(writer, "|")?;
        for (column, (width, lines)) in widths.iter().zip(row).enumerate() {
            let text = lines.get(line_index).map_or("", String::as_str);
            let padding = width - text.chars().count();
            let style = cells.and_then(|c| c.get(column)).map_or(CellStyle::Plain, |c| c.style);

            write!(writer, " ")?;
            match style {
                CellStyle::Red if use_colors => write!(writer, "{}", text.red())?,
                CellStyle::Green if use_colors => write!(writer, "{}", text.green())?,
                CellStyle::Plain | CellStyle::Red | CellStyle::Green => write!(writer, "{text}")?,
            }
            write!(writer, "{:padding$} |", "")?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn max_width(lines: &[String]) -> usize {
    lines.iter().map(|line| line.chars().count()).max().unwrap_or(0)
}

/// Word-wrap a single line to `width` characters; words longer than `width` stay whole.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let separator_len = usize::from(!current_line.is_empty());

        if !current_line.is_empty() && current_len + separator_len + word_len > width {
            lines.push(core::mem::take(&mut current_line));
            current_len = 0;
        } else if !current_line.is_empty() {
            current_line.push(' ');
            current_len += 1;
        }

        current_line.push_str(word);
        current_len += word_len;
    }

    if !current_line.is_empty() || lines.is_empty() {
        lines.push(current_line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(table: &Table, use_colors: bool) -> String {
        let mut output = String::new();
        table.render(use_colors, &mut output).unwrap();
        output
    }

    #[test]
    fn test_simple_grid() {
        let mut table = Table::new(&["ID", "Name"]);
        table.push([Cell::from("1"), Cell::from("Portal")]);
        table.push([Cell::from("22"), Cell::from("Gateway")]);

        let expected = "\
+----+---------+
| ID | Name    |
+----+---------+
| 1  | Portal  |
| 22 | Gateway |
+----+---------+
";
        assert_eq!(render(&table, false), expected);
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let table = Table::new(&["A"]);
        assert!(table.is_empty());
        assert_eq!(render(&table, false), "+---+\n| A |\n+---+\n");
    }

    #[test]
    fn test_multiline_cells_and_row_lines() {
        let mut table = Table::new(&["Key", "Value"]).with_row_lines();
        table.push([Cell::from("a"), Cell::from("one\ntwo")]);
        table.push([Cell::from("b"), Cell::from("three")]);

        let expected = "\
+-----+-------+
| Key | Value |
+-----+-------+
| a   | one   |
|     | two   |
+-----+-------+
| b   | three |
+-----+-------+
";
        assert_eq!(render(&table, false), expected);
    }

    #[test]
    fn test_wrap_limits_column_width() {
        let mut table = Table::new(&["Text"]).wrap_at(10);
        table.push([Cell::from("alpha beta gamma delta")]);

        let output = render(&table, false);
        assert!(output.lines().all(|line| line.chars().count() <= 14), "{output}");
        assert!(output.contains("| alpha beta |"));
        assert!(output.contains("| gamma      |"));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let mut table = Table::new(&["A", "B"]);
        table.push([Cell::from("x")]);
        assert!(render(&table, false).contains("| x |   |"));
    }

    #[test]
    fn test_styles_only_with_colors() {
        let mut table = Table::new(&["Status"]);
        table.push([Cell::styled("REQUIRE_AUTH", CellStyle::Red)]);
        table.push([Cell::styled("PROCESSED", CellStyle::Green)]);

        assert!(!render(&table, false).contains('\x1b'));

        let colored = render(&table, true);
        assert!(colored.contains(&"REQUIRE_AUTH".red().to_string()));
        assert!(colored.contains(&"PROCESSED".green().to_string()));
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("short text", 80), vec!["short text"]);
        assert_eq!(wrap_text("", 80), vec![""]);
        assert_eq!(wrap_text("word1 word2 word3", 17), vec!["word1 word2 word3"]);
        assert_eq!(wrap_text("word1 word2 word3", 11), vec!["word1 word2", "word3"]);
        assert_eq!(wrap_text("unbreakable-long-word x", 5), vec!["unbreakable-long-word", "x"]);
    }
}
