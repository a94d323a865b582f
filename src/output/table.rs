//! Plain ASCII table rendering
//!
//! Tables have a centered title banner, a heading row, and data rows, with
//! columns sized to their widest cell.

/// A titled table built up from heading and data rows
#[derive(Debug, Clone)]
pub struct AsciiTable {
    title: String,
    headings: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl AsciiTable {
    /// Creates an empty table with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            headings: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Sets the heading row
    pub fn set_heading<I, S>(mut self, headings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headings = headings.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a data row; short rows are padded with empty cells
    pub fn add_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// Renders the table to a string, one line per row, no trailing newline
    pub fn render(&self) -> String {
        let columns = self
            .headings
            .len()
            .max(self.rows.iter().map(Vec::len).max().unwrap_or(0))
            .max(1);

        // Column width = widest cell in that column, headings included.
        let mut widths = vec![0usize; columns];
        for (i, heading) in self.headings.iter().enumerate() {
            widths[i] = widths[i].max(heading.chars().count());
        }
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        // Inner width: cells padded by one space each side, plus separators.
        let mut inner: usize = widths.iter().map(|w| w + 2).sum::<usize>() + (columns - 1);
        if self.title.chars().count() > inner {
            // Widen the last column so the title always fits.
            let extra = self.title.chars().count() - inner;
            widths[columns - 1] += extra;
            inner += extra;
        }

        let mut lines = Vec::new();
        lines.push(format!(".{}.", "-".repeat(inner)));
        lines.push(format!("|{:^inner$}|", self.title, inner = inner));
        lines.push(format!("|{}|", "-".repeat(inner)));

        if !self.headings.is_empty() {
            lines.push(render_row(&self.headings, &widths));
            lines.push(format!(
                "|{}|",
                widths
                    .iter()
                    .map(|w| "-".repeat(w + 2))
                    .collect::<Vec<_>>()
                    .join("|")
            ));
        }

        for row in &self.rows {
            lines.push(render_row(row, &widths));
        }

        lines.push(format!("'{}'", "-".repeat(inner)));
        lines.join("\n")
    }
}

/// Renders one row with cells left-aligned to their column widths
fn render_row(cells: &[String], widths: &[usize]) -> String {
    let empty = String::new();
    let rendered: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            let cell = cells.get(i).unwrap_or(&empty);
            format!(" {:<width$} ", cell, width = w)
        })
        .collect();
    format!("|{}|", rendered.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_table() {
        let mut table = AsciiTable::new("Books").set_heading(["Title", "Pages"]);
        table.add_row(["Dune", "412"]);
        table.add_row(["Solaris", "204"]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], ".-----------------.");
        assert_eq!(lines[1], "|      Books      |");
        assert_eq!(lines[2], "|-----------------|");
        assert_eq!(lines[3], "| Title   | Pages |");
        assert_eq!(lines[4], "|---------|-------|");
        assert_eq!(lines[5], "| Dune    | 412   |");
        assert_eq!(lines[6], "| Solaris | 204   |");
        assert_eq!(lines[7], "'-----------------'");
    }

    #[test]
    fn test_all_lines_same_width() {
        let mut table =
            AsciiTable::new("A very long table title indeed").set_heading(["X", "Y"]);
        table.add_row(["1", "2"]);

        let rendered = table.render();
        let widths: Vec<usize> = rendered.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let mut table = AsciiTable::new("T").set_heading(["A", "B", "C"]);
        table.add_row(["only"]);

        let rendered = table.render();
        assert!(rendered.contains("| only |   |   |"));
    }

    #[test]
    fn test_table_without_headings() {
        let mut table = AsciiTable::new("Bare");
        table.add_row(["cell"]);

        let rendered = table.render();
        assert!(rendered.contains("| cell |"));
        // No heading separator row
        assert_eq!(rendered.lines().count(), 5);
    }
}
