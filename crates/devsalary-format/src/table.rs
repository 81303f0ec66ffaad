//! ASCII table output format.

use devsalary_types::StatsReport;
use std::io::Write;

use crate::{FormatError, Formatter};

/// Column headings, in column order.
pub const COLUMN_TITLES: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

/// ASCII table formatter.
///
/// Produces a bordered table with the report title embedded in the top
/// border:
///
/// ```text
/// +HeadHunter Москва------+------------------+
/// | Язык программирования | Вакансий найдено | ...
/// +-----------------------+------------------+
/// | Python                | 120              | ...
/// +-----------------------+------------------+
/// ```
#[derive(Debug, Clone)]
pub struct TableFormatter {
    /// Whether to embed the report title in the top border.
    show_title: bool,
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableFormatter {
    /// Creates a new table formatter that shows the title.
    #[must_use]
    pub const fn new() -> Self {
        Self { show_title: true }
    }

    /// Sets whether the report title is embedded in the top border.
    #[must_use]
    pub const fn with_title(mut self, show: bool) -> Self {
        self.show_title = show;
        self
    }
}

/// Width of a cell in characters.
fn cell_width(cell: &str) -> usize {
    cell.chars().count()
}

/// Builds a horizontal border such as `+-----+---+`.
fn border(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

/// Overlays the title onto a border right after the left corner.
///
/// The title is dropped when it does not fit between the corners.
fn titled_border(border: &str, title: &str) -> String {
    let border: Vec<char> = border.chars().collect();
    let title_width = cell_width(title);
    if title.is_empty() || title_width + 2 > border.len() {
        return border.into_iter().collect();
    }

    let mut line = String::with_capacity(border.len() * 2);
    line.push(border[0]);
    line.push_str(title);
    line.extend(&border[title_width + 1..]);
    line
}

/// Builds a data row such as `| a   | b |`.
fn row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        let padding = width - cell_width(cell);
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(padding + 1));
        line.push('|');
    }
    line
}

impl Formatter for TableFormatter {
    fn write_report<W: Write>(
        &self,
        report: &StatsReport,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let header: Vec<String> = COLUMN_TITLES.iter().map(ToString::to_string).collect();
        let body: Vec<Vec<String>> = report
            .iter()
            .map(|(language, stat)| {
                vec![
                    language.to_string(),
                    stat.vacancies_found().to_string(),
                    stat.vacancies_processed().to_string(),
                    stat.avg_salary().to_string(),
                ]
            })
            .collect();

        let mut widths: Vec<usize> = header.iter().map(|cell| cell_width(cell)).collect();
        for cells in &body {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell_width(cell));
            }
        }

        let separator = border(&widths);
        let top = if self.show_title {
            titled_border(&separator, report.title())
        } else {
            separator.clone()
        };

        writeln!(writer, "{top}")?;
        writeln!(writer, "{}", row(&header, &widths))?;
        writeln!(writer, "{separator}")?;
        for cells in &body {
            writeln!(writer, "{}", row(cells, &widths))?;
        }
        writeln!(writer, "{separator}")?;

        Ok(())
    }

    fn extension(&self) -> &str {
        "txt"
    }
}
