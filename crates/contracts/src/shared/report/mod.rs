//! Табличные отчёты в PDF
//!
//! A report is a fixed title block followed by a table with one body row per
//! record, prefixed with a running `No` column. Rendering happens entirely in
//! memory; the caller decides how the bytes reach the user.

pub mod fonts;
pub mod layout;
pub mod pdf;

use thiserror::Error;

pub const REPORT_TITLE: &str = "Saloon Management";
pub const REPORT_ADDRESS: &str = "Saloon, Gampaha";
pub const NUMBER_COLUMN: &str = "No";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("a report needs at least one column")]
    NoColumns,

    #[error("row has {actual} cells, the table has {expected} columns")]
    RowWidth { expected: usize, actual: usize },

    #[error("failed to render PDF: {0}")]
    Render(String),
}

/// Trait для типов, которые могут быть выведены в отчёт
pub trait Reportable {
    /// Entity name used in the subtitle and file name (e.g. "Employee")
    fn report_entity() -> &'static str;

    /// Column titles, without the leading `No` column
    fn report_columns() -> &'static [&'static str];

    /// Cell values in the order of [`Reportable::report_columns`]
    fn report_cells(&self) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportHeader {
    pub title: String,
    pub subtitle: String,
    pub generated_on: String,
    pub address: String,
}

impl ReportHeader {
    /// Standard header for an entity report: `<Entity> Details Report`
    pub fn for_entity(entity: &str, generated_on: &str) -> Self {
        Self {
            title: REPORT_TITLE.to_string(),
            subtitle: format!("{} Details Report", entity),
            generated_on: generated_on.to_string(),
            address: REPORT_ADDRESS.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ReportTable {
    pub fn new(columns: Vec<String>) -> Result<Self, ReportError> {
        if columns.is_empty() {
            return Err(ReportError::NoColumns);
        }
        Ok(Self {
            columns,
            rows: Vec::new(),
        })
    }

    /// Numbered table over `records`, in their order.
    pub fn from_records<T: Reportable>(records: &[T]) -> Result<Self, ReportError> {
        let mut columns = vec![NUMBER_COLUMN.to_string()];
        columns.extend(T::report_columns().iter().map(|c| c.to_string()));

        let mut table = Self::new(columns)?;
        for (index, record) in records.iter().enumerate() {
            let mut cells = vec![(index + 1).to_string()];
            cells.extend(record.report_cells());
            table.push_row(cells)?;
        }
        Ok(table)
    }

    pub fn push_row(&mut self, cells: Vec<String>) -> Result<(), ReportError> {
        if cells.len() != self.columns.len() {
            return Err(ReportError::RowWidth {
                expected: self.columns.len(),
                actual: cells.len(),
            });
        }
        self.rows.push(cells);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

#[derive(Debug, Clone)]
pub struct Report {
    pub header: ReportHeader,
    pub table: ReportTable,
}

impl Report {
    /// Report of `records` for entity `T`, dated `generated_on`.
    pub fn for_records<T: Reportable>(
        records: &[T],
        generated_on: &str,
    ) -> Result<Self, ReportError> {
        Ok(Self {
            header: ReportHeader::for_entity(T::report_entity(), generated_on),
            table: ReportTable::from_records(records)?,
        })
    }

    pub fn pages(&self) -> Vec<layout::PageLayout> {
        layout::layout_report(&self.header, &self.table)
    }

    pub fn to_pdf(&self) -> Result<Vec<u8>, ReportError> {
        pdf::render_pdf(&self.header.subtitle, &self.pages())
    }
}

/// `<Entity>-Details-Report_<date>.pdf`, with characters that are not
/// allowed in file names replaced by `-`.
pub fn report_file_name(entity: &str, generated_on: &str) -> String {
    let date: String = generated_on
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_whitespace() => '-',
            c => c,
        })
        .collect();
    format!("{}-Details-Report_{}.pdf", entity, date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Staff {
        name: &'static str,
        phone: &'static str,
    }

    impl Reportable for Staff {
        fn report_entity() -> &'static str {
            "Staff"
        }

        fn report_columns() -> &'static [&'static str] {
            &["Name", "Contact No"]
        }

        fn report_cells(&self) -> Vec<String> {
            vec![self.name.to_string(), self.phone.to_string()]
        }
    }

    #[test]
    fn test_table_is_numbered_in_input_order() {
        let staff = vec![
            Staff { name: "Zara", phone: "0771234567" },
            Staff { name: "Amal", phone: "0717654321" },
        ];
        let table = ReportTable::from_records(&staff).unwrap();
        assert_eq!(table.columns(), &["No", "Name", "Contact No"]);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0], vec!["1", "Zara", "0771234567"]);
        assert_eq!(table.rows()[1], vec!["2", "Amal", "0717654321"]);
    }

    #[test]
    fn test_table_rejects_bad_shapes() {
        assert_eq!(ReportTable::new(vec![]), Err(ReportError::NoColumns));
        let mut table = ReportTable::new(vec!["A".into(), "B".into()]).unwrap();
        assert_eq!(
            table.push_row(vec!["1".into()]),
            Err(ReportError::RowWidth { expected: 2, actual: 1 })
        );
    }

    #[test]
    fn test_header_for_entity() {
        let header = ReportHeader::for_entity("Supplier", "17/10/2026");
        assert_eq!(header.title, "Saloon Management");
        assert_eq!(header.subtitle, "Supplier Details Report");
        assert_eq!(header.address, "Saloon, Gampaha");
    }

    #[test]
    fn test_report_prints_every_record() {
        let staff: Vec<Staff> = (0..3)
            .map(|_| Staff { name: "Nimal", phone: "0771234567" })
            .collect();
        let report = Report::for_records(&staff, "10/17/2026").unwrap();
        let pages = report.pages();
        let placed: usize = pages.iter().map(|p| p.body_rows.len()).sum();
        assert_eq!(placed, 3);

        let printed = |needle: &str| {
            pages
                .iter()
                .flat_map(|p| &p.ops)
                .filter(|op| matches!(op, layout::DrawOp::Text { text, .. } if text == needle))
                .count()
        };
        assert_eq!(printed("Staff Details Report"), 1);
        assert_eq!(printed("Nimal"), 3);

        let bytes = report.to_pdf().unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_report_file_name() {
        assert_eq!(
            report_file_name("Employee", "10/17/2026"),
            "Employee-Details-Report_10-17-2026.pdf"
        );
        assert_eq!(
            report_file_name("Supplier", "17.10.2026"),
            "Supplier-Details-Report_17.10.2026.pdf"
        );
    }
}
