//! KPI summary as an XML Spreadsheet 2003 workbook.
//!
//! The format is plain XML, so it is written with quick-xml and opens in
//! Excel and LibreOffice without any binary container.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event};

use readmit_common::format_numeric;

use crate::error::Result;
use crate::summary::{KpiRow, KpiValue};

pub const SPREADSHEET_NS: &str = "urn:schemas-microsoft-com:office:spreadsheet";
pub const KPI_SHEET_NAME: &str = "KPI Summary";

/// Write `rows` under a `Metric`/`Value` header into a single-sheet workbook.
pub fn write_kpi_workbook<W: Write>(writer: W, rows: &[KpiRow]) -> Result<()> {
    let mut xml = Writer::new_with_indent(writer, b' ', 1);
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    xml.write_event(Event::PI(BytesPI::new(r#"mso-application progid="Excel.Sheet""#)))?;

    let mut workbook = BytesStart::new("Workbook");
    workbook.push_attribute(("xmlns", SPREADSHEET_NS));
    workbook.push_attribute(("xmlns:ss", SPREADSHEET_NS));
    xml.write_event(Event::Start(workbook))?;

    let mut worksheet = BytesStart::new("Worksheet");
    worksheet.push_attribute(("ss:Name", KPI_SHEET_NAME));
    xml.write_event(Event::Start(worksheet))?;
    xml.write_event(Event::Start(BytesStart::new("Table")))?;

    write_row(&mut xml, &[("String", "Metric".to_string()), ("String", "Value".to_string())])?;
    for row in rows {
        let value = match row.value {
            KpiValue::Percent(_) => ("String", row.value.to_string()),
            KpiValue::Number(value) => ("Number", format_numeric(value)),
            KpiValue::Count(value) => ("Number", value.to_string()),
        };
        write_row(&mut xml, &[("String", row.metric.to_string()), value])?;
    }

    xml.write_event(Event::End(BytesEnd::new("Table")))?;
    xml.write_event(Event::End(BytesEnd::new("Worksheet")))?;
    xml.write_event(Event::End(BytesEnd::new("Workbook")))?;
    xml.get_mut().flush()?;
    Ok(())
}

fn write_row<W: Write>(xml: &mut Writer<W>, cells: &[(&str, String)]) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("Row")))?;
    for (data_type, text) in cells {
        xml.write_event(Event::Start(BytesStart::new("Cell")))?;
        let mut data = BytesStart::new("Data");
        data.push_attribute(("ss:Type", *data_type));
        xml.write_event(Event::Start(data))?;
        xml.write_event(Event::Text(BytesText::new(text)))?;
        xml.write_event(Event::End(BytesEnd::new("Data")))?;
        xml.write_event(Event::End(BytesEnd::new("Cell")))?;
    }
    xml.write_event(Event::End(BytesEnd::new("Row")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::kpi_summary_rows;
    use readmit_model::KpiSummary;

    #[test]
    fn workbook_has_typed_cells() {
        let rows = kpi_summary_rows(&KpiSummary {
            readmission_rate: 11.2,
            avg_los_readmitted: 4.5,
            polypharmacy_rate: 80.0,
            encounter_count: 1200,
            readmitted_count: 560,
        });
        let mut out = Vec::new();
        write_kpi_workbook(&mut out, &rows).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(text.contains(r#"<?mso-application progid="Excel.Sheet"?>"#));
        assert!(text.contains(r#"<Worksheet ss:Name="KPI Summary">"#));
        assert!(text.contains(r#"<Data ss:Type="String">11.2 %</Data>"#));
        assert!(text.contains(r#"<Data ss:Type="Number">4.5</Data>"#));
        assert!(text.contains(r#"<Data ss:Type="Number">1200</Data>"#));
        // metric text is escaped
        assert!(text.contains("30-Day Readmission Rate (&lt;30 / all encounters)"));
        assert_eq!(text.matches("<Row>").count(), 6);
    }
}
