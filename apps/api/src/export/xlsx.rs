//! Spreadsheet construction. Workbooks are built entirely in memory;
//! nothing is written to the filesystem.

use rust_xlsxwriter::{Color, Format, FormatUnderline, Url, Workbook, XlsxError};

use crate::models::contact::ContactSummary;
use crate::models::resume::ResumeSummary;

fn header_format() -> Format {
    Format::new().set_bold()
}

fn hyperlink_format() -> Format {
    Format::new()
        .set_font_color(Color::Blue)
        .set_underline(FormatUnderline::Single)
}

/// One sheet of contact submissions: name, email, message.
pub fn contacts_workbook(rows: &[ContactSummary]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let header = header_format();

    for (col, title) in ["Name", "Email", "Message"].iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &header)?;
    }
    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write_string(r, 0, row.name.as_str())?;
        sheet.write_string(r, 1, row.email.as_str())?;
        sheet.write_string(r, 2, row.message.as_str())?;
    }
    sheet.autofit();

    workbook.save_to_buffer()
}

/// One sheet of job applications, with two derived columns appended:
/// download and view links for each row's resume, rendered as clickable
/// hyperlink cells (blue, underlined) rather than plain text.
pub fn applications_workbook(rows: &[ResumeSummary], base_url: &str) -> Result<Vec<u8>, XlsxError> {
    const HEADERS: [&str; 8] = [
        "Id",
        "Name",
        "Phone",
        "Email",
        "Role",
        "Applied At",
        "Download Link",
        "View Link",
    ];

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let header = header_format();
    let link = hyperlink_format();

    for (col, title) in HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &header)?;
    }
    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write_string(r, 0, row.id.as_str())?;
        sheet.write_string(r, 1, row.name.as_str())?;
        sheet.write_string(r, 2, row.phone.as_str())?;
        sheet.write_string(r, 3, row.email.as_str())?;
        sheet.write_string(r, 4, row.role.as_str())?;
        sheet.write_string(r, 5, row.applied_at.format("%Y-%m-%d %H:%M:%S UTC").to_string())?;

        let download = format!("{base_url}/download/{}", row.id);
        let view = format!("{base_url}/view/{}", row.id);
        sheet.write_url_with_format(r, 6, Url::new(download.as_str()), &link)?;
        sheet.write_url_with_format(r, 7, Url::new(view.as_str()), &link)?;
    }
    sheet.autofit();

    workbook.save_to_buffer()
}
