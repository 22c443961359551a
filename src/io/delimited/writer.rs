use crate::fingerprint::PoseRecord;
use crate::io::error::Error;
use crate::model::table::InteractionTable;
use csv::WriterBuilder;
use std::io::Write;

pub fn write_table<W: Write>(writer: W, table: &InteractionTable, delimiter: u8) -> Result<(), Error> {
    let mut out = WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(writer);

    let mut kinds = vec!["name".to_string(), "pose".to_string()];
    kinds.extend(table.columns.iter().map(|c| c.kind.name().to_string()));
    out.write_record(&kinds)?;

    let mut partners = vec![String::new(), String::new()];
    partners.extend(table.columns.iter().map(|c| c.partner.clone()));
    out.write_record(&partners)?;

    for (i, row) in table.rows.iter().enumerate() {
        let mut record = Vec::with_capacity(table.column_count() + 2);
        record.push(row.name.clone());
        record.push(row.pose.to_string());
        record.extend(table.row(i).unwrap_or_default().iter().map(|cell| cell.to_string()));
        out.write_record(&record)?;
    }

    out.flush()?;
    Ok(())
}

pub fn write_contacts<W: Write>(writer: W, records: &[PoseRecord], delimiter: u8) -> Result<(), Error> {
    let mut out = WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(writer);

    out.write_record(["name", "pose", "interaction", "partner"])?;

    for record in records {
        let pose = (record.pose_id + 1).to_string();
        for label in record.labels.iter() {
            out.write_record([
                record.name.as_str(),
                pose.as_str(),
                label.kind.name(),
                label.partner().as_str(),
            ])?;
        }
    }

    out.flush()?;
    Ok(())
}
