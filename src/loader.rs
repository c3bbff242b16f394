use crate::error::ExportError;
use crate::types::{LegalStatus, RawRow, Record};
use crate::util::normalize_field;
use csv::ReaderBuilder;

#[derive(Debug, Clone)]
pub struct LoadReport {
    pub total_rows: usize,
    pub parse_errors: usize,
    pub normalized_fields: usize,
}

/// Read the record source in one pass, normalizing as we go.
///
/// Rows that fail to deserialize at all are skipped and counted; missing or
/// empty fields within a row become `"Unknown"`. Neither case aborts the
/// run — only an unreadable source path does.
pub fn load_records(path: &str) -> Result<(Vec<Record>, LoadReport), ExportError> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| ExportError::SourceUnavailable {
            path: path.to_string(),
            source,
        })?;

    let mut total_rows = 0usize;
    let mut parse_errors = 0usize;
    let mut normalized_fields = 0usize;
    let mut records: Vec<Record> = Vec::new();

    for result in rdr.deserialize::<RawRow>() {
        total_rows += 1;
        let row = match result {
            Ok(r) => r,
            Err(_) => {
                parse_errors += 1;
                continue;
            }
        };

        let blank = |f: &Option<String>| {
            f.as_deref().map(str::trim).filter(|v| !v.is_empty()).is_none()
        };
        if blank(&row.province)
            || blank(&row.district)
            || blank(&row.legal_status)
            || blank(&row.zone_code)
        {
            normalized_fields += 1;
        }

        let province = normalize_field(row.province.as_deref());
        let district = normalize_field(row.district.as_deref());
        let status = LegalStatus::from_field(&normalize_field(row.legal_status.as_deref()));
        let zone_code = normalize_field(row.zone_code.as_deref());

        records.push(Record {
            province,
            district,
            status,
            zone_code,
        });
    }

    let report = LoadReport {
        total_rows,
        parse_errors,
        normalized_fields,
    };
    Ok((records, report))
}
