use crate::descriptors::FeatureValue;
use crate::table::Table;

/// Reads CSV text with a header row. Empty cells become null, everything else text.
pub fn from_csv(content: &str) -> eyre::Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let columns = reader
        .headers()
        .map_err(|e| eyre::eyre!("could not read CSV header: {}", e))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect::<Vec<_>>();

    if columns.is_empty() || columns.iter().all(String::is_empty) {
        return Err(eyre::eyre!("CSV has no columns"));
    }

    let mut table = Table::new(columns);
    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(|e| eyre::eyre!("CSV row {}: {}", row_no + 1, e))?;
        if record.len() > table.columns().len() {
            return Err(eyre::eyre!(
                "CSV row {}: expected {} fields, found {}",
                row_no + 1,
                table.columns().len(),
                record.len()
            ));
        }
        let row = record
            .iter()
            .map(|cell| match cell {
                "" => FeatureValue::Null,
                cell => FeatureValue::Text(cell.to_string()),
            })
            .collect();
        table.push_row(row);
    }

    Ok(table)
}

pub fn to_csv(table: &Table) -> eyre::Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(FeatureValue::to_cell))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| eyre::eyre!("could not flush CSV: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read() {
        let table = from_csv("id,smiles\n1,CCO\n2,\n").unwrap();
        assert_eq!(table.columns(), ["id", "smiles"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(0, "smiles"), Some(&FeatureValue::from("CCO")));
        assert_eq!(table.cell(1, "smiles"), Some(&FeatureValue::Null));
    }

    #[test]
    fn test_write_quotes() {
        let mut table = Table::new(vec!["name".to_string(), "ok".to_string()]);
        table.push_row(vec!["a, b".into(), true.into()]);
        table.push_row(vec![FeatureValue::Null, FeatureValue::Float(1.5)]);
        assert_eq!(to_csv(&table).unwrap(), "name,ok\n\"a, b\",true\n,1.5\n");
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = from_csv("id,smiles,name\n1,CCO\n").unwrap();
        assert_eq!(table.cell(0, "name"), Some(&FeatureValue::Null));
    }

    #[test]
    fn test_long_rows_are_rejected() {
        let err = from_csv("id,smiles\n1,CCO\n2,CC,extra\n").unwrap_err();
        assert_eq!(err.to_string(), "CSV row 2: expected 2 fields, found 3");
    }

    #[test]
    fn test_empty_input() {
        assert!(from_csv("").is_err());
    }
}
