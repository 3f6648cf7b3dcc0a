//! The timezone menu command.

use serde::Serialize;

use coffeechat_core::ZoneTable;

use crate::error::CliResult;

use super::calendars::to_json;

#[derive(Serialize)]
struct ZoneRow<'a> {
    label: &'a str,
    offset: String,
    zone: &'a str,
}

/// Show the timezone menu offered to visitors.
pub fn run(zones: &ZoneTable, json: bool) -> CliResult<()> {
    let rows: Vec<ZoneRow<'_>> = zones
        .labels()
        .filter_map(|label| zones.resolve(label).ok().map(|entry| (label, entry)))
        .map(|(label, entry)| ZoneRow {
            label,
            offset: entry.offset_label(),
            zone: entry.zone.name(),
        })
        .collect();

    if json {
        println!("{}", to_json(&rows)?);
        return Ok(());
    }

    for row in &rows {
        println!("{:<10} {:<10} {}", row.label, row.offset, row.zone);
    }
    Ok(())
}
