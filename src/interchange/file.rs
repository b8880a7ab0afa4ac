use super::InterchangeResult;
use crate::snapshot::ProjectSnapshot;
use crate::timeline::Bar;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Writes a snapshot back out, e.g. to capture a fetched data set as a
/// fixture. Validated on the way out so a bad capture fails loudly here
/// rather than at the next load.
pub fn save_snapshot_to_json<P: AsRef<Path>>(
    snapshot: &ProjectSnapshot,
    path: P,
) -> InterchangeResult<()> {
    super::validate_snapshot(snapshot)?;
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, snapshot)?;
    Ok(())
}

pub fn load_snapshot_from_json<P: AsRef<Path>>(path: P) -> InterchangeResult<ProjectSnapshot> {
    let file = File::open(path)?;
    let snapshot: ProjectSnapshot = serde_json::from_reader(file)?;
    super::validate_snapshot(&snapshot)?;
    Ok(snapshot)
}

/// Materializes the renderer handoff: the flat bar records as a JSON array.
pub fn save_timeline_to_json<P: AsRef<Path>>(bars: &[Bar], path: P) -> InterchangeResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, bars)?;
    Ok(())
}

#[derive(Serialize, Deserialize)]
struct BarCsvRecord {
    id: String,
    name: String,
    start: String,
    end: String,
    parent: String,
    class_tag: String,
    progress: u8,
}

impl From<&Bar> for BarCsvRecord {
    fn from(bar: &Bar) -> Self {
        Self {
            id: bar.id.to_string(),
            name: bar.name.clone(),
            start: bar.start.format("%Y-%m-%d").to_string(),
            end: bar.end.format("%Y-%m-%d").to_string(),
            parent: bar.parent.map(|p| p.to_string()).unwrap_or_default(),
            class_tag: bar.kind.as_str().to_string(),
            progress: bar.progress,
        }
    }
}

pub fn save_timeline_to_csv<P: AsRef<Path>>(bars: &[Bar], path: P) -> InterchangeResult<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    for bar in bars {
        writer.serialize(BarCsvRecord::from(bar))?;
    }
    writer.flush()?;
    Ok(())
}
