use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{ExoDataset, Planet};

// ---------------------------------------------------------------------------
// Loader errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0} (expected .csv)")]
    UnsupportedExtension(String),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the exoplanet dataset from a CSV file.
///
/// Expected layout: a header row with the archive column names
/// (`pl_name`, `disc_year`, `discoverymethod`, `st_spectype`, `pl_orbsmax`,
/// `sy_dist`; extra columns are ignored). Blank numeric cells deserialize to
/// `None` rather than failing the row.
pub fn load_file(path: &Path) -> Result<ExoDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != "csv" {
        return Err(LoadError::UnsupportedExtension(ext).into());
    }

    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_records(file).with_context(|| format!("parsing {}", path.display()))
}

/// Parse CSV records from any reader. Split out from [`load_file`] so tests
/// can feed in-memory data.
fn read_records<R: Read>(input: R) -> Result<ExoDataset> {
    let mut reader = csv::Reader::from_reader(input);

    let mut planets = Vec::new();
    for (row_no, result) in reader.deserialize::<Planet>().enumerate() {
        let planet = result.with_context(|| format!("CSV row {row_no}"))?;
        planets.push(planet);
    }

    Ok(ExoDataset::from_planets(planets))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
pl_name,disc_year,discoverymethod,st_spectype,pl_orbsmax,sy_dist
Kepler-22 b,2011,Transit,G5,0.849,190.1
PSR B1257+12 b,1992,Pulsar Timing,,0.19,710.0
HR 8799 e,2010,Imaging,A5 V,16.25,
";

    #[test]
    fn parses_archive_columns() {
        let dataset = read_records(SAMPLE.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 3);

        let kepler = &dataset.planets[0];
        assert_eq!(kepler.name, "Kepler-22 b");
        assert_eq!(kepler.disc_year, Some(2011));
        assert_eq!(kepler.discovery_method, "Transit");
        assert_eq!(kepler.orbsmax, Some(0.849));
        assert_eq!(kepler.distance, Some(190.1));
    }

    #[test]
    fn blank_cells_become_none_or_empty() {
        let dataset = read_records(SAMPLE.as_bytes()).unwrap();
        assert_eq!(dataset.planets[1].spectral_type, "");
        assert_eq!(dataset.planets[1].spectral_class(), None);
        assert_eq!(dataset.planets[2].distance, None);
    }

    #[test]
    fn malformed_numeric_cell_fails_the_load() {
        let bad = "\
pl_name,disc_year,discoverymethod,st_spectype,pl_orbsmax,sy_dist
X b,not-a-year,Transit,G2,1.0,10.0
";
        assert!(read_records(bad.as_bytes()).is_err());
    }

    #[test]
    fn non_csv_extension_is_rejected() {
        let err = load_file(Path::new("data/exoplanets.parquet")).unwrap_err();
        assert!(err.to_string().contains("unsupported file extension"));
    }
}
