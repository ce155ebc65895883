use serde::Deserialize;

// ---------------------------------------------------------------------------
// Planet – one row of the exoplanet archive export
// ---------------------------------------------------------------------------

/// A single exoplanet observation. Serde field names follow the NASA
/// exoplanet archive column names so the CSV deserializes directly.
///
/// Numeric fields are optional: the archive leaves cells blank when a value
/// was never measured, and the aggregation layer drops or reclassifies such
/// rows per chart rather than failing the load.
#[derive(Debug, Clone, Deserialize)]
pub struct Planet {
    /// Planet designation, e.g. "Kepler-22 b".
    #[serde(rename = "pl_name", default)]
    pub name: String,

    /// Year of discovery.
    #[serde(rename = "disc_year")]
    pub disc_year: Option<i32>,

    /// Raw discovery method string, e.g. "Transit" or "Pulsar Timing".
    #[serde(rename = "discoverymethod", default)]
    pub discovery_method: String,

    /// Stellar spectral type of the host star, e.g. "G2 V". May be blank.
    #[serde(rename = "st_spectype", default)]
    pub spectral_type: String,

    /// Orbital semi-major axis in AU.
    #[serde(rename = "pl_orbsmax")]
    pub orbsmax: Option<f64>,

    /// Distance from Earth in parsecs.
    #[serde(rename = "sy_dist")]
    pub distance: Option<f64>,
}

impl Planet {
    /// Spectral class letter: first character of the spectral type,
    /// ASCII-uppercased. `None` for a blank spectral type.
    pub fn spectral_class(&self) -> Option<char> {
        self.spectral_type
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
    }
}

// ---------------------------------------------------------------------------
// ExoDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset. Read-only after load; every chart aggregates
/// from the same planet slice.
#[derive(Debug, Clone, Default)]
pub struct ExoDataset {
    pub planets: Vec<Planet>,
}

impl ExoDataset {
    pub fn from_planets(planets: Vec<Planet>) -> Self {
        ExoDataset { planets }
    }

    /// Number of planets.
    pub fn len(&self) -> usize {
        self.planets.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet_with_spectype(st: &str) -> Planet {
        Planet {
            name: "test b".to_string(),
            disc_year: Some(2010),
            discovery_method: "Transit".to_string(),
            spectral_type: st.to_string(),
            orbsmax: None,
            distance: None,
        }
    }

    #[test]
    fn spectral_class_uppercases_first_char() {
        assert_eq!(planet_with_spectype("G2 V").spectral_class(), Some('G'));
        assert_eq!(planet_with_spectype("m4").spectral_class(), Some('M'));
    }

    #[test]
    fn spectral_class_blank_is_none() {
        assert_eq!(planet_with_spectype("").spectral_class(), None);
    }
}
