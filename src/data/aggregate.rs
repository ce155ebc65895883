use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use super::model::Planet;

// ---------------------------------------------------------------------------
// Bucket – the rendering unit for the categorical charts
// ---------------------------------------------------------------------------

/// An aggregated (key, count) pair. Keys are unique within one aggregated
/// result; display order is imposed by each chart's canonical key list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub key: String,
    pub count: usize,
}

impl Bucket {
    fn new(key: impl Into<String>, count: usize) -> Self {
        Bucket {
            key: key.into(),
            count,
        }
    }
}

/// One equal-width histogram bin over `[lo, hi)` (the last bin is closed).
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceBin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

// ---------------------------------------------------------------------------
// Canonical key orderings
// ---------------------------------------------------------------------------

/// Display order of the discovery-method chart; also the normalization
/// targets. Any raw method outside the first five maps to "Other".
pub const DISCOVERY_METHODS: [&str; 6] = [
    "Transit",
    "Timing Variations",
    "Radial Velocity",
    "Imaging",
    "Microlensing",
    "Other",
];

/// The five spectral classes the star-type and habitability charts accept.
pub const STAR_CLASSES: [char; 5] = ['A', 'F', 'G', 'K', 'M'];
const STAR_CLASS_LABELS: [&str; 5] = ["A", "F", "G", "K", "M"];

/// Year span of the discoveries line chart. Years outside it are dropped;
/// years inside it always get a bucket, zero-filled if need be.
pub const DISCOVERY_YEARS: RangeInclusive<i32> = 1992..=2023;

/// Bin count of the distance histogram.
pub const DISTANCE_BIN_COUNT: usize = 70;

// ---------------------------------------------------------------------------
// Generic group-by-key counting
// ---------------------------------------------------------------------------

/// Count planets by a derived key. Planets for which the key function
/// returns `None` are dropped.
fn count_by<K, F>(planets: &[Planet], key_fn: F) -> BTreeMap<K, usize>
where
    K: Ord,
    F: Fn(&Planet) -> Option<K>,
{
    let mut counts = BTreeMap::new();
    for planet in planets {
        if let Some(key) = key_fn(planet) {
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    counts
}

/// Arrange counted keys in canonical order, then stably re-sort by
/// descending count so ties keep the canonical order. Zero-count keys are
/// omitted (they were never counted).
fn ordered_buckets(counts: BTreeMap<&'static str, usize>, order: &[&str]) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = order
        .iter()
        .filter_map(|&key| counts.get(key).map(|&count| Bucket::new(key, count)))
        .collect();
    buckets.sort_by(|a, b| b.count.cmp(&a.count));
    buckets
}

// ---------------------------------------------------------------------------
// Discovery method
// ---------------------------------------------------------------------------

/// Normalize a raw discovery-method string into one of the six canonical
/// categories. Anything containing "Timing Variations" (eclipse, transit or
/// pulsation timing) collapses into that category; the four other known
/// methods match exactly; everything else is "Other".
pub fn normalize_method(raw: &str) -> &'static str {
    if raw.contains("Timing Variations") {
        return "Timing Variations";
    }
    match raw {
        "Transit" => "Transit",
        "Radial Velocity" => "Radial Velocity",
        "Imaging" => "Imaging",
        "Microlensing" => "Microlensing",
        _ => "Other",
    }
}

/// Count planets per canonical discovery method. Raw strings normalizing to
/// the same category are merged, so every input planet lands in exactly one
/// bucket.
pub fn method_buckets(planets: &[Planet]) -> Vec<Bucket> {
    let counts = count_by(planets, |p| Some(normalize_method(&p.discovery_method)));
    ordered_buckets(counts, &DISCOVERY_METHODS)
}

// ---------------------------------------------------------------------------
// Stellar spectral class
// ---------------------------------------------------------------------------

fn canonical_class(planet: &Planet) -> Option<char> {
    planet
        .spectral_class()
        .filter(|c| STAR_CLASSES.contains(c))
}

/// Count planets per host-star spectral class, restricted to A/F/G/K/M.
/// Blank or non-canonical spectral types are excluded entirely.
pub fn star_class_buckets(planets: &[Planet]) -> Vec<Bucket> {
    let counts = count_by(planets, canonical_class);
    let labeled: BTreeMap<&'static str, usize> = STAR_CLASSES
        .iter()
        .zip(STAR_CLASS_LABELS.iter())
        .filter_map(|(c, &label)| counts.get(c).map(|&n| (label, n)))
        .collect();
    ordered_buckets(labeled, &STAR_CLASS_LABELS)
}

// ---------------------------------------------------------------------------
// Habitability
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Habitability {
    Uninhabitable,
    Habitable,
}

impl Habitability {
    pub fn label(self) -> &'static str {
        match self {
            Habitability::Uninhabitable => "Uninhabitable",
            Habitability::Habitable => "Habitable",
        }
    }
}

/// Habitable-zone test: a pure function of (spectral class, orbital
/// semi-major axis in AU). Each canonical class has an open interval of
/// orbital distances considered habitable; outside it the planet is
/// uninhabitable. Returns `None` for classes outside A/F/G/K/M.
pub fn classify_habitability(class: char, orbsmax: f64) -> Option<Habitability> {
    let (lo, hi) = match class {
        'A' => (8.5, 12.5),
        'F' => (1.5, 2.2),
        'G' => (0.95, 1.4),
        'K' => (0.38, 0.56),
        'M' => (0.08, 0.12),
        _ => return None,
    };
    if orbsmax > lo && orbsmax < hi {
        Some(Habitability::Habitable)
    } else {
        Some(Habitability::Uninhabitable)
    }
}

/// Two-pass habitability aggregation: keep only planets orbiting a star
/// with a canonical spectral class, then classify each by the habitable-zone
/// test. A canonical-class planet with no recorded semi-major axis fails
/// every range test and counts as uninhabitable.
///
/// Always returns exactly two buckets, `[Uninhabitable, Habitable]`, even
/// when a count is zero.
pub fn habitability_buckets(planets: &[Planet]) -> Vec<Bucket> {
    let mut habitable = 0;
    let mut uninhabitable = 0;
    for planet in planets {
        let Some(class) = canonical_class(planet) else {
            continue;
        };
        // A canonical class always classifies; a missing orbit fails the
        // range test and lands in the uninhabitable bucket.
        match classify_habitability(class, planet.orbsmax.unwrap_or(0.0)) {
            Some(Habitability::Habitable) => habitable += 1,
            _ => uninhabitable += 1,
        }
    }
    vec![
        Bucket::new(Habitability::Uninhabitable.label(), uninhabitable),
        Bucket::new(Habitability::Habitable.label(), habitable),
    ]
}

// ---------------------------------------------------------------------------
// Discoveries per year
// ---------------------------------------------------------------------------

/// Count discoveries per year over the full chart span. Every year in
/// `DISCOVERY_YEARS` gets an entry (zero when nothing was discovered);
/// records without a year or outside the span are dropped.
pub fn yearly_counts(planets: &[Planet]) -> Vec<(i32, usize)> {
    let counts = count_by(planets, |p| {
        p.disc_year.filter(|y| DISCOVERY_YEARS.contains(y))
    });
    DISCOVERY_YEARS
        .map(|year| (year, counts.get(&year).copied().unwrap_or(0)))
        .collect()
}

// ---------------------------------------------------------------------------
// Distance histogram
// ---------------------------------------------------------------------------

/// Partition planets into `bin_count` equal-width bins across the observed
/// distance range. Bin boundaries are fixed by the observed minimum and
/// maximum; every planet with a finite distance falls into exactly one bin
/// (the maximum lands in the last bin). An empty input yields no bins; a
/// degenerate range collapses to a single bin.
pub fn distance_bins(planets: &[Planet], bin_count: usize) -> Vec<DistanceBin> {
    let distances: Vec<f64> = planets
        .iter()
        .filter_map(|p| p.distance)
        .filter(|d| d.is_finite())
        .collect();

    let Some((&first, rest)) = distances.split_first() else {
        return Vec::new();
    };
    let (min, max) = rest.iter().fold((first, first), |(lo, hi), &d| {
        (lo.min(d), hi.max(d))
    });

    if bin_count == 0 {
        return Vec::new();
    }
    if max == min {
        return vec![DistanceBin {
            lo: min,
            hi: max,
            count: distances.len(),
        }];
    }

    let width = (max - min) / bin_count as f64;
    let mut bins: Vec<DistanceBin> = (0..bin_count)
        .map(|i| DistanceBin {
            lo: min + i as f64 * width,
            hi: min + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for d in distances {
        let idx = (((d - min) / width) as usize).min(bin_count - 1);
        bins[idx].count += 1;
    }
    bins
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn planet(method: &str, spectype: &str, orbsmax: Option<f64>) -> Planet {
        Planet {
            name: "test b".to_string(),
            disc_year: Some(2015),
            discovery_method: method.to_string(),
            spectral_type: spectype.to_string(),
            orbsmax,
            distance: None,
        }
    }

    fn planet_at(distance: Option<f64>) -> Planet {
        Planet {
            distance,
            ..planet("Transit", "G2 V", Some(1.0))
        }
    }

    fn planet_in(year: Option<i32>) -> Planet {
        Planet {
            disc_year: year,
            ..planet("Transit", "G2 V", Some(1.0))
        }
    }

    // -- discovery method --

    #[test]
    fn unknown_methods_merge_into_other() {
        let planets = vec![
            planet("Transit", "", None),
            planet("Transit", "", None),
            planet("Pulsar Timing", "", None),
        ];
        let buckets = method_buckets(&planets);
        assert_eq!(
            buckets,
            vec![Bucket::new("Transit", 2), Bucket::new("Other", 1)]
        );
    }

    #[test]
    fn timing_variation_variants_collapse() {
        assert_eq!(
            normalize_method("Eclipse Timing Variations"),
            "Timing Variations"
        );
        assert_eq!(
            normalize_method("Transit Timing Variations"),
            "Timing Variations"
        );
        assert_eq!(normalize_method("Astrometry"), "Other");
        assert_eq!(normalize_method("Radial Velocity"), "Radial Velocity");
    }

    #[test]
    fn method_buckets_sorted_by_descending_count() {
        let planets = vec![
            planet("Imaging", "", None),
            planet("Imaging", "", None),
            planet("Imaging", "", None),
            planet("Transit", "", None),
            planet("Microlensing", "", None),
            planet("Microlensing", "", None),
        ];
        let buckets = method_buckets(&planets);
        let keys: Vec<&str> = buckets
            .iter()
            .map(|b| b.key.as_str())
            .collect();
        assert_eq!(keys, vec!["Imaging", "Microlensing", "Transit"]);
    }

    #[test]
    fn method_counts_sum_to_input_size() {
        let planets = vec![
            planet("Transit", "", None),
            planet("Radial Velocity", "", None),
            planet("Disk Kinematics", "", None),
            planet("", "", None),
        ];
        let total: usize = method_buckets(&planets).iter().map(|b| b.count).sum();
        assert_eq!(total, planets.len());
    }

    // -- spectral class --

    #[test]
    fn star_classes_outside_canon_are_excluded() {
        let planets = vec![
            planet("Transit", "G2 V", None),
            planet("Transit", "g8", None),
            planet("Transit", "B9", None),
            planet("Transit", "", None),
            planet("Transit", "K0 III", None),
        ];
        let buckets = star_class_buckets(&planets);
        assert_eq!(
            buckets,
            vec![Bucket::new("G", 2), Bucket::new("K", 1)]
        );
        let kept: usize = buckets.iter().map(|b| b.count).sum();
        assert_eq!(kept, 3); // B-type and blank rows dropped
    }

    #[test]
    fn star_class_ties_keep_canonical_order() {
        let planets = vec![
            planet("Transit", "M3", None),
            planet("Transit", "A5", None),
            planet("Transit", "F8", None),
        ];
        let buckets = star_class_buckets(&planets);
        let keys: Vec<&str> = buckets
            .iter()
            .map(|b| b.key.as_str())
            .collect();
        assert_eq!(keys, vec!["A", "F", "M"]);
    }

    // -- habitability --

    #[test]
    fn g_star_habitable_zone() {
        assert_eq!(
            classify_habitability('G', 1.1),
            Some(Habitability::Habitable)
        );
        assert_eq!(
            classify_habitability('G', 5.0),
            Some(Habitability::Uninhabitable)
        );
    }

    #[test]
    fn zone_bounds_are_exclusive() {
        assert_eq!(
            classify_habitability('K', 0.38),
            Some(Habitability::Uninhabitable)
        );
        assert_eq!(
            classify_habitability('K', 0.56),
            Some(Habitability::Uninhabitable)
        );
        assert_eq!(
            classify_habitability('A', 9.0),
            Some(Habitability::Habitable)
        );
    }

    #[test]
    fn non_canonical_class_is_unclassified() {
        assert_eq!(classify_habitability('B', 1.0), None);
        assert_eq!(classify_habitability('x', 1.0), None);
    }

    #[test]
    fn habitability_buckets_are_fixed_and_exhaustive() {
        let planets = vec![
            planet("Transit", "G2 V", Some(1.1)),  // habitable
            planet("Transit", "G2 V", Some(5.0)),  // uninhabitable
            planet("Transit", "M1", Some(0.1)),    // habitable
            planet("Transit", "K4", None),         // no orbit -> uninhabitable
            planet("Transit", "B9", Some(1.0)),    // dropped
            planet("Transit", "", Some(1.0)),      // dropped
        ];
        let buckets = habitability_buckets(&planets);
        assert_eq!(
            buckets,
            vec![Bucket::new("Uninhabitable", 2), Bucket::new("Habitable", 2)]
        );
    }

    #[test]
    fn habitability_is_idempotent() {
        let planets = vec![
            planet("Transit", "F5", Some(1.8)),
            planet("Transit", "A0", Some(10.0)),
        ];
        assert_eq!(habitability_buckets(&planets), habitability_buckets(&planets));
    }

    #[test]
    fn habitability_always_two_buckets() {
        let buckets = habitability_buckets(&[]);
        assert_eq!(
            buckets,
            vec![Bucket::new("Uninhabitable", 0), Bucket::new("Habitable", 0)]
        );
    }

    // -- discoveries per year --

    #[test]
    fn yearly_counts_cover_full_span_with_zero_fill() {
        let planets = vec![
            planet_in(Some(1995)),
            planet_in(Some(1995)),
            planet_in(Some(2023)),
            planet_in(Some(1989)), // before the span, dropped
            planet_in(None),       // no year, dropped
        ];
        let series = yearly_counts(&planets);
        assert_eq!(series.len(), 32);
        assert_eq!(series.first(), Some(&(1992, 0)));
        assert_eq!(series.last(), Some(&(2023, 1)));
        assert!(series.contains(&(1995, 2)));
        assert!(series.contains(&(2000, 0)));
    }

    // -- distance histogram --

    #[test]
    fn distance_bins_partition_the_observed_range() {
        let planets: Vec<Planet> = [10.0, 12.5, 15.0, 20.0, 20.0]
            .iter()
            .map(|&d| planet_at(Some(d)))
            .collect();
        let bins = distance_bins(&planets, 4);

        assert_eq!(bins.len(), 4);
        assert_eq!(bins[0].lo, 10.0);
        assert_eq!(bins[3].hi, 20.0);

        // Every record falls into exactly one bin; the max lands in the last.
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 5);
        assert_eq!(bins[3].count, 2);
    }

    #[test]
    fn distance_bins_skip_planets_without_distance() {
        let planets = vec![planet_at(Some(1.0)), planet_at(None), planet_at(Some(3.0))];
        let total: usize = distance_bins(&planets, 2).iter().map(|b| b.count).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn distance_bins_degenerate_range() {
        let planets = vec![planet_at(Some(7.0)), planet_at(Some(7.0))];
        let bins = distance_bins(&planets, 70);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 2);
    }

    #[test]
    fn distance_bins_empty_input() {
        assert!(distance_bins(&[], 70).is_empty());
        assert!(distance_bins(&[planet_at(None)], 70).is_empty());
    }
}
