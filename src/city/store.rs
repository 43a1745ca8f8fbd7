//! City generation and the flat `cidades.txt` text format.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::GenerateConfig;
use super::types::Point;
use crate::{Error, Result};

const LABEL: &str = "Cidade";

/// Produces, loads and saves city sets.
pub struct CityStore;

impl CityStore {
    /// Generates `count` distinct cities with coordinates in `[0, range)`.
    ///
    /// Duplicate draws are rejected and redrawn; the returned order is the
    /// order in which the distinct cities were first drawn.
    pub fn generate<R: Rng>(count: usize, range: u32, rng: &mut R) -> Result<Vec<Point>> {
        GenerateConfig {
            count,
            range,
            seed: None,
        }
        .validate()?;

        let upper = i32::try_from(range)
            .map_err(|_| Error::invalid_input(format!("coordinate range {range} too large")))?;

        let mut seen = HashSet::with_capacity(count);
        let mut points = Vec::with_capacity(count);
        let mut rejected = 0usize;

        while points.len() < count {
            let candidate = Point::new(rng.random_range(0..upper), rng.random_range(0..upper));
            if seen.insert(candidate) {
                points.push(candidate);
            } else {
                rejected += 1;
            }
        }

        debug!("generated {count} cities in [0, {range}) with {rejected} rejected draws");
        Ok(points)
    }

    /// Generates cities from a [`GenerateConfig`], seeding the RNG from
    /// `config.seed` or OS entropy.
    pub fn generate_with(config: &GenerateConfig) -> Result<Vec<Point>> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::generate(config.count, config.range, &mut rng)
    }

    /// Reads a city file, one `Cidade <index>: (<x>, <y>)` record per line.
    ///
    /// Any line that does not follow the pattern fails the whole load.
    pub fn load(path: impl AsRef<Path>) -> Result<Vec<Point>> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::file(path, e))?;

        let points = text
            .lines()
            .enumerate()
            .map(|(idx, line)| parse_city_line(line).ok_or_else(|| Error::parse(idx + 1, line)))
            .collect::<Result<Vec<_>>>()?;

        info!("loaded {} cities from {}", points.len(), path.display());
        Ok(points)
    }

    /// Like [`CityStore::load`], but reports the failure and yields an
    /// empty set instead of an error.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Vec<Point> {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(points) => points,
            Err(e) => {
                error!("failed to load cities: {e}");
                Vec::new()
            }
        }
    }

    /// Writes one record per city with 1-based labels.
    pub fn save(path: impl AsRef<Path>, points: &[Point]) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::file(path, e))?;
        let mut writer = BufWriter::new(file);

        for (idx, point) in points.iter().enumerate() {
            writeln!(writer, "{}", format_city_line(idx + 1, point))
                .map_err(|e| Error::file(path, e))?;
        }
        writer.flush().map_err(|e| Error::file(path, e))?;

        info!("saved {} cities to {}", points.len(), path.display());
        Ok(())
    }
}

/// Formats a single record, e.g. `Cidade 3: (12, 40)`.
pub fn format_city_line(label: usize, point: &Point) -> String {
    format!("{LABEL} {label}: ({}, {})", point.x, point.y)
}

/// Parses a single record. The label index is checked to be numeric but
/// otherwise ignored; the position in the file decides the city index.
pub fn parse_city_line(line: &str) -> Option<Point> {
    let rest = line.trim().strip_prefix(LABEL)?;
    let (label, coords) = rest.split_once(':')?;
    label.trim().parse::<usize>().ok()?;

    let inner = coords.trim().strip_prefix('(')?.strip_suffix(')')?;
    let (x, y) = inner.split_once(',')?;
    Some(Point::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}
