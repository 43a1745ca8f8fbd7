//! Interactive run: obtain cities, search, report.

use std::io::{BufRead, Write};

use log::{error, info};

use crate::city::{CityStore, GenerateConfig, Point};
use crate::config::RunConfig;
use crate::memory::{MemorySnapshot, MemoryUsage};
use crate::report::{summary_lines, write_best_tour, BestTour, ConsoleEcho, FileTourLog};
use crate::search::{BruteForceRunner, SearchConfig, SearchResult, Tee};
use crate::{Error, Result};

/// Where the cities of a run come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Generate,
    Load,
}

impl Choice {
    pub fn parse(text: &str) -> Result<Self> {
        match text.trim() {
            "1" => Ok(Self::Generate),
            "2" => Ok(Self::Load),
            other => Err(Error::InvalidChoice(other.to_string())),
        }
    }
}

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub points: Vec<Point>,
    pub result: SearchResult,
    pub best: BestTour,
    pub memory: Option<MemoryUsage>,
}

pub struct App {
    config: RunConfig,
}

impl App {
    pub fn new(config: RunConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Runs the whole interactive flow. Prompts are written to `out` and
    /// answers read from `input`.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<SearchReport> {
        let points = self.acquire_cities(input, out)?;
        self.search(points, out)
    }

    /// Asks whether to generate or load, and returns the city set.
    ///
    /// A failed save after generation is reported and ignored; a failed or
    /// empty load ends the run.
    pub fn acquire_cities<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
    ) -> Result<Vec<Point>> {
        let answer = prompt(
            input,
            out,
            "Generate a new set of cities (1) or load from an existing file (2)? ",
        )?;

        match Choice::parse(&answer)? {
            Choice::Generate => {
                let answer = prompt(
                    input,
                    out,
                    &format!(
                        "How many cities to generate? (max: {}) ",
                        self.config.max_cities_hint
                    ),
                )?;
                let count = parse_count(&answer)?;

                let mut generate = GenerateConfig::default()
                    .with_count(count)
                    .with_range(self.config.coordinate_range);
                if let Some(seed) = self.config.seed {
                    generate = generate.with_seed(seed);
                }
                let points = CityStore::generate_with(&generate)?;

                if let Err(e) = CityStore::save(&self.config.cities_path, &points) {
                    error!("failed to save cities: {e}");
                }
                Ok(points)
            }
            Choice::Load => {
                let points = CityStore::load_or_empty(&self.config.cities_path);
                if points.is_empty() {
                    return Err(Error::invalid_input(format!(
                        "no cities loaded from {}",
                        self.config.cities_path.display()
                    )));
                }
                Ok(points)
            }
        }
    }

    /// Searches `points` exhaustively, logging every tour, then prints the
    /// summary and saves the best tour. Output files are best-effort.
    pub fn search<W: Write>(&self, points: Vec<Point>, out: &mut W) -> Result<SearchReport> {
        let search_config = SearchConfig::default().with_soft_limit(self.config.max_cities_hint);
        let tour_log = FileTourLog::create_or_report(&self.config.tours_path);

        let before = MemorySnapshot::take();
        let (result, tour_log) = if self.config.echo_tours {
            let mut sink = Tee(tour_log, ConsoleEcho::new(&mut *out));
            let result = BruteForceRunner::run_with_sink(&points, &search_config, &mut sink)?;
            (result, sink.into_inner().0)
        } else {
            let mut sink = tour_log;
            let result = BruteForceRunner::run_with_sink(&points, &search_config, &mut sink)?;
            (result, sink)
        };
        let after = MemorySnapshot::take();

        match tour_log.finish() {
            Ok(lines) => info!("wrote {lines} tours to {}", self.config.tours_path.display()),
            Err(e) => error!("failed to write tour log: {e}"),
        }

        let memory = before.zip(after).map(|(b, a)| b.usage_until(a));
        writeln!(out)?;
        for line in summary_lines(&result, memory.as_ref()) {
            writeln!(out, "{line}")?;
        }
        out.flush()?;

        let best = BestTour::from_result(&points, &result);
        if let Err(e) = write_best_tour(&self.config.best_tour_path, &best) {
            error!("failed to save best tour: {e}");
        }

        Ok(SearchReport {
            points,
            result,
            best,
            memory,
        })
    }
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<String> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::invalid_input("unexpected end of input"));
    }
    Ok(line.trim().to_string())
}

fn parse_count(text: &str) -> Result<usize> {
    match text.trim().parse::<usize>() {
        Ok(0) => Err(Error::invalid_input("city count must be at least 1")),
        Ok(count) => Ok(count),
        Err(_) => Err(Error::invalid_input(format!("not a city count: {text:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::read_best_tour;
    use std::fs;
    use std::io::Cursor;

    fn app_in(dir: &std::path::Path) -> App {
        App::new(RunConfig::in_dir(dir).with_seed(7)).unwrap()
    }

    fn write_triangle(path: &std::path::Path) {
        fs::write(
            path,
            "Cidade 1: (0, 0)\nCidade 2: (3, 0)\nCidade 3: (0, 4)\n",
        )
        .unwrap();
    }

    #[test]
    fn test_choice_parse() {
        assert_eq!(Choice::parse("1").unwrap(), Choice::Generate);
        assert_eq!(Choice::parse(" 2 ").unwrap(), Choice::Load);
        assert!(matches!(Choice::parse("3"), Err(Error::InvalidChoice(_))));
        assert!(matches!(Choice::parse("abc"), Err(Error::InvalidChoice(_))));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("4").unwrap(), 4);
        assert_eq!(parse_count("12").unwrap(), 12);
        assert!(parse_count("0").is_err());
        assert!(parse_count("-1").is_err());
        assert!(parse_count("many").is_err());
    }

    #[test]
    fn test_generate_flow_writes_all_files() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_in(dir.path());
        let mut input = Cursor::new("1\n4\n");
        let mut out = Vec::new();

        let report = app.run(&mut input, &mut out).unwrap();

        assert_eq!(report.points.len(), 4);
        assert_eq!(report.result.evaluated, 24);

        let cities = CityStore::load(&app.config().cities_path).unwrap();
        assert_eq!(cities, report.points);

        let tours = fs::read_to_string(&app.config().tours_path).unwrap();
        assert_eq!(tours.lines().count(), 24);

        let best = read_best_tour(&app.config().best_tour_path).unwrap();
        assert_eq!(best.tour(), report.result.best_tour);
        assert_eq!(best.edges.len(), 4);

        let console = String::from_utf8(out).unwrap();
        assert!(console.starts_with("Generate a new set of cities (1)"));
        assert!(console.contains("How many cities to generate? (max: 8) "));
        assert_eq!(console.matches("Tour tested: ").count(), 24);
        assert!(console.contains("Best tour found: "));
        assert!(console.contains("Total distance: "));
    }

    #[test]
    fn test_load_flow_triangle() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_in(dir.path());
        write_triangle(&app.config().cities_path);
        let mut input = Cursor::new("2\n");
        let mut out = Vec::new();

        let report = app.run(&mut input, &mut out).unwrap();

        assert_eq!(report.result.evaluated, 6);
        assert!((report.result.best_distance - 12.0).abs() < 1e-9);
        let best = fs::read_to_string(&app.config().best_tour_path).unwrap();
        assert_eq!(
            best,
            "Melhor caminho:\n1 -> 2: 3.00 Km\n2 -> 3: 5.00 Km\n3 -> 1: 4.00 Km\nDistancia total: 12.00 Km\n"
        );

        let tours = fs::read_to_string(&app.config().tours_path).unwrap();
        let first = tours.lines().next().unwrap();
        assert!(first.starts_with("1 -> 2 -> 3 -> 1, 12.00, "));
    }

    #[test]
    fn test_invalid_choice_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_in(dir.path());
        let mut input = Cursor::new("3\n");
        let mut out = Vec::new();

        assert!(matches!(
            app.run(&mut input, &mut out),
            Err(Error::InvalidChoice(_))
        ));
        assert!(!app.config().tours_path.exists());
    }

    #[test]
    fn test_load_failure_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_in(dir.path());
        fs::write(&app.config().cities_path, "Cidade 1: 3, 4\n").unwrap();
        let mut input = Cursor::new("2\n");
        let mut out = Vec::new();

        assert!(matches!(
            app.run(&mut input, &mut out),
            Err(Error::InvalidInput(_))
        ));
        assert!(!app.config().best_tour_path.exists());
    }

    #[test]
    fn test_missing_answer() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_in(dir.path());
        let mut input = Cursor::new("1\n");
        let mut out = Vec::new();
        assert!(app.run(&mut input, &mut out).is_err());
    }

    #[test]
    fn test_unwritable_outputs_do_not_abort() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let config = RunConfig::in_dir(dir.path())
            .with_tours_path(missing.join("caminhos.txt"))
            .with_best_tour_path(missing.join("caminhominimo.txt"))
            .with_echo_tours(false);
        write_triangle(&config.cities_path);
        let app = App::new(config).unwrap();
        let mut input = Cursor::new("2\n");
        let mut out = Vec::new();

        let report = app.run(&mut input, &mut out).unwrap();

        assert_eq!(report.result.evaluated, 6);
        let console = String::from_utf8(out).unwrap();
        assert!(!console.contains("Tour tested: "));
        assert!(console.contains("Total distance: 12.00 Km"));
    }

    #[test]
    fn test_oversized_count_only_warns() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig::in_dir(dir.path()).with_seed(3).with_echo_tours(false);
        let app = App {
            config: RunConfig {
                max_cities_hint: 2,
                ..config
            },
        };
        let mut input = Cursor::new("1\n3\n");
        let mut out = Vec::new();

        let report = app.run(&mut input, &mut out).unwrap();
        assert_eq!(report.result.evaluated, 6);
    }
}
