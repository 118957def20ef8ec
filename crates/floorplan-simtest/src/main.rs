//! Floor-plan Headless Layout Harness
//!
//! Validates requirement fixtures and the plans generated from them.
//! Runs entirely in-process: no persistence, no rendering.
//!
//! Usage:
//!   cargo run -p floorplan-simtest
//!   cargo run -p floorplan-simtest -- --verbose

use floorplan_logic::constants::WALL_THICKNESS;
use floorplan_logic::engine::LayoutVariant;
use floorplan_logic::geometry::validate_layout;
use floorplan_logic::model::{RoomType, UserRequirements};
use floorplan_logic::summary::summarize;
use floorplan_logic::validation::validate_requirements;
use floorplan_service::{generate, plan, ProjectSnapshot, VARIANT_COUNT};
use log::{Level, LevelFilter, Metadata, Record};
use serde::Deserialize;

// ── Requirement fixtures ────────────────────────────────────────────────
const FIXTURES_JSON: &str = include_str!("../../../data/sample_requirements.json");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Fixture {
    name: String,
    expect_valid: bool,
    requirements: UserRequirements,
}

// ── Logging ─────────────────────────────────────────────────────────────

struct StdoutLogger;

impl log::Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let tag = match record.level() {
                Level::Error => "ERROR",
                Level::Warn => "WARN ",
                Level::Info => "INFO ",
                Level::Debug => "DEBUG",
                Level::Trace => "TRACE",
            };
            println!("  [{}] {}", tag, record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StdoutLogger = StdoutLogger;

fn init_logging(verbose: bool) {
    if let Err(e) = log::set_logger(&LOGGER) {
        eprintln!("logger already installed: {}", e);
        return;
    }
    log::set_max_level(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

impl TestResult {
    fn new(name: String, passed: bool, detail: String) -> Self {
        Self {
            name,
            passed,
            detail,
        }
    }
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    init_logging(verbose);
    println!("=== Floor-plan Layout Harness ===\n");

    let mut results = Vec::new();

    let fixtures: Vec<Fixture> = match serde_json::from_str(FIXTURES_JSON) {
        Ok(f) => f,
        Err(e) => {
            println!("  ✗ fixtures_parse: JSON parse error: {}", e);
            std::process::exit(1);
        }
    };
    results.push(TestResult::new(
        "fixtures_loaded".into(),
        !fixtures.is_empty(),
        format!("{} requirement fixtures loaded", fixtures.len()),
    ));

    for fixture in &fixtures {
        println!("--- {} ---", fixture.name);
        results.extend(check_fixture(fixture, verbose));
    }

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

fn check_fixture(fixture: &Fixture, verbose: bool) -> Vec<TestResult> {
    let name = &fixture.name;
    let req = &fixture.requirements;
    let mut results = Vec::new();

    let errors = validate_requirements(req);
    results.push(TestResult::new(
        format!("{name}/validation"),
        errors.is_empty() == fixture.expect_valid,
        if errors.is_empty() {
            "no validation errors".into()
        } else {
            errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ")
        },
    ));

    if !fixture.expect_valid {
        results.push(TestResult::new(
            format!("{name}/plan_blocked"),
            plan(req).is_err(),
            "plan() refuses invalid requirements".into(),
        ));
        return results;
    }

    let plans = match plan(req) {
        Ok(p) => p,
        Err(errors) => {
            results.push(TestResult::new(
                format!("{name}/plan"),
                false,
                format!("{} validation errors", errors.len()),
            ));
            return results;
        }
    };

    for (variant, result) in LayoutVariant::ALL.iter().zip(&plans) {
        let label = format!("{name}/{}", variant.name());

        let dims_ok = result.width == req.plot_width
            && result.height == req.plot_depth
            && result.wall_thickness == WALL_THICKNESS;
        results.push(TestResult::new(
            format!("{label}/dimensions"),
            dims_ok,
            format!(
                "{}x{} m, wall {} m",
                result.width, result.height, result.wall_thickness
            ),
        ));

        let issues = validate_layout(result);
        results.push(TestResult::new(
            format!("{label}/geometry"),
            issues.is_empty(),
            if issues.is_empty() {
                format!("{} rooms, no issues", result.rooms.len())
            } else {
                issues
                    .iter()
                    .map(|i| i.message.clone())
                    .collect::<Vec<_>>()
                    .join("; ")
            },
        ));

        let placed = req
            .all_rooms()
            .all(|cfg| result.rooms.iter().filter(|r| r.id == cfg.id).count() == 1);
        results.push(TestResult::new(
            format!("{label}/all_rooms_placed"),
            placed,
            format!("{} requested rooms", req.room_count()),
        ));

        if verbose {
            let summary = summarize(result);
            println!(
                "  {}: {} bedrooms, {} ensuites, {} bathrooms, {} common, {} corridor legs, {:.0}% utilization",
                variant.name(),
                summary.count(RoomType::Bedroom),
                summary.count(RoomType::Ensuite),
                summary.count(RoomType::Bathroom),
                summary.count(RoomType::Common),
                summary.count(RoomType::Corridor),
                summary.utilization * 100.0
            );
        }
    }

    results.push(TestResult::new(
        format!("{name}/variant_count"),
        plans.len() == VARIANT_COUNT,
        format!("{} variants", plans.len()),
    ));

    results.push(TestResult::new(
        format!("{name}/deterministic"),
        generate(req) == plans,
        "regeneration is identical".into(),
    ));

    let snapshot = ProjectSnapshot::new(req.clone(), plans.to_vec());
    let round_trip = snapshot
        .to_json()
        .and_then(|json| ProjectSnapshot::from_json(&json));
    results.push(TestResult::new(
        format!("{name}/snapshot_round_trip"),
        matches!(&round_trip, Ok(restored) if *restored == snapshot),
        match &round_trip {
            Ok(_) => "snapshot survives JSON storage".into(),
            Err(e) => format!("snapshot JSON error: {}", e),
        },
    ));

    results
}
