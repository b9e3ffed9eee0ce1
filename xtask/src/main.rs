//! Custom cargo commands for folio.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz [S]  - Run every fuzz target for S seconds (default 30)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["search_queries", "score_calculation", "catalog_ranking"];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => {
            let seconds = match args.next() {
                Some(raw) => raw
                    .parse()
                    .with_context(|| format!("Invalid fuzz duration '{}'", raw))?,
                None => 30,
            };
            fuzz(seconds)?
        }
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests, clippy, feature builds, tiers)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  fuzz [S]  Run each fuzz target for S seconds (needs cargo-fuzz + nightly)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("folio Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking score tiers...");
    verify_score_tiers()?;
    println!("✓ Score tiers ordered\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Checking feature combinations...");
    run_cargo(&["check", "--quiet", "--no-default-features"])?;
    run_cargo(&["check", "--quiet", "--lib", "--features", "wasm"])?;
    println!("✓ Feature builds pass\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test"])
}

fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

fn fuzz(seconds: u64) -> Result<()> {
    let max_time = format!("-max_total_time={}", seconds);
    for target in FUZZ_TARGETS {
        println!("Fuzzing {} for {}s...", target, seconds);
        run_cargo(&["+nightly", "fuzz", "run", target, "--", &max_time])?;
    }
    println!("\n✓ {} fuzz targets clean", FUZZ_TARGETS.len());
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// The match tiers must stay strictly ordered: exact > prefix > contains.
fn verify_score_tiers() -> Result<()> {
    let root = project_root()?;
    let core_rs = std::fs::read_to_string(root.join("src/scoring/core.rs"))
        .context("Failed to read src/scoring/core.rs")?;

    let exact = extract_const(&core_rs, "EXACT_SCORE")?;
    let prefix = extract_const(&core_rs, "PREFIX_SCORE")?;
    let contains = extract_const(&core_rs, "CONTAINS_SCORE")?;

    if !(exact > prefix && prefix > contains && contains > 0) {
        bail!(
            "Score tiers out of order: exact={} prefix={} contains={}",
            exact,
            prefix,
            contains
        );
    }
    Ok(())
}

fn extract_const(content: &str, name: &str) -> Result<u64> {
    // Look for "pub const NAME: u64 = 100;"
    let needle = format!("const {}:", name);
    for line in content.lines() {
        if line.contains(&needle) {
            if let Some(value) = line.split('=').nth(1) {
                let value = value.trim().trim_end_matches(';').trim();
                return value
                    .parse()
                    .with_context(|| format!("Unparseable value for {}: '{}'", name, value));
            }
        }
    }
    bail!("Constant {} not found", name)
}
