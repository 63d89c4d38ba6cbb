//! `grove check`: link health report with optional fixing.

use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};

use super::CheckArgs;
use crate::check::fix::FixMode;
use crate::check::{CheckOptions, LinkChecker};
use crate::config::SiteConfig;
use crate::utils::path::normalize_path;
use crate::utils::{plural_count, plural_s};
use crate::{log, logger};

/// Run the check command.
///
/// The report (JSON with `--json`) goes to stdout. Interactive prompts go to
/// stderr so they never mix with machine-readable output.
pub fn run_check(args: &CheckArgs, config: &SiteConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run_check_with(args, config, &mut stdout, &mut stdin.lock(), &mut io::stderr())
}

fn run_check_with(
    args: &CheckArgs,
    config: &SiteConfig,
    out: &mut impl Write,
    input: &mut impl BufRead,
    prompt: &mut impl Write,
) -> Result<()> {
    if args.json {
        logger::set_quiet(true);
    }

    let root = match &args.dir {
        Some(dir) => normalize_path(dir),
        None => normalize_path(&config.check_dir()),
    };
    log!("check"; "garden root: {}", root.display());

    let mut checker = LinkChecker::new(&root, CheckOptions::from(&config.check))?;
    let report = checker.check();

    if args.json {
        writeln!(out, "{}", report.to_json()?)?;
        out.flush()?;
    } else {
        report.print();
    }

    if let Some(path) = &args.report {
        fs::write(path, report.to_markdown())
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        log!("check"; "report saved to {}", path.display());
    }

    let mode = if args.interactive {
        Some(FixMode::Interactive)
    } else if args.fix {
        Some(FixMode::Automatic)
    } else {
        None
    };

    let Some(mode) = mode else {
        log!("check"; "{}", report);
        if !report.is_healthy() {
            let n = report.broken.len();
            bail!("link check failed: {} broken link{}", n, plural_s(n));
        }
        return Ok(());
    };

    checker.fix(&report, mode, input, prompt)?;

    if report.is_healthy() {
        return Ok(());
    }

    log!("check"; "re-checking links after fixes");
    checker.extract();
    let after = checker.check();
    if after.is_healthy() {
        log!("check"; "all links are now working");
    } else {
        log!("check"; "{} still need manual attention", plural_count(after.broken.len(), "link"));
    }
    Ok(())
}
