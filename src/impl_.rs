use anyhow::{Context, Result};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::{build_progressbar, Cli, Task, CHECK_MARK, CROSS_MARK, HELP};

/// One rename that has been carried out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renamed {
    pub from: PathBuf,
    pub to: PathBuf,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match Task::from(self) {
            Task::Help { usage } => Self::help(usage),
            Task::Rename { prefix, suffix } => {
                let dir = std::env::current_dir().context("Failed to get current_dir")?;
                let ys = rename_in(&dir, &prefix, &suffix)?;
                tracing::info!(renamed = ys.len(), dir = %dir.display(), "done");
            }
        }
        Ok(())
    }

    pub fn help(usage: bool) {
        if usage {
            println!("Usage: {} <PREFIX> <SUFFIX>", env!("CARGO_PKG_NAME"));
        }
        println!("{HELP}");
    }
}

/// Immediate children of `dir`, files and folders alike, sorted by name.
pub fn fetch_targets<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut ys = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Failed to read directory {:?}", dir))?;
        ys.push(entry.into_path());
    }
    Ok(ys)
}

/// Plain, case-sensitive suffix test on the raw file name.
pub fn matches_suffix(name: &OsStr, suffix: &str) -> bool {
    name.as_encoded_bytes().ends_with(suffix.as_bytes())
}

pub fn prefixed(prefix: &str, name: &OsStr) -> OsString {
    let mut y = OsString::from(prefix);
    y.push(name);
    y
}

/// Renames every entry of `dir` ending with `suffix` to `prefix + name`.
///
/// The listing is taken once before the first rename. The first failure
/// aborts the run; renames already done are kept.
pub fn rename_in<P: AsRef<Path>>(dir: P, prefix: &str, suffix: &str) -> Result<Vec<Renamed>> {
    let ys: Vec<PathBuf> = fetch_targets(dir.as_ref())?
        .into_iter()
        .filter(|p| p.file_name().is_some_and(|x| matches_suffix(x, suffix)))
        .collect();

    if ys.is_empty() {
        status_log(false, "Found", "x0", "Not Found");
        return Ok(Vec::new());
    }
    status_log(true, "Found", &format!("x{}", ys.len()), "");

    let pb = build_progressbar(ys.len() as u64, " Renaming")?;
    let mut done = Vec::with_capacity(ys.len());
    for from in ys {
        pb.inc(1);
        let Some(name) = from.file_name() else {
            continue;
        };
        if name.to_str().is_none() {
            tracing::warn!(name = %name.to_string_lossy(), "file name is not valid UTF-8");
        }
        let to = from.with_file_name(prefixed(prefix, name));
        rename_one(&from, &to).inspect_err(|_| pb.abandon())?;
        done.push(Renamed { from, to });
    }
    pb.finish_and_clear();
    status_log(true, "Renamed", &format!("x{}", done.len()), "");

    Ok(done)
}

fn rename_one(from: &Path, to: &Path) -> Result<()> {
    std::fs::rename(from, to).with_context(|| format!("Failed to rename {:?} to {:?}", from, to))?;
    tracing::debug!(from = %from.display(), to = %to.display(), "renamed");
    Ok(())
}

fn status_log(status: bool, t1: &str, t2: &str, prompt: &str) {
    if status {
        print!(
            "{}",
            console::Style::new()
                .bold()
                .color256(49)
                .bright()
                .apply_to(format!("{}  ", CHECK_MARK))
        );
    } else {
        print!(
            "{}",
            console::Style::new()
                .bold()
                .color256(9)
                .bright()
                .apply_to(format!("{}  ", CROSS_MARK))
        );
    }

    print!(
        "{}",
        console::Style::new().white().bold().bright().apply_to(t1)
    );

    if !t2.is_empty() {
        print!(
            "{}{}",
            console::Style::new().bold().white().dim().apply_to(" · "),
            console::Style::new().color256(49).bright().apply_to(t2),
        );
    }

    if !prompt.is_empty() {
        print!(
            "{}{}",
            console::Style::new().black().bright().apply_to(" › "),
            console::Style::new()
                .black()
                .bright()
                .apply_to(format!(" {}", prompt)),
        );
    }
    println!();
}
