//! Prepend a prefix to every entry of the current directory whose name ends with a suffix.
//!
//! The rename is a real `std::fs::rename` within the same directory.

use indicatif::{ProgressBar, ProgressState, ProgressStyle};

mod cli;
mod impl_;
mod task;

pub use cli::Cli;
pub use impl_::{fetch_targets, matches_suffix, prefixed, rename_in, Renamed};
pub use task::Task;

const CROSS_MARK: &str = "❌";
const CHECK_MARK: &str = "✅";

/// Help text printed for `-h`, `--help`, and missing or empty arguments.
pub const HELP: &str = "\
Флаг -h или --help выводит краткую инфорацию о том, как работать с скриптом
$ - это переменная. Мы обращаемся именно к тому, что под ней
Cкрипт переименовывает файлы с определённым суффиксом, добавляя к ним префикс
Вам нужно будет ввести суффикс для имени файла и префикс";

fn build_progressbar(size: u64, prefix: &str) -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new(size);
    pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green.bold} {prefix:.bold} [{bar:.blue.bright.bold/white.dim}] {human_pos}/{human_len} ({percent}% | {eta} | {elapsed_precise})"
            )?
            .with_key("eta", |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                let _ = write!(w, "{:.2}s", state.eta().as_secs_f64());
            })
            .progress_chars("#>-"));
    pb.set_prefix(prefix.to_string());
    Ok(pb)
}
