//! towerpath — solve one grid instance and write its result file.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use towerpath_core::{Grid, moves_to_string};
use towerpath_paths::{DamageMap, Search};

#[derive(Parser)]
#[command(name = "towerpath")]
#[command(about = "Compute the minimum-damage path across a grid instance")]
struct Args {
    /// Instance file: a size line followed by '.'/'T' rows
    instance: PathBuf,

    /// Result file; defaults to outs/out<NN>.out for inst<NN>.in inputs
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Mirror the instance numbering in the result file name: `inst07.in`
/// becomes `outs/out07.out`; anything else keeps its stem.
fn default_output(instance: &Path) -> PathBuf {
    let stem = instance
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("out");
    let name = match stem.strip_prefix("inst") {
        Some(num) if !num.is_empty() => format!("out{num}.out"),
        _ => format!("{stem}.out"),
    };
    PathBuf::from("outs").join(name)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let text = fs::read_to_string(&args.instance)?;
    let grid: Grid = text.parse()?;
    log::info!(
        "parsed {0}x{0} grid from {1}",
        grid.size(),
        args.instance.display()
    );

    let damage = DamageMap::build(&grid);
    let mut search = Search::new(grid.size());
    let route = search.route(&damage);

    let out_path = args
        .output
        .unwrap_or_else(|| default_output(&args.instance));
    if let Some(dir) = out_path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }

    match route {
        Some(route) => {
            let moves = moves_to_string(&route.moves);
            fs::write(&out_path, format!("{moves}\n"))?;
            log::info!("Minimum-damage path: {moves}");
            log::info!("Total damage taken: {}", route.damage);
        }
        None => {
            // An isolated goal is a reportable outcome, not a failure.
            fs::write(&out_path, "\n")?;
            log::warn!("{}: goal is unreachable", args.instance.display());
        }
    }
    log::info!("result written to {}", out_path.display());
    Ok(())
}
