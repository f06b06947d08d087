//! battop: interactive battery monitor for the terminal.
//!
//! Run with:  `battop --delay 500ms`  (logs: `BATTOP_LOG=debug`, see `/tmp/battop.log`)

use anyhow::{Context, Result};
use battop_config::{parse_delay, Units};
use battop_system::DEFAULT_SYSFS_ROOT;
use battop_tui::RunOptions;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "battop", version, about = "Interactive battery monitor for the terminal")]
struct Cli {
    /// Delay between updates, e.g. `1s`, `500ms`, `2m` (bare numbers are seconds)
    #[arg(short, long, value_parser = delay_arg)]
    delay: Option<Duration>,

    /// Units for energy and power readouts
    #[arg(short, long, value_enum)]
    units: Option<UnitsArg>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Config file (default: $XDG_CONFIG_HOME/battop/battop.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Power-supply class directory to read batteries from
    #[arg(long, default_value = DEFAULT_SYSFS_ROOT, hide = true)]
    sysfs_root: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum UnitsArg {
    /// W and Wh
    #[value(alias = "h")]
    Human,
    /// mW and mWh
    #[value(alias = "r")]
    Raw,
}

impl From<UnitsArg> for Units {
    fn from(arg: UnitsArg) -> Self {
        match arg {
            UnitsArg::Human => Units::Human,
            UnitsArg::Raw => Units::Raw,
        }
    }
}

fn delay_arg(s: &str) -> Result<Duration, String> {
    parse_delay(s).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    battop_core::logging::init(cli.verbose).context("failed to set up logging")?;

    let config_path = cli.config.unwrap_or_else(battop_config::default_path);
    let config = battop_config::load(&config_path)
        .with_context(|| format!("invalid config '{}'", config_path.display()))?;

    let options = RunOptions {
        config_path,
        sysfs_root: cli.sysfs_root,
        interval_override: cli.delay,
        units_override: cli.units.map(Units::from),
    };

    let result = battop_tui::run(config, options).await;
    if let Err(e) = &result {
        tracing::error!("battop exited with error: {e}");
    } else {
        tracing::info!("battop exited");
    }
    result.map_err(Into::into)
}
