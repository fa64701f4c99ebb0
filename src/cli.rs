use std::{env, path::PathBuf};

use anyhow::{Result, anyhow};

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub config_path: PathBuf,
    /// Overrides `data.routes_path` from the config when set.
    pub routes_path: Option<PathBuf>,
}

pub fn parse_args() -> Result<CliArgs> {
    let mut args = env::args().skip(1);
    let mut config_path = None;
    let mut routes_path = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("missing value for --config"))?;
                config_path = Some(PathBuf::from(value));
            }
            "--routes" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("missing value for --routes"))?;
                routes_path = Some(PathBuf::from(value));
            }
            other => {
                return Err(anyhow!(
                    "unknown argument: {other}. usage: fueleu [--config <path>] [--routes <path>]"
                ));
            }
        }
    }

    Ok(CliArgs {
        config_path: config_path.unwrap_or_else(|| PathBuf::from("./fueleu.jsonc")),
        routes_path,
    })
}
