//! `--show-config`: print the resolved configuration as JSON.
//!
//! Each scalar is printed with the layer it came from:
//!
//! ```json
//! {
//!   "goal": {
//!     "value": 100,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config::ConfigResolved;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "num_samples": {
            "value": config.num_samples,
            "source": sources.num_samples,
        },
        "goal": {
            "value": config.goal,
            "source": sources.goal,
        },
        "piggy_back": {
            "value": config.piggy_back,
            "source": sources.piggy_back,
        },
        "baseline": {
            "value": config.baseline,
            "source": sources.baseline,
        },
        "experiments": {
            "value": config.experiments,
            "source": sources.experiments,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
