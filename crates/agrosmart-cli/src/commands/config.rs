//! Show or edit the configuration file.

use anyhow::Result;

use agrosmart_core::config::API_URL_ENV;
use agrosmart_core::Config;

use crate::cli::ConfigArgs;
use crate::output;

pub fn run(args: ConfigArgs, pretty: bool) -> Result<()> {
    let path = Config::config_path()?;

    if args.api_url.is_some() || args.default_farm.is_some() {
        // Edit the file as stored, without environment overrides baked in.
        let mut config = Config::load_from(&path)?;
        if let Some(url) = args.api_url {
            config.api_base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(farm_id) = args.default_farm {
            config.default_farm_id = Some(farm_id);
        }
        config.save_to(&path)?;
        output::success(&format!("Saved {}", path.display()));
        return Ok(());
    }

    let config = Config::load()?;
    output::json(&config, pretty)?;
    output::hint(&format!("Config file: {}", path.display()));
    if std::env::var_os(API_URL_ENV).is_some() {
        output::hint(&format!("API address overridden by {}", API_URL_ENV));
    }
    Ok(())
}
