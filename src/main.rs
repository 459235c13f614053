mod cli;
mod vimeo;

use anyhow::Context;
use clap::Parser;
use log::{debug, info};

use cli::{Args, OutputFormat};
use vimeo::params::to_form_body;

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();

    let args = Args::parse();
    let metadata = args.to_metadata()?;
    debug!("update metadata: {}", serde_json::to_string(&metadata)?);

    if args.strict {
        metadata
            .validate()
            .context("update rejected by strict validation")?;
    }

    let parameters = metadata.parameter_values();
    if parameters.is_empty() {
        info!("nothing to update, all fields are unset");
    }

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&parameters)?,
        OutputFormat::Form => to_form_body(&parameters),
    };
    println!("{}", output);

    Ok(())
}
