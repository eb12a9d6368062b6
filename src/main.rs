use std::process::ExitCode;

use anyhow::Result;

use energy_density::config::{Config, OutputFormat};
use energy_density::parser::parse_optional_field;
use energy_density::report::{render_json, render_text};
use energy_density::validation::validate_with_policy;
use energy_density::{try_calculate, CalculationInputs, Field, PartialCalculationInputs};

fn main() -> Result<ExitCode> {
    // Parse configuration from command line and config file
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    if let Some(path) = &config.config_path {
        log::info!("Loaded config file: {}", path.display());
    }

    let partial = PartialCalculationInputs::new(
        read_field(config.permittivity.as_deref(), Field::RelativePermittivity)?,
        read_field(config.field.as_deref(), Field::ElectricField)?,
    );

    let validation = validate_with_policy(&partial, config.policy);
    let (Some(relative_permittivity), Some(electric_field), true) = (
        partial.relative_permittivity,
        partial.electric_field,
        validation.is_valid(),
    ) else {
        for error in validation.into_messages() {
            eprintln!("error: {error}");
        }
        return Ok(ExitCode::FAILURE);
    };

    let inputs = CalculationInputs::new(relative_permittivity, electric_field);
    let result = match try_calculate(&inputs) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("error: {err}");
            return Ok(ExitCode::FAILURE);
        }
    };
    log::debug!("calculated {} J/m³", result.scientific);

    match config.format {
        OutputFormat::Text => print!("{}", render_text(&inputs, &result)?),
        OutputFormat::Json => println!("{}", render_json(&inputs, &result)?),
    }

    Ok(ExitCode::SUCCESS)
}

fn read_field(text: Option<&str>, field: Field) -> Result<Option<f64>> {
    Ok(parse_optional_field(text.unwrap_or_default(), field)?)
}
