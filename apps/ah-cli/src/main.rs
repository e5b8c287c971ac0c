use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use ah_app::{AppResult, ExportFormat, RunRequest, preset_service, query, run_service};
use ah_kinetics::{ModelConstants, Parameter, SimulationInputs, Species};

#[derive(Parser)]
#[command(name = "ah-cli")]
#[command(about = "ACIDHYDROCHEM CLI - Dilute-acid hydrolysis simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and write the result table
    Simulate {
        #[command(flatten)]
        params: ParamArgs,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format: csv or json
        #[arg(short, long, default_value = "csv")]
        format: String,
    },
    /// Show one species against time
    Explore {
        /// Species to show (Hemicellulose, Xylose or Furfural)
        species: String,
        #[command(flatten)]
        params: ParamArgs,
    },
    /// Print a brief summary of a run
    Summary {
        #[command(flatten)]
        params: ParamArgs,
    },
    /// List parameter bounds, steps and defaults
    Params,
    /// Validate a preset file
    Validate {
        /// Path to the preset YAML file
        preset_path: PathBuf,
    },
}

#[derive(Args)]
struct ParamArgs {
    /// Preset YAML file; explicit flags override its values
    #[arg(long)]
    preset: Option<PathBuf>,
    /// Liquid fraction L [0, 20]
    #[arg(short = 'L', long)]
    liquid_ratio: Option<f64>,
    /// Solid biomass S in kg [0, 10]
    #[arg(short = 'S', long)]
    solid_mass_kg: Option<f64>,
    /// Acid concentration C in % v/v [0, 10]
    #[arg(short = 'C', long)]
    acid_concentration: Option<f64>,
    /// Residence time in minutes [0, 200]
    #[arg(short = 't', long)]
    residence_time_min: Option<f64>,
}

impl ParamArgs {
    fn resolve(&self) -> AppResult<SimulationInputs> {
        let mut inputs = match &self.preset {
            Some(path) => preset_service::load_preset(path)?.inputs,
            None => SimulationInputs::default(),
        };
        let overrides = [
            (Parameter::LiquidRatio, self.liquid_ratio),
            (Parameter::SolidMass, self.solid_mass_kg),
            (Parameter::AcidConcentration, self.acid_concentration),
            (Parameter::ResidenceTime, self.residence_time_min),
        ];
        for (parameter, value) in overrides {
            if let Some(v) = value {
                *inputs.get_mut(parameter) = v;
            }
        }
        tracing::debug!(?inputs, "resolved simulation parameters");
        Ok(inputs)
    }
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            params,
            output,
            format,
        } => cmd_simulate(&params, output.as_deref(), format.parse()?),
        Commands::Explore { species, params } => cmd_explore(&species, &params),
        Commands::Summary { params } => cmd_summary(&params),
        Commands::Params => {
            cmd_params();
            Ok(())
        }
        Commands::Validate { preset_path } => cmd_validate(&preset_path),
    }
}

fn cmd_simulate(params: &ParamArgs, output: Option<&Path>, format: ExportFormat) -> AppResult<()> {
    let inputs = params.resolve()?;
    let response = run_service::run(&RunRequest::new(inputs))?;

    if let Some(path) = output {
        run_service::export(&response.result, format, path)?;
        println!(
            "✓ Exported {} data points to {}",
            response.result.len(),
            path.display()
        );
    } else {
        print!("{}", format.render(&response.result)?);
    }

    Ok(())
}

fn cmd_explore(species: &str, params: &ParamArgs) -> AppResult<()> {
    let species: Species = species
        .parse()
        .map_err(ah_app::AppError::InvalidInput)?;
    let inputs = params.resolve()?;
    let response = run_service::run(&RunRequest::new(inputs))?;
    print!("{}", ah_results::series_to_csv(&response.result, species));
    Ok(())
}

fn cmd_summary(params: &ParamArgs) -> AppResult<()> {
    let inputs = params.resolve()?;
    let response = run_service::run(&RunRequest::new(inputs))?;
    let summary = query::summarize(&response.result)?;

    println!("✓ Simulación completada exitosamente.");
    println!("\nInputs:");
    for parameter in Parameter::ALL {
        println!("  {:<32} {}", parameter.spec().label, inputs.get(parameter));
    }

    println!("\nRates:");
    println!("  Φ (L·ρa/S):   {:.6}", response.result.rates.phi);
    println!("  kH effective: {:.6e} 1/min", response.result.rates.k_hemicellulose);
    println!("  kX effective: {:.6e} 1/min", response.result.rates.k_xylose);

    println!("\nRun Summary:");
    println!("  Time points: {}", summary.point_count);
    println!(
        "  Time range: {:.3} - {:.3} min",
        summary.time_range.0, summary.time_range.1
    );
    for species in Species::ALL {
        println!(
            "  {:<14} {:>10.4} -> {:>10.4} g/L",
            species.column_name(),
            species.value_of(&summary.initial),
            species.value_of(&summary.last)
        );
    }
    println!(
        "  Xylose peak:   {:.4} g/L at {:.3} min",
        summary.xylose_peak.value, summary.xylose_peak.time
    );
    println!(
        "  Furfural peak: {:.4} g/L at {:.3} min",
        summary.furfural_peak.value, summary.furfural_peak.time
    );
    println!("  Solve time: {:.6}s", response.timing.solve_time_s);

    Ok(())
}

fn cmd_params() {
    println!("Parameters:");
    for parameter in Parameter::ALL {
        let spec = parameter.spec();
        println!(
            "  --{:<20} {:<32} [{} .. {}] step {} default {} {}",
            spec.key.replace('_', "-"),
            spec.label,
            spec.min,
            spec.max,
            spec.step,
            spec.default,
            spec.unit
        );
    }

    let c = ModelConstants::default();
    println!("\nModel constants:");
    println!("  kH0 = {:e}, EH = {} cal/mol, βH = {}", c.k_h0, c.e_h, c.beta_h);
    println!("  kX0 = {:e}, EX = {} cal/mol, βX = {}", c.k_x0, c.e_x, c.beta_x);
    println!(
        "  R = {} cal/(mol·K), T = {:.2} K ({:.1} °C), ρa = {} g/mL",
        c.gas_constant,
        ah_core::kelvin_of(c.temperature),
        ah_core::celsius_of(c.temperature),
        c.acid_density
    );
}

fn cmd_validate(preset_path: &Path) -> AppResult<()> {
    println!("Validating preset: {}", preset_path.display());
    let preset = preset_service::load_preset(preset_path)?;
    println!("✓ Preset '{}' is valid", preset.name);
    Ok(())
}
