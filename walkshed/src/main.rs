use clap::{Parser, Subcommand};
use walkshed::{
    app::{run, RunMode, RunReport},
    config::WalkshedConfig,
    model::WalkshedError,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct WalkshedAppArguments {
    #[command(subcommand)]
    app: App,
}

#[derive(Subcommand)]
pub enum App {
    /// compute entrance isochrones and classify transit deserts
    Run {
        #[command(flatten)]
        args: RunArguments,
    },
    /// compute entrance isochrones only
    Isochrones {
        #[command(flatten)]
        args: RunArguments,
    },
    /// classify transit deserts only
    Deserts {
        #[command(flatten)]
        args: RunArguments,
    },
}

#[derive(clap::Args)]
pub struct RunArguments {
    #[arg(long, help = "path to .toml or .json file with walkshed parameters")]
    configuration_file: Option<String>,
    #[arg(long, help = "output path, overrides the configured output directory")]
    output_directory: Option<String>,
    #[arg(long, help = "replace existing output files")]
    overwrite: bool,
}

impl App {
    fn mode_and_args(&self) -> (RunMode, &RunArguments) {
        match self {
            App::Run { args } => (RunMode::All, args),
            App::Isochrones { args } => (RunMode::Isochrones, args),
            App::Deserts { args } => (RunMode::Deserts, args),
        }
    }
}

pub fn run_app(app: &App) -> Result<RunReport, WalkshedError> {
    let (mode, args) = app.mode_and_args();
    let mut conf = match &args.configuration_file {
        None => WalkshedConfig::default(),
        Some(f) => {
            log::info!("reading walkshed configuration from {f}");
            WalkshedConfig::try_from(f)?
        }
    };
    if let Some(output_directory) = &args.output_directory {
        conf.output.directory = output_directory.clone();
    }
    if args.overwrite {
        conf.output.overwrite = true;
    }
    run(&conf, mode)
}

fn main() {
    env_logger::init();
    log::info!("starting app at {}", chrono::Local::now().to_rfc3339());
    let args = WalkshedAppArguments::parse();
    match run_app(&args.app) {
        Ok(_) => {
            eprintln!("finished.");
        }
        Err(e) => {
            log::error!("walkshed failed: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
