use std::process::ExitCode;

use clap::{Args, CommandFactory, Parser, Subcommand};

use runrc::load_config;

#[derive(Parser, Debug)]
#[command(
    name = "runrc",
    about = "Per-directory command runner with argument templating",
    version
)]
struct Cli {
    /// Path to config file (auto-detected if not specified)
    #[arg(short, long)]
    config: Option<String>,

    /// Log file path (enables file logging in addition to stderr)
    #[arg(long)]
    log_file: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Debug)]
struct InitArgs {
    /// Overwrite an existing .runrc file
    #[arg(long)]
    force: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a default .runrc file in the current directory
    Init(InitArgs),
    /// List available commands
    List,
    // Anything else is an alias to run with the remaining arguments
    #[command(external_subcommand)]
    Run(Vec<String>),
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_file = match &cli.log_file {
        Some(path) => Some(std::fs::File::create(path)?),
        None => None,
    };
    runrc::logger::init(log_file);

    match cli.command {
        Some(Commands::Init(args)) => {
            let cwd = std::env::current_dir()?;
            let path = runrc::init::run(&cwd, args.force)?;
            println!("Created {}", path.display());
            println!("Run `runrc list` to see available commands");
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::List) => {
            let (config, _) = load_config(cli.config.as_deref())?;
            runrc::list::list(&config);
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Run(argv)) => match argv.split_first() {
            Some((alias, args)) => {
                let (config, cwd) = load_config(cli.config.as_deref())?;
                let code = runrc::run::run(&config, &cwd, alias, args)?;
                Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
            }
            None => usage(),
        },
        None => usage(),
    }
}

fn usage() -> Result<ExitCode, Box<dyn std::error::Error>> {
    eprintln!("No alias provided");
    eprintln!();
    Cli::command().print_help()?;
    Ok(ExitCode::FAILURE)
}
