use crate::demo::{run_demo, run_vehicle_listing, DemoArgs, VehiclesArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use lanka_rent::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Lanka Rent",
    about = "Serve and explore the Lanka Rent vehicle and materials marketplace",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the vehicle listing for a category group and district
    Vehicles(VehiclesArgs),
    /// Walk a renter and a partner through one session in the terminal
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Vehicles(args) => run_vehicle_listing(args),
        Command::Demo(args) => run_demo(args),
    }
}
