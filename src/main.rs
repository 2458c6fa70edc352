use anyhow::Result;
use clap::{Parser, Subcommand};
use mealplanner::cli::{CatalogArgs, DisplayArgs, FetchArgs, FilterArgs};

/// mealplanner - weekly meal planning and grocery lists
#[derive(Parser)]
#[command(name = "mealplanner")]
#[command(about = "Plan a week of meals and build the grocery list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog meals matching the filters
    Meals {
        #[command(flatten)]
        filter: FilterArgs,

        #[command(flatten)]
        catalog: CatalogArgs,

        #[command(flatten)]
        display: DisplayArgs,
    },
    /// Build a week plan and print it with its grocery list
    Plan {
        /// Assignment as DAY:SLOT:MEAL, repeatable
        #[arg(long = "assign", value_name = "DAY:SLOT:MEAL")]
        assignments: Vec<String>,

        #[command(flatten)]
        catalog: CatalogArgs,

        #[command(flatten)]
        display: DisplayArgs,
    },
    /// Ask the assistant for more meals
    Fetch {
        #[command(flatten)]
        query: FetchArgs,

        #[command(flatten)]
        catalog: CatalogArgs,

        #[command(flatten)]
        display: DisplayArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mealplanner::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealplanner::observability::init_observability("mealplanner", &config.observability)?;

    let output = match cli.command {
        Commands::Meals {
            filter,
            catalog,
            display,
        } => mealplanner::cli::meals(&config, &filter, &catalog, &display)?,
        Commands::Plan {
            assignments,
            catalog,
            display,
        } => mealplanner::cli::plan(&config, &assignments, &catalog, &display)?,
        Commands::Fetch {
            query,
            catalog,
            display,
        } => mealplanner::cli::fetch(&config, &query, &catalog, &display).await?,
    };

    println!("{}", output.trim());

    Ok(())
}
