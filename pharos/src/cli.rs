use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;

use pharos_scenario::{Scenario, generate, snapshot, trace};
use pharos_search::{Strategy, search};

use crate::error::Result;

#[derive(Debug, Parser)]
#[command(
    name = "pharos",
    about = "Grid-puzzle solver: collect the components, dodge the hazards, ignite the beacon",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search a scenario and print the plan.
    Solve(SolveArgs),

    /// Print a freshly generated random scenario.
    Gen,

    /// Render a scenario grid.
    Show {
        /// Scenario string (`rows,cols;sr,sc;br,bc;components;hazards`).
        scenario: String,
    },
}

#[derive(Debug, Args)]
pub struct SolveArgs {
    /// Scenario string (`rows,cols;sr,sc;br,bc;components;hazards`).
    #[arg(required_unless_present = "random", conflicts_with = "random")]
    pub scenario: Option<String>,

    /// Generate a random scenario instead of reading one.
    #[arg(long)]
    pub random: bool,

    /// Search strategy: bf, df, uc, gr1, gr2, as1, as2.
    #[arg(short, long, default_value = "bf")]
    pub strategy: Strategy,

    /// Print an ASCII frame per action.
    #[arg(long)]
    pub trace: bool,

    /// Emit the solution as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run_from_env() -> Result<()> {
    run(Cli::parse())
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Solve(args) => run_solve(args),
        Commands::Gen => {
            let mut rng: SmallRng = rand::make_rng();
            println!("{}", generate(&mut rng));
            Ok(())
        }
        Commands::Show { scenario } => {
            let sc: Scenario = scenario.parse()?;
            print!("{}", snapshot(&sc));
            Ok(())
        }
    }
}

fn run_solve(args: SolveArgs) -> Result<()> {
    let sc: Scenario = match &args.scenario {
        Some(s) => s.parse()?,
        None => {
            let mut rng: SmallRng = rand::make_rng();
            let sc = generate(&mut rng);
            println!("scenario: {sc}");
            sc
        }
    };

    let field = sc.to_field();
    match search(&field, args.strategy) {
        None => println!("no solution"),
        Some(sol) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&sol)?);
            } else {
                let plan: Vec<String> = sol.ops.iter().map(ToString::to_string).collect();
                println!("plan: {}", plan.join(","));
                println!("expanded: {}", sol.expanded);
                println!("value: {}", sol.value);
            }
            if args.trace {
                // Engine plans always replay; render the step-by-step frames.
                if let Some(t) = trace(&sc, &sol.ops) {
                    print!("{t}");
                }
            }
        }
    }
    Ok(())
}
