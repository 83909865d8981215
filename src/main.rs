use anyhow::Result;
use clap::{Parser, Subcommand};

use steppe_core::{Automaton, EcosystemRule, LifeRule, Ruleset};
use steppe_lib::app::App;
use steppe_lib::config::AppConfig;
use steppe_lib::ui::tui::Tui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Run without the TUI, as fast as possible
    #[arg(long)]
    headless: bool,

    /// Custom config file path
    #[arg(short, long, default_value = "steppe.toml")]
    config: String,

    #[command(subcommand)]
    variant: Variant,
}

#[derive(Subcommand, Debug)]
enum Variant {
    /// Predator/prey ecosystem: grass, minerals, sheep and wolves
    Ecosystem {
        #[arg(long)]
        width: Option<u16>,
        #[arg(long)]
        height: Option<u16>,
        /// Initial sheep count
        #[arg(long)]
        sheep: Option<usize>,
        /// Initial wolf count
        #[arg(long)]
        wolves: Option<usize>,
        #[arg(long)]
        steps: Option<u64>,
        #[arg(long)]
        delay_ms: Option<u64>,
        /// Fixed RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Conway's Game of Life on a bounded grid
    Life {
        #[arg(long)]
        width: Option<u16>,
        #[arg(long)]
        height: Option<u16>,
        /// Initial soup density in [0, 1]
        #[arg(long)]
        density: Option<f64>,
        #[arg(long)]
        steps: Option<u64>,
        #[arg(long)]
        delay_ms: Option<u64>,
        /// Fixed RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = AppConfig::load(&args.config)?;

    match args.variant {
        Variant::Ecosystem {
            width,
            height,
            sheep,
            wolves,
            steps,
            delay_ms,
            seed,
        } => {
            let width = width.unwrap_or(config.world.width);
            let height = height.unwrap_or(config.world.height);
            let sheep = sheep.unwrap_or(config.world.num_sheep);
            let wolves = wolves.unwrap_or(config.world.num_wolves);
            let seed = seed.or(config.world.seed);
            let rule = EcosystemRule::new(config.ecosystem.clone(), sheep, wolves);
            let world = Automaton::new(width, height, rule, seed);
            let app = App::new(
                world,
                steps.unwrap_or(config.run.steps),
                delay_ms.unwrap_or(config.run.delay_ms),
            );
            launch(app, args.headless)
        }
        Variant::Life {
            width,
            height,
            density,
            steps,
            delay_ms,
            seed,
        } => {
            let width = width.unwrap_or(config.world.width);
            let height = height.unwrap_or(config.world.height);
            if let Some(density) = density {
                config.life.soup_density = density;
            }
            let seed = seed.or(config.world.seed);
            let rule = LifeRule::new(config.life.clone());
            let world = Automaton::new(width, height, rule, seed);
            let app = App::new(
                world,
                steps.unwrap_or(config.run.steps),
                delay_ms.unwrap_or(config.run.delay_ms),
            );
            launch(app, args.headless)
        }
    }
}

fn launch<R: Ruleset>(mut app: App<R>, headless: bool) -> Result<()> {
    if headless {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
        app.run_headless();
    } else {
        let mut tui = Tui::new()?;
        tui.init()?;
        let res = app.run(&mut tui);
        tui.exit()?;
        res?;
    }

    if app.extinct {
        println!("The universe is dead.");
    }
    Ok(())
}
