use anyhow::Context;
use barnyard::config::AppConfig;
use barnyard::sim::{FarmEvent, Notice};
use barnyard::Diorama;
use clap::Parser;

/// Simulated seconds between progress lines
const REPORT_INTERVAL: f64 = 10.0;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Ticks to simulate (overrides config)
    #[arg(long)]
    ticks: Option<u64>,

    /// RNG seed (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Pigs to start with (overrides config)
    #[arg(long)]
    pigs: Option<usize>,

    /// Dogs to start with (overrides config)
    #[arg(long)]
    dogs: Option<usize>,

    /// Food drops spread over the run (overrides config)
    #[arg(long)]
    food: Option<u32>,

    /// Pet every animal once before the run
    #[arg(long)]
    pet: bool,

    /// Print the effective configuration as RON and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut config = AppConfig::load()?;

    if let Some(pigs) = args.pigs {
        config.farm.farm.initial_pigs = pigs;
    }
    if let Some(dogs) = args.dogs {
        config.farm.farm.initial_dogs = dogs;
    }
    if let Some(ticks) = args.ticks {
        config.headless.ticks = ticks;
    }
    if let Some(food) = args.food {
        config.headless.food_drops = food;
    }
    if args.seed.is_some() {
        config.headless.seed = args.seed;
    }

    if args.print_config {
        println!("{}", config.farm.to_ron().context("Failed to print configuration")?);
        return Ok(());
    }

    let seed = config.headless.seed.unwrap_or_else(rand::random);
    log::info!("Starting Barnyard headless run");
    log::info!("  Seed: {}", seed);
    log::info!("  Ticks: {}", config.headless.ticks);
    log::info!("  Food drops: {}", config.headless.food_drops);

    let mut diorama = Diorama::new(config.farm.clone(), config.camera.clone(), seed)?;
    diorama.farm_mut().populate_default();

    if args.pet {
        let ids: Vec<_> = diorama
            .farm()
            .pigs()
            .iter()
            .chain(diorama.farm().dogs())
            .map(|agent| agent.id)
            .collect();
        for id in ids {
            diorama.farm_mut().pet_agent(id)?;
        }
    }

    run(&mut diorama, &config);
    Ok(())
}

fn run(diorama: &mut Diorama, config: &AppConfig) {
    let ticks = config.headless.ticks;
    let drop_every = match config.headless.food_drops {
        0 => None,
        drops => Some((ticks / drops as u64).max(1)),
    };

    let mut meals = 0usize;
    let mut last_report = f64::NEG_INFINITY;
    for tick in 0..ticks {
        if drop_every.is_some_and(|every| tick % every == 0) {
            diorama.farm_mut().drop_food(None);
        }
        diorama.frame(config.headless.frame_time);

        for event in diorama.farm_mut().drain_events() {
            match event {
                FarmEvent::Ate { agent, food } => {
                    meals += 1;
                    log::debug!("{} ate {}", agent, food);
                }
                FarmEvent::Stats(stats) => {
                    let elapsed = diorama.farm().clock().elapsed();
                    if elapsed - last_report < REPORT_INTERVAL {
                        continue;
                    }
                    last_report = elapsed;
                    log::info!(
                        "t={:>6.1}s pigs={} dogs={} food={} happiness={}%",
                        elapsed,
                        stats.pigs,
                        stats.dogs,
                        stats.food,
                        stats.average_happiness
                    );
                }
                FarmEvent::Notice(notice @ (Notice::Yummy | Notice::FoodDropped)) => {
                    log::trace!("{}", notice);
                }
                _ => {}
            }
        }
    }

    let stats = diorama.farm().stats();
    log::info!(
        "Finished after {} ticks: {} meals, {} food left, average happiness {}%",
        ticks,
        meals,
        stats.food,
        stats.average_happiness
    );
}
