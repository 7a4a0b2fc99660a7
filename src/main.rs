use anyhow::Result;
use clap::builder::TypedValueParser;
use clap::Parser;
use snake_duel::game::GameConfig;
use snake_duel::modes::DuelMode;

#[derive(Parser)]
#[command(name = "snake-duel")]
#[command(version, about = "Race a pathfinding AI snake through a growing labyrinth")]
struct Cli {
    /// Side length of the square grid (boundary walls included)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(4..).map(|v| v as usize))]
    grid_size: usize,

    /// Tick rate at combined score zero, in ticks per second
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..))]
    base_rate: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        grid_size: cli.grid_size,
        base_ticks_per_sec: cli.base_rate,
        ..Default::default()
    };

    let mut duel = DuelMode::new(config);
    duel.run().await
}
