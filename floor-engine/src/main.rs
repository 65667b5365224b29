use clap::Parser;
use floor_engine::console::Console;
use floor_engine::{FloorManager, print_banner, setup_environment};
use shared::models::ServerCount;
use tokio::sync::broadcast::error::RecvError;

/// Restaurant host console: seat parties and follow table recommendations
#[derive(Parser, Debug)]
#[command(name = "floor-host", version, about)]
struct Cli {
    /// Operator name recorded on every command
    #[arg(short, long, env = "FLOOR_OPERATOR", default_value = "host")]
    operator: String,

    /// Active servers at startup (overrides INITIAL_SERVER_COUNT)
    #[arg(short, long)]
    servers: Option<i64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. Environment (dotenv, config, logging)
    let mut config = setup_environment()?;
    if let Some(servers) = cli.servers {
        config.initial_server_count = ServerCount::new(servers)?;
    }

    print_banner();
    tracing::info!(operator = %cli.operator, "floor-host starting...");

    // 2. Floor manager
    let manager = FloorManager::from_config(&config)?.with_operator(cli.operator.clone());

    // 3. Event log subscriber
    let mut events = manager.subscribe();
    let listener = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => tracing::debug!(
                    sequence = event.sequence,
                    event_type = %event.event_type,
                    operator = %event.operator_name,
                    "Floor event"
                ),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Event listener lagged");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    // 4. Console loop
    let console = Console::new(manager, cli.operator);
    let result = console.run().await;

    drop(console);
    listener.abort();
    tracing::info!("floor-host stopped");
    result
}
