use std::sync::Arc;

use clap::Parser;
use console::{LogReadout, teleop};
use link::{Operator, Router, Session, SessionContext, StatusSink};
use mapview::MapView;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Robot host
    #[arg(long, default_value = "127.0.0.1", env = "ROBOT_HOST")]
    host: String,
    /// Control link port
    #[arg(long, default_value_t = 18888, env = "ROBOT_PORT")]
    port: u16,
    /// Canvas width, pixels
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    /// Canvas height, pixels
    #[arg(long, default_value_t = 600.0)]
    height: f64,
    /// Command heartbeat on startup
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    heartbeat: bool,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let url = format!("ws://{}:{}", cli.host, cli.port);

    let ctx = Arc::new(SessionContext::new());
    ctx.set_heartbeat(cli.heartbeat);
    let sink: Arc<dyn StatusSink> = Arc::new(LogReadout);

    let router = Router::new(MapView::new(cli.width, cli.height), ctx.clone(), sink.clone());
    let transform = router.transform_feed();

    let (commands, commands_rx) = mpsc::unbounded_channel();
    let operator = Operator::new(ctx.clone(), commands);

    let (session, _state) = Session::new(url, ctx, router, sink, commands_rx);
    tokio::spawn(session.run());

    teleop::run(operator, transform).await;
    Ok(())
}
