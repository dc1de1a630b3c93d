use std::io;
use std::time::Duration;

use clap::Parser;
use kube::Client;
use ksl_collector::{
    CacheProvider,
    CollectionResult,
    Collector,
    CollectorConfig,
    HandlerRegistry,
    JsonLinesSink,
    RecordSink,
    cancelled,
};
use ksl_core::errors::*;
use ksl_core::logging;
use tokio::sync::watch;
use tokio::time::{
    Instant,
    MissedTickBehavior,
};
use tracing::*;

const CACHE_POLL_INTERVAL: Duration = Duration::from_millis(500);
const CACHE_SYNC_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Parser, Debug)]
struct Options {
    #[arg(short, long)]
    config_file: Option<String>,

    // The flags below override whatever is in the config file.
    #[arg(short, long, value_delimiter = ',')]
    namespaces: Vec<String>,

    #[arg(short, long, value_delimiter = ',')]
    resources: Vec<String>,

    #[arg(short, long, value_parser = humantime::parse_duration)]
    interval: Option<Duration>,

    #[arg(long)]
    once: bool,

    #[arg(short, long, default_value = "info")]
    verbosity: String,
}

fn load_config(args: &Options) -> anyhow::Result<CollectorConfig> {
    let mut config = match &args.config_file {
        Some(path) => CollectorConfig::load(path)?,
        None => CollectorConfig::default(),
    };

    if !args.namespaces.is_empty() {
        config.namespaces = args.namespaces.clone();
    }
    if !args.resources.is_empty() {
        config.resources = args.resources.clone();
    }
    if let Some(interval) = args.interval {
        config.interval = interval;
    }
    Ok(config)
}

fn emit(result: &CollectionResult, sink: &mut impl RecordSink) -> EmptyResult {
    for rec in &result.records {
        sink.emit(rec)?;
    }
    sink.flush()
}

// Gives the caches a chance to finish their initial lists before the first pass, so that the
// first batch of records isn't mostly empty.  Kinds that still aren't ready afterwards just
// produce nothing until they are.
async fn wait_for_caches(collector: &Collector, cancel: &mut watch::Receiver<bool>) {
    let start = Instant::now();
    while collector.ready_count() < collector.handler_count() && start.elapsed() < CACHE_SYNC_TIMEOUT {
        tokio::select! {
            _ = tokio::time::sleep(CACHE_POLL_INTERVAL) => (),
            _ = cancelled(cancel) => return,
        }
    }
    info!("{}/{} caches ready", collector.ready_count(), collector.handler_count());
}

#[instrument(ret, err)]
async fn run(args: Options) -> EmptyResult {
    let config = load_config(&args)?;
    let namespaces = config.namespace_filter();
    let registry = HandlerRegistry::from_config(&config)?;

    let client = Client::try_default().await?;
    let mut provider = CacheProvider::new(client);
    let (collector, bind_errors) = registry.bind(&mut provider).await;
    if collector.handler_count() == 0 {
        bail!("none of the {} configured resource types could be bound", bind_errors.len());
    }
    info!("collecting {:?} every {}", collector.resource_types(), humantime::format_duration(config.interval));

    let (cancel_tx, cancel_rx) = watch::channel(false);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("shutdown requested");
                let _ = cancel_tx.send(true);
            },
            Err(err) => error!("could not listen for shutdown signal: {err}"),
        }
    });

    let mut cancel = cancel_rx.clone();
    wait_for_caches(&collector, &mut cancel).await;

    let mut sink = JsonLinesSink::new(io::stdout());
    let mut ticker = tokio::time::interval(config.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => (),
            _ = cancelled(&mut cancel) => break,
        }

        let result = collector.collect_all(&namespaces, cancel_rx.clone()).await;
        emit(&result, &mut sink)?;
        info!(
            "collected {} record(s) ({}/{} kinds ready, {} error(s))",
            result.records.len(),
            collector.ready_count(),
            collector.handler_count(),
            result.errors.len()
        );

        if result.cancelled || args.once {
            break;
        }
    }

    provider.shutdown().await;
    Ok(())
}

#[tokio::main]
async fn main() -> EmptyResult {
    let args = Options::parse();
    logging::setup(&args.verbosity);
    run(args).await
}

#[cfg(test)]
mod tests;
