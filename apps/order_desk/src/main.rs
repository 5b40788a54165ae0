use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use client_core::{
    form::product_options, ClientEvent, DashboardController, DashboardView, HttpOrderApi,
    OrderApi, OrderFormController, OrderFormOptions, RefreshOutcome, StatusFilter,
};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::broadcast::{self, error::RecvError},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod console;

use crate::config::{load_settings, Settings};
use crate::console::{event_line, fill_form, parse_item, ItemArg, MonitorCommand, MONITOR_HELP};

#[derive(Parser, Debug)]
#[command(name = "order-desk", about = "Place orders and monitor their processing status")]
struct Cli {
    /// Settings file; defaults to ./order_desk.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    orders_url: Option<String>,
    #[arg(long, global = true)]
    order_status_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the product catalog.
    Products,
    /// Submit a new order.
    PlaceOrder(PlaceOrderArgs),
    /// Show the order-status dashboard.
    Monitor(MonitorArgs),
}

#[derive(Args, Debug)]
struct PlaceOrderArgs {
    #[arg(long)]
    customer_id: Option<String>,
    #[arg(long)]
    destination: Option<String>,
    /// `<product>:<quantity>`, repeatable; product is an id or catalog name.
    #[arg(long = "item", value_parser = parse_item)]
    items: Vec<ItemArg>,
    /// Show the simulated progress timeline after a successful submit.
    #[arg(long)]
    simulate_progress: bool,
}

#[derive(Args, Debug)]
struct MonitorArgs {
    #[arg(long, default_value = "all")]
    status: StatusFilter,
    #[arg(long)]
    search: Option<String>,
    #[arg(long, default_value_t = 1)]
    page: usize,
    /// Render once and exit instead of reading commands from stdin.
    #[arg(long)]
    once: bool,
    #[arg(long)]
    poll_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(url) = cli.orders_url {
        settings.orders_url = url;
    }
    if let Some(url) = cli.order_status_url {
        settings.order_status_url = url;
    }

    match cli.command {
        Command::Products => {
            for option in product_options() {
                if let Some(id) = option.product_id {
                    println!("{id:>3}  {}", option.label);
                }
            }
            Ok(())
        }
        Command::PlaceOrder(args) => place_order(&settings, args).await,
        Command::Monitor(args) => monitor(&settings, args).await,
    }
}

fn build_api(settings: &Settings) -> Result<Arc<dyn OrderApi>> {
    let api = HttpOrderApi::new(settings.endpoints()?)?;
    info!(
        orders_url = %api.endpoints().orders_url,
        order_status_url = %api.endpoints().order_status_url,
        "order services configured"
    );
    Ok(Arc::new(api))
}

fn print_pending(events: &mut broadcast::Receiver<ClientEvent>) {
    while let Ok(event) = events.try_recv() {
        if let Some(line) = event_line(&event) {
            println!("{line}");
        }
    }
}

async fn place_order(settings: &Settings, args: PlaceOrderArgs) -> Result<()> {
    let controller = OrderFormController::new(
        build_api(settings)?,
        OrderFormOptions {
            dismiss_after: settings.banner_dismiss(),
            stage_delay: settings.progress_stage(),
            simulate_progress: args.simulate_progress,
        },
    );
    let mut events = controller.subscribe_events();

    controller
        .edit(|form| {
            fill_form(
                form,
                args.customer_id.as_deref(),
                args.destination.as_deref(),
                &args.items,
            )
        })
        .await;

    let result = controller.submit().await;
    print_pending(&mut events);
    let response = result.context("order was not placed")?;

    if args.simulate_progress {
        loop {
            match events.recv().await {
                Ok(event) => {
                    if let Some(line) = event_line(&event) {
                        println!("{line}");
                    }
                    if let ClientEvent::Progress { stage, .. } = event {
                        if stage.is_final() {
                            break;
                        }
                    }
                }
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => break,
            }
        }
    }

    info!(order_id = %response.order_id, "order placed");
    Ok(())
}

async fn monitor(settings: &Settings, args: MonitorArgs) -> Result<()> {
    let controller = DashboardController::new(build_api(settings)?, settings.banner_dismiss());
    let mut events = controller.subscribe_events();

    controller.set_status_filter(args.status).await;
    if let Some(search) = &args.search {
        controller.set_search(search.as_str()).await;
    }
    let outcome = controller.refresh().await;
    print_pending(&mut events);
    print!("{}", controller.go_to_page(args.page).await);

    if args.once {
        if outcome == RefreshOutcome::Failed {
            bail!("could not load order statuses");
        }
        return Ok(());
    }

    let poller = args
        .poll_secs
        .or(settings.poll_secs)
        .map(|secs| controller.poll(Duration::from_secs(secs)));
    println!("{MONITOR_HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read command")? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<MonitorCommand>() {
                    Ok(MonitorCommand::Quit) => break,
                    Ok(command) => {
                        if let Some(view) = run_command(&controller, command).await {
                            print!("{view}");
                        }
                    }
                    Err(err) => eprintln!("{err}"),
                }
            }
            event = events.recv() => match event {
                Ok(ClientEvent::OrdersReplaced { .. }) => print!("{}", controller.view().await),
                Ok(event) => {
                    if let Some(line) = event_line(&event) {
                        println!("{line}");
                    }
                }
                Err(RecvError::Lagged(_)) => {}
                Err(RecvError::Closed) => break,
            },
        }
    }

    if let Some(poller) = poller {
        poller.abort();
    }
    Ok(())
}

async fn run_command(
    controller: &DashboardController,
    command: MonitorCommand,
) -> Option<DashboardView> {
    match command {
        // The redraw arrives through `OrdersReplaced`.
        MonitorCommand::Refresh => {
            controller.refresh().await;
            None
        }
        MonitorCommand::Next => Some(controller.next_page().await),
        MonitorCommand::Prev => Some(controller.prev_page().await),
        MonitorCommand::Page(page) => Some(controller.go_to_page(page).await),
        MonitorCommand::Status(status) => Some(controller.set_status_filter(status).await),
        MonitorCommand::Search(text) => Some(controller.set_search(text).await),
        MonitorCommand::Clear => Some(controller.clear_filters().await),
        MonitorCommand::Help => {
            println!("{MONITOR_HELP}");
            None
        }
        MonitorCommand::Quit => None,
    }
}
