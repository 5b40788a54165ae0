//! Terminal input parsing and output formatting for the order desk.

use std::str::FromStr;

use client_core::{Banner, BannerKind, ClientEvent, OrderForm, StatusFilter};
use shared::domain::{ProductId, CATALOG};

pub const MONITOR_HELP: &str = "commands: refresh | next | prev | page <n> | status <code|label|all> | search <text> | clear | help | quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemArg {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Parses `<product>:<quantity>` where product is a catalog id or name.
pub fn parse_item(raw: &str) -> Result<ItemArg, String> {
    let (product, quantity) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected <product>:<quantity>, got '{raw}'"))?;
    let product = product.trim();
    let product_id = match product.parse::<i64>() {
        Ok(id) => ProductId(id),
        Err(_) => CATALOG
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(product))
            .map(|entry| entry.id)
            .ok_or_else(|| format!("unknown product '{product}'"))?,
    };
    let quantity = quantity
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("invalid quantity in '{raw}'"))?;
    Ok(ItemArg {
        product_id,
        quantity,
    })
}

/// Replaces the form contents with one row per item.
pub fn fill_form(
    form: &mut OrderForm,
    customer_id: Option<&str>,
    destination: Option<&str>,
    items: &[ItemArg],
) {
    form.customer_id = customer_id.unwrap_or_default().to_string();
    form.destination_country = destination.map(str::to_string);

    let existing: Vec<_> = form.rows().iter().map(|row| row.id).collect();
    for id in existing {
        form.remove_row(id);
    }
    for item in items {
        let row = form.add_row();
        form.set_product(row, Some(item.product_id));
        form.set_quantity(row, Some(item.quantity));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorCommand {
    Refresh,
    Next,
    Prev,
    Page(usize),
    Status(StatusFilter),
    Search(String),
    Clear,
    Help,
    Quit,
}

impl FromStr for MonitorCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        match verb.to_ascii_lowercase().as_str() {
            "refresh" | "r" => Ok(Self::Refresh),
            "next" | "n" => Ok(Self::Next),
            "prev" | "p" => Ok(Self::Prev),
            "page" => rest
                .parse()
                .map(Self::Page)
                .map_err(|_| format!("invalid page number '{rest}'")),
            "status" => rest
                .parse()
                .map(Self::Status)
                .map_err(|err| format!("{err}")),
            "search" => Ok(Self::Search(rest.to_string())),
            "clear" => Ok(Self::Clear),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(format!("unknown command '{verb}'; {MONITOR_HELP}")),
        }
    }
}

pub fn banner_line(banner: &Banner) -> String {
    let tag = match banner.kind {
        BannerKind::Info => "info",
        BannerKind::Success => "ok",
        BannerKind::Danger => "error",
    };
    format!("[{tag}] {}", banner.message)
}

/// Text for events worth echoing to the terminal.
pub fn event_line(event: &ClientEvent) -> Option<String> {
    match event {
        ClientEvent::Banner(Some(banner)) => Some(banner_line(banner)),
        ClientEvent::Progress { order_id, stage } => {
            Some(format!("  order #{order_id}: {}", stage.label()))
        }
        _ => None,
    }
}
