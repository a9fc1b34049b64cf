use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::Context;
use bar_core::validation::validate_item;
use bar_core::{
    resolve_all_prices_with, resolve_price_with, AccountPriceRole, Clock, FixedClock, Item,
    ItemPrices, Price, PromotionStatus, SystemClock,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// An item file holds either one item or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum ItemFile {
    Many(Vec<Item>),
    One(Box<Item>),
}

#[derive(Debug, Serialize)]
struct Quote {
    item_id: String,
    name: String,
    evaluated_at: u64,
    promotion_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<AccountPriceRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prices: Option<ItemPrices>,
}

pub fn quote(
    path: &Path,
    role: Option<AccountPriceRole>,
    at: Option<u64>,
    json: bool,
) -> anyhow::Result<()> {
    let items = load_items(path)?;
    info!(count = items.len(), path = %path.display(), "Loaded items");

    let output = match at {
        Some(now) => render(&items, role, &FixedClock(now), json)?,
        None => render(&items, role, &SystemClock, json)?,
    };
    print!("{}", output);
    Ok(())
}

fn load_items(path: &Path) -> anyhow::Result<Vec<Item>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let items = parse_items(&raw).with_context(|| format!("invalid item file {}", path.display()))?;
    Ok(items)
}

fn parse_items(raw: &str) -> anyhow::Result<Vec<Item>> {
    let items = match serde_json::from_str::<ItemFile>(raw)? {
        ItemFile::Many(items) => items,
        ItemFile::One(item) => vec![*item],
    };
    for item in &items {
        validate_item(item)?;
    }
    Ok(items)
}

fn build_quotes<C: Clock + ?Sized>(
    items: &[Item],
    role: Option<AccountPriceRole>,
    clock: &C,
) -> Vec<Quote> {
    // One reading for the whole batch
    let now = FixedClock(clock.now_unix());

    items
        .iter()
        .map(|item| {
            let status = item.promotion_status(now.0);
            debug!(item_id = %item.id, ?status, "Resolving");
            Quote {
                item_id: item.id.clone(),
                name: item.name.clone(),
                evaluated_at: now.0,
                promotion_active: matches!(status, PromotionStatus::Active { .. }),
                role,
                price: role.map(|role| resolve_price_with(item, role, &now)),
                prices: match role {
                    Some(_) => None,
                    None => Some(resolve_all_prices_with(item, &now)),
                },
            }
        })
        .collect()
}

fn render<C: Clock + ?Sized>(
    items: &[Item],
    role: Option<AccountPriceRole>,
    clock: &C,
    json: bool,
) -> anyhow::Result<String> {
    let quotes = build_quotes(items, role, clock);

    if json {
        let mut out = serde_json::to_string_pretty(&quotes)?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    for quote in &quotes {
        let tag = if quote.promotion_active { " (promotion)" } else { "" };
        writeln!(out, "{} [{}]{}", quote.name, quote.item_id, tag)?;
        if let (Some(role), Some(price)) = (quote.role, quote.price) {
            writeln!(out, "  {:<8}{:>10}", role, price.to_string())?;
        }
        if let Some(prices) = &quote.prices {
            for (role, price) in prices.iter() {
                writeln!(out, "  {:<8}{:>10}", role, price.to_string())?;
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: u64 = 1_700_000_000;

    const ITEMS: &str = r#"[
        {
            "id": "pint",
            "name": "Pint",
            "prices": { "ceten": 700, "exte": 1200, "normal": 1000, "staff": 500, "vip": 800 },
            "promotion": 10.0
        },
        {
            "id": "crisps",
            "name": "Crisps",
            "prices": { "ceten": 90, "exte": 150, "normal": 120, "staff": 60, "vip": 100 },
            "promotion": 50.0,
            "promotion_ends_at": 1699999999
        }
    ]"#;

    #[test]
    fn test_parse_single_and_many() {
        assert_eq!(parse_items(ITEMS).unwrap().len(), 2);

        let one = r#"{ "id": "tea", "name": "Tea",
            "prices": { "ceten": 1, "exte": 1, "normal": 1, "staff": 1, "vip": 1 } }"#;
        let items = parse_items(one).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "tea");
    }

    #[test]
    fn test_parse_rejects_bad_promotion() {
        let bad = r#"{ "id": "tea", "name": "Tea", "promotion": 140.0,
            "prices": { "ceten": 1, "exte": 1, "normal": 1, "staff": 1, "vip": 1 } }"#;
        assert!(parse_items(bad).is_err());
    }

    #[test]
    fn test_single_role_table() {
        let items = parse_items(ITEMS).unwrap();
        let out = render(&items, Some(AccountPriceRole::Vip), &FixedClock(NOW), false).unwrap();
        assert_eq!(
            out,
            "Pint [pint] (promotion)\n  vip           7.20\nCrisps [crisps]\n  vip           1.00\n"
        );
    }

    #[test]
    fn test_all_roles_json() {
        let items = parse_items(ITEMS).unwrap();
        let out = render(&items, None, &FixedClock(NOW), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value[0]["prices"]["normal"], 900);
        assert_eq!(value[0]["prices"]["staff"], 450);
        assert_eq!(value[0]["promotion_active"], true);
        // Lapsed one second before NOW
        assert_eq!(value[1]["prices"]["normal"], 120);
        assert_eq!(value[1]["promotion_active"], false);
        assert_eq!(value[1]["evaluated_at"], NOW);
        assert!(value[0].get("price").is_none());
    }
}
