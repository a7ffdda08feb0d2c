//! Command implementations. Each returns data; printing lives in `output`.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use textfmt_price::{PriceParse, format_european_number, parse_price_detailed};
use textfmt_random::Randomizer;
use textfmt_text::{
    TextComparison, compare_normalized_texts, compare_texts, decode_html_entities, extract_urls,
    normalize_whitespace, remove_soft_hyphens, to_camel_case, to_pascal_case,
};

use crate::cli::{CaseArgs, CaseStyleArg, CompareArgs, IndexesArgs, NormalizeArgs, PickArgs, PriceArgs};

/// One parsed price and the text it came from.
#[derive(Debug, Clone, Serialize)]
pub struct PriceRow {
    pub input: String,
    #[serde(flatten)]
    pub parse: PriceParse,
}

pub fn run_price(args: &PriceArgs) -> Vec<PriceRow> {
    let span = info_span!("price", inputs = args.inputs.len());
    let _guard = span.enter();
    let rows: Vec<PriceRow> = args
        .inputs
        .iter()
        .map(|input| PriceRow {
            input: input.clone(),
            parse: parse_price_detailed(input),
        })
        .collect();
    info!(parsed = rows.len(), "parsed prices");
    rows
}

pub fn run_euro(values: &[f64]) -> Vec<String> {
    values.iter().copied().map(format_european_number).collect()
}

pub fn run_normalize(args: &NormalizeArgs) -> String {
    let text = if args.decode {
        decode_html_entities(&args.text)
    } else {
        args.text.clone()
    };
    if args.soft_hyphens {
        remove_soft_hyphens(&text)
    } else {
        normalize_whitespace(&text)
    }
}

pub fn run_case(args: &CaseArgs) -> String {
    match args.style {
        CaseStyleArg::Camel => to_camel_case(&args.text),
        CaseStyleArg::Pascal => to_pascal_case(&args.text),
    }
}

pub fn run_urls(text: &str) -> Vec<String> {
    extract_urls(text)
}

pub fn run_decode(text: &str) -> String {
    decode_html_entities(text)
}

pub fn run_compare(args: &CompareArgs) -> TextComparison {
    if args.normalized {
        compare_normalized_texts(&args.expected, &args.actual)
    } else {
        compare_texts(&args.expected, &args.actual)
    }
}

pub fn run_pick(args: &PickArgs) -> Result<String> {
    let mut picker = randomizer(args.seed);
    let item = picker.choice(args.items.as_slice()).context("pick an item")?;
    Ok(item.clone())
}

pub fn run_indexes(args: &IndexesArgs) -> Vec<usize> {
    randomizer(args.seed).unique_indexes(args.length, args.count)
}

fn randomizer(seed: Option<u64>) -> Randomizer {
    seed.map_or_else(Randomizer::from_entropy, Randomizer::seeded)
}
