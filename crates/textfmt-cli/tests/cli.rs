//! Integration tests for argument parsing, commands and plain rendering.

use clap::Parser;
use tracing::level_filters::LevelFilter;

use textfmt_cli::cli::{
    CaseStyleArg, Cli, Command, LogFormatArg, LogLevelArg, OutputFormatArg, PickArgs,
};
use textfmt_cli::commands::{
    run_case, run_compare, run_euro, run_indexes, run_normalize, run_pick, run_price, run_urls,
};
use textfmt_cli::logging::LogFormat;
use textfmt_cli::output::{comparison_plain, price_plain, price_table, to_json};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("textfmt").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_price_defaults_to_table() {
    let cli = parse(&["price", "1.234,56"]);
    let Command::Price(args) = cli.command else {
        panic!("expected price command");
    };
    assert_eq!(args.inputs, vec!["1.234,56"]);
    assert_eq!(args.format, OutputFormatArg::Table);
    assert!(!args.explain);
}

#[test]
fn test_price_requires_input() {
    assert!(Cli::try_parse_from(["textfmt", "price"]).is_err());
}

#[test]
fn test_verbosity_flags() {
    let cli = parse(&["-vv", "urls", "none here"]);
    assert_eq!(cli.verbosity.tracing_level_filter(), LevelFilter::DEBUG);

    let cli = parse(&["urls", "none here"]);
    assert_eq!(cli.verbosity.tracing_level_filter(), LevelFilter::WARN);
    assert!(!cli.verbosity.is_present());
}

#[test]
fn test_global_log_flags_after_subcommand() {
    let cli = parse(&["decode", "&amp;", "--log-level", "trace", "--log-format", "json"]);
    let level = cli.log_level.map(LevelFilter::from);
    assert_eq!(level, Some(LevelFilter::TRACE));
    assert!(matches!(cli.log_format, LogFormatArg::Json));
    assert_eq!(LogFormat::from(cli.log_format), LogFormat::Json);
    assert!(matches!(cli.log_level, Some(LogLevelArg::Trace)));
}

#[test]
fn test_euro_accepts_negative_numbers() {
    let cli = parse(&["euro", "-1234.5", "0.005"]);
    let Command::Euro(args) = cli.command else {
        panic!("expected euro command");
    };
    assert_eq!(run_euro(&args.values), vec!["-1.234,50", "0,01"]);
}

#[test]
fn test_price_plain_output() {
    let cli = parse(&["price", "€ 1.234,56", "1,234.56", "abc"]);
    let Command::Price(args) = cli.command else {
        panic!("expected price command");
    };
    let rows = run_price(&args);
    insta::assert_snapshot!(price_plain(&rows, false), @r"
    1234.56
    1234.56
    0
    ");
}

fn sample_price_rows(explain: bool) -> Vec<textfmt_cli::commands::PriceRow> {
    let mut args = vec!["price"];
    if explain {
        args.push("--explain");
    }
    args.extend(["€ 1.234,56", "1,234.56", "abc"]);
    let Command::Price(args) = parse(&args).command else {
        panic!("expected price command");
    };
    run_price(&args)
}

#[test]
fn test_price_table_output() {
    let mut table = price_table(&sample_price_rows(false), false);
    table.force_no_tty();
    insta::assert_snapshot!(table.to_string(), @r"
    ╭────────────┬─────────╮
    │ Input      ┆   Value │
    ╞════════════╪═════════╡
    │ € 1.234,56 ┆ 1234.56 │
    │ 1,234.56   ┆ 1234.56 │
    │ abc        ┆       0 │
    ╰────────────┴─────────╯
    ");
}

#[test]
fn test_price_table_explain_output() {
    let mut table = price_table(&sample_price_rows(true), true);
    table.force_no_tty();
    insta::assert_snapshot!(table.to_string(), @r"
    ╭────────────┬──────────┬────────────────┬────────────┬─────────╮
    │ Input      ┆ Cleaned  ┆ Rule           ┆ Normalized ┆   Value │
    ╞════════════╪══════════╪════════════════╪════════════╪═════════╡
    │ € 1.234,56 ┆ 1.234,56 ┆ mixed_european ┆ 1234.56    ┆ 1234.56 │
    │ 1,234.56   ┆ 1,234.56 ┆ mixed_us       ┆ 1234.56    ┆ 1234.56 │
    │ abc        ┆ -        ┆ -              ┆ -          ┆       0 │
    ╰────────────┴──────────┴────────────────┴────────────┴─────────╯
    ");
}

#[test]
fn test_price_plain_explain_output() {
    let cli = parse(&["price", "--explain", "€ 1.234,56", "1,234.56", "abc"]);
    let Command::Price(args) = cli.command else {
        panic!("expected price command");
    };
    let rows = run_price(&args);
    let rendered = price_plain(&rows, true);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(
        lines,
        vec![
            "€ 1.234,56\t1.234,56\tmixed_european\t1234.56\t1234.56",
            "1,234.56\t1,234.56\tmixed_us\t1234.56\t1234.56",
            "abc\t\t-\t\t0",
        ]
    );
}

#[test]
fn test_price_json_flattens_parse() {
    let cli = parse(&["price", "--format", "json", "9,50"]);
    let Command::Price(args) = cli.command else {
        panic!("expected price command");
    };
    let json = to_json(&run_price(&args)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["input"], "9,50");
    assert_eq!(value[0]["rule"], "single_comma_decimal");
    assert_eq!(value[0]["value"], 9.5);
}

#[test]
fn test_normalize_command() {
    let cli = parse(&["normalize", "--decode", "  Fish&nbsp;&amp;\tchips  "]);
    let Command::Normalize(args) = cli.command else {
        panic!("expected normalize command");
    };
    assert_eq!(run_normalize(&args), "Fish & chips");
}

#[test]
fn test_normalize_soft_hyphens() {
    let cli = parse(&["normalize", "--soft-hyphens", "  co\u{00AD}operate  now "]);
    let Command::Normalize(args) = cli.command else {
        panic!("expected normalize command");
    };
    assert_eq!(run_normalize(&args), "cooperate now");
}

#[test]
fn test_case_command() {
    let cli = parse(&["case", "--style", "pascal", "shipping cost (EUR)"]);
    let Command::Case(args) = cli.command else {
        panic!("expected case command");
    };
    assert_eq!(args.style, CaseStyleArg::Pascal);
    assert_eq!(run_case(&args), "ShippingCostEur");
}

#[test]
fn test_urls_command() {
    let urls = run_urls("See https://example.com/a and http://shop.example.org/b?c=1.");
    assert_eq!(
        urls,
        vec!["https://example.com/a", "http://shop.example.org/b?c=1"]
    );
}

#[test]
fn test_compare_mismatch_output() {
    let cli = parse(&["compare", "Total: 10", "Total: 12"]);
    let Command::Compare(args) = cli.command else {
        panic!("expected compare command");
    };
    let comparison = run_compare(&args);
    assert!(!comparison.equal);
    insta::assert_snapshot!(comparison_plain(&comparison), @r"
    different at character 8
    expected (9 chars): Total: 10
    actual   (9 chars): Total: 12
    ");
}

#[test]
fn test_compare_normalized_equal() {
    let cli = parse(&["compare", "--normalized", "sub\u{00AD}total", "subtotal"]);
    let Command::Compare(args) = cli.command else {
        panic!("expected compare command");
    };
    let comparison = run_compare(&args);
    assert!(comparison.equal);
    assert_eq!(comparison_plain(&comparison), "equal");
}

#[test]
fn test_pick_is_reproducible_with_seed() {
    let args = PickArgs {
        items: vec!["red".into(), "green".into(), "blue".into()],
        seed: Some(7),
    };
    let first = run_pick(&args).unwrap();
    let second = run_pick(&args).unwrap();
    assert_eq!(first, second);
    assert!(args.items.contains(&first));
}

#[test]
fn test_pick_without_items_fails() {
    let cli = parse(&["pick", "--seed", "1"]);
    let Command::Pick(args) = cli.command else {
        panic!("expected pick command");
    };
    let error = run_pick(&args).unwrap_err();
    assert!(
        format!("{error:#}").contains("choice set must not be empty"),
        "{error:#}"
    );
}

#[test]
fn test_indexes_command() {
    let cli = parse(&["indexes", "--length", "4", "--count", "10", "--seed", "3"]);
    let Command::Indexes(args) = cli.command else {
        panic!("expected indexes command");
    };
    let mut indexes = run_indexes(&args);
    indexes.sort_unstable();
    assert_eq!(indexes, vec![1, 2, 3, 4]);
}
