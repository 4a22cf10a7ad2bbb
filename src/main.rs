// ==========================================
// Business Analytics - command line entry point
// ==========================================
// Headless runner: load one workbook, print the ranked summary tables
// for all five facets. Usage:
//
//   business-analytics <workbook.xlsx> [start YYYY-MM-DD] [end YYYY-MM-DD]
// ==========================================

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;

use business_analytics::analysis::daily_checked_weight;
use business_analytics::domain::dataset::AnalysisDataset;
use business_analytics::domain::format::{fmt_amount, fmt_percent};
use business_analytics::{logging, AppState, DateFilter, WorkbookMapping};

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (path, filter) = parse_args(&args)?;

    let mapping_path = business_analytics::config::default_mapping_path();
    let mapping = WorkbookMapping::load_or_default(mapping_path.as_deref());
    let state = AppState::new(mapping, filter);

    let dataset = state
        .load_file(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;

    print_report(&dataset);
    Ok(())
}

fn parse_args(args: &[String]) -> Result<(PathBuf, DateFilter)> {
    let path = match args.first() {
        Some(p) => PathBuf::from(p),
        None => bail!("usage: business-analytics <workbook.xlsx> [start YYYY-MM-DD] [end YYYY-MM-DD]"),
    };

    let filter = match (args.get(1), args.get(2)) {
        (Some(start), Some(end)) => DateFilter::range(parse_date(start)?, parse_date(end)?),
        (Some(start), None) => {
            let day = parse_date(start)?;
            DateFilter::range(day, day)
        }
        _ => DateFilter::Disabled,
    };

    Ok((path, filter))
}

fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{text}', expected YYYY-MM-DD"))
}

fn print_report(dataset: &AnalysisDataset) {
    println!("==================================================");
    println!("{} v{}", business_analytics::APP_NAME, business_analytics::VERSION);
    println!("File: {}", dataset.source_file.display());
    println!("Load: {} ({} rows)", dataset.load_id, dataset.total_rows());
    println!("==================================================");

    println!();
    println!("--- Clients (by shipment amount) ---");
    if dataset.clients.has_data() {
        for s in &dataset.clients.summaries {
            println!(
                "{:<30} shipped {:>14}  paid {:>14} ({})  share {}",
                s.client,
                fmt_amount(s.total_shipment_amount),
                fmt_amount(s.total_payment_amount),
                fmt_percent(s.payment_percentage),
                fmt_percent(s.shipment_share),
            );
        }
    } else {
        println!("no data");
    }

    println!();
    println!("--- Transport companies (by cost) ---");
    if dataset.transport.has_data() {
        for s in &dataset.transport.summaries {
            println!(
                "{:<30} cost {:>14} ({})  vehicles {:>3} ({})  weight {:>12}",
                s.company,
                fmt_amount(s.total_cost),
                fmt_percent(s.cost_share),
                s.vehicle_count,
                fmt_percent(s.vehicle_share),
                fmt_amount(s.total_weight),
            );
        }
    } else {
        println!("no data");
    }

    println!();
    println!("--- Contractors (by profit) ---");
    if dataset.contractors.has_data() {
        for s in &dataset.contractors.summaries {
            println!(
                "{:<30} profit {:>14} ({})  margin/t {:>12}  margin {}",
                s.contractor,
                fmt_amount(s.profit),
                fmt_percent(s.profit_share),
                fmt_amount(s.margin_per_ton),
                fmt_percent(s.margin_percentage),
            );
        }
    } else {
        println!("no data");
    }

    println!();
    println!("--- Suppliers (by material cost) ---");
    if dataset.suppliers.has_data() {
        for s in &dataset.suppliers.summaries {
            println!(
                "{:<30} cost {:>14} ({})  weight {:>12} ({})  avg/t {:>12}",
                s.supplier,
                fmt_amount(s.total_cost),
                fmt_percent(s.cost_share),
                fmt_amount(s.total_weight),
                fmt_percent(s.quantity_share),
                fmt_amount(s.avg_cost_per_ton),
            );
        }
    } else {
        println!("no data");
    }

    println!();
    println!("--- Quality control (by checked weight) ---");
    if dataset.quality.has_data() {
        for s in &dataset.quality.summaries {
            println!(
                "{:<30} weight {:>12} ({})  value {:>14}  productivity {:>10}",
                s.employee,
                fmt_amount(s.total_weight),
                fmt_percent(s.weight_share),
                fmt_amount(s.total_value),
                fmt_amount(s.productivity),
            );
        }

        let days = daily_checked_weight(&dataset.quality.rows);
        if !days.is_empty() {
            println!();
            println!("--- Checked weight per day ---");
            for (day, weight) in &days {
                println!("{}  {:>12}", day.format("%d.%m.%Y"), fmt_amount(*weight));
            }
        }
    } else {
        println!("no data");
    }
}
