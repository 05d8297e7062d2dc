//! Command implementations and dispatch for the DDR processor CLI

use std::path::PathBuf;
use std::time::Instant;

use colored::*;
use tracing::{debug, info};

use crate::app::models::ZoneTag;
use crate::app::services::engine::{NormalizationEngine, NormalizedTable};
use crate::app::services::export;
use crate::app::services::grammar::{SectionSlot, WellNameRule, ZoneGrammar};
use crate::cli::args::{Args, Commands, ProcessArgs, ZonesArgs};
use crate::cli::input;
use crate::{Error, Result};

/// Run the selected command
pub async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Process(process_args)) => run_process(process_args).await,
        Some(Commands::Zones(zones_args)) => run_zones(zones_args),
        None => Err(Error::configuration("No command specified")),
    }
}

/// Normalize a raw-row extract and export the canonical table
async fn run_process(args: ProcessArgs) -> Result<()> {
    let start_time = Instant::now();

    let report_date = input::resolve_report_date(&args.input_path, args.report_date)?;
    info!(
        "Processing '{}' with report date {}",
        args.input_path.display(),
        report_date
    );

    let ingest = input::read_raw_rows(&args.input_path, report_date)?;
    debug!(
        "Ingested {} rows ({} dropped by zone filter)",
        ingest.rows.len(),
        ingest.rows_dropped
    );

    let engine = NormalizationEngine::new()?;
    let table = if args.concurrent {
        engine.normalize_concurrent(&ingest.rows).await?
    } else {
        engine.normalize(&ingest.rows)?
    };

    let mut frame = export::to_dataframe(&table.records)?;
    if let Some(filter_date) = args.filter_date {
        frame = export::filter_by_report_date(&frame, filter_date)?;
    }

    let output_path = args
        .output_path
        .unwrap_or_else(|| PathBuf::from(export::default_export_filename(report_date)));
    export::write_tsv(&mut frame, &output_path)?;
    info!("Exported canonical table to '{}'", output_path.display());

    if !args.quiet {
        print_process_summary(&table, &ingest, &output_path, start_time.elapsed().as_millis());
    }
    Ok(())
}

fn print_process_summary(
    table: &NormalizedTable,
    ingest: &input::IngestResult,
    output_path: &std::path::Path,
    elapsed_ms: u128,
) {
    println!("\n{}", "Normalization Summary".bright_green().bold());
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        elapsed_ms.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Rows ingested:".bright_cyan(),
        ingest.rows_read.to_string().bright_white()
    );
    if ingest.rows_dropped > 0 {
        println!(
            "  {} {}",
            "Rows dropped (zone filter):".bright_yellow(),
            ingest.rows_dropped.to_string().bright_yellow().bold()
        );
    }
    println!(
        "  {} {}",
        "Records assembled:".bright_cyan(),
        table.len().to_string().bright_white().bold()
    );
    for stats in &table.zone_stats {
        println!(
            "    {} {} records, {} fallbacks",
            format!("{}:", stats.zone).bright_cyan(),
            stats.records_assembled.to_string().bright_white(),
            (stats.well_name_fallbacks + stats.summary_fallbacks)
                .to_string()
                .bright_white()
        );
    }
    println!(
        "  {} {}",
        "Exported to:".bright_cyan(),
        output_path.display().to_string().bright_white()
    );
}

/// Report the configured zone grammars and lookup tables
fn run_zones(args: ZonesArgs) -> Result<()> {
    let engine = NormalizationEngine::new()?;
    let config = engine.config();

    println!("{}", "Configured Zone Grammars".bright_green().bold());
    for zone in ZoneTag::PROCESSING_ORDER {
        let grammar = engine.registry().get(zone);
        let aph = config.aph_code(zone.label()).unwrap_or("-");

        println!("\n{} (APH {})", zone.to_string().bright_cyan().bold(), aph);
        println!("  Well name:  {}", describe_well_name_rule(grammar));
        println!("  Sort:       {}", describe_sort_policy(grammar));
        println!("  Rig name:   {}", describe_rig_rule(grammar));
        println!("  Sections:");
        if let Some(slot) = grammar.summary_rule.leading {
            println!("    (leading text) -> {}", describe_slot(slot));
        }
        for marker in &grammar.summary_rule.markers {
            if args.detailed {
                println!(
                    "    {} -> {} (capture: {})",
                    marker.boundary.as_str(),
                    describe_slot(marker.slot),
                    marker.capture.as_str()
                );
            } else {
                println!(
                    "    {} -> {}",
                    marker.boundary.as_str(),
                    describe_slot(marker.slot)
                );
            }
        }
    }

    if args.detailed {
        println!("\n{}", "Rig-name replacements".bright_green().bold());
        for (from, to) in &config.rig_replacements {
            println!("  '{}' -> '{}'", from, to);
        }
        println!("\n{}", "Well-type synonyms".bright_green().bold());
        for (from, to) in &config.well_type_synonyms {
            println!("  '{}' -> '{}'", from, to);
        }
    }

    Ok(())
}

fn describe_well_name_rule(grammar: &ZoneGrammar) -> &'static str {
    match grammar.well_name_rule {
        WellNameRule::SplitOnSlash => "split on first '/'",
        WellNameRule::StackedParens { .. } => "stacked parentheticals (Part1 discarded)",
        WellNameRule::InlineParens { .. } => "inline parenthetical (zero-width chars stripped)",
    }
}

fn describe_sort_policy(grammar: &ZoneGrammar) -> &'static str {
    if grammar.sort_by_rig_name {
        "by normalized rig name"
    } else {
        "input order"
    }
}

fn describe_rig_rule(grammar: &ZoneGrammar) -> String {
    let rule = &grammar.rig_name_rule;
    let mut steps = Vec::new();
    if rule.strip_rig_prefix {
        steps.push("strip 'Rig' prefix".to_string());
    }
    if !rule.replacements.is_empty() {
        steps.push(format!("{} literal replacements", rule.replacements.len()));
    }
    if let Some(gap) = &rule.gap_collapse {
        steps.push(format!("collapse gap after '{}'", gap.prefix));
    }
    if steps.is_empty() {
        "trim only".to_string()
    } else {
        steps.join(", ")
    }
}

fn describe_slot(slot: SectionSlot) -> &'static str {
    match slot {
        SectionSlot::SummaryReport => "Summary Report",
        SectionSlot::CurrentStatus => "Current Status",
        SectionSlot::NextPlan => "Next Plan",
    }
}
