//! # chatstat CLI
//!
//! Command-line interface for the chatstat library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chatstat::analysis::{Analyzer, Report, Tally};
use chatstat::cli::Args;
use chatstat::core::{FilterConfig, Transcript, apply_filters};
use chatstat::format::write_to_format;
use chatstat::parser::{Parser, TranscriptParser};
use chatstat::ChatstatError;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(&args);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr so the report on stdout stays clean.
fn init_tracing(args: &Args) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(args: &Args) -> Result<(), ChatstatError> {
    let start = Instant::now();

    let parser = TranscriptParser::with_config(args.parser_config());
    let transcript = parser.parse(&args.input)?;
    let parse_time = start.elapsed();
    debug!(?transcript.report, "parse report");

    let messages = apply_filters(transcript.messages.clone(), &args.filter_config()?);

    let selection = args.selection();
    if !selection.is_overall() && !transcript.participants().iter().any(|p| p == selection.label()) {
        warn!(user = %selection, "no participant with this name");
    }

    let analyzer = Analyzer::with_config(args.analysis_config()?);
    let report = analyzer.report(&selection, &messages);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(args, &transcript, &report);
        println!();
        println!("⚡ Parsed {} messages in {:.2}s", transcript.len(), parse_time.as_secs_f64());
    }

    if let Some((path, format)) = args.export_target()? {
        let selected = apply_filters(messages, &FilterConfig::new().with_selection(selection));
        write_to_format(&selected, path, format, &args.output_config())?;
        if !args.json {
            println!("💾 Exported {} messages to {} ({})", selected.len(), path.display(), format);
        }
    }

    Ok(())
}

fn print_report(args: &Args, transcript: &Transcript, report: &Report) {
    println!("📊 chatstat v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:     {}", args.input.display());
    println!("👤 Selection: {}", report.selection);
    if let Some(span) = report.span {
        println!("📅 Span:      {} → {} ({} days)", span.first, span.last, span.days());
    }
    if transcript.report.dropped_timestamps > 0 {
        println!("⚠️  Dropped:   {} rows with unreadable timestamps", transcript.report.dropped_timestamps);
    }

    println!();
    println!("Top Statistics");
    println!("   Messages:     {}", report.stats.messages);
    println!("   Words:        {}", report.stats.words);
    println!("   Media shared: {}", report.stats.media);
    println!("   Links shared: {}", report.stats.links);

    if report.shows_timelines() {
        println!();
        println!("Monthly Timeline");
        for month in &report.monthly_timeline {
            println!("   {:<16} {}", month.label, month.count);
        }

        println!();
        println!("Daily Timeline");
        for day in &report.daily_timeline {
            println!("   {}  {}", day.date, day.count);
        }
    }

    println!();
    println!("Activity Map");
    println!("   Busiest days:   {}", join_tallies(&report.week_activity));
    println!("   Busiest months: {}", join_tallies(&report.month_activity));

    if report.shows_timelines() && !report.heatmap.is_empty() {
        println!();
        println!("Weekly Activity Heatmap");
        print!("   {:<10}", "");
        for period in &report.heatmap.periods {
            print!(" {period:>5}");
        }
        println!();
        for (day, row) in report.heatmap.days.iter().zip(&report.heatmap.counts) {
            print!("   {day:<10}");
            for count in row {
                print!(" {count:>5}");
            }
            println!();
        }
    }

    if let Some(busiest) = &report.busiest_users {
        println!();
        println!("Most Busy Users");
        for share in &busiest.shares {
            println!("   {:<20} {:>5}  {:>6.2}%", share.name, share.count, share.percent);
        }
    }

    println!();
    println!("Most Common Words");
    for word in &report.common_words {
        println!("   {:<20} {}", word.label, word.count);
    }

    println!();
    println!("Emoji Analysis");
    println!("   {}", join_tallies(&report.emojis));
}

fn join_tallies(tallies: &[Tally]) -> String {
    if tallies.is_empty() {
        return "-".to_string();
    }
    tallies
        .iter()
        .map(|t| format!("{} ({})", t.label, t.count))
        .collect::<Vec<_>>()
        .join(", ")
}
