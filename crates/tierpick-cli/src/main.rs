//! tierpick CLI — choose an audio encoding from a track catalog.
//!
//! Commands:
//!   tierpick pick <catalog.json> [quality]     Pick one file
//!   tierpick matches <catalog.json> [quality]  Files at the tier
//!   tierpick classify <FORMAT> [FORMAT...]     Tier of each encoding
//!   tierpick formats                           List the quality table
//!
//! Quality comes from the argument, then `TIERPICK_QUALITY`, then the
//! settings file (`TIERPICK_SETTINGS` or `~/.tierpick/settings.json`),
//! then `normal`.

use std::process::ExitCode;

use tierpick_core::{
    load_catalog, AudioFormat, AudioQuality, AudioQualityPicker, PickerSettings,
};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let result = match args[0].as_str() {
        "pick" => cmd_pick(&args[1..]),
        "matches" => cmd_matches(&args[1..]),
        "classify" => cmd_classify(&args[1..]),
        "formats" => {
            cmd_formats();
            Ok(())
        }
        "help" | "-h" | "--help" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            Err(format!("unknown command: {}", other))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tierpick: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_pick(args: &[String]) -> Result<(), String> {
    if args.is_empty() {
        return Err("usage: tierpick pick <catalog.json> [quality]".into());
    }
    let settings = resolve_settings(args.get(1))?;
    let files = load_catalog(&args[0]).map_err(|e| e.to_string())?;
    let picker = settings.picker();

    match picker.pick_file(&files).map_err(|e| e.to_string())? {
        Some(file) => {
            println!(
                "{}",
                serde_json::to_string_pretty(file).unwrap_or_default()
            );
            Ok(())
        }
        None => Err(format!("no usable file for {}", settings.quality)),
    }
}

fn cmd_matches(args: &[String]) -> Result<(), String> {
    if args.is_empty() {
        return Err("usage: tierpick matches <catalog.json> [quality]".into());
    }
    let settings = resolve_settings(args.get(1))?;
    let files = load_catalog(&args[0]).map_err(|e| e.to_string())?;

    let matches = settings.quality.matches(&files).map_err(|e| e.to_string())?;
    if matches.is_empty() {
        println!("no {} files", settings.quality);
        return Ok(());
    }
    for file in matches {
        println!("{}", file);
    }
    Ok(())
}

fn cmd_classify(args: &[String]) -> Result<(), String> {
    if args.is_empty() {
        return Err("usage: tierpick classify <FORMAT> [FORMAT...]".into());
    }
    let mut failed = 0;
    for name in args {
        let outcome = name
            .parse::<AudioFormat>()
            .and_then(|f| AudioQuality::classify(f).map_err(|e| e.to_string()));
        match outcome {
            Ok(quality) => println!("{}  {}", name, quality),
            Err(e) => {
                eprintln!("{}  {}", name, e);
                failed += 1;
            }
        }
    }
    if failed > 0 {
        return Err(format!("{} of {} formats unclassified", failed, args.len()));
    }
    Ok(())
}

fn cmd_formats() {
    for quality in AudioQuality::ALL {
        let names: Vec<&str> = quality.formats().into_iter().map(AudioFormat::name).collect();
        println!("{:<10} {}", quality, names.join(", "));
    }
    let unclassified: Vec<&str> = AudioFormat::ALL
        .iter()
        .filter(|f| AudioQuality::classify(**f).is_err())
        .map(|f| f.name())
        .collect();
    println!("{:<10} {}", "(none)", unclassified.join(", "));
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Explicit argument beats `TIERPICK_QUALITY`, which beats the settings file.
fn resolve_settings(quality: Option<&String>) -> Result<PickerSettings, String> {
    let mut settings = PickerSettings::resolve().map_err(|e| e.to_string())?;
    if let Some(q) = quality {
        settings.quality = q.parse()?;
    }
    log::debug!("tierpick: preferred quality {}", settings.quality);
    Ok(settings)
}

fn print_usage() {
    println!("tierpick - choose an audio encoding by quality tier");
    println!();
    println!("usage: tierpick <command> [args]");
    println!();
    println!("commands:");
    println!("  pick <catalog.json> [quality]     Pick one file (Vorbis, else MP4)");
    println!("  matches <catalog.json> [quality]  List files at the tier");
    println!("  classify <FORMAT> [FORMAT...]     Show the tier of each encoding");
    println!("  formats                           List the quality table");
    println!();
    println!("quality: normal | high | very_high");
    println!("  default: $TIERPICK_QUALITY, then the settings file, then normal");
    println!("  settings file: $TIERPICK_SETTINGS or ~/.tierpick/settings.json");
}
