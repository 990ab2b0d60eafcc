use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use styleprint::{DesignPipeline, PipelineConfig, PipelineError, RawStyleSignals};

fn print_usage(program: &str) {
    eprintln!(
        "Usage: {} <signals.json> [-o <schema.json>] [--no-ai] [--no-code] [--no-docs] [--pretty]",
        program
    );
    eprintln!();
    eprintln!("Reads a collected signals bundle and extracts the design scheme.");
    eprintln!("  -o <path>   write the schema (plus AI/docs/snippet siblings) under this path");
    eprintln!("  --no-ai     skip the AI-consumption view");
    eprintln!("  --no-code   skip the theme-code snippets");
    eprintln!("  --no-docs   skip the markdown documentation");
    eprintln!("  --pretty    print the full schema JSON to stdout");
}

fn main() -> Result<(), PipelineError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("styleprint");

    let mut signals_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut config = PipelineConfig::default();
    let mut pretty = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-o" | "--output" => match iter.next() {
                Some(path) => output_path = Some(PathBuf::from(path)),
                None => {
                    eprintln!("Missing value for {}", arg);
                    print_usage(program);
                    process::exit(1);
                }
            },
            "--no-ai" => config = config.without_ai_view(),
            "--no-code" => config = config.without_code_snippets(),
            "--no-docs" => config = config.without_documentation(),
            "--pretty" => pretty = true,
            "-h" | "--help" => {
                print_usage(program);
                return Ok(());
            }
            other if signals_path.is_none() && !other.starts_with('-') => {
                signals_path = Some(PathBuf::from(other));
            }
            other => {
                eprintln!("Unexpected argument: {}", other);
                print_usage(program);
                process::exit(1);
            }
        }
    }

    let Some(signals_path) = signals_path else {
        print_usage(program);
        process::exit(1);
    };

    let bundle = fs::read_to_string(&signals_path)?;
    let signals: RawStyleSignals = serde_json::from_str(&bundle)?;

    let pipeline = DesignPipeline::with_config(config);
    let results = pipeline.run(&signals)?;

    if let Some(output_path) = &output_path {
        styleprint::output::write_results(&results, output_path)?;
    }

    if pretty {
        println!("{}", serde_json::to_string_pretty(&results.schema)?);
    } else {
        let summary = &results.schema.design_summary;
        let colors = &results.schema.colors;
        println!("Site type:       {}", results.site_type);
        println!("Style keywords:  {}", summary.style_keywords.join(", "));
        println!("Primary color:   {}", colors.primary_color);
        println!("Secondary color: {}", colors.secondary_color);
        println!("Accent color:    {}", colors.accent_color);
        if !results.applied_plugins.is_empty() {
            println!("Applied plugins: {}", results.applied_plugins.join(", "));
        }
        if !results.validation_issues.is_empty() {
            println!("Validation issues: {}", results.validation_issues.len());
        }
        if let Some(output_path) = &output_path {
            println!("Results saved under {}", output_path.display());
        }
    }

    Ok(())
}
