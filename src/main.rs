mod cli;
mod console_format;
mod extract;
mod report;
mod types;
mod ui;

use clap::Parser;
use std::fs;
use std::io;

fn main() {
    env_logger::init();

    // Parse CLI arguments; clap renders its own usage text on failure
    let args = match cli::CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() { -1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    std::process::exit(run(&args));
}

fn run(args: &cli::CliArgs) -> i32 {
    // The report is read fully into memory and scanned twice; any read
    // failure, including a missing file, is fatal
    let report_text = match fs::read_to_string(&args.input) {
        Ok(text) => text,
        Err(e) => {
            ui::print_error(&format!("cannot read {}: {}", args.input.display(), e));
            return 1;
        }
    };

    let categories = extract::extract_categories(&report_text);
    log::debug!(
        "extracted {} scored categories from {}",
        categories.len(),
        args.input.display()
    );

    let (rows, totals) = match report::score_categories(&categories) {
        Ok(scored) => scored,
        Err(e) => {
            ui::print_error(&e);
            return 1;
        }
    };

    let stdout = io::stdout();
    let mut table = console_format::TableWriter::new(stdout.lock(), !args.no_color);
    if let Err(e) = table.write_report(&rows, &totals) {
        ui::print_error(&format!("cannot write table: {}", e));
        return 1;
    }

    if let Some(path) = &args.output {
        if let Err(e) = report::write_sentinel(path, &totals) {
            ui::print_error(&format!("cannot write {}: {}", path.display(), e));
            return 1;
        }
        log::info!("sentinel written to {}", path.display());
    }

    if let Some(path) = &args.json {
        match report::export_json_report(&rows, &totals, path) {
            Ok(_) => ui::status(&format!("JSON report saved to {}", path.display())),
            Err(e) => {
                ui::print_error(&format!("cannot write {}: {}", path.display(), e));
                return 1;
            }
        }
    }

    0
}
