use std::io::{IsTerminal, Write};

use clap::Parser;
use color_eyre::Result;

use textkit::cli::{self, Cli};
use textkit::clipboard::copy_to_clipboard;
use textkit::config;

fn main() -> Result<()> {
    init_logging();

    color_eyre::install()?;

    let config_result = config::load_config();
    if let Some(warning) = &config_result.warning {
        eprintln!("Warning: {}", warning);
    }

    let args = Cli::parse();
    let output = cli::execute(&args.command, &config_result.config)?;

    let mut stdout = std::io::stdout().lock();
    if args.json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&output.json)?)?;
    } else {
        if let Some(preview) = &output.preview {
            if stdout.is_terminal() {
                writeln!(stdout, "{}\n", preview)?;
            }
        }
        if !output.text.is_empty() {
            writeln!(stdout, "{}", output.text)?;
        }
    }
    stdout.flush()?;

    for note in &output.notes {
        eprintln!("{}", note);
    }

    // Clipboard failures never fail the command
    if args.copy {
        if let Err(e) = copy_to_clipboard(&output.text, config_result.config.clipboard.backend) {
            eprintln!("Warning: could not copy to clipboard: {}", e);
        }
    }

    #[cfg(debug_assertions)]
    log::debug!("=== TEXTKIT DEBUG SESSION ENDED ===");

    Ok(())
}

fn log_format(buf: &mut env_logger::fmt::Formatter, record: &log::Record) -> std::io::Result<()> {
    use std::time::SystemTime;
    let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
    writeln!(
        buf,
        "[{}] [{}] {}",
        datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
        record.level(),
        record.args()
    )
}

/// Debug builds append to /tmp/textkit-debug.log at DEBUG level, release
/// builds log to stderr filtered by `TEXTKIT_LOG`
fn init_logging() {
    #[cfg(debug_assertions)]
    {
        let Ok(log_file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/textkit-debug.log")
        else {
            return;
        };

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(log_format)
            .init();

        log::debug!("=== TEXTKIT DEBUG SESSION STARTED ===");
    }

    #[cfg(not(debug_assertions))]
    {
        env_logger::Builder::from_env(env_logger::Env::new().filter_or("TEXTKIT_LOG", "warn"))
            .format(log_format)
            .init();
    }
}
