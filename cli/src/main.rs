use clap::{ArgAction, Parser, Subcommand};
use unitvalue::config::WidgetConfig;
use unitvalue::script::{self, Frame, ScriptRunner};
use unitvalue::widget;

#[derive(Parser)]
#[command(name = "unitvalue")]
#[command(about = "Percent/pixel value widget: replay UI events and inspect render state", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay an event script file
    Replay {
        /// Script path (one event per line: unit, type, commit, step, render)
        script: String,

        /// Widget config file (TOML)
        #[arg(short, long)]
        config: Option<String>,

        /// Print frames as JSON
        #[arg(long)]
        json: bool,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Replay events given on the command line (e.g. "unit px" "commit 500")
    Eval {
        #[arg(required = true)]
        events: Vec<String>,

        /// Widget config file (TOML)
        #[arg(short, long)]
        config: Option<String>,

        /// Print frames as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how typed text is normalized and which number a commit extracts
    Normalize {
        /// Raw field text
        text: String,
    },

    /// Print the default widget config as TOML
    Defaults,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Replay {
            script,
            config,
            json,
            output,
        } => replay_file(&script, config.as_deref(), json, output.as_deref()),
        Commands::Eval {
            events,
            config,
            json,
        } => eval_events(&events, config.as_deref(), json),
        Commands::Normalize { text } => {
            normalize_text(&text);
            Ok(())
        }
        Commands::Defaults => print_defaults(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging(verbose: u8) {
    use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    if TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto).is_err() {
        eprintln!("Warning: logger already initialized");
    }
}

#[cfg(target_arch = "wasm32")]
fn init_logging(_verbose: u8) {}

fn load_config(path: Option<&str>) -> Result<WidgetConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(WidgetConfig::load_from_file(path)?),
        None => Ok(WidgetConfig::default()),
    }
}

fn run_script(
    source: &str,
    config: WidgetConfig,
) -> Result<Vec<Frame>, Box<dyn std::error::Error>> {
    let events = script::parse_script(source)?;
    let mut runner = ScriptRunner::new(config);
    Ok(runner.run(&events))
}

fn format_frames(frames: &[Frame], json: bool) -> Result<String, Box<dyn std::error::Error>> {
    if json {
        return Ok(serde_json::to_string_pretty(frames)?);
    }

    let lines: Vec<String> = frames.iter().map(|f| f.to_string()).collect();
    Ok(lines.join("\n"))
}

fn replay_file(
    path: &str,
    config_path: Option<&str>,
    json: bool,
    output: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let source = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read script '{}': {}", path, e))?;

    let frames = run_script(&source, config)?;
    let formatted = format_frames(&frames, json)?;

    if let Some(output_path) = output {
        std::fs::write(output_path, formatted)?;
        println!("{} frames written to {}", frames.len(), output_path);
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

fn eval_events(
    events: &[String],
    config_path: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let frames = run_script(&events.join("\n"), config)?;
    println!("{}", format_frames(&frames, json)?);
    Ok(())
}

fn normalize_text(text: &str) {
    let typed = widget::normalize_typed(text);
    println!("Typed:     {:?}", typed);

    let trimmed = text.trim();
    if trimmed.is_empty() {
        println!("Extracted: (empty input, commits as 0)");
        return;
    }
    match widget::extract_first_number(&widget::normalize_typed(trimmed)) {
        Some(n) => println!("Extracted: {}", n),
        None => println!("Extracted: (no number, commits as 0)"),
    }
}

fn print_defaults() -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", WidgetConfig::default().to_toml_string()?);
    Ok(())
}
