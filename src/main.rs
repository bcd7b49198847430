use clap::Parser;
use colored::Colorize;
use ipv4_calc::config::{Config, OutputFormat};
use ipv4_calc::logging::init_logging;
use ipv4_calc::output::{render, render_json};
use ipv4_calc::{input_from_query, parse_input, read_lines};
use std::error::Error;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about = "IPv4 subnet calculator", long_about = None)]
struct Opt {
    #[arg(help = "Inputs like 192.168.1.10/24, 10.0.0.5 or 200.1.1.1/255.255.255.0; read from stdin when empty")]
    inputs: Vec<String>,

    #[arg(short, long, help = "URL query string carrying the input, e.g. '?addr=10.0.0.1/8'")]
    query: Option<String>,

    #[arg(short, long, value_enum, help = "Output format [env: IPV4_CALC_FORMAT]")]
    format: Option<OutputFormat>,

    #[arg(long, help = "log4rs config file [env: IPV4_CALC_LOG_CONFIG]")]
    log_config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let opt = Opt::parse();

    let mut config = Config::from_env();
    if let Some(format) = opt.format {
        config.format = format;
    }
    if let Some(log_config) = opt.log_config {
        config.log_config = log_config;
    }
    init_logging(&config)?;
    log::info!("#Start main() format={:?}", config.format);

    let inputs = match opt.query {
        Some(query) => vec![input_from_query(&query).to_string()],
        None if !opt.inputs.is_empty() => opt.inputs,
        None => read_lines(std::io::stdin().lock())?,
    };

    for (i, input) in inputs.iter().enumerate() {
        let result = parse_input(input.trim());
        if !result.status.is_ok() {
            log::warn!("{} input '{}'", "Rejected".on_red(), input);
        }
        match config.format {
            OutputFormat::Text => {
                if i > 0 {
                    println!();
                }
                println!("{}", render(&result));
            }
            OutputFormat::Json => println!("{}", render_json(&result)?),
        }
    }

    Ok(())
}
