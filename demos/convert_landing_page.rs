use std::{env, fs};

use anyhow::Context;
use figma_elementor::ConverterBuilder;

// A landing page frame in the flat export shape: header, hero and feature cards.
const LANDING_PAGE: &str = include_str!("data/landing_page.json");

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info) // Set default level
        .parse_default_env() // Allow RUST_LOG override
        .init();

    // Usage: convert_landing_page [input.json] [output.json]
    let mut args = env::args().skip(1);
    let input = match args.next() {
        Some(path) => {
            log::info!("Loading design nodes from {}", path);
            fs::read_to_string(&path).with_context(|| format!("Unable to read {}", path))?
        }
        None => {
            log::info!("Loading the bundled landing page");
            LANDING_PAGE.to_string()
        }
    };

    let converter = ConverterBuilder::new()
        .title("FigmaKit Landing Page")
        .pretty(true)
        .build()?;
    let page_json = converter
        .export_json(&input)
        .context("Conversion to a page document failed")?;

    match args.next() {
        Some(output_path) => {
            fs::write(&output_path, &page_json)
                .with_context(|| format!("Unable to write {}", output_path))?;
            log::info!("Page document saved to {}", output_path);
        }
        None => println!("{}", page_json),
    }

    Ok(())
}
