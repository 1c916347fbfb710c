use anyhow::{bail, Context};
use figma_elementor::{
    build_elementor_page,
    models::messages::{PluginMessage, UiMessage},
    plugin::{handle_request, parse_selection},
};

// A selection as the plugin runtime exposes it, including a malformed child.
const SELECTION: &str = include_str!("data/selection.json");

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let selection = parse_selection(SELECTION).context("Selection JSON is invalid")?;
    log::info!("Selection holds {} node(s)", selection.len());

    let reply = handle_request(&UiMessage::GetFigmaNodes, &selection);
    let nodes = match reply {
        Some(PluginMessage::FigmaNodesData { nodes }) => nodes,
        Some(PluginMessage::Error { message }) => bail!("Plugin answered with an error: {}", message),
        None => bail!("Plugin sent no reply"),
    };
    println!("{}", serde_json::to_string_pretty(&nodes)?);

    let page = build_elementor_page(&nodes, "Selection")?;
    log::info!(
        "Selection converts to {} top-level element(s)",
        page.content.len()
    );

    Ok(())
}
