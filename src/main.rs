//! Demo entry point: parse a pre-recorded labeled transcript and log the
//! resulting (thought, label) records.

use anyhow::Result;
use thought_labeler::client::Client;
use thought_labeler::config::Config;
use thought_labeler::parse::parse_transcript;
use tracing::info;

const SAMPLE_TRANSCRIPT: &str = "\
THOUGHT 1: The ocean is salty because water dissolves minerals from rocks and carries them to the sea.
[SEMANTIC_RETRIEVAL]

THOUGHT 2: Let me trace the water cycle: rain falls on land, flows through rivers, picks up dissolved salts.
[LOGICAL_REASONING]

THOUGHT 3: Rivers continuously add salt to oceans, but water evaporates leaving salt behind, concentrating it over time.
[PATTERN_RECOGNITION]

THOUGHT 4: I should consider the geological timescales - this process has been happening for billions of years.
[WORKING_MEMORY]

THOUGHT 5: Underwater volcanic activity and hydrothermal vents also release minerals directly into seawater.
[SEMANTIC_RETRIEVAL]

THOUGHT 6: The main salts are sodium chloride, but also magnesium, calcium, and potassium compounds.
[SEMANTIC_RETRIEVAL]

THOUGHT 7: Now I need to consider the ecological reasons - how does salinity affect marine life?
[PLANNING]

THOUGHT 8: Marine organisms evolved osmoregulation systems to maintain water balance in salty environments.
[LOGICAL_REASONING]

THOUGHT 9: Salinity creates distinct ecological niches - different species thrive at different salt concentrations.
[PATTERN_RECOGNITION]

THOUGHT 10: Ocean salinity affects water density, which drives important currents that distribute nutrients and heat.
[LOGICAL_REASONING]

THOUGHT 11: Salt water has a lower freezing point, allowing liquid oceans in polar regions supporting unique ecosystems.
[LOGICAL_REASONING]

FINAL: The ocean is salty due to physical processes: rivers continuously deliver dissolved minerals from weathered rocks, while evaporation removes only pure water, concentrating salts over billions of years. Underwater volcanic activity adds more minerals. Ecologically, this salinity is crucial - it drives ocean currents that distribute nutrients globally, creates diverse habitats for specially-adapted marine life with osmoregulation systems, and maintains liquid water in cold regions, supporting polar ecosystems.";

fn main() -> Result<()> {
    thought_labeler::load_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "thought_labeler=info".to_string()),
        )
        .init();

    let config = Config::load()?;
    info!("configuration loaded (model={})", config.model);
    let client = Client::new(config);

    let records = parse_transcript(&client, SAMPLE_TRANSCRIPT)?;
    for (i, record) in records.iter().enumerate() {
        info!("{:>2}. [{}] {}", i + 1, record.label, record.text);
    }

    println!("End script.");
    Ok(())
}
