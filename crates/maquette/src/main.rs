//! Maquette CLI - one-shot mock generation from the terminal.
//!
//! Drives a client session against the in-process engine: pick a model,
//! optionally load a template, set the prompt and parameters, generate
//! once, and print the result.

use clap::Parser;
use maquette::{
    EngineConfig, GenerationParameters, MockEngine, ModelCatalog, Session, TemplateCatalog,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for one-shot generation.
#[derive(Parser, Debug)]
#[command(name = "maquette")]
#[command(about = "Maquette playground - one-shot mock generation")]
#[command(version)]
struct Args {
    /// The prompt to generate from (may come from a template instead)
    prompt: Option<String>,

    /// Catalog id of the model to use
    #[arg(short, long, default_value = "gpt-4-turbo")]
    model: String,

    /// Template id to load before generating
    #[arg(short, long)]
    template: Option<String>,

    /// Sampling temperature in [0.0, 1.0]
    #[arg(long)]
    temperature: Option<f32>,

    /// Output token cap
    #[arg(long)]
    max_tokens: Option<u32>,

    /// RNG seed for reproducible output
    #[arg(long, env = "MAQUETTE_SEED")]
    seed: Option<u64>,

    /// Skip the artificial latency window
    #[arg(long)]
    no_delay: bool,

    /// Print the full metadata as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let models = ModelCatalog::builtin();
    let templates = TemplateCatalog::builtin();

    let mut session = Session::new(&models);
    let model = models
        .find(&args.model)
        .ok_or_else(|| anyhow::anyhow!("Unknown model id: {}", args.model))?;
    session.select_model(model.clone());

    if let Some(id) = &args.template {
        let template = templates
            .find(id)
            .ok_or_else(|| anyhow::anyhow!("Unknown template id: {}", id))?;
        session.apply_template(template);
        info!(template = %id, "template loaded");
    }

    if let Some(prompt) = &args.prompt {
        // A template preset prompt acts as a prefix for the user's text.
        let combined = if args.template.is_some() {
            format!("{}{}", session.prompt(), prompt)
        } else {
            prompt.clone()
        };
        session.set_prompt(combined);
    }

    if args.temperature.is_some() || args.max_tokens.is_some() {
        let current = *session.parameters();
        let parameters = GenerationParameters::new(
            args.temperature.unwrap_or(*current.temperature()),
            args.max_tokens.unwrap_or(*current.max_tokens()),
        )?;
        session.set_parameters(parameters);
    }

    if !session.can_generate() {
        anyhow::bail!("Nothing to generate: provide a prompt or a template");
    }

    let mut config = EngineConfig::builder();
    if args.no_delay {
        config.delay_min_ms(0u64).delay_max_ms(0u64);
    }
    config.seed(args.seed);
    let engine = MockEngine::from_config(config.build()?);

    session.generate(&engine).await;
    let result = session
        .result()
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("No result produced"))?;

    println!("{}", result.content());
    if args.json {
        println!();
        println!("{}", serde_json::to_string_pretty(result.metadata())?);
    } else {
        let metadata = result.metadata();
        eprintln!(
            "\n[{} ({}) | {} tokens | temperature {} | finish: {}]",
            metadata.model(),
            metadata.provider(),
            metadata.tokens(),
            metadata.temperature(),
            metadata.finish_reason()
        );
    }

    Ok(())
}
