use anyhow::{Context, Result};
use graph_loader::{load_model, ModelSummary};
use tracing_subscriber::EnvFilter;

struct Args {
    locations: Vec<String>,
    json: bool,
}

fn parse_args() -> Result<Args, lexopt::Error> {
    use lexopt::prelude::*;

    let mut locations = Vec::new();
    let mut json = false;
    let mut parser = lexopt::Parser::from_env();

    while let Some(arg) = parser.next()? {
        match arg {
            Value(val) => locations.push(val.string()?),
            Long("json") => json = true,
            Long("help") => {
                println!(
                    "Usage: {bin_name} [--json] <model_path_or_url>...",
                    bin_name = parser.bin_name().unwrap_or("graph_loader")
                );
                std::process::exit(0);
            }
            _ => return Err(arg.unexpected()),
        }
    }

    if locations.is_empty() {
        return Err("missing model path or URL".into());
    }

    Ok(Args { locations, json })
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = parse_args()?;

    // Each location gets its own load; nothing is shared between them.
    let handles: Vec<_> = args
        .locations
        .into_iter()
        .map(|location| {
            tokio::spawn(async move {
                let model = load_model(&location)
                    .await
                    .with_context(|| format!("Failed to load model from {}", location))?;
                Ok::<_, anyhow::Error>(ModelSummary::from_model(&location, &model))
            })
        })
        .collect();

    for handle in handles {
        let summary = handle.await.context("Model load task failed")??;
        if args.json {
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            println!("{}", summary);
        }
    }

    Ok(())
}
