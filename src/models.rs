use std::future::Future;

use anyhow::Result;
use rten::Model;
use tracing::debug;

use crate::location::Location;

mod source;

pub use source::LoaderOptions;
use source::{read_file, HttpSource};

/// Something that can turn a location identifier into a loaded graph.
///
/// Implementations receive the identifier exactly as the caller passed it.
pub trait GraphLoader {
    type Graph;

    fn load_graph(&self, location: &str) -> impl Future<Output = Result<Self::Graph>> + Send;
}

/// Loads `.rten` graphs from local paths, `file://` identifiers or HTTP(S) URLs.
pub struct RtenLoader {
    http: HttpSource,
}

impl RtenLoader {
    pub fn new(options: LoaderOptions) -> Result<Self> {
        Ok(Self {
            http: HttpSource::new(&options)?,
        })
    }
}

impl GraphLoader for RtenLoader {
    type Graph = Model;

    async fn load_graph(&self, location: &str) -> Result<Model> {
        let bytes = match Location::classify(location) {
            Location::Remote(url) => self.http.fetch(url).await?,
            Location::Local(path) => read_file(path).await?,
        };
        debug!(location, bytes = bytes.len(), "decoding model");

        // Decoding is CPU bound; keep it off the async workers.
        let model = tokio::task::spawn_blocking(move || Model::load(bytes)).await??;
        Ok(model)
    }
}

/// Load a model through `loader`, handing back whatever it produced.
pub async fn load_with<L: GraphLoader>(loader: &L, location: &str) -> Result<L::Graph> {
    debug!(location, "loading model");
    let graph = loader.load_graph(location).await?;
    debug!(location, "model loaded");
    Ok(graph)
}

/// Load a model from a local path or URL.
pub async fn load_model(path: &str) -> Result<Model> {
    let loader = RtenLoader::new(LoaderOptions::default())?;
    load_with(&loader, path).await
}
