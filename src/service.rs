// THEORY:
// The `service` module wraps the synchronous `ZoneContext` in the one piece of
// asynchrony this system has: the map image loads exactly once, and every
// query issued before the load completes must wait for it rather than fail.
//
// Key architectural principles:
// 1.  **Single-resolution gate**: A `tokio::sync::OnceCell` models the
//     load-complete signal. The first query triggers the decode; concurrent
//     and later queries await the same initialization. Once resolved the cell
//     never changes again, so every consumer reads the same immutable context
//     with no locking.
// 2.  **Explicit dependency**: Query methods await the context as a declared
//     step, not an implicit closure capture. A query cannot observe a
//     half-built context.
// 3.  **No cancellation semantics**: Queries are idempotent, stateless, and
//     cheap. A superseded query simply produces a result the caller ignores.

use crate::pipeline::{Classification, MapConfig, ZoneContext};
use crate::core_modules::geo::GeoFix;
use anyhow::Context as _;
use std::path::PathBuf;
use tokio::sync::OnceCell;
use tracing::info;

/// An async front door over one map asset: lazy one-time load, then pure
/// read-only queries.
pub struct ZoneService {
    path: PathBuf,
    config: MapConfig,
    loaded: OnceCell<ZoneContext>,
}

impl ZoneService {
    /// Creates a service for the image at `path`. Nothing is read until the
    /// first query arrives.
    pub fn open(path: impl Into<PathBuf>, config: MapConfig) -> Self {
        Self {
            path: path.into(),
            config,
            loaded: OnceCell::new(),
        }
    }

    /// Awaits the loaded context, decoding the image and extracting the legend
    /// on first demand. Every caller that arrives before the load finishes is
    /// deferred here until it resolves.
    pub async fn context(&self) -> anyhow::Result<&ZoneContext> {
        self.loaded
            .get_or_try_init(|| async {
                let path = self.path.clone();
                let image = tokio::task::spawn_blocking(move || image::open(&path))
                    .await
                    .context("image decode task failed")?
                    .with_context(|| format!("failed to load map image {}", self.path.display()))?
                    .into_rgba8();
                info!(path = %self.path.display(), "map image loaded");
                Ok(ZoneContext::new(image, self.config.clone()))
            })
            .await
    }

    /// Classifies a pixel-space query, waiting for the image if necessary.
    pub async fn classify_pixel(&self, x: f64, y: f64) -> anyhow::Result<Classification> {
        Ok(self.context().await?.classify_pixel(x, y))
    }

    /// Classifies a geographic fix, waiting for the image if necessary.
    pub async fn classify_fix(&self, fix: GeoFix) -> anyhow::Result<Classification> {
        Ok(self.context().await?.classify_fix(fix))
    }
}
