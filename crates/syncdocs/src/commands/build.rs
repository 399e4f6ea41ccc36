//! Static site build command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use syncdocs_static::{BuildConfig, StaticBuilder};

use crate::config::Config;

/// Run the build command.
pub async fn run(config: Config, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building static site...");

    let build_config = BuildConfig {
        content_dir: config.content.dir,
        output_dir: output.unwrap_or(config.build.output),
        minify: minify.unwrap_or(config.build.minify),
        base_url: config.site.base_url,
        title: config.site.title,
        search: config.search.to_search_config(),
    };

    let result = StaticBuilder::new(build_config)
        .build()
        .await
        .context("Build failed")?;

    tracing::info!("Built {} pages in {}ms", result.pages, result.duration_ms);
    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
