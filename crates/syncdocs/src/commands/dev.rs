//! Development server command.

use anyhow::{Context, Result};
use syncdocs_server::{DevServer, DevServerConfig};

use crate::config::Config;

/// Run the dev server.
pub async fn run(config: Config, port: u16, open: bool) -> Result<()> {
    if !config.content.dir.is_dir() {
        anyhow::bail!(
            "Docs directory not found: {}. Run 'syncdocs init' first.",
            config.content.dir.display()
        );
    }

    let server_config = DevServerConfig {
        content_dir: config.content.dir,
        port,
        open,
        title: config.site.title,
        search: config.search.to_search_config(),
        ..Default::default()
    };

    DevServer::new(server_config)
        .start()
        .await
        .context("Dev server stopped")?;

    Ok(())
}
