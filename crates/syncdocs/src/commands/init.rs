//! Scaffold a docs project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Files created by `init`, relative to the working directory.
const DOCS: &[(&str, &str)] = &[
    ("content/docs/index.mdx", INTRODUCTION),
    ("content/docs/installation.mdx", INSTALLATION),
    ("content/docs/installation/manual.mdx", MANUAL_INSTALL),
    ("content/docs/components/button.mdx", BUTTON),
    ("content/docs/blocks/pricing.mdx", PRICING),
];

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing syncdocs...");

    write_if_allowed(config_path, DEFAULT_CONFIG, yes)?;

    for (path, contents) in DOCS {
        write_if_allowed(Path::new(path), contents, yes)?;
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'syncdocs dev' to start the development server.");

    Ok(())
}

/// Write `contents` unless the file exists and `overwrite` is off.
fn write_if_allowed(path: &Path, contents: &str, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        tracing::warn!("{} already exists. Use --yes to overwrite.", path.display());
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!("Created {}", path.display());
    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# syncdocs configuration

[content]
# Docs root
dir = "content/docs"

[site]
title = "Sync UI"
base_url = "/"

[build]
output = "dist"
minify = true

[search]
# Milliseconds before search results are shown; 0 filters as you type
delay_ms = 0
# Pages featured under "Latest"
latest = ["Pricing", "Testimonials", "Dock", "Marquee"]
"#;

const INTRODUCTION: &str = r#"---
title: Introduction
description: Animated, accessible components you copy into your project.
---

Sync UI is a collection of components you can browse, preview, and copy.

## Browsing

Use the sidebar or press `/` to search.
"#;

const INSTALLATION: &str = r#"---
title: Installation
description: Pick a setup guide.
---

Choose the guide that matches your project.
"#;

const MANUAL_INSTALL: &str = r#"---
title: Manual
description: Set things up by hand.
---

## Dependencies

```bash
npm install framer-motion clsx tailwind-merge
```
"#;

const BUTTON: &str = r#"---
title: Button
description: Buttons in every shape.
---

## Preview

<Button variant="primary">Get started</Button>

## Variants

<Tabs>
<Tab label="Outline"><Button variant="outline">Outline</Button></Tab>
<Tab label="Ghost"><Button variant="ghost">Ghost</Button></Tab>
</Tabs>
"#;

const PRICING: &str = r#"---
title: Pricing
description: Plans side by side.
---

<Pricing variant="popular" name="Pro" price="$19" period="/month" features="Unlimited projects,Priority support" />
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn respects_existing_files() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested/file.txt");

        write_if_allowed(&path, "first", false).unwrap();
        write_if_allowed(&path, "second", false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");

        write_if_allowed(&path, "third", true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "third");
    }

    #[test]
    fn default_config_parses() {
        let config: crate::config::Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, crate::config::Config::default());
    }
}
