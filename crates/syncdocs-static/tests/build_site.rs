use std::fs;
use std::path::Path;

use syncdocs_content::SearchConfig;
use syncdocs_static::{BuildConfig, StaticBuilder};
use tempfile::tempdir;

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[tokio::test]
async fn builds_full_docs_tree() {
    let temp = tempdir().unwrap();
    let docs = temp.path().join("content/docs");
    let out = temp.path().join("dist");

    write(&docs, "index.mdx", "---\ntitle: Introduction\n---\nWelcome to the docs.\n");
    write(&docs, "installation.mdx", "---\ntitle: Setup\n---\nInstall it.\n");
    write(&docs, "installation/manual.mdx", "---\ntitle: Manual\n---\nBy hand.\n");
    write(
        &docs,
        "components/tabs.mdx",
        r#"---
title: Tabs
description: Switch between panels
---
## Preview

<Tabs variant="pills">
<Tab label="One">First</Tab>
<Tab label="Two">Second</Tab>
</Tabs>

```tsx
<Tabs />
```
"#,
    );
    write(&docs, "blocks/pricing.mdx", "---\ntitle: Pricing\n---\n<Pricing name=\"Pro\" price=\"$9\" />\n");
    write(&docs, "components/oops.mdx", "---\ntitle: Oops\n---\n<Nope />\n");

    let result = StaticBuilder::new(BuildConfig {
        content_dir: docs,
        output_dir: out.clone(),
        search: SearchConfig {
            latest: vec!["Pricing".to_string()],
            delay: None,
        },
        ..Default::default()
    })
    .build()
    .await
    .unwrap();

    assert_eq!(result.pages, 6);

    let tabs = fs::read_to_string(out.join("docs/components/tabs/index.html")).unwrap();
    assert!(tabs.contains("sui-tabs--pills"));
    assert!(tabs.contains(r#"class="sui-copy""#));
    assert!(tabs.contains(r#"data-toc-link="preview""#));
    assert!(tabs.contains("Switch between panels"));

    // Unknown components only break their own page content
    let oops = fs::read_to_string(out.join("docs/components/oops/index.html")).unwrap();
    assert!(oops.contains("sui-render-error"));
    assert!(oops.contains("nav-section"));

    assert!(out.join("docs/installation/index.html").exists());
    assert!(out.join("docs/installation/manual/index.html").exists());

    let index: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("search-index.json")).unwrap()).unwrap();
    let titles: Vec<&str> = index["entries"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["title"].as_str())
        .collect();
    assert!(!titles.contains(&"Setup"));
    assert!(titles.contains(&"Tabs"));
    assert_eq!(index["suggestions"][0]["title"], "Pricing");
    assert_eq!(index["suggestions"][0]["category"], "Latest");
}
