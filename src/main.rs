// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Search result row host.
//!
//! A command-line host for the result row component.
//!
//! It reads a search response (JSON) and an HTML document carrying the row
//! template, and prints the rendered results list to stdout. Given `--click`,
//! it then clicks a link in one of the rows exactly as a user would, so the
//! analytics event is emitted and the link is opened.
//!
//! ## Architecture
//!
//! Setup follows a load-build-run pattern: configuration (file, then command
//! line overrides), then the injected collaborators, then the list itself.
//! Analytics written to a file are drained before the process exits.

use std::{
    fs,
    path::{Path, PathBuf},
    rc::Rc,
};

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use tracing::info;

use resultrow::{
    analytics::{AnalyticsSink, JsonLinesSink, TracingSink},
    components::{ClickOutcome, ResultList, ViewBindings},
    config::{self, AppConfig},
    logging,
    model::ResultCollection,
    navigation::{LogNavigator, Navigator, SystemNavigator},
    template::DocumentTemplates,
};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "resultrow",
    version,
    about = "Render search result rows and follow result links"
)]
struct Args {
    /// Search response JSON: `searchTerm`, `page`, `pageSize` and `results`.
    #[arg(value_name = "RESULTS")]
    results: PathBuf,

    /// HTML document holding the `search_item-tpl` template script.
    #[arg(short, long, value_name = "FILE")]
    document: Option<PathBuf>,

    /// Append analytics events to this file as JSON lines.
    #[arg(long, value_name = "FILE")]
    analytics_log: Option<PathBuf>,

    /// Base URL for relative result links.
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Prefix for analytics event names.
    #[arg(long, value_name = "PREFIX")]
    event_namespace: Option<String>,

    /// Click a link in the row with this result id.
    #[arg(short, long, value_name = "ID")]
    click: Option<String>,

    /// Which link of the clicked row to follow, counting from zero.
    #[arg(short, long, default_value_t = 0, requires = "click")]
    anchor: usize,

    /// Log the navigation instead of opening the link.
    #[arg(long)]
    dry_run: bool,

    /// Save the effective configuration before running.
    #[arg(long)]
    save_config: bool,
}

/// The entry point of the application.
fn main() -> Result<()> {
    logging::init();

    let args = Args::parse();
    let config = effective_config(config::load_config(), &args);

    if args.save_config {
        config::save_config(&config).context("Failed to save configuration")?;
    }

    run(&args, &config).context("Application error occurred")
}

/// Applies command line overrides on top of the stored configuration.
fn effective_config(mut config: AppConfig, args: &Args) -> AppConfig {
    if let Some(document) = &args.document {
        config.template_document = Some(document.clone());
    }
    if let Some(path) = &args.analytics_log {
        config.analytics_log = Some(path.clone());
    }
    if let Some(base_url) = &args.base_url {
        config.base_url = Some(base_url.clone());
    }
    if let Some(namespace) = &args.event_namespace {
        config.event_namespace = Some(namespace.clone());
    }
    config
}

fn run(args: &Args, config: &AppConfig) -> Result<()> {
    let document = config
        .template_document
        .as_deref()
        .ok_or_else(|| anyhow!("No template document given or configured"))?;
    let templates = DocumentTemplates::load(document)?;

    let collection = load_collection(&args.results)?;

    // Keep a concrete handle on the file sink so it can be drained on exit.
    let file_sink = config
        .analytics_log
        .as_deref()
        .map(JsonLinesSink::to_file)
        .transpose()?
        .map(Rc::new);

    let analytics: Rc<dyn AnalyticsSink> = match &file_sink {
        Some(sink) => sink.clone(),
        None => Rc::new(TracingSink),
    };

    let navigator: Rc<dyn Navigator> = if args.dry_run {
        Rc::new(LogNavigator::new(config.base_url.clone()))
    } else {
        Rc::new(SystemNavigator::new(config.base_url.clone()))
    };

    let mut bindings = ViewBindings::new(analytics, navigator);
    bindings.event_namespace = config.event_namespace.clone();

    let mut list = ResultList::new(collection, &templates, bindings)
        .context("Failed to build results list")?;

    println!("{}", list.render().element().outer_html());

    if let Some(id) = &args.click {
        let (_, outcome) = list
            .click(id, args.anchor)
            .ok_or_else(|| anyhow!("Result '{}' has no link number {}", id, args.anchor))?;

        match outcome {
            ClickOutcome::Navigated(href) => info!(id = id.as_str(), %href, "Followed result link"),
            ClickOutcome::NoTarget => info!(id = id.as_str(), "Result link has no target"),
            ClickOutcome::Ignored => bail!("Click on result '{}' was not handled", id),
        }
    }

    if let Some(sink) = file_sink {
        sink.flush();
    }

    Ok(())
}

fn load_collection(path: &Path) -> Result<ResultCollection> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read results {}", path.display()))?;

    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse results {}", path.display()))
}
