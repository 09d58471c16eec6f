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

//! Full-page navigation.
//!
//! Following a result link leaves the current page entirely. The row view
//! never does this itself; it hands the URL to a [`Navigator`], which is also
//! the seam tests use to observe where a click would have gone.

use std::{env, process::Command};

use tracing::{info, warn};
use url::Url;

pub trait Navigator {
    /// Navigates the whole page to `url`.
    fn navigate(&self, url: &str);
}

/// Resolves `href` against `base_url` the way a browser resolves a link.
///
/// Without a base, or with one that does not parse, the href is returned
/// unchanged.
pub fn resolve_url(base_url: Option<&str>, href: &str) -> String {
    let Some(base) = base_url.filter(|b| !b.is_empty()) else {
        return href.to_string();
    };

    match Url::parse(base).and_then(|base| base.join(href)) {
        Ok(url) => url.to_string(),
        Err(e) => {
            warn!(base, href, error = %e, "Failed to resolve URL against base");
            href.to_string()
        }
    }
}

/// Program and arguments that open `url` with the default handler on `os`.
///
/// The URL is always a single argument handed straight to the opener; no
/// shell ever parses it.
fn opener_argv<'a>(os: &str, url: &'a str) -> (&'static str, Vec<&'a str>) {
    match os {
        "macos" => ("open", vec![url]),
        "windows" => ("rundll32", vec!["url.dll,FileProtocolHandler", url]),
        _ => ("xdg-open", vec![url]),
    }
}

/// Opens URLs with the desktop's default handler.
#[derive(Debug, Clone, Default)]
pub struct SystemNavigator {
    base_url: Option<String>,
}

impl SystemNavigator {
    pub fn new(base_url: Option<String>) -> Self {
        Self { base_url }
    }

    fn opener(url: &str) -> Command {
        let (program, args) = opener_argv(env::consts::OS, url);
        let mut cmd = Command::new(program);
        cmd.args(args);
        cmd
    }
}

impl Navigator for SystemNavigator {
    fn navigate(&self, url: &str) {
        let url = resolve_url(self.base_url.as_deref(), url);
        info!(%url, "Navigating");

        if let Err(e) = Self::opener(&url).spawn() {
            warn!(%url, error = %e, "Failed to open URL");
        }
    }
}

/// Logs the navigation instead of performing it.
#[derive(Debug, Clone, Default)]
pub struct LogNavigator {
    base_url: Option<String>,
}

impl LogNavigator {
    pub fn new(base_url: Option<String>) -> Self {
        Self { base_url }
    }
}

impl Navigator for LogNavigator {
    fn navigate(&self, url: &str) {
        let url = resolve_url(self.base_url.as_deref(), url);
        info!(%url, "Navigation (dry run)");
    }
}
