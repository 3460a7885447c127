mod config;
mod error;
mod inline;
mod line;
mod list;

pub use config::{Config, ConfigError, PassesConfig};
pub use error::CliError;
pub use inline::{bold, headings, italic};
pub use line::{LineKind, ListKind, ListState};
pub use list::lists;

use log::debug;

/// Convert markdown to HTML using the default config (lists enabled).
pub fn translate(markdown: &str) -> String {
    translate_with_config(markdown, Config::compiled_default())
}

/// Convert markdown to HTML with custom config.
///
/// Headings, then bold, then italic, each over the whole text. The list pass
/// runs last, on the result of the others, when `config.passes.lists` is set.
pub fn translate_with_config(markdown: &str, config: &Config) -> String {
    debug!("translating {} bytes", markdown.len());

    let html = headings(markdown);
    let html = bold(&html);
    let html = italic(&html);

    if config.passes.lists {
        lists(&html)
    } else {
        debug!("list pass disabled");
        html
    }
}
