//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod extract;
pub mod profile;
pub mod text;

use std::path::Path;

use statex_core::{PageScope, StatexConfig};

/// Page scope override accepted on the command line.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ScopeArg {
    /// First page only
    FirstPage,
    /// First and last page
    FirstAndLast,
    /// Every page
    AllPages,
}

impl From<ScopeArg> for PageScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::FirstPage => PageScope::FirstPage,
            ScopeArg::FirstAndLast => PageScope::FirstAndLast,
            ScopeArg::AllPages => PageScope::AllPages,
        }
    }
}

/// Load the config file if given, defaults otherwise.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<StatexConfig> {
    match config_path {
        Some(path) => Ok(StatexConfig::from_file(Path::new(path))?),
        None => Ok(StatexConfig::default()),
    }
}

/// Whether a path looks like a PDF document.
pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

/// Read a document as upper-cased text. PDFs go through the acquisition
/// layer with the given page scope; anything else is treated as plain text
/// (page scoping does not apply).
pub fn acquire_input(
    path: &Path,
    scope: PageScope,
    config: &StatexConfig,
) -> anyhow::Result<String> {
    if is_pdf(path) {
        let data = std::fs::read(path)?;
        Ok(statex_core::acquire_text_scoped(&data, scope, &config.pdf)?)
    } else {
        Ok(std::fs::read_to_string(path)?.to_uppercase())
    }
}
