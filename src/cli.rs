use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "irsforms")]
#[command(about = "Scrape the IRS form catalog and download tax-form PDFs into year-stamped directories")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scrape the IRS PDF listing into forms/metadata.json
    Scrape,

    /// Download forms listed in forms/metadata.json into forms/<year>/
    Download {
        /// Revision years to download (all years when omitted)
        years: Vec<u16>,
    },

    /// Download the built-in form list flat into forms/<year>/ (deprecated)
    Legacy {
        /// Tax year directory to download into
        year: Option<u16>,
    },
}
