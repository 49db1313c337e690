//! irsforms: scrape the IRS PDF catalog and download tax forms into
//! year-stamped directories.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod downloader;
pub mod errors;
pub mod format;
pub mod listing;
pub mod metadata;
pub mod models;

#[cfg(test)]
mod testing;

pub use errors::FormsError;
