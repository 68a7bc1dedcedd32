mod cli;
mod logging;
mod report;

use std::fs;
use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use reader_engine::{
    decode_html, Document, MemoryPreferenceStore, PreferenceStore, ReaderConfig, ReaderSession,
    RonPreferenceStore,
};
use reader_logging::{reader_debug, reader_info};
use url::Url;

use crate::cli::Args;
use crate::report::RunReport;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::initialize(args.log_destination(), args.log_level());
    run(&args)
}

fn run(args: &Args) -> anyhow::Result<()> {
    let bytes = fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let decoded = decode_html(&bytes, args.content_type.as_deref())
        .with_context(|| format!("failed to decode {}", args.input.display()))?;
    reader_debug!(
        "Decoded {} bytes from {} as {}",
        bytes.len(),
        args.input.display(),
        decoded.encoding_label
    );

    let config = build_config(args)?;
    let store: Box<dyn PreferenceStore> = match &args.prefs {
        Some(path) => Box::new(RonPreferenceStore::new(path)),
        None => Box::new(MemoryPreferenceStore::new()),
    };

    let mut session = ReaderSession::new(Document::parse(&decoded.html), store, config);
    session.boot();
    for _ in 0..args.toggle {
        session.toggle(None);
    }
    if let Some(mode) = args.force {
        session.toggle(Some(mode.is_active()));
    }
    reader_info!(
        "Finished with reading mode {}",
        if session.is_active() { "on" } else { "off" }
    );

    if args.report {
        let report = RunReport::from_session(&session);
        eprintln!("{}", serde_json::to_string_pretty(&report)?);
    }

    let html = session.document().to_html();
    match &args.output {
        Some(path) => fs::write(path, html)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => io::stdout()
            .write_all(html.as_bytes())
            .context("failed to write to stdout")?,
    }
    Ok(())
}

fn build_config(args: &Args) -> anyhow::Result<ReaderConfig> {
    let mut config = ReaderConfig::default();
    if let Some(raw) = &args.base_url {
        let base = Url::parse(raw).with_context(|| format!("invalid base URL {raw:?}"))?;
        config = config.with_base_url(base);
    }
    if let Some(min_text_len) = args.min_text_len {
        config.min_text_len = min_text_len;
    }
    Ok(config)
}
