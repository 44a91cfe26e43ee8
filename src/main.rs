#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod api;
mod cli;
mod core;
mod prelude;
mod quantity;
mod render;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, compare},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    compare(&Args::parse())?;

    info!("done!");
    Ok(())
}
