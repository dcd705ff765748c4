use anyhow::{Context, Result};
use billiards::api::{Catalog, CoverLeaf, CoverSquare, InitialAngles};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod classify;
mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "billiards-cli")]
#[command(about = "Classify code sequences and inspect cover catalogs")]
struct Cmd {
    /// Optional run tag; propagated to provenance sidecars and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Canonicalize and classify one code sequence
    Classify {
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        codes: Vec<i32>,
        /// Initial angles for the printed constraint
        #[arg(long, default_value = "xy")]
        angles: InitialAngles,
        /// Print JSON instead of a table row
        #[arg(long)]
        json: bool,
        /// Write JSON here plus a provenance sidecar
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List cover squares at a subdivision depth
    Squares {
        /// Levels below the full domain (4^depth squares)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=12))]
        depth: u8,
    },
    /// Parse a cover catalog directory and summarize it
    Cover {
        dir: PathBuf,
        /// Look up the leaf containing a point (radians)
        #[arg(long, num_args = 2, value_names = ["X", "Y"])]
        at: Option<Vec<f64>>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Classify {
            codes,
            angles,
            json,
            out,
        } => classify(codes, angles, json, out, cmd.tag),
        Action::Squares { depth } => squares(depth),
        Action::Cover { dir, at } => cover(&dir, at.as_deref()),
        Action::Report => report(cmd.tag),
    }
}

fn classify(
    codes: Vec<i32>,
    angles: InitialAngles,
    as_json: bool,
    out: Option<PathBuf>,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(codes = ?codes, %angles, tag = ?tag, "classify");
    let row = classify::classify(&codes, angles)?;
    if as_json {
        println!("{}", serde_json::to_string_pretty(&row)?);
    } else {
        println!("{row}");
    }

    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        fs::write(&out, serde_json::to_vec_pretty(&row)?)
            .with_context(|| format!("writing {}", out.display()))?;
        let payload = Payload::new(
            "classify",
            json!({ "codes": codes, "angles": angles.to_string() }),
        )
        .with_tag(tag);
        let prov = provenance::write_sidecar(&out, payload)?;
        tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote classification");
    }
    Ok(())
}

fn squares(depth: u8) -> Result<()> {
    tracing::info!(depth, "squares");
    let level = CoverSquare::initial()
        .descendants(depth)
        .with_context(|| format!("subdividing to depth {depth}"))?;
    for sq in level {
        let b = sq.bounds();
        println!(
            "{sq:<28} x=[{:.6}, {:.6}] y=[{:.6}, {:.6}]",
            b.interval_x().min(),
            b.interval_x().max(),
            b.interval_y().min(),
            b.interval_y().max()
        );
    }
    Ok(())
}

fn read(dir: &Path, name: &str) -> Result<String> {
    let path = dir.join(name);
    let text = fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    Ok(text.trim().to_string())
}

fn cover(dir: &Path, at: Option<&[f64]>) -> Result<()> {
    tracing::info!(dir = %dir.display(), "cover");
    let catalog = Catalog::parse(
        &read(dir, "polygon.txt")?,
        &read(dir, "stables.txt")?,
        &read(dir, "triples.txt")?,
        &read(dir, "cover.txt")?,
    )
    .with_context(|| format!("parsing catalog in {}", dir.display()))?;

    let max_depth = catalog
        .cover
        .stables
        .keys()
        .chain(catalog.cover.triples.keys())
        .map(CoverSquare::depth)
        .max()
        .unwrap_or(0);
    println!("polygon vertices: {}", catalog.polygon.vertices().len());
    println!("stable pairs:     {}", catalog.stables.len());
    println!("triples:          {}", catalog.triples.len());
    println!(
        "leaves:           {} ({} stable, {} triple)",
        catalog.cover.leaves(),
        catalog.cover.stables.len(),
        catalog.cover.triples.len()
    );
    println!("max depth:        {max_depth}");

    if let Some(&[x, y]) = at {
        match catalog.cover.square_for(x, y) {
            Some((sq, CoverLeaf::Stable(pair))) => println!("({x}, {y}) in {sq}: stable {pair}"),
            Some((sq, CoverLeaf::Triple(triple))) => {
                println!("({x}, {y}) in {sq}: triple {triple}")
            }
            None => println!("({x}, {y}) is not in any non-empty leaf"),
        }
    }
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let doc = provenance::document(Payload::new("report", json!({})).with_tag(tag), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
