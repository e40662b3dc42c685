use std::{
    fs::File,
    io::{stdout, BufReader, Write},
    thread,
    time::Instant,
};

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

use args::Args;
use slicer::{format, format::svg::SvgSheet, slicer::Slicer};

mod args;

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let filter = filter::Targets::new()
        .with_default(LevelFilter::OFF)
        .with_target("slicer", level);
    let format_layer = tracing_subscriber::fmt::layer();
    tracing_subscriber::registry()
        .with(filter)
        .with(format_layer)
        .init();

    let file = BufReader::new(File::open(&args.mesh)?);
    let mesh = format::parse(file)?;
    println!(
        "Loaded `{}`. {{ facets: {}, dropped: {} }}",
        args.mesh.file_name().unwrap_or_default().to_string_lossy(),
        mesh.facet_count(),
        mesh.dropped_facets()
    );

    let now = Instant::now();
    let slicer = Slicer::new(&args.slice_config(), mesh)?;
    let progress = slicer.progress();

    // Slice on another thread so this one can report progress.
    let worker = thread::spawn(move || slicer.slice());

    while progress.total() > 0 && !progress.finished() {
        print!(
            "\rLayer: {}/{}, {:.1}%",
            progress.completed(),
            progress.total(),
            progress.fraction() * 100.0
        );
        stdout().flush()?;
        thread::sleep(std::time::Duration::from_millis(50));
    }
    println!();

    let result = worker.join().expect("slicing thread panicked");

    let polygons: usize = result.layers.iter().map(|layer| layer.polygons.len()).sum();
    println!(
        "Sliced {} layer(s) into {} contour(s); {} layer(s) failed. Elapsed: {:.1}s",
        result.layers.len(),
        polygons,
        result.failures.len(),
        now.elapsed().as_secs_f32()
    );

    for failure in &result.failures {
        println!(" \\ z = {}: {}", failure.z, failure.error);
    }

    if let Some(path) = args.svg {
        SvgSheet::new(&result.layers).save(&path)?;
        println!("Wrote contour sheet to `{}`.", path.display());
    }

    Ok(())
}
