use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "placegen", version, about = "Generate placeholder backgrounds and sprites")]
struct Cli {
    /// Project root; assets go to `<root>/game/background` and `<root>/game/figure`.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// JSON catalog to use instead of the built-in tables.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// How to produce the raster-extension copies.
    #[arg(long, value_enum, default_value_t = RasterChoice::Auto)]
    raster: RasterChoice,

    /// Print the active catalog as JSON and exit.
    #[arg(long)]
    dump_catalog: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RasterChoice {
    /// Best available converter, else write markup.
    Auto,
    /// Always write markup under the raster extension.
    #[value(name = "none")]
    Markup,
    /// Built-in resvg converter (needs the `raster` feature).
    Resvg,
    /// `rsvg-convert` from PATH.
    External,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "placegen=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => placegen::Catalog::from_json_path(path)
            .with_context(|| format!("load catalog '{}'", path.display()))?,
        None => placegen::Catalog::builtin(),
    };

    if cli.dump_catalog {
        println!("{}", catalog.to_json_pretty()?);
        return Ok(());
    }

    let generator =
        placegen::Generator::new(&cli.root, catalog).with_rasterizer(make_rasterizer(cli.raster)?);

    println!("Generating placeholder assets...");
    println!("Background directory: {}", generator.background_dir().display());
    println!("Figure directory: {}", generator.figure_dir().display());
    match generator.rasterizer_name() {
        Some(name) => println!("Raster copies: converted with {name}"),
        None => println!("Raster copies: svg markup (no converter)"),
    }
    println!();

    let mut kind = None;
    let report = generator.run_with(|a| {
        if kind != Some(a.kind) {
            if kind.is_some() {
                println!();
            }
            match a.kind {
                placegen::AssetKind::Background => println!("Generating backgrounds:"),
                placegen::AssetKind::Character => println!("Generating character sprites:"),
            }
            kind = Some(a.kind);
        }
        match &a.detail {
            Some(detail) => println!("  ✓ {} ({detail})", a.id),
            None => println!("  ✓ {}", a.id),
        }
    })?;

    println!();
    println!(
        "✓ Generated {} backgrounds and {} character sprites",
        report.count(placegen::AssetKind::Background),
        report.count(placegen::AssetKind::Character),
    );

    if report.fallback_count() > 0 {
        println!();
        println!("Note: raster-extension files hold SVG markup; no converter was available.");
        println!("For production, replace these with actual PNG artwork.");
    }

    Ok(())
}

fn make_rasterizer(
    choice: RasterChoice,
) -> anyhow::Result<Option<Box<dyn placegen::Rasterizer>>> {
    let kind = match choice {
        RasterChoice::Auto => return Ok(placegen::detect_rasterizer()),
        RasterChoice::Markup => return Ok(None),
        #[cfg(feature = "raster")]
        RasterChoice::Resvg => placegen::RasterKind::Resvg,
        #[cfg(not(feature = "raster"))]
        RasterChoice::Resvg => {
            anyhow::bail!("this build has no resvg converter; rebuild with `--features raster`")
        }
        RasterChoice::External => placegen::RasterKind::External,
    };

    Ok(Some(placegen::create_rasterizer(kind)?))
}
