use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    catalog::{AssetPaths, Catalog, asset_paths},
    foundation::{color::Rgb8, core::Canvas, error::PlacegenResult},
    raster::Rasterizer,
    render::{background_svg, character_svg},
};

/// Backgrounds land in `<root>/game/background`.
pub const BACKGROUND_SUBDIR: [&str; 2] = ["game", "background"];

/// Character sprites land in `<root>/game/figure`.
pub const FIGURE_SUBDIR: [&str; 2] = ["game", "figure"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Background,
    Character,
}

/// How the raster-extension copy was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RasterOutcome {
    /// Real PNG bytes from a [`Rasterizer`].
    Converted,
    /// No converter; the file holds the same markup as the `.svg`.
    Fallback,
}

#[derive(Clone, Debug)]
pub struct AssetOutcome {
    pub kind: AssetKind,
    pub id: String,
    /// Human-readable description for progress output.
    pub detail: Option<String>,
    pub paths: AssetPaths,
    pub raster: RasterOutcome,
}

#[derive(Clone, Debug)]
pub struct GenerateReport {
    pub background_dir: PathBuf,
    pub figure_dir: PathBuf,
    pub assets: Vec<AssetOutcome>,
}

impl GenerateReport {
    pub fn count(&self, kind: AssetKind) -> usize {
        self.assets.iter().filter(|a| a.kind == kind).count()
    }

    pub fn fallback_count(&self) -> usize {
        self.assets
            .iter()
            .filter(|a| a.raster == RasterOutcome::Fallback)
            .count()
    }
}

/// Writes every asset in a [`Catalog`] under a project root.
pub struct Generator {
    root: PathBuf,
    catalog: Catalog,
    rasterizer: Option<Box<dyn Rasterizer>>,
}

impl Generator {
    pub fn new(root: impl Into<PathBuf>, catalog: Catalog) -> Self {
        Self {
            root: root.into(),
            catalog,
            rasterizer: None,
        }
    }

    /// Use `rasterizer` for the raster copies; `None` keeps the markup fallback.
    pub fn with_rasterizer(mut self, rasterizer: Option<Box<dyn Rasterizer>>) -> Self {
        self.rasterizer = rasterizer;
        self
    }

    pub fn background_dir(&self) -> PathBuf {
        BACKGROUND_SUBDIR.iter().fold(self.root.clone(), |p, s| p.join(s))
    }

    pub fn figure_dir(&self) -> PathBuf {
        FIGURE_SUBDIR.iter().fold(self.root.clone(), |p, s| p.join(s))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rasterizer_name(&self) -> Option<&'static str> {
        self.rasterizer.as_deref().map(|r| r.name())
    }

    /// Generate everything, reporting each finished asset to `on_asset` as it completes.
    ///
    /// The catalog is validated before anything touches the filesystem. Any I/O or conversion
    /// failure aborts the run; files already written stay in place.
    #[tracing::instrument(skip(self, on_asset), fields(root = %self.root.display()))]
    pub fn run_with(
        &self,
        mut on_asset: impl FnMut(&AssetOutcome),
    ) -> PlacegenResult<GenerateReport> {
        self.catalog.validate()?;

        let background_dir = self.background_dir();
        let figure_dir = self.figure_dir();
        ensure_dir(&background_dir)?;
        ensure_dir(&figure_dir)?;

        let mut assets = Vec::with_capacity(self.catalog.len());

        for a in &self.catalog.backgrounds {
            let color = Rgb8::from_hex(&a.color)?;
            let svg = background_svg(color, &a.label, Canvas::BACKGROUND);
            let paths = asset_paths(&background_dir, &a.id);
            let raster = self.persist(&svg, &paths)?;

            let outcome = AssetOutcome {
                kind: AssetKind::Background,
                id: a.id.clone(),
                detail: None,
                paths,
                raster,
            };
            tracing::info!(id = %outcome.id, ?raster, "background written");
            on_asset(&outcome);
            assets.push(outcome);
        }

        for a in &self.catalog.characters {
            let color = Rgb8::from_hex(&a.color)?;
            let svg = character_svg(color, &a.name, &a.emotion, Canvas::CHARACTER);
            let paths = asset_paths(&figure_dir, &a.id);
            let raster = self.persist(&svg, &paths)?;

            let outcome = AssetOutcome {
                kind: AssetKind::Character,
                id: a.id.clone(),
                detail: Some(format!("{} - {}", a.name, a.emotion)),
                paths,
                raster,
            };
            tracing::info!(id = %outcome.id, ?raster, "character written");
            on_asset(&outcome);
            assets.push(outcome);
        }

        Ok(GenerateReport {
            background_dir,
            figure_dir,
            assets,
        })
    }

    pub fn run(&self) -> PlacegenResult<GenerateReport> {
        self.run_with(|_| {})
    }

    fn persist(&self, svg: &str, paths: &AssetPaths) -> PlacegenResult<RasterOutcome> {
        write_file(&paths.svg, svg.as_bytes())?;

        match self.rasterizer.as_deref() {
            Some(r) => {
                let png = r.rasterize(svg)?;
                write_file(&paths.raster, &png)?;
                Ok(RasterOutcome::Converted)
            }
            None => {
                write_file(&paths.raster, svg.as_bytes())?;
                Ok(RasterOutcome::Fallback)
            }
        }
    }
}

fn ensure_dir(dir: &Path) -> PlacegenResult<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> PlacegenResult<()> {
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), len = bytes.len(), "wrote file");
    Ok(())
}
