use std::{
    io::Write as _,
    process::{Command, Stdio},
};

use anyhow::Context as _;

use crate::{
    foundation::error::{PlacegenError, PlacegenResult},
    raster::{Rasterizer, check_png},
};

/// librsvg's command-line converter.
pub const RSVG_CONVERT: &str = "rsvg-convert";

/// Shells out to a host converter: SVG on stdin, PNG on stdout.
#[derive(Clone, Debug)]
pub struct ExternalRasterizer {
    program: String,
}

impl Default for ExternalRasterizer {
    fn default() -> Self {
        Self {
            program: RSVG_CONVERT.to_string(),
        }
    }
}

impl ExternalRasterizer {
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn is_available() -> bool {
        Self::default().probe()
    }

    /// `true` when the program runs and reports its version.
    pub fn probe(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl Rasterizer for ExternalRasterizer {
    fn name(&self) -> &'static str {
        RSVG_CONVERT
    }

    #[tracing::instrument(skip(self, svg), fields(program = %self.program, svg_len = svg.len()))]
    fn rasterize(&self, svg: &str) -> PlacegenResult<Vec<u8>> {
        let mut child = Command::new(&self.program)
            .args(["--format", "png"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("spawn '{}'", self.program))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| PlacegenError::raster("converter stdin was not captured"))?;

        // Feed stdin from a second thread so a full stdout pipe can't stall the write.
        let output = std::thread::scope(|s| {
            let writer = s.spawn(move || stdin.write_all(svg.as_bytes()));
            let output = child.wait_with_output();
            let written = writer
                .join()
                .map_err(|_| PlacegenError::raster("converter stdin writer panicked"))?;
            let output = output.with_context(|| format!("wait for '{}'", self.program))?;

            // A converter that bails early breaks the pipe; its exit status says more.
            if !output.status.success() {
                return Err(exit_error(&self.program, &output));
            }
            written.with_context(|| format!("write svg to '{}'", self.program))?;
            Ok::<_, PlacegenError>(output)
        })?;

        check_png(output.stdout, &self.program)
    }
}

fn exit_error(program: &str, output: &std::process::Output) -> PlacegenError {
    let stderr = String::from_utf8_lossy(&output.stderr);
    PlacegenError::raster(format!(
        "'{program}' exited with {}: {}",
        output.status,
        stderr.trim()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_probes_false() {
        let r = ExternalRasterizer::with_program("placegen-no-such-converter-xyz");
        assert!(!r.probe());
    }

    #[test]
    fn missing_program_fails_to_rasterize() {
        let r = ExternalRasterizer::with_program("placegen-no-such-converter-xyz");
        let err = r.rasterize("<svg/>").unwrap_err();
        assert!(err.to_string().contains("spawn"), "{err}");
    }

    #[cfg(unix)]
    #[test]
    fn early_exit_reports_status_not_broken_pipe() {
        // `false` never reads stdin and exits 1; a large document outgrows the pipe buffer.
        let r = ExternalRasterizer::with_program("false");
        let svg = "x".repeat(1 << 20);
        let err = r.rasterize(&svg).unwrap_err();
        assert!(err.to_string().contains("raster error:"), "{err}");
        assert!(err.to_string().contains("exited with"), "{err}");
    }

    #[test]
    fn converts_when_host_has_rsvg_convert() {
        if !ExternalRasterizer::is_available() {
            eprintln!("skipping: {RSVG_CONVERT} not on PATH");
            return;
        }
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"><rect width="4" height="4" fill="red"/></svg>"#;
        let png = ExternalRasterizer::default().rasterize(svg).unwrap();
        assert!(png.starts_with(crate::raster::PNG_MAGIC));
    }
}
