// File: crates/graph-core/src/export.rs
// Summary: Write the rendered PNG and hand a temp copy to the platform clipboard.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{ChartError, ClipboardError};

/// Name of the transient file handed to the clipboard writer.
pub const CLIPBOARD_TEMP_FILE: &str = "temp_clipboard_image.png";

/// Output filename for a user-supplied name; `.png` is always appended.
pub fn png_filename(name: &str) -> String {
    format!("{name}.png")
}

/// Places an image file's content on the system clipboard.
pub trait ClipboardWriter {
    fn id(&self) -> &'static str;
    fn copy_image_file(&self, path: &Path) -> Result<(), ClipboardError>;
}

/// macOS: `osascript` reads the file as a TIFF picture into the clipboard.
/// The script's own exit status is not checked; only a failure to launch it is an error.
pub struct OsascriptClipboard;

impl OsascriptClipboard {
    pub fn script(path: &Path) -> String {
        format!("set the clipboard to (read (POSIX file \"{}\") as TIFF picture)", path.display())
    }
}

impl ClipboardWriter for OsascriptClipboard {
    fn id(&self) -> &'static str { "osascript" }

    fn copy_image_file(&self, path: &Path) -> Result<(), ClipboardError> {
        let abs = std::fs::canonicalize(path)?;
        let status = Command::new("osascript")
            .arg("-e")
            .arg(Self::script(&abs))
            .status()
            .map_err(|source| ClipboardError::Spawn { program: "osascript", source })?;
        tracing::debug!(?status, "osascript finished");
        Ok(())
    }
}

/// Fallback for platforms without a clipboard implementation.
pub struct UnsupportedClipboard;

impl ClipboardWriter for UnsupportedClipboard {
    fn id(&self) -> &'static str { "unsupported" }

    fn copy_image_file(&self, _path: &Path) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unsupported(std::env::consts::OS))
    }
}

/// The clipboard writer for the platform this binary was built for.
pub fn default_clipboard() -> Box<dyn ClipboardWriter> {
    #[cfg(target_os = "macos")]
    {
        Box::new(OsascriptClipboard)
    }
    #[cfg(not(target_os = "macos"))]
    {
        Box::new(UnsupportedClipboard)
    }
}

/// Outcome of one export.
#[derive(Debug)]
pub struct ExportReport {
    pub saved: PathBuf,
    /// `Err` when the best-effort clipboard step failed; the saved file is unaffected.
    pub clipboard: Result<(), ClipboardError>,
}

impl ExportReport {
    pub fn copied(&self) -> bool { self.clipboard.is_ok() }
}

pub struct Exporter {
    clipboard: Box<dyn ClipboardWriter>,
    temp_dir: PathBuf,
}

impl Exporter {
    /// Temp file goes in the current working directory.
    pub fn new(clipboard: Box<dyn ClipboardWriter>) -> Self {
        Self { clipboard, temp_dir: PathBuf::from(".") }
    }

    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = dir.into();
        self
    }

    pub fn temp_path(&self) -> PathBuf {
        self.temp_dir.join(CLIPBOARD_TEMP_FILE)
    }

    /// Save `png` to `output`, then try the clipboard. Only the save can fail the export.
    pub fn export(&self, png: &[u8], output: impl AsRef<Path>) -> Result<ExportReport, ChartError> {
        let output = output.as_ref();
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output, png)?;
        tracing::info!(path = %output.display(), bytes = png.len(), "saved chart");

        let clipboard = if self.is_temp_path(output) {
            // The output already sits where the temp copy would go; removing it would lose the chart.
            tracing::debug!(path = %output.display(), "output doubles as the clipboard temp file");
            self.clipboard.copy_image_file(output)
        } else {
            self.copy_to_clipboard(png)
        };
        if let Err(e) = &clipboard {
            tracing::warn!(writer = self.clipboard.id(), error = %e, "clipboard copy failed");
        }
        Ok(ExportReport { saved: output.to_path_buf(), clipboard })
    }

    fn is_temp_path(&self, output: &Path) -> bool {
        match (std::fs::canonicalize(output), std::fs::canonicalize(&self.temp_dir)) {
            (Ok(out), Ok(dir)) => out == dir.join(CLIPBOARD_TEMP_FILE),
            _ => false,
        }
    }

    fn copy_to_clipboard(&self, png: &[u8]) -> Result<(), ClipboardError> {
        let temp = self.temp_path();
        std::fs::write(&temp, png)?;
        let result = self.clipboard.copy_image_file(&temp);
        if let Err(e) = std::fs::remove_file(&temp) {
            tracing::warn!(path = %temp.display(), error = %e, "could not remove clipboard temp file");
        }
        result
    }
}
