use std::fs::File;
use std::io::{BufWriter, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::context::ParameterData;
use crate::error::CodegenError;
use crate::layout::WrapperLayout;
use crate::renderers::all_renderers;

/// One open output file.
#[derive(Debug)]
struct OutputStream {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl OutputStream {
    /// Create or truncate the file at `path`.
    fn create(path: PathBuf) -> Result<Self, CodegenError> {
        let file = File::create(&path).map_err(|source| CodegenError::Open {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "opened output file");
        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    /// Replace the whole file contents with `content`.
    fn rewrite(&mut self, content: &str) -> Result<(), CodegenError> {
        self.rewrite_inner(content)
            .map_err(|source| CodegenError::Write {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), bytes = content.len(), "wrote output file");
        Ok(())
    }

    fn rewrite_inner(&mut self, content: &str) -> std::io::Result<()> {
        self.writer.flush()?;
        let file = self.writer.get_mut();
        file.set_len(0)?;
        file.seek(SeekFrom::Start(0))?;
        self.writer.write_all(content.as_bytes())?;
        self.writer.flush()
    }

    fn flush(&mut self) -> Result<(), CodegenError> {
        self.writer.flush().map_err(|source| CodegenError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Writes `parameter_wrapper.h` and `parameter_wrapper.cpp` into a
/// destination directory.
///
/// Both files are created (or truncated) by [`WrapperEmitter::new`] and
/// stay open until the emitter is dropped or [`WrapperEmitter::close`]d.
#[derive(Debug)]
pub struct WrapperEmitter {
    /// Directory of parameter definitions. Recorded, never read.
    source_dir: PathBuf,
    dest_dir: PathBuf,
    layout: WrapperLayout,
    /// One stream per renderer, in [`all_renderers`] order
    streams: Vec<OutputStream>,
}

impl WrapperEmitter {
    /// Open both output files in `dest_dir` using the default layout.
    ///
    /// Fails if `dest_dir` does not exist or is not writable. `source_dir`
    /// is not checked.
    pub fn new(
        source_dir: impl Into<PathBuf>,
        dest_dir: impl Into<PathBuf>,
    ) -> Result<Self, CodegenError> {
        Self::with_layout(source_dir, dest_dir, WrapperLayout::default())
    }

    /// Open both output files in `dest_dir` using the given layout.
    ///
    /// The layout's file names are checked before anything is opened: each
    /// must be a plain file name and the two must differ.
    pub fn with_layout(
        source_dir: impl Into<PathBuf>,
        dest_dir: impl Into<PathBuf>,
        layout: WrapperLayout,
    ) -> Result<Self, CodegenError> {
        layout.check_file_names()?;

        let source_dir = source_dir.into();
        let dest_dir = dest_dir.into();

        let mut streams = Vec::new();
        for renderer in all_renderers() {
            streams.push(OutputStream::create(
                dest_dir.join(renderer.file_name(&layout)),
            )?);
        }

        Ok(Self {
            source_dir,
            dest_dir,
            layout,
            streams,
        })
    }

    /// The source directory given at construction. It is kept for callers
    /// but never read.
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// The directory both files are written to.
    pub fn dest_dir(&self) -> &Path {
        &self.dest_dir
    }

    /// Paths of the header and implementation files, in write order.
    pub fn output_paths(&self) -> Vec<&Path> {
        self.streams.iter().map(|s| s.path.as_path()).collect()
    }

    /// Write the header skeleton, then the implementation skeleton.
    ///
    /// `jsons` is never opened or parsed, so any value is accepted. Each
    /// call replaces the previous contents of both files.
    pub fn generate(&mut self, jsons: &str) -> Result<(), CodegenError> {
        trace!(jsons, "JSON parameter input is not read");
        let data = ParameterData::new();

        for (renderer, stream) in all_renderers().into_iter().zip(&mut self.streams) {
            let content = renderer.render(&self.layout, &data);
            stream.rewrite(&content)?;
        }

        Ok(())
    }

    /// Flush and close both files, reporting any flush error.
    ///
    /// Dropping the emitter also closes them, but discards errors.
    pub fn close(mut self) -> Result<(), CodegenError> {
        for stream in &mut self.streams {
            stream.flush()?;
        }
        Ok(())
    }
}
