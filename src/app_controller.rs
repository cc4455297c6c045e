use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};

use crate::app_config::Config;
use crate::converters::{ConversionStats, TtafConverter};
use crate::file_utils::{FileManager, FileSystem, LocalFileSystem};

// @module: Application controller for TTAF to WebVTT conversion

/// Outcome of a directory conversion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files written successfully
    pub converted: usize,
    /// Files that failed to convert or write
    pub failed: usize,
    /// Cues dropped across all converted files
    pub skipped_cues: usize,
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: File system used for reads and writes
    fs: Arc<dyn FileSystem>,
}

impl Controller {
    // @method: Create a controller working on the local file system
    pub fn with_config(config: Config) -> Result<Self> {
        Self::with_file_system(config, Arc::new(LocalFileSystem))
    }

    /// Create a controller on an explicit file system
    pub fn with_file_system(config: Config, fs: Arc<dyn FileSystem>) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config, fs })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert one TTAF file and write the WebVTT result to `destination`
    pub fn convert_file<P1: AsRef<Path>, P2: AsRef<Path>>(&self, source: P1, destination: P2) -> Result<ConversionStats> {
        let stats = convert_one(self.fs.as_ref(), &self.config, source.as_ref(), destination.as_ref())?;
        info!("Success: {:?} ({} cues)", destination.as_ref(), stats.converted);
        Ok(stats)
    }

    /// Convert every source file directly inside `source_dir` into
    /// `dest_dir`.
    ///
    /// Files are converted on blocking workers, at most
    /// `concurrent_files` at a time. A failing file is logged and counted,
    /// it never stops the batch.
    pub async fn convert_directory<P1: AsRef<Path>, P2: AsRef<Path>>(&self, source_dir: P1, dest_dir: P2) -> Result<BatchSummary> {
        let start_time = std::time::Instant::now();
        let source_dir = source_dir.as_ref();
        let dest_dir = dest_dir.as_ref();

        if !self.fs.is_dir(source_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", source_dir));
        }

        if !self.fs.is_dir(dest_dir) {
            self.fs.create_dir(dest_dir)
                .with_context(|| format!("Failed to create output directory: {:?}", dest_dir))?;
        }

        let sources = self.fs.find_files(source_dir, &self.config.source_extension)
            .with_context(|| format!("Failed to list directory: {:?}", source_dir))?;

        let mut summary = BatchSummary::default();
        if sources.is_empty() {
            warn!("No .{} files found in directory: {:?}", self.config.source_extension, source_dir);
            return Ok(summary);
        }

        let progress = ProgressBar::new(sources.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress.set_style(style.progress_chars("█▓▒░"));
        progress.set_message("Converting files");

        let jobs: Vec<(PathBuf, PathBuf)> = sources
            .into_iter()
            .map(|source| {
                let destination = FileManager::output_path_for(&source, dest_dir, &self.config.output_extension);
                (source, destination)
            })
            .collect();

        let mut results = stream::iter(jobs)
            .map(|(source, destination)| {
                let fs = Arc::clone(&self.fs);
                let config = self.config.clone();
                async move {
                    let outcome = tokio::task::spawn_blocking({
                        let source = source.clone();
                        move || convert_one(fs.as_ref(), &config, &source, &destination)
                    })
                    .await;
                    (source, outcome)
                }
            })
            .buffer_unordered(self.config.concurrent_files);

        while let Some((source, outcome)) = results.next().await {
            match outcome {
                Ok(Ok(stats)) => {
                    summary.converted += 1;
                    summary.skipped_cues += stats.skipped;
                }
                Ok(Err(e)) => {
                    error!("Error processing file {:?}: {:#}", source, e);
                    summary.failed += 1;
                }
                Err(e) => {
                    error!("Worker for {:?} stopped unexpectedly: {}", source, e);
                    summary.failed += 1;
                }
            }
            progress.inc(1);
        }

        progress.finish_with_message("Folder processing complete");

        info!(
            "Folder processing completed in {:.2?}: {} converted, {} errors, {} cues skipped",
            start_time.elapsed(), summary.converted, summary.failed, summary.skipped_cues
        );

        Ok(summary)
    }
}

// @converts: One source file, applying header/comment from config
fn convert_one(fs: &dyn FileSystem, config: &Config, source: &Path, destination: &Path) -> Result<ConversionStats> {
    let converter = TtafConverter::from_file(source, fs)?
        .with_id_policy(config.id_policy);

    let (mut vtt_file, stats) = converter.convert_with_stats()
        .with_context(|| format!("Failed to convert {:?}", source))?;

    if !config.header_text.is_empty() {
        vtt_file.set_header_text(config.header_text.clone());
    }
    if !config.comment.is_empty() {
        vtt_file.set_comment(config.comment.clone());
    }

    vtt_file.write_to_file(destination, fs)
        .with_context(|| format!("Failed to write {:?}", destination))?;

    Ok(stats)
}
