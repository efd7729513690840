use std::path::{Path, PathBuf};

use tagcloud_core::{build_tag_cloud, CloudConfig, CloudError, TagCloud, WordLimit};
use tagcloud_logging::cloud_info;

use crate::persist::{AtomicFileWriter, PersistError};
use crate::render::{render_to_string, PageHeader};
use crate::source::{read_source, ReadError};
use crate::summary::build_summary;

#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Cloud(#[from] CloudError),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
    #[error("summary serialization failed: {0}")]
    Summary(#[from] serde_json::Error),
    #[error("output path {0:?} has no file name")]
    OutputName(PathBuf),
}

/// Everything needed to turn one text file into one tag cloud page.
#[derive(Debug, Clone)]
pub struct TagCloudJob {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Name shown in the page title; usually the input path as typed.
    pub source_name: String,
    pub limit: WordLimit,
    pub config: CloudConfig,
    pub summary: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobReport {
    pub cloud: TagCloud,
    pub output_path: PathBuf,
    pub summary_path: Option<PathBuf>,
    pub encoding_label: String,
}

impl TagCloudJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, limit: WordLimit) -> Self {
        let input = input.into();
        Self {
            source_name: input.display().to_string(),
            input,
            output: output.into(),
            limit,
            config: CloudConfig::default(),
            summary: None,
        }
    }

    /// Reads the source, builds the cloud and persists the page.
    ///
    /// Both documents are rendered before anything is written. The summary is
    /// persisted before the page, so a failed summary write leaves no page.
    pub fn run(&self) -> Result<JobReport, JobError> {
        cloud_info!(
            "generating top {} cloud from {:?} into {:?}",
            self.limit.get(),
            self.input,
            self.output
        );
        let source = read_source(&self.input)?;
        let cloud = build_tag_cloud(&source.lines, self.limit, &self.config)?;

        let header = PageHeader {
            limit: self.limit.get(),
            source_name: &self.source_name,
            stylesheets: &self.config.stylesheets,
        };
        let html = render_to_string(&header, &cloud);
        let summary = match &self.summary {
            Some(path) => {
                let json = build_summary(&self.source_name, &cloud);
                Some((path, serde_json::to_string_pretty(&json)?))
            }
            None => None,
        };

        // The page goes last, so it only appears once its companion is on disk.
        let summary_path = match summary {
            Some((path, text)) => Some(write_atomically(path, &text)?),
            None => None,
        };
        let output_path = write_atomically(&self.output, &html)?;

        cloud_info!(
            "wrote {} words ({} distinct in source) to {:?}",
            cloud.entries.len(),
            cloud.distinct_words,
            output_path
        );
        Ok(JobReport {
            cloud,
            output_path,
            summary_path,
            encoding_label: source.encoding_label,
        })
    }
}

fn write_atomically(path: &Path, content: &str) -> Result<PathBuf, JobError> {
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| JobError::OutputName(path.to_path_buf()))?;
    let writer = AtomicFileWriter::for_target(path);
    Ok(writer.write(filename, content)?)
}
