//! Command-line interface for batch structure mining over level files

use crate::algorithm::growth::RegionGrower;
use crate::algorithm::matching::{CombinationMatcher, MatchConfig};
use crate::algorithm::selection::{SeedSampler, restrict_combinations, select_subset};
use crate::io::configuration::{
    DEFAULT_EXPANSION, DEFAULT_FILLER, DEFAULT_OUTPUT_DIR, DEFAULT_SEED, DEFAULT_SEED_COUNT,
    LEVEL_EXTENSION, LOG_FILE_NAME,
};
use crate::io::error::{Result, WithPath, invalid_parameter};
use crate::io::level::load_level;
use crate::io::progress::ProgressManager;
use crate::io::report::write_report;
use crate::spatial::TileClassifier;
use crate::structure::{Structure, StructureIdAllocator};
use clap::Parser;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "levelchunks")]
#[command(
    author,
    version,
    about = "Mine combinable level chunks from 2D platformer maps"
)]
/// Command-line arguments for the chunk mining tool
pub struct Cli {
    /// Level text file or directory of level files
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Seeds sampled per level
    #[arg(short = 'n', long, default_value_t = DEFAULT_SEED_COUNT)]
    pub count: usize,

    /// Expansion parameter D (each structure gets 4 * D growth steps)
    #[arg(short = 'd', long, default_value_t = DEFAULT_EXPANSION)]
    pub expansion: usize,

    /// Random seed for reproducible sampling
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Directory receiving the report and the log
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Keep only this fraction of the structures, weighted by connectors and enemies
    #[arg(long, value_name = "FRACTION")]
    pub subset: Option<f64>,

    /// Evaluate connector pairs on the calling thread only
    #[arg(long)]
    pub serial: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Matching parameters implied by the flags
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            parallel: !self.serial,
            ..MatchConfig::default()
        }
    }
}

/// Totals of a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Levels processed
    pub levels: usize,
    /// Structures written to the report
    pub structures: usize,
    /// Combinable pairs found before any subset selection
    pub pairs: usize,
    /// Report files written
    pub written: Vec<PathBuf>,
}

/// Install a file logger writing into `dir`
///
/// A logger that is already installed is left in place.
///
/// # Errors
///
/// Returns an error if the directory or the log file cannot be created
pub fn init_logging(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_path(dir, "create directory")?;
    let path = dir.join(LOG_FILE_NAME);
    let file = File::create(&path).with_path(&path, "create log")?;
    let _ = WriteLogger::init(LevelFilter::Info, Config::default(), file);
    Ok(path)
}

/// Orchestrates extraction, matching and reporting over a batch of levels
pub struct FileProcessor {
    cli: Cli,
    classifier: TileClassifier,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            classifier: TileClassifier::default(),
            progress_manager,
        }
    }

    /// Process levels according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the target is unusable, a level fails to load or
    /// extract, subset selection fails, or the report cannot be written
    pub fn process(&mut self) -> Result<RunSummary> {
        let files = self.collect_files()?;

        if files.is_empty() {
            info!("No level files found in {}", self.cli.target.display());
            return Ok(RunSummary::default());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut sampler = SeedSampler::new(self.cli.seed);
        let mut ids = StructureIdAllocator::new();
        let mut structures = Vec::new();

        for file in &files {
            let extracted = self.process_file(file, &mut sampler, &mut ids)?;
            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_level(extracted.len());
            }
            structures.extend(extracted);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.start_phase("match", &format!("{} structures", structures.len()));
        }
        let pairs = CombinationMatcher::new(self.cli.match_config())
            .compute_combinations(&mut structures);

        if let Some(fraction) = self.cli.subset {
            if let Some(ref pm) = self.progress_manager {
                pm.start_phase("select", &format!("fraction {fraction}"));
            }
            let mut selected = select_subset(&structures, fraction, &mut sampler)?;
            let removed = restrict_combinations(&mut selected);
            info!("Dropped {removed} combinable entries leading outside the subset");
            structures = selected;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.start_phase("report", &self.cli.output.display().to_string());
        }
        let written = write_report(&structures, &self.cli.output)?;

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        info!(
            "Wrote {} structures from {} levels to {}",
            structures.len(),
            files.len(),
            self.cli.output.display()
        );

        Ok(RunSummary {
            levels: files.len(),
            structures: structures.len(),
            pairs,
            written,
        })
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if Self::is_level_file(target) {
                Ok(vec![target.clone()])
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &format!("level files must have the .{LEVEL_EXTENSION} extension"),
                ))
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in fs::read_dir(target).with_path(target, "read directory")? {
                let path = entry.with_path(target, "read directory")?.path();
                if path.is_file() && Self::is_level_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a level file or a directory",
            ))
        }
    }

    fn is_level_file(path: &Path) -> bool {
        path.extension().and_then(|s| s.to_str()) == Some(LEVEL_EXTENSION)
    }

    fn process_file(
        &self,
        path: &Path,
        sampler: &mut SeedSampler,
        ids: &mut StructureIdAllocator,
    ) -> Result<Vec<Structure>> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_level(path);
        }

        let map = load_level(path, DEFAULT_FILLER)?;
        let seeds = sampler.sample(&map, self.cli.count);
        let structures = RegionGrower::new(&map, &self.classifier, self.cli.expansion)
            .extract(&seeds, ids)?;

        info!(
            "{}: {} seeds produced {} structures",
            path.display(),
            seeds.len(),
            structures.len()
        );
        Ok(structures)
    }
}
