use std::path::Path;

use super::error::RomSplitError;
use super::io::{load, write_outputs};
use super::paths::{self, Naming, OutputPlan};
use super::size::SizeSet;
use super::transcode::{TranscodeMode, Transcoder};

/// Configuration for one conversion run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RomSplitConfig {
    pub size_set: SizeSet,
    pub mode: TranscodeMode,
    pub widen: bool,
    pub naming: Naming,
    /// Output extension; `None` uses `bin`. Leading dots are ignored.
    pub suffix: Option<String>,
    pub verbose: bool,
}

impl RomSplitConfig {
    /// The fixed behaviour of the 512 KiB-only tool: Split, widened,
    /// `<input>_low` / `<input>_high`.
    pub fn legacy() -> Self {
        Self {
            size_set: SizeSet::Legacy,
            mode: TranscodeMode::Split,
            widen: true,
            naming: Naming::Legacy,
            suffix: None,
            verbose: false,
        }
    }

    pub fn transcoder(&self) -> Transcoder {
        Transcoder::new(self.mode, self.widen)
    }
}

/// Output paths for `input` under `config`, refusing any that would
/// replace the input itself.
pub fn plan_outputs(input: &str, config: &RomSplitConfig) -> Result<OutputPlan, RomSplitError> {
    let plan = paths::derive(input, config.mode, config.naming, config.suffix.as_deref());
    let input_path = Path::new(input);
    if let Some(clash) = plan.paths().into_iter().find(|p| *p == input_path) {
        return Err(RomSplitError::OutputIsInput(clash.to_path_buf()));
    }
    Ok(plan)
}

/// Main entry point: load, validate, transcode and write one ROM dump.
/// Returns the paths that were created.
pub fn split_rom(input: &str, config: &RomSplitConfig) -> Result<OutputPlan, RomSplitError> {
    let plan = plan_outputs(input, config)?;

    let rom = load(Path::new(input), config.size_set)?;
    if config.verbose {
        eprintln!("loaded '{}' ({} bytes)", input, rom.len());
    }

    let out = config.transcoder().transcode(&rom);
    write_outputs(&plan, &out, config.verbose)?;

    Ok(plan)
}
