//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including per-attempt progress.
    Verbose,
    /// Show the full report and animated spinners.
    #[default]
    Normal,
    /// Show verdicts, final spinner results and hints only.
    Quiet,
}

impl OutputMode {
    /// Pick the mode for the global `--verbose`/`--quiet` flags.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows per-attempt detail.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows headers, plain messages, per-check lines
    /// and spinner animation.
    pub fn shows_progress(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
