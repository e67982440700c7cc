//! Document processing options.

use crate::detect::DetectorOptions;
use crate::distribute::{PriorityHint, DEFAULT_COMPANY_MATCH_THRESHOLD};
use crate::format::FormatterOptions;

/// Options for document processing.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// Project detection options
    pub detector: DetectorOptions,

    /// Bullet formatting options
    pub formatter: FormatterOptions,

    /// Match score a priority hint needs to be honored (percent)
    pub company_match_threshold: u8,

    /// Optional company priority hint
    pub priority: Option<PriorityHint>,
}

impl ProcessOptions {
    /// Create new process options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the detector options.
    pub fn with_detector(mut self, detector: DetectorOptions) -> Self {
        self.detector = detector;
        self
    }

    /// Set the formatter options.
    pub fn with_formatter(mut self, formatter: FormatterOptions) -> Self {
        self.formatter = formatter;
        self
    }

    /// Set the company match threshold.
    pub fn with_company_match_threshold(mut self, threshold: u8) -> Self {
        self.company_match_threshold = threshold;
        self
    }

    /// Set a company priority hint.
    pub fn with_priority(mut self, hint: PriorityHint) -> Self {
        self.priority = Some(hint);
        self
    }
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            detector: DetectorOptions::default(),
            formatter: FormatterOptions::default(),
            company_match_threshold: DEFAULT_COMPANY_MATCH_THRESHOLD,
            priority: None,
        }
    }
}
