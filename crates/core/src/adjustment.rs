use std::fmt::{Display, Formatter};

/// Character in a command template that is replaced by the current value.
pub const PLACEHOLDER: char = '%';

/// A single named adjustment read from the adjustments file.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustmentSpec {
    pub name: String,
    pub low: f64,
    pub high: f64,
    pub step: f64,
    pub initial: f64,
    pub command_template: String,
}

impl AdjustmentSpec {
    pub fn has_placeholder(&self) -> bool {
        self.command_template.contains(PLACEHOLDER)
    }

    /// Whether the bounds and step describe a usable range.
    ///
    /// Nothing refuses to run an adjustment that fails this check, it is only
    /// used for warnings.
    pub fn is_well_formed(&self) -> bool {
        self.low <= self.high && self.step > 0.0
    }
}

impl Display for AdjustmentSpec {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{} [{} .. {} by {}, initially {}]: {}",
            self.name, self.low, self.high, self.step, self.initial, self.command_template
        )
    }
}
