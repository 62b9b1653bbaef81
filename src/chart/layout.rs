use serde::{Deserialize, Serialize};
use std::fmt;

/// How the series of one day are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartLayout {
    /// One column per day, authors piled on each other
    #[default]
    Stacked,
    /// Authors side by side within each day's slot
    Grouped,
}

impl ChartLayout {
    pub fn from_grouped(grouped: bool) -> Self {
        if grouped {
            ChartLayout::Grouped
        } else {
            ChartLayout::Stacked
        }
    }

    pub fn is_grouped(self) -> bool {
        self == ChartLayout::Grouped
    }

    pub fn toggle(self) -> Self {
        match self {
            ChartLayout::Stacked => ChartLayout::Grouped,
            ChartLayout::Grouped => ChartLayout::Stacked,
        }
    }
}

impl fmt::Display for ChartLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartLayout::Stacked => f.write_str("stacked"),
            ChartLayout::Grouped => f.write_str("grouped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        let layout = ChartLayout::default();
        assert_eq!(layout, ChartLayout::Stacked);
        assert_eq!(layout.toggle(), ChartLayout::Grouped);
        assert_eq!(layout.toggle().toggle(), ChartLayout::Stacked);
    }
}
