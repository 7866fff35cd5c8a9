use std::fmt;

/// What the display shows for the current match.
///
/// Long presses step through the modes in declaration order and wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    #[default]
    Score,
    RunRate,
    Overs,
    MatchStatus,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 4] = [
        DisplayMode::Score,
        DisplayMode::RunRate,
        DisplayMode::Overs,
        DisplayMode::MatchStatus,
    ];

    /// The mode after this one, wrapping from the last back to `Score`
    pub fn next(self) -> Self {
        let position = Self::ALL.iter().position(|mode| *mode == self).unwrap_or(0);
        Self::ALL[(position + 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Score => "score",
            DisplayMode::RunRate => "run rate",
            DisplayMode::Overs => "overs",
            DisplayMode::MatchStatus => "match status",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
