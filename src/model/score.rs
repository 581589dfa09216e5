use serde::{Deserialize, Serialize};

/// Name for a hole result relative to par.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreDisplay {
    Condor,
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogey,
    QuadrupleBogeyOrWorse,
}

impl ScoreDisplay {
    #[must_use]
    pub fn from_i32(i: i32) -> Self {
        match i {
            i32::MIN..=-4 => ScoreDisplay::Condor,
            -3 => ScoreDisplay::Albatross,
            -2 => ScoreDisplay::Eagle,
            -1 => ScoreDisplay::Birdie,
            0 => ScoreDisplay::Par,
            1 => ScoreDisplay::Bogey,
            2 => ScoreDisplay::DoubleBogey,
            3 => ScoreDisplay::TripleBogey,
            _ => ScoreDisplay::QuadrupleBogeyOrWorse,
        }
    }

    /// CSS class used by the leaderboard.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            ScoreDisplay::Condor => "condor",
            ScoreDisplay::Albatross => "albatross",
            ScoreDisplay::Eagle => "eagle",
            ScoreDisplay::Birdie => "birdie",
            ScoreDisplay::Par => "par",
            ScoreDisplay::Bogey => "bogey",
            ScoreDisplay::DoubleBogey => "double-bogey",
            ScoreDisplay::TripleBogey => "triple-bogey",
            ScoreDisplay::QuadrupleBogeyOrWorse => "quadruple-bogey",
        }
    }
}

impl From<i32> for ScoreDisplay {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

/// Formats a to-par value the way scorecards print it: `E`, `+2`, `-1`.
#[must_use]
pub fn format_to_par(to_par: i32) -> String {
    match to_par {
        0 => "E".to_string(),
        n if n > 0 => format!("+{n}"),
        n => n.to_string(),
    }
}
