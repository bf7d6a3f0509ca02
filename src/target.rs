// Target application routing for the external hotkey layer
// Classifies the foreground window title so the caller knows where the
// transliteration will be typed.

use serde::{Deserialize, Serialize};

/// The global shortcut that opens the input box
pub const HOTKEY: &str = "Control+K";

/// Application that had focus when the hotkey fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetApp {
    Word,
    Excel,
    PowerPoint,
    Other,
}

impl TargetApp {
    /// Classify a window title by substring
    ///
    /// Checked in the order Word, Excel, PowerPoint; the first match wins.
    pub fn from_window_title(title: &str) -> Self {
        if title.contains("Word") {
            TargetApp::Word
        } else if title.contains("Excel") {
            TargetApp::Excel
        } else if title.contains("PowerPoint") {
            TargetApp::PowerPoint
        } else {
            TargetApp::Other
        }
    }

    /// Whether the target is one of the supported Office applications
    pub fn is_office(&self) -> bool {
        !matches!(self, TargetApp::Other)
    }
}

impl std::fmt::Display for TargetApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetApp::Word => write!(f, "Word"),
            TargetApp::Excel => write!(f, "Excel"),
            TargetApp::PowerPoint => write!(f, "PowerPoint"),
            TargetApp::Other => write!(f, "other"),
        }
    }
}

#[cfg(test)]
#[path = "target_test.rs"]
mod tests;
