//! DesignStyle and Layout - Visual hints read from image OCR

use serde::{Deserialize, Serialize};

/// Overall design style
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DesignStyle {
    Minimalist,
    Modern,
    Classic,
}

impl std::fmt::Display for DesignStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DesignStyle::Minimalist => write!(f, "minimalist"),
            DesignStyle::Modern => write!(f, "modern"),
            DesignStyle::Classic => write!(f, "classic"),
        }
    }
}

/// Page layout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Grid,
    Sidebar,
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layout::Grid => write!(f, "grid"),
            Layout::Sidebar => write!(f, "sidebar"),
        }
    }
}
