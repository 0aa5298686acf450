//! Platform - Target runtime platform

use serde::{Deserialize, Serialize};

/// Target platform vocabulary
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Web,
    Mobile,
    Desktop,
    Ios,
    Android,
    Windows,
    Macos,
    Linux,
    Cloud,
}

impl Platform {
    /// Every platform, in detection order
    pub const ALL: [Platform; 9] = [
        Platform::Web,
        Platform::Mobile,
        Platform::Desktop,
        Platform::Ios,
        Platform::Android,
        Platform::Windows,
        Platform::Macos,
        Platform::Linux,
        Platform::Cloud,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Web => "web",
            Platform::Mobile => "mobile",
            Platform::Desktop => "desktop",
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Windows => "windows",
            Platform::Macos => "macos",
            Platform::Linux => "linux",
            Platform::Cloud => "cloud",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
