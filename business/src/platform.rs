use std::fmt;

/// Operating system the studio runs on. Drives link resolution and the share branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Ios,
    Android,
    Desktop,
    Web,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "ios") {
            Self::Ios
        } else if cfg!(target_os = "android") {
            Self::Android
        } else if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    /// Android's share sheet cannot take an in-memory image, so the
    /// artifact has to be written to a file path first.
    pub fn requires_file_share(self) -> bool {
        matches!(self, Self::Android)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Desktop => "desktop",
            Self::Web => "web",
        };
        f.write_str(name)
    }
}
