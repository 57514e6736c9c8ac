//! Build target value object - the platform a build was produced for

use serde::{Deserialize, Serialize};

/// Platform identifier supplied by the build system on completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BuildTarget {
    /// Apple iOS (Xcode export produces an .ipa)
    #[value(name = "ios")]
    #[serde(rename = "ios")]
    Ios,
    /// Android (the build output path is the .apk/.aab itself)
    Android,
    /// macOS standalone player
    #[value(name = "standalone-osx")]
    #[serde(rename = "standalone-osx")]
    StandaloneOsx,
    /// Windows 64-bit standalone player
    #[value(name = "standalone-windows64")]
    #[serde(rename = "standalone-windows64")]
    StandaloneWindows64,
    /// Linux 64-bit standalone player
    #[value(name = "standalone-linux64")]
    #[serde(rename = "standalone-linux64")]
    StandaloneLinux64,
    /// WebGL player
    #[value(name = "webgl")]
    #[serde(rename = "webgl")]
    WebGl,
}

impl BuildTarget {
    /// Stable identifier used on the command line and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildTarget::Ios => "ios",
            BuildTarget::Android => "android",
            BuildTarget::StandaloneOsx => "standalone-osx",
            BuildTarget::StandaloneWindows64 => "standalone-windows64",
            BuildTarget::StandaloneLinux64 => "standalone-linux64",
            BuildTarget::WebGl => "webgl",
        }
    }
}

impl std::fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
