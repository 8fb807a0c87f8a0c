use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::constants::{configuration, publish, runtime, PORTABLE};


/// One publish target: where the output goes and how the tool packages it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Output directory name under the build root
    pub name: String,

    /// Runtime identifier passed with `-r`, omitted when absent
    #[serde(default)]
    pub runtime: Option<String>,

    /// Build configuration passed with `-c`
    pub configuration: String,

    #[serde(default)]
    pub single_file: bool,

    #[serde(default)]
    pub trimmed: bool,

    #[serde(default)]
    pub self_contained: bool,
}

impl TargetConfig {
    /// A self-contained, single-file, trimmed release build for one runtime
    pub fn platform(runtime_id: &str) -> Self {
        Self {
            name: runtime_id.to_string(),
            runtime: Some(runtime_id.to_string()),
            configuration: configuration::RELEASE.to_string(),
            single_file: true,
            trimmed: true,
            self_contained: true,
        }
    }

    /// The framework-dependent build that runs wherever the runtime is installed
    pub fn portable() -> Self {
        Self {
            name: PORTABLE.to_string(),
            runtime: None,
            configuration: configuration::RELEASE_PORTABLE.to_string(),
            single_file: false,
            trimmed: false,
            self_contained: false,
        }
    }

    pub fn output_dir(&self, build_root: &Path) -> PathBuf {
        build_root.join(&self.name)
    }

    /// Arguments following the tool name, in the order the tool receives them
    pub fn publish_args(&self, project: &Path, build_root: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            publish::SUBCOMMAND.into(),
            project.as_os_str().to_owned(),
            "-o".into(),
            self.output_dir(build_root).into_os_string(),
        ];

        if let Some(runtime_id) = &self.runtime {
            args.push("-r".into());
            args.push(runtime_id.into());
        }
        if self.single_file {
            args.push("-p:PublishSingleFile=true".into());
        }
        if self.trimmed {
            args.push("-p:PublishTrimmed=true".into());
        }

        args.push("-c".into());
        args.push(self.configuration.as_str().into());
        args.push("--sc".into());
        args.push(self.self_contained.to_string().into());

        args
    }
}

/// The four targets in the order they are published
pub fn default_targets() -> Vec<TargetConfig> {
    vec![
        TargetConfig::platform(runtime::WIN_X64),
        TargetConfig::platform(runtime::LINUX_X64),
        TargetConfig::platform(runtime::OSX_X64),
        TargetConfig::portable(),
    ]
}
