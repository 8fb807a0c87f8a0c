/// Defaults for the publish invocation itself
pub mod publish {
    /// External toolchain executable
    pub const DEFAULT_TOOL: &str = "dotnet";

    /// Subcommand passed to the tool before anything else
    pub const SUBCOMMAND: &str = "publish";

    /// Project file handed to every invocation
    pub const DEFAULT_PROJECT: &str = "UpdaterAvalonia/UpdaterAvalonia.csproj";

    /// Root directory that holds one output directory per target
    pub const DEFAULT_BUILD_ROOT: &str = "build";

    /// Environment variable that overrides the tool
    pub const TOOL_ENV: &str = "MULTIPUB_TOOL";
}

/// Runtime identifiers for the platform builds
pub mod runtime {
    /// Windows x64
    pub const WIN_X64: &str = "win-x64";

    /// Linux x64
    pub const LINUX_X64: &str = "linux-x64";

    /// macOS x64
    pub const OSX_X64: &str = "osx-x64";
}

/// Build configuration names
pub mod configuration {
    pub const RELEASE: &str = "release";
    pub const RELEASE_PORTABLE: &str = "releaseportable";
}

/// Name of the framework-dependent target
pub const PORTABLE: &str = "portable";
