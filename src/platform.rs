use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Windows,
    MacOs,
    Linux,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X64,
    X86,
    Arm64,
}

/// Target triple used to pick the release archive and the binary layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub os: Os,
    pub arch: Arch,
}

impl Platform {
    pub fn new(os: Os, arch: Arch) -> Self {
        Self { os, arch }
    }

    pub fn current() -> Self {
        let os = if cfg!(target_os = "windows") {
            Os::Windows
        } else if cfg!(target_os = "macos") {
            Os::MacOs
        } else {
            Os::Linux
        };

        let arch = if cfg!(target_arch = "aarch64") {
            Arch::Arm64
        } else if cfg!(target_pointer_width = "64") {
            Arch::X64
        } else {
            Arch::X86
        };

        Self { os, arch }
    }

    pub fn os_name(&self) -> &'static str {
        match self.os {
            Os::Windows => "win",
            Os::MacOs => "darwin",
            Os::Linux => "linux",
        }
    }

    pub fn arch_name(&self) -> &'static str {
        match self.arch {
            Arch::X64 => "x64",
            Arch::X86 => "x86",
            Arch::Arm64 => "arm64",
        }
    }

    pub fn archive_ext(&self) -> &'static str {
        match self.os {
            Os::Windows => "zip",
            Os::MacOs | Os::Linux => "tar.gz",
        }
    }

    /// `node-v20.11.0-linux-x64.tar.gz`
    pub fn archive_name(&self, version: &str) -> String {
        format!(
            "node-v{}-{}-{}.{}",
            version,
            self.os_name(),
            self.arch_name(),
            self.archive_ext()
        )
    }

    pub fn download_url(&self, dist_url: &str, version: &str) -> String {
        format!("{}/v{}/{}", dist_url, version, self.archive_name(version))
    }

    /// Windows archives keep `node.exe` at the root, the others under `bin/`.
    pub fn bin_dir(&self, version_dir: &Path) -> PathBuf {
        match self.os {
            Os::Windows => version_dir.to_path_buf(),
            Os::MacOs | Os::Linux => version_dir.join("bin"),
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}
