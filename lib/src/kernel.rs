//! Linux kernel release numbers.
//!
//! Kernel releases gate both the entries of the ABI tables and the layout of
//! `struct v4l2_subdev_format`. The running release can be obtained from
//! `uname(2)`, or from the `KERNEL_VERSION()`-encoded `version` field that
//! capability ioctls return.
use std::fmt;
use std::str::FromStr;

use nix::errno::Errno;
use thiserror::Error;

/// A Linux release, compared on `major.minor.patch`.
///
/// The patch level saturates at 255, like the kernel's own `KERNEL_VERSION()`
/// encoding does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KernelVersion {
    major: u16,
    minor: u8,
    patch: u8,
}

impl KernelVersion {
    /// Oldest release the untagged ABI table entries are taken from.
    pub const BASELINE: KernelVersion = KernelVersion::new(6, 1, 0);

    pub const fn new(major: u16, minor: u8, patch: u8) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    pub fn major(&self) -> u16 {
        self.major
    }

    pub fn minor(&self) -> u8 {
        self.minor
    }

    pub fn patch(&self) -> u8 {
        self.patch
    }

    /// Returns the release of the kernel we are running on.
    pub fn current() -> Result<Self, KernelVersionError> {
        let uts = nix::sys::utsname::uname().map_err(KernelVersionError::Uname)?;
        let release = uts.release().to_string_lossy();

        release.parse()
    }

    /// Encodes this release the way `KERNEL_VERSION()` does.
    pub fn to_version_code(self) -> u32 {
        (u32::from(self.major) << 16) | (u32::from(self.minor) << 8) | u32::from(self.patch)
    }
}

impl fmt::Display for KernelVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Decodes a `KERNEL_VERSION()` code, as found in `v4l2_capability::version`.
///
/// # Examples
///
/// ```
/// # use v4l2_abi::KernelVersion;
/// assert_eq!(KernelVersion::from(0x060a03), KernelVersion::new(6, 10, 3));
/// ```
impl From<u32> for KernelVersion {
    fn from(code: u32) -> Self {
        Self {
            major: (code >> 16) as u16,
            minor: ((code >> 8) & 0xff) as u8,
            patch: (code & 0xff) as u8,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KernelVersionError {
    #[error("uname failed: {0}")]
    Uname(Errno),
    #[error("malformed kernel release {0:?}")]
    Malformed(String),
}

/// Parses a release string such as `6.10.0-rc3+` or `5.15.0-91-generic`.
///
/// Anything after the numeric `major.minor[.patch]` prefix is ignored, and a
/// missing patch level reads as 0.
impl FromStr for KernelVersion {
    type Err = KernelVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || KernelVersionError::Malformed(s.to_owned());

        let numeric_end = s
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(s.len());
        let mut parts = s[..numeric_end].split('.').filter(|p| !p.is_empty());

        let major = parts
            .next()
            .and_then(|p| p.parse::<u16>().ok())
            .ok_or_else(malformed)?;
        let minor = parts
            .next()
            .and_then(|p| p.parse::<u8>().ok())
            .ok_or_else(malformed)?;
        let patch = match parts.next() {
            Some(p) => p
                .parse::<u32>()
                .map(|p| p.min(u32::from(u8::MAX)) as u8)
                .map_err(|_| malformed())?,
            None => 0,
        };

        Ok(Self::new(major, minor, patch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_releases() {
        assert_eq!(
            "6.10.0-rc3+".parse::<KernelVersion>(),
            Ok(KernelVersion::new(6, 10, 0))
        );
        assert_eq!(
            "5.15.0-91-generic".parse::<KernelVersion>(),
            Ok(KernelVersion::new(5, 15, 0))
        );
        assert_eq!(
            "6.3".parse::<KernelVersion>(),
            Ok(KernelVersion::new(6, 3, 0))
        );
        // Long-lived stable branches go past 255.
        assert_eq!(
            "4.19.325".parse::<KernelVersion>(),
            Ok(KernelVersion::new(4, 19, 255))
        );
    }

    #[test]
    fn parse_malformed() {
        assert!(matches!(
            "linux".parse::<KernelVersion>(),
            Err(KernelVersionError::Malformed(_))
        ));
        assert!(matches!(
            "6".parse::<KernelVersion>(),
            Err(KernelVersionError::Malformed(_))
        ));
        assert!(matches!(
            "6.300.1".parse::<KernelVersion>(),
            Err(KernelVersionError::Malformed(_))
        ));
    }

    #[test]
    fn ordering() {
        assert!(KernelVersion::new(6, 2, 16) < KernelVersion::new(6, 3, 0));
        assert!(KernelVersion::new(6, 10, 0) > KernelVersion::new(6, 9, 12));
        assert!(KernelVersion::new(7, 0, 0) > KernelVersion::new(6, 13, 0));
    }

    #[test]
    fn version_code() {
        let v = KernelVersion::new(6, 13, 2);
        assert_eq!(v.to_version_code(), 0x060d02);
        assert_eq!(KernelVersion::from(v.to_version_code()), v);
        assert_eq!(v.to_string(), "6.13.2");
    }
}
