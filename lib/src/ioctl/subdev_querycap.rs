//! Safe wrapper for the `VIDIOC_SUBDEV_QUERYCAP` ioctl.
use bitflags::bitflags;
use log::debug;
use nix::errno::Errno;
use std::os::unix::io::AsRawFd;
use thiserror::Error;

use crate::bindings;
use crate::bindings::v4l2_subdev_capability;
use crate::KernelVersion;
use crate::SubdevLayout;

bitflags! {
    /// Flags returned by the `VIDIOC_SUBDEV_QUERYCAP` ioctl into the
    /// `capabilities` field of `v4l2_subdev_capability`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct SubdevCapabilities: u32 {
        /// The subdevice node only accepts read-only ioctls.
        const RO_SUBDEV = bindings::V4L2_SUBDEV_CAP_RO_SUBDEV;
        /// The subdevice supports routing and streams (Linux 6.3).
        const STREAMS = bindings::V4L2_SUBDEV_CAP_STREAMS;
    }
}

/// Safe variant of the `v4l2_subdev_capability` struct, to be used with
/// `subdev_querycap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubdevCapability {
    pub version: u32,
    pub capabilities: SubdevCapabilities,
}

impl SubdevCapability {
    /// Returns the release of the kernel the subdevice API comes from.
    pub fn kernel_version(&self) -> KernelVersion {
        KernelVersion::from(self.version)
    }

    /// Returns the `v4l2_subdev_format` layout spoken by the kernel that
    /// answered.
    pub fn layout(&self) -> SubdevLayout {
        if self.capabilities.contains(SubdevCapabilities::STREAMS) {
            SubdevLayout::StreamCapable
        } else {
            SubdevLayout::for_kernel(&self.kernel_version())
        }
    }
}

impl From<v4l2_subdev_capability> for SubdevCapability {
    fn from(cap: v4l2_subdev_capability) -> Self {
        SubdevCapability {
            version: cap.version,
            capabilities: SubdevCapabilities::from_bits_truncate(cap.capabilities),
        }
    }
}

#[doc(hidden)]
mod ioctl {
    use crate::bindings::v4l2_subdev_capability;
    nix::ioctl_read!(vidioc_subdev_querycap, b'V', 0, v4l2_subdev_capability);
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubdevQueryCapError {
    #[error("VIDIOC_SUBDEV_QUERYCAP is not supported by this node")]
    NotSupported,
    #[error("ioctl error: {0}")]
    IoctlError(Errno),
}

impl From<SubdevQueryCapError> for Errno {
    fn from(err: SubdevQueryCapError) -> Self {
        match err {
            SubdevQueryCapError::NotSupported => Errno::ENOTTY,
            SubdevQueryCapError::IoctlError(e) => e,
        }
    }
}

/// Safe wrapper around the `VIDIOC_SUBDEV_QUERYCAP` ioctl.
pub fn subdev_querycap<T: From<v4l2_subdev_capability>>(
    fd: &impl AsRawFd,
) -> Result<T, SubdevQueryCapError> {
    let mut cap = v4l2_subdev_capability::default();

    match unsafe { ioctl::vidioc_subdev_querycap(fd.as_raw_fd(), &mut cap) } {
        Ok(_) => Ok(T::from(cap)),
        Err(Errno::ENOTTY) => Err(SubdevQueryCapError::NotSupported),
        Err(e) => Err(SubdevQueryCapError::IoctlError(e)),
    }
}

impl SubdevLayout {
    /// Asks the subdevice behind `fd` which layout its kernel uses.
    pub fn probe_device(fd: &impl AsRawFd) -> Result<SubdevLayout, SubdevQueryCapError> {
        let cap: SubdevCapability = subdev_querycap(fd)?;
        let layout = cap.layout();
        debug!(
            "Subdevice API {} with {:?}: {:?} layout",
            cap.kernel_version(),
            cap.capabilities,
            layout
        );

        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ioctl::IntoErrno;

    #[test]
    fn request_code() {
        assert_eq!(
            nix::request_code_read!(b'V', 0, std::mem::size_of::<v4l2_subdev_capability>()) as u32,
            0x80405600
        );
    }

    #[test]
    fn capability_layout() {
        let cap = SubdevCapability::from(v4l2_subdev_capability {
            version: 0x060200,
            capabilities: bindings::V4L2_SUBDEV_CAP_RO_SUBDEV | 0x100,
            ..Default::default()
        });
        assert_eq!(cap.capabilities, SubdevCapabilities::RO_SUBDEV);
        assert_eq!(cap.kernel_version(), KernelVersion::new(6, 2, 0));
        assert_eq!(cap.layout(), SubdevLayout::Legacy);

        let cap = SubdevCapability::from(v4l2_subdev_capability {
            version: 0x060800,
            ..Default::default()
        });
        assert_eq!(cap.layout(), SubdevLayout::StreamCapable);

        // A backported streams capability is enough.
        let cap = SubdevCapability::from(v4l2_subdev_capability {
            version: 0x060100,
            capabilities: bindings::V4L2_SUBDEV_CAP_STREAMS,
            ..Default::default()
        });
        assert_eq!(cap.layout(), SubdevLayout::StreamCapable);
    }

    #[test]
    fn not_a_subdevice() {
        let null = std::fs::File::open("/dev/null").unwrap();
        assert_eq!(
            subdev_querycap::<SubdevCapability>(&null),
            Err(SubdevQueryCapError::NotSupported)
        );
        assert_eq!(
            SubdevLayout::probe_device(&null),
            Err(SubdevQueryCapError::NotSupported)
        );
        assert_eq!(
            SubdevQueryCapError::NotSupported.into_errno(),
            Errno::ENOTTY as i32
        );
    }
}
