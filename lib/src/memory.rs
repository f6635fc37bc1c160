//! The kinds of backing memory (`MMAP`, `USERPTR`, `OVERLAY`, `DMABUF`) a V4L2
//! buffer can use.
//!
//! V4L2 allows to use either memory that is provided by the device itself
//! (MMAP) or memory imported via user allocation (USERPTR) or the dma-buf
//! subsystem (DMABUF). OVERLAY is only used by the long-deprecated overlay
//! interface but is still part of the ABI, so it decodes.
use std::fmt;

use crate::bindings;
use crate::codec::abi_enum;

abi_enum! {
    /// Equivalent of `enum v4l2_memory`.
    pub enum MemoryType: u32 => Memory {
        Mmap = bindings::V4L2_MEMORY_MMAP;
        UserPtr = bindings::V4L2_MEMORY_USERPTR;
        Overlay = bindings::V4L2_MEMORY_OVERLAY;
        DmaBuf = bindings::V4L2_MEMORY_DMABUF;
    }
}

impl MemoryType {
    /// Whether buffers of this type are allocated by the driver.
    pub fn is_self_backed(&self) -> bool {
        matches!(self, MemoryType::Mmap)
    }
}

impl fmt::Display for MemoryType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            MemoryType::Mmap => "mmap",
            MemoryType::UserPtr => "userptr",
            MemoryType::Overlay => "overlay",
            MemoryType::DmaBuf => "dmabuf",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::tests::check_table;
    use crate::{AbiEnum, Concept, DecodeError};

    #[test]
    fn memory_types() {
        check_table::<MemoryType>();
        assert_eq!(MemoryType::decode(4), Ok(MemoryType::DmaBuf));
        // 0 is not a memory type, the kernel leaves it unset.
        assert_eq!(
            MemoryType::decode(0),
            Err(DecodeError::UnknownVariant {
                concept: Concept::Memory,
                raw_value: 0
            })
        );
        assert!(MemoryType::Mmap.is_self_backed());
        assert!(!MemoryType::DmaBuf.is_self_backed());
        assert_eq!(MemoryType::UserPtr.to_string(), "userptr");
    }
}
