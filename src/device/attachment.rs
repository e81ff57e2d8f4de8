/// Attachment kinds and attachment points for render targets

/// Storage kind of a texture attachment
///
/// The kind is fixed at creation and determines the pixel format the
/// backend allocates. Format selection itself is a backend concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentKind {
    /// Color image
    Color,
    /// Depth image
    Depth,
    /// Stencil image
    Stencil,
    /// Combined depth/stencil image
    DepthStencil,
}

/// Binding site on a render target
///
/// One point per color index, plus the distinguished depth, stencil and
/// combined depth/stencil points. Within one render target at most one
/// texture is wired per point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentPoint {
    /// Color attachment at the given color index (0-based)
    Color(u32),
    /// Depth attachment
    Depth,
    /// Stencil attachment
    Stencil,
    /// Combined depth/stencil attachment
    DepthStencil,
}

impl AttachmentPoint {
    /// Base value for color attachment points in the native API
    const NATIVE_COLOR_BASE: u32 = 0x8CE0;
    /// Native depth attachment point
    const NATIVE_DEPTH: u32 = 0x8D00;
    /// Native stencil attachment point
    const NATIVE_STENCIL: u32 = 0x8D20;
    /// Native combined depth/stencil attachment point
    const NATIVE_DEPTH_STENCIL: u32 = 0x821A;

    /// Native numeric constant for this attachment point
    ///
    /// Color points are contiguous starting at a fixed base, one per color
    /// index; depth, stencil and depth/stencil are fixed distinguished
    /// values. Backends use this at the GPU-call boundary; the rest of the
    /// crate only ever handles the enum.
    pub fn native(self) -> u32 {
        match self {
            AttachmentPoint::Color(index) => Self::NATIVE_COLOR_BASE + index,
            AttachmentPoint::Depth => Self::NATIVE_DEPTH,
            AttachmentPoint::Stencil => Self::NATIVE_STENCIL,
            AttachmentPoint::DepthStencil => Self::NATIVE_DEPTH_STENCIL,
        }
    }

    /// Storage kind of the texture wired at this point
    pub fn kind(self) -> AttachmentKind {
        match self {
            AttachmentPoint::Color(_) => AttachmentKind::Color,
            AttachmentPoint::Depth => AttachmentKind::Depth,
            AttachmentPoint::Stencil => AttachmentKind::Stencil,
            AttachmentPoint::DepthStencil => AttachmentKind::DepthStencil,
        }
    }
}

#[cfg(test)]
#[path = "attachment_tests.rs"]
mod tests;
