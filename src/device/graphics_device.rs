/// GraphicsDevice trait - the graphics-API binding surface
///
/// Everything the render target core asks of the GPU goes through this
/// trait: render target object allocation and binding, texture storage
/// allocation, and attachment wiring. Calls are issued immediately in the
/// calling thread; completion ordering is the driver's job.

use crate::device::{AttachmentKind, AttachmentPoint};
use crate::error::Result;

/// Opaque handle to a GPU render target object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderTargetId(pub u32);

impl RenderTargetId {
    /// The window-system default target (no off-screen target bound)
    pub const DEFAULT: RenderTargetId = RenderTargetId(0);
}

/// Opaque handle to a GPU 2D image
///
/// Handle identity is stable across storage reallocations: resizing a
/// texture replaces its pixel storage but keeps the same id valid for
/// attachment wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Which binding point a bind call overwrites
///
/// The bound target is process-wide mutable state owned by the graphics
/// context. Binding `Combined` overwrites both the read and draw targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetRole {
    /// Combined read + draw target
    Combined,
    /// Read-only target
    Read,
    /// Write-only target
    Draw,
}

/// Graphics device trait
///
/// Implemented by backend-specific devices. The crate ships only the test
/// mock; a real backend maps these calls onto the native API one to one.
///
/// All calls are synchronous command submissions from a single rendering
/// thread holding an active context.
pub trait GraphicsDevice: Send + Sync {
    /// Allocate `count` render target objects
    ///
    /// # Errors
    ///
    /// Allocation failure is a resource-exhaustion condition the caller
    /// cannot locally fix; the error is propagated so the application can
    /// abort or tear down the context.
    fn gen_render_targets(&mut self, count: usize) -> Result<Vec<RenderTargetId>>;

    /// Release render target objects
    fn delete_render_targets(&mut self, ids: &[RenderTargetId]);

    /// Bind `id` as the target for `role`, overwriting the previous binding
    fn bind_render_target(&mut self, role: TargetRole, id: RenderTargetId);

    /// Allocate a 2D image of the given kind and size
    ///
    /// A zero width or height allocates the handle without pixel storage.
    ///
    /// # Errors
    ///
    /// Fatal on resource exhaustion, same as `gen_render_targets`.
    fn create_texture(&mut self, kind: AttachmentKind, width: u32, height: u32) -> Result<TextureId>;

    /// Reallocate a texture's storage at a new size
    ///
    /// The handle stays valid; only the pixel storage is replaced.
    fn resize_texture(&mut self, id: TextureId, kind: AttachmentKind, width: u32, height: u32);

    /// Release a texture and its storage
    fn delete_texture(&mut self, id: TextureId);

    /// Wire `texture` into the currently bound draw/combined target at `point`
    ///
    /// Must be issued while the owning render target is bound as the
    /// combined or draw target.
    fn attach_texture(&mut self, point: AttachmentPoint, texture: TextureId);
}
