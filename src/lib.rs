/*!
# Nebula Render Core

Off-screen render target management for the Nebula real-time visuals
pipeline.

This crate owns the lifetime, binding state and lazy (re)allocation of GPU
framebuffers and their texture attachments. Rendering passes only ever bind
a framebuffer slot, draw, and bind the default target when done; everything
else (attachment creation, resize propagation, storage release) happens
here.

## Architecture

- **GraphicsDevice**: trait for the graphics-API binding surface (render
  target allocation/binding, texture storage, attachment wiring). Backend
  implementations map it onto the native API; tests use an in-crate mock.
- **Framebuffer**: owns N render target slots and their attachments,
  mediates binding and resize propagation.
- **TextureAttachment**: owns one GPU-resident 2D image surface; resizable
  in place with stable handle identity.

All types are driven from a single rendering thread holding an active GPU
context; the bound target is process-wide state that bind calls overwrite.
*/

// Internal modules
mod error;
pub mod log;
pub mod device;
pub mod target;

// Main nebula namespace module
pub mod nebula {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, set_logger};
        // Note: render_* macros are exported at the crate root
    }

    // Device sub-module with the binding-surface types
    pub mod device {
        pub use crate::device::*;
    }

    // Target sub-module with framebuffer management
    pub mod target {
        pub use crate::target::*;
    }
}
