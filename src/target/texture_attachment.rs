/// Texture attachment — one GPU-resident 2D image surface of a framebuffer.

use std::sync::{Arc, Mutex};

use crate::device::{AttachmentKind, GraphicsDevice, TextureId};
use crate::error::{Error, Result};

/// A single 2D image surface owned by a framebuffer slot
///
/// The kind is fixed at creation; the size is mutable and zero is a valid
/// "unallocated" size. The texture handle stays valid across resizes, so a
/// render target that has the handle wired in keeps seeing the current
/// storage. GPU storage is released on drop.
///
/// Attachments are exclusively owned by their slot's attachment mapping;
/// the framebuffer hands out shared references only.
pub struct TextureAttachment {
    device: Arc<Mutex<dyn GraphicsDevice>>,
    kind: AttachmentKind,
    texture_id: TextureId,
    width: u32,
    height: u32,
}

impl TextureAttachment {
    /// Create an attachment of the given kind and size
    ///
    /// A zero width or height creates the texture handle without pixel
    /// storage; a later `set_size` allocates it.
    ///
    /// # Errors
    ///
    /// Propagates the device's allocation failure (fatal, see `Error`).
    pub fn new(
        device: &Arc<Mutex<dyn GraphicsDevice>>,
        kind: AttachmentKind,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        let texture_id = {
            let mut guard = device
                .lock()
                .map_err(|_| Error::BackendError("Graphics device lock poisoned".to_string()))?;
            guard.create_texture(kind, width, height)?
        };

        Ok(Self {
            device: Arc::clone(device),
            kind,
            texture_id,
            width,
            height,
        })
    }

    /// Storage kind of this attachment
    pub fn kind(&self) -> AttachmentKind {
        self.kind
    }

    /// Current width in pixels (0 = not yet sized)
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Current height in pixels (0 = not yet sized)
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The texture handle, for wiring into a render target
    pub fn texture_id(&self) -> TextureId {
        self.texture_id
    }

    /// Reallocate storage at a new size
    ///
    /// The handle identity is preserved; only the pixel storage is
    /// replaced. An unchanged size performs no GPU work.
    pub fn set_size(&mut self, width: u32, height: u32) {
        if width == self.width && height == self.height {
            return;
        }

        self.width = width;
        self.height = height;

        if let Ok(mut device) = self.device.lock() {
            device.resize_texture(self.texture_id, self.kind, width, height);
        }
    }
}

impl Drop for TextureAttachment {
    fn drop(&mut self) {
        if let Ok(mut device) = self.device.lock() {
            device.delete_texture(self.texture_id);
        }
    }
}

#[cfg(test)]
#[path = "texture_attachment_tests.rs"]
mod tests;
