/// Framebuffer — a fixed set of independently bindable render target slots.
///
/// Each slot owns a mapping from attachment point to texture attachment.
/// Rendering passes bind a slot, draw into its attachments, and bind the
/// default target when done. Resizing the output surface propagates to
/// every attachment of every slot in one call.

use std::sync::{Arc, Mutex};

use rustc_hash::FxHashMap;

use crate::device::{AttachmentPoint, GraphicsDevice, RenderTargetId, TargetRole};
use crate::error::{Error, Result};
use crate::render_bail;
use crate::render_debug;
use crate::render_trace;
use crate::target::TextureAttachment;

/// Framebuffer owning `count()` render target slots and their attachments
///
/// All slots and all attachments share one logical size, which is 0x0
/// until the first successful `set_size`. Attachments declared while the
/// size is still zero are wired into their render targets by that first
/// `set_size` call.
pub struct Framebuffer {
    device: Arc<Mutex<dyn GraphicsDevice>>,
    slot_ids: Vec<RenderTargetId>,
    attachments: Vec<FxHashMap<AttachmentPoint, TextureAttachment>>,
    width: u32,
    height: u32,
}

impl Framebuffer {
    /// Create a framebuffer with a single slot
    ///
    /// # Errors
    ///
    /// Propagates the device's allocation failure (fatal, see `Error`).
    pub fn new(device: &Arc<Mutex<dyn GraphicsDevice>>) -> Result<Self> {
        Self::with_slot_count(device, 1)
    }

    /// Create a framebuffer with `slot_count` slots
    ///
    /// All render target objects are allocated up front; attachments are
    /// created lazily per slot.
    ///
    /// # Errors
    ///
    /// Propagates the device's allocation failure (fatal, see `Error`).
    pub fn with_slot_count(
        device: &Arc<Mutex<dyn GraphicsDevice>>,
        slot_count: usize,
    ) -> Result<Self> {
        let slot_ids = {
            let mut guard = device
                .lock()
                .map_err(|_| Error::BackendError("Graphics device lock poisoned".to_string()))?;
            guard.gen_render_targets(slot_count)?
        };

        if slot_ids.len() != slot_count {
            render_bail!(
                "nebula::Framebuffer",
                "Backend allocated {} render targets, expected {}",
                slot_ids.len(),
                slot_count
            );
        }

        render_debug!("nebula::Framebuffer", "Allocated {} render target slot(s)", slot_count);

        let attachments = (0..slot_count).map(|_| FxHashMap::default()).collect();

        Ok(Self {
            device: Arc::clone(device),
            slot_ids,
            attachments,
            width: 0,
            height: 0,
        })
    }

    /// Number of slots, fixed at construction
    pub fn count(&self) -> usize {
        self.slot_ids.len()
    }

    /// Current logical width shared by all slots (0 = not yet sized)
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Current logical height shared by all slots (0 = not yet sized)
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bind a slot as the combined read + draw target
    ///
    /// An out-of-range slot is silently ignored: higher-level passes call
    /// the bind paths every frame and their slot counts may briefly
    /// disagree with a new context during transition frames.
    pub fn bind(&self, slot: usize) {
        self.bind_role(TargetRole::Combined, slot);
    }

    /// Bind a slot as the read-only target
    ///
    /// Same out-of-range contract as `bind`.
    pub fn bind_read(&self, slot: usize) {
        self.bind_role(TargetRole::Read, slot);
    }

    /// Bind a slot as the write-only target
    ///
    /// Same out-of-range contract as `bind`.
    pub fn bind_draw(&self, slot: usize) {
        self.bind_role(TargetRole::Draw, slot);
    }

    /// Bind the default target, leaving no slot bound
    pub fn unbind(&self) {
        self.with_device(|device| {
            device.bind_render_target(TargetRole::Combined, RenderTargetId::DEFAULT);
        });
    }

    /// Propagate a new logical size to every attachment of every slot
    ///
    /// A zero dimension or an unchanged size is a valid no-op that
    /// preserves existing storage. Otherwise every attachment is resized
    /// and re-wired slot by slot, and the default combined target is
    /// rebound afterwards, leaving no slot bound.
    pub fn set_size(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 || (width == self.width && height == self.height) {
            return;
        }

        self.width = width;
        self.height = height;

        render_debug!(
            "nebula::Framebuffer",
            "Resizing {} slot(s) to {}x{}",
            self.slot_ids.len(),
            width,
            height
        );

        for slot in 0..self.slot_ids.len() {
            let slot_id = self.slot_ids[slot];
            self.with_device(|device| device.bind_render_target(TargetRole::Combined, slot_id));

            // The device lock is taken per GPU call: the attachment resize
            // below takes it internally, so it must not be held here.
            for (point, attachment) in self.attachments[slot].iter_mut() {
                attachment.set_size(width, height);
                let texture_id = attachment.texture_id();
                if let Ok(mut device) = self.device.lock() {
                    device.attach_texture(*point, texture_id);
                }
            }
        }

        self.with_device(|device| {
            device.bind_render_target(TargetRole::Combined, RenderTargetId::DEFAULT);
        });
    }

    /// Create a color attachment at `color_index` on `slot`
    ///
    /// Replaces and releases any previous attachment at that point. While
    /// the framebuffer size is still zero the attachment exists unwired;
    /// the first `set_size` wires it. An out-of-range slot is silently
    /// ignored and nothing is created.
    ///
    /// # Errors
    ///
    /// Propagates the device's allocation failure (fatal, see `Error`).
    pub fn create_color_attachment(&mut self, slot: usize, color_index: u32) -> Result<()> {
        self.create_attachment(slot, AttachmentPoint::Color(color_index))
    }

    /// Create a depth attachment on `slot`
    ///
    /// Same contract as `create_color_attachment`.
    ///
    /// # Errors
    ///
    /// Propagates the device's allocation failure (fatal, see `Error`).
    pub fn create_depth_attachment(&mut self, slot: usize) -> Result<()> {
        self.create_attachment(slot, AttachmentPoint::Depth)
    }

    /// Create a stencil attachment on `slot`
    ///
    /// Same contract as `create_color_attachment`.
    ///
    /// # Errors
    ///
    /// Propagates the device's allocation failure (fatal, see `Error`).
    pub fn create_stencil_attachment(&mut self, slot: usize) -> Result<()> {
        self.create_attachment(slot, AttachmentPoint::Stencil)
    }

    /// Create a combined depth/stencil attachment on `slot`
    ///
    /// Same contract as `create_color_attachment`.
    ///
    /// # Errors
    ///
    /// Propagates the device's allocation failure (fatal, see `Error`).
    pub fn create_depth_stencil_attachment(&mut self, slot: usize) -> Result<()> {
        self.create_attachment(slot, AttachmentPoint::DepthStencil)
    }

    /// Attachment at `point` on `slot`, if one was created
    ///
    /// Returns None for an out-of-range slot or an unoccupied point.
    pub fn attachment(&self, slot: usize, point: AttachmentPoint) -> Option<&TextureAttachment> {
        self.attachments.get(slot)?.get(&point)
    }

    fn create_attachment(&mut self, slot: usize, point: AttachmentPoint) -> Result<()> {
        if slot >= self.slot_ids.len() {
            render_trace!(
                "nebula::Framebuffer",
                "Create attachment ignored: slot {} out of range ({} slots)",
                slot,
                self.slot_ids.len()
            );
            return Ok(());
        }

        let attachment = TextureAttachment::new(&self.device, point.kind(), self.width, self.height)?;
        let texture_id = attachment.texture_id();

        // Replaces any previous occupant; dropping it releases its storage.
        self.attachments[slot].insert(point, attachment);

        if self.width > 0 && self.height > 0 {
            let slot_id = self.slot_ids[slot];
            self.with_device(|device| {
                device.bind_render_target(TargetRole::Combined, slot_id);
                device.attach_texture(point, texture_id);
                device.bind_render_target(TargetRole::Combined, RenderTargetId::DEFAULT);
            });
        }

        Ok(())
    }

    fn bind_role(&self, role: TargetRole, slot: usize) {
        let Some(&slot_id) = self.slot_ids.get(slot) else {
            render_trace!(
                "nebula::Framebuffer",
                "Bind ignored: slot {} out of range ({} slots)",
                slot,
                self.slot_ids.len()
            );
            return;
        };

        self.with_device(|device| device.bind_render_target(role, slot_id));
    }

    /// Run one GPU operation under the device lock
    ///
    /// A poisoned lock degrades to the same silent no-op the range guards
    /// use; nothing in the bind paths can propagate an error.
    fn with_device(&self, f: impl FnOnce(&mut dyn GraphicsDevice)) {
        if let Ok(mut device) = self.device.lock() {
            f(&mut *device);
        }
    }
}

impl Drop for Framebuffer {
    fn drop(&mut self) {
        // Attached textures go first, then the render target objects.
        self.attachments.clear();

        let slot_ids = std::mem::take(&mut self.slot_ids);
        self.with_device(|device| device.delete_render_targets(&slot_ids));
    }
}

#[cfg(test)]
#[path = "framebuffer_tests.rs"]
mod tests;
