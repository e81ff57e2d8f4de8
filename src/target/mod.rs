//! Off-screen render target management module
//!
//! Provides framebuffer and attachment lifetime management.
//! A framebuffer owns a fixed set of independently bindable render
//! target slots; rendering passes bind a slot, draw, and bind the
//! default target when done.

mod framebuffer;
mod texture_attachment;

pub use framebuffer::Framebuffer;
pub use texture_attachment::TextureAttachment;
