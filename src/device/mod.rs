/// Graphics device module - the graphics-API binding surface

// Module declarations
pub mod attachment;
pub mod graphics_device;

// Re-export everything
pub use attachment::*;
pub use graphics_device::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
