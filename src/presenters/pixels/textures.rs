use egui::TexturesDelta;

/// Texture uploads produced by egui but not yet applied on the GPU.
///
/// egui uploads the whole font atlas once and only sends patches afterwards,
/// so a delta from a frame that was never rendered must be carried over to the
/// next one that is.
#[derive(Debug, Default)]
pub struct PendingTextures {
    delta: TexturesDelta,
}

impl PendingTextures {
    /// Holds `delta` until the next rendered frame.
    pub fn defer(&mut self, delta: TexturesDelta) {
        self.delta.append(delta);
    }

    /// Everything deferred so far followed by `latest`, in upload order.
    #[must_use]
    pub fn take_with(&mut self, latest: TexturesDelta) -> TexturesDelta {
        self.delta.append(latest);
        std::mem::take(&mut self.delta)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.delta.is_empty()
    }
}
