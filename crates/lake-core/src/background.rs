use glam::Vec2;

/// Placement of an image scaled uniformly to cover a viewport, centered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverFit {
    pub scale: f32,
    /// Top-left corner in viewport px; negative on the overflowing axis.
    pub origin: Vec2,
    /// Scaled image size in viewport px.
    pub size: Vec2,
}

/// Compute the cover fit of `image` into `viewport`.
///
/// Returns `None` for an empty image, which would otherwise give an
/// infinite scale.
pub fn cover_fit(viewport: Vec2, image: Vec2) -> Option<CoverFit> {
    if image.x <= 0.0 || image.y <= 0.0 {
        return None;
    }
    let scale = (viewport.x / image.x).max(viewport.y / image.y);
    let size = image * scale;
    let origin = (viewport - size) * 0.5;
    Some(CoverFit {
        scale,
        origin,
        size,
    })
}

/// The single background sprite: its natural size plus the placement for
/// the current viewport.
#[derive(Clone, Copy, Debug)]
pub struct Background {
    image_size: Vec2,
    fit: Option<CoverFit>,
}

impl Background {
    pub fn new(image_size: Vec2, viewport: Vec2) -> Self {
        let mut bg = Self {
            image_size,
            fit: None,
        };
        bg.resize(viewport);
        bg
    }

    /// Recompute placement; called on load and on every viewport resize.
    pub fn resize(&mut self, viewport: Vec2) {
        self.fit = cover_fit(viewport, self.image_size);
        match &self.fit {
            Some(f) => log::debug!(
                "[bg] viewport {:.0}x{:.0} scale {:.3} origin ({:.1},{:.1})",
                viewport.x,
                viewport.y,
                f.scale,
                f.origin.x,
                f.origin.y
            ),
            None => log::debug!("[bg] empty image, nothing to place"),
        }
    }

    pub fn image_size(&self) -> Vec2 {
        self.image_size
    }

    pub fn fit(&self) -> Option<&CoverFit> {
        self.fit.as_ref()
    }
}
