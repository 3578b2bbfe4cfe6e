use crate::Location;

/// Placement of a phantom relative to whoever is viewing it.
///
/// A zero offset means the phantom is not relative at all and sits at a
/// fixed location instead.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RelativeOffset {
    pub distance: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl RelativeOffset {
    pub const NONE: RelativeOffset = RelativeOffset {
        distance: 0.0,
        pitch: 0.0,
        yaw: 0.0,
    };

    pub fn new(distance: f64, pitch: f64, yaw: f64) -> Self {
        Self {
            distance,
            pitch,
            yaw,
        }
    }

    pub fn is_relative(&self) -> bool {
        self.distance != 0.0 || self.pitch != 0.0 || self.yaw != 0.0
    }

    /// Where the phantom should sit for a viewer standing at `viewer`.
    ///
    /// Rotation is adjusted first; the translation follows the adjusted
    /// facing direction.
    pub fn apply(&self, viewer: Location) -> Location {
        let mut location = viewer;
        location.pitch -= self.pitch as f32;
        location.yaw += self.yaw as f32;
        if self.distance != 0.0 {
            let offset = location.direction() * self.distance;
            location = location.translate(offset);
        }
        location
    }
}
