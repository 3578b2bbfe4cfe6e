use std::ops::{Add, Mul};

use crate::WorldId;

// Vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn distance(&self, other: &Vector) -> f64 {
        (*self + *other * -1.0).length()
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, factor: f64) -> Vector {
        Vector::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

// Location

/// A position plus rotation, in degrees. `world` is only consulted when a
/// phantom is first created; moving a phantom never changes its world.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Location {
    pub world: Option<WorldId>,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub pitch: f32,
    pub yaw: f32,
}

impl Location {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            world: None,
            x,
            y,
            z,
            pitch: 0.0,
            yaw: 0.0,
        }
    }

    pub fn with_rotation(mut self, pitch: f32, yaw: f32) -> Self {
        self.pitch = pitch;
        self.yaw = yaw;
        self
    }

    pub fn in_world(mut self, world: WorldId) -> Self {
        self.world = Some(world);
        self
    }

    /// Same coordinates and rotation, with the world stripped.
    pub fn detached(mut self) -> Self {
        self.world = None;
        self
    }

    pub fn position(&self) -> Vector {
        Vector::new(self.x, self.y, self.z)
    }

    /// Unit vector this location is facing.
    ///
    /// Yaw 0 faces +z and grows clockwise seen from above (yaw 90 faces -x);
    /// positive pitch looks down.
    pub fn direction(&self) -> Vector {
        let yaw = f64::from(self.yaw).to_radians();
        let pitch = f64::from(self.pitch).to_radians();

        let xz = pitch.cos();
        Vector::new(-xz * yaw.sin(), -pitch.sin(), xz * yaw.cos())
    }

    pub fn translate(mut self, offset: Vector) -> Self {
        self.x += offset.x;
        self.y += offset.y;
        self.z += offset.z;
        self
    }
}
