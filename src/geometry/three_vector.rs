//! Defines a spatial 3-vector: (x, y, z)

use super::FourVector;

/// A three-vector
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThreeVector {
    x: f64,
    y: f64,
    z: f64,
}

impl ThreeVector {
    /// Creates a new three-vector with the specified components.
    pub fn new(x: f64, y: f64, z: f64) -> ThreeVector {
        ThreeVector {x, y, z}
    }

    /// Creates a three-vector of magnitude `mag`, pointing in the
    /// direction given by polar angle `acos(cos_theta)` and azimuth
    /// `phi`, measured with respect to +z.
    pub fn from_polar(mag: f64, cos_theta: f64, phi: f64) -> ThreeVector {
        let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
        let (s, c) = phi.sin_cos();
        ThreeVector::new(mag * sin_theta * c, mag * sin_theta * s, mag * cos_theta)
    }

    /// Returns the cross product of two three-vectors.
    pub fn cross(self, other: ThreeVector) -> ThreeVector {
        ThreeVector {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Returns the squared magnitude of the three-vector.
    pub fn norm_sqr(self) -> f64 {
        self * self
    }

    /// Returns the magnitude of the three-vector.
    pub fn norm(self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Returns a new three-vector which has the same direction,
    /// but unit magnitude.
    ///
    /// # Panics
    /// If `self` does not have positive definite norm.
    pub fn normalize(self) -> Self {
        let mag = self.norm();
        assert!(mag > 0.0);
        self / mag
    }

    /// The angle between `self` and `other`, in [0, pi].
    pub fn angle(self, other: ThreeVector) -> f64 {
        let denom = self.norm() * other.norm();
        if denom == 0.0 {
            0.0
        } else {
            (self * other / denom).max(-1.0).min(1.0).acos()
        }
    }

    /// Rotates `self` around the given `axis` by an angle `theta`,
    /// with positive angles corresponding to a right-handed rotation,
    /// and returns the result. The axis must be correctly normalized.
    pub fn rotate_around(self, axis: ThreeVector, theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        ThreeVector::new(
            (c + axis.x * axis.x * (1.0-c)) * self.x
                + (axis.x * axis.y * (1.0-c) - axis.z * s) * self.y
                + (axis.x * axis.z * (1.0-c) + axis.y * s) * self.z,
            (axis.y * axis.x * (1.0-c) + axis.z * s) * self.x
                + (c + axis.y * axis.y * (1.0-c)) * self.y
                + (axis.y * axis.z * (1.0-c) - axis.x * s) * self.z,
            (axis.z * axis.x * (1.0-c) - axis.y * s) * self.x
                + (axis.z * axis.y * (1.0-c) + axis.x * s) * self.y
                + (c + axis.z * axis.z * (1.0-c)) * self.z
        )
    }

    /// Rotates `self` so that what was the +z axis now points along
    /// `direction`, which need not be normalized. A null direction
    /// leaves `self` unchanged.
    pub fn rotate_z_to(self, direction: ThreeVector) -> Self {
        let zhat = ThreeVector::new(0.0, 0.0, 1.0);
        if direction.norm_sqr() == 0.0 {
            return self;
        }
        let n = direction.normalize();
        let axis = zhat.cross(n);
        if axis.norm() < crate::constants::A_SMALL_NUM {
            // parallel or antiparallel to z
            if n.z > 0.0 {
                self
            } else {
                self.rotate_around(ThreeVector::new(1.0, 0.0, 0.0), std::f64::consts::PI)
            }
        } else {
            self.rotate_around(axis.normalize(), n.z.max(-1.0).min(1.0).acos())
        }
    }
}

impl std::ops::Index<i32> for ThreeVector {
    type Output = f64;
    fn index(&self, index: i32) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index out of bounds: a three vector has 3 components but the index is {}", index)
        }
    }
}

impl std::convert::From<FourVector> for ThreeVector {
    fn from(fv: FourVector) -> Self {
        ThreeVector {
            x: fv[1],
            y: fv[2],
            z: fv[3],
        }
    }
}

impl std::fmt::Display for ThreeVector {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:.6e} {:.6e} {:.6e}", self.x, self.y, self.z)
    }
}

impl std::ops::Add for ThreeVector {
    type Output = ThreeVector;
    fn add(self, other: ThreeVector) -> ThreeVector {
        ThreeVector {x: self.x + other.x, y: self.y + other.y, z: self.z + other.z}
    }
}

impl std::ops::Sub for ThreeVector {
    type Output = ThreeVector;
    fn sub(self, other: ThreeVector) -> ThreeVector {
        ThreeVector {x: self.x - other.x, y: self.y - other.y, z: self.z - other.z}
    }
}

impl std::ops::Mul for ThreeVector {
    type Output = f64;
    fn mul(self, other: ThreeVector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl std::ops::Mul<f64> for ThreeVector {
    type Output = ThreeVector;
    fn mul(self, other: f64) -> ThreeVector {
        ThreeVector {x: self.x * other, y: self.y * other, z: self.z * other}
    }
}

impl std::ops::Mul<ThreeVector> for f64 {
    type Output = ThreeVector;
    fn mul(self, other: ThreeVector) -> ThreeVector {
        other * self
    }
}

impl std::ops::Neg for ThreeVector {
    type Output = ThreeVector;
    fn neg(self) -> ThreeVector {
        -1.0 * self
    }
}

impl std::ops::Div<f64> for ThreeVector {
    type Output = ThreeVector;
    fn div(self, other: f64) -> ThreeVector {
        ThreeVector {x: self.x / other, y: self.y / other, z: self.z / other}
    }
}

impl std::convert::From<[f64; 3]> for ThreeVector {
    fn from(item: [f64; 3]) -> Self {
        ThreeVector::new(item[0], item[1], item[2])
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts;
    use rand::prelude::*;
    use rand_xoshiro::*;
    use super::*;

    #[test]
    fn rotation() {
        let v = ThreeVector::new(1.0, 0.0, 0.0); // along x
        let v = v.rotate_around(ThreeVector::new(0.0, 0.0, 1.0), consts::FRAC_PI_2); // along y
        let v = v.rotate_around(ThreeVector::new(1.0, 0.0, 0.0), consts::FRAC_PI_2); // along z
        println!("v = {:?}", v);
        let target = ThreeVector::new(0.0, 0.0, 1.0);
        assert!((v - target).norm() < 1.0e-10);
    }

    #[test]
    fn z_axis_follows_direction() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        for _i in 0..100 {
            let dir = ThreeVector::new(rng.gen::<f64>() - 0.5, rng.gen::<f64>() - 0.5, rng.gen::<f64>() - 0.5);
            let v = ThreeVector::from_polar(2.0, 1.0, 0.0).rotate_z_to(dir);
            assert!((v - 2.0 * dir.normalize()).norm() < 1.0e-10);

            // polar angle with respect to the new axis is preserved
            let w = ThreeVector::from_polar(1.0, 0.3, 1.1).rotate_z_to(dir);
            assert!((w.angle(dir).cos() - 0.3).abs() < 1.0e-10);
        }

        let down = ThreeVector::new(0.0, 0.0, -3.0);
        let v = ThreeVector::new(0.0, 0.0, 1.0).rotate_z_to(down);
        assert!((v - ThreeVector::new(0.0, 0.0, -1.0)).norm() < 1.0e-10);
    }

    #[test]
    fn polar_construction() {
        let v = ThreeVector::from_polar(1.5, -0.5, 0.25 * consts::PI);
        assert!((v.norm() - 1.5).abs() < 1.0e-12);
        assert!((v.angle(ThreeVector::new(0.0, 0.0, 1.0)).cos() + 0.5).abs() < 1.0e-12);
        assert!((v[1].atan2(v[0]) - 0.25 * consts::PI).abs() < 1.0e-12);
    }
}
