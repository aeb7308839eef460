//! Defines a relativistic energy-momentum 4-vector: (E, px, py, pz)

use super::ThreeVector;

/// A four-vector with metric (+,-,-,-)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FourVector(f64, f64, f64, f64);

impl FourVector {
    /// Creates a new four-vector with the specified components.
    pub fn new(e: f64, px: f64, py: f64, pz: f64) -> Self {
        FourVector {0: e, 1: px, 2: py, 3: pz}
    }

    /// Creates a four-vector from an energy and a three-momentum.
    pub fn from_parts(e: f64, p: ThreeVector) -> Self {
        FourVector {0: e, 1: p[0], 2: p[1], 3: p[2]}
    }

    /// Creates the four-momentum of a particle of mass `m`
    /// with three-momentum `p`, i.e. a four-vector on the mass shell.
    pub fn on_shell(p: ThreeVector, m: f64) -> Self {
        let e = (p.norm_sqr() + m * m).sqrt();
        Self::from_parts(e, p)
    }

    /// Returns the squared norm of the four-vector
    pub fn norm_sqr(self) -> f64 {
        self * self
    }

    /// The invariant mass. Spacelike (off-shell) vectors return
    /// a negative value, `-sqrt(-p^2)`.
    pub fn mass(self) -> f64 {
        let m2 = self.norm_sqr();
        if m2 < 0.0 {
            -(-m2).sqrt()
        } else {
            m2.sqrt()
        }
    }

    /// The time-like component
    pub fn energy(self) -> f64 {
        self.0
    }

    /// Magnitude of the spatial part
    pub fn p(self) -> f64 {
        ThreeVector::from(self).norm()
    }

    /// Returns the four-velocity `p / m` of a timelike four-vector,
    /// suitable for use with `boost_by`.
    pub fn four_velocity(self) -> Self {
        self / self.mass()
    }

    /// Returns the equivalent four vector in a new inertial frame,
    /// which is travelling with four-velocity `u` with respect to
    /// the current frame.
    ///
    /// `u` is expected to be normalized (i.e. gamma v / c)
    pub fn boost_by(self, u: FourVector) -> Self {
        let gamma = u[0];
        let v = ThreeVector::from(u);
        if v.norm_sqr() == 0.0 {
            return self;
        }
        let beta = (1.0 - 1.0 / (gamma * gamma)).sqrt();
        let n = v.normalize();
        let a = self[0];
        let z = ThreeVector::from(self);
        FourVector {
            0: gamma * (a - beta * (n * z)),
            1: z[0] + (gamma - 1.0) * (n * z) * n[0] - gamma * beta * a * n[0],
            2: z[1] + (gamma - 1.0) * (n * z) * n[1] - gamma * beta * a * n[1],
            3: z[2] + (gamma - 1.0) * (n * z) * n[2] - gamma * beta * a * n[2]
        }
    }

    /// Reverses the spatial components of the four-vector
    pub fn reverse(self) -> Self {
        FourVector {0: self.0, 1: -self.1, 2: -self.2, 3: -self.3}
    }
}

// Index into four vector
impl std::ops::Index<i32> for FourVector {
    type Output = f64;
    fn index(&self, index: i32) -> &Self::Output {
        match index {
            0 => &self.0,
            1 => &self.1,
            2 => &self.2,
            3 => &self.3,
            _ => panic!("index out of bounds: a four vector has 4 components but the index is {}", index)
        }
    }
}

impl std::ops::Add for FourVector {
    type Output = FourVector;
    fn add(self, other: FourVector) -> FourVector {
        FourVector {
            0: self.0 + other.0,
            1: self.1 + other.1,
            2: self.2 + other.2,
            3: self.3 + other.3
        }
    }
}

impl std::ops::Sub for FourVector {
    type Output = FourVector;
    fn sub(self, other: FourVector) -> FourVector {
        FourVector {
            0: self.0 - other.0,
            1: self.1 - other.1,
            2: self.2 - other.2,
            3: self.3 - other.3
        }
    }
}

// Minkowski product
impl std::ops::Mul for FourVector {
    type Output = f64;
    fn mul(self, other: FourVector) -> f64 {
        self.0 * other.0 - self.1 * other.1 - self.2 * other.2 - self.3 * other.3
    }
}

impl std::ops::Mul<f64> for FourVector {
    type Output = FourVector;
    fn mul(self, other: f64) -> FourVector {
        FourVector {
            0: self.0 * other,
            1: self.1 * other,
            2: self.2 * other,
            3: self.3 * other
        }
    }
}

impl std::ops::Mul<FourVector> for f64 {
    type Output = FourVector;
    fn mul(self, other: FourVector) -> FourVector {
        other * self
    }
}

impl std::ops::Neg for FourVector {
    type Output = FourVector;
    fn neg(self) -> FourVector {
        -1.0 * self
    }
}

impl std::ops::Div<f64> for FourVector {
    type Output = FourVector;
    fn div(self, other: f64) -> FourVector {
        FourVector {
            0: self.0 / other,
            1: self.1 / other,
            2: self.2 / other,
            3: self.3 / other
        }
    }
}

impl std::fmt::Display for FourVector {
    fn fmt(&self, f : &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:.6e} {:.6e} {:.6e} {:.6e}", self.0, self.1, self.2, self.3)
    }
}

impl std::convert::From<[f64; 4]> for FourVector {
    fn from(item: [f64; 4]) -> Self {
        FourVector::new(item[0], item[1], item[2], item[3])
    }
}
