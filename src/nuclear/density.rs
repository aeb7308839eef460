//! Nucleon number density of a nucleus

use rand::prelude::*;
use crate::interaction::Target;

/// Woods-Saxon (two-parameter Fermi) density profile,
/// `rho(r) = rho0 / (1 + exp((r - R) / a))`, normalized to the
/// mass number of the nucleus.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NuclearDensity {
    radius: f64,
    diffuseness: f64,
    rho0: f64,
    a: i32,
}

impl NuclearDensity {
    pub fn new(target: &Target) -> Self {
        let a = target.a().max(1);
        let af = a as f64;
        let radius = 1.12 * af.cbrt() - 0.86 / af.cbrt();
        let diffuseness = 0.54;
        let mut density = NuclearDensity { radius, diffuseness, rho0: 1.0, a };
        density.rho0 = af / density.integrate_shape();
        density
    }

    /// Integral of 4 pi r^2 f(r), where f is the unnormalized profile,
    /// by Simpson's rule
    fn integrate_shape(&self) -> f64 {
        let n = 2000;
        let h = self.max_radius() / (n as f64);
        let f = |r: f64| 4.0 * std::f64::consts::PI * r * r * self.shape(r);
        let interior: f64 = (1..n)
            .map(|i| {
                let w = if i % 2 == 1 { 4.0 } else { 2.0 };
                w * f((i as f64) * h)
            })
            .sum();
        h * (f(0.0) + interior + f(self.max_radius())) / 3.0
    }

    fn shape(&self, r: f64) -> f64 {
        1.0 / (1.0 + ((r - self.radius) / self.diffuseness).exp())
    }

    /// Beyond this radius the density is negligible
    pub fn max_radius(&self) -> f64 {
        self.radius + 10.0 * self.diffuseness
    }

    /// Total nucleon density at radius `r` (fm), units of fm^-3
    pub fn at(&self, r: f64) -> f64 {
        if self.a == 1 {
            // a free nucleon has no spatial structure here
            return 0.0;
        }
        self.rho0 * self.shape(r)
    }

    /// Samples the distance of a nucleon from the centre of the nucleus,
    /// distributed as r^2 rho(r).
    pub fn sample_radius<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.a == 1 {
            return 0.0;
        }

        let r_max = self.max_radius();
        let pdf = |r: f64| r * r * self.at(r);

        // Approximate maximum of the pdf:
        let max = (0..=200)
            .map(|i| pdf(r_max * (i as f64) / 200.0))
            .fold(0.0f64, |a: f64, b: f64| a.max(b));
        let max = 1.2 * max;

        loop {
            let r = r_max * rng.gen::<f64>();
            let u = rng.gen::<f64>();
            if u * max <= pdf(r) {
                break r;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand_xoshiro::*;
    use super::*;
    use crate::pdg;

    #[test]
    fn normalized_to_mass_number() {
        for &(a, z) in &[(12, 6), (40, 18), (208, 82)] {
            let density = NuclearDensity::new(&Target::new(pdg::ion_pdg(a, z)));
            let total = density.integrate_shape() * density.rho0;
            println!("A = {}, rho0 = {:.4} fm^-3, integral = {:.4}", a, density.rho0, total);
            assert!((total - a as f64).abs() < 1.0e-6 * a as f64);
            assert!(density.at(0.0) > 0.12 && density.at(0.0) < 0.22);
        }
    }

    #[test]
    fn sampled_radii() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        let density = NuclearDensity::new(&Target::new(pdg::ion_pdg(40, 18)));
        let n = 20_000;
        let mean_sqr: f64 = (0..n)
            .map(|_| density.sample_radius(&mut rng).powi(2))
            .sum::<f64>() / (n as f64);
        // rms radius of Ar40 is ~3.4 fm
        println!("<r^2>^(1/2) = {:.3} fm", mean_sqr.sqrt());
        assert!((mean_sqr.sqrt() - 3.4).abs() < 0.3);
    }
}
