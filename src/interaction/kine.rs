//! Kinematic variables of an interaction, with separate running
//! (provisional) and selected (locked) values

use std::fmt;
use crate::geometry::FourVector;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KineVar {
    Q2,
    W,
    X,
    Y,
}

impl KineVar {
    fn index(self) -> usize {
        match self {
            KineVar::Q2 => 0,
            KineVar::W => 1,
            KineVar::X => 2,
            KineVar::Y => 3,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Kinematics {
    running: [Option<f64>; 4],
    selected: [Option<f64>; 4],
    fs_lepton_p4: Option<FourVector>,
    had_syst_p4: Option<FourVector>,
}

impl Kinematics {
    /// Sets the running value of `var`.
    pub fn set(&mut self, var: KineVar, value: f64) {
        self.running[var.index()] = Some(value);
    }

    /// Locks the selected value of `var`.
    pub fn lock(&mut self, var: KineVar, value: f64) {
        self.selected[var.index()] = Some(value);
    }

    /// Returns the selected value if `selected` is true, otherwise
    /// the running value.
    pub fn get(&self, var: KineVar, selected: bool) -> Option<f64> {
        if selected {
            self.selected[var.index()]
        } else {
            self.running[var.index()]
        }
    }

    pub fn clear_running_values(&mut self) {
        self.running = [None; 4];
    }

    pub fn q2(&self, selected: bool) -> Option<f64> {
        self.get(KineVar::Q2, selected)
    }

    pub fn fs_lepton_p4(&self) -> Option<FourVector> {
        self.fs_lepton_p4
    }

    pub fn set_fs_lepton_p4(&mut self, p4: FourVector) {
        self.fs_lepton_p4 = Some(p4);
    }

    pub fn had_syst_p4(&self) -> Option<FourVector> {
        self.had_syst_p4
    }

    pub fn set_had_syst_p4(&mut self, p4: FourVector) {
        self.had_syst_p4 = Some(p4);
    }
}

impl fmt::Display for Kinematics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names = ["Q2", "W", "x", "y"];
        let values: Vec<String> = names.iter()
            .zip(self.selected.iter())
            .filter_map(|(n, v)| v.map(|v| format!("{} = {:.6e}", n, v)))
            .collect();
        write!(f, "{}", values.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_and_selected_are_separate() {
        let mut kine = Kinematics::default();
        kine.set(KineVar::Q2, 0.3);
        assert_eq!(kine.q2(false), Some(0.3));
        assert_eq!(kine.q2(true), None);

        kine.lock(KineVar::Q2, 0.25);
        kine.clear_running_values();
        assert_eq!(kine.q2(false), None);
        assert_eq!(kine.q2(true), Some(0.25));
        assert_eq!(kine.to_string(), "Q2 = 2.500000e-1");
    }
}
