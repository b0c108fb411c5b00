//! Values are floating point physical inputs and never enter the exact
//! Casimir computations.

use serde::{Deserialize, Serialize};

/// Standard Model parameters. Masses are in GeV.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmConstants {
    /// GeV^-2 to nb conversion factor.
    #[serde(default = "SmConstants::default_gev2nb")]
    pub gev2nb: f64,
    /// Weak mixing angle, sin^2(theta_W).
    #[serde(default = "SmConstants::default_sw2")]
    pub sw2: f64,
    /// Higgs vacuum expectation value.
    #[serde(default = "SmConstants::default_v")]
    pub v: f64,
    /// Electromagnetic fine structure constant at the Z pole.
    #[serde(default = "SmConstants::default_alpha")]
    pub alpha: f64,
    /// Higgs boson mass.
    #[serde(default = "SmConstants::default_mh")]
    pub mh: f64,
    /// Fermi constant in GeV^-2.
    #[serde(default = "SmConstants::default_gf")]
    pub gf: f64,
    /// W boson mass.
    #[serde(default = "SmConstants::default_mw")]
    pub mw: f64,
    /// Z boson mass.
    #[serde(default = "SmConstants::default_mz")]
    pub mz: f64,
    /// Top quark mass.
    #[serde(default = "SmConstants::default_mt")]
    pub mt: f64,
}

impl SmConstants {
    const fn default_gev2nb() -> f64 {
        389379.0
    }

    const fn default_sw2() -> f64 {
        0.234
    }

    const fn default_v() -> f64 {
        246.0
    }

    fn default_alpha() -> f64 {
        1.0 / 127.9
    }

    const fn default_mh() -> f64 {
        125.09
    }

    const fn default_gf() -> f64 {
        1.1166e-5
    }

    const fn default_mw() -> f64 {
        80.385
    }

    const fn default_mz() -> f64 {
        91.188
    }

    const fn default_mt() -> f64 {
        173.34
    }

    /// GeV^-2 to fb conversion factor.
    pub fn gev2fb(&self) -> f64 {
        self.gev2nb * 1e6
    }

    /// sin(theta_W).
    pub fn sw(&self) -> f64 {
        self.sw2.sqrt()
    }

    /// cos^2(theta_W).
    pub fn cw2(&self) -> f64 {
        1.0 - self.sw2
    }

    /// cos(theta_W).
    pub fn cw(&self) -> f64 {
        self.cw2().sqrt()
    }
}

impl Default for SmConstants {
    fn default() -> Self {
        Self {
            gev2nb: Self::default_gev2nb(),
            sw2: Self::default_sw2(),
            v: Self::default_v(),
            alpha: Self::default_alpha(),
            mh: Self::default_mh(),
            gf: Self::default_gf(),
            mw: Self::default_mw(),
            mz: Self::default_mz(),
            mt: Self::default_mt(),
        }
    }
}

/// Benchmark parameters for a heavy scalar resonance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BsmConstants {
    /// Heavy scalar mass in GeV.
    #[serde(default = "BsmConstants::default_m_heavy")]
    pub m_heavy: f64,
    /// Strong coupling evaluated near half the heavy mass.
    #[serde(default = "BsmConstants::default_alphas")]
    pub alphas: f64,
    /// Gluon fusion K-factor.
    #[serde(default = "BsmConstants::default_k_factor")]
    pub k_factor: f64,
}

impl BsmConstants {
    const fn default_m_heavy() -> f64 {
        750.0
    }

    const fn default_alphas() -> f64 {
        0.1
    }

    const fn default_k_factor() -> f64 {
        2.0
    }
}

impl Default for BsmConstants {
    fn default() -> Self {
        Self {
            m_heavy: Self::default_m_heavy(),
            alphas: Self::default_alphas(),
            k_factor: Self::default_k_factor(),
        }
    }
}

/// Full parameter table.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Constants {
    /// Standard Model parameters.
    #[serde(default)]
    pub sm: SmConstants,
    /// Heavy resonance parameters.
    #[serde(default)]
    pub bsm: BsmConstants,
}
