use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::{HdlKitError, HdlKitResult};

/// Where the consuming design is being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Simulation or test bench evaluation
    Simulation,
    /// Synthesis for, or execution on, real hardware
    Deployment,
}

impl Environment {
    /// Environment fixed at build time by the `simulation` cargo feature.
    pub const BUILD: Environment = if cfg!(feature = "simulation") {
        Environment::Simulation
    } else {
        Environment::Deployment
    };

    /// Picks `sim_var` under simulation and `syn_var` otherwise.
    pub const fn select(self, sim_var: u32, syn_var: u32) -> u32 {
        match self {
            Environment::Simulation => sim_var,
            Environment::Deployment => syn_var,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Environment::Simulation => "simulation",
            Environment::Deployment => "deployment",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = HdlKitError;

    fn from_str(s: &str) -> HdlKitResult<Self> {
        let env = match s.trim().to_ascii_lowercase().as_str() {
            "simulation" | "sim" => Environment::Simulation,
            "deployment" | "synthesis" | "syn" => Environment::Deployment,
            _ => return Err(HdlKitError::UnknownEnvironment(s.to_owned())),
        };
        debug!("environment {s:?} parsed as {env}");
        Ok(env)
    }
}

/// Returns `sim_var` when built with the `simulation` feature, `syn_var` otherwise.
///
/// Typical use is shrinking counters and timeouts so simulations finish quickly.
pub const fn sim_switch(sim_var: u32, syn_var: u32) -> u32 {
    Environment::BUILD.select(sim_var, syn_var)
}
