// ephemeris/plan94.rs
//
// Approximate heliocentric position and velocity of the major planets from
// the truncated analytic theory of Simon et al. (1994), Astron. Astrophys. 282, 663.
// Pure math: identical inputs give identical outputs, no shared state.

use glam::DVec3;

use super::planet::Planet;
use super::tables::{
    A, AMAS, CA, CL, COSEPS, DINC, DLM, DMU_RATE, E, GK, KP, KQ, OMEGA, PI, SA, SINEPS, SL,
};
use crate::error::Result;
use crate::math::{anpm, horner, ARCSEC_TO_RAD, TAU};

/// Julian date of J2000.0.
pub const J2000: f64 = 2_451_545.0;

/// Days per Julian millennium.
pub const DAYS_PER_MILLENNIUM: f64 = 365_250.0;

/// Iteration budget for Kepler's equation.
pub const KEPLER_MAX_ITERATIONS: u32 = 10;

/// Convergence threshold on the Newton correction.
pub const KEPLER_TOLERANCE: f64 = 1e-12;

/// Advisory status of a planetary evaluation. Every status carries a usable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanStatus {
    #[default]
    Nominal,
    /// Date more than one millennium from J2000.0; accuracy degrades.
    RemoteDate,
    /// Kepler's equation did not reach tolerance within the iteration budget.
    NotConverged,
}

impl PlanStatus {
    /// Numeric code: 0 nominal, 1 remote date, 2 not converged.
    pub fn code(self) -> i32 {
        match self {
            PlanStatus::Nominal => 0,
            PlanStatus::RemoteDate => 1,
            PlanStatus::NotConverged => 2,
        }
    }
}

/// Heliocentric state in the mean-J2000 equatorial frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetState {
    /// Position (au).
    pub position: DVec3,
    /// Velocity (au/day).
    pub velocity: DVec3,
    pub status: PlanStatus,
}

/// Result of the Newton iteration on Kepler's equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly (radians). The latest estimate if not converged.
    pub eccentric_anomaly: f64,
    pub iterations: u32,
    pub converged: bool,
}

/// Julian millennia from J2000.0 for a two-part Julian date.
///
/// The date is `date1 + date2`, split any way the caller likes.
#[inline]
pub fn julian_millennia(date1: f64, date2: f64) -> f64 {
    (date1 - J2000 + date2) / DAYS_PER_MILLENNIUM
}

/// Mean semi-major axis (au) at `t` Julian millennia, without periodic terms.
pub fn semi_major_axis(planet: Planet, t: f64) -> f64 {
    horner(t, &A[planet.row()])
}

/// Solve `M = E - e·sin(E)` for E, seeded at `M + e·sin(M)`.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> KeplerSolution {
    solve_kepler_with(mean_anomaly, eccentricity, KEPLER_MAX_ITERATIONS)
}

fn solve_kepler_with(am: f64, de: f64, max_iterations: u32) -> KeplerSolution {
    let mut ae = am + de * am.sin();
    let mut dae = 1.0_f64;
    let mut k = 0;
    while k < max_iterations && dae.abs() > KEPLER_TOLERANCE {
        dae = (am - ae + de * ae.sin()) / (1.0 - de * ae.cos());
        ae += dae;
        k += 1;
    }
    KeplerSolution {
        eccentric_anomaly: ae,
        iterations: k,
        converged: dae.abs() <= KEPLER_TOLERANCE,
    }
}

/// Mean element angle: degrees + arcsec·t + arcsec·t², in radians.
#[inline]
fn angle_poly(row: &[f64; 3], t: f64) -> f64 {
    horner(t, &[3600.0 * row[0], row[1], row[2]]) * ARCSEC_TO_RAD
}

/// Rotate an ecliptic J2000 vector to the equatorial J2000 frame.
#[inline]
fn ecliptic_to_equatorial(v: DVec3) -> DVec3 {
    DVec3::new(
        v.x,
        v.y * COSEPS - v.z * SINEPS,
        v.y * SINEPS + v.z * COSEPS,
    )
}

/// Heliocentric position and velocity of `planet` at Julian date `date1 + date2` (TDB).
pub fn position_velocity(date1: f64, date2: f64, planet: Planet) -> PlanetState {
    position_velocity_with(date1, date2, planet, KEPLER_MAX_ITERATIONS)
}

fn position_velocity_with(date1: f64, date2: f64, planet: Planet, kepler_budget: u32) -> PlanetState {
    let np = planet.row();
    let t = julian_millennia(date1, date2);

    let mut status = if t.abs() <= 1.0 {
        PlanStatus::Nominal
    } else {
        PlanStatus::RemoteDate
    };

    // Mean elements.
    let mut da = horner(t, &A[np]);
    let mut dl = angle_poly(&DLM[np], t);
    let de = horner(t, &E[np]);
    let dp = anpm(angle_poly(&PI[np], t));
    let di = angle_poly(&DINC[np], t);
    let dom = anpm(angle_poly(&OMEGA[np], t));

    // Periodic terms.
    let dmu = DMU_RATE * t;
    for k in 0..8 {
        let arga = KP[np][k] * dmu;
        let argl = KQ[np][k] * dmu;
        da += (CA[np][k] * arga.cos() + SA[np][k] * arga.sin()) * 1e-7;
        dl += (CL[np][k] * argl.cos() + SL[np][k] * argl.sin()) * 1e-7;
    }
    let arga = KP[np][8] * dmu;
    da += t * (CA[np][8] * arga.cos() + SA[np][8] * arga.sin()) * 1e-7;
    for k in 8..10 {
        let argl = KQ[np][k] * dmu;
        dl += t * (CL[np][k] * argl.cos() + SL[np][k] * argl.sin()) * 1e-7;
    }
    dl %= TAU;

    // Eccentric anomaly.
    let am = dl - dp;
    let kepler = solve_kepler_with(am, de, kepler_budget);
    if !kepler.converged {
        status = PlanStatus::NotConverged;
        log::warn!(
            "{}: Kepler iteration did not converge at t={t:.6} millennia",
            planet.name()
        );
    } else if status == PlanStatus::RemoteDate {
        log::debug!("{}: date {:.1} is outside 1000-3000 CE", planet.name(), date1 + date2);
    }
    let ae = kepler.eccentric_anomaly;

    // True anomaly.
    let ae2 = ae / 2.0;
    let at = 2.0 * (((1.0 + de) / (1.0 - de)).sqrt() * ae2.sin()).atan2(ae2.cos());

    // Distance (au) and speed (radians per day).
    let r = da * (1.0 - de * ae.cos());
    let v = GK * ((1.0 + 1.0 / AMAS[np]) / (da * da * da)).sqrt();

    let si2 = (di / 2.0).sin();
    let xq = si2 * dom.cos();
    let xp = si2 * dom.sin();
    let tl = at + dp;
    let xsw = tl.sin();
    let xcw = tl.cos();
    let xm2 = 2.0 * (xp * xcw - xq * xsw);
    let xf = da / (1.0 - de * de).sqrt();
    let ci2 = (di / 2.0).cos();
    let xms = (de * dp.sin() + xsw) * xf;
    let xmc = (de * dp.cos() + xcw) * xf;
    let xpxq2 = 2.0 * xp * xq;

    let position = DVec3::new(
        r * (xcw - xm2 * xp),
        r * (xsw + xm2 * xq),
        r * (-xm2 * ci2),
    );
    let velocity = DVec3::new(
        v * ((-1.0 + 2.0 * xp * xp) * xms + xpxq2 * xmc),
        v * ((1.0 - 2.0 * xq * xq) * xmc - xpxq2 * xms),
        v * (2.0 * ci2 * (xp * xms + xq * xmc)),
    );

    PlanetState {
        position: ecliptic_to_equatorial(position),
        velocity: ecliptic_to_equatorial(velocity),
        status,
    }
}

/// Integer-index entry point (1 = Mercury ... 8 = Neptune, 3 = Earth-Moon barycenter).
pub fn position_velocity_index(date1: f64, date2: f64, index: i32) -> Result<PlanetState> {
    Ok(position_velocity(date1, date2, Planet::from_index(index)?))
}
