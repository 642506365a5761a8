//! Sequential statistical testing over win/loss/draw tallies.
//!
//! Implements the fishtest-style sequential probability ratio test (SPRT)
//! under the BayesElo draw model, plus a normal-approximation Elo estimate
//! with a 95% interval. Entirely independent of board semantics: the inputs
//! are counts, the outputs are decisions.

use std::f64::consts::PI;

/// Win/loss/draw tallies from the perspective of the candidate under test.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WldCounts {
    pub wins: u64,
    pub losses: u64,
    pub draws: u64,
}

impl WldCounts {
    pub fn new(wins: u64, losses: u64, draws: u64) -> Self {
        Self {
            wins,
            losses,
            draws,
        }
    }

    #[inline]
    pub fn games(&self) -> u64 {
        self.wins + self.losses + self.draws
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SprtState {
    /// Not enough evidence either way; keep sampling.
    Continue,
    /// H1 accepted: the candidate performs at `elo1` or better.
    Accepted,
    /// H1 rejected in favor of H0.
    Rejected,
}

#[derive(Debug, Clone, Copy)]
pub struct SprtResult {
    pub state: SprtState,
    pub llr: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

impl SprtResult {
    #[inline]
    pub fn finished(&self) -> bool {
        self.state != SprtState::Continue
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EloEstimate {
    pub elo: f64,
    /// Half-width of the 95% confidence interval.
    pub elo95: f64,
    /// Likelihood of superiority.
    pub los: f64,
}

// Abramowitz-Stegun style erf approximation and its analytic inverse; good
// to a few decimals, which is all the confidence reporting needs.
fn erf(x: f64) -> f64 {
    let a = 8.0 * (PI - 3.0) / (3.0 * PI * (4.0 - PI));
    let x2 = x * x;
    let y = -x2 * (4.0 / PI + a * x2) / (1.0 + a * x2);
    (1.0 - y.exp()).sqrt().copysign(x)
}

fn erf_inv(x: f64) -> f64 {
    let a = 8.0 * (PI - 3.0) / (3.0 * PI * (4.0 - PI));
    let y = (1.0 - x * x).ln();
    let z = 2.0 / (PI * a) + y / 2.0;
    ((z * z - y / a).sqrt() - z).sqrt().copysign(x)
}

/// Standard normal CDF: quantile -> probability.
fn phi(q: f64) -> f64 {
    0.5 * (1.0 + erf(q / 2.0_f64.sqrt()))
}

/// Standard normal quantile function: probability -> quantile.
fn phi_inv(p: f64) -> f64 {
    debug_assert!((0.0..=1.0).contains(&p));
    2.0_f64.sqrt() * erf_inv(2.0 * p - 1.0)
}

fn simple_elo(expected_score: f64) -> f64 {
    if expected_score <= 0.0 || expected_score >= 1.0 {
        return 0.0;
    }
    -400.0 * (1.0 / expected_score - 1.0).log10()
}

/// BayesElo (elo, draw_elo) -> (win, loss, draw) probabilities.
fn bayeselo_to_probability(elo: f64, draw_elo: f64) -> (f64, f64, f64) {
    let win = 1.0 / (1.0 + 10.0_f64.powf((-elo + draw_elo) / 400.0));
    let loss = 1.0 / (1.0 + 10.0_f64.powf((elo + draw_elo) / 400.0));
    (win, loss, 1.0 - win - loss)
}

/// Observed (win, loss) rates -> BayesElo (elo, draw_elo).
fn probability_to_bayeselo(win: f64, loss: f64) -> (f64, f64) {
    debug_assert!(0.0 < win && win < 1.0 && 0.0 < loss && loss < 1.0);
    let elo = 200.0 * (win / loss * (1.0 - loss) / (1.0 - win)).log10();
    let draw_elo = 200.0 * ((1.0 - loss) / loss * (1.0 - win) / win).log10();
    (elo, draw_elo)
}

/// Elo point estimate with 95% interval and likelihood of superiority, from
/// the empirical mean and standard deviation of the game results.
pub fn elo_estimate(counts: WldCounts) -> EloEstimate {
    let games = counts.games() as f64;
    let wins = counts.wins as f64 / games;
    let losses = counts.losses as f64 / games;
    let draws = counts.draws as f64 / games;

    let mu = wins + draws / 2.0;
    let stdev = (wins * (1.0 - mu).powi(2)
        + losses * mu.powi(2)
        + draws * (0.5 - mu).powi(2))
    .sqrt()
        / games.sqrt();

    let mu_min = mu + phi_inv(0.025) * stdev;
    let mu_max = mu + phi_inv(0.975) * stdev;

    EloEstimate {
        elo: simple_elo(mu),
        elo95: (simple_elo(mu_max) - simple_elo(mu_min)) / 2.0,
        los: phi((mu - 0.5) / stdev),
    }
}

/// Sequential probability ratio test.
///
/// H0: the candidate plays at `elo0`; H1: at `elo1`. `alpha` is the maximum
/// Type-I error (reached at `elo0`), `beta` the maximum Type-II error
/// (reached at `elo1`). The draw rate is estimated out of sample, so the
/// test cannot decide until all three counts are nonzero.
pub fn sprt(counts: WldCounts, elo0: f64, alpha: f64, elo1: f64, beta: f64) -> SprtResult {
    let lower_bound = (beta / (1.0 - alpha)).ln();
    let upper_bound = ((1.0 - beta) / alpha).ln();

    if counts.wins == 0 || counts.losses == 0 || counts.draws == 0 {
        return SprtResult {
            state: SprtState::Continue,
            llr: 0.0,
            lower_bound,
            upper_bound,
        };
    }

    let games = counts.games() as f64;
    let (_, draw_elo) = probability_to_bayeselo(
        counts.wins as f64 / games,
        counts.losses as f64 / games,
    );

    let (w0, l0, d0) = bayeselo_to_probability(elo0, draw_elo);
    let (w1, l1, d1) = bayeselo_to_probability(elo1, draw_elo);

    let llr = counts.wins as f64 * (w1 / w0).ln()
        + counts.losses as f64 * (l1 / l0).ln()
        + counts.draws as f64 * (d1 / d0).ln();

    let state = if llr < lower_bound {
        SprtState::Rejected
    } else if llr > upper_bound {
        SprtState::Accepted
    } else {
        SprtState::Continue
    };

    SprtResult {
        state,
        llr,
        lower_bound,
        upper_bound,
    }
}
