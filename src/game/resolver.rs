use super::card::Card;
use super::config::ScoringPolicy;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Match,
    Mismatch,
}

#[derive(Clone, Copy, Debug)]
pub struct Resolution {
    pub verdict: Verdict,
    pub score_delta: i32,
}

/// A pair matches iff it is the same brand shown through both display
/// kinds. The kind check is deliberate: a deck invariant already forbids
/// two same-kind cards of one brand, but the rule stands on its own.
pub fn judge(a: &Card, b: &Card) -> Verdict {
    if a.brand() == b.brand() && a.kind() != b.kind() {
        Verdict::Match
    } else {
        Verdict::Mismatch
    }
}

/// Judges a revealed pair and prices the outcome against the scoring
/// policy at `elapsed_ms` into the round. State changes (marking cards,
/// arming the grace timer) are the round controller's job.
pub fn resolve(a: &Card, b: &Card, elapsed_ms: u32, policy: &ScoringPolicy) -> Resolution {
    let verdict = judge(a, b);
    let score_delta = match verdict {
        Verdict::Match => policy.match_delta(elapsed_ms),
        Verdict::Mismatch => policy.mismatch_delta(),
    };
    Resolution {
        verdict,
        score_delta,
    }
}
