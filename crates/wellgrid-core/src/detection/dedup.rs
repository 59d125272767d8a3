use super::candidate::Candidate;
use super::config::DedupeConfig;

fn is_duplicate(a: &Candidate, b: &Candidate, config: &DedupeConfig) -> bool {
    (a.x - b.x).abs() <= config.tolerance
        && (a.y - b.y).abs() <= config.tolerance
        && config
            .radius_tolerance
            .map_or(true, |rt| (a.radius - b.radius).abs() <= rt)
}

/// Merge near-duplicate candidates, keeping the larger radius of each group.
///
/// Candidates are visited largest radius first (stable, so equal radii keep
/// their input order) and each is compared only against representatives that
/// were already accepted. Because every accepted pair is non-duplicate, a
/// second run over the output is a no-op.
pub fn dedupe(candidates: &[Candidate], config: &DedupeConfig) -> Vec<Candidate> {
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by(|&a, &b| candidates[b].radius.total_cmp(&candidates[a].radius));

    let mut accepted: Vec<Candidate> = Vec::with_capacity(candidates.len());
    for index in order {
        let candidate = &candidates[index];
        if !accepted.iter().any(|rep| is_duplicate(rep, candidate, config)) {
            accepted.push(*candidate);
        }
    }
    accepted
}
