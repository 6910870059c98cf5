use itertools::Itertools;

use crate::hex::cellset::CellSet;
use crate::hex::error::{HexError, Result};

/// Empirical cost weight for fork width: tuned to favour proofs with
/// fewer simultaneous threats, since a wider fork asks more of the
/// reader without being any more sound.
pub const FORK_WIDTH_PENALTY: u64 = 100;

#[derive(Clone, Debug)]
pub enum Pattern<const N: u32> {
    /// Absent / sentinel (no proof exists yet).
    None,
    /// If every cell in `body` stays vacant, the side to move can claim
    /// `play`, then (via `sub`, if present) is guaranteed a connection.
    Threat { play: u32, body: CellSet<N>, sub: Option<Box<Pattern<N>>> },
    /// A set of alternative threats the opponent cannot simultaneously
    /// parry. `body` is always the union of the tines' bodies.
    Fork { body: CellSet<N>, tines: Vec<Pattern<N>> },
}

impl<const N: u32> Pattern<N> {
    pub fn threat(play: u32, body: CellSet<N>, sub: Option<Pattern<N>>) -> Self {
        debug_assert!(body.test(play), "a threat's play must lie within its own body");
        Pattern::Threat { play, body, sub: sub.map(Box::new) }
    }

    pub fn fork(tines: Vec<Pattern<N>>) -> Self {
        let body = tines.iter().fold(CellSet::empty(), |acc, t| acc | t.body());
        Pattern::Fork { body, tines }
    }

    pub fn body(&self) -> CellSet<N> {
        match self {
            Pattern::None => CellSet::empty(),
            Pattern::Threat { body, .. } => *body,
            Pattern::Fork { body, .. } => *body,
        }
    }

    pub fn play_index(&self) -> Option<u32> {
        match self {
            Pattern::Threat { play, .. } => Some(*play),
            _ => None,
        }
    }

    pub fn tines(&self) -> Option<&[Pattern<N>]> {
        match self {
            Pattern::Fork { tines, .. } => Some(tines),
            _ => None,
        }
    }

    /// Cost(Threat{sub=None}) = 1; Cost(Threat{sub=p}) = 1 + Cost(p);
    /// Cost(Fork{t}) = 1 + PENALTY*|t|^2 + sum(Cost(t_i)).
    pub fn cost(&self) -> u64 {
        match self {
            Pattern::None => 0,
            Pattern::Threat { sub: None, .. } => 1,
            Pattern::Threat { sub: Some(p), .. } => 1 + p.cost(),
            Pattern::Fork { tines, .. } => {
                let width = tines.len() as u64;
                1 + FORK_WIDTH_PENALTY * width * width + tines.iter().map(Pattern::cost).sum::<u64>()
            }
        }
    }

    /// A Fork is solid iff its tines' bodies intersect in nothing, so a
    /// single opponent move can't then neutralise every tine at once.
    /// `Threat` and `None` are trivially solid (no tines to collide).
    pub fn is_solid(&self) -> bool {
        match self {
            Pattern::Fork { tines, .. } => match tines.split_first() {
                None => true,
                Some((first, rest)) => {
                    let intersection = rest.iter().fold(first.body(), |acc, t| acc & t.body());
                    intersection.none()
                }
            },
            _ => true,
        }
    }

    /// The cheapest solid sub-fork of this fork, considering every
    /// non-singleton subset of tines. Fails with `IllegalState` if this
    /// pattern is not a solid fork, or if no solid subset exists.
    pub fn minimum_fork(&self) -> Result<Pattern<N>> {
        let Pattern::Fork { tines, .. } = self else {
            return Err(HexError::IllegalState { reason: "minimum_fork called on a non-fork pattern".into() });
        };
        if !self.is_solid() {
            return Err(HexError::IllegalState { reason: "minimum_fork requires the starting fork to be solid".into() });
        }

        let mut best: Option<Pattern<N>> = None;
        for k in 2..=tines.len() {
            for combo in tines.iter().combinations(k) {
                let candidate = Pattern::fork(combo.into_iter().cloned().collect());
                if !candidate.is_solid() {
                    continue;
                }
                best = match best {
                    None => Some(candidate),
                    Some(current) if compare(&candidate, &current) == std::cmp::Ordering::Less => Some(candidate),
                    Some(current) => Some(current),
                };
            }
        }
        best.ok_or_else(|| HexError::IllegalState {
            reason: "no solid sub-fork exists among this fork's tines".into(),
        })
    }
}

/// Orders two patterns by preference (`Less` = `a` wins): smaller
/// footprint first, then larger play index (only meaningful when both
/// are threats), then smaller cost.
pub fn compare<const N: u32>(a: &Pattern<N>, b: &Pattern<N>) -> std::cmp::Ordering {
    let by_footprint = a.body().count().cmp(&b.body().count());
    if by_footprint != std::cmp::Ordering::Equal {
        return by_footprint;
    }
    if let (Some(pa), Some(pb)) = (a.play_index(), b.play_index()) {
        if pa != pb {
            return pb.cmp(&pa);
        }
    }
    a.cost().cmp(&b.cost())
}
