use crate::config::TypingCosts;
use crate::decompose::{Accord, Accords};
use crate::geometry::{Hand, Keyboard};

/// Picks one of several equivalent accord sequences and tracks elapsed time.
pub trait Typer {
    /// Index of the preferred variant; `None` only when `variants` is empty.
    fn optimal_accords(&self, variants: &[Accords]) -> Option<usize>;

    /// Types `accords`, returning the time it took in milliseconds.
    fn type_accords(&mut self, accords: &Accords) -> f32;

    fn elapsed(&self) -> f32;
}

/// Flat per-accord cost with a discount for switching hands.
#[derive(Debug, Clone)]
pub struct BaselineTyper<'a> {
    keyboard: &'a Keyboard,
    costs: TypingCosts,
    elapsed: f32,
    last_hand: Option<Hand>,
}

impl<'a> BaselineTyper<'a> {
    pub fn new(keyboard: &'a Keyboard, costs: TypingCosts) -> Self {
        Self {
            keyboard,
            costs,
            elapsed: 0.0,
            last_hand: None,
        }
    }

    pub fn last_hand(&self) -> Option<Hand> {
        self.last_hand
    }

    fn accord_hand(&self, accord: &Accord) -> Option<Hand> {
        accord.first().and_then(|&p| self.keyboard.hand(p))
    }

    /// Cost of `accords` starting after `last_hand`, and the hand it ends on.
    fn cost_from(&self, accords: &Accords, mut last_hand: Option<Hand>) -> (f32, Option<Hand>) {
        let mut total = 0.0;
        for accord in accords {
            if accord.is_empty() {
                continue;
            }
            let hand = self.accord_hand(accord);
            let mut cost =
                self.costs.accord_ms + self.costs.extra_key_ms * (accord.len() - 1) as f32;
            if last_hand.is_some() && hand != last_hand {
                cost -= self.costs.alternation_bonus_ms;
            }
            total += cost.max(0.0);
            last_hand = hand;
        }
        (total, last_hand)
    }
}

impl Typer for BaselineTyper<'_> {
    fn optimal_accords(&self, variants: &[Accords]) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, variant) in variants.iter().enumerate() {
            let (cost, _) = self.cost_from(variant, self.last_hand);
            if best.is_none_or(|(_, b)| cost < b) {
                best = Some((i, cost));
            }
        }
        best.map(|(i, _)| i)
    }

    fn type_accords(&mut self, accords: &Accords) -> f32 {
        let (cost, hand) = self.cost_from(accords, self.last_hand);
        self.elapsed += cost;
        self.last_hand = hand;
        cost
    }

    fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
