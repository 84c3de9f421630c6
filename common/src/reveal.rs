use std::{
    borrow::Borrow,
    collections::HashSet,
    fmt::Debug,
    hash::Hash,
};

use tracing::trace;

// one-shot reveal on scroll
//
// keys move from observed to revealed the first time they intersect enough, and
// never move back.  arm() is called after the front end replaces elements; keys
// that are no longer present are forgotten
#[derive(Clone, Debug)]
pub struct RevealTracker<K: Clone + Debug + Eq + Hash> {
    threshold: f64,
    observed: HashSet<K>,
    revealed: HashSet<K>,
}

impl<K: Clone + Debug + Eq + Hash> RevealTracker<K> {
    pub fn new(threshold: f64) -> Self {
        RevealTracker {
            threshold,
            observed: HashSet::new(),
            revealed: HashSet::new(),
        }
    }

    // returns the keys that need an observer
    pub fn arm<I: IntoIterator<Item = K>>(&mut self, keys: I) -> Vec<K> {
        let present: HashSet<K> = keys.into_iter().collect();

        self.revealed.retain(|k| present.contains(k));
        self.observed = present
            .into_iter()
            .filter(|k| !self.revealed.contains(k))
            .collect();

        self.observed.iter().cloned().collect()
    }

    // returns true the one time a key becomes revealed, at which point the caller
    // stops observing it
    pub fn intersect<Q>(&mut self, key: &Q, ratio: f64) -> bool
    where
        K: Borrow<Q>,
        Q: Debug + Eq + Hash + ?Sized,
    {
        if ratio < self.threshold {
            return false;
        }

        let Some(key) = self.observed.take(key) else {
            return false;
        };

        trace!(?key, ratio, "revealing element");
        self.revealed.insert(key);
        true
    }

    pub fn is_revealed<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.revealed.contains(key)
    }

    pub fn is_observed<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.observed.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_at_most_once() {
        let mut tracker = RevealTracker::new(0.1);
        tracker.arm(["about", "contact"]);

        assert!(!tracker.intersect(&"about", 0.05));
        assert!(!tracker.is_revealed(&"about"));

        assert!(tracker.intersect(&"about", 0.4));
        assert!(tracker.is_revealed(&"about"));
        assert!(!tracker.is_observed(&"about"));

        // leaving and re-entering the viewport changes nothing
        assert!(!tracker.intersect(&"about", 0.0));
        assert!(!tracker.intersect(&"about", 1.0));
        assert!(tracker.is_revealed(&"about"));
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut tracker = RevealTracker::new(0.1);
        tracker.arm(["hero"]);
        assert!(tracker.intersect(&"hero", 0.1));
    }

    #[test]
    fn unarmed_keys_are_ignored() {
        let mut tracker: RevealTracker<&str> = RevealTracker::new(0.1);
        assert!(!tracker.intersect(&"stray", 1.0));
        assert!(!tracker.is_revealed(&"stray"));
    }

    #[test]
    fn rearm_keeps_revealed_and_drops_removed() {
        let mut tracker = RevealTracker::new(0.1);
        tracker.arm(["about", "card-1-1", "card-1-2"]);
        tracker.intersect(&"about", 1.0);
        tracker.intersect(&"card-1-1", 1.0);

        let mut armed = tracker.arm(["about", "card-2-1"]);
        armed.sort();
        assert_eq!(armed, vec!["card-2-1"]);

        assert!(tracker.is_revealed(&"about"));
        assert!(!tracker.is_revealed(&"card-1-1"));
        assert!(!tracker.is_observed(&"card-1-2"));
        assert!(tracker.intersect(&"card-2-1", 0.5));
    }
}
