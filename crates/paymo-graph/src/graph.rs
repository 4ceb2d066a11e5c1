//! Connection graph and bounded-depth reachability

use paymo_domain::{Feature, Transaction, UserId, Verdict};
use std::collections::{HashMap, HashSet};

/// Undirected graph of users connected by past transactions
///
/// Invariants:
/// - Symmetry: `b` is a neighbor of `a` exactly when `a` is a neighbor of `b`
/// - Every user that was ever a party to a recorded transaction has an
///   entry, so "present with no neighbors" is distinct from "absent"
/// - Edges are never removed
#[derive(Debug, Clone, Default)]
pub struct ConnectionGraph {
    network: HashMap<UserId, HashSet<UserId>>,
    edge_count: usize,
}

impl ConnectionGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `users` entries
    pub fn with_capacity(users: usize) -> Self {
        Self {
            network: HashMap::with_capacity(users),
            edge_count: 0,
        }
    }

    /// Record a transaction between `a` and `b`
    ///
    /// Both users get an entry if they are new. Returns `false` when the two
    /// were already connected, in which case the graph is unchanged apart
    /// from those entries. Never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use paymo_graph::ConnectionGraph;
    /// use paymo_domain::UserId;
    ///
    /// let mut graph = ConnectionGraph::new();
    /// assert!(graph.record(UserId::new(1), UserId::new(2)));
    /// assert!(!graph.record(UserId::new(2), UserId::new(1)));
    /// assert_eq!(graph.edge_count(), 1);
    /// ```
    pub fn record(&mut self, a: UserId, b: UserId) -> bool {
        self.network.entry(b).or_default();
        if !self.network.entry(a).or_default().insert(b) {
            return false;
        }
        self.network.entry(b).or_default().insert(a);
        self.edge_count += 1;
        true
    }

    /// Record a transaction value. See [`ConnectionGraph::record`].
    pub fn record_transaction(&mut self, transaction: &Transaction) -> bool {
        self.record(transaction.source, transaction.destination)
    }

    /// Feature 1: have `a` and `b` transacted before?
    pub fn is_directly_connected(&self, a: UserId, b: UserId) -> bool {
        self.contains(b)
            && self
                .network
                .get(&a)
                .is_some_and(|neighbors| neighbors.contains(&b))
    }

    /// Feature 2: are `a` and `b` at most two edges apart?
    pub fn is_within_depth2(&self, a: UserId, b: UserId) -> bool {
        self.is_within_depth(a, b, 2)
    }

    /// Feature 3: are `a` and `b` at most four edges apart?
    pub fn is_within_depth4(&self, a: UserId, b: UserId) -> bool {
        self.is_within_depth(a, b, 4)
    }

    /// Is `b` reached from `a` within `depth` levels of expansion?
    ///
    /// Unknown users never match and a depth of zero matches nothing.
    pub fn is_within_depth(&self, a: UserId, b: UserId, depth: usize) -> bool {
        self.distance_within(a, b, depth).is_some()
    }

    /// Trust check for one feature
    pub fn is_trusted(&self, feature: Feature, a: UserId, b: UserId) -> bool {
        match feature {
            Feature::DirectConnection => self.is_directly_connected(a, b),
            _ => self.is_within_depth(a, b, feature.max_depth()),
        }
    }

    /// Verdict for one feature
    pub fn verdict(&self, feature: Feature, a: UserId, b: UserId) -> Verdict {
        Verdict::from_reachable(self.is_trusted(feature, a, b))
    }

    /// First level in `1..=max_depth` at which `to` appears when expanding
    /// outward from `from`
    ///
    /// Level 1 is the neighbor set of `from`, level `n + 1` the neighbors of
    /// level `n`. `from` itself is not seeded as visited, so a user with any
    /// neighbor reaches itself at level 2. Each user is expanded at most once
    /// per call, which bounds the work by the size of the graph.
    pub fn distance_within(&self, from: UserId, to: UserId, max_depth: usize) -> Option<usize> {
        if max_depth == 0 || !self.contains(to) {
            return None;
        }
        let start = self.network.get(&from)?;
        if start.contains(&to) {
            return Some(1);
        }

        let mut visited: HashSet<UserId> = start.clone();
        let mut frontier: Vec<UserId> = start.iter().copied().collect();

        for depth in 2..=max_depth {
            let mut next = Vec::new();
            for user in &frontier {
                let Some(neighbors) = self.network.get(user) else {
                    continue;
                };
                for &neighbor in neighbors {
                    if neighbor == to {
                        return Some(depth);
                    }
                    if visited.insert(neighbor) {
                        next.push(neighbor);
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            frontier = next;
        }

        None
    }

    /// Whether `user` has appeared in any recorded transaction
    pub fn contains(&self, user: UserId) -> bool {
        self.network.contains_key(&user)
    }

    /// Neighbor set of `user`, or `None` if the user is unknown
    pub fn neighbors(&self, user: UserId) -> Option<&HashSet<UserId>> {
        self.network.get(&user)
    }

    /// Number of known users
    pub fn user_count(&self) -> usize {
        self.network.len()
    }

    /// Number of distinct undirected edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True if no transaction has been recorded
    pub fn is_empty(&self) -> bool {
        self.network.is_empty()
    }
}

impl Extend<Transaction> for ConnectionGraph {
    fn extend<I: IntoIterator<Item = Transaction>>(&mut self, iter: I) {
        for transaction in iter {
            self.record_transaction(&transaction);
        }
    }
}

impl FromIterator<Transaction> for ConnectionGraph {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        let mut graph = ConnectionGraph::new();
        graph.extend(iter);
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(value: i64) -> UserId {
        UserId::new(value)
    }

    fn chain(len: i64) -> ConnectionGraph {
        (1..len).map(|i| Transaction::new(i, i + 1)).collect()
    }

    #[test]
    fn test_record_creates_entries_and_edge() {
        let mut graph = ConnectionGraph::new();
        assert!(graph.record(u(1), u(2)));

        assert!(graph.contains(u(1)));
        assert!(graph.contains(u(2)));
        assert!(graph.neighbors(u(1)).unwrap().contains(&u(2)));
        assert!(graph.neighbors(u(2)).unwrap().contains(&u(1)));
        assert_eq!(graph.user_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_record_duplicate_in_either_direction() {
        let mut graph = ConnectionGraph::new();
        assert!(graph.record(u(1), u(2)));
        assert!(!graph.record(u(1), u(2)));
        assert!(!graph.record(u(2), u(1)));

        assert_eq!(graph.neighbors(u(1)).unwrap().len(), 1);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_chain_distances() {
        let graph = chain(5);

        assert!(graph.is_directly_connected(u(1), u(2)));
        assert!(!graph.is_directly_connected(u(1), u(3)));
        assert!(graph.is_within_depth2(u(1), u(3)));
        assert!(!graph.is_within_depth2(u(1), u(4)));
        assert!(graph.is_within_depth4(u(1), u(4)));
        assert!(graph.is_within_depth4(u(1), u(5)));
        assert!(!graph.is_within_depth4(u(1), u(6)));
    }

    #[test]
    fn test_distance_within_reports_level() {
        let graph = chain(7);
        assert_eq!(graph.distance_within(u(1), u(2), 4), Some(1));
        assert_eq!(graph.distance_within(u(1), u(4), 4), Some(3));
        assert_eq!(graph.distance_within(u(1), u(5), 4), Some(4));
        assert_eq!(graph.distance_within(u(1), u(6), 4), None);
        assert_eq!(graph.distance_within(u(1), u(6), 5), Some(5));
    }

    #[test]
    fn test_zero_depth_matches_nothing() {
        let graph = chain(3);
        assert!(!graph.is_within_depth(u(1), u(2), 0));
        assert!(!graph.is_within_depth(u(1), u(1), 0));
    }

    #[test]
    fn test_unknown_users_never_match() {
        let graph = chain(3);
        for depth in 1..=4 {
            assert!(!graph.is_within_depth(u(1), u(99), depth));
            assert!(!graph.is_within_depth(u(99), u(1), depth));
            assert!(!graph.is_within_depth(u(99), u(99), depth));
        }
        assert!(!graph.is_directly_connected(u(99), u(1)));
    }

    #[test]
    fn test_self_query_follows_level_expansion() {
        let mut graph = ConnectionGraph::new();
        graph.record(u(1), u(2));

        assert!(!graph.is_directly_connected(u(1), u(1)));
        assert!(graph.is_within_depth2(u(1), u(1)));
        assert!(graph.is_within_depth4(u(1), u(1)));

        graph.record(u(3), u(3));
        assert!(graph.is_directly_connected(u(3), u(3)));
        assert_eq!(graph.neighbors(u(3)).unwrap().len(), 1);
    }

    #[test]
    fn test_cycle_terminates() {
        let mut graph = ConnectionGraph::new();
        for (a, b) in [(1, 2), (2, 3), (3, 4), (4, 1)] {
            graph.record(u(a), u(b));
        }
        graph.record(u(10), u(11));

        assert!(graph.is_within_depth2(u(1), u(3)));
        assert!(!graph.is_within_depth4(u(1), u(10)));
    }

    #[test]
    fn test_is_trusted_dispatch() {
        let graph = chain(4);
        assert!(!graph.is_trusted(Feature::DirectConnection, u(1), u(3)));
        assert!(graph.is_trusted(Feature::WithinTwoDegrees, u(1), u(3)));
        assert_eq!(graph.verdict(Feature::WithinTwoDegrees, u(1), u(4)), Verdict::Unverified);
        assert_eq!(graph.verdict(Feature::WithinFourDegrees, u(1), u(4)), Verdict::Trusted);
    }

    #[test]
    fn test_empty_graph() {
        let graph = ConnectionGraph::with_capacity(16);
        assert!(graph.is_empty());
        for feature in Feature::ALL {
            assert!(!graph.is_trusted(feature, u(10), u(20)));
        }
    }
}
