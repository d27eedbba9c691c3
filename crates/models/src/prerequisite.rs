use std::{collections::HashMap, hash::Hash};

/// One prerequisite edge record: `course` requires every member of `group`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrerequisiteEdge<K> {
    pub course: K,
    pub group: Vec<K>,
}

/// Bidirectional one-hop prerequisite adjacency
///
/// A course may have several prerequisite groups; any single group being
/// completed is enough. Groups are kept as separate lists and never
/// flattened. No transitive closure or cycle detection is done.
#[derive(Debug, Clone)]
pub struct PrerequisiteGraph<K> {
    groups: HashMap<K, Vec<Vec<K>>>,
    postrequisites: HashMap<K, Vec<K>>,
}

impl<K> Default for PrerequisiteGraph<K> {
    fn default() -> Self {
        Self {
            groups: HashMap::new(),
            postrequisites: HashMap::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> PrerequisiteGraph<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_edges(edges: impl IntoIterator<Item = PrerequisiteEdge<K>>) -> Self {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_group(edge.course, edge.group);
        }
        graph
    }

    /// Records that `course` can be taken after completing all of `group`
    ///
    /// Empty groups are ignored; they would make `course` count as satisfied.
    pub fn add_group(&mut self, course: K, group: Vec<K>) {
        if group.is_empty() {
            return;
        }

        for member in &group {
            let postrequisites = self.postrequisites.entry(member.clone()).or_default();
            if !postrequisites.contains(&course) {
                postrequisites.push(course.clone());
            }
        }

        self.groups.entry(course).or_default().push(group);
    }

    /// Prerequisite groups of `course`, one entry per edge record
    pub fn prerequisites(&self, course: &K) -> &[Vec<K>] {
        self.groups.get(course).map(Vec::as_slice).unwrap_or_default()
    }

    /// Distinct courses listing `course` in any of their groups
    pub fn postrequisites(&self, course: &K) -> &[K] {
        self.postrequisites
            .get(course)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// True when `course` has no prerequisites or one of its groups is complete
    pub fn is_satisfied_by(&self, course: &K, completed: &[K]) -> bool {
        self.missing(course, completed).is_none()
    }

    /// Remaining requirements for `course`
    ///
    /// - Returns `None` if the requirement is already satisfied
    /// - Returns every group with its completed members removed otherwise
    pub fn missing(&self, course: &K, completed: &[K]) -> Option<Vec<Vec<K>>> {
        let mut remaining = Vec::new();

        for group in self.prerequisites(course) {
            let left: Vec<K> = group
                .iter()
                .filter(|member| !completed.contains(*member))
                .cloned()
                .collect();

            if left.is_empty() {
                return None;
            }
            remaining.push(left);
        }

        (!remaining.is_empty()).then_some(remaining)
    }
}
