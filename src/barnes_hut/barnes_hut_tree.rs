use std::ops::Add;

use crate::barnes_hut::{direct_interaction, pairwise_interaction};
use crate::models::{Body, Direction, Octant, PointMass, Vector3};
use crate::utils::{SimulationConfig, MAX_TREE_DEPTH};

/// Index of a node inside [`BarnesHutTree`]'s arena.
pub type NodeId = usize;

const ROOT: NodeId = 0;

/// What a node currently holds.
///
/// - `Empty`: no body has reached this region yet.
/// - `Leaf`: exactly one real body, with its index in the body array.
/// - `Internal`: the summed mass and mass weighted centroid of the subtree, plus up to eight
///   children indexed by [`Direction::index`].
/// - `Bucket`: bodies that are still together at [`MAX_TREE_DEPTH`], kept as a flat list.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Empty,
    Leaf { index: usize, body: Body },
    Internal { aggregate: PointMass, children: [Option<NodeId>; 8] },
    Bucket { aggregate: PointMass, members: Vec<(usize, Body)> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarnesHutNode {
    pub octant: Octant,
    pub depth: usize,
    pub kind: NodeKind,
}

impl BarnesHutNode {
    fn new(octant: Octant, depth: usize) -> Self {
        Self { octant, depth, kind: NodeKind::Empty }
    }

    /// Mass and position this node stands for when seen from far away.
    pub fn aggregate(&self) -> Option<PointMass> {
        match &self.kind {
            NodeKind::Empty => None,
            NodeKind::Leaf { body, .. } => Some(PointMass::from(body)),
            NodeKind::Internal { aggregate, .. } | NodeKind::Bucket { aggregate, .. } => Some(*aggregate),
        }
    }

    pub fn child(&self, direction: Direction) -> Option<NodeId> {
        match &self.kind {
            NodeKind::Internal { children, .. } => children[direction.index()],
            _ => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }
}

/// Counters collected while walking the tree for one target body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionStats {
    /// Internal nodes that were too close or too large and had to be descended into.
    pub opened: usize,
    /// Internal nodes accepted as a single point mass.
    pub approximated: usize,
    /// Body to body interactions at leaves and buckets.
    pub direct: usize,
}

impl Add for InteractionStats {
    type Output = InteractionStats;

    fn add(self, rhs: InteractionStats) -> InteractionStats {
        InteractionStats {
            opened: self.opened + rhs.opened,
            approximated: self.approximated + rhs.approximated,
            direct: self.direct + rhs.direct,
        }
    }
}

/// Barnes–Hut octree stored as an arena of nodes addressed by [`NodeId`].
///
/// The tree is rebuilt from scratch every step: bodies are inserted one by one, each
/// insertion refining the aggregates on its path, and the finished tree is then only read
/// while forces are accumulated.
///
/// # Examples
///
/// ```
/// use rs_nbody::barnes_hut::BarnesHutTree;
/// use rs_nbody::models::{Body, Octant, Vector3};
///
/// let bodies = vec![
///     Body::new(Vector3::new(1.0, 1.0, 1.0), Vector3::ZERO, 1.0).unwrap(),
///     Body::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::ZERO, 3.0).unwrap(),
/// ];
/// let root = Octant::new(Vector3::ZERO, 4.0).unwrap();
/// let tree = BarnesHutTree::build(root, &bodies, None);
///
/// let aggregate = tree.root().aggregate().unwrap();
/// assert_eq!(aggregate.mass, 4.0);
/// assert_eq!(aggregate.position, Vector3::new(-0.5, -0.5, -0.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BarnesHutTree {
    nodes: Vec<BarnesHutNode>,
    inserted: usize,
    escaped: usize,
}

impl BarnesHutTree {
    /// Creates a tree with a single empty root covering `root`.
    pub fn new(root: Octant) -> Self {
        Self {
            nodes: vec![BarnesHutNode::new(root, 0)],
            inserted: 0,
            escaped: 0,
        }
    }

    /// Builds a tree over `bodies`, leaving out `skip` (normally the central body).
    ///
    /// Bodies outside the root octant are not inserted; their number is available through
    /// [`BarnesHutTree::escaped`].
    pub fn build(root: Octant, bodies: &[Body], skip: Option<usize>) -> Self {
        let mut tree = BarnesHutTree::new(root);
        for (i, body) in bodies.iter().enumerate() {
            if Some(i) == skip {
                continue;
            }
            if !tree.insert(i, *body) {
                tree.escaped += 1;
            }
        }
        tree
    }

    pub fn root(&self) -> &BarnesHutNode {
        &self.nodes[ROOT]
    }

    pub fn node(&self, id: NodeId) -> Option<&BarnesHutNode> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> &[BarnesHutNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inserted == 0
    }

    /// Number of bodies stored in the tree.
    pub fn body_count(&self) -> usize {
        self.inserted
    }

    /// Number of bodies `build` skipped because they were outside the root octant.
    pub fn escaped(&self) -> usize {
        self.escaped
    }

    pub fn contains(&self, point: &Vector3) -> bool {
        self.root().octant.contains(point)
    }

    /// Inserts `body`, identified by its index in the body array.
    ///
    /// Returns `false` and leaves the tree untouched when the body lies outside the root.
    pub fn insert(&mut self, index: usize, body: Body) -> bool {
        if !self.contains(&body.position) {
            return false;
        }
        self.insert_at(ROOT, index, body);
        self.inserted += 1;
        true
    }

    fn insert_at(&mut self, id: NodeId, index: usize, body: Body) {
        let node = &mut self.nodes[id];
        match node.kind {
            NodeKind::Empty => {
                node.kind = NodeKind::Leaf { index, body };
            }
            NodeKind::Internal { ref mut aggregate, .. } => {
                aggregate.merge(body.position, body.mass);
                self.route(id, index, body);
            }
            NodeKind::Bucket { ref mut aggregate, ref mut members } => {
                aggregate.merge(body.position, body.mass);
                members.push((index, body));
            }
            NodeKind::Leaf { index: resident_index, body: resident } => {
                let mut aggregate = PointMass::from(&resident);
                if node.depth >= MAX_TREE_DEPTH {
                    aggregate.merge(body.position, body.mass);
                    node.kind = NodeKind::Bucket {
                        aggregate,
                        members: vec![(resident_index, resident), (index, body)],
                    };
                    return;
                }
                // The resident already is the one body centroid, so it only moves down.
                node.kind = NodeKind::Internal { aggregate, children: [None; 8] };
                self.route(id, resident_index, resident);
                self.insert_at(id, index, body);
            }
        }
    }

    /// Sends `body` into the child of internal node `id` that covers its position.
    fn route(&mut self, id: NodeId, index: usize, body: Body) {
        let octant = self.nodes[id].octant;
        let depth = self.nodes[id].depth;
        let direction = octant.direction_of(&body.position);

        let child = match self.nodes[id].child(direction) {
            Some(child) => child,
            None => {
                let child = self.nodes.len();
                self.nodes.push(BarnesHutNode::new(octant.child_octant(direction), depth + 1));
                if let NodeKind::Internal { children, .. } = &mut self.nodes[id].kind {
                    children[direction.index()] = Some(child);
                }
                child
            }
        };
        self.insert_at(child, index, body);
    }

    /// Accumulates the approximate force of the whole tree on `target`.
    ///
    /// `index` is the target's position in the body array; a leaf holding the same index is
    /// the target itself and is skipped.
    pub fn interact(&self, index: usize, target: &mut Body, config: &SimulationConfig) {
        self.interact_with_stats(index, target, config);
    }

    /// Same as [`BarnesHutTree::interact`] but reports how the traversal went.
    pub fn interact_with_stats(&self, index: usize, target: &mut Body, config: &SimulationConfig) -> InteractionStats {
        let mut stats = InteractionStats::default();
        self.interact_node(ROOT, index, target, config, &mut stats);
        stats
    }

    fn interact_node(
        &self,
        id: NodeId,
        index: usize,
        target: &mut Body,
        config: &SimulationConfig,
        stats: &mut InteractionStats,
    ) {
        let node = &self.nodes[id];
        match &node.kind {
            NodeKind::Empty => {}
            NodeKind::Leaf { index: leaf_index, body } => {
                if *leaf_index != index {
                    stats.direct += 1;
                    pairwise_interaction(target, body, config);
                }
            }
            NodeKind::Bucket { members, .. } => {
                for (member_index, member) in members {
                    if *member_index != index {
                        stats.direct += 1;
                        pairwise_interaction(target, member, config);
                    }
                }
            }
            NodeKind::Internal { aggregate, children } => {
                let distance = aggregate.position.distance_to(&target.position);
                if distance == 0.0 {
                    return;
                }
                if node.octant.side_length() / distance < config.opening_threshold {
                    stats.approximated += 1;
                    direct_interaction(target, aggregate, config);
                } else {
                    stats.opened += 1;
                    for child in children.iter().flatten() {
                        self.interact_node(*child, index, target, config, stats);
                    }
                }
            }
        }
    }
}
