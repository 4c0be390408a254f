//! Solution reconstruction from a goal node.

use std::rc::Rc;

use crate::node::Node;

/// A successful search outcome: the plan plus run diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution<O> {
    /// Actions in execution order, root to goal.
    pub ops: Vec<O>,
    /// Nodes removed from the frontier during the run (a diagnostic, not
    /// part of correctness).
    pub expanded: usize,
    /// Accumulated reward of the goal node.
    pub value: i32,
}

impl<O: Copy> Solution<O> {
    /// Walk parent links from `goal` back to the root, collecting the
    /// producing operators, then reverse them into execution order.
    pub(crate) fn reconstruct<S>(goal: &Rc<Node<S, O>>, expanded: usize) -> Self {
        let mut ops = Vec::with_capacity(goal.depth as usize);
        let mut cur: &Node<S, O> = goal.as_ref();
        while let Some(parent) = cur.parent.as_deref() {
            if let Some(op) = cur.op {
                ops.push(op);
            }
            cur = parent;
        }
        // Every non-root node records its producing operator, so the walk
        // must cover exactly `depth` links.
        debug_assert_eq!(ops.len(), goal.depth as usize);
        ops.reverse();
        Self {
            ops,
            expanded,
            value: goal.value,
        }
    }
}
