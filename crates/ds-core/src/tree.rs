//! N-ary tree.
//!
//! Nodes are stored in an arena owned by the [`Tree`] and addressed with
//! [`NodeId`] handles. Each node knows its parent and its ordered children,
//! so the tree can be walked in either direction without shared ownership.

use std::fmt;

use crate::error::TreeError;

/// Handle to a node inside one particular [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Node<T> {
    value: T,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tree<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Tree<T> {
    /// Creates a tree holding only a root node.
    pub fn new(value: T) -> Self {
        Self {
            nodes: vec![Node {
                value,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id.0).map(|n| &n.value)
    }

    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id.0).map(|n| &mut n.value)
    }

    /// # Errors
    ///
    /// [`TreeError::UnknownNode`] if `id` is not a node of this tree.
    pub fn set(&mut self, id: NodeId, value: T) -> Result<(), TreeError> {
        let slot = self.value_mut(id).ok_or(TreeError::UnknownNode(id))?;
        *slot = value;
        Ok(())
    }

    /// The parent of `id`; `None` for the root or an unknown handle.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|n| n.parent)
    }

    /// Children of `id` in insertion order; empty for an unknown handle.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.children(id).is_empty()
    }

    /// Appends a new child under `parent`.
    ///
    /// # Errors
    ///
    /// [`TreeError::UnknownNode`] if `parent` is not a node of this tree.
    pub fn add_child(&mut self, parent: NodeId, value: T) -> Result<NodeId, TreeError> {
        self.check(parent)?;
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            value,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    /// Appends one child per value, in order.
    ///
    /// # Errors
    ///
    /// [`TreeError::UnknownNode`] if `parent` is not a node of this tree.
    pub fn add_children<I>(&mut self, parent: NodeId, values: I) -> Result<Vec<NodeId>, TreeError>
    where
        I: IntoIterator<Item = T>,
    {
        self.check(parent)?;
        values
            .into_iter()
            .map(|value| self.add_child(parent, value))
            .collect()
    }

    /// Moves all of `subtree` under `parent`, keeping its shape, and returns
    /// the new handle of the subtree's root. Handles into `subtree` are not
    /// valid in `self`.
    ///
    /// # Errors
    ///
    /// [`TreeError::UnknownNode`] if `parent` is not a node of this tree.
    pub fn graft(&mut self, parent: NodeId, subtree: Tree<T>) -> Result<NodeId, TreeError> {
        self.check(parent)?;
        let offset = self.nodes.len();
        let shift = move |id: NodeId| NodeId(id.0 + offset);

        self.nodes.extend(subtree.nodes.into_iter().map(|node| Node {
            value: node.value,
            parent: Some(node.parent.map_or(parent, shift)),
            children: node.children.into_iter().map(shift).collect(),
        }));

        let grafted = NodeId(offset);
        self.nodes[parent.0].children.push(grafted);
        Ok(grafted)
    }

    /// Nodes without children, depth-first and left to right.
    pub fn leaves(&self) -> Vec<NodeId> {
        let mut leaves = Vec::new();
        let mut stack = vec![self.root()];

        while let Some(id) = stack.pop() {
            let children = self.children(id);
            if children.is_empty() {
                leaves.push(id);
            } else {
                stack.extend(children.iter().rev().copied());
            }
        }

        leaves
    }

    /// Values of [`Tree::leaves`], in the same order.
    pub fn leaf_values(&self) -> impl Iterator<Item = &T> {
        self.leaves()
            .into_iter()
            .filter_map(move |id| self.value(id))
    }

    fn check(&self, id: NodeId) -> Result<(), TreeError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(TreeError::UnknownNode(id))
        }
    }
}
