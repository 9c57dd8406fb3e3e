use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::interval::Interval;

/// A tree node: either a leaf holding interval records, or an internal
/// node holding separator intervals and the children they route into.
///
/// A node's kind is its variant. Nothing ever flips a leaf to internal in
/// place; the root leaf is *replaced* by an internal node when it first
/// splits.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Node<K> {
    Leaf(Vec<Interval<K>>),
    Internal {
        /// Routing thresholds; only their `start` field is consulted.
        separators: Vec<Interval<K>>,
        children: Vec<Node<K>>,
    },
}

impl<K> Node<K> {
    /// A node starts its life as an empty leaf.
    pub fn new() -> Node<K> {
        Node::Leaf(Vec::new())
    }

    pub fn height(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Internal { children, .. } => {
                1 + children.iter().map(Node::height).max().unwrap_or(0)
            }
        }
    }
}

impl<K> fmt::Display for Node<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Leaf(intervals) => {
                write!(f, " {{")?;
                for interval in intervals {
                    write!(f, " {}", interval)?;
                }
                write!(f, " }} ")
            }
            Node::Internal {
                separators,
                children,
            } => {
                write!(f, " {{")?;
                for separator in separators {
                    write!(f, " {}", separator)?;
                }
                write!(f, " |")?;
                for child in children {
                    write!(f, "{}", child)?;
                }
                write!(f, " }} ")
            }
        }
    }
}
