use crate::avl_tree::node::Node;
use log::trace;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

/// Where an inserted key ended up relative to the root of the subtree it was inserted into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// The key was already in the subtree; nothing changed.
    Existing,
    /// The subtree was empty and the key became its root.
    Root,
    Left,
    Right,
}

/// The rebalancing case applied at a node whose balance factor left `[-1, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    LeftLeft,
    RightRight,
    LeftRight,
    RightLeft,
}

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// `child_placement` is where the key landed relative to the child that was descended into, so
// `Placement::Left` under a left-heavy node means the key is less than the left child's key.
fn classify(balance: i32, child_placement: Placement) -> Option<Rotation> {
    match child_placement {
        Placement::Left if balance > 1 => Some(Rotation::LeftLeft),
        Placement::Right if balance > 1 => Some(Rotation::LeftRight),
        Placement::Right if balance < -1 => Some(Rotation::RightRight),
        Placement::Left if balance < -1 => Some(Rotation::RightLeft),
        _ => None,
    }
}

fn rebalance<T>(mut node: Box<Node<T>>, child_placement: Placement) -> Box<Node<T>> {
    node.update();

    let rotation = match classify(node.balance(), child_placement) {
        Some(rotation) => rotation,
        None => return node,
    };

    trace!("rebalancing with {:?} rotation", rotation);
    match rotation {
        Rotation::LeftLeft => rotate_right(node),
        Rotation::RightRight => rotate_left(node),
        Rotation::LeftRight => {
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        },
        Rotation::RightLeft => {
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        },
    }
}

/// Inserts `key` into `tree`, consuming it and returning the root of the rebalanced subtree
/// together with where the key was placed relative to the root that was passed in.
///
/// If `key` is already present the subtree is handed back untouched with
/// `Placement::Existing`.
pub fn insert<T>(tree: Tree<T>, key: T) -> (Box<Node<T>>, Placement)
where
    T: Ord,
{
    let mut node = match tree {
        Some(node) => node,
        None => return (Box::new(Node::new(key)), Placement::Root),
    };

    let (placement, child_placement) = match key.cmp(&node.key) {
        Ordering::Less => {
            let (child, child_placement) = insert(node.left.take(), key);
            node.left = Some(child);
            (Placement::Left, child_placement)
        },
        Ordering::Greater => {
            let (child, child_placement) = insert(node.right.take(), key);
            node.right = Some(child);
            (Placement::Right, child_placement)
        },
        Ordering::Equal => return (node, Placement::Existing),
    };

    if child_placement == Placement::Existing {
        return (node, Placement::Existing);
    }

    (rebalance(node, child_placement), placement)
}

pub fn get<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(&node.key) {
            Ordering::Less => get(&node.left, key),
            Ordering::Greater => get(&node.right, key),
            Ordering::Equal => Some(&node.key),
        }
    })
}

pub fn ceil<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(&node.key) {
            Ordering::Greater => ceil(&node.right, key),
            Ordering::Less => {
                match ceil(&node.left, key) {
                    None => Some(&node.key),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.key),
        }
    })
}

pub fn floor<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(&node.key) {
            Ordering::Less => floor(&node.left, key),
            Ordering::Greater => {
                match floor(&node.right, key) {
                    None => Some(&node.key),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.key),
        }
    })
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}
