//! An ordered set backed by an avl tree.
//!
//! # Examples
//! ```
//! use avl_set::avl_tree::AvlSet;
//!
//! let set: AvlSet<u32> = vec![10, 20, 30].into_iter().collect();
//! assert_eq!(set.preorder().collect::<Vec<&u32>>(), vec![&20, &10, &30]);
//! ```

pub mod avl_tree;
