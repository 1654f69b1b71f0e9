use ubst::{Tree, TreeError};

use quickcheck_macros::quickcheck;
use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a hashset.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut HashSet<K>)
where
    K: std::hash::Hash + Eq + Clone + Ord,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Remove(k) => {
                bst.delete(k);
                set.remove(k);
            }
        }
    }
}

fn in_order<K: Clone>(tree: &Tree<K>) -> Vec<K> {
    let mut keys = Vec::new();
    tree.walk(|k| keys.push(k.clone()));
    keys
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = HashSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && set.iter().all(|key| tree.contains(key))
}

#[quickcheck]
fn walk_is_strictly_ascending(ops: Vec<Op<i16>>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree, &mut HashSet::new());

    let keys = in_order(&tree);
    keys.len() == tree.len() && keys.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter()
        .all(|x| tree.contains(x) && tree.find(x).map(|n| n.key()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x) && tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn deleting_absent_key_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().filter(|x| *x != missing).collect();
    let before = in_order(&tree);
    let height = tree.height();

    !tree.delete(&missing) && in_order(&tree) == before && tree.height() == height
}

#[quickcheck]
fn deleting_everything_empties(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for x in &xs {
        tree.delete(x);
    }

    tree.is_empty()
        && tree.len() == 0
        && tree.min() == Err(TreeError::EmptyTree)
        && tree.max() == Err(TreeError::EmptyTree)
}

#[quickcheck]
fn min_and_max_match_extremes(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.min().ok() == xs.iter().min() && tree.max().ok() == xs.iter().max()
}

#[quickcheck]
fn iter_matches_walk(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.iter().copied().collect::<Vec<_>>() == in_order(&tree) && tree.iter().len() == tree.len()
}

#[test]
fn round_trip_example() {
    let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();

    assert_eq!(in_order(&tree), [1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(tree.min(), Ok(&1));
    assert_eq!(tree.max(), Ok(&9));
}

#[test]
fn delete_root_example() {
    let mut tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();

    assert!(tree.delete(&5));
    assert_eq!(in_order(&tree), [1, 3, 4, 7, 8, 9]);
    assert_eq!(tree.root().map(|n| *n.key()), Some(7));
}

#[test]
fn empty_tree_has_no_extremes() {
    let tree: Tree<u8> = Tree::new();

    assert_eq!(tree.min(), Err(TreeError::EmptyTree));
    assert_eq!(tree.max(), Err(TreeError::EmptyTree));
}
