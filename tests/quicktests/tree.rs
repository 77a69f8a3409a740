use wordtrack::iter::TreeCursor;
use wordtrack::tree::Tree;

use std::collections::{BTreeSet, HashSet};

quickcheck::quickcheck! {
    fn inorder_is_strictly_ascending(xs: Vec<i32>) -> bool {
        let tree: Tree<i32> = xs.into_iter().collect();
        let values: Vec<_> = tree.inorder_iter().collect();

        values.windows(2).all(|w| w[0] < w[1])
    }
}

quickcheck::quickcheck! {
    fn len_matches_every_traversal(xs: Vec<i8>) -> bool {
        let tree: Tree<i8> = xs.into_iter().collect();

        tree.inorder_iter().count() == tree.len()
            && tree.preorder_iter().count() == tree.len()
            && tree.postorder_iter().count() == tree.len()
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<i8> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn duplicate_add_changes_nothing(xs: Vec<i8>, pick: usize) -> bool {
        if xs.is_empty() {
            return true;
        }
        let mut tree: Tree<i8> = xs.iter().copied().collect();
        let before_len = tree.len();
        let before: Vec<i8> = tree.preorder_iter().copied().collect();

        let dup = xs[pick % xs.len()];
        !tree.add(dup)
            && tree.len() == before_len
            && tree.contains(&dup)
            && tree.preorder_iter().copied().eq(before)
    }
}

quickcheck::quickcheck! {
    fn remove_min_drains_ascending(xs: Vec<i8>) -> bool {
        let mut tree: Tree<i8> = xs.iter().copied().collect();
        let expected: Vec<i8> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();

        let mut drained = Vec::new();
        while let Some(x) = tree.remove_min() {
            if tree.contains(&x) {
                return false;
            }
            drained.push(x);
        }
        drained == expected && tree.is_empty() && tree.height() == 0
    }
}

quickcheck::quickcheck! {
    fn remove_max_drains_descending(xs: Vec<i8>) -> bool {
        let mut tree: Tree<i8> = xs.iter().copied().collect();
        let expected: Vec<i8> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().rev().collect();

        let mut drained = Vec::new();
        while let Some(x) = tree.remove_max() {
            drained.push(x);
        }
        drained == expected
    }
}

quickcheck::quickcheck! {
    fn cursor_protocol_agrees_with_iterator(xs: Vec<i8>) -> bool {
        let tree: Tree<i8> = xs.into_iter().collect();
        let mut cursor = tree.postorder_iter();
        let mut via_cursor = Vec::new();
        while cursor.has_next() {
            match cursor.try_next() {
                Ok(x) => via_cursor.push(*x),
                Err(_) => return false,
            }
        }

        cursor.try_next().is_err() && tree.postorder_iter().copied().eq(via_cursor)
    }
}

#[test]
fn documented_traversal_orders() {
    let tree: Tree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();

    assert_eq!(
        tree.postorder_iter().copied().collect::<Vec<_>>(),
        [1, 4, 3, 7, 9, 8, 5]
    );
    assert_eq!(
        tree.preorder_iter().copied().collect::<Vec<_>>(),
        [5, 3, 1, 4, 8, 7, 9]
    );
    assert_eq!(
        tree.inorder_iter().copied().collect::<Vec<_>>(),
        [1, 3, 4, 5, 7, 8, 9]
    );
}

#[test]
fn documented_heights() {
    let mut tree = Tree::new();
    assert_eq!(tree.height(), 0);

    tree.add(5);
    assert_eq!(tree.height(), 1);

    tree.add(3);
    tree.add(1);
    assert_eq!(tree.height(), 3);
}
