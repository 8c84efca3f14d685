use super::*;

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use std::collections::BTreeSet;

/// Checks every structural property that must hold whatever the removal
/// policy: ordering by both oracles, cached heights, counts and traversal
/// completeness.
fn validate_tree<C: Comparator<i16>>(t: &AvlTree<i16, C>) {
    assert!(t.is_valid_bst(), "ordering oracle rejected tree");
    assert_eq!(t.validate(), Ok(()));
    assert_eq!(t.size(), t.len(), "reachable nodes must match AvlTree::len");
    assert_eq!(t.height(), t.max_depth(), "cached root height must match depth");
    assert!(t.max_depth() <= t.size());

    let inorder: Vec<i16> = t.iter().copied().collect();
    assert!(
        inorder.windows(2).all(|w| w[0] < w[1]),
        "inorder must be strictly ascending"
    );

    let mut counts = [0usize; 3];
    t.traverse_inorder(|_| counts[0] += 1);
    t.traverse_preorder(|_| counts[1] += 1);
    t.traverse_postorder(|_| counts[2] += 1);
    assert_eq!(counts, [t.len(); 3]);
}

fn avl_height_bound(n: usize) -> usize {
    (1.44 * ((n + 2) as f64).log2()).ceil() as usize
}

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    #[proptest(weight = 5)]
    Insert(#[proptest(strategy = "-64i16..64")] i16),
    #[proptest(weight = 3)]
    Remove(#[proptest(strategy = "-64i16..64")] i16),
    #[proptest(weight = 2)]
    Lookup(#[proptest(strategy = "-64i16..64")] i16),
}

fn run_against_model<C: Comparator<i16>>(mut t: AvlTree<i16, C>, ops: Vec<Op>) -> Result<(), TestCaseError> {
    let mut m: BTreeSet<i16> = BTreeSet::new();

    for op in ops {
        match op {
            Op::Insert(k) => {
                prop_assert_eq!(t.insert(k), m.insert(k));
            }
            Op::Remove(k) => {
                prop_assert_eq!(t.remove(&k), m.take(&k));
            }
            Op::Lookup(k) => {
                prop_assert_eq!(t.get(&k).copied(), m.get(&k).copied());
                prop_assert_eq!(t.contains(&k), m.contains(&k));
            }
        }

        prop_assert_eq!(t.len(), m.len());
        validate_tree(&t);
    }

    let got: Vec<i16> = t.iter().copied().collect();
    let expected: Vec<i16> = m.iter().copied().collect();
    prop_assert_eq!(got, expected);
    prop_assert_eq!(t.min().copied(), m.first().copied());
    prop_assert_eq!(t.max().copied(), m.last().copied());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 50_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence_splice(ops in prop::collection::vec(any::<Op>(), 0..=400)) {
        run_against_model(AvlTree::new(), ops)?;
    }

    #[test]
    fn prop_equivalence_rebalance(ops in prop::collection::vec(any::<Op>(), 0..=400)) {
        let t = AvlTree::with_config(NaturalOrder, TreeConfig::rebalancing());
        run_against_model(t, ops)?;
    }

    #[test]
    fn prop_insert_only_is_balanced(keys in prop::collection::vec(any::<i32>(), 0..=2000)) {
        let mut root: Link<i32> = None;
        let mut distinct = BTreeSet::new();
        for k in keys {
            root = insert(root, k, &NaturalOrder);
            distinct.insert(k);
        }

        prop_assert_eq!(validate_balanced(root.as_deref(), &NaturalOrder), Ok(()));
        prop_assert!(is_valid_bst(root.as_deref(), &NaturalOrder));
        prop_assert_eq!(size(root.as_deref()), distinct.len());
        prop_assert!(height(root.as_deref()) <= avl_height_bound(distinct.len()));

        let mut seen = Vec::with_capacity(distinct.len());
        traverse_inorder(root.as_deref(), |k| seen.push(*k));
        prop_assert_eq!(seen, distinct.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn prop_duplicate_insert_is_idempotent(
        keys in prop::collection::vec(any::<u16>(), 1..=300),
        pick in any::<prop::sample::Index>(),
    ) {
        let root = keys.iter().fold(None, |r, &k| insert(r, k, &NaturalOrder));
        let before: Vec<u16> = iter(root.as_deref()).copied().collect();
        let before_size = size(root.as_deref());

        let dup = keys[pick.index(keys.len())];
        let root = insert(root, dup, &NaturalOrder);

        prop_assert_eq!(size(root.as_deref()), before_size);
        prop_assert_eq!(iter(root.as_deref()).copied().collect::<Vec<_>>(), before);
    }

    #[test]
    fn prop_remove_present_and_absent(
        keys in prop::collection::btree_set(0u16..1000, 1..=300),
        pick in any::<prop::sample::Index>(),
        absent in 1000u16..2000,
    ) {
        let keys: Vec<u16> = keys.into_iter().collect();
        let root = keys.iter().fold(None, |r, &k| insert(r, k, &NaturalOrder));
        let n = size(root.as_deref());

        let root = remove(root, &absent, &NaturalOrder);
        prop_assert_eq!(size(root.as_deref()), n);
        prop_assert_eq!(iter(root.as_deref()).copied().collect::<Vec<_>>(), keys.clone());

        let victim = keys[pick.index(keys.len())];
        let mut released = None;
        let root = remove_with(root, &victim, &NaturalOrder, |v| released = Some(v));
        prop_assert_eq!(released, Some(victim));
        prop_assert_eq!(size(root.as_deref()), n - 1);
        prop_assert!(is_valid_bst(root.as_deref(), &NaturalOrder));
        prop_assert_eq!(validate(root.as_deref(), &NaturalOrder), Ok(()));

        let expected: Vec<u16> = keys.iter().copied().filter(|&k| k != victim).collect();
        prop_assert_eq!(iter(root.as_deref()).copied().collect::<Vec<_>>(), expected);
    }
}

fn for_each_permutation<T: Clone>(items: &[T], mut f: impl FnMut(Vec<T>)) {
    fn rec<T: Clone>(items: &[T], used: &mut [bool], out: &mut Vec<T>, f: &mut impl FnMut(Vec<T>)) {
        if out.len() == items.len() {
            f(out.clone());
            return;
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            out.push(items[i].clone());
            rec(items, used, out, f);
            out.pop();
            used[i] = false;
        }
    }

    let mut used = vec![false; items.len()];
    let mut out = Vec::with_capacity(items.len());
    rec(items, &mut used, &mut out, &mut f);
}

#[test]
fn exhaustive_insert_order_small_set() {
    let keys = ["a", "b", "c", "aa", "ab", "ba", "bb"];
    let mut sorted = keys.to_vec();
    sorted.sort_unstable();

    for_each_permutation(&keys, |perm| {
        let root = perm.into_iter().fold(None, |r, k| insert(r, k, &NaturalOrder));
        assert_eq!(validate_balanced(root.as_deref(), &NaturalOrder), Ok(()));
        assert!(height(root.as_deref()) <= avl_height_bound(keys.len()));
        assert_eq!(iter(root.as_deref()).copied().collect::<Vec<_>>(), sorted);
    });
}

#[test]
fn exhaustive_remove_order_small_set() {
    let keys: Vec<i32> = vec![50, 30, 20, 40, 70, 60, 80];

    // Insert in a fixed order, then remove in all permutations.
    let base = keys.iter().fold(None, |r, &k| insert(r, k, &NaturalOrder));

    for_each_permutation(&keys, |perm| {
        let mut root = base.clone();
        let mut m: BTreeSet<i32> = keys.iter().copied().collect();

        for k in perm {
            root = remove(root, &k, &NaturalOrder);
            m.remove(&k);
            assert_eq!(size(root.as_deref()), m.len());
            assert_eq!(validate(root.as_deref(), &NaturalOrder), Ok(()));
            assert_eq!(
                iter(root.as_deref()).copied().collect::<Vec<_>>(),
                m.iter().copied().collect::<Vec<_>>()
            );
        }
        assert!(root.is_none());
    });
}

#[test]
fn randomized_insert_remove_lookup() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    for config in [TreeConfig::default(), TreeConfig::rebalancing()] {
        let mut rng = StdRng::seed_from_u64(7);
        let mut t = AvlTree::with_config(NaturalOrder, config);
        let mut m: BTreeSet<u32> = BTreeSet::new();

        for _ in 0..20_000 {
            let k: u32 = rng.gen_range(0..2_000);
            match rng.gen_range(0..100) {
                0..=49 => assert_eq!(t.insert(k), m.insert(k)),
                50..=79 => assert_eq!(t.remove(&k), m.take(&k)),
                _ => assert_eq!(t.get(&k), m.get(&k)),
            }
        }

        assert_eq!(t.len(), m.len());
        assert_eq!(t.validate(), Ok(()));
        assert!(t.iter().eq(m.iter()));
    }
}
