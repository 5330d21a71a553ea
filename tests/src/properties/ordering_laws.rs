//! # Ordering Laws
//!
//! Property tests over randomly generated resolvable registries. The
//! generator hands every entry a hidden rank and only allows constraints
//! that point across ranks in one direction, so the registry is acyclic and
//! every reference resolvable by construction; the laws then check what
//! resolution promises for any such input.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use entry_ordering::domain::invariants;
    use entry_ordering::{Entry, Registry};

    /// Registry of 2 to 10 uniquely named entries whose constraints are
    /// satisfiable by construction: `after` only names entries of lower
    /// rank, `before` only entries of higher rank.
    fn arb_resolvable_registry() -> impl Strategy<Value = Registry<u32>> {
        prop::collection::btree_set("[a-z]{2,8}", 2..=10)
            .prop_flat_map(|name_set| {
                let names: Vec<String> = name_set.into_iter().collect();
                let count = names.len();
                let masks = prop::collection::vec(
                    prop::collection::vec(any::<bool>(), count),
                    count,
                );
                (Just(names).prop_shuffle(), masks)
            })
            .prop_map(|(ranked_names, masks)| {
                let mut registry = Registry::new();
                for (rank, name) in ranked_names.iter().enumerate() {
                    let mut after: Vec<String> = Vec::new();
                    let mut before: Vec<String> = Vec::new();
                    for (other, selected) in masks[rank].iter().enumerate() {
                        if !selected {
                            continue;
                        }
                        if other < rank {
                            after.push(ranked_names[other].clone());
                        } else if other > rank {
                            before.push(ranked_names[other].clone());
                        }
                    }
                    registry
                        .insert(Entry::between(name.clone(), rank as u32, after, before))
                        .unwrap();
                }
                registry
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// Law: resolution emits each registered entry exactly once.
        #[test]
        fn law_resolution_is_a_permutation(registry in arb_resolvable_registry()) {
            let order = registry.clone().resolve().unwrap();
            prop_assert!(invariants::invariant_permutation(&registry, &order));
        }

        /// Law: every after/before constraint holds in the output.
        #[test]
        fn law_every_constraint_is_respected(registry in arb_resolvable_registry()) {
            let order = registry.clone().resolve().unwrap();
            prop_assert!(invariants::invariant_constraints_respected(&registry, &order));
        }

        /// Law: resolving the same registry twice gives identical output.
        #[test]
        fn law_resolution_is_deterministic(registry in arb_resolvable_registry()) {
            let first = registry.clone().resolve().unwrap();
            let second = registry.resolve().unwrap();
            prop_assert_eq!(first, second);
        }

        /// Law: among all valid arrangements the engine picks the canonical
        /// one, emitting the smallest ready name at every step.
        #[test]
        fn law_output_is_canonical(registry in arb_resolvable_registry()) {
            let order = registry.clone().resolve().unwrap();
            prop_assert!(invariants::invariant_lexicographic_tie_break(&registry, &order));
        }

        /// Law: verify accepts exactly the registries resolve accepts.
        #[test]
        fn law_verify_agrees_with_resolve(registry in arb_resolvable_registry()) {
            prop_assert!(registry.verify().is_ok());
            prop_assert!(registry.resolve().is_ok());
        }

        /// Law: merging two halves resolves the same regardless of which
        /// half absorbs the other.
        #[test]
        fn law_merge_is_order_insensitive(registry in arb_resolvable_registry()) {
            let mut left: Registry<u32> = Registry::new();
            let mut right: Registry<u32> = Registry::new();
            for (index, entry) in registry.iter().enumerate() {
                let half = if index % 2 == 0 { &mut left } else { &mut right };
                half.insert(entry.clone()).unwrap();
            }

            let left_first = left.clone().merge(right.clone()).unwrap().resolve().unwrap();
            let right_first = right.merge(left).unwrap().resolve().unwrap();
            prop_assert_eq!(left_first, right_first);
        }

        /// Law: a chain of payloads keeps its internal run order.
        #[test]
        fn law_chain_preserves_run_order(payloads in prop::collection::vec(any::<u32>(), 1..8)) {
            let mut registry: Registry<u32> = Registry::new();
            registry
                .insert_chain(
                    "run",
                    payloads.clone(),
                    std::iter::empty::<&str>(),
                    std::iter::empty::<&str>(),
                )
                .unwrap();

            let order = registry.resolve().unwrap();
            prop_assert_eq!(order.len(), payloads.len());
            for index in 1..payloads.len() {
                let previous = order.position(&format!("run.{}", index - 1)).unwrap();
                let current = order.position(&format!("run.{index}")).unwrap();
                prop_assert!(previous < current);
            }
        }
    }
}
