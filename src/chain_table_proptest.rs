#![cfg(test)]

// Property tests for ChainTable kept inside the crate so they can assert
// structural invariants through `chain` alongside the public surface.

use crate::{ChainTable, DEFAULT_BUCKETS};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::collections::{BTreeSet, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Set(usize, u16),
    Get(usize),
    Remove(usize),
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            (idx.clone(), any::<u16>()).prop_map(|(i, v)| OpI::Set(i, v)),
            idx.clone().prop_map(OpI::Get),
            idx.clone().prop_map(OpI::Remove),
            Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Shared state-machine driver, checked against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - `set` is insert-or-update: value parity with the model, len parity.
// - `get` parity with the model for present and absent keys.
// - `remove` returns the owned pair iff the model held the key.
// - Chains partition the entries: every entry is reachable from exactly
//   one bucket, sits in the bucket its key hashes to, and no chain holds
//   a duplicate key.
// - `iter` equals the concatenation of the chains in bucket order.
fn run_scenario(
    bucket_count: usize,
    pool: &[String],
    ops: &[OpI],
) -> Result<(), TestCaseError> {
    let mut sut = ChainTable::with_buckets(bucket_count);
    let mut model: HashMap<String, String> = HashMap::new();

    for op in ops {
        match op {
            OpI::Set(i, v) => {
                let k = &pool[*i];
                let v = v.to_string();
                sut.set(k, &v);
                model.insert(k.clone(), v);
            }
            OpI::Get(i) => {
                let k = &pool[*i];
                prop_assert_eq!(sut.get(k), model.get(k).map(String::as_str));
            }
            OpI::Remove(i) => {
                let k = &pool[*i];
                let got = sut.remove(k);
                let want = model.remove(k).map(|v| (k.clone(), v));
                prop_assert_eq!(got, want);
            }
            OpI::Iterate => {
                let sut_keys: BTreeSet<String> =
                    sut.iter().map(|(k, _)| k.to_string()).collect();
                let model_keys: BTreeSet<String> = model.keys().cloned().collect();
                prop_assert_eq!(sut_keys, model_keys);
            }
        }

        // Post-conditions after each op
        // 1) Size parity
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());

        // 2) Chains partition the entries
        let mut reachable = 0usize;
        let mut concat: Vec<(String, String)> = Vec::new();
        for b in 0..sut.bucket_count() {
            let mut chain_keys: BTreeSet<String> = BTreeSet::new();
            for (k, v) in sut.chain(b) {
                prop_assert_eq!(sut.bucket_of(k), b, "entry in wrong bucket");
                prop_assert!(chain_keys.insert(k.to_string()), "duplicate key in chain");
                prop_assert_eq!(model.get(k).map(String::as_str), Some(v));
                concat.push((k.to_string(), v.to_string()));
                reachable += 1;
            }
        }
        prop_assert_eq!(reachable, model.len());

        // 3) Flat iteration is the chains in bucket order
        let flat: Vec<(String, String)> = sut
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        prop_assert_eq!(flat, concat);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        run_scenario(DEFAULT_BUCKETS, &pool, &ops)?;
    }
}

// Single-bucket variant: every key shares one chain, stressing the
// head/middle/tail relink paths on every mutation.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_single_bucket((pool, ops) in arb_scenario()) {
        run_scenario(1, &pool, &ops)?;
    }
}
