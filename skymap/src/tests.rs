/*
 * Created on Sat Feb 24 2024
 *
 * This file is a part of Skymap
 * Skymap is a free and open-source ordered indexed map library written by
 * Sayan Nandan ("the Author") with the vision to provide a positionally
 * addressable associative container without compromising on correctness
 * or performance.
 *
 * Copyright (c) 2024, Sayan Nandan <ohsayan@outlook.com>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 *
*/

mod cmp_combinators {
    use {
        crate::cmp::{self, Comparator, Natural, NullsFirst, NullsLast, Transformed},
        core::cmp::Ordering,
    };

    #[test]
    fn natural_order() {
        assert_eq!(Natural.compare(&1, &2), Ordering::Less);
        assert_eq!(Natural.compare(&2, &2), Ordering::Equal);
        assert_eq!(Natural.compare(&3, &2), Ordering::Greater);
        assert_eq!(Natural.compare("aa", "ab"), Ordering::Less);
    }

    #[test]
    fn reversed_is_a_sign_flip() {
        let fwd = Natural;
        let rev = Comparator::<u32>::reversed(Natural);
        for a in 0..8u32 {
            for b in 0..8u32 {
                assert_eq!(rev.compare(&a, &b), fwd.compare(&a, &b).reverse());
            }
        }
    }

    #[test]
    fn chained_breaks_ties() {
        // order by length first, then lexicographically
        let c = Transformed::new(|s: &&str| s.len(), Natural).then(Natural);
        assert_eq!(c.compare(&"a", &"zz"), Ordering::Less);
        assert_eq!(c.compare(&"bb", &"aa"), Ordering::Greater);
        assert_eq!(c.compare(&"aa", &"aa"), Ordering::Equal);
    }

    #[test]
    fn nulls_first_and_last() {
        let first = NullsFirst::new(Natural);
        let last = NullsLast::new(Natural);
        assert_eq!(first.compare(&None::<u32>, &Some(1)), Ordering::Less);
        assert_eq!(first.compare(&Some(1), &None), Ordering::Greater);
        assert_eq!(first.compare(&None::<u32>, &None), Ordering::Equal);
        assert_eq!(first.compare(&Some(1), &Some(2)), Ordering::Less);
        assert_eq!(last.compare(&None::<u32>, &Some(1)), Ordering::Greater);
        assert_eq!(last.compare(&Some(1), &None), Ordering::Less);
        assert_eq!(last.compare(&Some(2), &Some(1)), Ordering::Greater);
    }

    #[test]
    fn closures_are_comparators() {
        let rev = |a: &u32, b: &u32| b.cmp(a);
        assert_eq!(rev.compare(&1, &2), Ordering::Greater);
        assert_eq!(cmp::min(3, 9, &rev), 9);
        assert_eq!(cmp::max(3, 9, &rev), 3);
    }

    #[test]
    fn min_max_ties_pick_the_second_operand() {
        let by_first = Transformed::new(|t: &(u32, &str)| t.0, Natural);
        assert_eq!(cmp::min((1, "a"), (1, "b"), &by_first).1, "b");
        assert_eq!(cmp::max((1, "a"), (1, "b"), &by_first).1, "b");
        assert_eq!(cmp::min((0, "a"), (1, "b"), &by_first).1, "a");
        assert_eq!(cmp::max((0, "a"), (1, "b"), &by_first).1, "b");
    }
}

mod transformed_index {
    use crate::{
        idx::{IndexBaseSpec, IndexSTSeqDef, STIndex, STIndexPos, STIndexSeq},
        transform::TransformedIndex,
    };

    fn upper(s: String) -> String {
        s.to_uppercase()
    }

    fn dbl(v: u32) -> u32 {
        v * 2
    }

    #[test]
    fn transforms_incoming_entries() {
        let mut tidx =
            TransformedIndex::transforming(IndexSTSeqDef::<String, u32>::idx_init(), upper, dbl);
        assert_eq!(tidx.upsert("a".to_owned(), 1), None);
        assert_eq!(tidx.get("A"), Some(&2));
        assert_eq!(tidx.get("a"), None);
        assert_eq!(tidx.index_of("A"), Some(0));
        assert_eq!(tidx.len(), 1);
    }

    #[test]
    fn transforming_leaves_existing_entries() {
        let mut idx = IndexSTSeqDef::<String, u32>::idx_init();
        let _ = idx.st_upsert("a".to_owned(), 1);
        let _ = idx.st_upsert("b".to_owned(), 2);
        let mut tidx = TransformedIndex::transforming(idx, upper, dbl);
        assert_eq!(tidx.upsert("c".to_owned(), 3), None);
        let got: Vec<String> = tidx.inner().stseq_ord_key().cloned().collect();
        assert_eq!(got, vec!["a".to_owned(), "b".to_owned(), "C".to_owned()]);
        assert_eq!(tidx.get("a"), Some(&1));
        assert_eq!(tidx.get("C"), Some(&6));
    }

    #[test]
    fn transformed_redrives_existing_entries() {
        let mut idx = IndexSTSeqDef::<String, u32>::idx_init();
        let _ = idx.st_upsert("a".to_owned(), 1);
        let _ = idx.st_upsert("b".to_owned(), 2);
        let tidx = TransformedIndex::transformed(idx, upper, dbl);
        let got: Vec<String> = tidx.inner().stseq_ord_key().cloned().collect();
        assert_eq!(got, vec!["A".to_owned(), "B".to_owned()]);
        assert_eq!(tidx.get("A"), Some(&2));
        assert_eq!(tidx.get("B"), Some(&4));
        assert_eq!(tidx.get("a"), None);
    }

    #[test]
    fn positional_writes_transform_too() {
        let mut tidx =
            TransformedIndex::transforming(IndexSTSeqDef::<String, u32>::idx_init(), upper, dbl);
        assert_eq!(tidx.upsert("a".to_owned(), 1), None);
        tidx.upsert_all_at(0, vec![("b".to_owned(), 2), ("c".to_owned(), 3)])
            .unwrap();
        let got: Vec<String> = tidx.inner().stseq_ord_key().cloned().collect();
        assert_eq!(got, vec!["B".to_owned(), "C".to_owned(), "A".to_owned()]);
        assert_eq!(tidx.set_value_at(0, 10).unwrap(), 4);
        assert_eq!(tidx.inner().stpos_value_at(0).unwrap(), &20);
    }

    #[test]
    fn removals_pass_through() {
        let mut tidx =
            TransformedIndex::transforming(IndexSTSeqDef::<String, u32>::idx_init(), upper, dbl);
        let _ = tidx.upsert("a".to_owned(), 1);
        let _ = tidx.upsert("b".to_owned(), 2);
        assert_eq!(tidx.remove("A"), Some(2));
        assert_eq!(tidx.remove("a"), None);
        assert_eq!(tidx.remove_at(0).unwrap(), 4);
        assert!(tidx.is_empty());
        let idx = tidx.into_inner();
        assert_eq!(idx.st_len(), 0);
    }
}
