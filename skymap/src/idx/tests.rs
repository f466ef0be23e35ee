/*
 * Created on Sun Feb 18 2024
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

use super::*;

mod idx_std_map {
    use {
        super::{IndexBaseSpec, STIndex},
        std::collections::HashMap,
    };

    #[test]
    fn simple_crud() {
        let mut m: HashMap<String, String> = HashMap::idx_init();
        assert!(m.st_insert("hello".to_owned(), "world".to_owned()));
        assert_eq!(m.st_get("hello").unwrap(), "world");
        assert_eq!(m.st_upsert("hello".to_owned(), "world2".to_owned()).unwrap(), "world");
        assert_eq!(m.st_len(), 1);
        assert_eq!(m.st_delete_return("hello").unwrap(), "world2");
        assert!(m.st_is_empty());
    }

    #[test]
    fn delete_if() {
        let mut m: HashMap<u32, u32> = HashMap::idx_init_cap(4);
        assert!(m.st_insert(1, 10));
        assert_eq!(m.st_delete_if(&1, |v| *v > 100), Some(false));
        assert_eq!(m.st_delete_if(&1, |v| *v == 10), Some(true));
        assert_eq!(m.st_delete_if(&1, |_| true), None);
    }
}

mod idx_st_seq_vec {
    use {
        super::{IndexBaseSpec, IndexSTSeqDef, STIndex, STIndexPos, STIndexSeq},
        crate::error::Error,
        rand::Rng,
        std::collections::HashMap,
    };

    #[cfg(not(miri))]
    const SPAM_CNT: usize = 8_192;
    #[cfg(miri)]
    const SPAM_CNT: usize = 128;

    type Index = IndexSTSeqDef<String, String>;

    /// Returns an index with keys `0..n` mapped to `"{i+1}"`, in ascending key order
    fn mkidx(n: usize) -> IndexSTSeqDef<usize, String> {
        let mut idx = IndexSTSeqDef::idx_init();
        for int in 0..n {
            assert!(idx.st_insert(int, (int + 1).to_string()));
        }
        idx
    }

    #[inline(always)]
    fn s(s: &str) -> String {
        s.to_owned()
    }

    fn keys(idx: &IndexSTSeqDef<usize, String>) -> Vec<usize> {
        idx.stseq_ord_key().copied().collect()
    }

    #[test]
    fn empty_init() {
        let idx = Index::idx_init();
        assert!(idx.st_is_empty());
        assert_eq!(idx.st_len(), 0);
        assert!(idx._verify_integrity());
    }

    #[test]
    fn simple_crud() {
        let mut idx = Index::idx_init();
        assert!(idx.st_insert(s("hello"), s("world")));
        assert_eq!(idx.st_get("hello").as_deref().unwrap(), "world");
        assert!(idx.st_update("hello", s("world2")));
        assert_eq!(idx.st_get("hello").as_deref().unwrap(), "world2");
        assert_eq!(idx.st_delete_return("hello").unwrap(), "world2");
        assert!(idx._verify_integrity());
    }

    #[test]
    fn spam_crud() {
        let mut idx = IndexSTSeqDef::idx_init();
        for int in 0..SPAM_CNT {
            assert!(idx.st_insert(int, int + 1));
            assert_eq!(*idx.st_get(&int).unwrap(), int + 1);
            assert!(idx.st_update(&int, int + 2));
            assert_eq!(*idx.st_get(&int).unwrap(), int + 2);
            assert_eq!(idx.st_delete_return(&int).unwrap(), int + 2);
        }
        assert!(idx._verify_integrity());
    }

    #[test]
    fn spam_read_nx() {
        let idx = IndexSTSeqDef::<usize, String>::idx_init();
        for int in SPAM_CNT..SPAM_CNT * 2 {
            assert!(idx.st_get(&int).is_none());
        }
    }

    #[test]
    fn spam_insert_ex() {
        let mut idx = mkidx(SPAM_CNT);
        for int in 0..SPAM_CNT {
            assert!(!idx.st_insert(int, (int + 2).to_string()));
        }
        assert_eq!(idx.st_len(), SPAM_CNT);
    }

    #[test]
    fn spam_update_nx() {
        let mut idx = IndexSTSeqDef::<usize, String>::idx_init();
        for int in 0..SPAM_CNT {
            assert!(!idx.st_update(&int, (int + 2).to_string()));
        }
    }

    #[test]
    fn spam_delete_nx() {
        let mut idx = IndexSTSeqDef::<usize, String>::idx_init();
        for int in 0..SPAM_CNT {
            assert!(!idx.st_delete(&int));
        }
    }

    #[test]
    fn upsert_append_order() {
        let mut idx = Index::idx_init();
        assert_eq!(idx.st_upsert(s("c"), s("3")), None);
        assert_eq!(idx.st_upsert(s("a"), s("1")), None);
        assert_eq!(idx.st_upsert(s("b"), s("2")), None);
        // updating never moves a key
        assert_eq!(idx.st_upsert(s("c"), s("III")), Some(s("3")));
        let got: Vec<String> = idx.stseq_ord_key().cloned().collect();
        assert_eq!(got, vec![s("c"), s("a"), s("b")]);
        assert_eq!(idx.stpos_value_at(0).unwrap(), "III");
        assert!(idx._verify_integrity());
    }

    #[test]
    fn insertion_law() {
        let mut idx = Index::idx_init();
        assert_eq!(idx.stpos_upsert_at(0, s("k1"), s("v1")).unwrap(), None);
        assert_eq!(idx.st_upsert(s("k2"), s("v2")), None);
        assert_eq!(idx.stpos_upsert_at(0, s("k0"), s("v0")).unwrap(), None);
        let got_k: Vec<String> = idx.stseq_ord_key().cloned().collect();
        let got_v: Vec<String> = idx.stseq_ord_value().cloned().collect();
        assert_eq!(got_k, vec![s("k0"), s("k1"), s("k2")]);
        assert_eq!(got_v, vec![s("v0"), s("v1"), s("v2")]);
        assert!(idx._verify_integrity());
    }

    #[test]
    fn update_in_place_law() {
        // an indexed upsert of an existing key updates the value at the key's own position,
        // no matter which (valid) index was passed
        for target in 0..=3usize {
            let mut idx = IndexSTSeqDef::<u64, String>::idx_init();
            assert_eq!(idx.st_upsert(1, s("1")), None);
            assert_eq!(idx.st_upsert(2, s("2")), None);
            assert_eq!(idx.st_upsert(3, s("3")), None);
            assert_eq!(idx.stpos_upsert_at(target, 1, s("One")).unwrap(), Some(s("1")));
            assert_eq!(idx.st_len(), 3);
            assert_eq!(idx.stpos_value_at(0).unwrap(), "One");
            assert_eq!(idx.stpos_index_of(&1), Some(0));
            let got: Vec<u64> = idx.stseq_ord_key().copied().collect();
            assert_eq!(got, vec![1, 2, 3]);
            assert!(idx._verify_integrity());
        }
    }

    #[test]
    fn bulk_insertion_law() {
        let mut idx = mkidx(3);
        let source: Vec<(usize, String)> = (0..5).map(|i| (i, format!("u{i}"))).collect();
        idx.stpos_upsert_all_at(3, source).unwrap();
        assert_eq!(keys(&idx), vec![0, 1, 2, 3, 4]);
        for i in 0..5 {
            assert_eq!(idx.stpos_value_at(i).unwrap(), &format!("u{i}"));
        }
        assert!(idx._verify_integrity());
    }

    #[test]
    fn bulk_insertion_disjoint() {
        let mut idx = Index::idx_init();
        let _ = idx.st_upsert(s("t0"), s("t0v"));
        let _ = idx.st_upsert(s("t1"), s("t1v"));
        let _ = idx.st_upsert(s("t2"), s("t2v"));
        idx.stpos_upsert_all_at(1, vec![(s("n0"), s("n0v")), (s("n1"), s("n1v"))])
            .unwrap();
        let got: Vec<String> = idx.stseq_ord_value().cloned().collect();
        assert_eq!(got, vec![s("t0v"), s("n0v"), s("n1v"), s("t1v"), s("t2v")]);
        assert!(idx._verify_integrity());
    }

    #[test]
    fn bulk_insertion_partial_overlap() {
        // existing keys update in place and consume no position; the new keys land as one
        // contiguous run at the caller's index, in source order
        let mut idx = Index::idx_init();
        let _ = idx.st_upsert(s("a"), s("1"));
        let _ = idx.st_upsert(s("b"), s("2"));
        let _ = idx.st_upsert(s("c"), s("3"));
        idx.stpos_upsert_all_at(
            1,
            vec![
                (s("b"), s("2!")),
                (s("x"), s("24")),
                (s("c"), s("3!")),
                (s("y"), s("25")),
            ],
        )
        .unwrap();
        let got_k: Vec<String> = idx.stseq_ord_key().cloned().collect();
        assert_eq!(got_k, vec![s("a"), s("x"), s("y"), s("b"), s("c")]);
        let got_v: Vec<String> = idx.stseq_ord_value().cloned().collect();
        assert_eq!(got_v, vec![s("1"), s("24"), s("25"), s("2!"), s("3!")]);
        assert!(idx._verify_integrity());
    }

    #[test]
    fn bulk_insertion_bad_index() {
        let mut idx = mkidx(3);
        // validation happens before anything is written, even for an empty source
        assert_eq!(
            idx.stpos_upsert_all_at(4, Vec::new()).unwrap_err(),
            Error::IndexOutOfRange { index: 4, size: 3 }
        );
        assert_eq!(
            idx.stpos_upsert_all_at(4, vec![(7, s("8"))]).unwrap_err(),
            Error::IndexOutOfRange { index: 4, size: 3 }
        );
        assert_eq!(keys(&idx), vec![0, 1, 2]);
        assert!(idx._verify_integrity());
    }

    #[test]
    fn removal_law() {
        let mut idx = mkidx(5);
        assert_eq!(idx.stpos_remove_at(1).unwrap(), "2");
        assert_eq!(keys(&idx), vec![0, 2, 3, 4]);
        assert_eq!(idx.st_len(), 4);
        assert_eq!(idx.stpos_index_of(&1), None);
        for (i, k) in keys(&idx).into_iter().enumerate() {
            assert_eq!(idx.stpos_index_of(&k), Some(i));
        }
        assert!(idx._verify_integrity());
    }

    #[test]
    fn remove_by_key() {
        let mut idx = mkidx(4);
        assert_eq!(idx.st_delete_return(&2).unwrap(), "3");
        assert_eq!(keys(&idx), vec![0, 1, 3]);
        // an absent key is a no-op
        assert_eq!(idx.st_delete_return(&2), None);
        assert_eq!(idx.st_len(), 3);
        assert!(idx._verify_integrity());
    }

    #[test]
    fn bounds_empty() {
        let mut idx = Index::idx_init();
        assert_eq!(
            idx.stpos_key_at(0).unwrap_err(),
            Error::IndexOutOfRange { index: 0, size: 0 }
        );
        assert_eq!(
            idx.stpos_value_at(0).unwrap_err(),
            Error::IndexOutOfRange { index: 0, size: 0 }
        );
        assert_eq!(
            idx.stpos_upsert_at(1, s("k"), s("v")).unwrap_err(),
            Error::IndexOutOfRange { index: 1, size: 0 }
        );
        assert_eq!(
            idx.stpos_remove_at(0).unwrap_err(),
            Error::IndexOutOfRange { index: 0, size: 0 }
        );
        assert_eq!(
            idx.stpos_set_value_at(0, s("v")).unwrap_err(),
            Error::IndexOutOfRange { index: 0, size: 0 }
        );
        // nothing was written along the way
        assert!(idx.st_is_empty());
    }

    #[test]
    fn bounds_full() {
        let mut idx = mkidx(3);
        assert_eq!(
            idx.stpos_key_at(3).unwrap_err(),
            Error::IndexOutOfRange { index: 3, size: 3 }
        );
        assert_eq!(
            idx.stpos_upsert_at(4, 9, s("v")).unwrap_err(),
            Error::IndexOutOfRange { index: 4, size: 3 }
        );
        // index == len is an append
        assert_eq!(idx.stpos_upsert_at(3, 9, s("10")).unwrap(), None);
        assert_eq!(idx.stpos_index_of(&9), Some(3));
        assert!(idx._verify_integrity());
    }

    #[test]
    fn set_value_at() {
        let mut idx = mkidx(3);
        assert_eq!(idx.stpos_set_value_at(1, s("two")).unwrap(), "2");
        assert_eq!(idx.stpos_value_at(1).unwrap(), "two");
        assert_eq!(keys(&idx), vec![0, 1, 2]);
        assert!(idx._verify_integrity());
    }

    #[test]
    fn key_nav() {
        let idx = mkidx(3);
        assert_eq!(idx.stseq_first_key(), Some(&0));
        assert_eq!(idx.stseq_last_key(), Some(&2));
        assert_eq!(idx.stseq_next_key(&0), Some(&1));
        assert_eq!(idx.stseq_next_key(&2), None);
        assert_eq!(idx.stseq_next_key(&7), None);
        assert_eq!(idx.stseq_prev_key(&1), Some(&0));
        assert_eq!(idx.stseq_prev_key(&0), None);
        let empty = IndexSTSeqDef::<usize, String>::idx_init();
        assert_eq!(empty.stseq_first_key(), None);
        assert_eq!(empty.stseq_last_key(), None);
    }

    #[test]
    fn key_view_read() {
        let idx = mkidx(4);
        let kv = idx.key_view();
        assert_eq!(kv.len(), 4);
        assert_eq!(kv.get(2).unwrap(), &2);
        assert_eq!(
            kv.get(4).unwrap_err(),
            Error::IndexOutOfRange { index: 4, size: 4 }
        );
        let got: Vec<usize> = kv.iter().copied().collect();
        assert_eq!(got, vec![0, 1, 2, 3]);
    }

    #[test]
    fn value_view_set_remove() {
        let mut idx = mkidx(4);
        {
            let mut vv = idx.value_view();
            assert_eq!(vv.set(2, s("three")).unwrap(), "3");
            // removing a value removes the whole entry
            assert_eq!(vv.remove(0).unwrap(), "1");
            assert_eq!(vv.len(), 3);
            let got: Vec<String> = vv.iter().cloned().collect();
            assert_eq!(got, vec![s("2"), s("three"), s("4")]);
        }
        assert_eq!(idx.st_len(), 3);
        assert_eq!(idx.stpos_index_of(&0), None);
        assert_eq!(idx.stpos_value_at(1).unwrap(), "three");
        assert!(idx._verify_integrity());
    }

    #[test]
    fn view_consistency() {
        let mut idx = mkidx(6);
        assert_eq!(idx.stpos_upsert_at(2, 100, s("x")).unwrap(), None);
        let _ = idx.st_delete_return(&3);
        for i in 0..idx.st_len() {
            assert_eq!(idx.key_view().get(i).unwrap(), idx.stpos_key_at(i).unwrap());
        }
        let snapshot: Vec<String> = idx.stseq_ord_value().cloned().collect();
        let vv = idx.value_view();
        for (i, v) in snapshot.iter().enumerate() {
            assert_eq!(vv.get(i).unwrap(), v);
        }
    }

    #[test]
    fn cursor_traversal() {
        let mut idx = mkidx(8);
        let expect: Vec<(usize, String)> = idx
            .stseq_ord_kv()
            .map(|(k, v)| (*k, v.clone()))
            .collect();
        let mut cur = idx.cursor();
        assert!(!cur.has_prev());
        assert!(cur.key().is_none());
        let mut got = Vec::new();
        while cur.has_next() {
            let k = *cur.step_next().unwrap();
            let v = cur.value().unwrap().clone();
            got.push((k, v));
        }
        assert_eq!(got, expect);
        assert_eq!(cur.step_next().unwrap_err(), Error::CursorExhausted);
        let mut rev = Vec::new();
        while cur.has_prev() {
            rev.push(*cur.step_back().unwrap());
        }
        assert_eq!(rev, (0..8).rev().collect::<Vec<usize>>());
        assert_eq!(cur.step_back().unwrap_err(), Error::CursorExhausted);
    }

    #[test]
    fn cursor_set_value() {
        let mut idx = mkidx(4);
        {
            let mut cur = idx.cursor();
            while cur.has_next() {
                let k = *cur.step_next().unwrap();
                let prev = cur.set_value((k + 10).to_string()).unwrap();
                assert_eq!(prev, (k + 1).to_string());
            }
        }
        for i in 0..4 {
            assert_eq!(idx.stpos_value_at(i).unwrap(), &(i + 10).to_string());
        }
        assert_eq!(keys(&idx), vec![0, 1, 2, 3]);
        assert!(idx._verify_integrity());
    }

    #[test]
    fn cursor_remove() {
        let mut idx = mkidx(5);
        {
            let mut cur = idx.cursor();
            let _ = cur.step_next().unwrap();
            let _ = cur.step_next().unwrap();
            assert_eq!(cur.remove().unwrap(), "2");
            // no current entry until the next step
            assert!(cur.key().is_none());
            assert!(cur.value().is_none());
            assert!(cur.set_value(s("x")).is_none());
            assert!(cur.remove().is_none());
            assert_eq!(*cur.step_next().unwrap(), 2);
        }
        assert_eq!(idx.st_len(), 4);
        assert_eq!(idx.stpos_index_of(&1), None);
        assert_eq!(keys(&idx), vec![0, 2, 3, 4]);
        assert!(idx._verify_integrity());
    }

    #[test]
    fn cursor_remove_backward() {
        let mut idx = mkidx(4);
        {
            let mut cur = idx.cursor();
            while cur.has_next() {
                let _ = cur.step_next().unwrap();
            }
            let _ = cur.step_back().unwrap();
            assert_eq!(cur.remove().unwrap(), "4");
            // the cursor stays put; stepping back continues with the previous entry
            assert_eq!(*cur.step_back().unwrap(), 2);
        }
        assert_eq!(keys(&idx), vec![0, 1, 2]);
        assert!(idx._verify_integrity());
    }

    #[test]
    fn iter_ord() {
        let idx = mkidx(SPAM_CNT);
        idx.stseq_ord_kv()
            .zip(0..SPAM_CNT)
            .for_each(|((k, v), i)| {
                assert_eq!(*k, i);
                assert_eq!(v, &(i + 1).to_string());
            });
        assert_eq!(idx.stseq_ord_kv().len(), SPAM_CNT);
    }

    #[test]
    fn iter_ord_rev() {
        let idx = mkidx(SPAM_CNT);
        idx.stseq_ord_kv()
            .rev()
            .zip((0..SPAM_CNT).rev())
            .for_each(|((k, v), i)| {
                assert_eq!(*k, i);
                assert_eq!(v, &(i + 1).to_string());
            });
    }

    #[test]
    fn into_iter_ord() {
        let idx = mkidx(64);
        let got: Vec<(usize, String)> = idx.into_iter().collect();
        got.iter().enumerate().for_each(|(i, (k, v))| {
            assert_eq!(*k, i);
            assert_eq!(v, &(i + 1).to_string());
        });
        let idx = mkidx(64);
        let got: Vec<usize> = idx.into_iter().rev().map(|(k, _)| k).collect();
        assert_eq!(got, (0..64).rev().collect::<Vec<usize>>());
    }

    #[test]
    fn from_iter_seeds_order() {
        let idx: Index = vec![(s("b"), s("2")), (s("a"), s("1")), (s("b"), s("9"))]
            .into_iter()
            .collect();
        // the duplicate updates in place: first occurrence fixes the position, last fixes the value
        assert_eq!(idx.st_len(), 2);
        assert_eq!(idx.stpos_index_of("b"), Some(0));
        assert_eq!(idx.st_get("b").unwrap(), "9");
        assert!(idx._verify_integrity());
    }

    #[test]
    fn from_lookup_table() {
        let mut m = HashMap::new();
        for int in 0..64usize {
            m.insert(int, int.to_string());
        }
        let idx = IndexSTSeqDef::from(m.clone());
        assert_eq!(idx.st_len(), 64);
        for int in 0..64usize {
            assert_eq!(idx.st_get(&int), m.get(&int));
        }
        assert!(idx._verify_integrity());
    }

    #[test]
    fn extend_upserts() {
        let mut idx = mkidx(3);
        idx.extend(vec![(1, s("one")), (7, s("8"))]);
        assert_eq!(keys(&idx), vec![0, 1, 2, 7]);
        assert_eq!(idx.st_get(&1).unwrap(), "one");
        assert!(idx._verify_integrity());
    }

    #[test]
    fn clone_eq() {
        let idx = mkidx(64);
        let idx2 = idx.clone();
        assert_eq!(idx, idx2);
        assert!(idx.stseq_ord_key().eq(idx2.stseq_ord_key()));
        let mut idx3 = idx2.clone();
        assert_eq!(idx3.stpos_remove_at(0).unwrap(), "1");
        assert_ne!(idx, idx3);
    }

    #[test]
    fn debug_fmt() {
        let mut idx = IndexSTSeqDef::<&str, u32>::idx_init();
        let _ = idx.st_upsert("a", 1);
        let _ = idx.st_upsert("b", 2);
        assert_eq!(format!("{idx:?}"), r#"{"a": 1, "b": 2}"#);
    }

    #[test]
    fn spam_random_ops_invariants() {
        let mut rng = rand::thread_rng();
        let mut idx = IndexSTSeqDef::<u32, u32>::idx_init();
        for round in 0..4_096u32 {
            let key = rng.gen_range(0..512);
            match rng.gen_range(0..5) {
                0 => {
                    let _ = idx.st_upsert(key, round);
                }
                1 => {
                    let at = rng.gen_range(0..=idx.st_len());
                    let _ = idx.stpos_upsert_at(at, key, round).unwrap();
                }
                2 => {
                    let _ = idx.st_delete_return(&key);
                }
                3 if !idx.st_is_empty() => {
                    let at = rng.gen_range(0..idx.st_len());
                    idx.stpos_remove_at(at).unwrap();
                }
                4 if !idx.st_is_empty() => {
                    let at = rng.gen_range(0..idx.st_len());
                    idx.stpos_set_value_at(at, round).unwrap();
                }
                _ => {}
            }
            if round % 64 == 0 {
                assert!(idx._verify_integrity());
            }
        }
        assert!(idx._verify_integrity());
    }
}
