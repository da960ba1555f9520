use std::collections::VecDeque;

use proptest::prelude::*;

use crate::utils::{position, wrap_add, wrap_dec, wrap_inc};
use crate::RingBuffer;

const CAP: usize = 5;

#[derive(Clone, Debug)]
enum Op {
    PushBack(u8),
    PushFront(u8),
    PopBack,
    PopFront,
    Set(usize, u8),
    Drain(usize, usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u8>().prop_map(Op::PushBack),
        any::<u8>().prop_map(Op::PushFront),
        Just(Op::PopBack),
        Just(Op::PopFront),
        (0..CAP, any::<u8>()).prop_map(|(i, v)| Op::Set(i, v)),
        (0..CAP + 1, 0..CAP + 1).prop_map(|(a, b)| Op::Drain(a.min(b), a.max(b))),
    ]
}

proptest! {
    /// Every operation leaves the buffer holding what a VecDeque holds.
    #[test]
    fn matches_vecdeque(ops in prop::collection::vec(arb_op(), 0..200)) {
        let mut buf: RingBuffer<[u8; CAP]> = RingBuffer::new();
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                Op::PushBack(v) => {
                    let pushed = buf.try_push_back(v).is_ok();
                    prop_assert_eq!(pushed, model.len() < CAP);
                    if pushed {
                        model.push_back(v);
                    }
                }
                Op::PushFront(v) => {
                    let pushed = buf.try_push_front(v).is_ok();
                    prop_assert_eq!(pushed, model.len() < CAP);
                    if pushed {
                        model.push_front(v);
                    }
                }
                Op::PopBack => {
                    prop_assert_eq!(buf.try_pop_back(), model.pop_back());
                }
                Op::PopFront => {
                    prop_assert_eq!(buf.try_pop_front(), model.pop_front());
                }
                Op::Set(i, v) => {
                    if let Some(slot) = buf.get_mut(i) {
                        *slot = v;
                    }
                    if let Some(slot) = model.get_mut(i) {
                        *slot = v;
                    }
                }
                Op::Drain(start, end) => {
                    if end <= model.len() {
                        let got: Vec<u8> = buf.drain(start..end).collect();
                        let want: Vec<u8> = model.drain(start..end).collect();
                        prop_assert_eq!(got, want);
                    }
                }
            }

            prop_assert_eq!(buf.len(), model.len());
            prop_assert_eq!(buf.is_empty(), model.is_empty());
            prop_assert!(buf.iter().eq(model.iter()));
            if !model.is_empty() {
                prop_assert_eq!(buf.front(), model.front().unwrap());
                prop_assert_eq!(buf.back(), model.back().unwrap());
            }
        }
    }

    /// Equality depends only on contents, never on capacity or offset.
    #[test]
    fn equality_is_content_only(values in prop::collection::vec(any::<i16>(), 0..CAP),
                                shift in 0..CAP) {
        let mut small: RingBuffer<[i16; CAP]> = RingBuffer::new();
        let mut large: RingBuffer<[i16; CAP * 3]> = RingBuffer::new();
        for _ in 0..shift {
            small.push_back(0);
            small.pop_front();
        }
        small.extend(values.iter().cloned());
        large.extend(values.iter().cloned());

        prop_assert!(small == large);
        prop_assert!(large == small);

        large.push_back(1);
        prop_assert!(small != large);
    }

    #[test]
    fn position_agrees_with_modulo(cap in 1usize..64, head in 0usize..64, index in 0usize..64) {
        let head = head % cap;
        let index = index % cap;
        prop_assert_eq!(position(head, index, cap), wrap_add(head, index, cap));
        prop_assert_eq!(wrap_dec(wrap_inc(head, cap), cap), head);
    }
}
