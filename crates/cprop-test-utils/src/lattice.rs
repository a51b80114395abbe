//! Assertions for the algebraic laws of [`Lattice`] implementations.
//!
//! Every law is checked over all pairs (or triples) of the sample
//! elements. Failures are gathered first and reported in one panic, so a
//! broken implementation shows every violated law at once.
//!
//! ```
//! use cprop_test_utils::lattice::assert_finite_lattice_laws;
//!
//! // `bool` with `||` as join and `&&` as meet.
//! # use cprop_ir::{HasBottom, HasTop, Lattice};
//! # #[derive(Clone, Debug, PartialEq)]
//! # struct Flag(bool);
//! # impl Lattice for Flag {
//! #     fn join(&self, o: &Self) -> Self { Flag(self.0 || o.0) }
//! #     fn meet(&self, o: &Self) -> Self { Flag(self.0 && o.0) }
//! #     fn is_subseteq(&self, o: &Self) -> bool { !self.0 || o.0 }
//! # }
//! # impl HasBottom for Flag { fn bottom() -> Self { Flag(false) } }
//! # impl HasTop for Flag { fn top() -> Self { Flag(true) } }
//! assert_finite_lattice_laws(&[Flag(false), Flag(true)]);
//! ```

use std::fmt::{Debug, Write};

use cprop_ir::{HasBottom, HasTop, Lattice};

#[derive(Default)]
struct Violations(Vec<String>);

impl Violations {
    fn expect(&mut self, holds: bool, law: impl FnOnce() -> String) {
        if !holds {
            self.0.push(law());
        }
    }

    fn finish(self) {
        if self.0.is_empty() {
            return;
        }
        let mut report = format!("{} lattice law(s) violated:", self.0.len());
        for (n, law) in self.0.iter().enumerate() {
            let _ = write!(report, "\n  {}. {law}", n + 1);
        }
        panic!("{report}");
    }
}

/// `join` is idempotent, commutative and associative.
pub fn assert_join_laws<L: Lattice + PartialEq + Debug>(elements: &[L]) {
    let mut v = Violations::default();
    join_laws(elements, &mut v);
    v.finish();
}

/// `meet` is idempotent, commutative and associative.
pub fn assert_meet_laws<L: Lattice + PartialEq + Debug>(elements: &[L]) {
    let mut v = Violations::default();
    meet_laws(elements, &mut v);
    v.finish();
}

/// `a ⊔ (a ⊓ b) = a` and `a ⊓ (a ⊔ b) = a`.
pub fn assert_absorption<L: Lattice + PartialEq + Debug>(elements: &[L]) {
    let mut v = Violations::default();
    absorption(elements, &mut v);
    v.finish();
}

/// `a ⊑ b` iff `a ⊔ b = b` iff `a ⊓ b = a`.
pub fn assert_ordering_consistent<L: Lattice + PartialEq + Debug>(elements: &[L]) {
    let mut v = Violations::default();
    ordering(elements, &mut v);
    v.finish();
}

/// All of the above.
pub fn assert_lattice_laws<L: Lattice + PartialEq + Debug>(elements: &[L]) {
    let mut v = Violations::default();
    join_laws(elements, &mut v);
    meet_laws(elements, &mut v);
    absorption(elements, &mut v);
    ordering(elements, &mut v);
    v.finish();
}

/// All lattice laws, plus: `bottom()` is below every element and is the
/// unit of `join`; `top()` is above every element and is the unit of
/// `meet`. Bottom and top are added to the samples.
pub fn assert_finite_lattice_laws<L>(elements: &[L])
where
    L: HasBottom + HasTop + Clone + PartialEq + Debug,
{
    let mut samples = elements.to_vec();
    samples.push(L::bottom());
    samples.push(L::top());

    let mut v = Violations::default();
    join_laws(&samples, &mut v);
    meet_laws(&samples, &mut v);
    absorption(&samples, &mut v);
    ordering(&samples, &mut v);
    bounds(&samples, &mut v);
    v.finish();
}

fn join_laws<L: Lattice + PartialEq + Debug>(elements: &[L], v: &mut Violations) {
    for a in elements {
        v.expect(a.join(a) == *a, || format!("{a:?} ⊔ {a:?} != {a:?}"));
        for b in elements {
            let ab = a.join(b);
            v.expect(ab == b.join(a), || format!("{a:?} ⊔ {b:?} is not commutative"));
            for c in elements {
                v.expect(ab.join(c) == a.join(&b.join(c)), || {
                    format!("({a:?} ⊔ {b:?}) ⊔ {c:?} != {a:?} ⊔ ({b:?} ⊔ {c:?})")
                });
            }
        }
    }
}

fn meet_laws<L: Lattice + PartialEq + Debug>(elements: &[L], v: &mut Violations) {
    for a in elements {
        v.expect(a.meet(a) == *a, || format!("{a:?} ⊓ {a:?} != {a:?}"));
        for b in elements {
            let ab = a.meet(b);
            v.expect(ab == b.meet(a), || format!("{a:?} ⊓ {b:?} is not commutative"));
            for c in elements {
                v.expect(ab.meet(c) == a.meet(&b.meet(c)), || {
                    format!("({a:?} ⊓ {b:?}) ⊓ {c:?} != {a:?} ⊓ ({b:?} ⊓ {c:?})")
                });
            }
        }
    }
}

fn absorption<L: Lattice + PartialEq + Debug>(elements: &[L], v: &mut Violations) {
    for a in elements {
        for b in elements {
            v.expect(a.join(&a.meet(b)) == *a, || {
                format!("{a:?} ⊔ ({a:?} ⊓ {b:?}) != {a:?}")
            });
            v.expect(a.meet(&a.join(b)) == *a, || {
                format!("{a:?} ⊓ ({a:?} ⊔ {b:?}) != {a:?}")
            });
        }
    }
}

fn ordering<L: Lattice + PartialEq + Debug>(elements: &[L], v: &mut Violations) {
    for a in elements {
        for b in elements {
            let le = a.is_subseteq(b);
            v.expect(le == (a.join(b) == *b), || {
                format!("{a:?} ⊑ {b:?} is {le}, disagreeing with join")
            });
            v.expect(le == (a.meet(b) == *a), || {
                format!("{a:?} ⊑ {b:?} is {le}, disagreeing with meet")
            });
        }
    }
}

fn bounds<L: HasBottom + HasTop + PartialEq + Debug>(elements: &[L], v: &mut Violations) {
    let (bottom, top) = (L::bottom(), L::top());
    for x in elements {
        v.expect(bottom.is_subseteq(x), || format!("bottom is not below {x:?}"));
        v.expect(bottom.join(x) == *x, || format!("bottom ⊔ {x:?} != {x:?}"));
        v.expect(x.is_subseteq(&top), || format!("{x:?} is not below top"));
        v.expect(top.meet(x) == *x, || format!("top ⊓ {x:?} != {x:?}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Divisibility on small naturals: join is lcm, meet is gcd.
    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Div(u32);

    fn gcd(a: u32, b: u32) -> u32 {
        if b == 0 { a } else { gcd(b, a % b) }
    }

    impl Lattice for Div {
        fn join(&self, other: &Self) -> Self {
            Div(self.0 / gcd(self.0, other.0) * other.0)
        }

        fn meet(&self, other: &Self) -> Self {
            Div(gcd(self.0, other.0))
        }

        fn is_subseteq(&self, other: &Self) -> bool {
            other.0 % self.0 == 0
        }
    }

    #[test]
    fn divisibility_is_a_lattice() {
        assert_lattice_laws(&[Div(1), Div(2), Div(3), Div(4), Div(6), Div(12)]);
    }

    /// A `join` that forgets its right operand.
    #[derive(Debug, PartialEq)]
    struct Left(u8);

    impl Lattice for Left {
        fn join(&self, _other: &Self) -> Self {
            Left(self.0)
        }

        fn meet(&self, _other: &Self) -> Self {
            Left(self.0)
        }

        fn is_subseteq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    #[test]
    #[should_panic(expected = "is not commutative")]
    fn broken_join_is_reported() {
        assert_join_laws(&[Left(0), Left(1)]);
    }
}
