/// A partially ordered set with binary least upper and greatest lower bounds.
///
/// `is_subseteq` is the partial order, `join` the least upper bound and
/// `meet` the greatest lower bound. Implementations must keep all three
/// consistent: `a.is_subseteq(b)` iff `a.join(b) == b` iff `a.meet(b) == a`.
pub trait Lattice {
    fn join(&self, other: &Self) -> Self;
    fn meet(&self, other: &Self) -> Self;
    fn is_subseteq(&self, other: &Self) -> bool;
}

/// A lattice with a least element.
pub trait HasBottom: Lattice {
    fn bottom() -> Self;
}

/// A lattice with a greatest element.
pub trait HasTop: Lattice {
    fn top() -> Self;
}

/// A bounded lattice of finite height. Ascending chains stabilize without
/// widening.
pub trait FiniteLattice: HasBottom + HasTop {}

impl<T: HasBottom + HasTop> FiniteLattice for T {}
