use std::fmt;

use cprop_ir::{HasBottom, HasTop, Lattice};

/// Abstract value of one int-compatible variable.
///
/// The order is `Undef ⊑ Constant(k) ⊑ Nac`; distinct constants are
/// incomparable, so every ascending chain has at most three elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// No definition has reached this point yet.
    #[default]
    Undef,
    Constant(i32),
    /// Not a constant: the variable may hold more than one value.
    Nac,
}

impl Value {
    pub fn make_constant(value: i32) -> Self {
        Value::Constant(value)
    }

    pub fn undef() -> Self {
        Value::Undef
    }

    pub fn nac() -> Self {
        Value::Nac
    }

    pub fn is_undef(&self) -> bool {
        matches!(self, Value::Undef)
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Value::Constant(_))
    }

    pub fn is_nac(&self) -> bool {
        matches!(self, Value::Nac)
    }

    /// The constant held by this value.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a constant. Use [`as_constant`](Self::as_constant)
    /// when that is not already known.
    pub fn constant(&self) -> i32 {
        match self {
            Value::Constant(value) => *value,
            _ => panic!("`{self}` is not a constant"),
        }
    }

    pub fn as_constant(&self) -> Option<i32> {
        match self {
            Value::Constant(value) => Some(*value),
            _ => None,
        }
    }
}

impl Lattice for Value {
    fn join(&self, other: &Self) -> Self {
        match (self, other) {
            (Value::Nac, _) | (_, Value::Nac) => Value::Nac,
            (Value::Undef, v) | (v, Value::Undef) => *v,
            (Value::Constant(a), Value::Constant(b)) if a == b => *self,
            (Value::Constant(_), Value::Constant(_)) => Value::Nac,
        }
    }

    fn meet(&self, other: &Self) -> Self {
        match (self, other) {
            (Value::Undef, _) | (_, Value::Undef) => Value::Undef,
            (Value::Nac, v) | (v, Value::Nac) => *v,
            (Value::Constant(a), Value::Constant(b)) if a == b => *self,
            (Value::Constant(_), Value::Constant(_)) => Value::Undef,
        }
    }

    fn is_subseteq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undef, _) | (_, Value::Nac) => true,
            (Value::Constant(a), Value::Constant(b)) => a == b,
            _ => false,
        }
    }
}

impl HasBottom for Value {
    fn bottom() -> Self {
        Value::Undef
    }
}

impl HasTop for Value {
    fn top() -> Self {
        Value::Nac
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Constant(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undef => f.write_str("UNDEF"),
            Value::Constant(value) => write!(f, "{value}"),
            Value::Nac => f.write_str("NAC"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cprop_test_utils::lattice::assert_finite_lattice_laws;

    #[test]
    fn value_lattice_laws() {
        assert_finite_lattice_laws(&[
            Value::Undef,
            Value::Constant(0),
            Value::Constant(5),
            Value::Constant(-7),
            Value::Nac,
        ]);
    }

    #[test]
    fn join_table() {
        let five = Value::make_constant(5);
        assert_eq!(Value::undef().join(&Value::undef()), Value::Undef);
        assert_eq!(Value::undef().join(&five), five);
        assert_eq!(five.join(&Value::undef()), five);
        assert_eq!(five.join(&five), five);
        assert_eq!(five.join(&Value::make_constant(7)), Value::Nac);
        assert_eq!(Value::nac().join(&Value::make_constant(3)), Value::Nac);
    }

    #[test]
    fn predicates_and_accessors() {
        assert!(Value::undef().is_undef());
        assert!(Value::nac().is_nac());
        assert!(Value::from(4).is_constant());
        assert_eq!(Value::make_constant(-1).constant(), -1);
        assert_eq!(Value::nac().as_constant(), None);
        assert_eq!(Value::default(), Value::Undef);
    }

    #[test]
    #[should_panic(expected = "`NAC` is not a constant")]
    fn constant_of_nac_panics() {
        Value::nac().constant();
    }

    #[test]
    fn display() {
        let rendered: Vec<String> = [Value::Undef, Value::Constant(-3), Value::Nac]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(rendered, ["UNDEF", "-3", "NAC"]);
    }
}
