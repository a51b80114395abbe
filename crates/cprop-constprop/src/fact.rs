use std::fmt;

use cprop_dataflow::MapFact;
use cprop_ir::Var;

use crate::Value;

/// Abstract state of one program point: the [`Value`] of every tracked
/// variable.
///
/// A missing key means [`Value::Undef`], and `Undef` is never stored, so
/// two facts are equal exactly when they map every variable to the same
/// value.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CpFact {
    map: MapFact<Var, Value>,
}

impl CpFact {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `var`, `Undef` when absent.
    pub fn get(&self, var: &Var) -> Value {
        self.map.get(var).copied().unwrap_or_default()
    }

    /// Bind `var` to `value`, dropping the key for `Undef`. Returns whether
    /// the fact changed.
    pub fn update(&mut self, var: Var, value: Value) -> bool {
        if value.is_undef() {
            self.map.remove(&var).is_some()
        } else {
            self.map.update(var, value)
        }
    }

    /// Overwrite this fact with `other`. Returns whether this fact changed.
    pub fn copy_from(&mut self, other: &CpFact) -> bool {
        self.map.copy_from(&other.map)
    }

    /// Variables with a value other than `Undef`, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&Var, Value)> {
        self.map.entries().map(|(var, value)| (var, *value))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    fn sorted_entries(&self) -> Vec<(&Var, Value)> {
        let mut entries: Vec<_> = self.entries().collect();
        entries.sort_by_key(|(var, _)| var.id());
        entries
    }
}

impl FromIterator<(Var, Value)> for CpFact {
    fn from_iter<I: IntoIterator<Item = (Var, Value)>>(iter: I) -> Self {
        let mut fact = CpFact::new();
        for (var, value) in iter {
            fact.update(var, value);
        }
        fact
    }
}

/// Renders as `{a=1, b=NAC}` with variables in declaration order.
impl fmt::Display for CpFact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (var, value)) in self.sorted_entries().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{var}={value}")?;
        }
        f.write_str("}")
    }
}

impl fmt::Debug for CpFact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
