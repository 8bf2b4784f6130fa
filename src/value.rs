//! The type-erased value carrier.
//!
//! A [`Value`] is an opaque cell holding target data or a bound value. The
//! engine never looks inside one; only matchers (via [`Value::downcast_ref`])
//! and clause bodies recover the concrete type.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// `dyn`-safe value with a debug representation and dynamic equality.
/// Blanket-implemented for any type that could plausibly be matched on.
trait DynValue: Any + fmt::Debug {
    fn as_any(&self) -> &dyn Any;
    fn dyn_eq(&self, other: &dyn DynValue) -> bool;
}

impl<T> DynValue for T
where
    T: Any + fmt::Debug + PartialEq,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn DynValue) -> bool {
        match other.as_any().downcast_ref::<T>() {
            Some(other) => self == other,
            None => false,
        }
    }
}

/// A heterogeneous, reference-counted, type-erased value. Cloning is a
/// refcount bump, not a deep copy.
#[derive(Clone)]
pub struct Value(Rc<dyn DynValue>);

impl Value {
    /// Wraps `v` as an opaque value.
    pub fn new<T>(v: T) -> Self
    where
        T: Any + fmt::Debug + PartialEq,
    {
        Value(Rc::new(v))
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    pub fn downcast<T: 'static + Clone>(&self) -> Option<T> {
        self.downcast_ref::<T>().cloned()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.0.dyn_eq(&*other.0)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}
