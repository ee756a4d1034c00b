use std::{any::Any, fmt, rc::Rc};

/// A handle to an arbitrary Rust value stored inside a tree.
///
/// Opaque values are leaves: merging, iteration and path resolution never
/// look inside them, and cloning shares the same allocation. Typical
/// contents are callbacks or hooks injected into a configuration tree.
///
/// ```
/// # use nested_traversal::Opaque;
/// let hook = Opaque::new(|n: i64| n * 2);
/// let copy = hook.clone();
/// assert!(hook.ptr_eq(&copy));
/// assert!(hook.downcast_ref::<String>().is_none());
/// ```
#[derive(Clone)]
pub struct Opaque(Rc<dyn Any>);

impl Opaque {
    pub fn new<T: 'static>(value: T) -> Self {
        Opaque(Rc::new(value))
    }

    /// Wraps an existing shared allocation without re-boxing it.
    pub fn from_rc(value: Rc<dyn Any>) -> Self {
        Opaque(value)
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    pub fn is<T: 'static>(&self) -> bool {
        self.0.is::<T>()
    }

    /// Returns true if both handles point at the same allocation.
    pub fn ptr_eq(&self, other: &Opaque) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opaque({:p})", Rc::as_ptr(&self.0).cast::<()>())
    }
}
