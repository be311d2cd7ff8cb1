// A derived type that extends a base without overriding it. Calls made through
// a `&Base` handle always resolve to `Base`'s own methods, whatever the handle
// actually points into.
use std::ops::Deref;

use crate::object_model::{BASE_MESSAGE, DERIVED_MESSAGE};
use crate::{InputError, Scanner, Writer};

pub struct Base;

impl Base {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&self, out: &mut Writer) {
        out.println(BASE_MESSAGE);
    }

    pub fn call_function(&self, out: &mut Writer) {
        self.print(out);
    }
}

impl Default for Base {
    fn default() -> Self {
        Self::new()
    }
}

/// Publicly extends [`Base`]: every `&Derived` coerces to a `&Base`.
pub struct Derived {
    base: Base,
}

impl Derived {
    pub fn new() -> Self {
        Self { base: Base::new() }
    }

    pub fn print_derived(&self, out: &mut Writer) {
        out.println(DERIVED_MESSAGE);
    }
}

impl Default for Derived {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Derived {
    type Target = Base;

    fn deref(&self) -> &Base {
        &self.base
    }
}

pub fn solve(_input: &mut Scanner, out: &mut Writer) -> Result<(), InputError> {
    let base = Base::new();
    let derived = Derived::new();

    let handles: [&Base; 2] = [&base, &derived];
    for handle in handles {
        handle.print(out);
    }
    Ok(())
}
