// The overriding counterpart of `static_dispatch`: `print` is a trait method,
// the derived type replaces it, and calls go through `dyn Printable`.
use crate::object_model::{BASE_MESSAGE, DERIVED_MESSAGE};
use crate::{InputError, Scanner, Writer};

pub trait Printable {
    fn print(&self, out: &mut Writer);

    fn call_function(&self, out: &mut Writer) {
        self.print(out);
    }
}

pub struct VirtualBase;

impl Printable for VirtualBase {
    fn print(&self, out: &mut Writer) {
        out.println(BASE_MESSAGE);
    }
}

pub struct VirtualDerived;

impl Printable for VirtualDerived {
    fn print(&self, out: &mut Writer) {
        out.println(DERIVED_MESSAGE);
    }
}

pub fn solve(_input: &mut Scanner, out: &mut Writer) -> Result<(), InputError> {
    let handles: Vec<Box<dyn Printable>> = vec![Box::new(VirtualBase), Box::new(VirtualDerived)];
    for handle in &handles {
        handle.call_function(out);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::verify_all_tests;
    use std::io::Cursor;

    #[test]
    fn test_override_runs_for_derived_handle() {
        let mut input = Scanner::new(Cursor::new(String::new()));
        let mut out = Writer::new();
        solve(&mut input, &mut out).unwrap();
        assert_eq!(
            out.into_string().unwrap(),
            "Printing the Base class Content\nPrinting the Derived class Content\n"
        );
    }

    #[test]
    fn test_data_cases() {
        verify_all_tests("object_model", "dynamic_dispatch", solve);
    }
}
