// Object model demonstrations

pub mod dynamic_dispatch;
pub mod static_dispatch;

use crate::TaskGroup;

pub const BASE_MESSAGE: &str = "Printing the Base class Content";
pub const DERIVED_MESSAGE: &str = "Printing the Derived class Content";

pub fn tasks() -> TaskGroup {
    TaskGroup::new("object_model")
        .add("dynamic_dispatch", dynamic_dispatch::solve)
        .add("static_dispatch", static_dispatch::solve)
}
