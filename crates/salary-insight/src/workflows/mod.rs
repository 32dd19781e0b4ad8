pub mod model;
pub mod salary;
