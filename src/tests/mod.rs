extern crate std;

mod scalar;
