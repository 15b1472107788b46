pub mod ln;

pub use ln::ln_op;
