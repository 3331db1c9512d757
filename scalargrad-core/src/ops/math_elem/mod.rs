pub mod exp;
pub mod ln;
pub mod tanh;

pub use exp::exp_op;
pub use ln::ln_op;
pub use tanh::tanh_op;
