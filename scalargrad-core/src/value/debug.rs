// src/value/debug.rs
use crate::ops::traits::ScalarNumeric;
use crate::value::Value;
use std::fmt;

/// Text form for debugging: `Value(data=6, grad_fn=MulBackward)`. Not a stable format.
impl<T: ScalarNumeric> fmt::Display for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.graph.data.try_borrow() {
            Ok(guard) => {
                let node = &guard[self.id];
                let grad_fn = node.grad_fn.as_ref().map_or("None", |op| op.name());
                if node.label.is_empty() {
                    write!(f, "Value(data={}, grad_fn={})", node.data, grad_fn)
                } else {
                    write!(f, "Value(data={}, grad_fn={}, label={})", node.data, grad_fn, node.label)
                }
            }
            Err(_) => write!(f, "Value(<graph borrowed>)"),
        }
    }
}

impl<T: ScalarNumeric> fmt::Debug for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.graph.data.try_borrow() {
            Ok(guard) => {
                let node = &guard[self.id];
                f.debug_struct("Value")
                    .field("id", &self.id)
                    .field("data", &node.data)
                    .field("grad", &node.grad)
                    .field("op", &node.op_tag())
                    .field("parents", &node.parents)
                    .field("label", &node.label)
                    .finish()
            }
            Err(_) => write!(f, "Value(<graph borrowed>)"),
        }
    }
}
