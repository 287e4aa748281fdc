pub mod sanitize;
pub use sanitize::{DesiredType, FilterError, Sanitize};

pub mod terminal;
pub use terminal::{Outcome, RetryPolicy, Terminal, Verdict};

pub mod numeric;
pub use numeric::NumericConstraint;
