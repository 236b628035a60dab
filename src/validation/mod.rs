pub mod dates;
pub mod safe_string;

pub use dates::{antigua_fecha, resolve_range, within_history, DateRange, UpperBound};
pub use safe_string::{safe_clave, safe_curp, safe_email, safe_string};
