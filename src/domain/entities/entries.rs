use crate::domain::values::vector::Vector;
use std::collections::HashMap;

/// The identifier-to-vector mapping. Unordered; last write wins.
pub type Entries = HashMap<String, Vector>;
