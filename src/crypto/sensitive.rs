/// Wrappers for sensitive material that is automatically zeroized on drop.
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A sensitive string (the DEK) that is wiped when dropped.
///
/// Deliberately has no `Debug` or `Display` impl; the contents never end up
/// in logs or error messages.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SensitiveString(String);

impl SensitiveString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
