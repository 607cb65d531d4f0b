use crate::load::requested_factor;

pub const EVEN_ID_FAULT_MESSAGE: &str =
    "Internal Server Error for DEMO, id received is an even number";

/// Opt-in fault injection for item lookups.
///
/// When enabled, any id whose numeric value is even is answered with a
/// server error instead of a lookup. Off by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaultInjector {
    fail_even_ids: bool,
}

impl FaultInjector {
    pub fn new(fail_even_ids: bool) -> Self {
        Self { fail_even_ids }
    }

    pub fn is_enabled(&self) -> bool {
        self.fail_even_ids
    }

    /// Message of the injected failure for `id`, if one applies.
    pub fn check(&self, id: &str) -> Option<&'static str> {
        if self.fail_even_ids && requested_factor(id) % 2.0 == 0.0 {
            Some(EVEN_ID_FAULT_MESSAGE)
        } else {
            None
        }
    }
}
