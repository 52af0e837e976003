//! Shared context for the Keanuverse portal.
//!
//! Provides the portal services (submission intake, capture devices) and
//! the GVIPC membership session to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In a page or component
//! let services = use_services();
//! let mut session = use_membership_session();
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use dioxus::prelude::*;
use keanuverse_core::{MembershipSession, SimulatedDevices, SimulatedIntake, SubmissionIntake};

static DENY_CAPTURE: AtomicBool = AtomicBool::new(false);

/// Set from the command line before launch (`--deny-capture`)
pub fn set_deny_capture(deny: bool) {
    DENY_CAPTURE.store(deny, Ordering::Relaxed);
}

/// The portal's external collaborators.
///
/// Both are process-local simulations: the intake discards payloads after
/// a fixed latency, and the devices produce capture streams whose
/// lifecycle (busy guard, release paths) is fully real.
pub struct PortalServices {
    pub intake: Arc<dyn SubmissionIntake>,
    pub devices: Arc<SimulatedDevices>,
}

impl PortalServices {
    pub fn new() -> Self {
        let devices = SimulatedDevices::new();
        devices.set_deny_permission(DENY_CAPTURE.load(Ordering::Relaxed));
        Self {
            intake: Arc::new(SimulatedIntake::new()),
            devices: Arc::new(devices),
        }
    }
}

impl Default for PortalServices {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared services handle for context
pub type SharedServices = Arc<PortalServices>;

/// Hook to access the portal services from context.
pub fn use_services() -> SharedServices {
    use_context::<SharedServices>()
}

/// Hook to access the GVIPC membership session from context.
///
/// One session per app run, threaded through apply -> challenge -> card so
/// the applicant's name reaches the issued card.
pub fn use_membership_session() -> Signal<MembershipSession> {
    use_context::<Signal<MembershipSession>>()
}
