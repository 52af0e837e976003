use std::sync::Arc;

use dioxus::prelude::*;
use keanuverse_core::MembershipSession;

use crate::context::{PortalServices, SharedServices};
use crate::pages::{
    Biography, Career, FanZone, GvipcApply, GvipcCard, GvipcChallenge, Home, Journal, Philanthropy,
};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Homepage with hero and featured sections
/// - `/biography`, `/career`, `/philanthropy` - Content pages
/// - `/fan-zone` - Fan gallery with filter/search and submission form
/// - `/journal` - Wellness journal grid and personal-stories timeline
/// - `/gvipc/*` - The membership wizard: apply, challenge, card
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/biography")]
    Biography {},
    #[route("/career")]
    Career {},
    #[route("/philanthropy")]
    Philanthropy {},
    #[route("/fan-zone")]
    FanZone {},
    #[route("/journal")]
    Journal {},
    #[route("/gvipc/apply")]
    GvipcApply {},
    #[route("/gvipc/challenge")]
    GvipcChallenge {},
    #[route("/gvipc/card")]
    GvipcCard {},
}

/// Root application component.
///
/// Provides global styles, portal services, the membership session, and
/// routing.
#[component]
pub fn App() -> Element {
    use_context_provider::<SharedServices>(|| Arc::new(PortalServices::new()));

    // One membership session per app run, shared by the three GVIPC pages
    let session: Signal<MembershipSession> = use_signal(MembershipSession::new);
    use_context_provider(|| session);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
