//! Navigation Header Component
//!
//! Fixed top bar: site title on the left, section links in the center,
//! and the GVIPC call-to-action on the right.

use dioxus::prelude::*;

use crate::app::Route;

/// Navigation location within the portal
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Home,
    Biography,
    Career,
    Philanthropy,
    FanZone,
    Journal,
    Gvipc,
}

impl NavLocation {
    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "Home",
            NavLocation::Biography => "Biography",
            NavLocation::Career => "Career",
            NavLocation::Philanthropy => "Philanthropy",
            NavLocation::FanZone => "Fan Zone",
            NavLocation::Journal => "Journal",
            NavLocation::Gvipc => "GVIPC",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Home => Route::Home {},
            NavLocation::Biography => Route::Biography {},
            NavLocation::Career => Route::Career {},
            NavLocation::Philanthropy => Route::Philanthropy {},
            NavLocation::FanZone => Route::FanZone {},
            NavLocation::Journal => Route::Journal {},
            NavLocation::Gvipc => Route::GvipcApply {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current location in the portal
    pub current: NavLocation,
}

/// Navigation header component
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let locations = [
        NavLocation::Home,
        NavLocation::Biography,
        NavLocation::Career,
        NavLocation::Philanthropy,
        NavLocation::FanZone,
        NavLocation::Journal,
    ];

    rsx! {
        header { class: "nav-header",
            Link { class: "nav-title", to: Route::Home {}, "KEANU REEVES" }

            nav { class: "nav-links",
                for location in locations {
                    Link {
                        key: "{location.display_name()}",
                        class: if location == props.current { "nav-link active" } else { "nav-link" },
                        to: location.route(),
                        "{location.display_name()}"
                    }
                }
            }

            Link {
                class: "nav-cta",
                to: Route::GvipcApply {},
                "Join GVIPC"
            }
        }
    }
}
