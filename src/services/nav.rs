//! Navigation data derived from the current profile.
//!
//! Computed per request from nothing but the profile, so no two requests
//! can observe each other's links.

use serde::Serialize;

use crate::api::Profile;

pub const LOGO_SRC: &str = "/images/logo.svg";
pub const DEFAULT_PICTURE: &str = "/images/profile.png";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Logo {
    pub src: &'static str,
    pub link_url: &'static str,
    pub alt_text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub id: &'static str,
    pub url: &'static str,
    pub display_in_nav: bool,
    pub display_in_footer: bool,
    pub link_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Nav {
    pub logo: Logo,
    pub links: Vec<NavLink>,
}

impl NavLink {
    fn plain(id: &'static str, url: &'static str, text: &str) -> Self {
        Self {
            id,
            url,
            display_in_nav: true,
            display_in_footer: false,
            link_text: text.to_string(),
            picture: None,
        }
    }
}

#[must_use]
pub fn nav_for(profile: Option<&Profile>) -> Nav {
    let logo = Logo { src: LOGO_SRC, link_url: "/", alt_text: "Logo" };

    let links = match profile {
        None => vec![
            NavLink::plain("sign-in", "/sign-in", "Sign in"),
            NavLink::plain("sign-up", "/sign-up", "Sign up"),
        ],
        Some(profile) => {
            let picture = if profile.picture.is_empty() {
                DEFAULT_PICTURE.to_string()
            } else {
                profile.picture.clone()
            };
            let mut links = vec![NavLink {
                id: "profile",
                url: "/profile",
                display_in_nav: true,
                display_in_footer: true,
                link_text: profile.name.clone(),
                picture: Some(picture),
            }];
            links.push(NavLink::plain("survey", "/survey", "Survey"));
            if profile.is_admin {
                links.push(NavLink::plain("admin", "/admin", "Admin"));
            }
            links
        }
    };

    Nav { logo, links }
}
