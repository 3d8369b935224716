use log::Level;
use once_cell::sync::Lazy;
use serde::Deserialize;

/// Height of the fixed header; in-page jumps land this far below the top.
pub const HEADER_OFFSET_PX: f64 = 80.0;
/// Viewport width at which the mobile menu gives way to the desktop nav.
pub const DESKTOP_BREAKPOINT_PX: f64 = 768.0;
pub const HEADER_SCROLLED_PX: f64 = 20.0;
pub const FLOATING_SIGNUP_PX: f64 = 300.0;
pub const PAGE_LOADED_DELAY_MS: u32 = 500;
pub const LOADING_FADE_MS: u32 = 1_000;
/// Wait for the mobile menu to start closing before jumping to a section.
pub const SECTION_JUMP_DELAY_MS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub description: String,
    pub links: Links,
    pub cta: CtaLinks,
    pub external: ExternalLinks,
    pub legal: LegalLinks,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Links {
    pub website: String,
    pub community: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CtaLinks {
    pub signup: String,
    pub portal: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExternalLinks {
    pub xmobile: String,
    pub financie: String,
    pub token_guide: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LegalLinks {
    pub privacy_policy: String,
    pub terms: String,
    pub transactions: String,
    pub devices: String,
}

const SITE_JSON: &str = include_str!("../assets/site.json");

static SITE: Lazy<SiteConfig> =
    Lazy::new(|| serde_json::from_str(SITE_JSON).expect("bundled site.json is invalid"));

pub fn site() -> &'static SiteConfig {
    &SITE
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose in local builds
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_parses() {
        let site: SiteConfig = serde_json::from_str(SITE_JSON).unwrap();
        assert_eq!(site.name, "レリモバ");
        assert!(site.cta.signup.starts_with("https://"));
        assert!(site.legal.devices.ends_with(".pdf"));
    }

    #[test]
    fn every_link_is_https() {
        let site = site();
        let urls = [
            &site.links.website,
            &site.links.community,
            &site.links.contact,
            &site.cta.signup,
            &site.cta.portal,
            &site.external.xmobile,
            &site.external.financie,
            &site.external.token_guide,
            &site.legal.privacy_policy,
            &site.legal.terms,
            &site.legal.transactions,
            &site.legal.devices,
        ];
        assert!(urls.iter().all(|u| u.starts_with("https://")));
    }
}
