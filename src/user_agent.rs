//! User-Agent string generation.
//!
//! Profile pages are served differently depending on the client, so requests
//! carry a realistic browser User-Agent. Callers pick a browser family
//! (`BrowserProfile`) or let the generator pick one at random.

use rand::seq::IndexedRandom;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Chrome version used in generated Chromium-based User-Agents.
/// Updated to Chrome 131 (November 2024)
const CHROME_VERSION: &str = "131.0.0.0";

/// Firefox version used in generated Gecko User-Agents.
const FIREFOX_VERSION: &str = "133.0";

/// Browser families accepted when generating a User-Agent.
///
/// The names double as the accepted `--os` values on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BrowserProfile {
    /// Desktop Chrome on Windows
    Chrome,
    /// Desktop Firefox on Windows
    Firefox,
    /// Internet Explorer 11
    Explorer,
    /// Safari on iPhone
    Iphone,
    /// Chrome on Android
    Android,
    /// Any mobile browser (iPhone or Android)
    Mobile,
    /// Edge on Windows
    Windows,
    /// Safari on macOS
    Mac,
    /// Chrome on Linux
    Linux,
}

impl BrowserProfile {
    /// Parses a browser family name, returning `None` for unknown or empty names.
    ///
    /// Unknown names are not an error: the generator then picks any profile.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        name.parse().ok()
    }
}

/// Generates a User-Agent string for the given browser family.
///
/// With `None`, a profile is chosen at random.
pub fn generate_user_agent(profile: Option<BrowserProfile>) -> String {
    let mut rng = rand::rng();
    let profile = profile.unwrap_or_else(|| {
        let all: Vec<BrowserProfile> = BrowserProfile::iter().collect();
        *all.choose(&mut rng).unwrap_or(&BrowserProfile::Chrome)
    });

    let profile = match profile {
        BrowserProfile::Mobile => *[BrowserProfile::Iphone, BrowserProfile::Android]
            .choose(&mut rng)
            .unwrap_or(&BrowserProfile::Iphone),
        other => other,
    };

    match profile {
        BrowserProfile::Chrome => format!(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{} Safari/537.36",
            CHROME_VERSION
        ),
        BrowserProfile::Firefox => format!(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:{v}) Gecko/20100101 Firefox/{v}",
            v = FIREFOX_VERSION
        ),
        BrowserProfile::Explorer => {
            "Mozilla/5.0 (Windows NT 10.0; WOW64; Trident/7.0; rv:11.0) like Gecko".to_string()
        }
        BrowserProfile::Iphone | BrowserProfile::Mobile => "Mozilla/5.0 (iPhone; CPU iPhone OS 17_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.6 Mobile/15E148 Safari/604.1".to_string(),
        BrowserProfile::Android => format!(
            "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{} Mobile Safari/537.36",
            CHROME_VERSION
        ),
        BrowserProfile::Windows => format!(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{v} Safari/537.36 Edg/{v}",
            v = CHROME_VERSION
        ),
        BrowserProfile::Mac => "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.6 Safari/605.1.15".to_string(),
        BrowserProfile::Linux => format!(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{} Safari/537.36",
            CHROME_VERSION
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_user_agent_chrome() {
        let ua = generate_user_agent(Some(BrowserProfile::Chrome));
        assert!(ua.contains("Chrome/131.0.0.0"));
        assert!(ua.contains("Mozilla/5.0"));
        assert!(ua.contains("Windows NT 10.0"));
    }

    #[test]
    fn test_generate_user_agent_mobile_is_phone() {
        for _ in 0..10 {
            let ua = generate_user_agent(Some(BrowserProfile::Mobile));
            assert!(ua.contains("iPhone") || ua.contains("Android"), "{}", ua);
        }
    }

    #[test]
    fn test_generate_user_agent_random_is_never_empty() {
        for _ in 0..20 {
            let ua = generate_user_agent(None);
            assert!(ua.starts_with("Mozilla/5.0"));
        }
    }

    #[test]
    fn test_every_profile_generates() {
        for profile in BrowserProfile::iter() {
            assert!(!generate_user_agent(Some(profile)).is_empty());
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(BrowserProfile::from_name("firefox"), Some(BrowserProfile::Firefox));
        assert_eq!(BrowserProfile::from_name("IPhone"), Some(BrowserProfile::Iphone));
        assert_eq!(BrowserProfile::from_name(" mac "), Some(BrowserProfile::Mac));
        assert_eq!(BrowserProfile::from_name("netscape"), None);
        assert_eq!(BrowserProfile::from_name(""), None);
    }

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(BrowserProfile::Iphone.to_string(), "iphone");
        let name: &'static str = BrowserProfile::Explorer.into();
        assert_eq!(name, "explorer");
    }
}
