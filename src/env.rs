//! Environment sniffers: device, browser, and cookie classification.
//!
//! Every sniffer reads an explicit [`Env`] snapshot instead of hidden
//! host globals, so tests can pin behavior against injected fakes. The
//! classifications are best-effort heuristics over the user-agent and
//! vendor strings plus the presence of a few host objects; they carry no
//! correctness guarantee beyond pattern matching.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static ANDROID: LazyLock<Regex> = LazyLock::new(|| ua_pattern("Android"));
static WEBOS: LazyLock<Regex> = LazyLock::new(|| ua_pattern("webOS"));
static IPHONE: LazyLock<Regex> = LazyLock::new(|| ua_pattern("iPhone"));
static IPAD: LazyLock<Regex> = LazyLock::new(|| ua_pattern("iPad"));
static IPOD: LazyLock<Regex> = LazyLock::new(|| ua_pattern("iPod"));
static BLACKBERRY: LazyLock<Regex> = LazyLock::new(|| ua_pattern("BlackBerry"));
static WINDOWS_PHONE: LazyLock<Regex> =
    LazyLock::new(|| ua_pattern("Windows Phone|IEMobile|WPDesktop"));

fn ua_pattern(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){pattern}")).expect("user-agent pattern compiles")
}

/// Presence flags for the host globals the browser sniffers probe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    /// `chrome.runtime` / `chrome.webstore` object present.
    pub chrome_runtime: bool,
    /// `InstallTrigger` global present (Firefox).
    pub install_trigger: bool,
    /// Safari push-notification signature present.
    pub safari_push: bool,
    /// `opr.addons` or `opera` global present.
    pub opera_addons: bool,
    /// `document.documentMode` present (Internet Explorer).
    pub document_mode: bool,
    /// `StyleMedia` global present (legacy Edge).
    pub style_media: bool,
    /// `CSS` global present (Blink-engine check).
    pub css: bool,
}

/// An immutable snapshot of ambient browser state.
///
/// # Examples
///
/// ```
/// use isit::Env;
///
/// let env = Env::builder()
///     .user_agent("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)")
///     .cookie_enabled(true)
///     .build();
///
/// assert!(env.mobile_iphone());
/// assert!(env.mobile_any());
/// assert!(!env.desktop());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Env {
    /// The host's user-agent string.
    pub user_agent: String,
    /// The host's vendor string.
    pub vendor: String,
    /// Whether the host reports cookies enabled.
    pub cookie_enabled: bool,
    /// Host-global presence flags.
    pub features: Features,
}

impl Env {
    /// Starts building an environment snapshot.
    #[must_use]
    pub fn builder() -> EnvBuilder {
        EnvBuilder::default()
    }

    /// Check if cookies are enabled.
    #[must_use]
    pub const fn cookie_enabled(&self) -> bool {
        self.cookie_enabled
    }

    /// Check if the visitor arrived from an Android device.
    #[must_use]
    pub fn mobile_android(&self) -> bool {
        ANDROID.is_match(&self.user_agent)
    }

    /// Check if the visitor arrived from a webOS device.
    #[must_use]
    pub fn mobile_webos(&self) -> bool {
        WEBOS.is_match(&self.user_agent)
    }

    /// Check if the visitor arrived from an iPhone.
    #[must_use]
    pub fn mobile_iphone(&self) -> bool {
        IPHONE.is_match(&self.user_agent)
    }

    /// Check if the visitor arrived from an iPad.
    #[must_use]
    pub fn mobile_ipad(&self) -> bool {
        IPAD.is_match(&self.user_agent)
    }

    /// Check if the visitor arrived from an iPod.
    #[must_use]
    pub fn mobile_ipod(&self) -> bool {
        IPOD.is_match(&self.user_agent)
    }

    /// Check if the visitor arrived from a BlackBerry device.
    #[must_use]
    pub fn mobile_blackberry(&self) -> bool {
        BLACKBERRY.is_match(&self.user_agent)
    }

    /// Check if the visitor arrived from a Windows Phone device.
    #[must_use]
    pub fn mobile_windows(&self) -> bool {
        WINDOWS_PHONE.is_match(&self.user_agent)
    }

    /// Check if the visitor arrived from any recognized mobile device.
    #[must_use]
    pub fn mobile_any(&self) -> bool {
        self.mobile_android()
            || self.mobile_webos()
            || self.mobile_iphone()
            || self.mobile_ipad()
            || self.mobile_ipod()
            || self.mobile_blackberry()
            || self.mobile_windows()
    }

    /// Check if the visitor arrived from a desktop, i.e. from no
    /// recognized mobile device.
    #[must_use]
    pub fn desktop(&self) -> bool {
        !self.mobile_any()
    }

    /// Check if the visitor's browser looks like Chrome.
    #[must_use]
    pub const fn browser_chrome(&self) -> bool {
        self.features.chrome_runtime
    }

    /// Check if the visitor's browser looks like Firefox.
    #[must_use]
    pub const fn browser_firefox(&self) -> bool {
        self.features.install_trigger
    }

    /// Check if the visitor's browser looks like Safari.
    #[must_use]
    pub const fn browser_safari(&self) -> bool {
        self.features.safari_push
    }

    /// Check if the visitor's browser looks like Opera.
    #[must_use]
    pub fn browser_opera(&self) -> bool {
        self.features.opera_addons || self.user_agent.contains(" OPR/")
    }

    /// Check if the visitor's browser looks like Internet Explorer.
    #[must_use]
    pub const fn browser_ie(&self) -> bool {
        self.features.document_mode
    }

    /// Check if the visitor's browser looks like legacy (EdgeHTML) Edge.
    #[must_use]
    pub const fn browser_edge(&self) -> bool {
        !self.features.document_mode && self.features.style_media
    }

    /// Check if the visitor's browser looks like Chromium-based Edge.
    #[must_use]
    pub fn browser_edge_chromium(&self) -> bool {
        self.user_agent.contains("Edg/")
    }

    /// Check if the visitor's browser runs the Blink engine: a Chrome or
    /// Firefox signature together with the `CSS` global.
    #[must_use]
    pub const fn browser_blink(&self) -> bool {
        (self.browser_chrome() || self.browser_firefox()) && self.features.css
    }
}

/// Builder for [`Env`] snapshots. Everything defaults to absent.
#[derive(Debug, Clone, Default)]
pub struct EnvBuilder {
    env: Env,
}

impl EnvBuilder {
    /// Sets the user-agent string.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.env.user_agent = user_agent.into();
        self
    }

    /// Sets the vendor string.
    #[must_use]
    pub fn vendor(mut self, vendor: impl Into<String>) -> Self {
        self.env.vendor = vendor.into();
        self
    }

    /// Sets the cookie-enabled flag.
    #[must_use]
    pub const fn cookie_enabled(mut self, enabled: bool) -> Self {
        self.env.cookie_enabled = enabled;
        self
    }

    /// Sets the host-global presence flags.
    #[must_use]
    pub const fn features(mut self, features: Features) -> Self {
        self.env.features = features;
        self
    }

    /// Finishes the snapshot.
    #[must_use]
    pub fn build(self) -> Env {
        self.env
    }
}
