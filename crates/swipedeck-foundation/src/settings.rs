//! Configuration for swipe tracking and route helpers.

use crate::gesture_constants::{FALLBACK_VIEWPORT_WIDTH, SWIPE_THRESHOLD_FRACTION};

/// Tuning for a swipe tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeSettings {
    /// Fraction of the viewport width a release must clear.
    pub threshold_fraction: f64,
    /// Width assumed when the host reports none.
    pub fallback_viewport_width: f64,
}

impl Default for SwipeSettings {
    fn default() -> Self {
        Self {
            threshold_fraction: SWIPE_THRESHOLD_FRACTION,
            fallback_viewport_width: FALLBACK_VIEWPORT_WIDTH,
        }
    }
}

impl SwipeSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold_fraction(mut self, fraction: f64) -> Self {
        self.threshold_fraction = fraction;
        self
    }

    pub fn with_fallback_viewport_width(mut self, width: f64) -> Self {
        self.fallback_viewport_width = width;
        self
    }

    /// Threshold in CSS pixels for the given viewport width.
    ///
    /// An unreported, zero, or NaN width uses `fallback_viewport_width`.
    pub fn threshold(&self, viewport_width: Option<f64>) -> f64 {
        let width = viewport_width
            .filter(|w| *w != 0.0 && !w.is_nan())
            .unwrap_or(self.fallback_viewport_width);
        width * self.threshold_fraction
    }
}

/// Deployment paths used by the location helpers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteSettings {
    /// Prefix the app is served under. Always ends with `/`.
    base_path: String,
    /// Path reported when there is no browsing context.
    fallback_path: String,
}

impl Default for RouteSettings {
    fn default() -> Self {
        Self {
            base_path: "/".into(),
            fallback_path: "/r/".into(),
        }
    }
}

impl RouteSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base path. A missing leading or trailing slash is added.
    pub fn with_base_path(mut self, base: impl Into<String>) -> Self {
        let mut base = base.into();
        if !base.starts_with('/') {
            base.insert(0, '/');
        }
        if !base.ends_with('/') {
            base.push('/');
        }
        self.base_path = base;
        self
    }

    pub fn with_fallback_path(mut self, path: impl Into<String>) -> Self {
        self.fallback_path = path.into();
        self
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn fallback_path(&self) -> &str {
        &self.fallback_path
    }

    /// Strip the base path from a host pathname, keeping the leading slash.
    pub fn strip_base<'a>(&self, pathname: &'a str) -> &'a str {
        if pathname.starts_with(self.base_path.as_str()) {
            &pathname[self.base_path.len() - 1..]
        } else {
            pathname
        }
    }

    /// Prefix an app path with the base path (without its trailing slash).
    pub fn with_base(&self, path: &str) -> String {
        if self.base_path == "/" {
            path.to_owned()
        } else {
            format!("{}{}", &self.base_path[..self.base_path.len() - 1], path)
        }
    }
}
